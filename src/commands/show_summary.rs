use std::{
    future::Future,
    pin::Pin,
    task::{Context, Poll},
};

use crate::{
    domain::{booking::Rejection, Club, Competition},
    ports::{club::ClubPort, competition::CompetitionPort},
};
use tower::Service;
use tracing::debug;

use super::{load_clubs, load_competitions, DomainLogic, Error};

/// Sign a club in by its email address
pub struct ShowSummaryRequest {
    pub email: String,
}

#[derive(Debug, PartialEq, Eq)]
pub struct ShowSummaryResponse {
    pub club: Club,
    /// Every competition, past ones included
    pub competitions: Vec<Competition>,
}

impl<C, P, K> Service<ShowSummaryRequest> for DomainLogic<C, P, K>
where
    C: ClubPort + 'static,
    P: CompetitionPort + 'static,
{
    type Response = ShowSummaryResponse;
    type Error = Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>>>>;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, req: ShowSummaryRequest) -> Self::Future {
        let club_port = self.clubs.clone();
        let competition_port = self.competitions.clone();
        Box::pin(async move {
            let clubs = load_clubs(club_port.as_ref()).await;
            let competitions = load_competitions(competition_port.as_ref()).await;
            if clubs.is_empty() || competitions.is_empty() {
                return Err(Error::Rejected(Rejection::Loading));
            }

            if req.email.is_empty() {
                return Err(Error::Rejected(Rejection::EmailEmpty));
            }

            let club = clubs
                .into_iter()
                .find(|club| club.email == req.email)
                .ok_or(Rejection::EmailNotFound)?;
            debug!(club = %club.name, "club signed in");

            Ok(ShowSummaryResponse { club, competitions })
        })
    }
}
