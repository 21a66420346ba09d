use std::{
    future::Future,
    pin::Pin,
    task::{Context, Poll},
};

use crate::{
    domain::{booking::Rejection, limit::remaining_places, Club, Competition},
    ports::{club::ClubPort, competition::CompetitionPort},
};
use tower::Service;

use super::{load_clubs, load_competitions, DomainLogic, Error};

/// Fetch what a club needs to see before booking places in a competition
pub struct BookRequest {
    pub competition: String,
    pub club: String,
}

#[derive(Debug, PartialEq, Eq)]
pub struct BookResponse {
    pub club: Club,
    pub competition: Competition,
    /// Places the club may still book in this competition
    pub remaining_places: u32,
}

impl<C, P, K> Service<BookRequest> for DomainLogic<C, P, K>
where
    C: ClubPort + 'static,
    P: CompetitionPort + 'static,
{
    type Response = BookResponse;
    type Error = Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>>>>;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, req: BookRequest) -> Self::Future {
        let club_port = self.clubs.clone();
        let competition_port = self.competitions.clone();
        Box::pin(async move {
            let clubs = load_clubs(club_port.as_ref()).await;
            let competitions = load_competitions(competition_port.as_ref()).await;

            let club = clubs.into_iter().find(|club| club.name == req.club);
            let competition = competitions
                .into_iter()
                .find(|competition| competition.name == req.competition);

            match (club, competition) {
                (Some(club), Some(competition)) => Ok(BookResponse {
                    remaining_places: remaining_places(&club, &competition),
                    club,
                    competition,
                }),
                _ => Err(Error::Rejected(Rejection::InvalidClubOrCompetition)),
            }
        })
    }
}
