use std::{
    future::Future,
    pin::Pin,
    task::{Context, Poll},
};

use crate::{
    domain::{booking::Rejection, Club},
    ports::club::ClubPort,
};
use tower::Service;

use super::{load_clubs, DomainLogic, Error};

/// Public board listing the points of every club
pub struct ClubPointsRequest;

#[derive(Debug, PartialEq, Eq)]
pub struct ClubPointsResponse {
    pub clubs: Vec<Club>,
}

impl<C, P, K> Service<ClubPointsRequest> for DomainLogic<C, P, K>
where
    C: ClubPort + 'static,
{
    type Response = ClubPointsResponse;
    type Error = Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>>>>;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, _req: ClubPointsRequest) -> Self::Future {
        let club_port = self.clubs.clone();
        Box::pin(async move {
            let clubs = load_clubs(club_port.as_ref()).await;
            if clubs.is_empty() {
                return Err(Error::Rejected(Rejection::Loading));
            }

            Ok(ClubPointsResponse { clubs })
        })
    }
}
