use std::sync::Arc;

use tower::{Service, ServiceExt};
use tracing::warn;

use crate::{
    domain::{booking::Rejection, Club, Competition},
    ports::{club::ClubPort, competition::CompetitionPort},
};

pub mod book;
pub mod club_points;
pub mod purchase_places;
pub mod show_summary;

/// Entry point for every use case
///
/// Each command is a [`tower::Service`] implementation on this type. Collections are loaded fresh
/// from the ports on every call; nothing is cached between requests.
pub struct DomainLogic<C, P, K> {
    clubs: Arc<C>,
    competitions: Arc<P>,
    clock: Arc<K>,
}

impl<C, P, K> DomainLogic<C, P, K> {
    pub fn new(clubs: Arc<C>, competitions: Arc<P>, clock: Arc<K>) -> Self {
        Self {
            clubs,
            competitions,
            clock,
        }
    }
}

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum Error {
    #[error(transparent)]
    Rejected(#[from] Rejection),

    /// The purchase was valid but could not be written back to storage
    #[error("An error occurred while saving your booking. Please try again.")]
    SaveChanges,
}

/// Wait for `service` to be ready and send it a single request
///
/// `DomainLogic` serves several request types, so this pins the request type for callers that
/// would otherwise have to name it on [`ServiceExt::ready`].
pub async fn execute<S, R>(service: &mut S, request: R) -> Result<S::Response, S::Error>
where
    S: Service<R>,
{
    service.ready().await?.call(request).await
}

/// Load every club, treating a storage failure as an empty collection
async fn load_clubs<C: ClubPort>(port: &C) -> Vec<Club> {
    port.load_clubs().await.unwrap_or_else(|err| {
        warn!(error = %err, "unable to load clubs");
        Vec::new()
    })
}

/// Load every competition, treating a storage failure as an empty collection
async fn load_competitions<P: CompetitionPort>(port: &P) -> Vec<Competition> {
    port.load_competitions().await.unwrap_or_else(|err| {
        warn!(error = %err, "unable to load competitions");
        Vec::new()
    })
}
