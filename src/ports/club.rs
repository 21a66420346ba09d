use crate::domain::Club;

/// Whole-collection storage for clubs
///
/// There is no row-level update: callers load every club, change records in memory and save the
/// full collection back. Two callers doing this at the same time can overwrite each other.
#[mockall::automock]
#[async_trait::async_trait]
pub trait ClubPort {
    async fn load_clubs(&self) -> Result<Vec<Club>, Error>;
    async fn save_clubs(&self, clubs: Vec<Club>) -> Result<(), Error>;
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Concrete adapter errors
    ///
    /// This could represent any errors from a concrete adapter that is not part of the domain
    /// model, such as missing files, malformed documents, or permission errors.
    #[error("adapter error: {0:?}")]
    Adapter(Box<dyn std::error::Error + Send + Sync>),
}
