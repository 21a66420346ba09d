use crate::domain::Competition;

/// Whole-collection storage for competitions
///
/// Same load-all/save-all contract as [`ClubPort`](super::club::ClubPort).
#[mockall::automock]
#[async_trait::async_trait]
pub trait CompetitionPort {
    async fn load_competitions(&self) -> Result<Vec<Competition>, Error>;
    async fn save_competitions(&self, competitions: Vec<Competition>) -> Result<(), Error>;
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Concrete adapter errors
    #[error("adapter error: {0:?}")]
    Adapter(Box<dyn std::error::Error + Send + Sync>),
}
