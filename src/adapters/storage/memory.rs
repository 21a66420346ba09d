use crate::{
    domain::{Club, Competition},
    ports::{club, club::ClubPort, competition, competition::CompetitionPort},
};
use std::sync::{Arc, Mutex, PoisonError};

/// Club and competition collections kept in memory
///
/// Clones share the same collections. Loads hand out copies, so records returned to a caller are
/// plain data and never alias what is stored.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    clubs: Arc<Mutex<Vec<Club>>>,
    competitions: Arc<Mutex<Vec<Competition>>>,
}

impl MemoryStore {
    pub fn new(clubs: Vec<Club>, competitions: Vec<Competition>) -> Self {
        Self {
            clubs: Arc::new(Mutex::new(clubs)),
            competitions: Arc::new(Mutex::new(competitions)),
        }
    }
}

#[async_trait::async_trait]
impl ClubPort for MemoryStore {
    async fn load_clubs(&self) -> Result<Vec<Club>, club::Error> {
        Ok(self.clubs.lock()?.clone())
    }

    async fn save_clubs(&self, clubs: Vec<Club>) -> Result<(), club::Error> {
        *self.clubs.lock()? = clubs;
        Ok(())
    }
}

#[async_trait::async_trait]
impl CompetitionPort for MemoryStore {
    async fn load_competitions(&self) -> Result<Vec<Competition>, competition::Error> {
        Ok(self.competitions.lock()?.clone())
    }

    async fn save_competitions(
        &self,
        competitions: Vec<Competition>,
    ) -> Result<(), competition::Error> {
        *self.competitions.lock()? = competitions;
        Ok(())
    }
}

/// Erased [`PoisonError`]
///
/// `PoisonError` keeps the `MutexGuard` internally, which is not send. Thus we erase the error
/// and only keep the string representation instead.
#[derive(Debug, thiserror::Error)]
#[error("poison error: {0}")]
pub struct ErasedPoisonError(String);

impl<T> From<PoisonError<T>> for club::Error {
    fn from(err: PoisonError<T>) -> Self {
        Self::Adapter(Box::new(ErasedPoisonError(err.to_string())))
    }
}

impl<T> From<PoisonError<T>> for competition::Error {
    fn from(err: PoisonError<T>) -> Self {
        Self::Adapter(Box::new(ErasedPoisonError(err.to_string())))
    }
}
