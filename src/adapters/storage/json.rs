use crate::{
    domain::{Club, Competition},
    ports::{club, club::ClubPort, competition, competition::CompetitionPort},
};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Clubs and competitions stored as two JSON documents
///
/// The documents are `{"clubs": [...]}` and `{"competitions": [...]}`, written with a 4-space
/// indent. Every save rewrites the whole file.
#[derive(Clone, Debug)]
pub struct JsonFileStore {
    clubs_path: PathBuf,
    competitions_path: PathBuf,
}

impl JsonFileStore {
    pub fn new(clubs_path: impl Into<PathBuf>, competitions_path: impl Into<PathBuf>) -> Self {
        Self {
            clubs_path: clubs_path.into(),
            competitions_path: competitions_path.into(),
        }
    }
}

#[derive(Serialize, Deserialize)]
struct ClubsDocument {
    clubs: Vec<Club>,
}

#[derive(Serialize, Deserialize)]
struct CompetitionsDocument {
    competitions: Vec<Competition>,
}

#[async_trait::async_trait]
impl ClubPort for JsonFileStore {
    async fn load_clubs(&self) -> Result<Vec<Club>, club::Error> {
        let document: ClubsDocument = read_document(&self.clubs_path).await?;
        Ok(document.clubs)
    }

    async fn save_clubs(&self, clubs: Vec<Club>) -> Result<(), club::Error> {
        write_document(&self.clubs_path, &ClubsDocument { clubs }).await?;
        Ok(())
    }
}

#[async_trait::async_trait]
impl CompetitionPort for JsonFileStore {
    async fn load_competitions(&self) -> Result<Vec<Competition>, competition::Error> {
        let document: CompetitionsDocument = read_document(&self.competitions_path).await?;
        Ok(document.competitions)
    }

    async fn save_competitions(
        &self,
        competitions: Vec<Competition>,
    ) -> Result<(), competition::Error> {
        write_document(&self.competitions_path, &CompetitionsDocument { competitions }).await?;
        Ok(())
    }
}

async fn read_document<T: DeserializeOwned>(path: &Path) -> Result<T, JsonStoreError> {
    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| JsonStoreError::Io {
            path: path.to_path_buf(),
            source,
        })?;
    serde_json::from_str(&content).map_err(|source| JsonStoreError::Json {
        path: path.to_path_buf(),
        source,
    })
}

async fn write_document<T: Serialize>(path: &Path, document: &T) -> Result<(), JsonStoreError> {
    let mut content = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut content, formatter);
    document
        .serialize(&mut serializer)
        .map_err(|source| JsonStoreError::Json {
            path: path.to_path_buf(),
            source,
        })?;

    tokio::fs::write(path, content)
        .await
        .map_err(|source| JsonStoreError::Io {
            path: path.to_path_buf(),
            source,
        })
}

/// Errors specific to the JSON file adapter
#[derive(Debug, thiserror::Error)]
pub enum JsonStoreError {
    #[error("cannot access {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("malformed document {path:?}: {source}")]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
}

impl From<JsonStoreError> for club::Error {
    fn from(err: JsonStoreError) -> Self {
        Self::Adapter(Box::new(err))
    }
}

impl From<JsonStoreError> for competition::Error {
    fn from(err: JsonStoreError) -> Self {
        Self::Adapter(Box::new(err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::BookedPlaces;
    use rstest::*;
    use speculoos::prelude::*;
    use tempfile::TempDir;

    #[fixture]
    fn dir() -> TempDir {
        tempfile::tempdir().unwrap()
    }

    fn store(dir: &TempDir) -> JsonFileStore {
        JsonFileStore::new(
            dir.path().join("clubs.json"),
            dir.path().join("competitions.json"),
        )
    }

    #[rstest]
    #[tokio::test]
    async fn test_load_clubs(dir: TempDir) {
        // GIVEN a clubs document on disk
        std::fs::write(
            dir.path().join("clubs.json"),
            r#"{"clubs": [
                {"name": "Club A", "email": "cluba@example.com", "points": "100"},
                {"name": "Club B", "email": "clubb@example.com", "points": "200"}
            ]}"#,
        )
        .unwrap();

        // WHEN loading the clubs
        let res = store(&dir).load_clubs().await;

        // THEN every club is returned in order
        assert_that!(res).is_ok().is_equal_to(vec![
            Club::new("Club A", "cluba@example.com", "100"),
            Club::new("Club B", "clubb@example.com", "200"),
        ]);
    }

    #[rstest]
    #[tokio::test]
    async fn test_load_competitions(dir: TempDir) {
        std::fs::write(
            dir.path().join("competitions.json"),
            r#"{"competitions": [
                {"name": "Competition A", "date": "2030-10-22 13:30:00", "numberOfPlaces": "25"},
                {"name": "Competition B", "date": "2020-06-15 13:30:00", "numberOfPlaces": "30",
                 "bookings": {"Club A": 4}}
            ]}"#,
        )
        .unwrap();

        let res = store(&dir).load_competitions().await;

        assert_that!(res).is_ok().matches(|competitions| {
            competitions.len() == 2
                && competitions[0].bookings.is_empty()
                && competitions[1].booked_by("Club A") == 4
        });
    }

    #[rstest]
    #[tokio::test]
    async fn test_load_competitions_with_malformed_bookings(dir: TempDir) {
        // GIVEN a competitions document where one booking entry is not a count
        std::fs::write(
            dir.path().join("competitions.json"),
            r#"{"competitions": [
                {"name": "Competition A", "date": "2030-10-22 13:30:00", "numberOfPlaces": "25",
                 "bookings": {"Club A": "four", "Club B": 3}},
                {"name": "Competition B", "date": "2030-06-15 13:30:00", "numberOfPlaces": "30"}
            ]}"#,
        )
        .unwrap();
        let store = store(&dir);

        // WHEN loading and saving the competitions back
        let loaded = store.load_competitions().await.unwrap();
        store.save_competitions(loaded.clone()).await.unwrap();
        let raw = std::fs::read_to_string(dir.path().join("competitions.json")).unwrap();

        // THEN every competition loads and the malformed entry is kept as stored
        assert_that!(loaded).has_length(2);
        assert_that!(loaded[0].booked_by("Club B")).is_equal_to(3);
        assert_that!(loaded[0].bookings.get("Club A")).is_equal_to(Some(
            &BookedPlaces::Malformed(serde_json::json!("four")),
        ));
        assert_that!(raw.as_str()).contains("\"Club A\": \"four\"");
    }

    #[rstest]
    #[tokio::test]
    async fn test_load_missing_file(dir: TempDir) {
        let store = store(&dir);

        assert_that!(store.load_clubs().await)
            .is_err()
            .matches(|err| matches!(err, club::Error::Adapter(_)));
        assert_that!(store.load_competitions().await)
            .is_err()
            .matches(|err| matches!(err, competition::Error::Adapter(_)));
    }

    #[rstest]
    #[case(r#"This is not JSON"#)]
    #[case(r#"{"teams": []}"#)]
    #[case(r#"{"clubs": [{"name": "Club A"}]}"#)]
    #[tokio::test]
    async fn test_load_malformed_clubs(dir: TempDir, #[case] content: &str) {
        std::fs::write(dir.path().join("clubs.json"), content).unwrap();

        let res = store(&dir).load_clubs().await;

        assert_that!(res).is_err();
    }

    #[rstest]
    #[tokio::test]
    async fn test_save_then_load(dir: TempDir) {
        // GIVEN collections saved through the adapter
        let store = store(&dir);
        let clubs = vec![Club::new("Simply Lift", "john@simplylift.co", "8")];
        let mut competition = Competition::new("Spring Festival", "2030-03-27 10:00:00", "20");
        competition.bookings.insert("Simply Lift".to_string(), BookedPlaces::Count(5));
        store.save_clubs(clubs.clone()).await.unwrap();
        store
            .save_competitions(vec![competition.clone()])
            .await
            .unwrap();

        // WHEN reading the raw document and loading it again
        let raw = std::fs::read_to_string(dir.path().join("competitions.json")).unwrap();
        let loaded_clubs = store.load_clubs().await;
        let loaded_competitions = store.load_competitions().await;

        // THEN the stored format is kept and the records are unchanged
        assert_that!(raw.as_str()).contains("\"numberOfPlaces\": \"20\"");
        assert_that!(raw.as_str()).contains("\n    \"competitions\"");
        assert_that!(loaded_clubs).is_ok().is_equal_to(clubs);
        assert_that!(loaded_competitions)
            .is_ok()
            .is_equal_to(vec![competition]);
    }

    #[rstest]
    #[tokio::test]
    async fn test_save_unwritable_path(dir: TempDir) {
        let store = JsonFileStore::new(
            dir.path().join("missing").join("clubs.json"),
            dir.path().join("missing").join("competitions.json"),
        );

        assert_that!(store.save_clubs(Vec::new()).await).is_err();
        assert_that!(store.save_competitions(Vec::new()).await).is_err();
    }
}
