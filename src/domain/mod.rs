use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

pub mod booking;
pub mod date;
pub mod ledger;
pub mod limit;

/// Maximum number of places a single purchase may request
pub const MAX_PLACES_PER_BOOKING: u32 = 12;

/// Maximum number of places a club may hold in one competition across all purchases
pub const MAX_PLACES_PER_COMPETITION: u32 = 12;

/// A club spending points on competition places
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Club {
    /// Unique name of the club
    ///
    /// This is the key used in a competition's booking ledger.
    pub name: String,
    /// Unique email address, used to look the club up when it signs in
    pub email: String,
    /// Number of points available to the club
    ///
    /// Stored as a decimal string for compatibility with the persisted format. A value that does
    /// not parse as an integer makes the club unable to book.
    pub points: String,
}

impl Club {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        points: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            points: points.into(),
        }
    }
}

/// A competition with a limited number of places
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Competition {
    pub name: String,
    /// Start of the competition, in `YYYY-MM-DD HH:MM:SS` format
    pub date: String,
    /// Number of places still available, stored as a decimal string
    #[serde(rename = "numberOfPlaces")]
    pub number_of_places: String,
    /// Cumulative number of places booked by each club, keyed by club name
    ///
    /// A malformed entry does not prevent the document from loading. It is kept as stored and
    /// only blocks further bookings by that club in this competition.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub bookings: BTreeMap<String, BookedPlaces>,
}

/// One club's entry in a competition's booking ledger
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BookedPlaces {
    Count(u32),
    /// Anything that is not a non-negative integer, written back unchanged
    Malformed(serde_json::Value),
}

impl From<u32> for BookedPlaces {
    fn from(count: u32) -> Self {
        Self::Count(count)
    }
}

impl Competition {
    pub fn new(
        name: impl Into<String>,
        date: impl Into<String>,
        number_of_places: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            date: date.into(),
            number_of_places: number_of_places.into(),
            bookings: BTreeMap::new(),
        }
    }

    /// Places already booked by the given club
    ///
    /// A malformed entry counts as the full per-competition cap.
    pub fn booked_by(&self, club_name: &str) -> u32 {
        match self.bookings.get(club_name) {
            None => 0,
            Some(BookedPlaces::Count(count)) => *count,
            Some(BookedPlaces::Malformed(_)) => MAX_PLACES_PER_COMPETITION,
        }
    }
}
