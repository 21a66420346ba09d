use std::num::{IntErrorKind, ParseIntError};

use chrono::NaiveDateTime;

use super::{
    date::{is_competition_past, parse_competition_date},
    limit::remaining_places,
    Club, Competition, MAX_PLACES_PER_BOOKING,
};

/// Reasons a request against the club and competition records is turned down
///
/// The `Display` output of each variant is the message shown to the user, so every reason must
/// stay distinguishable from the others.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Rejection {
    /// The club or competition collection could not be loaded, or is empty
    #[error("Error loading clubs or competitions. Please try again later.")]
    Loading,
    #[error("Please introduce an email.")]
    EmailEmpty,
    #[error("Sorry, that email was not found. Please try again.")]
    EmailNotFound,
    #[error("Invalid club or competition.")]
    InvalidClubOrCompetition,
    /// The stored competition date does not follow `YYYY-MM-DD HH:MM:SS`
    #[error("Invalid competition date format.")]
    InvalidDateFormat,
    #[error("You cannot book places for a competition that has already taken place.")]
    PastCompetition,
    /// The requested number of places is not an integer
    #[error("Invalid number of places requested.")]
    InvalidPlaces,
    #[error("Number of places requested must be greater than zero.")]
    NonPositivePlaces,
    #[error("Cannot book more than 12 places.")]
    MaxPlacesPerBooking,
    /// The request would take the club above its per-competition cap
    #[error("You can only book {remaining} more place(s) for this competition.")]
    ExceedsRemainingLimit { remaining: u32 },
    /// The stored club points are not an integer
    #[error("Invalid points value for the club")]
    InvalidPoints,
    #[error("You do not have enough points to reserve these places.")]
    InsufficientPoints,
    /// The stored number of places is not an integer
    #[error("Invalid number of places")]
    InvalidNumberOfPlaces,
    #[error("This competition is full.")]
    CompetitionFull,
    #[error("There are not enough places available for this competition.")]
    InsufficientPlaces,
}

/// A purchase that passed every check and can be applied to the ledger
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApprovedPurchase {
    pub club: Club,
    pub competition: Competition,
    /// Number of places to book, between 1 and the per-booking cap
    pub places: u32,
    /// Points held by the club when the purchase was approved
    pub(crate) points_available: i128,
    /// Places left in the competition when the purchase was approved
    pub(crate) places_available: i128,
}

/// Validate a purchase of `places` places for a club in a competition
///
/// Checks run in a fixed order and the first failing one is returned:
///
/// 1. both collections are loaded
/// 2. the club and competition exist
/// 3. the competition date is valid and not in the past
/// 4. the requested places are a positive integer within the per-booking cap
/// 5. the club stays within its per-competition cap
/// 6. the club has enough points
/// 7. the competition has enough places
///
/// Nothing is mutated: the records are cloned into the [`ApprovedPurchase`].
pub fn validate_purchase(
    clubs: &[Club],
    competitions: &[Competition],
    competition_name: &str,
    club_name: &str,
    places: &str,
    now: NaiveDateTime,
) -> Result<ApprovedPurchase, Rejection> {
    if clubs.is_empty() || competitions.is_empty() {
        return Err(Rejection::Loading);
    }

    let competition = competitions.iter().find(|c| c.name == competition_name);
    let club = clubs.iter().find(|c| c.name == club_name);
    let (club, competition) = match (club, competition) {
        (Some(club), Some(competition)) => (club, competition),
        _ => return Err(Rejection::InvalidClubOrCompetition),
    };

    let competition_date =
        parse_competition_date(&competition.date).ok_or(Rejection::InvalidDateFormat)?;
    if is_competition_past(competition_date, now) {
        return Err(Rejection::PastCompetition);
    }

    let places = parse_requested_places(places)?;
    let remaining = remaining_places(club, competition);
    if places > remaining {
        return Err(Rejection::ExceedsRemainingLimit { remaining });
    }

    let points_available = parse_stored_integer(&club.points).ok_or(Rejection::InvalidPoints)?;
    if points_available < i128::from(places) {
        return Err(Rejection::InsufficientPoints);
    }

    let places_available = parse_stored_integer(&competition.number_of_places)
        .ok_or(Rejection::InvalidNumberOfPlaces)?;
    if places_available <= 0 {
        return Err(Rejection::CompetitionFull);
    }
    if places_available < i128::from(places) {
        return Err(Rejection::InsufficientPlaces);
    }

    Ok(ApprovedPurchase {
        club: club.clone(),
        competition: competition.clone(),
        places,
        points_available,
        places_available,
    })
}

/// Parse the number of places requested by the user and apply the per-booking bounds
fn parse_requested_places(places: &str) -> Result<u32, Rejection> {
    let places: i64 = places.trim().parse().map_err(|err: ParseIntError| match err.kind() {
        IntErrorKind::PosOverflow => Rejection::MaxPlacesPerBooking,
        IntErrorKind::NegOverflow => Rejection::NonPositivePlaces,
        _ => Rejection::InvalidPlaces,
    })?;
    if places <= 0 {
        return Err(Rejection::NonPositivePlaces);
    }
    if places > i64::from(MAX_PLACES_PER_BOOKING) {
        return Err(Rejection::MaxPlacesPerBooking);
    }

    // Bounded by the checks above
    Ok(places as u32)
}

/// Parse a stored point or place count
///
/// Counts are unbounded in the stored documents, so they are read into `i128`. Values beyond
/// that range are treated as malformed.
fn parse_stored_integer(value: &str) -> Option<i128> {
    value.trim().parse().ok()
}
