use super::{Club, Competition, MAX_PLACES_PER_COMPETITION};

/// Number of places the club may still book in this competition
///
/// This is the per-competition cap minus what the club already holds, floored at zero when the
/// stored ledger is already above the cap.
pub fn remaining_places(club: &Club, competition: &Competition) -> u32 {
    MAX_PLACES_PER_COMPETITION.saturating_sub(competition.booked_by(&club.name))
}
