use chrono::NaiveDateTime;

/// Format used to store competition dates
pub const COMPETITION_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Parse a stored competition date
///
/// Returns `None` for anything that is not a valid `YYYY-MM-DD HH:MM:SS` timestamp, including
/// calendar-invalid values such as a 32nd day.
pub fn parse_competition_date(date: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(date, COMPETITION_DATE_FORMAT).ok()
}

/// Whether the competition started strictly before `now`
pub fn is_competition_past(competition_date: NaiveDateTime, now: NaiveDateTime) -> bool {
    competition_date < now
}
