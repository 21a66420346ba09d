use chrono::NaiveDateTime;

/// Source of the current time, compared against competition dates
#[mockall::automock]
pub trait ClockPort {
    /// Current local time, without a timezone like the stored competition dates
    fn now(&self) -> NaiveDateTime;
}
