pub mod clock;
pub mod club;
pub mod competition;
