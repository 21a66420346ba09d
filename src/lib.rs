//! Booking of competition places by clubs spending their points.
//!
//! The crate is split into the `domain` rules, the `ports` it drives, the `adapters`
//! implementing those ports, and the `commands` exposing each use case as a `tower::Service`.

pub mod adapters;
pub mod commands;
pub mod domain;
pub mod ports;
