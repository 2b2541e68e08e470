//! Common utility functions shared across the Stockwatch engine and client.
//!
//! Pure functions only: no side effects, no I/O.

pub mod datetime;

pub use datetime::{format_datetime, parse_datetime};
