//! Port traits for the client's external dependencies.

pub mod outbound;
