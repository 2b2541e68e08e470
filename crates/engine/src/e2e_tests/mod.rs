//! Backend E2E integration tests.
//!
//! These tests drive the full router with a real SQLite item store in a
//! temporary directory:
//! - Complete App construction with all use cases
//! - Requests go through `api::router`, tracing and CORS layers included
//!
//! # Running E2E Tests
//!
//! ```bash
//! cargo test -p stockwatch-engine --lib e2e_tests
//! ```

mod e2e_helpers;

pub use e2e_helpers::*;
