//! Application state and composition.

use std::sync::Arc;

use crate::infrastructure::{
    clock::SystemClock,
    ports::{ClockPort, ItemRepo},
};
use crate::use_cases::InventoryUseCases;

/// Main application state.
///
/// Holds the use cases, which own the repository ports.
/// Passed to HTTP handlers via Axum state.
pub struct App {
    pub use_cases: UseCases,
}

/// Container for all use cases.
pub struct UseCases {
    pub inventory: InventoryUseCases,
}

impl App {
    /// Create a new App with all dependencies wired up.
    pub fn new(item_repo: Arc<dyn ItemRepo>) -> Self {
        Self::with_clock(item_repo, Arc::new(SystemClock::new()))
    }

    /// Create an App with an explicit clock, used by tests to pin `date_added`.
    pub fn with_clock(item_repo: Arc<dyn ItemRepo>, clock: Arc<dyn ClockPort>) -> Self {
        Self {
            use_cases: UseCases {
                inventory: InventoryUseCases::new(item_repo, clock),
            },
        }
    }
}
