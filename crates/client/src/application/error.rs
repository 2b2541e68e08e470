//! Service layer error types
//!
//! Errors that can occur in the application service layer, abstracting over
//! the HTTP transport.

use stockwatch_domain::ItemId;

use crate::ports::outbound::ApiError;

/// Errors that can occur in service operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ServiceError {
    /// The request failed or the engine rejected it
    #[error(transparent)]
    Api(#[from] ApiError),

    /// The engine answered with data we could not turn into domain values
    #[error("Failed to parse response: {0}")]
    Parse(String),

    /// Input was rejected before anything was sent
    #[error("{0}")]
    Validation(String),

    /// The item is not in the cache or no longer exists on the engine
    #[error("Item not found: {0}")]
    ItemNotFound(ItemId),

    #[error("Cannot dispatch {requested} of {name}: {available} in stock")]
    InvalidDispatch {
        name: String,
        requested: u32,
        available: u32,
    },
}

impl ServiceError {
    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            ServiceError::ItemNotFound(_) | ServiceError::Api(ApiError::Status { status: 404, .. })
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_covers_local_and_remote_misses() {
        assert!(ServiceError::ItemNotFound(ItemId::new()).is_not_found());
        assert!(ServiceError::Api(ApiError::Status {
            status: 404,
            message: "Item not found".into(),
        })
        .is_not_found());
        assert!(!ServiceError::Validation("bad".into()).is_not_found());
    }

    #[test]
    fn invalid_dispatch_message_names_the_item() {
        let err = ServiceError::InvalidDispatch {
            name: "Widget".into(),
            requested: 3,
            available: 2,
        };
        assert_eq!(err.to_string(), "Cannot dispatch 3 of Widget: 2 in stock");
    }
}
