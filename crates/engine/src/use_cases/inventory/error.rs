//! Inventory operation errors.

use crate::infrastructure::ports::RepoError;
use crate::use_cases::validation::ValidationError;
use stockwatch_domain::DomainError;

/// Errors that can occur during inventory operations.
#[derive(Debug, thiserror::Error)]
pub enum InventoryError {
    #[error("{0}")]
    Validation(#[from] ValidationError),
    #[error("{0}")]
    Domain(#[from] DomainError),
    #[error("Repository error: {0}")]
    Repo(#[from] RepoError),
}

impl InventoryError {
    /// True when the caller sent bad input, as opposed to a store failure.
    pub fn is_invalid_input(&self) -> bool {
        match self {
            Self::Validation(_) => true,
            Self::Domain(e) => e.is_invalid_input(),
            Self::Repo(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_and_domain_errors_are_invalid_input() {
        let missing = InventoryError::from(ValidationError::missing([("name", true)]));
        assert!(missing.is_invalid_input());

        let category = InventoryError::from(DomainError::parse("Unknown category: Toys"));
        assert!(category.is_invalid_input());
    }

    #[test]
    fn repo_errors_are_not_invalid_input() {
        let err = InventoryError::from(RepoError::database("items.list", "disk I/O error"));
        assert!(!err.is_invalid_input());
        assert!(err.to_string().contains("disk I/O error"));
    }
}
