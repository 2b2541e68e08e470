//! Low-stock threshold value object

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;

/// Stock level below which an item counts as low stock.
///
/// Always positive. Items created without an explicit threshold get
/// [`Threshold::DEFAULT`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Threshold(u32);

impl Threshold {
    /// Threshold applied when none is supplied at creation.
    pub const DEFAULT: Threshold = Threshold(5);

    /// Create a validated threshold.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if `value` is zero.
    pub fn new(value: u32) -> Result<Self, DomainError> {
        if value == 0 {
            return Err(DomainError::validation("Threshold must be at least 1"));
        }
        Ok(Self(value))
    }

    pub fn value(self) -> u32 {
        self.0
    }

    /// Whether `quantity` is strictly below this threshold.
    pub fn is_breached_by(self, quantity: u32) -> bool {
        quantity < self.0
    }
}

impl Default for Threshold {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for Threshold {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<u32> for Threshold {
    type Error = DomainError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Threshold> for u32 {
    fn from(threshold: Threshold) -> u32 {
        threshold.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_five() {
        assert_eq!(Threshold::default().value(), 5);
    }

    #[test]
    fn zero_rejected() {
        let err = Threshold::new(0).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn breach_is_strict() {
        let threshold = Threshold::new(5).unwrap();
        assert!(threshold.is_breached_by(4));
        assert!(!threshold.is_breached_by(5));
        assert!(!threshold.is_breached_by(6));
    }

    #[test]
    fn deserialize_rejects_zero() {
        assert!(serde_json::from_str::<Threshold>("0").is_err());
        assert_eq!(serde_json::from_str::<Threshold>("3").unwrap().value(), 3);
    }
}
