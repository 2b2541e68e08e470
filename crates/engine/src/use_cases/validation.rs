//! Common validation helpers for use cases.

/// Validation error type.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Missing required fields: {}", .fields.join(", "))]
    Missing { fields: Vec<&'static str> },

    #[error("{field_name} cannot be negative")]
    Negative { field_name: &'static str },

    #[error("{field_name} exceeds maximum of {max}")]
    TooLarge { field_name: &'static str, max: u32 },
}

impl ValidationError {
    /// Build a `Missing` error from `(field, is_missing)` pairs.
    pub fn missing<I>(checks: I) -> Self
    where
        I: IntoIterator<Item = (&'static str, bool)>,
    {
        Self::Missing {
            fields: checks
                .into_iter()
                .filter_map(|(field, is_missing)| is_missing.then_some(field))
                .collect(),
        }
    }
}

/// Validate a wire integer is a non-negative count that fits in `u32`.
pub fn require_count(value: i64, field_name: &'static str) -> Result<u32, ValidationError> {
    if value < 0 {
        return Err(ValidationError::Negative { field_name });
    }
    u32::try_from(value).map_err(|_| ValidationError::TooLarge {
        field_name,
        max: u32::MAX,
    })
}
