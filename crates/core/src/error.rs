//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic, business/domain failures. Transport
/// concerns (status codes, JSON bodies) belong to the API crate.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A requested part does not exist or has too little stock on hand.
    ///
    /// The message is fixed and surfaced verbatim to API clients.
    #[error("Part not available or insufficient quantity.")]
    InsufficientInventory,

    /// A value failed validation (e.g. malformed input).
    #[error("validation failed: {0}")]
    Validation(String),

    /// A requested resource was not found.
    #[error("not found")]
    NotFound,

    /// A line or order total exceeds the largest representable amount.
    #[error("Order total is too large.")]
    AmountOutOfRange,
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn not_found() -> Self {
        Self::NotFound
    }

    pub fn insufficient_inventory() -> Self {
        Self::InsufficientInventory
    }

    pub fn amount_out_of_range() -> Self {
        Self::AmountOutOfRange
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insufficient_inventory_message_is_fixed() {
        assert_eq!(
            DomainError::insufficient_inventory().to_string(),
            "Part not available or insufficient quantity."
        );
    }

    #[test]
    fn validation_message_carries_detail() {
        let err = DomainError::validation("price must be positive");
        assert_eq!(err.to_string(), "validation failed: price must be positive");
    }
}
