//! Domain error model.

use thiserror::Error;

use crate::id::ItemId;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Every variant is recoverable: the operation that produced it made no
/// change to the collection.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    /// Insertion with an id that is already present.
    #[error("duplicate item_id: {0}")]
    DuplicateKey(ItemId),

    /// No item matched the given id or search key.
    #[error("item not found: {0}")]
    NotFound(String),

    /// A quantity argument was out of range (non-positive delta, negative stock, overflow).
    #[error("invalid quantity: {0}")]
    InvalidQuantity(i64),

    /// A sale asked for more units than are in stock.
    #[error("insufficient stock for item {item_id} (requested: {requested}, available: {available})")]
    InsufficientStock {
        item_id: ItemId,
        requested: i64,
        available: i64,
    },

    /// A price argument was negative or not a finite number.
    #[error("invalid price: {0}")]
    InvalidPrice(f64),
}

impl DomainError {
    pub fn not_found(key: impl core::fmt::Display) -> Self {
        Self::NotFound(key.to_string())
    }

    /// Stable short code, handy for structured log fields.
    pub fn code(&self) -> &'static str {
        match self {
            DomainError::DuplicateKey(_) => "duplicate_key",
            DomainError::NotFound(_) => "not_found",
            DomainError::InvalidQuantity(_) => "invalid_quantity",
            DomainError::InsufficientStock { .. } => "insufficient_stock",
            DomainError::InvalidPrice(_) => "invalid_price",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insufficient_stock_message_names_both_quantities() {
        let err = DomainError::InsufficientStock {
            item_id: ItemId::new(7),
            requested: 5,
            available: 2,
        };
        assert_eq!(
            err.to_string(),
            "insufficient stock for item 7 (requested: 5, available: 2)"
        );
        assert_eq!(err.code(), "insufficient_stock");
    }

    #[test]
    fn not_found_keeps_the_key_text() {
        assert_eq!(DomainError::not_found("eggs"), DomainError::NotFound("eggs".into()));
    }
}
