//! # Ledger Errors
//!
//! Typed failures surfaced by the storage and domain layers. The REST layer
//! translates these into HTTP status codes; nothing below it retries.

/// Errors returned by every ledger operation
#[derive(Debug, thiserror::Error)]
pub enum LedgerError {
    /// Malformed caller input (bad month filter, missing required field, ...)
    #[error("invalid input: {0}")]
    Validation(String),
    /// A record or category that the operation requires does not exist
    #[error("{entity} not found: {key}")]
    NotFound { entity: &'static str, key: String },
    /// The caller cancelled the operation before it completed
    #[error("operation cancelled")]
    Cancelled,
    /// The caller's deadline elapsed before the operation completed
    #[error("deadline exceeded")]
    DeadlineExceeded,
    /// An aggregate no longer fits in a 64-bit amount
    #[error("amount overflow: {0}")]
    Overflow(String),
    /// Opaque passthrough from the backing store
    #[error("store error: {0}")]
    Store(#[from] sqlx::Error),
}

impl LedgerError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn record_not_found(id: i64) -> Self {
        Self::NotFound {
            entity: "record",
            key: id.to_string(),
        }
    }

    pub fn category_not_found(category_id: i64) -> Self {
        Self::NotFound {
            entity: "category",
            key: category_id.to_string(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

pub type LedgerResult<T> = std::result::Result<T, LedgerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            LedgerError::record_not_found(42).to_string(),
            "record not found: 42"
        );
        assert_eq!(
            LedgerError::category_not_found(201).to_string(),
            "category not found: 201"
        );
        assert_eq!(
            LedgerError::validation("yyyymm must be 6 digits").to_string(),
            "invalid input: yyyymm must be 6 digits"
        );
    }

    #[test]
    fn test_store_errors_convert() {
        let err: LedgerError = sqlx::Error::RowNotFound.into();
        assert!(matches!(err, LedgerError::Store(_)));
        assert!(!err.is_not_found());
    }
}
