//! Error types for revolut-merchant domain types.

use rust_decimal::Decimal;

/// Result type for core operations.
pub type Result<T> = std::result::Result<T, CoreError>;

/// Errors that can occur in the domain layer.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CoreError {
    /// The amount cannot be represented in minor units.
    #[error("amount {amount} overflows minor units at exponent {exponent}")]
    AmountOverflow {
        /// The major-unit amount.
        amount: Decimal,
        /// The currency exponent used.
        exponent: u32,
    },
}
