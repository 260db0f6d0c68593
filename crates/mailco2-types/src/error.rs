//! Error types for mailco2.

use thiserror::Error;

/// Result type alias for constant configuration operations.
pub type Result<T> = std::result::Result<T, ConstantsError>;

/// Errors raised while reading or overriding equivalence constants.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConstantsError {
    /// The storage key does not name any known constant.
    #[error("Unknown constant key: {0}")]
    UnknownKey(String),

    /// The stored override is not a strictly positive finite number.
    #[error("Invalid value for {key}: {value:?} (expected a positive number)")]
    InvalidValue {
        /// Storage key of the constant.
        key: &'static str,
        /// The rejected raw value.
        value: String,
    },
}
