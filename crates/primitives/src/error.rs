use thiserror::Error;

/// Errors produced while decoding primitive values.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PrimitiveError {
    /// The text contains a character outside the base-58 alphabet.
    #[error("invalid base-58 character '{character}' at index {index}")]
    InvalidEncoding { character: char, index: usize },

    /// The text is valid base-58 but decodes to the wrong number of bytes.
    #[error("invalid length: expected {expected} bytes, decoded {actual}")]
    InvalidLength { expected: usize, actual: usize },
}

/// Result type for primitive operations
pub type PrimitiveResult<T> = Result<T, PrimitiveError>;
