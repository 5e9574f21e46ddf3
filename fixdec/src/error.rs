use thiserror::Error;

/// Decimal string parsing error
#[derive(Error, Debug, PartialEq, Eq)]
pub enum Error {
    /// The string contains no digits
    #[error("empty decimal string")]
    Empty,
    /// The string contains a character that is not an ASCII digit
    #[error("invalid digit {0:?}")]
    InvalidDigit(char),
    /// The value does not fit in 128 bits
    #[error("value out of range")]
    OutOfRange,
}

/// Decimal parsing result
pub type Result<T> = core::result::Result<T, Error>;
