use thiserror::Error;

/// Money error
#[derive(Error, Debug, PartialEq, Eq)]
pub enum Error {
    /// No ISO 4217 currency has the given symbol
    #[error("no such ISO currency")]
    NoSuchCurrency,
    /// Arithmetic or comparison between values of two different currencies
    #[error("incompatible currencies {0} and {1}")]
    IncompatibleCurrencies(&'static str, &'static str),
    /// The amount string is empty
    #[error("empty amount")]
    EmptyAmount,
    /// The amount has more fractional digits than the currency keeps
    #[error("too precise")]
    TooPrecise,
    /// The amount contains an unexpected character
    #[error("bad char {chr:?} at position {pos}")]
    BadChar {
        /// The offending character
        chr: char,
        /// Its byte position in the amount string
        pos: usize,
    },
    /// The amount ends with a decimal point
    #[error("trailing dot")]
    TrailingDot,
}

/// Money result
pub type Result<T> = core::result::Result<T, Error>;
