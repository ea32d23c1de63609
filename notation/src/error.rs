use thiserror::Error;

/// Errors that can occur when parsing a code point notation.
///
/// Every failure is a function of the input alone; parsing the same text
/// again fails the same way.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// Nothing but whitespace
    #[error("empty code point")]
    Empty,

    /// No whitespace boundary within the first `.0` bytes of the token
    #[error("code point longer than {0} characters")]
    TooLong(usize),

    /// A `U+` or `0x` prefix with nothing after it
    #[error("no digits after prefix")]
    NoDigits,

    /// A character that is not a digit of the chosen base
    #[error("malformed number")]
    Malformed,

    #[error("value above U+10FFFF")]
    OutOfRange,

    /// In range but a surrogate
    #[error("U+{0:04X} is not a Unicode scalar value")]
    InvalidScalar(u32),
}
