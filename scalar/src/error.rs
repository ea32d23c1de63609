use thiserror::Error;

/// Errors raised when an integer is used as a Unicode scalar value.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// The integer is above U+10FFFF or inside the surrogate range
    #[error("U+{0:04X} is not a Unicode scalar value")]
    InvalidScalar(u32),
}
