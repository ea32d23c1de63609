use thiserror::Error;

/// Errors raised by the UTF-8 encoder and the strict whole-buffer decoder.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// Only scalar values have a UTF-8 encoding
    #[error("cannot encode U+{0:04X}: not a Unicode scalar value")]
    InvalidScalar(u32),

    /// The buffer ends before the sequence announced by its lead byte
    #[error("incomplete UTF-8 sequence")]
    Incomplete,

    #[error("malformed UTF-8 sequence: {0}")]
    Malformed(#[from] Malformed),

    /// Bytes left over after one complete sequence
    #[error("{0} trailing byte(s) after the UTF-8 sequence")]
    TrailingBytes(usize),
}

impl From<scalar::error::Error> for Error {
    fn from(e: scalar::error::Error) -> Self {
        match e {
            scalar::error::Error::InvalidScalar(v) => Error::InvalidScalar(v),
        }
    }
}

/// The check that rejected a byte sequence.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Malformed {
    #[error("continuation byte cannot start a sequence")]
    UnexpectedContinuation,
    #[error("0x{0:02X} is not a lead byte")]
    InvalidLead(u8),
    #[error("byte 0x{byte:02X} at offset {offset} is not a continuation byte")]
    InvalidContinuation { offset: usize, byte: u8 },
    #[error("overlong encoding")]
    Overlong,
    #[error("encodes a UTF-16 surrogate")]
    Surrogate,
    #[error("encodes a value above U+10FFFF")]
    AboveMax,
    #[error("U+{0:04X} is not a Unicode scalar value")]
    InvalidScalar(u32),
}
