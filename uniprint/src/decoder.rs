//! Decoder trait for checked conversions.
//!
//! `Decoder<T, D>` converts a source `T` into a destination `D`. The
//! destination must opt in through the `DecodableFrom<T>` marker, so only the
//! pairs a codec crate declares can be decoded.
//!
//! ```no_run
//! use uniprint::decoder::{DecodableFrom, Decoder};
//!
//! struct Digits(String);
//! struct Value(u32);
//!
//! #[derive(Debug)]
//! struct BadDigit;
//!
//! impl DecodableFrom<Digits> for Value {}
//!
//! impl Decoder<Digits, Value> for Digits {
//!     type Error = BadDigit;
//!
//!     fn decode(&self) -> Result<Value, Self::Error> {
//!         self.0.parse().map(Value).map_err(|_| BadDigit)
//!     }
//! }
//! ```

/// Converts `self` (of type `T`) into `D`.
///
/// Implemented by the source type. `D` must implement `DecodableFrom<T>`.
pub trait Decoder<T, D: DecodableFrom<T>> {
    /// The error type returned when decoding fails.
    type Error;

    /// Decodes `self` into type `D`.
    ///
    /// # Errors
    ///
    /// Returns an error when the input is not a valid representation of `D`.
    /// Failures are deterministic: decoding the same input again fails the
    /// same way.
    fn decode(&self) -> Result<D, Self::Error>;
}

/// Marker trait indicating that `D` can be decoded from `T`.
pub trait DecodableFrom<T> {}
