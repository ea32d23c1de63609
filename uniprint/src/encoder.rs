//! Encoder trait, the reverse direction of [`crate::decoder::Decoder`].

/// Converts `self` (of type `T`) into its encoded form `E`.
pub trait Encoder<T, E: EncodableTo<T>> {
    type Error;

    /// Encodes `self` into `E`.
    ///
    /// # Errors
    ///
    /// Returns an error when `self` has no representation in `E`.
    fn encode(&self) -> Result<E, Self::Error>;
}

/// Marker trait indicating that `E` can be produced from `T`.
pub trait EncodableTo<T> {}
