//! UTF-8 encoding and decoding of single Unicode scalar values.
//!
//! - [`encode`] turns a scalar value into its canonical 1 to 4 byte form.
//! - [`decode_one`] reads exactly one sequence from the front of a buffer and
//!   reports whether it is complete, truncated or malformed.
//!
//! Decoding is strict: overlong forms, surrogates, values above U+10FFFF and
//! stray continuation bytes are all rejected.
//!
//! ```
//! use utf8::{DecodeOutcome, decode_one, encode};
//!
//! let seq = encode(0x1F512).unwrap();
//! assert_eq!(seq.as_bytes(), &[0xF0, 0x9F, 0x94, 0x92]);
//!
//! match decode_one(&seq) {
//!     DecodeOutcome::Complete { scalar, consumed } => {
//!         assert_eq!(scalar.value(), 0x1F512);
//!         assert_eq!(consumed, 4);
//!     }
//!     other => panic!("unexpected {other:?}"),
//! }
//! ```

pub mod decode;
pub mod encode;
pub mod error;

pub use decode::{DecodeOutcome, decode_one, sequence_len};
pub use encode::{Sequence, encode, encode_scalar};
pub use error::{Error, Malformed};
