//! # uniprint
//!
//! Core conversion traits for the uniprint code point toolkit.
//!
//! This crate defines the `Decoder` and `Encoder` traits that the codec
//! crates implement, so every conversion in the workspace reads the same way
//! regardless of which representation it starts from.
//!
//! ## Overview
//!
//! The conversions flow like this:
//! ```text
//! "U+1F512" → Scalar → Sequence (F0 9F 94 92)
//!                ↑                     │
//!                └──── &[u8] ←─────────┘
//! ```
//!
//! The `notation` crate decodes text into a `Scalar`, the `utf8` crate
//! encodes a `Scalar` into its UTF-8 `Sequence` and decodes bytes back.
//!
//! ## Example
//!
//! ```ignore
//! use uniprint::decoder::Decoder;
//! use uniprint::encoder::Encoder;
//! use scalar::Scalar;
//! use utf8::Sequence;
//!
//! let scalar: Scalar = "U+0041".decode().unwrap();
//! let bytes: Sequence = scalar.encode().unwrap();
//! assert_eq!(bytes.as_bytes(), b"A");
//! ```

#![forbid(unsafe_code)]

pub mod decoder;
pub mod encoder;
