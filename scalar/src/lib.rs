//! Unicode scalar values.
//!
//! A scalar value is any code point in `0..=0x10FFFF` outside the UTF-16
//! surrogate range `0xD800..=0xDFFF`. [`is_valid`] is the single predicate
//! every other crate in the workspace defers to, and [`Scalar`] is the type
//! that carries its verdict.

pub mod error;

use std::fmt::{Display, Formatter};

use error::Error;

/// Largest Unicode code point.
pub const MAX: u32 = 0x10FFFF;
/// First UTF-16 surrogate.
pub const SURROGATE_START: u32 = 0xD800;
/// Last UTF-16 surrogate.
pub const SURROGATE_END: u32 = 0xDFFF;

/// Returns whether `v` is a Unicode scalar value.
///
/// ```
/// assert!(scalar::is_valid(0x41));
/// assert!(!scalar::is_valid(0xD800));
/// assert!(!scalar::is_valid(0x110000));
/// ```
pub const fn is_valid(v: u32) -> bool {
    if v > MAX {
        return false;
    }
    !matches!(v, SURROGATE_START..=SURROGATE_END)
}

/// A code point that has passed [`is_valid`].
///
/// `Display` renders the `U+XXXX` notation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Scalar(u32);

impl Scalar {
    pub fn new(v: u32) -> Result<Self, Error> {
        if is_valid(v) {
            Ok(Scalar(v))
        } else {
            Err(Error::InvalidScalar(v))
        }
    }

    pub const fn value(self) -> u32 {
        self.0
    }

    /// Number of bytes in the shortest UTF-8 form of this value.
    pub const fn len_utf8(self) -> usize {
        match self.0 {
            0..=0x7F => 1,
            0x80..=0x7FF => 2,
            0x800..=0xFFFF => 3,
            _ => 4,
        }
    }
}

impl TryFrom<u32> for Scalar {
    type Error = Error;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Scalar::new(value)
    }
}

impl From<char> for Scalar {
    fn from(c: char) -> Self {
        Scalar(c as u32)
    }
}

impl From<Scalar> for u32 {
    fn from(s: Scalar) -> Self {
        s.0
    }
}

impl Display for Scalar {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", UPlus(self.0))
    }
}

/// `U+` notation for any integer, checked or not.
///
/// Values up to `0xFFFF` get four upper-case hex digits, larger ones get six.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UPlus(pub u32);

impl Display for UPlus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.0 <= 0xFFFF {
            write!(f, "U+{:04X}", self.0)
        } else {
            write!(f, "U+{:06X}", self.0)
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use crate::{Error, Scalar, UPlus, is_valid};

    #[rstest(
        input,
        expected,
        case(0x0000, true),
        case(0x0041, true),
        case(0xD7FF, true),
        case(0xD800, false),
        case(0xDBFF, false),
        case(0xDC00, false),
        case(0xDFFF, false),
        case(0xE000, true),
        case(0xFFFF, true),
        case(0x10000, true),
        case(0x10FFFF, true),
        case(0x110000, false),
        case(u32::MAX, false)
    )]
    fn test_is_valid(input: u32, expected: bool) {
        assert_eq!(expected, is_valid(input));
    }

    #[test]
    fn test_is_valid_agrees_with_char() {
        for v in 0..=0x11_0000u32 {
            assert_eq!(char::from_u32(v).is_some(), is_valid(v), "{v:#X}");
        }
    }

    #[rstest(
        input,
        expected,
        case(0x41, "U+0041"),
        case(0x0, "U+0000"),
        case(0xFFFF, "U+FFFF"),
        case(0x1F512, "U+01F512"),
        case(0x10FFFF, "U+10FFFF")
    )]
    fn test_display(input: u32, expected: &str) {
        let scalar = Scalar::new(input).unwrap();
        assert_eq!(expected, scalar.to_string());
    }

    #[test]
    fn test_uplus_unchecked() {
        assert_eq!("U+D800", UPlus(0xD800).to_string());
        assert_eq!("U+110000", UPlus(0x110000).to_string());
    }

    #[rstest(input, case(0xD800), case(0xDFFF), case(0x110000))]
    fn test_new_rejects(input: u32) {
        assert_eq!(Err(Error::InvalidScalar(input)), Scalar::new(input));
        assert_eq!(Err(Error::InvalidScalar(input)), Scalar::try_from(input));
    }

    #[test]
    fn test_error_message() {
        assert_eq!(
            "U+D800 is not a Unicode scalar value",
            Error::InvalidScalar(0xD800).to_string()
        );
    }

    #[rstest(
        input,
        expected,
        case('A', 1),
        case('\u{7F}', 1),
        case('\u{80}', 2),
        case('\u{7FF}', 2),
        case('\u{800}', 3),
        case('\u{FFFF}', 3),
        case('\u{10000}', 4),
        case('\u{10FFFF}', 4)
    )]
    fn test_len_utf8(input: char, expected: usize) {
        let scalar = Scalar::from(input);
        assert_eq!(input.len_utf8(), expected);
        assert_eq!(expected, scalar.len_utf8());
        assert_eq!(input as u32, u32::from(scalar));
    }
}
