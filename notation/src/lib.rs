//! Code point notation parser.
//!
//! Reads the text people type for a code point and turns it into a
//! [`Scalar`]. Accepted forms, tried in this order:
//!
//! | form      | example            | base |
//! |-----------|--------------------|------|
//! | `U+`/`u+` | `U+1F512`          | 16   |
//! | `0x`/`0X` | `0x41`             | 16   |
//! | bare hex  | `0041`, `1F512`    | 16   |
//! | decimal   | `65`               | 10   |
//!
//! A bare token is hexadecimal when it is 4 to 6 hex digits long or contains
//! a letter `a-f`/`A-F`; otherwise it is decimal. So `0041` is U+0041 but
//! `41` is decimal 41, and `123456` is hex while `123` is decimal.

pub mod error;

use std::{
    fmt::{Display, Formatter},
    str::FromStr,
};

use error::Error;
use log::debug;
use scalar::Scalar;
use uniprint::decoder::{DecodableFrom, Decoder};

/// Longest token accepted, in bytes.
pub const MAX_TOKEN_LEN: usize = 127;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Base {
    Hex,
    Decimal,
}

impl Base {
    pub fn radix(self) -> u32 {
        match self {
            Base::Hex => 16,
            Base::Decimal => 10,
        }
    }
}

/// Which notation a token was read as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Form {
    /// `U+XXXX` or `u+XXXX`
    UPlus,
    /// `0xXXXX` or `0XXXXX`
    HexPrefix,
    /// No prefix, hexadecimal by policy
    BareHex,
    /// No prefix, decimal by policy
    Decimal,
}

impl Form {
    pub fn base(self) -> Base {
        match self {
            Form::UPlus | Form::HexPrefix | Form::BareHex => Base::Hex,
            Form::Decimal => Base::Decimal,
        }
    }
}

impl Display for Form {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Form::UPlus => write!(f, "u-plus"),
            Form::HexPrefix => write!(f, "hex-prefix"),
            Form::BareHex => write!(f, "bare-hex"),
            Form::Decimal => write!(f, "decimal"),
        }
    }
}

/// A parsed code point together with the form it was written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Notation {
    scalar: Scalar,
    form: Form,
}

impl Notation {
    pub fn scalar(&self) -> Scalar {
        self.scalar
    }

    pub fn form(&self) -> Form {
        self.form
    }
}

/// Parses the first whitespace-delimited token of `input` as a code point.
///
/// ```
/// use notation::parse;
///
/// assert_eq!(parse("U+0041").unwrap().value(), 0x41);
/// assert_eq!(parse("0041").unwrap().value(), 0x41);
/// assert_eq!(parse("41").unwrap().value(), 41);
/// ```
///
/// # Errors
///
/// See [`Error`]. The checks run in the order of its variants.
pub fn parse(input: &str) -> Result<Scalar, Error> {
    parse_notation(input).map(|n| n.scalar)
}

/// Like [`parse`], also reporting which notation was recognized.
pub fn parse_notation(input: &str) -> Result<Notation, Error> {
    let token = next_token(input)?;
    let (form, digits) = classify(token);
    debug!("reading {token:?} as {form}");

    if digits.is_empty() {
        return Err(Error::NoDigits);
    }

    let v = parse_digits(digits, form.base())?;
    if v > scalar::MAX {
        return Err(Error::OutOfRange);
    }
    let scalar = Scalar::new(v).map_err(|_| Error::InvalidScalar(v))?;

    Ok(Notation { scalar, form })
}

/// Picks the notation for a single token and strips its prefix.
///
/// Returns the form and the digits still to be read, which may be empty.
pub fn classify(token: &str) -> (Form, &str) {
    let bytes = token.as_bytes();
    match bytes {
        [b'U' | b'u', b'+', ..] => (Form::UPlus, &token[2..]),
        [b'0', b'x' | b'X', ..] => (Form::HexPrefix, &token[2..]),
        _ if (4..=6).contains(&bytes.len()) && bytes.iter().all(u8::is_ascii_hexdigit) => {
            (Form::BareHex, token)
        }
        _ if bytes.iter().any(|&b| matches!(b, b'a'..=b'f' | b'A'..=b'F')) => {
            (Form::BareHex, token)
        }
        _ => (Form::Decimal, token),
    }
}

// C-locale isspace, including vertical tab
fn is_space(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | 0x0B | 0x0C | b'\r')
}

fn next_token(input: &str) -> Result<&str, Error> {
    let start = input
        .bytes()
        .position(|b| !is_space(b))
        .unwrap_or(input.len());
    let rest = &input[start..];
    let end = rest.bytes().position(is_space).unwrap_or(rest.len());

    if end == 0 {
        return Err(Error::Empty);
    }
    if end > MAX_TOKEN_LEN {
        return Err(Error::TooLong(MAX_TOKEN_LEN));
    }
    Ok(&rest[..end])
}

// Values past u32::MAX saturate; the caller's range check rejects them.
fn parse_digits(digits: &str, base: Base) -> Result<u32, Error> {
    let radix = base.radix();
    digits.chars().try_fold(0u32, |acc, c| {
        let d = c.to_digit(radix).ok_or(Error::Malformed)?;
        Ok(acc.saturating_mul(radix).saturating_add(d))
    })
}

impl FromStr for Notation {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_notation(s)
    }
}

impl DecodableFrom<&str> for Notation {}

impl Decoder<&str, Notation> for &str {
    type Error = Error;

    fn decode(&self) -> Result<Notation, Self::Error> {
        Notation::from_str(self)
    }
}

impl DecodableFrom<String> for Notation {}

impl Decoder<String, Notation> for String {
    type Error = Error;

    fn decode(&self) -> Result<Notation, Self::Error> {
        Notation::from_str(self)
    }
}
