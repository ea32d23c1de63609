use std::ops::Deref;

use scalar::Scalar;
use uniprint::encoder::{EncodableTo, Encoder};

use crate::error::Error;

/*
 * bits | lead     | continuation bytes
 *  7   | 0xxxxxxx |
 * 11   | 110xxxxx | 10xxxxxx
 * 16   | 1110xxxx | 10xxxxxx 10xxxxxx
 * 21   | 11110xxx | 10xxxxxx 10xxxxxx 10xxxxxx
 */

/// The UTF-8 encoding of one scalar value.
///
/// Derefs to the 1 to 4 encoded bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Sequence {
    scalar: Scalar,
    bytes: [u8; 4],
    len: u8,
}

impl Sequence {
    /// The value this sequence encodes.
    pub fn scalar(&self) -> Scalar {
        self.scalar
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.len as usize]
    }
}

impl Deref for Sequence {
    type Target = [u8];

    fn deref(&self) -> &Self::Target {
        self.as_bytes()
    }
}

impl AsRef<[u8]> for Sequence {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

/// Encodes `v` as UTF-8.
///
/// # Errors
///
/// Returns [`Error::InvalidScalar`] when `v` is above U+10FFFF or a surrogate.
pub fn encode(v: u32) -> Result<Sequence, Error> {
    let scalar = Scalar::new(v)?;
    Ok(encode_scalar(scalar))
}

/// Encodes an already checked scalar value. Always the shortest form.
pub fn encode_scalar(scalar: Scalar) -> Sequence {
    let v = scalar.value();
    let mut bytes = [0u8; 4];
    let len = match scalar.len_utf8() {
        1 => {
            bytes[0] = v as u8;
            1
        }
        2 => {
            bytes[0] = (0xC0 | (v >> 6)) as u8;
            bytes[1] = continuation(v);
            2
        }
        3 => {
            bytes[0] = (0xE0 | (v >> 12)) as u8;
            bytes[1] = continuation(v >> 6);
            bytes[2] = continuation(v);
            3
        }
        _ => {
            bytes[0] = (0xF0 | (v >> 18)) as u8;
            bytes[1] = continuation(v >> 12);
            bytes[2] = continuation(v >> 6);
            bytes[3] = continuation(v);
            4
        }
    };
    Sequence { scalar, bytes, len }
}

// low six bits of `bits` under the 10xxxxxx marker
fn continuation(bits: u32) -> u8 {
    (0x80 | (bits & 0x3F)) as u8
}

impl EncodableTo<Scalar> for Sequence {}

impl Encoder<Scalar, Sequence> for Scalar {
    type Error = Error;

    fn encode(&self) -> Result<Sequence, Self::Error> {
        Ok(encode_scalar(*self))
    }
}

impl EncodableTo<u32> for Sequence {}

impl Encoder<u32, Sequence> for u32 {
    type Error = Error;

    fn encode(&self) -> Result<Sequence, Self::Error> {
        encode(*self)
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use scalar::Scalar;
    use uniprint::encoder::Encoder;

    use crate::encode::{Sequence, encode};
    use crate::error::Error;

    #[rstest(
        input,
        expected,
        case(0x00, vec![0x00]),
        case(0x41, vec![0x41]),
        case(0x7F, vec![0x7F]),
        case(0x80, vec![0xC2, 0x80]),
        case(0xE9, vec![0xC3, 0xA9]),
        case(0x7FF, vec![0xDF, 0xBF]),
        case(0x800, vec![0xE0, 0xA0, 0x80]),
        case(0x20AC, vec![0xE2, 0x82, 0xAC]),
        case(0xD7FF, vec![0xED, 0x9F, 0xBF]),
        case(0xE000, vec![0xEE, 0x80, 0x80]),
        case(0xFFFF, vec![0xEF, 0xBF, 0xBF]),
        case(0x10000, vec![0xF0, 0x90, 0x80, 0x80]),
        case(0x1F512, vec![0xF0, 0x9F, 0x94, 0x92]),
        case(0x10FFFF, vec![0xF4, 0x8F, 0xBF, 0xBF])
    )]
    fn test_encode(input: u32, expected: Vec<u8>) {
        let seq = encode(input).unwrap();
        assert_eq!(expected, seq.as_bytes());
        assert_eq!(input, seq.scalar().value());
    }

    #[rstest(input, case(0xD800), case(0xDABC), case(0xDFFF), case(0x110000), case(u32::MAX))]
    fn test_encode_invalid(input: u32) {
        assert_eq!(Err(Error::InvalidScalar(input)), encode(input));
    }

    #[test]
    fn test_encode_matches_std() {
        let mut buf = [0u8; 4];
        for c in (0..=scalar::MAX).filter_map(char::from_u32) {
            let seq = encode(c as u32).unwrap();
            assert_eq!(c.encode_utf8(&mut buf).as_bytes(), seq.as_bytes(), "{c:?}");
            assert_eq!(Scalar::from(c).len_utf8(), seq.len());
        }
    }

    #[test]
    fn test_encoder_trait() {
        let seq: Sequence = 0x20ACu32.encode().unwrap();
        assert_eq!(&[0xE2, 0x82, 0xAC], &seq[..]);

        let scalar = Scalar::from('é');
        let seq: Sequence = scalar.encode().unwrap();
        assert_eq!("é".as_bytes(), seq.as_ref());

        let err: Result<Sequence, Error> = 0xDC00u32.encode();
        assert_eq!(Err(Error::InvalidScalar(0xDC00)), err);
    }
}
