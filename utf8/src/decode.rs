use log::trace;
use scalar::Scalar;
use uniprint::decoder::{DecodableFrom, Decoder};

use crate::encode::{Sequence, encode_scalar};
use crate::error::{Error, Malformed};

/// Result of reading one UTF-8 sequence from the front of a buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeOutcome {
    /// A valid sequence of `consumed` bytes (1 to 4).
    Complete { scalar: Scalar, consumed: usize },
    /// The buffer is empty or ends inside the sequence.
    Incomplete,
    /// The bytes can never start a valid sequence, whatever follows.
    Invalid(Malformed),
}

impl DecodeOutcome {
    pub fn is_complete(&self) -> bool {
        matches!(self, DecodeOutcome::Complete { .. })
    }

    pub fn is_incomplete(&self) -> bool {
        matches!(self, DecodeOutcome::Incomplete)
    }

    pub fn is_invalid(&self) -> bool {
        matches!(self, DecodeOutcome::Invalid(_))
    }

    pub fn scalar(&self) -> Option<Scalar> {
        match self {
            DecodeOutcome::Complete { scalar, .. } => Some(*scalar),
            _ => None,
        }
    }
}

/// Expected sequence length announced by a lead byte.
///
/// `None` for continuation bytes and for leads that can only start overlong
/// (`0xC0`, `0xC1`) or out of range (`0xF5..=0xFF`) sequences.
pub fn sequence_len(lead: u8) -> Option<usize> {
    match lead {
        0x00..=0x7F => Some(1),
        0xC2..=0xDF => Some(2),
        0xE0..=0xEF => Some(3),
        0xF0..=0xF4 => Some(4),
        _ => None,
    }
}

/// Decodes the sequence at the start of `buf`.
///
/// Bytes after the first sequence are ignored. Checks run in a fixed order
/// and the first one that fails decides the outcome:
///
/// 1. ASCII lead: complete after one byte.
/// 2. Continuation byte as lead: invalid.
/// 3. Lead byte outside `C2..=DF`, `E0..=EF`, `F0..=F4`: invalid.
/// 4. Buffer shorter than the announced length: incomplete.
/// 5. Continuation bytes must match `10xxxxxx`.
/// 6. Value below the minimum for its length: overlong.
/// 7. `E0`/`F0` with a low second byte (overlong), `ED` with a second byte
///    from `A0` (surrogate), `F4` with a second byte from `90` (above
///    U+10FFFF).
/// 8. The value must be a scalar value.
pub fn decode_one(buf: &[u8]) -> DecodeOutcome {
    let Some(&lead) = buf.first() else {
        return DecodeOutcome::Incomplete;
    };

    if lead <= 0x7F {
        return DecodeOutcome::Complete {
            scalar: Scalar::from(char::from(lead)),
            consumed: 1,
        };
    }

    if (0x80..=0xBF).contains(&lead) {
        return invalid(Malformed::UnexpectedContinuation);
    }

    let (need, mut cp) = match lead {
        0xC2..=0xDF => (2, u32::from(lead & 0x1F)),
        0xE0..=0xEF => (3, u32::from(lead & 0x0F)),
        0xF0..=0xF4 => (4, u32::from(lead & 0x07)),
        _ => return invalid(Malformed::InvalidLead(lead)),
    };

    if buf.len() < need {
        return DecodeOutcome::Incomplete;
    }

    for (offset, &byte) in buf.iter().enumerate().take(need).skip(1) {
        if byte & 0xC0 != 0x80 {
            return invalid(Malformed::InvalidContinuation { offset, byte });
        }
        cp = (cp << 6) | u32::from(byte & 0x3F);
    }

    let min = match need {
        2 => 0x80,
        3 => 0x800,
        _ => 0x10000,
    };
    if cp < min {
        return invalid(Malformed::Overlong);
    }

    // E0 and F0 overlongs never get past the minimum check
    match (lead, buf[1]) {
        (0xE0, 0x00..=0x9F) | (0xF0, 0x00..=0x8F) => return invalid(Malformed::Overlong),
        (0xED, 0xA0..) => return invalid(Malformed::Surrogate),
        (0xF4, 0x90..) => return invalid(Malformed::AboveMax),
        _ => {}
    }

    match Scalar::new(cp) {
        Ok(scalar) => DecodeOutcome::Complete {
            scalar,
            consumed: need,
        },
        Err(_) => invalid(Malformed::InvalidScalar(cp)),
    }
}

fn invalid(reason: Malformed) -> DecodeOutcome {
    trace!("rejecting UTF-8 sequence: {reason}");
    DecodeOutcome::Invalid(reason)
}

impl DecodableFrom<&[u8]> for Sequence {}

/// Strict decode: the buffer must hold exactly one complete sequence.
impl Decoder<&[u8], Sequence> for &[u8] {
    type Error = Error;

    fn decode(&self) -> Result<Sequence, Self::Error> {
        match decode_one(self) {
            DecodeOutcome::Complete { scalar, consumed } if consumed == self.len() => {
                Ok(encode_scalar(scalar))
            }
            DecodeOutcome::Complete { consumed, .. } => {
                Err(Error::TrailingBytes(self.len() - consumed))
            }
            DecodeOutcome::Incomplete => Err(Error::Incomplete),
            DecodeOutcome::Invalid(reason) => Err(Error::Malformed(reason)),
        }
    }
}

impl DecodableFrom<Vec<u8>> for Sequence {}

impl Decoder<Vec<u8>, Sequence> for Vec<u8> {
    type Error = Error;

    fn decode(&self) -> Result<Sequence, Self::Error> {
        self.as_slice().decode()
    }
}
