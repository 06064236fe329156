//! Bit strings: bytes written as `0`/`1` digits, most significant bit first, one group of eight digits per byte.
//!
//! A bit string matches the grammar `BYTE (' ' BYTE)*` where `BYTE` is exactly eight characters from `{'0', '1'}`.

use thiserror::Error;

/// The number of digits rendered per byte.
pub const BITS_PER_BYTE: usize = 8;

/// The separator between byte groups in a canonical bit string.
pub const BYTE_SEPARATOR: &str = " ";

/// A bit string parse error.
#[derive(Clone, Eq, PartialEq, Debug, Error)]
pub enum BitStringParseError {
    /// The bit string has no byte groups.
    #[error("bit string is empty")]
    Empty,
    /// A byte group does not have exactly eight digits.
    #[error("byte group {index} has {length} characters, expected 8")]
    InvalidGroupLength {
        /// The index of the byte group.
        index: usize,
        /// The number of characters in the byte group.
        length: usize,
    },
    /// A byte group contains a character other than `0` or `1`.
    #[error("invalid character {character:?} in byte group {index}, expected '0' or '1'")]
    InvalidCharacter {
        /// The index of the byte group.
        index: usize,
        /// The offending character.
        character: char,
    },
    /// The number of byte groups does not match the size of the target type.
    #[error("bit string has {actual} byte groups, expected {expected}")]
    ByteCountMismatch {
        /// The expected number of byte groups.
        expected: usize,
        /// The number of byte groups in the bit string.
        actual: usize,
    },
}

/// Returns the length of the canonical bit string of `byte_size` bytes.
#[must_use]
pub const fn bitstring_len(byte_size: usize) -> usize {
    if byte_size == 0 {
        0
    } else {
        byte_size * BITS_PER_BYTE + (byte_size - 1) * BYTE_SEPARATOR.len()
    }
}

/// Append the digits of `byte` to `out`, bit 7 first.
pub fn push_byte_bits(out: &mut String, byte: u8) {
    for shift in (0..BITS_PER_BYTE).rev() {
        out.push(if (byte >> shift) & 1 == 1 { '1' } else { '0' });
    }
}

/// Render `bytes` in the order given, with a single space between byte groups.
///
/// An empty slice renders as an empty string.
#[must_use]
pub fn render_bytes(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bitstring_len(bytes.len()));
    for (index, byte) in bytes.iter().enumerate() {
        if index > 0 {
            out.push_str(BYTE_SEPARATOR);
        }
        push_byte_bits(&mut out, *byte);
    }
    out
}

/// Parse a canonical bit string into bytes, in the order they are written.
///
/// # Errors
/// Returns a [`BitStringParseError`] if the input is empty, a byte group is not exactly eight characters, or a character is not `0` or `1`.
/// Byte groups must be separated by exactly one space.
pub fn parse_bitstring(bitstring: &str) -> Result<Vec<u8>, BitStringParseError> {
    if bitstring.is_empty() {
        return Err(BitStringParseError::Empty);
    }
    bitstring
        .split(BYTE_SEPARATOR)
        .enumerate()
        .map(|(index, group)| parse_byte(index, group))
        .collect()
}

fn parse_byte(index: usize, group: &str) -> Result<u8, BitStringParseError> {
    let length = group.chars().count();
    if length != BITS_PER_BYTE {
        return Err(BitStringParseError::InvalidGroupLength { index, length });
    }
    group.chars().try_fold(0u8, |byte, character| match character {
        '0' => Ok(byte << 1),
        '1' => Ok((byte << 1) | 1),
        character => Err(BitStringParseError::InvalidCharacter { index, character }),
    })
}
