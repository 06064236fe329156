//! Render fixed-size values as canonical bit strings.

use std::{hash::Hash, marker::PhantomData};

use bytemuck::{AnyBitPattern, NoUninit};

use crate::{
    bit_string::BitStringParseError,
    endianness::{host_endianness, Endianness},
    CanonicalBytes,
};

/// The canonical bit string representation of a value of type `T`.
///
/// `T` must be [`NoUninit`]: fixed-size, trivially copyable, and free of padding, so that its raw bytes alone represent its bit pattern.
/// The bytes of the value are held in [`CanonicalBytes`] (most significant byte first) so the same value renders identically on any host.
///
/// ```rust
/// # use bitrender::BitRenderer;
/// let mut renderer = BitRenderer::new(256i32);
/// assert_eq!(renderer.to_bitstring(), "00000000 00000000 00000001 00000000");
/// renderer.assign(-1);
/// assert_eq!(renderer.to_bitstring(), "11111111 11111111 11111111 11111111");
/// ```
pub struct BitRenderer<T> {
    bytes: CanonicalBytes,
    _value: PhantomData<fn() -> T>,
}

impl<T: NoUninit> BitRenderer<T> {
    /// The size of `T` in bytes.
    pub const BYTE_SIZE: usize = std::mem::size_of::<T>();

    /// Create a renderer from the memory representation of `value`.
    ///
    /// # Panics
    /// Panics if the host byte order is neither big nor little endian.
    #[must_use]
    pub fn new(value: T) -> Self {
        Self::with_host_endianness(value, host_endianness())
    }

    /// Create a renderer from the memory representation of `value`, as if stored on a `host` with the given byte order.
    #[must_use]
    pub fn with_host_endianness(value: T, host: Endianness) -> Self {
        Self {
            bytes: CanonicalBytes::from_value_with_host(&value, host),
            _value: PhantomData,
        }
    }

    /// Parse a renderer from a bit string with one byte group per byte of `T`.
    ///
    /// # Errors
    /// Returns a [`BitStringParseError`] if `bitstring` is not a valid bit string or does not have [`BYTE_SIZE`](Self::BYTE_SIZE) byte groups.
    pub fn from_bitstring(bitstring: &str) -> Result<Self, BitStringParseError> {
        let bytes = CanonicalBytes::from_bitstring(bitstring)?;
        if bytes.len() != Self::BYTE_SIZE {
            return Err(BitStringParseError::ByteCountMismatch {
                expected: Self::BYTE_SIZE,
                actual: bytes.len(),
            });
        }
        Ok(Self {
            bytes,
            _value: PhantomData,
        })
    }

    /// Replace the canonical bytes with those of `value`.
    ///
    /// # Panics
    /// Panics if the host byte order is neither big nor little endian.
    pub fn assign(&mut self, value: T) {
        self.bytes = CanonicalBytes::from_value(&value);
    }

    /// Returns the size of `T` in bytes.
    #[must_use]
    pub fn byte_size(&self) -> usize {
        Self::BYTE_SIZE
    }

    /// Return the canonical bytes.
    #[must_use]
    pub fn canonical_bytes(&self) -> &CanonicalBytes {
        &self.bytes
    }

    /// Convert into the canonical bytes.
    #[must_use]
    pub fn into_canonical_bytes(self) -> CanonicalBytes {
        self.bytes
    }

    /// Render as a bit string.
    ///
    /// Each byte is rendered as eight `0`/`1` digits, most significant bit first, with bytes in canonical order separated by a single space.
    /// The result has length `9 * BYTE_SIZE - 1`.
    #[must_use]
    pub fn to_bitstring(&self) -> String {
        self.bytes.to_bitstring()
    }
}

impl<T: NoUninit + AnyBitPattern> BitRenderer<T> {
    /// Return the value the canonical bytes represent on this host.
    ///
    /// # Panics
    /// Panics if the host byte order is neither big nor little endian.
    #[must_use]
    pub fn value(&self) -> T {
        match self.bytes.to_value() {
            Ok(value) => value,
            // Every constructor holds exactly `BYTE_SIZE` canonical bytes.
            Err(err) => unreachable!("{err}"),
        }
    }
}

/// Create a [`BitRenderer`] for `value`.
///
/// ```rust
/// assert_eq!(bitrender::to_bits(0x0102u16).to_string(), "00000001 00000010");
/// ```
///
/// # Panics
/// Panics if the host byte order is neither big nor little endian.
#[must_use]
pub fn to_bits<T: NoUninit>(value: T) -> BitRenderer<T> {
    BitRenderer::new(value)
}

impl<T: NoUninit> From<T> for BitRenderer<T> {
    fn from(value: T) -> Self {
        Self::new(value)
    }
}

impl<T: NoUninit> core::fmt::Display for BitRenderer<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.bytes, f)
    }
}

impl<T> core::fmt::Debug for BitRenderer<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("BitRenderer")
            .field("type", &std::any::type_name::<T>())
            .field("bytes", &self.bytes)
            .finish()
    }
}

impl<T> Clone for BitRenderer<T> {
    fn clone(&self) -> Self {
        Self {
            bytes: self.bytes.clone(),
            _value: PhantomData,
        }
    }
}

impl<T> PartialEq for BitRenderer<T> {
    fn eq(&self, other: &Self) -> bool {
        self.bytes == other.bytes
    }
}

impl<T> Eq for BitRenderer<T> {}

impl<T> Hash for BitRenderer<T> {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.bytes.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bit_renderer_i32() {
        assert_eq!(
            BitRenderer::new(0i32).to_bitstring(),
            "00000000 00000000 00000000 00000000"
        );
        assert_eq!(
            BitRenderer::new(1i32).to_bitstring(),
            "00000000 00000000 00000000 00000001"
        );
        assert_eq!(
            BitRenderer::new(256i32).to_bitstring(),
            "00000000 00000000 00000001 00000000"
        );
        assert_eq!(
            BitRenderer::new(-1i32).to_bitstring(),
            "11111111 11111111 11111111 11111111"
        );
    }

    #[test]
    fn bit_renderer_one_byte() {
        let renderer = BitRenderer::new(5u8);
        assert_eq!(renderer.to_bitstring(), "00000101");
        assert_eq!(renderer.byte_size(), 1);
    }

    #[test]
    fn bit_renderer_two_bytes() {
        assert_eq!(to_bits(0x0102u16).to_bitstring(), "00000001 00000010");
    }

    #[test]
    fn bit_renderer_assign() {
        let mut renderer = BitRenderer::new(u32::MAX);
        renderer.assign(1);
        assert_eq!(renderer, BitRenderer::new(1u32));
        assert_eq!(renderer.canonical_bytes().as_be_bytes(), &[0, 0, 0, 1]);
        assert_eq!(renderer.value(), 1);
    }

    #[test]
    fn bit_renderer_injected_host() {
        let value: u32 = 0x1234_5678;
        let native = BitRenderer::new(value);
        let other_host = match Endianness::native() {
            Endianness::Big => Endianness::Little,
            Endianness::Little => Endianness::Big,
        };
        // Simulate the other host by feeding it this value's bytes in the opposite order.
        let swapped = BitRenderer::with_host_endianness(value.swap_bytes(), other_host);
        assert_eq!(native, swapped);
        assert_eq!(native.to_bitstring(), swapped.to_bitstring());
    }

    #[test]
    fn bit_renderer_value_composite() {
        let renderer = BitRenderer::new([0x0102u16, 0x0304]);
        assert_eq!(renderer.value(), [0x0102, 0x0304]);
        let bitstring = renderer.to_bitstring();
        let parsed = BitRenderer::<[u16; 2]>::from_bitstring(&bitstring).unwrap();
        assert_eq!(parsed.value(), [0x0102, 0x0304]);
        assert_eq!(
            parsed.canonical_bytes().to_value::<[u16; 2]>(),
            Ok([0x0102, 0x0304])
        );
    }

    #[test]
    fn bit_renderer_from_bitstring() {
        let renderer = BitRenderer::<i16>::from_bitstring("11111111 11111110").unwrap();
        assert_eq!(renderer.value(), -2);
        assert_eq!(
            BitRenderer::<i16>::from_bitstring("11111111"),
            Err(BitStringParseError::ByteCountMismatch {
                expected: 2,
                actual: 1
            })
        );
    }

    #[test]
    fn bit_renderer_debug() {
        let renderer = BitRenderer::new(1u8);
        assert_eq!(
            format!("{renderer:?}"),
            r#"BitRenderer { type: "u8", bytes: CanonicalBytes([1]) }"#
        );
    }
}
