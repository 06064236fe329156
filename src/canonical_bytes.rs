//! The canonical (big endian) byte representation of a fixed-size value.

use bytemuck::{AnyBitPattern, NoUninit};
use derive_more::Deref;
use thiserror::Error;

use crate::{
    bit_string::{parse_bitstring, render_bytes, BitStringParseError},
    endianness::{host_endianness, Endianness, CANONICAL_ENDIAN},
};

/// Canonical bytes could not be reinterpreted as a value.
#[derive(Clone, Eq, PartialEq, Debug, Error)]
pub enum CanonicalBytesError {
    /// The number of canonical bytes does not match the size of the target type.
    #[error("canonical bytes have length {actual}, expected {expected}")]
    SizeMismatch {
        /// The size of the target type.
        expected: usize,
        /// The number of canonical bytes.
        actual: usize,
    },
}

/// The raw bytes of a value, most significant byte first regardless of the host byte order.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Deref)]
#[deref(forward)]
pub struct CanonicalBytes(Vec<u8>);

impl core::fmt::Display for CanonicalBytes {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.to_bitstring())
    }
}

impl CanonicalBytes {
    /// Create canonical bytes from bytes that are already most significant byte first.
    #[must_use]
    pub fn new(big_endian_bytes: Vec<u8>) -> Self {
        Self(big_endian_bytes)
    }

    /// Reorder the in-memory bytes of a value stored on a `host` with the given byte order.
    ///
    /// Source byte `i` becomes canonical byte `i` on a big endian host and canonical byte `len - 1 - i` on a little endian host.
    #[must_use]
    pub fn from_native_bytes(native_bytes: &[u8], host: Endianness) -> Self {
        if host == CANONICAL_ENDIAN {
            Self(native_bytes.to_vec())
        } else {
            Self(native_bytes.iter().rev().copied().collect())
        }
    }

    /// Create canonical bytes from the memory representation of `value`.
    ///
    /// # Panics
    /// Panics if the host byte order is neither big nor little endian.
    #[must_use]
    pub fn from_value<T: NoUninit>(value: &T) -> Self {
        Self::from_value_with_host(value, host_endianness())
    }

    /// Create canonical bytes from the memory representation of `value`, as if stored on a `host` with the given byte order.
    #[must_use]
    pub fn from_value_with_host<T: NoUninit>(value: &T, host: Endianness) -> Self {
        Self::from_native_bytes(bytemuck::bytes_of(value), host)
    }

    /// Parse canonical bytes from a bit string.
    ///
    /// # Errors
    /// Returns a [`BitStringParseError`] if `bitstring` is not a valid bit string.
    pub fn from_bitstring(bitstring: &str) -> Result<Self, BitStringParseError> {
        parse_bitstring(bitstring).map(Self)
    }

    /// Return the canonical bytes.
    #[must_use]
    pub fn as_be_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Convert into the underlying canonical bytes.
    #[must_use]
    pub fn into_be_bytes(self) -> Vec<u8> {
        self.0
    }

    /// Return the bytes in the memory order of a `host` with the given byte order.
    #[must_use]
    pub fn to_native_bytes(&self, host: Endianness) -> Vec<u8> {
        // Reversal is its own inverse.
        Self::from_native_bytes(&self.0, host).0
    }

    /// Reinterpret the canonical bytes as a value on this host.
    ///
    /// # Errors
    /// Returns [`CanonicalBytesError::SizeMismatch`] if the size of `T` differs from the number of canonical bytes.
    ///
    /// # Panics
    /// Panics if the host byte order is neither big nor little endian.
    pub fn to_value<T: AnyBitPattern>(&self) -> Result<T, CanonicalBytesError> {
        self.to_value_with_host(host_endianness())
    }

    /// Reinterpret the canonical bytes as a value, as if on a `host` with the given byte order.
    ///
    /// # Errors
    /// Returns [`CanonicalBytesError::SizeMismatch`] if the size of `T` differs from the number of canonical bytes.
    pub fn to_value_with_host<T: AnyBitPattern>(
        &self,
        host: Endianness,
    ) -> Result<T, CanonicalBytesError> {
        let expected = std::mem::size_of::<T>();
        if self.0.len() != expected {
            return Err(CanonicalBytesError::SizeMismatch {
                expected,
                actual: self.0.len(),
            });
        }
        Ok(bytemuck::pod_read_unaligned(&self.to_native_bytes(host)))
    }

    /// Render as a bit string, bytes separated by a single space.
    #[must_use]
    pub fn to_bitstring(&self) -> String {
        render_bytes(&self.0)
    }
}
