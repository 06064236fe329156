//! Byte order of values and of the host CPU.
//!
//! Rendered values are always stored in [`CANONICAL_ENDIAN`] (big endian) order.
//! The host byte order is discovered at runtime with [`Endianness::detect`] by storing the `u32` value `1` and inspecting which address holds the non-zero byte.

use std::sync::OnceLock;

use derive_more::Display;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::global_config;

/// Endianness. Either `big` or `little`.
#[derive(Serialize, Deserialize, Copy, Clone, Eq, PartialEq, Hash, Debug, Display)]
#[serde(rename_all = "lowercase")]
pub enum Endianness {
    /// Little endian.
    Little,

    /// Big endian.
    Big,
}

/// The endianness of the CPU according to the compilation target.
pub const NATIVE_ENDIAN: Endianness = if cfg!(target_endian = "big") {
    Endianness::Big
} else {
    Endianness::Little
};

/// The byte order of [`CanonicalBytes`](crate::CanonicalBytes).
pub const CANONICAL_ENDIAN: Endianness = Endianness::Big;

/// The value written to memory to probe the host byte order.
const PROBE: u32 = 1;

/// The host stores multi-byte integers in an order that is neither big nor little endian.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Error)]
#[error("unsupported host byte order, the u32 value 1 is stored as {0:?}")]
pub struct UnsupportedByteOrderError([u8; 4]);

impl UnsupportedByteOrderError {
    /// Return the in-memory bytes of the probe value.
    #[must_use]
    pub fn probe(&self) -> [u8; 4] {
        self.0
    }
}

impl Endianness {
    /// Returns the native endianness of the CPU.
    #[must_use]
    pub fn native() -> Endianness {
        NATIVE_ENDIAN
    }

    /// Return true if the endianness matches the endianness of the CPU.
    #[must_use]
    pub fn is_native(self) -> bool {
        self == NATIVE_ENDIAN
    }

    /// Detect the host byte order by probing the memory layout of a `u32`.
    ///
    /// # Errors
    /// Returns an [`UnsupportedByteOrderError`] if the host is neither big nor little endian.
    pub fn detect() -> Result<Endianness, UnsupportedByteOrderError> {
        Self::from_probe(probe_bytes())
    }

    /// Classify the in-memory bytes of the `u32` value `1`.
    ///
    /// # Errors
    /// Returns an [`UnsupportedByteOrderError`] unless the non-zero byte is at the first (little endian) or last (big endian) address.
    pub fn from_probe(probe: [u8; 4]) -> Result<Endianness, UnsupportedByteOrderError> {
        match probe {
            [1, 0, 0, 0] => Ok(Endianness::Little),
            [0, 0, 0, 1] => Ok(Endianness::Big),
            _ => Err(UnsupportedByteOrderError(probe)),
        }
    }
}

static HOST_ENDIANNESS: OnceLock<Endianness> = OnceLock::new();

/// Returns the byte order of the host.
///
/// The probe result is cached for the lifetime of the process unless [cache host endianness](crate::config::Config#cache-host-endianness) is disabled, in which case the host is probed on every call.
///
/// # Panics
/// Panics if the host byte order is neither big nor little endian.
/// No output can be canonicalised on such a host.
#[must_use]
pub fn host_endianness() -> Endianness {
    if global_config().cache_host_endianness() {
        *HOST_ENDIANNESS.get_or_init(detect_or_abort)
    } else {
        log::trace!("host endianness cache disabled, probing");
        detect_or_abort()
    }
}

/// The in-memory bytes of [`PROBE`] on this host.
fn probe_bytes() -> [u8; 4] {
    bytemuck::cast(std::hint::black_box(PROBE))
}

fn detect_or_abort() -> Endianness {
    endianness_or_abort(probe_bytes())
}

fn endianness_or_abort(probe: [u8; 4]) -> Endianness {
    match Endianness::from_probe(probe) {
        Ok(endianness) => {
            log::debug!("detected {endianness} endian host");
            endianness
        }
        Err(err) => {
            log::error!("{err}");
            panic!("{err}");
        }
    }
}
