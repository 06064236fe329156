//! A rust library that renders the raw memory of fixed-size values as canonical bit strings.
//!
//! The bytes of a value are copied into [`CanonicalBytes`] in big endian (network) order regardless of the host byte order.
//! They are then rendered as `0`/`1` digits, most significant bit first within each byte, with bytes separated by a single space.
//! The same value therefore renders identically on any host, which makes the output suitable for debuggers, protocol inspectors, and test fixtures.
//!
//! Any [`bytemuck::NoUninit`] type is supported: integers, floats, arrays of them, and `#[repr(C)]` structs without padding.
//! Types containing pointers, owned resources, or padding are rejected at compile time.
//!
//! ## Example
//! ```rust
//! use bitrender::{to_bits, BitRenderer};
//!
//! assert_eq!(to_bits(5u8).to_bitstring(), "00000101");
//! assert_eq!(to_bits(0x0102u16).to_bitstring(), "00000001 00000010");
//! assert_eq!(to_bits(1.0f32).to_bitstring(), "00111111 10000000 00000000 00000000");
//!
//! let renderer = BitRenderer::<i32>::from_bitstring("11111111 11111111 11111111 11111111")?;
//! assert_eq!(renderer.value(), -1);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Host Byte Order
//! The host byte order is probed at runtime (see [`endianness::host_endianness`]) and cached according to the global [`config`].
//! A host that is neither big nor little endian is unsupported: construction panics rather than producing incorrect output.
//!
//! ## Licence
//! `bitrender` is licensed under either of
//!  - the Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> or
//!  - the MIT license <http://opensource.org/licenses/MIT>, at your option.
//!
//! Unless you explicitly state otherwise, any contribution intentionally submitted for inclusion in the work by you, as defined in the Apache-2.0 license, shall be dual licensed as above, without any additional terms or conditions.

#![warn(unused_variables)]
#![warn(dead_code)]
#![deny(missing_docs)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![deny(clippy::missing_panics_doc)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

pub mod bit_renderer;
pub mod bit_string;
pub mod canonical_bytes;
pub mod config;
pub mod endianness;

pub use bit_renderer::{to_bits, BitRenderer};
pub use bit_string::{parse_bitstring, BitStringParseError};
pub use canonical_bytes::{CanonicalBytes, CanonicalBytesError};
pub use endianness::{Endianness, UnsupportedByteOrderError};
