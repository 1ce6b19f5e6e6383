//! Modbus CRC16 checksum.
//!
//! This crate implements the CRC16 variant used by Modbus RTU: polynomial
//! 0x8005 (reflected form 0xA001), initial value 0xFFFF, no final XOR, with
//! the result transmitted low byte first.
//!
//! # Strategies
//!
//! Two interchangeable computation strategies are provided:
//!
//! | Strategy | Cost per byte | Memory | Role |
//! |----------|---------------|--------|------|
//! | Table-driven | 1 lookup + 2 XOR | 256-entry table (compile-time) | Production fast path |
//! | Bitwise | 8-iteration bit loop | none | Reference oracle, `no-tables` fallback |
//!
//! Both strategies are bit-for-bit equivalent for every input. The lookup
//! tables are generated at compile time from the bitwise reduction and
//! verified against a known-good reference table; a mismatch fails the build.
//!
//! # Example
//!
//! ```rust
//! use checksum::{Checksum, Crc16Modbus};
//!
//! // One-shot computation
//! let crc = Crc16Modbus::checksum(&[0x01, 0x03, 0x00, 0x00, 0x00, 0x06]);
//! assert_eq!(crc, 0xC8C5);
//!
//! // Wire encoding: low byte first, per the Modbus convention
//! assert_eq!(Crc16Modbus::checksum_bytes(&[0x01, 0x03, 0x00, 0x00, 0x00, 0x06]), [0xC5, 0xC8]);
//!
//! // Streaming computation
//! let mut hasher = Crc16Modbus::new();
//! hasher.update(&[0x01, 0x03, 0x00]);
//! hasher.update(&[0x00, 0x00, 0x06]);
//! assert_eq!(hasher.finalize(), crc);
//! ```
//!
//! # no_std Support
//!
//! This crate is `no_std` compatible. Disable the `std` feature for embedded
//! use:
//!
//! ```toml
//! [dependencies]
//! modbus-crc16 = { version = "0.1", default-features = false }
//! ```
//!
//! The `no-tables` feature removes the compile-time lookup tables entirely and
//! computes bit-by-bit, for targets where 512 bytes of table memory matter
//! more than throughput.

#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

#[cfg(feature = "alloc")]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

mod common;
mod constants;

pub mod crc16;

#[doc(hidden)]
pub mod __internal {
  pub use crate::common::reference;
  #[cfg(feature = "alloc")]
  pub use crate::crc16::kernel_test;
}

// Re-export public types
pub use crc16::{Crc16, Crc16Modbus};
// Re-export traits for convenience
pub use traits::Checksum;
