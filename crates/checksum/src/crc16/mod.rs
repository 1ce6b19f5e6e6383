//! CRC16/Modbus checksum.
//!
//! One variant, two strategies:
//!
//! | Strategy | Per-byte work | Role |
//! |----------|---------------|------|
//! | Table-driven | 1 lookup + 2 XORs | Production fast path |
//! | Bitwise | 8-iteration bit loop | Reference oracle, fallback |
//!
//! # Example
//!
//! ```
//! use checksum::Crc16Modbus;
//!
//! let crc = Crc16Modbus::checksum(b"123456789");
//! assert_eq!(crc, 0x4B37);
//! ```

pub mod modbus;

#[cfg(not(feature = "no-tables"))]
pub mod config;
#[cfg(feature = "alloc")]
pub mod kernel_test;
#[cfg(not(feature = "no-tables"))]
pub(crate) mod portable;

#[cfg(test)]
mod proptests;

pub use modbus::Crc16Modbus;

/// Convenience alias: this crate implements exactly one CRC16 variant.
pub type Crc16 = Crc16Modbus;
