//! Precomputed constants for the Modbus CRC16 algorithm.
//!
//! This module contains the polynomial, the compile-time generated lookup
//! tables, and the known-good reference table they are verified against.
//!
//! # Cache Alignment
//!
//! Lookup tables are 64-byte (cache line) aligned using [`Aligned64`] to prevent
//! cache line splits during table lookups.

#[cfg(not(feature = "no-tables"))]
pub mod tables;

pub mod crc16_modbus;

/// Wrapper type to force 64-byte (cache line) alignment.
///
/// Used to align lookup tables for optimal cache behavior.
/// The inner type `T` is accessible via `.0`.
#[cfg(not(feature = "no-tables"))]
#[repr(align(64))]
pub struct Aligned64<T>(pub T);
