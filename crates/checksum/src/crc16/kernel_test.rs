//! Kernel testing utilities for CRC-16/MODBUS.
//!
//! This module provides functions to run ALL available CRC-16/MODBUS kernels
//! and return their results. Used by fuzz targets and tests to verify
//! cross-kernel equivalence.
//!
//! # Design
//!
//! The oracle is the bitwise reference implementation, which is obviously
//! correct by inspection. All production kernels (byte-at-a-time, slice-by-8)
//! must produce identical results to the reference for any input.

use crate::common::reference::crc16_bitwise;
use crate::constants::crc16_modbus::{INIT, POLYNOMIAL};

/// Reference (bitwise) kernel name.
pub const REFERENCE: &str = "reference/bitwise";
/// Byte-at-a-time table kernel name.
#[cfg(not(feature = "no-tables"))]
pub const PORTABLE_BYTE: &str = "portable/byte";
/// Slice-by-8 table kernel name.
#[cfg(not(feature = "no-tables"))]
pub const PORTABLE_SLICE8: &str = "portable/slice8";

/// Result from running a kernel.
#[derive(Debug, Clone, Copy)]
pub struct KernelResult {
  /// Kernel name (e.g., "reference/bitwise", "portable/slice8")
  pub name: &'static str,
  /// Finalized checksum value
  pub checksum: u16,
}

/// Run all available CRC-16/MODBUS kernels on the given data.
///
/// Returns a vector of (kernel_name, checksum) pairs. All checksums should
/// be identical if the kernels are correct. The first entry is always the
/// bitwise reference implementation.
#[must_use]
pub fn run_all_crc16_modbus_kernels(data: &[u8]) -> alloc::vec::Vec<KernelResult> {
  use alloc::vec::Vec;

  let mut results = Vec::new();

  // Oracle: bitwise reference
  // CRC-16/MODBUS uses init=0xFFFF, xorout=0x0000
  let reference = crc16_bitwise(POLYNOMIAL, INIT, data);
  results.push(KernelResult {
    name: REFERENCE,
    checksum: reference,
  });

  #[cfg(not(feature = "no-tables"))]
  {
    use super::portable;

    // Byte-at-a-time table kernel
    results.push(KernelResult {
      name: PORTABLE_BYTE,
      checksum: portable::crc16_modbus_byte(INIT, data),
    });

    // Slice-by-8 table kernel
    results.push(KernelResult {
      name: PORTABLE_SLICE8,
      checksum: portable::crc16_modbus_slice8(INIT, data),
    });
  }

  results
}

/// Verify all CRC-16/MODBUS kernels produce the same result.
///
/// Returns `Ok(checksum)` if all agree, or `Err` with details of mismatches.
/// A disagreement here is an initialization/build defect: it must abort the
/// harness rather than let a wrong checksum pass as plausible output.
pub fn verify_crc16_modbus_kernels(data: &[u8]) -> Result<u16, alloc::string::String> {
  let results = run_all_crc16_modbus_kernels(data);
  verify_kernel_agreement(&results)
}

fn verify_kernel_agreement(results: &[KernelResult]) -> Result<u16, alloc::string::String> {
  use alloc::{format, string::ToString};

  let first = results.first().ok_or_else(|| "no kernels available".to_string())?;
  let expected = first.checksum;

  for result in results.iter().skip(1) {
    if result.checksum != expected {
      return Err(format!(
        "kernel mismatch: {} produced 0x{:04X}, but {} produced 0x{:04X}",
        first.name, expected, result.name, result.checksum
      ));
    }
  }

  Ok(expected)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_all_kernels_agree_empty() {
    let crc = verify_crc16_modbus_kernels(&[]).expect("kernels should agree on empty input");
    assert_eq!(crc, 0xFFFF);
  }

  #[test]
  fn test_all_kernels_agree_small() {
    let crc = verify_crc16_modbus_kernels(b"123456789").expect("kernels should agree on small input");
    assert_eq!(crc, 0x4B37);
  }

  #[test]
  fn test_all_kernels_agree_medium() {
    let data: alloc::vec::Vec<u8> = (0..1024).map(|i| (i as u8).wrapping_mul(17)).collect();
    verify_crc16_modbus_kernels(&data).expect("kernels should agree on medium input");
  }

  #[test]
  fn test_all_kernels_agree_large() {
    let data: alloc::vec::Vec<u8> = (0..65536).map(|i| (i as u8).wrapping_mul(31)).collect();
    verify_crc16_modbus_kernels(&data).expect("kernels should agree on large input");
  }

  #[test]
  fn test_reference_is_first() {
    let results = run_all_crc16_modbus_kernels(b"ordering");
    assert_eq!(results[0].name, REFERENCE);
  }
}
