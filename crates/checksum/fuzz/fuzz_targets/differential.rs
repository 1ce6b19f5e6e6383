//! Cross-kernel equivalence fuzzing for CRC-16/MODBUS.
//!
//! Verifies that ALL CRC-16/MODBUS kernels produce identical results for any
//! input. This catches:
//!
//! - Table kernel bugs (chunk boundary conditions, tail handling)
//! - Forced backend selection issues
//! - Table generation defects
//!
//! The oracle is the bitwise reference implementation, which is obviously
//! correct by inspection. All production kernels must match it exactly.

#![no_main]

use checksum::Crc16Modbus;
use checksum::__internal::kernel_test::{run_all_crc16_modbus_kernels, verify_crc16_modbus_kernels};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
  let results = run_all_crc16_modbus_kernels(data);

  // All kernels must produce identical results
  if results.len() >= 2 {
    let expected = results[0].checksum;
    for result in &results[1..] {
      assert_eq!(
        result.checksum, expected,
        "CRC-16/MODBUS kernel mismatch: {} produced 0x{:04X}, but {} produced 0x{:04X}, len={}",
        result.name,
        result.checksum,
        results[0].name,
        expected,
        data.len()
      );
    }
  }

  // Paranoid check: verify against the verification function
  let crc = verify_crc16_modbus_kernels(data).expect("CRC-16/MODBUS kernel verification failed");

  // The production dispatch must agree with the kernels it dispatches to
  assert_eq!(crc, Crc16Modbus::checksum(data));
});
