extern crate std;

use crc::{CRC_16_MODBUS, Crc};
use proptest::prelude::*;

use super::*;
use crate::common::reference::crc16_bitwise;
use crate::constants::crc16_modbus::{INIT, POLYNOMIAL};

/// Ecosystem oracle for cross-validation.
const CRC_CRATE: Crc<u16> = Crc::<u16>::new(&CRC_16_MODBUS);

proptest! {
  #[test]
  fn crc16_modbus_matches_bitwise_reference(data in proptest::collection::vec(any::<u8>(), 0..=4096)) {
    let ours = Crc16Modbus::checksum(&data);
    let reference = crc16_bitwise(POLYNOMIAL, INIT, &data);
    prop_assert_eq!(ours, reference);
  }

  // ─────────────────────────────────────────────────────────────────────────────
  // Cross-validation against the `crc` crate
  // ─────────────────────────────────────────────────────────────────────────────

  #[test]
  fn crc16_modbus_matches_crc_crate(data in proptest::collection::vec(any::<u8>(), 0..=4096)) {
    let ours = Crc16Modbus::checksum(&data);
    let reference = CRC_CRATE.checksum(&data);
    prop_assert_eq!(ours, reference);
  }

  #[test]
  fn crc16_modbus_streaming_matches_oneshot(
    data in proptest::collection::vec(any::<u8>(), 0..=4096),
    chunk in 1usize..=257
  ) {
    let mut ours = Crc16Modbus::new();
    for part in data.chunks(chunk) {
      ours.update(part);
    }
    prop_assert_eq!(ours.finalize(), Crc16Modbus::checksum(&data));
  }

  #[test]
  fn crc16_modbus_resume_matches_oneshot(
    data in proptest::collection::vec(any::<u8>(), 0..=4096),
    split in any::<usize>()
  ) {
    let split = split % (data.len() + 1);
    let (a, b) = data.split_at(split);

    let crc_a = Crc16Modbus::checksum(a);
    let mut resumed = Crc16Modbus::resume(crc_a);
    resumed.update(b);

    prop_assert_eq!(resumed.finalize(), Crc16Modbus::checksum(&data));
  }

  #[test]
  fn crc16_modbus_wire_bytes_are_little_endian(data in proptest::collection::vec(any::<u8>(), 0..=256)) {
    let crc = Crc16Modbus::checksum(&data);
    let wire = Crc16Modbus::checksum_bytes(&data);
    prop_assert_eq!(wire[0], (crc & 0xFF) as u8);
    prop_assert_eq!(wire[1], (crc >> 8) as u8);
  }
}

#[cfg(not(feature = "no-tables"))]
mod table_kernels {
  use super::*;

  proptest! {
    #[test]
    fn byte_kernel_matches_bitwise_reference(data in proptest::collection::vec(any::<u8>(), 0..=4096)) {
      let table = portable::crc16_modbus_byte(INIT, &data);
      let reference = crc16_bitwise(POLYNOMIAL, INIT, &data);
      prop_assert_eq!(table, reference);
    }

    #[test]
    fn slice8_kernel_matches_bitwise_reference(data in proptest::collection::vec(any::<u8>(), 0..=4096)) {
      let table = portable::crc16_modbus_slice8(INIT, &data);
      let reference = crc16_bitwise(POLYNOMIAL, INIT, &data);
      prop_assert_eq!(table, reference);
    }

    #[test]
    fn kernels_agree_from_any_state(
      data in proptest::collection::vec(any::<u8>(), 0..=1024),
      state in any::<u16>()
    ) {
      let byte = portable::crc16_modbus_byte(state, &data);
      let slice8 = portable::crc16_modbus_slice8(state, &data);
      let reference = crc16_bitwise(POLYNOMIAL, state, &data);
      prop_assert_eq!(byte, reference);
      prop_assert_eq!(slice8, reference);
    }
  }
}

#[test]
fn test_vector_crc16_modbus() {
  assert_eq!(Crc16Modbus::checksum(b"123456789"), 0x4B37);
  assert_eq!(CRC_CRATE.checksum(b"123456789"), 0x4B37);
}
