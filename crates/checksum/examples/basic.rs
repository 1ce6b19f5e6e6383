//! Basic CRC-16/MODBUS usage: one-shot, wire encoding, and streaming APIs.
//!
//! Run with: `cargo run --example basic -p modbus-crc16`

use checksum::{Checksum, Crc16Modbus};

fn main() {
  println!("=== CRC-16/MODBUS Examples ===\n");

  one_shot_examples();
  streaming_examples();
  resume_example();
}

/// One-shot computation: fastest when you have all data in memory.
fn one_shot_examples() {
  println!("--- One-Shot Computation ---\n");

  // The catalog check string
  let crc = Crc16Modbus::checksum(b"123456789");
  println!("CRC-16/MODBUS(\"123456789\"): 0x{crc:04X}");
  assert_eq!(crc, 0x4B37);

  // A real Modbus RTU request: unit 1, read 6 holding registers from 0.
  // On the wire the CRC travels low byte first.
  let frame = [0x01, 0x03, 0x00, 0x00, 0x00, 0x06];
  let wire = Crc16Modbus::checksum_bytes(&frame);
  println!("Request frame CRC bytes:     {:02X} {:02X}", wire[0], wire[1]);
  assert_eq!(wire, [0xC5, 0xC8]);

  // Empty input returns the 0xFFFF seed unchanged
  assert_eq!(Crc16Modbus::checksum_bytes(&[]), [0xFF, 0xFF]);

  println!();
}

/// Streaming computation: process data in chunks.
fn streaming_examples() {
  println!("--- Streaming Computation ---\n");

  let data = b"123456789";

  // Process in chunks - result matches one-shot
  let mut hasher = Crc16Modbus::new();
  hasher.update(b"1234");
  hasher.update(b"56789");
  let crc = hasher.finalize();

  println!("Streaming CRC: 0x{crc:04X}");
  assert_eq!(crc, Crc16Modbus::checksum(data));

  // finalize() is non-consuming: can continue after
  hasher.update(b"...");
  let extended = hasher.finalize();
  println!("Extended CRC:  0x{extended:04X}");

  // reset() clears state for reuse
  hasher.reset();
  hasher.update(b"new data");
  println!("Reset CRC:     0x{:04X}", hasher.finalize());

  println!();
}

/// Resume computation from a saved checksum state.
fn resume_example() {
  println!("--- Resume from Saved State ---\n");

  let part1: &[u8] = &[0x01, 0x03, 0x00];
  let part2: &[u8] = &[0x00, 0x00, 0x06];

  // Compute partial CRC and save it
  let saved_state = Crc16Modbus::checksum(part1);
  println!("Saved state after part1: 0x{saved_state:04X}");

  // Later, resume from saved state
  let mut resumed = Crc16Modbus::resume(saved_state);
  resumed.update(part2);
  let final_crc = resumed.finalize();
  println!("Final CRC after resume:  0x{final_crc:04X}");

  // Verify: should match processing the whole frame at once
  assert_eq!(final_crc, 0xC8C5);
  println!("Verified: matches full computation");

  println!();
}
