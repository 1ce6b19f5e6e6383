//! CRC-16/MODBUS checksum.
//!
//! Parameters (CRC Catalogue):
//! - width: 16
//! - poly: 0x8005 (reflected: 0xA001)
//! - init: 0xFFFF
//! - refin/refout: true
//! - xorout: 0x0000
//!
//! The Modbus wire convention transmits the CRC low byte first; use
//! [`Crc16Modbus::checksum_bytes`] to get the two bytes in transmission order.
//!
//! # Usage
//!
//! ```
//! use checksum::Crc16Modbus;
//!
//! let crc = Crc16Modbus::checksum(b"123456789");
//! assert_eq!(crc, 0x4B37);
//!
//! let wire = Crc16Modbus::checksum_bytes(&[0x01, 0x03, 0x00, 0x00, 0x00, 0x06]);
//! assert_eq!(wire, [0xC5, 0xC8]);
//! ```

use traits::Checksum;

use crate::common::reference;
use crate::constants::crc16_modbus::POLYNOMIAL;

/// CRC-16/MODBUS checksum.
///
/// This struct implements streaming CRC computation for the Modbus RTU
/// variant. The computation is pure: identical input always yields identical
/// output, and the lookup tables are process-wide read-only data, so any
/// number of threads may compute checksums concurrently.
#[derive(Clone, Debug)]
pub struct Crc16Modbus {
  /// Current CRC state.
  state: u16,
  /// Initial value for reset.
  initial: u16,
}

impl Crc16Modbus {
  /// Initial register value for CRC-16/MODBUS.
  const INIT: u16 = 0xFFFF;
  const XOR_OUT: u16 = 0x0000;

  #[inline]
  #[must_use]
  pub const fn new() -> Self {
    Self {
      state: Self::INIT,
      initial: Self::INIT,
    }
  }

  /// Create a new hasher that will resume from a previous CRC.
  #[inline]
  #[must_use]
  pub const fn resume(crc: u16) -> Self {
    Self {
      state: crc ^ Self::XOR_OUT,
      initial: crc ^ Self::XOR_OUT,
    }
  }

  /// Compute CRC-16/MODBUS of `data` in one shot.
  #[inline]
  #[must_use]
  pub fn checksum(data: &[u8]) -> u16 {
    dispatch(Self::INIT, data) ^ Self::XOR_OUT
  }

  /// Compute CRC-16/MODBUS of `data` and encode it in wire order.
  ///
  /// Modbus transmits the CRC low byte first; the returned array is exactly
  /// the two bytes appended to an RTU frame. Empty input yields the seed
  /// unchanged, `[0xFF, 0xFF]`.
  #[inline]
  #[must_use]
  pub fn checksum_bytes(data: &[u8]) -> [u8; 2] {
    Self::wire_bytes(Self::checksum(data))
  }

  /// Encode a CRC value in Modbus wire order (low byte first).
  #[inline]
  #[must_use]
  pub const fn wire_bytes(crc: u16) -> [u8; 2] {
    crc.to_le_bytes()
  }

  /// Decode a CRC value from Modbus wire order (low byte first).
  #[inline]
  #[must_use]
  pub const fn from_wire_bytes(bytes: [u8; 2]) -> u16 {
    u16::from_le_bytes(bytes)
  }

  #[inline]
  pub fn update(&mut self, data: &[u8]) {
    self.state = dispatch(self.state, data);
  }

  #[inline]
  #[must_use]
  pub const fn finalize(&self) -> u16 {
    self.state ^ Self::XOR_OUT
  }

  #[inline]
  pub fn reset(&mut self) {
    self.state = self.initial;
  }

  #[inline]
  #[must_use]
  pub const fn state(&self) -> u16 {
    self.finalize()
  }
}

impl Default for Crc16Modbus {
  #[inline]
  fn default() -> Self {
    Self::new()
  }
}

impl Checksum for Crc16Modbus {
  const OUTPUT_SIZE: usize = 2;
  type Output = u16;

  #[inline]
  fn new() -> Self {
    Crc16Modbus::new()
  }

  #[inline]
  fn with_initial(initial: Self::Output) -> Self {
    Self {
      state: initial ^ Self::XOR_OUT,
      initial: initial ^ Self::XOR_OUT,
    }
  }

  #[inline]
  fn update(&mut self, data: &[u8]) {
    Crc16Modbus::update(self, data);
  }

  #[inline]
  fn finalize(&self) -> Self::Output {
    Crc16Modbus::finalize(self)
  }

  #[inline]
  fn reset(&mut self) {
    Crc16Modbus::reset(self);
  }

  #[inline]
  fn checksum(data: &[u8]) -> Self::Output {
    Crc16Modbus::checksum(data)
  }
}

/// Returns the CRC-16/MODBUS backend used by this build.
#[doc(hidden)]
#[inline]
#[must_use]
pub fn selected_backend() -> &'static str {
  #[cfg(feature = "no-tables")]
  return "reference/bitwise";

  #[cfg(not(feature = "no-tables"))]
  {
    use super::config::Crc16Force;
    match super::config::get().effective_force {
      Crc16Force::Auto => "portable/auto",
      Crc16Force::Reference => "reference/bitwise",
      Crc16Force::Byte => "portable/byte",
      Crc16Force::Slice8 => "portable/slice8",
    }
  }
}

#[cfg(feature = "std")]
impl std::io::Write for Crc16Modbus {
  #[inline]
  fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
    self.update(buf);
    Ok(buf.len())
  }

  #[inline]
  fn flush(&mut self) -> std::io::Result<()> {
    Ok(())
  }
}

/// Compute CRC-16/MODBUS over `data`, returning the updated *raw* CRC state.
#[inline]
fn dispatch(crc: u16, data: &[u8]) -> u16 {
  #[cfg(feature = "no-tables")]
  {
    reference::crc16_bitwise(POLYNOMIAL, crc, data)
  }

  #[cfg(not(feature = "no-tables"))]
  {
    use super::config::Crc16Force;
    use super::portable;

    let cfg = super::config::get();
    match cfg.effective_force {
      Crc16Force::Reference => reference::crc16_bitwise(POLYNOMIAL, crc, data),
      Crc16Force::Byte => portable::crc16_modbus_byte(crc, data),
      Crc16Force::Slice8 => portable::crc16_modbus_slice8(crc, data),
      Crc16Force::Auto => {
        if data.len() < cfg.tunables.byte_to_slice8 {
          portable::crc16_modbus_byte(crc, data)
        } else {
          portable::crc16_modbus_slice8(crc, data)
        }
      }
    }
  }
}
