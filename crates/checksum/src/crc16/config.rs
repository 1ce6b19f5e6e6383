//! CRC-16/MODBUS runtime configuration (kernel force + tunables).
//!
//! The production dispatch is purely portable; there are no hardware tiers to
//! detect. The force override exists so tests and conformance harnesses can
//! pin a specific strategy and cross-check the others against it.

/// Forced kernel selection for CRC-16/MODBUS.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Crc16Force {
  /// Use the default auto selector (byte-at-a-time vs slice-by-8 by length).
  #[default]
  Auto,
  /// Force the bitwise reference implementation (slow, obviously correct).
  Reference,
  /// Force the byte-at-a-time table kernel.
  Byte,
  /// Force the slice-by-8 table kernel.
  Slice8,
}

impl Crc16Force {
  #[must_use]
  pub const fn as_str(self) -> &'static str {
    match self {
      Self::Auto => "auto",
      Self::Reference => "reference",
      Self::Byte => "byte",
      Self::Slice8 => "slice8",
    }
  }
}

/// CRC-16/MODBUS selection tunables.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Crc16Tunables {
  /// Minimum `len` in bytes to use slice-by-8 (otherwise byte-at-a-time).
  pub byte_to_slice8: usize,
}

/// Full CRC-16/MODBUS runtime configuration (after applying overrides).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Crc16Config {
  /// Requested force mode (env/programmatic).
  pub requested_force: Crc16Force,
  /// Effective force mode.
  ///
  /// Today this is identical to `requested_force` because every kernel is
  /// portable; there are no CPU capabilities to clamp against.
  pub effective_force: Crc16Force,
  /// Tunables used by the selector.
  pub tunables: Crc16Tunables,
}

/// Below this length the slice-by-8 setup cost exceeds its gain, so the
/// byte-at-a-time kernel wins. One cache line is a good crossover default.
const DEFAULT_BYTE_TO_SLICE8: usize = 64;

#[derive(Clone, Copy, Debug, Default)]
struct Overrides {
  force: Crc16Force,
  byte_to_slice8: Option<usize>,
}

#[cfg(feature = "std")]
fn read_env_overrides() -> Overrides {
  fn parse_usize(name: &str) -> Option<usize> {
    let value = std::env::var(name).ok()?;
    let value = value.trim();
    if value.is_empty() {
      return None;
    }
    value.parse::<usize>().ok()
  }

  fn parse_force(name: &str) -> Option<Crc16Force> {
    let value = std::env::var(name).ok()?;
    let value = value.trim();
    if value.is_empty() {
      return None;
    }

    if value.eq_ignore_ascii_case("auto") {
      return Some(Crc16Force::Auto);
    }
    if value.eq_ignore_ascii_case("reference") || value.eq_ignore_ascii_case("bitwise") {
      return Some(Crc16Force::Reference);
    }
    if value.eq_ignore_ascii_case("byte") || value.eq_ignore_ascii_case("table") {
      return Some(Crc16Force::Byte);
    }
    if value.eq_ignore_ascii_case("slice8") || value.eq_ignore_ascii_case("slice-8") {
      return Some(Crc16Force::Slice8);
    }

    None
  }

  Overrides {
    force: parse_force("MODBUS_CRC16_FORCE").unwrap_or(Crc16Force::Auto),
    byte_to_slice8: parse_usize("MODBUS_CRC16_THRESHOLD_BYTE_TO_SLICE8"),
  }
}

#[cfg(feature = "std")]
fn overrides() -> Overrides {
  use std::sync::OnceLock;
  static OVERRIDES: OnceLock<Overrides> = OnceLock::new();
  *OVERRIDES.get_or_init(read_env_overrides)
}

#[cfg(not(feature = "std"))]
fn overrides() -> Overrides {
  Overrides::default()
}

#[inline]
#[must_use]
fn config() -> Crc16Config {
  let ov = overrides();

  let mut byte_to_slice8 = DEFAULT_BYTE_TO_SLICE8;
  if let Some(v) = ov.byte_to_slice8 {
    byte_to_slice8 = v.max(1);
  }

  Crc16Config {
    requested_force: ov.force,
    effective_force: ov.force,
    tunables: Crc16Tunables { byte_to_slice8 },
  }
}

/// Cached process-wide CRC-16/MODBUS configuration.
///
/// The first caller computes the configuration; every later caller (on any
/// thread) observes the same value. Without `std` there is no environment to
/// read, so defaults are returned directly.
#[inline]
#[must_use]
pub fn get() -> Crc16Config {
  #[cfg(feature = "std")]
  {
    use std::sync::OnceLock;
    static CACHED: OnceLock<Crc16Config> = OnceLock::new();
    *CACHED.get_or_init(config)
  }

  #[cfg(not(feature = "std"))]
  {
    config()
  }
}
