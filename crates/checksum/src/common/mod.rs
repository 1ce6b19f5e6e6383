//! Common utilities for CRC computation.
//!
//! This module provides the bitwise reference implementation that every
//! optimized kernel is verified against.

pub mod reference;
