//! Register width types (XLEN).
//!
//! Only the parts of the width that show up in a C tracer header live here:
//! the numeric width and the C type used for pc/address/value parameters.

use std::fmt::Debug;

/// Marker type for 32-bit register width.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rv32;

/// Marker type for 64-bit register width.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rv64;

/// Register-width-dependent header parameters.
pub trait Xlen: Copy + Clone + Send + Sync + Default + Debug + 'static {
    /// XLEN value (32 or 64).
    const VALUE: u8;

    /// C type for a full-width register (`uint32_t` / `uint64_t`).
    const REG_TYPE: &'static str;
}

impl Xlen for Rv32 {
    const VALUE: u8 = 32;
    const REG_TYPE: &'static str = "uint32_t";
}

impl Xlen for Rv64 {
    const VALUE: u8 = 64;
    const REG_TYPE: &'static str = "uint64_t";
}

/// Get C type for register width.
#[must_use]
pub const fn reg_type<X: Xlen>() -> &'static str {
    X::REG_TYPE
}
