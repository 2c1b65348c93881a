//! ALU primitives for the LR35902.
//!
//! These are the single source of truth for flag computation: every
//! flag-producing instruction routes through [`add8`], [`sub8`] or
//! [`add16`] rather than recomputing carry logic inline.

use crate::flags::{zf, CF, HF, NF, ZF};

/// Result of an 8-bit ALU operation with flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AluResult {
    pub value: u8,
    pub flags: u8,
}

/// Result of a 16-bit ALU operation with flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WideResult {
    pub value: u16,
    pub flags: u8,
}

/// Add two bytes plus a carry-in, returning the result and flags.
///
/// `carry_in` is clamped to {0, 1}. Z reflects the result, H the nibble
/// sum, C the full sum; N is always clear.
#[must_use]
pub const fn add8(a: u8, b: u8, carry_in: u8) -> AluResult {
    let carry = if carry_in > 1 { 1 } else { carry_in };
    let sum = a as u16 + b as u16 + carry as u16;
    let value = sum as u8;

    let mut flags = zf(value);
    if (a & 0x0F) + (b & 0x0F) + carry > 0x0F {
        flags |= HF;
    }
    if sum > 0xFF {
        flags |= CF;
    }

    AluResult { value, flags }
}

/// Subtract a byte and a borrow-in from `a`, returning the result and
/// flags.
///
/// `carry_in` is clamped to {0, 1}. Two's-complement borrow arithmetic:
/// H reflects the nibble borrow, C the full borrow; N is always set.
#[must_use]
pub const fn sub8(a: u8, b: u8, carry_in: u8) -> AluResult {
    let borrow = if carry_in > 1 { 1 } else { carry_in };
    let value = a.wrapping_sub(b).wrapping_sub(borrow);

    let mut flags = NF | zf(value);
    if (a & 0x0F) < (b & 0x0F) + borrow {
        flags |= HF;
    }
    if (a as u16) < b as u16 + borrow as u16 {
        flags |= CF;
    }

    AluResult { value, flags }
}

/// Add two words by chaining [`add8`] across the low and high bytes,
/// propagating the carry.
///
/// Z in the returned flags reflects the full 16-bit result, but the
/// 16-bit ADD forms of the instruction set preserve the caller's Z
/// instead of using it; masking is each call site's responsibility.
#[must_use]
pub const fn add16(a: u16, b: u16) -> WideResult {
    let lo = add8(a as u8, b as u8, 0);
    let carry = if lo.flags & CF != 0 { 1 } else { 0 };
    let hi = add8((a >> 8) as u8, (b >> 8) as u8, carry);
    let value = (hi.value as u16) << 8 | lo.value as u16;

    let mut flags = hi.flags & !ZF;
    if value == 0 {
        flags |= ZF;
    }

    WideResult { value, flags }
}
