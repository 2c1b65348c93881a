//! LR35902 flag register bits.
//!
//! The F register only implements its upper nibble; bits 3-0 read as
//! zero on hardware and every write path here masks them off.

/// Zero flag (bit 7) - set if result is zero.
pub const ZF: u8 = 0b1000_0000;

/// Subtract flag (bit 6) - set if last operation was a subtraction.
pub const NF: u8 = 0b0100_0000;

/// Half-carry flag (bit 5) - carry/borrow out of bit 3.
pub const HF: u8 = 0b0010_0000;

/// Carry flag (bit 4) - carry/borrow out of bit 7.
pub const CF: u8 = 0b0001_0000;

/// Mask of the implemented flag bits; the low nibble of F is always zero.
pub const FLAG_MASK: u8 = 0b1111_0000;

/// ZF if `value` is zero, else no flags.
#[must_use]
pub const fn zf(value: u8) -> u8 {
    if value == 0 {
        ZF
    } else {
        0
    }
}
