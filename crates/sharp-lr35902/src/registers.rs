//! LR35902 register file.

use crate::flags::FLAG_MASK;

/// Composite register pair identifier.
///
/// Two 8-bit registers viewed as one 16-bit value, first-named register
/// in the high byte. AF exists only for PUSH/POP.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pair {
    Bc,
    De,
    Hl,
    Af,
}

/// LR35902 register set.
///
/// Eight 8-bit registers plus the 16-bit stack pointer and program
/// counter. The low nibble of F is not implemented on hardware; every
/// write path through this struct keeps it zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Registers {
    /// Accumulator.
    pub a: u8,
    /// Flags (upper nibble only; see `flags`).
    pub f: u8,
    pub b: u8,
    pub c: u8,
    pub d: u8,
    pub e: u8,
    pub h: u8,
    pub l: u8,
    /// Stack pointer.
    pub sp: u16,
    /// Program counter.
    pub pc: u16,
}

impl Registers {
    /// Read a composite pair, high byte first.
    #[must_use]
    pub const fn pair(&self, id: Pair) -> u16 {
        let (hi, lo) = match id {
            Pair::Bc => (self.b, self.c),
            Pair::De => (self.d, self.e),
            Pair::Hl => (self.h, self.l),
            Pair::Af => (self.a, self.f),
        };
        (hi as u16) << 8 | lo as u16
    }

    /// Write a composite pair, decomposing high byte first.
    ///
    /// Writing AF masks the low nibble of F to zero.
    pub fn set_pair(&mut self, id: Pair, value: u16) {
        let hi = (value >> 8) as u8;
        let lo = value as u8;
        match id {
            Pair::Bc => {
                self.b = hi;
                self.c = lo;
            }
            Pair::De => {
                self.d = hi;
                self.e = lo;
            }
            Pair::Hl => {
                self.h = hi;
                self.l = lo;
            }
            Pair::Af => {
                self.a = hi;
                self.f = lo & FLAG_MASK;
            }
        }
    }

    #[must_use]
    pub const fn hl(&self) -> u16 {
        self.pair(Pair::Hl)
    }

    /// OR `mask` into F.
    pub fn flag_set(&mut self, mask: u8) {
        self.f |= mask & FLAG_MASK;
    }

    /// Clear the bits of `mask` in F.
    ///
    /// Instruction bodies reset forced-zero bits before setting active
    /// ones; the other order leaves stale bits behind.
    pub fn flag_reset(&mut self, mask: u8) {
        self.f &= !mask;
    }

    /// True if every bit of `mask` is set in F.
    #[must_use]
    pub const fn flag(&self, mask: u8) -> bool {
        self.f & mask == mask
    }
}
