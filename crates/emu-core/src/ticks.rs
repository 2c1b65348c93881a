//! The fundamental unit of time in the emulator.

/// A count of T-states, the smallest CPU clock tick.
///
/// All timing is expressed in T-states; one machine cycle is four
/// T-states. The CPU reports the cost of every executed instruction in
/// this unit so a future scheduler can tick other components in
/// lockstep.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Ticks(pub u64);

impl Ticks {
    pub const ZERO: Self = Self(0);

    #[must_use]
    pub const fn new(count: u64) -> Self {
        Self(count)
    }

    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }

    /// This count expressed in machine cycles of four T-states each,
    /// the unit most LR35902 instruction references quote.
    #[must_use]
    pub const fn machine_cycles(self) -> u64 {
        self.0 / 4
    }
}

impl From<u8> for Ticks {
    fn from(count: u8) -> Self {
        Self(u64::from(count))
    }
}

impl core::ops::Add for Ticks {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl core::ops::AddAssign for Ticks {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}
