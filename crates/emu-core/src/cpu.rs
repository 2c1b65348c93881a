//! CPU core trait.

use crate::{Bus, Ticks};

/// A CPU core.
///
/// CPUs execute instructions and access memory through a bus. The bus is
/// passed in, not owned, so the host can keep it between steps (for
/// loading programs or inspecting memory) and so independent CPU/bus
/// pairs can coexist in one process.
pub trait Cpu {
    /// The type used for register inspection.
    type Registers;

    /// Fetch, decode and execute one instruction, returning the
    /// T-states it consumed.
    fn step<B: Bus>(&mut self, bus: &mut B) -> Ticks;

    /// Returns the current program counter.
    fn pc(&self) -> u16;

    /// Returns a snapshot of all registers for inspection.
    fn registers(&self) -> Self::Registers;

    /// Returns true if the CPU is halted.
    fn is_halted(&self) -> bool;

    /// Reset the CPU to its initial state.
    fn reset(&mut self);
}
