//! Core traits and types shared by the CPU core and its hosts.
//!
//! The CPU accesses memory through the [`Bus`] trait and reports elapsed
//! time as [`Ticks`] of the master clock. Hosts that just need a flat
//! address space use [`SimpleBus`].

mod bus;
mod cpu;
mod ticks;

pub use bus::{Bus, SimpleBus};
pub use cpu::Cpu;
pub use ticks::Ticks;
