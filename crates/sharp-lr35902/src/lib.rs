//! Sharp LR35902 CPU emulator.
//!
//! The LR35902 is the Game Boy's CPU: an 8080-derived core with the Z80's
//! CB-prefixed bit operations but none of its index registers or shadow
//! set. Instructions are decoded through two dense 256-entry tables
//! ([`opcodes::OPCODES`] and [`opcodes::CB_OPCODES`]) and executed by a
//! single data-driven interpreter.

mod alu;
mod cpu;
mod flags;
pub mod opcodes;
mod registers;

pub use alu::{add8, add16, sub8, AluResult, WideResult};
pub use cpu::Lr35902;
pub use flags::{CF, HF, NF, ZF};
pub use registers::{Pair, Registers};
