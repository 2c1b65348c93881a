//! The LR35902 CPU core.
//!
//! [`Lr35902::step`] fetches one opcode, looks it up in the dispatch
//! tables and executes it through a single match over [`Instr`]. All
//! operand fetches go through the program counter, so after decoding PC
//! always points past the instruction; relative jumps are applied to
//! that address.

use emu_core::{Bus, Ticks};
use log::{trace, warn};

use crate::alu::{add8, add16, sub8};
use crate::flags::{zf, CF, HF, NF, ZF};
use crate::opcodes::{AluOp, Cond, Ind, Instr, Loc8, Opcode, RotOp, Wide, CB_OPCODES, OPCODES};
use crate::registers::{Pair, Registers};

/// Execution mode. HALT and STOP both park the core; only the entry
/// opcode differs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Running,
    Halted,
    Stopped,
}

/// Sharp LR35902 CPU.
///
/// Owns only its register file and execution mode; memory is reached
/// through the [`Bus`] handed to each step. Construct one per emulated
/// machine.
#[derive(Debug, Clone)]
pub struct Lr35902 {
    regs: Registers,
    mode: Mode,
    /// Interrupt master enable. Tracked for DI/EI/RETI; no interrupt
    /// sources are wired up, so it only affects observable state.
    ime: bool,
}

impl Default for Lr35902 {
    fn default() -> Self {
        Self::new()
    }
}

impl Lr35902 {
    /// Create a CPU in the post-boot state: PC at the cartridge entry
    /// point, SP at the top of high RAM.
    #[must_use]
    pub fn new() -> Self {
        Self {
            regs: Registers {
                sp: 0xFFFE,
                pc: 0x0100,
                ..Registers::default()
            },
            mode: Mode::Running,
            ime: false,
        }
    }

    #[must_use]
    pub const fn registers(&self) -> Registers {
        self.regs
    }

    /// Mutable access to the register file, for hosts that set up
    /// machine state directly.
    pub fn registers_mut(&mut self) -> &mut Registers {
        &mut self.regs
    }

    pub fn set_pc(&mut self, pc: u16) {
        self.regs.pc = pc;
    }

    #[must_use]
    pub const fn is_halted(&self) -> bool {
        matches!(self.mode, Mode::Halted)
    }

    #[must_use]
    pub const fn is_stopped(&self) -> bool {
        matches!(self.mode, Mode::Stopped)
    }

    #[must_use]
    pub const fn interrupts_enabled(&self) -> bool {
        self.ime
    }

    /// Execute one instruction and return its cost in T-states.
    ///
    /// A halted or stopped core idles for one machine cycle per step
    /// instead of fetching.
    pub fn step<B: Bus>(&mut self, bus: &mut B) -> Ticks {
        if self.mode != Mode::Running {
            return Ticks::from(4);
        }

        let byte = self.fetch8(bus);
        let entry: &Opcode = &OPCODES[usize::from(byte)];

        let (entry, byte) = if entry.instr == Instr::Prefix {
            let cb = self.fetch8(bus);
            (&CB_OPCODES[usize::from(cb)], cb)
        } else {
            (entry, byte)
        };

        if entry.instr == Instr::Undefined {
            warn!(
                "undefined opcode {byte:#04X} at {:#06X}, treating as nop",
                self.regs.pc.wrapping_sub(1)
            );
        }

        let surcharge = self.execute(entry.instr, bus);
        Ticks::from(entry.t_states) + Ticks::from(surcharge)
    }

    /// Step until `stop` returns true, observing the CPU between
    /// instructions. Returns the total T-states consumed.
    ///
    /// The predicate decides termination entirely; a core that has
    /// executed HALT or STOP keeps idling (and accruing time) until the
    /// predicate notices.
    pub fn run_until<B: Bus>(
        &mut self,
        bus: &mut B,
        mut stop: impl FnMut(&Self) -> bool,
    ) -> Ticks {
        let mut total = Ticks::ZERO;
        while !stop(self) {
            total += self.step(bus);
        }
        total
    }

    fn fetch8<B: Bus>(&mut self, bus: &mut B) -> u8 {
        let byte = bus.read(self.regs.pc);
        self.regs.pc = self.regs.pc.wrapping_add(1);
        byte
    }

    fn fetch16<B: Bus>(&mut self, bus: &mut B) -> u16 {
        let lo = self.fetch8(bus);
        let hi = self.fetch8(bus);
        u16::from(hi) << 8 | u16::from(lo)
    }

    fn read_loc8<B: Bus>(&mut self, bus: &mut B, loc: Loc8) -> u8 {
        match loc {
            Loc8::A => self.regs.a,
            Loc8::B => self.regs.b,
            Loc8::C => self.regs.c,
            Loc8::D => self.regs.d,
            Loc8::E => self.regs.e,
            Loc8::H => self.regs.h,
            Loc8::L => self.regs.l,
            Loc8::HlInd => bus.read(self.regs.hl()),
        }
    }

    fn write_loc8<B: Bus>(&mut self, bus: &mut B, loc: Loc8, value: u8) {
        match loc {
            Loc8::A => self.regs.a = value,
            Loc8::B => self.regs.b = value,
            Loc8::C => self.regs.c = value,
            Loc8::D => self.regs.d = value,
            Loc8::E => self.regs.e = value,
            Loc8::H => self.regs.h = value,
            Loc8::L => self.regs.l = value,
            Loc8::HlInd => bus.write(self.regs.hl(), value),
        }
    }

    fn wide(&self, id: Wide) -> u16 {
        match id {
            Wide::Bc => self.regs.pair(Pair::Bc),
            Wide::De => self.regs.pair(Pair::De),
            Wide::Hl => self.regs.pair(Pair::Hl),
            Wide::Sp => self.regs.sp,
        }
    }

    fn set_wide(&mut self, id: Wide, value: u16) {
        match id {
            Wide::Bc => self.regs.set_pair(Pair::Bc, value),
            Wide::De => self.regs.set_pair(Pair::De, value),
            Wide::Hl => self.regs.set_pair(Pair::Hl, value),
            Wide::Sp => self.regs.sp = value,
        }
    }

    /// Resolve an accumulator load/store address, fetching operands and
    /// applying the HL post-increment/decrement as a side effect.
    fn ind_address<B: Bus>(&mut self, bus: &mut B, mode: Ind) -> u16 {
        match mode {
            Ind::Bc => self.regs.pair(Pair::Bc),
            Ind::De => self.regs.pair(Pair::De),
            Ind::HlInc => {
                let address = self.regs.hl();
                self.regs.set_pair(Pair::Hl, address.wrapping_add(1));
                address
            }
            Ind::HlDec => {
                let address = self.regs.hl();
                self.regs.set_pair(Pair::Hl, address.wrapping_sub(1));
                address
            }
            Ind::Abs => self.fetch16(bus),
            Ind::High => 0xFF00 | u16::from(self.fetch8(bus)),
            Ind::HighC => 0xFF00 | u16::from(self.regs.c),
        }
    }

    fn condition(&self, cond: Cond) -> bool {
        match cond {
            Cond::Always => true,
            Cond::Nz => !self.regs.flag(ZF),
            Cond::Z => self.regs.flag(ZF),
            Cond::Nc => !self.regs.flag(CF),
            Cond::C => self.regs.flag(CF),
        }
    }

    fn push16<B: Bus>(&mut self, bus: &mut B, value: u16) {
        self.regs.sp = self.regs.sp.wrapping_sub(1);
        bus.write(self.regs.sp, (value >> 8) as u8);
        self.regs.sp = self.regs.sp.wrapping_sub(1);
        bus.write(self.regs.sp, value as u8);
    }

    fn pop16<B: Bus>(&mut self, bus: &mut B) -> u16 {
        let lo = bus.read(self.regs.sp);
        self.regs.sp = self.regs.sp.wrapping_add(1);
        let hi = bus.read(self.regs.sp);
        self.regs.sp = self.regs.sp.wrapping_add(1);
        u16::from(hi) << 8 | u16::from(lo)
    }

    fn carry_in(&self) -> u8 {
        u8::from(self.regs.flag(CF))
    }

    /// Apply one of the eight rotate/shift operations. Returns the new
    /// value and the carry-out; the caller decides Z (the accumulator
    /// forms always clear it, the CB forms compute it).
    fn rotate(&self, op: RotOp, value: u8) -> (u8, bool) {
        match op {
            RotOp::Rlc => (value.rotate_left(1), value & 0x80 != 0),
            RotOp::Rrc => (value.rotate_right(1), value & 0x01 != 0),
            RotOp::Rl => ((value << 1) | self.carry_in(), value & 0x80 != 0),
            RotOp::Rr => ((value >> 1) | (self.carry_in() << 7), value & 0x01 != 0),
            RotOp::Sla => (value << 1, value & 0x80 != 0),
            RotOp::Sra => ((value >> 1) | (value & 0x80), value & 0x01 != 0),
            RotOp::Swap => (value.rotate_left(4), false),
            RotOp::Srl => (value >> 1, value & 0x01 != 0),
        }
    }

    /// Execute a decoded instruction. Returns the extra T-states on top
    /// of the table's base cost (only taken conditional branches pay
    /// one).
    fn execute<B: Bus>(&mut self, instr: Instr, bus: &mut B) -> u8 {
        match instr {
            Instr::Nop | Instr::Undefined => {}
            Instr::Stop => {
                // STOP is two bytes; the second is padding.
                let _ = self.fetch8(bus);
                trace!("stop at {:#06X}", self.regs.pc.wrapping_sub(2));
                self.mode = Mode::Stopped;
            }
            Instr::Halt => {
                trace!("halt at {:#06X}", self.regs.pc.wrapping_sub(1));
                self.mode = Mode::Halted;
            }
            Instr::Di => self.ime = false,
            Instr::Ei => self.ime = true,
            // Resolved during fetch; never reaches execution.
            Instr::Prefix => {}

            Instr::Ld(dst, src) => {
                let value = self.read_loc8(bus, src);
                self.write_loc8(bus, dst, value);
            }
            Instr::LdImm(dst) => {
                let value = self.fetch8(bus);
                self.write_loc8(bus, dst, value);
            }
            Instr::LdWideImm(dst) => {
                let value = self.fetch16(bus);
                self.set_wide(dst, value);
            }
            Instr::LdAInd(mode) => {
                let address = self.ind_address(bus, mode);
                self.regs.a = bus.read(address);
            }
            Instr::LdIndA(mode) => {
                let address = self.ind_address(bus, mode);
                bus.write(address, self.regs.a);
            }
            Instr::LdAbsSp => {
                let address = self.fetch16(bus);
                bus.write(address, self.regs.sp as u8);
                bus.write(address.wrapping_add(1), (self.regs.sp >> 8) as u8);
            }
            Instr::LdSpHl => self.regs.sp = self.regs.hl(),
            Instr::LdHlSpImm => {
                let (value, flags) = self.sp_offset(bus);
                self.regs.set_pair(Pair::Hl, value);
                self.regs.f = flags;
            }

            Instr::Inc(loc) => {
                let carry = self.regs.f & CF;
                let result = add8(self.read_loc8(bus, loc), 0, 1);
                self.write_loc8(bus, loc, result.value);
                self.regs.f = (result.flags & !CF) | carry;
            }
            Instr::Dec(loc) => {
                let carry = self.regs.f & CF;
                let result = sub8(self.read_loc8(bus, loc), 0, 1);
                self.write_loc8(bus, loc, result.value);
                self.regs.f = (result.flags & !CF) | carry;
            }
            Instr::IncWide(id) => {
                let value = self.wide(id).wrapping_add(1);
                self.set_wide(id, value);
            }
            Instr::DecWide(id) => {
                let value = self.wide(id).wrapping_sub(1);
                self.set_wide(id, value);
            }
            Instr::AddHl(id) => {
                let result = add16(self.regs.hl(), self.wide(id));
                self.regs.set_pair(Pair::Hl, result.value);
                self.regs.f = (self.regs.f & ZF) | (result.flags & (HF | CF));
            }
            Instr::AddSpImm => {
                let (value, flags) = self.sp_offset(bus);
                self.regs.sp = value;
                self.regs.f = flags;
            }

            Instr::Alu(op, src) => {
                let value = self.read_loc8(bus, src);
                self.alu(op, value);
            }
            Instr::AluImm(op) => {
                let value = self.fetch8(bus);
                self.alu(op, value);
            }

            Instr::Rlca | Instr::Rrca | Instr::Rla | Instr::Rra => {
                let op = match instr {
                    Instr::Rlca => RotOp::Rlc,
                    Instr::Rrca => RotOp::Rrc,
                    Instr::Rla => RotOp::Rl,
                    _ => RotOp::Rr,
                };
                let (value, carry) = self.rotate(op, self.regs.a);
                self.regs.a = value;
                // Unlike the CB forms, the accumulator rotates never
                // set Z.
                self.regs.f = if carry { CF } else { 0 };
            }
            Instr::Daa => self.daa(),
            Instr::Cpl => {
                self.regs.a = !self.regs.a;
                self.regs.flag_set(NF | HF);
            }
            Instr::Scf => {
                self.regs.flag_reset(NF | HF);
                self.regs.flag_set(CF);
            }
            Instr::Ccf => {
                self.regs.flag_reset(NF | HF);
                self.regs.f ^= CF;
            }

            Instr::Jr(cond) => {
                let offset = self.fetch8(bus) as i8;
                if self.condition(cond) {
                    self.regs.pc = self.regs.pc.wrapping_add(offset as u16);
                    if cond != Cond::Always {
                        return 4;
                    }
                }
            }
            Instr::Jp(cond) => {
                let target = self.fetch16(bus);
                if self.condition(cond) {
                    self.regs.pc = target;
                    if cond != Cond::Always {
                        return 4;
                    }
                }
            }
            Instr::JpHl => self.regs.pc = self.regs.hl(),
            Instr::Call(cond) => {
                let target = self.fetch16(bus);
                if self.condition(cond) {
                    self.push16(bus, self.regs.pc);
                    self.regs.pc = target;
                    if cond != Cond::Always {
                        return 12;
                    }
                }
            }
            Instr::Ret(cond) => {
                if self.condition(cond) {
                    self.regs.pc = self.pop16(bus);
                    if cond != Cond::Always {
                        return 12;
                    }
                }
            }
            Instr::Reti => {
                self.regs.pc = self.pop16(bus);
                self.ime = true;
            }
            Instr::Rst(vector) => {
                self.push16(bus, self.regs.pc);
                self.regs.pc = vector;
            }
            Instr::Push(pair) => {
                let value = self.regs.pair(pair);
                self.push16(bus, value);
            }
            Instr::Pop(pair) => {
                let value = self.pop16(bus);
                self.regs.set_pair(pair, value);
            }

            Instr::Rot(op, loc) => {
                let (value, carry) = {
                    let old = self.read_loc8(bus, loc);
                    self.rotate(op, old)
                };
                self.write_loc8(bus, loc, value);
                self.regs.f = zf(value) | if carry { CF } else { 0 };
            }
            Instr::Bit(bit, loc) => {
                let value = self.read_loc8(bus, loc);
                let zero = value & (1 << bit) == 0;
                self.regs.f = (self.regs.f & CF) | HF | if zero { ZF } else { 0 };
            }
            Instr::Res(bit, loc) => {
                let value = self.read_loc8(bus, loc) & !(1 << bit);
                self.write_loc8(bus, loc, value);
            }
            Instr::Set(bit, loc) => {
                let value = self.read_loc8(bus, loc) | (1 << bit);
                self.write_loc8(bus, loc, value);
            }
        }
        0
    }

    /// Accumulator arithmetic/logic, the 0x80-0xBF block and its
    /// immediate forms.
    fn alu(&mut self, op: AluOp, value: u8) {
        match op {
            AluOp::Add | AluOp::Adc => {
                let carry = if op == AluOp::Adc { self.carry_in() } else { 0 };
                let result = add8(self.regs.a, value, carry);
                self.regs.a = result.value;
                self.regs.f = result.flags;
            }
            AluOp::Sub | AluOp::Sbc => {
                let carry = if op == AluOp::Sbc { self.carry_in() } else { 0 };
                let result = sub8(self.regs.a, value, carry);
                self.regs.a = result.value;
                self.regs.f = result.flags;
            }
            AluOp::And => {
                self.regs.a &= value;
                self.regs.f = zf(self.regs.a) | HF;
            }
            AluOp::Xor => {
                self.regs.a ^= value;
                self.regs.f = zf(self.regs.a);
            }
            AluOp::Or => {
                self.regs.a |= value;
                self.regs.f = zf(self.regs.a);
            }
            AluOp::Cp => self.regs.f = sub8(self.regs.a, value, 0).flags,
        }
    }

    /// SP plus a signed immediate, shared by ADD SP,e8 and LD HL,SP+e8.
    ///
    /// H and C come from the unsigned low-byte add regardless of the
    /// operand's sign; Z and N are always clear.
    fn sp_offset<B: Bus>(&mut self, bus: &mut B) -> (u16, u8) {
        let offset = self.fetch8(bus);
        let low = add8(self.regs.sp as u8, offset, 0);
        let value = self.regs.sp.wrapping_add(offset as i8 as u16);
        (value, low.flags & (HF | CF))
    }

    /// Decimal adjust after a BCD add or subtract, steered by N.
    fn daa(&mut self) {
        let n = self.regs.flag(NF);
        let mut adjust = 0u8;
        let mut carry = self.regs.flag(CF);

        if self.regs.flag(HF) || (!n && self.regs.a & 0x0F > 0x09) {
            adjust |= 0x06;
        }
        if carry || (!n && self.regs.a > 0x99) {
            adjust |= 0x60;
            carry = true;
        }

        self.regs.a = if n {
            self.regs.a.wrapping_sub(adjust)
        } else {
            self.regs.a.wrapping_add(adjust)
        };

        self.regs.f =
            zf(self.regs.a) | (self.regs.f & NF) | if carry { CF } else { 0 };
    }
}

impl emu_core::Cpu for Lr35902 {
    type Registers = Registers;

    fn step<B: Bus>(&mut self, bus: &mut B) -> Ticks {
        Self::step(self, bus)
    }

    fn pc(&self) -> u16 {
        self.regs.pc
    }

    fn registers(&self) -> Registers {
        self.regs
    }

    fn is_halted(&self) -> bool {
        self.mode != Mode::Running
    }

    fn reset(&mut self) {
        *self = Self::new();
    }
}
