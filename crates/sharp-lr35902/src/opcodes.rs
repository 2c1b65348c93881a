//! Dense opcode dispatch tables.
//!
//! Every one of the 256 unprefixed and 256 CB-prefixed encodings has a
//! descriptor here, indexed directly by opcode byte. A descriptor names
//! the instruction, selects its handler through [`Instr`], and records
//! the operand length and base T-state cost. Conditional control flow
//! stores the not-taken cost; the executor adds the taken surcharge.
//!
//! The eleven encodings the LR35902 leaves unassigned (0xD3, 0xDB, 0xDD,
//! 0xE3, 0xE4, 0xEB, 0xEC, 0xED, 0xF4, 0xFC, 0xFD) map to
//! [`Instr::Undefined`].

use crate::registers::Pair;

/// An 8-bit operand location: a register, or memory at HL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Loc8 {
    A,
    B,
    C,
    D,
    E,
    H,
    L,
    /// Memory addressed by HL.
    HlInd,
}

/// A 16-bit operand register for the wide arithmetic and load forms.
///
/// Distinct from [`Pair`]: SP takes AF's slot in these encodings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Wide {
    Bc,
    De,
    Hl,
    Sp,
}

/// A branch condition over the flag register.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cond {
    Always,
    /// Z clear.
    Nz,
    /// Z set.
    Z,
    /// C clear.
    Nc,
    /// C set.
    C,
}

/// The eight accumulator arithmetic/logic operations, in encoding order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AluOp {
    Add,
    Adc,
    Sub,
    Sbc,
    And,
    Xor,
    Or,
    Cp,
}

/// The eight CB-prefixed rotate/shift operations, in encoding order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RotOp {
    Rlc,
    Rrc,
    Rl,
    Rr,
    Sla,
    Sra,
    Swap,
    Srl,
}

/// Addressing mode for the accumulator load/store forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ind {
    /// Memory at BC.
    Bc,
    /// Memory at DE.
    De,
    /// Memory at HL, then increment HL.
    HlInc,
    /// Memory at HL, then decrement HL.
    HlDec,
    /// Memory at a 16-bit immediate address.
    Abs,
    /// High page: 0xFF00 + 8-bit immediate.
    High,
    /// High page: 0xFF00 + C.
    HighC,
}

/// Decoded handler selector.
///
/// One variant per instruction family; the operand selectors collapse
/// the per-register encodings into a single handler each.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Instr {
    Nop,
    Stop,
    Halt,
    Di,
    Ei,
    /// 0xCB: dispatch the next byte through [`CB_OPCODES`].
    Prefix,
    /// Unassigned encoding; executes as a no-op.
    Undefined,
    Ld(Loc8, Loc8),
    LdImm(Loc8),
    LdWideImm(Wide),
    LdAInd(Ind),
    LdIndA(Ind),
    LdAbsSp,
    LdSpHl,
    LdHlSpImm,
    Inc(Loc8),
    Dec(Loc8),
    IncWide(Wide),
    DecWide(Wide),
    AddHl(Wide),
    AddSpImm,
    Alu(AluOp, Loc8),
    AluImm(AluOp),
    Rlca,
    Rrca,
    Rla,
    Rra,
    Daa,
    Cpl,
    Scf,
    Ccf,
    Jr(Cond),
    Jp(Cond),
    JpHl,
    Call(Cond),
    Ret(Cond),
    Reti,
    Rst(u16),
    Push(Pair),
    Pop(Pair),
    Rot(RotOp, Loc8),
    Bit(u8, Loc8),
    Res(u8, Loc8),
    Set(u8, Loc8),
}

/// One dispatch table entry.
#[derive(Debug, Clone, Copy)]
pub struct Opcode {
    /// Disassembly mnemonic, rgbds-style.
    pub mnemonic: &'static str,
    /// Handler selector.
    pub instr: Instr,
    /// Total instruction length in bytes, opcode included.
    pub length: u8,
    /// Base cost in T-states. For conditional jumps, calls and returns
    /// this is the not-taken cost; the executor adds the surcharge when
    /// the branch is taken.
    pub t_states: u8,
    /// Flag-effect annotation, ZNHC order: `-` unaffected, `0`/`1`
    /// forced, or the flag letter when computed.
    pub flags: &'static str,
}

const fn op(
    mnemonic: &'static str,
    instr: Instr,
    length: u8,
    t_states: u8,
    flags: &'static str,
) -> Opcode {
    Opcode { mnemonic, instr, length, t_states, flags }
}

/// Unprefixed dispatch table, indexed by opcode byte.
#[rustfmt::skip]
pub static OPCODES: [Opcode; 256] = [
    op("nop", Instr::Nop, 1, 4, "----"), // 0x00
    op("ld BC,n16", Instr::LdWideImm(Wide::Bc), 3, 12, "----"), // 0x01
    op("ld [BC],A", Instr::LdIndA(Ind::Bc), 1, 8, "----"), // 0x02
    op("inc BC", Instr::IncWide(Wide::Bc), 1, 8, "----"), // 0x03
    op("inc B", Instr::Inc(Loc8::B), 1, 4, "Z0H-"), // 0x04
    op("dec B", Instr::Dec(Loc8::B), 1, 4, "Z1H-"), // 0x05
    op("ld B,n8", Instr::LdImm(Loc8::B), 2, 8, "----"), // 0x06
    op("rlca", Instr::Rlca, 1, 4, "000C"), // 0x07
    op("ld [a16],SP", Instr::LdAbsSp, 3, 20, "----"), // 0x08
    op("add HL,BC", Instr::AddHl(Wide::Bc), 1, 8, "-0HC"), // 0x09
    op("ld A,[BC]", Instr::LdAInd(Ind::Bc), 1, 8, "----"), // 0x0A
    op("dec BC", Instr::DecWide(Wide::Bc), 1, 8, "----"), // 0x0B
    op("inc C", Instr::Inc(Loc8::C), 1, 4, "Z0H-"), // 0x0C
    op("dec C", Instr::Dec(Loc8::C), 1, 4, "Z1H-"), // 0x0D
    op("ld C,n8", Instr::LdImm(Loc8::C), 2, 8, "----"), // 0x0E
    op("rrca", Instr::Rrca, 1, 4, "000C"), // 0x0F
    op("stop", Instr::Stop, 2, 4, "----"), // 0x10
    op("ld DE,n16", Instr::LdWideImm(Wide::De), 3, 12, "----"), // 0x11
    op("ld [DE],A", Instr::LdIndA(Ind::De), 1, 8, "----"), // 0x12
    op("inc DE", Instr::IncWide(Wide::De), 1, 8, "----"), // 0x13
    op("inc D", Instr::Inc(Loc8::D), 1, 4, "Z0H-"), // 0x14
    op("dec D", Instr::Dec(Loc8::D), 1, 4, "Z1H-"), // 0x15
    op("ld D,n8", Instr::LdImm(Loc8::D), 2, 8, "----"), // 0x16
    op("rla", Instr::Rla, 1, 4, "000C"), // 0x17
    op("jr e8", Instr::Jr(Cond::Always), 2, 12, "----"), // 0x18
    op("add HL,DE", Instr::AddHl(Wide::De), 1, 8, "-0HC"), // 0x19
    op("ld A,[DE]", Instr::LdAInd(Ind::De), 1, 8, "----"), // 0x1A
    op("dec DE", Instr::DecWide(Wide::De), 1, 8, "----"), // 0x1B
    op("inc E", Instr::Inc(Loc8::E), 1, 4, "Z0H-"), // 0x1C
    op("dec E", Instr::Dec(Loc8::E), 1, 4, "Z1H-"), // 0x1D
    op("ld E,n8", Instr::LdImm(Loc8::E), 2, 8, "----"), // 0x1E
    op("rra", Instr::Rra, 1, 4, "000C"), // 0x1F
    op("jr NZ,e8", Instr::Jr(Cond::Nz), 2, 8, "----"), // 0x20
    op("ld HL,n16", Instr::LdWideImm(Wide::Hl), 3, 12, "----"), // 0x21
    op("ld [HL+],A", Instr::LdIndA(Ind::HlInc), 1, 8, "----"), // 0x22
    op("inc HL", Instr::IncWide(Wide::Hl), 1, 8, "----"), // 0x23
    op("inc H", Instr::Inc(Loc8::H), 1, 4, "Z0H-"), // 0x24
    op("dec H", Instr::Dec(Loc8::H), 1, 4, "Z1H-"), // 0x25
    op("ld H,n8", Instr::LdImm(Loc8::H), 2, 8, "----"), // 0x26
    op("daa", Instr::Daa, 1, 4, "Z-0C"), // 0x27
    op("jr Z,e8", Instr::Jr(Cond::Z), 2, 8, "----"), // 0x28
    op("add HL,HL", Instr::AddHl(Wide::Hl), 1, 8, "-0HC"), // 0x29
    op("ld A,[HL+]", Instr::LdAInd(Ind::HlInc), 1, 8, "----"), // 0x2A
    op("dec HL", Instr::DecWide(Wide::Hl), 1, 8, "----"), // 0x2B
    op("inc L", Instr::Inc(Loc8::L), 1, 4, "Z0H-"), // 0x2C
    op("dec L", Instr::Dec(Loc8::L), 1, 4, "Z1H-"), // 0x2D
    op("ld L,n8", Instr::LdImm(Loc8::L), 2, 8, "----"), // 0x2E
    op("cpl", Instr::Cpl, 1, 4, "-11-"), // 0x2F
    op("jr NC,e8", Instr::Jr(Cond::Nc), 2, 8, "----"), // 0x30
    op("ld SP,n16", Instr::LdWideImm(Wide::Sp), 3, 12, "----"), // 0x31
    op("ld [HL-],A", Instr::LdIndA(Ind::HlDec), 1, 8, "----"), // 0x32
    op("inc SP", Instr::IncWide(Wide::Sp), 1, 8, "----"), // 0x33
    op("inc [HL]", Instr::Inc(Loc8::HlInd), 1, 12, "Z0H-"), // 0x34
    op("dec [HL]", Instr::Dec(Loc8::HlInd), 1, 12, "Z1H-"), // 0x35
    op("ld [HL],n8", Instr::LdImm(Loc8::HlInd), 2, 12, "----"), // 0x36
    op("scf", Instr::Scf, 1, 4, "-001"), // 0x37
    op("jr C,e8", Instr::Jr(Cond::C), 2, 8, "----"), // 0x38
    op("add HL,SP", Instr::AddHl(Wide::Sp), 1, 8, "-0HC"), // 0x39
    op("ld A,[HL-]", Instr::LdAInd(Ind::HlDec), 1, 8, "----"), // 0x3A
    op("dec SP", Instr::DecWide(Wide::Sp), 1, 8, "----"), // 0x3B
    op("inc A", Instr::Inc(Loc8::A), 1, 4, "Z0H-"), // 0x3C
    op("dec A", Instr::Dec(Loc8::A), 1, 4, "Z1H-"), // 0x3D
    op("ld A,n8", Instr::LdImm(Loc8::A), 2, 8, "----"), // 0x3E
    op("ccf", Instr::Ccf, 1, 4, "-00C"), // 0x3F
    op("ld B,B", Instr::Ld(Loc8::B, Loc8::B), 1, 4, "----"), // 0x40
    op("ld B,C", Instr::Ld(Loc8::B, Loc8::C), 1, 4, "----"), // 0x41
    op("ld B,D", Instr::Ld(Loc8::B, Loc8::D), 1, 4, "----"), // 0x42
    op("ld B,E", Instr::Ld(Loc8::B, Loc8::E), 1, 4, "----"), // 0x43
    op("ld B,H", Instr::Ld(Loc8::B, Loc8::H), 1, 4, "----"), // 0x44
    op("ld B,L", Instr::Ld(Loc8::B, Loc8::L), 1, 4, "----"), // 0x45
    op("ld B,[HL]", Instr::Ld(Loc8::B, Loc8::HlInd), 1, 8, "----"), // 0x46
    op("ld B,A", Instr::Ld(Loc8::B, Loc8::A), 1, 4, "----"), // 0x47
    op("ld C,B", Instr::Ld(Loc8::C, Loc8::B), 1, 4, "----"), // 0x48
    op("ld C,C", Instr::Ld(Loc8::C, Loc8::C), 1, 4, "----"), // 0x49
    op("ld C,D", Instr::Ld(Loc8::C, Loc8::D), 1, 4, "----"), // 0x4A
    op("ld C,E", Instr::Ld(Loc8::C, Loc8::E), 1, 4, "----"), // 0x4B
    op("ld C,H", Instr::Ld(Loc8::C, Loc8::H), 1, 4, "----"), // 0x4C
    op("ld C,L", Instr::Ld(Loc8::C, Loc8::L), 1, 4, "----"), // 0x4D
    op("ld C,[HL]", Instr::Ld(Loc8::C, Loc8::HlInd), 1, 8, "----"), // 0x4E
    op("ld C,A", Instr::Ld(Loc8::C, Loc8::A), 1, 4, "----"), // 0x4F
    op("ld D,B", Instr::Ld(Loc8::D, Loc8::B), 1, 4, "----"), // 0x50
    op("ld D,C", Instr::Ld(Loc8::D, Loc8::C), 1, 4, "----"), // 0x51
    op("ld D,D", Instr::Ld(Loc8::D, Loc8::D), 1, 4, "----"), // 0x52
    op("ld D,E", Instr::Ld(Loc8::D, Loc8::E), 1, 4, "----"), // 0x53
    op("ld D,H", Instr::Ld(Loc8::D, Loc8::H), 1, 4, "----"), // 0x54
    op("ld D,L", Instr::Ld(Loc8::D, Loc8::L), 1, 4, "----"), // 0x55
    op("ld D,[HL]", Instr::Ld(Loc8::D, Loc8::HlInd), 1, 8, "----"), // 0x56
    op("ld D,A", Instr::Ld(Loc8::D, Loc8::A), 1, 4, "----"), // 0x57
    op("ld E,B", Instr::Ld(Loc8::E, Loc8::B), 1, 4, "----"), // 0x58
    op("ld E,C", Instr::Ld(Loc8::E, Loc8::C), 1, 4, "----"), // 0x59
    op("ld E,D", Instr::Ld(Loc8::E, Loc8::D), 1, 4, "----"), // 0x5A
    op("ld E,E", Instr::Ld(Loc8::E, Loc8::E), 1, 4, "----"), // 0x5B
    op("ld E,H", Instr::Ld(Loc8::E, Loc8::H), 1, 4, "----"), // 0x5C
    op("ld E,L", Instr::Ld(Loc8::E, Loc8::L), 1, 4, "----"), // 0x5D
    op("ld E,[HL]", Instr::Ld(Loc8::E, Loc8::HlInd), 1, 8, "----"), // 0x5E
    op("ld E,A", Instr::Ld(Loc8::E, Loc8::A), 1, 4, "----"), // 0x5F
    op("ld H,B", Instr::Ld(Loc8::H, Loc8::B), 1, 4, "----"), // 0x60
    op("ld H,C", Instr::Ld(Loc8::H, Loc8::C), 1, 4, "----"), // 0x61
    op("ld H,D", Instr::Ld(Loc8::H, Loc8::D), 1, 4, "----"), // 0x62
    op("ld H,E", Instr::Ld(Loc8::H, Loc8::E), 1, 4, "----"), // 0x63
    op("ld H,H", Instr::Ld(Loc8::H, Loc8::H), 1, 4, "----"), // 0x64
    op("ld H,L", Instr::Ld(Loc8::H, Loc8::L), 1, 4, "----"), // 0x65
    op("ld H,[HL]", Instr::Ld(Loc8::H, Loc8::HlInd), 1, 8, "----"), // 0x66
    op("ld H,A", Instr::Ld(Loc8::H, Loc8::A), 1, 4, "----"), // 0x67
    op("ld L,B", Instr::Ld(Loc8::L, Loc8::B), 1, 4, "----"), // 0x68
    op("ld L,C", Instr::Ld(Loc8::L, Loc8::C), 1, 4, "----"), // 0x69
    op("ld L,D", Instr::Ld(Loc8::L, Loc8::D), 1, 4, "----"), // 0x6A
    op("ld L,E", Instr::Ld(Loc8::L, Loc8::E), 1, 4, "----"), // 0x6B
    op("ld L,H", Instr::Ld(Loc8::L, Loc8::H), 1, 4, "----"), // 0x6C
    op("ld L,L", Instr::Ld(Loc8::L, Loc8::L), 1, 4, "----"), // 0x6D
    op("ld L,[HL]", Instr::Ld(Loc8::L, Loc8::HlInd), 1, 8, "----"), // 0x6E
    op("ld L,A", Instr::Ld(Loc8::L, Loc8::A), 1, 4, "----"), // 0x6F
    op("ld [HL],B", Instr::Ld(Loc8::HlInd, Loc8::B), 1, 8, "----"), // 0x70
    op("ld [HL],C", Instr::Ld(Loc8::HlInd, Loc8::C), 1, 8, "----"), // 0x71
    op("ld [HL],D", Instr::Ld(Loc8::HlInd, Loc8::D), 1, 8, "----"), // 0x72
    op("ld [HL],E", Instr::Ld(Loc8::HlInd, Loc8::E), 1, 8, "----"), // 0x73
    op("ld [HL],H", Instr::Ld(Loc8::HlInd, Loc8::H), 1, 8, "----"), // 0x74
    op("ld [HL],L", Instr::Ld(Loc8::HlInd, Loc8::L), 1, 8, "----"), // 0x75
    op("halt", Instr::Halt, 1, 4, "----"), // 0x76
    op("ld [HL],A", Instr::Ld(Loc8::HlInd, Loc8::A), 1, 8, "----"), // 0x77
    op("ld A,B", Instr::Ld(Loc8::A, Loc8::B), 1, 4, "----"), // 0x78
    op("ld A,C", Instr::Ld(Loc8::A, Loc8::C), 1, 4, "----"), // 0x79
    op("ld A,D", Instr::Ld(Loc8::A, Loc8::D), 1, 4, "----"), // 0x7A
    op("ld A,E", Instr::Ld(Loc8::A, Loc8::E), 1, 4, "----"), // 0x7B
    op("ld A,H", Instr::Ld(Loc8::A, Loc8::H), 1, 4, "----"), // 0x7C
    op("ld A,L", Instr::Ld(Loc8::A, Loc8::L), 1, 4, "----"), // 0x7D
    op("ld A,[HL]", Instr::Ld(Loc8::A, Loc8::HlInd), 1, 8, "----"), // 0x7E
    op("ld A,A", Instr::Ld(Loc8::A, Loc8::A), 1, 4, "----"), // 0x7F
    op("add B", Instr::Alu(AluOp::Add, Loc8::B), 1, 4, "Z0HC"), // 0x80
    op("add C", Instr::Alu(AluOp::Add, Loc8::C), 1, 4, "Z0HC"), // 0x81
    op("add D", Instr::Alu(AluOp::Add, Loc8::D), 1, 4, "Z0HC"), // 0x82
    op("add E", Instr::Alu(AluOp::Add, Loc8::E), 1, 4, "Z0HC"), // 0x83
    op("add H", Instr::Alu(AluOp::Add, Loc8::H), 1, 4, "Z0HC"), // 0x84
    op("add L", Instr::Alu(AluOp::Add, Loc8::L), 1, 4, "Z0HC"), // 0x85
    op("add [HL]", Instr::Alu(AluOp::Add, Loc8::HlInd), 1, 8, "Z0HC"), // 0x86
    op("add A", Instr::Alu(AluOp::Add, Loc8::A), 1, 4, "Z0HC"), // 0x87
    op("adc B", Instr::Alu(AluOp::Adc, Loc8::B), 1, 4, "Z0HC"), // 0x88
    op("adc C", Instr::Alu(AluOp::Adc, Loc8::C), 1, 4, "Z0HC"), // 0x89
    op("adc D", Instr::Alu(AluOp::Adc, Loc8::D), 1, 4, "Z0HC"), // 0x8A
    op("adc E", Instr::Alu(AluOp::Adc, Loc8::E), 1, 4, "Z0HC"), // 0x8B
    op("adc H", Instr::Alu(AluOp::Adc, Loc8::H), 1, 4, "Z0HC"), // 0x8C
    op("adc L", Instr::Alu(AluOp::Adc, Loc8::L), 1, 4, "Z0HC"), // 0x8D
    op("adc [HL]", Instr::Alu(AluOp::Adc, Loc8::HlInd), 1, 8, "Z0HC"), // 0x8E
    op("adc A", Instr::Alu(AluOp::Adc, Loc8::A), 1, 4, "Z0HC"), // 0x8F
    op("sub B", Instr::Alu(AluOp::Sub, Loc8::B), 1, 4, "Z1HC"), // 0x90
    op("sub C", Instr::Alu(AluOp::Sub, Loc8::C), 1, 4, "Z1HC"), // 0x91
    op("sub D", Instr::Alu(AluOp::Sub, Loc8::D), 1, 4, "Z1HC"), // 0x92
    op("sub E", Instr::Alu(AluOp::Sub, Loc8::E), 1, 4, "Z1HC"), // 0x93
    op("sub H", Instr::Alu(AluOp::Sub, Loc8::H), 1, 4, "Z1HC"), // 0x94
    op("sub L", Instr::Alu(AluOp::Sub, Loc8::L), 1, 4, "Z1HC"), // 0x95
    op("sub [HL]", Instr::Alu(AluOp::Sub, Loc8::HlInd), 1, 8, "Z1HC"), // 0x96
    op("sub A", Instr::Alu(AluOp::Sub, Loc8::A), 1, 4, "Z1HC"), // 0x97
    op("sbc B", Instr::Alu(AluOp::Sbc, Loc8::B), 1, 4, "Z1HC"), // 0x98
    op("sbc C", Instr::Alu(AluOp::Sbc, Loc8::C), 1, 4, "Z1HC"), // 0x99
    op("sbc D", Instr::Alu(AluOp::Sbc, Loc8::D), 1, 4, "Z1HC"), // 0x9A
    op("sbc E", Instr::Alu(AluOp::Sbc, Loc8::E), 1, 4, "Z1HC"), // 0x9B
    op("sbc H", Instr::Alu(AluOp::Sbc, Loc8::H), 1, 4, "Z1HC"), // 0x9C
    op("sbc L", Instr::Alu(AluOp::Sbc, Loc8::L), 1, 4, "Z1HC"), // 0x9D
    op("sbc [HL]", Instr::Alu(AluOp::Sbc, Loc8::HlInd), 1, 8, "Z1HC"), // 0x9E
    op("sbc A", Instr::Alu(AluOp::Sbc, Loc8::A), 1, 4, "Z1HC"), // 0x9F
    op("and B", Instr::Alu(AluOp::And, Loc8::B), 1, 4, "Z010"), // 0xA0
    op("and C", Instr::Alu(AluOp::And, Loc8::C), 1, 4, "Z010"), // 0xA1
    op("and D", Instr::Alu(AluOp::And, Loc8::D), 1, 4, "Z010"), // 0xA2
    op("and E", Instr::Alu(AluOp::And, Loc8::E), 1, 4, "Z010"), // 0xA3
    op("and H", Instr::Alu(AluOp::And, Loc8::H), 1, 4, "Z010"), // 0xA4
    op("and L", Instr::Alu(AluOp::And, Loc8::L), 1, 4, "Z010"), // 0xA5
    op("and [HL]", Instr::Alu(AluOp::And, Loc8::HlInd), 1, 8, "Z010"), // 0xA6
    op("and A", Instr::Alu(AluOp::And, Loc8::A), 1, 4, "Z010"), // 0xA7
    op("xor B", Instr::Alu(AluOp::Xor, Loc8::B), 1, 4, "Z000"), // 0xA8
    op("xor C", Instr::Alu(AluOp::Xor, Loc8::C), 1, 4, "Z000"), // 0xA9
    op("xor D", Instr::Alu(AluOp::Xor, Loc8::D), 1, 4, "Z000"), // 0xAA
    op("xor E", Instr::Alu(AluOp::Xor, Loc8::E), 1, 4, "Z000"), // 0xAB
    op("xor H", Instr::Alu(AluOp::Xor, Loc8::H), 1, 4, "Z000"), // 0xAC
    op("xor L", Instr::Alu(AluOp::Xor, Loc8::L), 1, 4, "Z000"), // 0xAD
    op("xor [HL]", Instr::Alu(AluOp::Xor, Loc8::HlInd), 1, 8, "Z000"), // 0xAE
    op("xor A", Instr::Alu(AluOp::Xor, Loc8::A), 1, 4, "Z000"), // 0xAF
    op("or B", Instr::Alu(AluOp::Or, Loc8::B), 1, 4, "Z000"), // 0xB0
    op("or C", Instr::Alu(AluOp::Or, Loc8::C), 1, 4, "Z000"), // 0xB1
    op("or D", Instr::Alu(AluOp::Or, Loc8::D), 1, 4, "Z000"), // 0xB2
    op("or E", Instr::Alu(AluOp::Or, Loc8::E), 1, 4, "Z000"), // 0xB3
    op("or H", Instr::Alu(AluOp::Or, Loc8::H), 1, 4, "Z000"), // 0xB4
    op("or L", Instr::Alu(AluOp::Or, Loc8::L), 1, 4, "Z000"), // 0xB5
    op("or [HL]", Instr::Alu(AluOp::Or, Loc8::HlInd), 1, 8, "Z000"), // 0xB6
    op("or A", Instr::Alu(AluOp::Or, Loc8::A), 1, 4, "Z000"), // 0xB7
    op("cp B", Instr::Alu(AluOp::Cp, Loc8::B), 1, 4, "Z1HC"), // 0xB8
    op("cp C", Instr::Alu(AluOp::Cp, Loc8::C), 1, 4, "Z1HC"), // 0xB9
    op("cp D", Instr::Alu(AluOp::Cp, Loc8::D), 1, 4, "Z1HC"), // 0xBA
    op("cp E", Instr::Alu(AluOp::Cp, Loc8::E), 1, 4, "Z1HC"), // 0xBB
    op("cp H", Instr::Alu(AluOp::Cp, Loc8::H), 1, 4, "Z1HC"), // 0xBC
    op("cp L", Instr::Alu(AluOp::Cp, Loc8::L), 1, 4, "Z1HC"), // 0xBD
    op("cp [HL]", Instr::Alu(AluOp::Cp, Loc8::HlInd), 1, 8, "Z1HC"), // 0xBE
    op("cp A", Instr::Alu(AluOp::Cp, Loc8::A), 1, 4, "Z1HC"), // 0xBF
    op("ret NZ", Instr::Ret(Cond::Nz), 1, 8, "----"), // 0xC0
    op("pop BC", Instr::Pop(Pair::Bc), 1, 12, "----"), // 0xC1
    op("jp NZ,a16", Instr::Jp(Cond::Nz), 3, 12, "----"), // 0xC2
    op("jp a16", Instr::Jp(Cond::Always), 3, 16, "----"), // 0xC3
    op("call NZ,a16", Instr::Call(Cond::Nz), 3, 12, "----"), // 0xC4
    op("push BC", Instr::Push(Pair::Bc), 1, 16, "----"), // 0xC5
    op("add n8", Instr::AluImm(AluOp::Add), 2, 8, "Z0HC"), // 0xC6
    op("rst 00", Instr::Rst(0x0000), 1, 16, "----"), // 0xC7
    op("ret Z", Instr::Ret(Cond::Z), 1, 8, "----"), // 0xC8
    op("ret", Instr::Ret(Cond::Always), 1, 16, "----"), // 0xC9
    op("jp Z,a16", Instr::Jp(Cond::Z), 3, 12, "----"), // 0xCA
    op("prefix", Instr::Prefix, 1, 4, "----"), // 0xCB
    op("call Z,a16", Instr::Call(Cond::Z), 3, 12, "----"), // 0xCC
    op("call a16", Instr::Call(Cond::Always), 3, 24, "----"), // 0xCD
    op("adc n8", Instr::AluImm(AluOp::Adc), 2, 8, "Z0HC"), // 0xCE
    op("rst 08", Instr::Rst(0x0008), 1, 16, "----"), // 0xCF
    op("ret NC", Instr::Ret(Cond::Nc), 1, 8, "----"), // 0xD0
    op("pop DE", Instr::Pop(Pair::De), 1, 12, "----"), // 0xD1
    op("jp NC,a16", Instr::Jp(Cond::Nc), 3, 12, "----"), // 0xD2
    op("???", Instr::Undefined, 1, 4, "----"), // 0xD3
    op("call NC,a16", Instr::Call(Cond::Nc), 3, 12, "----"), // 0xD4
    op("push DE", Instr::Push(Pair::De), 1, 16, "----"), // 0xD5
    op("sub n8", Instr::AluImm(AluOp::Sub), 2, 8, "Z1HC"), // 0xD6
    op("rst 10", Instr::Rst(0x0010), 1, 16, "----"), // 0xD7
    op("ret C", Instr::Ret(Cond::C), 1, 8, "----"), // 0xD8
    op("reti", Instr::Reti, 1, 16, "----"), // 0xD9
    op("jp C,a16", Instr::Jp(Cond::C), 3, 12, "----"), // 0xDA
    op("???", Instr::Undefined, 1, 4, "----"), // 0xDB
    op("call C,a16", Instr::Call(Cond::C), 3, 12, "----"), // 0xDC
    op("???", Instr::Undefined, 1, 4, "----"), // 0xDD
    op("sbc n8", Instr::AluImm(AluOp::Sbc), 2, 8, "Z1HC"), // 0xDE
    op("rst 18", Instr::Rst(0x0018), 1, 16, "----"), // 0xDF
    op("ldh [a8],A", Instr::LdIndA(Ind::High), 2, 12, "----"), // 0xE0
    op("pop HL", Instr::Pop(Pair::Hl), 1, 12, "----"), // 0xE1
    op("ldh [C],A", Instr::LdIndA(Ind::HighC), 1, 8, "----"), // 0xE2
    op("???", Instr::Undefined, 1, 4, "----"), // 0xE3
    op("???", Instr::Undefined, 1, 4, "----"), // 0xE4
    op("push HL", Instr::Push(Pair::Hl), 1, 16, "----"), // 0xE5
    op("and n8", Instr::AluImm(AluOp::And), 2, 8, "Z010"), // 0xE6
    op("rst 20", Instr::Rst(0x0020), 1, 16, "----"), // 0xE7
    op("add SP,e8", Instr::AddSpImm, 2, 16, "00HC"), // 0xE8
    op("jp HL", Instr::JpHl, 1, 4, "----"), // 0xE9
    op("ld [a16],A", Instr::LdIndA(Ind::Abs), 3, 16, "----"), // 0xEA
    op("???", Instr::Undefined, 1, 4, "----"), // 0xEB
    op("???", Instr::Undefined, 1, 4, "----"), // 0xEC
    op("???", Instr::Undefined, 1, 4, "----"), // 0xED
    op("xor n8", Instr::AluImm(AluOp::Xor), 2, 8, "Z000"), // 0xEE
    op("rst 28", Instr::Rst(0x0028), 1, 16, "----"), // 0xEF
    op("ldh A,[a8]", Instr::LdAInd(Ind::High), 2, 12, "----"), // 0xF0
    op("pop AF", Instr::Pop(Pair::Af), 1, 12, "ZNHC"), // 0xF1
    op("ldh A,[C]", Instr::LdAInd(Ind::HighC), 1, 8, "----"), // 0xF2
    op("di", Instr::Di, 1, 4, "----"), // 0xF3
    op("???", Instr::Undefined, 1, 4, "----"), // 0xF4
    op("push AF", Instr::Push(Pair::Af), 1, 16, "----"), // 0xF5
    op("or n8", Instr::AluImm(AluOp::Or), 2, 8, "Z000"), // 0xF6
    op("rst 30", Instr::Rst(0x0030), 1, 16, "----"), // 0xF7
    op("ld HL,SP+e8", Instr::LdHlSpImm, 2, 12, "00HC"), // 0xF8
    op("ld SP,HL", Instr::LdSpHl, 1, 8, "----"), // 0xF9
    op("ld A,[a16]", Instr::LdAInd(Ind::Abs), 3, 16, "----"), // 0xFA
    op("ei", Instr::Ei, 1, 4, "----"), // 0xFB
    op("???", Instr::Undefined, 1, 4, "----"), // 0xFC
    op("???", Instr::Undefined, 1, 4, "----"), // 0xFD
    op("cp n8", Instr::AluImm(AluOp::Cp), 2, 8, "Z1HC"), // 0xFE
    op("rst 38", Instr::Rst(0x0038), 1, 16, "----"), // 0xFF
];

/// CB-prefixed dispatch table, indexed by the byte after 0xCB.
///
/// Every entry is two bytes long (prefix plus opcode) and takes no
/// operands.
#[rustfmt::skip]
pub static CB_OPCODES: [Opcode; 256] = [
    op("rlc B", Instr::Rot(RotOp::Rlc, Loc8::B), 2, 8, "Z00C"), // 0x00
    op("rlc C", Instr::Rot(RotOp::Rlc, Loc8::C), 2, 8, "Z00C"), // 0x01
    op("rlc D", Instr::Rot(RotOp::Rlc, Loc8::D), 2, 8, "Z00C"), // 0x02
    op("rlc E", Instr::Rot(RotOp::Rlc, Loc8::E), 2, 8, "Z00C"), // 0x03
    op("rlc H", Instr::Rot(RotOp::Rlc, Loc8::H), 2, 8, "Z00C"), // 0x04
    op("rlc L", Instr::Rot(RotOp::Rlc, Loc8::L), 2, 8, "Z00C"), // 0x05
    op("rlc [HL]", Instr::Rot(RotOp::Rlc, Loc8::HlInd), 2, 16, "Z00C"), // 0x06
    op("rlc A", Instr::Rot(RotOp::Rlc, Loc8::A), 2, 8, "Z00C"), // 0x07
    op("rrc B", Instr::Rot(RotOp::Rrc, Loc8::B), 2, 8, "Z00C"), // 0x08
    op("rrc C", Instr::Rot(RotOp::Rrc, Loc8::C), 2, 8, "Z00C"), // 0x09
    op("rrc D", Instr::Rot(RotOp::Rrc, Loc8::D), 2, 8, "Z00C"), // 0x0A
    op("rrc E", Instr::Rot(RotOp::Rrc, Loc8::E), 2, 8, "Z00C"), // 0x0B
    op("rrc H", Instr::Rot(RotOp::Rrc, Loc8::H), 2, 8, "Z00C"), // 0x0C
    op("rrc L", Instr::Rot(RotOp::Rrc, Loc8::L), 2, 8, "Z00C"), // 0x0D
    op("rrc [HL]", Instr::Rot(RotOp::Rrc, Loc8::HlInd), 2, 16, "Z00C"), // 0x0E
    op("rrc A", Instr::Rot(RotOp::Rrc, Loc8::A), 2, 8, "Z00C"), // 0x0F
    op("rl B", Instr::Rot(RotOp::Rl, Loc8::B), 2, 8, "Z00C"), // 0x10
    op("rl C", Instr::Rot(RotOp::Rl, Loc8::C), 2, 8, "Z00C"), // 0x11
    op("rl D", Instr::Rot(RotOp::Rl, Loc8::D), 2, 8, "Z00C"), // 0x12
    op("rl E", Instr::Rot(RotOp::Rl, Loc8::E), 2, 8, "Z00C"), // 0x13
    op("rl H", Instr::Rot(RotOp::Rl, Loc8::H), 2, 8, "Z00C"), // 0x14
    op("rl L", Instr::Rot(RotOp::Rl, Loc8::L), 2, 8, "Z00C"), // 0x15
    op("rl [HL]", Instr::Rot(RotOp::Rl, Loc8::HlInd), 2, 16, "Z00C"), // 0x16
    op("rl A", Instr::Rot(RotOp::Rl, Loc8::A), 2, 8, "Z00C"), // 0x17
    op("rr B", Instr::Rot(RotOp::Rr, Loc8::B), 2, 8, "Z00C"), // 0x18
    op("rr C", Instr::Rot(RotOp::Rr, Loc8::C), 2, 8, "Z00C"), // 0x19
    op("rr D", Instr::Rot(RotOp::Rr, Loc8::D), 2, 8, "Z00C"), // 0x1A
    op("rr E", Instr::Rot(RotOp::Rr, Loc8::E), 2, 8, "Z00C"), // 0x1B
    op("rr H", Instr::Rot(RotOp::Rr, Loc8::H), 2, 8, "Z00C"), // 0x1C
    op("rr L", Instr::Rot(RotOp::Rr, Loc8::L), 2, 8, "Z00C"), // 0x1D
    op("rr [HL]", Instr::Rot(RotOp::Rr, Loc8::HlInd), 2, 16, "Z00C"), // 0x1E
    op("rr A", Instr::Rot(RotOp::Rr, Loc8::A), 2, 8, "Z00C"), // 0x1F
    op("sla B", Instr::Rot(RotOp::Sla, Loc8::B), 2, 8, "Z00C"), // 0x20
    op("sla C", Instr::Rot(RotOp::Sla, Loc8::C), 2, 8, "Z00C"), // 0x21
    op("sla D", Instr::Rot(RotOp::Sla, Loc8::D), 2, 8, "Z00C"), // 0x22
    op("sla E", Instr::Rot(RotOp::Sla, Loc8::E), 2, 8, "Z00C"), // 0x23
    op("sla H", Instr::Rot(RotOp::Sla, Loc8::H), 2, 8, "Z00C"), // 0x24
    op("sla L", Instr::Rot(RotOp::Sla, Loc8::L), 2, 8, "Z00C"), // 0x25
    op("sla [HL]", Instr::Rot(RotOp::Sla, Loc8::HlInd), 2, 16, "Z00C"), // 0x26
    op("sla A", Instr::Rot(RotOp::Sla, Loc8::A), 2, 8, "Z00C"), // 0x27
    op("sra B", Instr::Rot(RotOp::Sra, Loc8::B), 2, 8, "Z00C"), // 0x28
    op("sra C", Instr::Rot(RotOp::Sra, Loc8::C), 2, 8, "Z00C"), // 0x29
    op("sra D", Instr::Rot(RotOp::Sra, Loc8::D), 2, 8, "Z00C"), // 0x2A
    op("sra E", Instr::Rot(RotOp::Sra, Loc8::E), 2, 8, "Z00C"), // 0x2B
    op("sra H", Instr::Rot(RotOp::Sra, Loc8::H), 2, 8, "Z00C"), // 0x2C
    op("sra L", Instr::Rot(RotOp::Sra, Loc8::L), 2, 8, "Z00C"), // 0x2D
    op("sra [HL]", Instr::Rot(RotOp::Sra, Loc8::HlInd), 2, 16, "Z00C"), // 0x2E
    op("sra A", Instr::Rot(RotOp::Sra, Loc8::A), 2, 8, "Z00C"), // 0x2F
    op("swap B", Instr::Rot(RotOp::Swap, Loc8::B), 2, 8, "Z000"), // 0x30
    op("swap C", Instr::Rot(RotOp::Swap, Loc8::C), 2, 8, "Z000"), // 0x31
    op("swap D", Instr::Rot(RotOp::Swap, Loc8::D), 2, 8, "Z000"), // 0x32
    op("swap E", Instr::Rot(RotOp::Swap, Loc8::E), 2, 8, "Z000"), // 0x33
    op("swap H", Instr::Rot(RotOp::Swap, Loc8::H), 2, 8, "Z000"), // 0x34
    op("swap L", Instr::Rot(RotOp::Swap, Loc8::L), 2, 8, "Z000"), // 0x35
    op("swap [HL]", Instr::Rot(RotOp::Swap, Loc8::HlInd), 2, 16, "Z000"), // 0x36
    op("swap A", Instr::Rot(RotOp::Swap, Loc8::A), 2, 8, "Z000"), // 0x37
    op("srl B", Instr::Rot(RotOp::Srl, Loc8::B), 2, 8, "Z00C"), // 0x38
    op("srl C", Instr::Rot(RotOp::Srl, Loc8::C), 2, 8, "Z00C"), // 0x39
    op("srl D", Instr::Rot(RotOp::Srl, Loc8::D), 2, 8, "Z00C"), // 0x3A
    op("srl E", Instr::Rot(RotOp::Srl, Loc8::E), 2, 8, "Z00C"), // 0x3B
    op("srl H", Instr::Rot(RotOp::Srl, Loc8::H), 2, 8, "Z00C"), // 0x3C
    op("srl L", Instr::Rot(RotOp::Srl, Loc8::L), 2, 8, "Z00C"), // 0x3D
    op("srl [HL]", Instr::Rot(RotOp::Srl, Loc8::HlInd), 2, 16, "Z00C"), // 0x3E
    op("srl A", Instr::Rot(RotOp::Srl, Loc8::A), 2, 8, "Z00C"), // 0x3F
    op("bit 0,B", Instr::Bit(0, Loc8::B), 2, 8, "Z01-"), // 0x40
    op("bit 0,C", Instr::Bit(0, Loc8::C), 2, 8, "Z01-"), // 0x41
    op("bit 0,D", Instr::Bit(0, Loc8::D), 2, 8, "Z01-"), // 0x42
    op("bit 0,E", Instr::Bit(0, Loc8::E), 2, 8, "Z01-"), // 0x43
    op("bit 0,H", Instr::Bit(0, Loc8::H), 2, 8, "Z01-"), // 0x44
    op("bit 0,L", Instr::Bit(0, Loc8::L), 2, 8, "Z01-"), // 0x45
    op("bit 0,[HL]", Instr::Bit(0, Loc8::HlInd), 2, 12, "Z01-"), // 0x46
    op("bit 0,A", Instr::Bit(0, Loc8::A), 2, 8, "Z01-"), // 0x47
    op("bit 1,B", Instr::Bit(1, Loc8::B), 2, 8, "Z01-"), // 0x48
    op("bit 1,C", Instr::Bit(1, Loc8::C), 2, 8, "Z01-"), // 0x49
    op("bit 1,D", Instr::Bit(1, Loc8::D), 2, 8, "Z01-"), // 0x4A
    op("bit 1,E", Instr::Bit(1, Loc8::E), 2, 8, "Z01-"), // 0x4B
    op("bit 1,H", Instr::Bit(1, Loc8::H), 2, 8, "Z01-"), // 0x4C
    op("bit 1,L", Instr::Bit(1, Loc8::L), 2, 8, "Z01-"), // 0x4D
    op("bit 1,[HL]", Instr::Bit(1, Loc8::HlInd), 2, 12, "Z01-"), // 0x4E
    op("bit 1,A", Instr::Bit(1, Loc8::A), 2, 8, "Z01-"), // 0x4F
    op("bit 2,B", Instr::Bit(2, Loc8::B), 2, 8, "Z01-"), // 0x50
    op("bit 2,C", Instr::Bit(2, Loc8::C), 2, 8, "Z01-"), // 0x51
    op("bit 2,D", Instr::Bit(2, Loc8::D), 2, 8, "Z01-"), // 0x52
    op("bit 2,E", Instr::Bit(2, Loc8::E), 2, 8, "Z01-"), // 0x53
    op("bit 2,H", Instr::Bit(2, Loc8::H), 2, 8, "Z01-"), // 0x54
    op("bit 2,L", Instr::Bit(2, Loc8::L), 2, 8, "Z01-"), // 0x55
    op("bit 2,[HL]", Instr::Bit(2, Loc8::HlInd), 2, 12, "Z01-"), // 0x56
    op("bit 2,A", Instr::Bit(2, Loc8::A), 2, 8, "Z01-"), // 0x57
    op("bit 3,B", Instr::Bit(3, Loc8::B), 2, 8, "Z01-"), // 0x58
    op("bit 3,C", Instr::Bit(3, Loc8::C), 2, 8, "Z01-"), // 0x59
    op("bit 3,D", Instr::Bit(3, Loc8::D), 2, 8, "Z01-"), // 0x5A
    op("bit 3,E", Instr::Bit(3, Loc8::E), 2, 8, "Z01-"), // 0x5B
    op("bit 3,H", Instr::Bit(3, Loc8::H), 2, 8, "Z01-"), // 0x5C
    op("bit 3,L", Instr::Bit(3, Loc8::L), 2, 8, "Z01-"), // 0x5D
    op("bit 3,[HL]", Instr::Bit(3, Loc8::HlInd), 2, 12, "Z01-"), // 0x5E
    op("bit 3,A", Instr::Bit(3, Loc8::A), 2, 8, "Z01-"), // 0x5F
    op("bit 4,B", Instr::Bit(4, Loc8::B), 2, 8, "Z01-"), // 0x60
    op("bit 4,C", Instr::Bit(4, Loc8::C), 2, 8, "Z01-"), // 0x61
    op("bit 4,D", Instr::Bit(4, Loc8::D), 2, 8, "Z01-"), // 0x62
    op("bit 4,E", Instr::Bit(4, Loc8::E), 2, 8, "Z01-"), // 0x63
    op("bit 4,H", Instr::Bit(4, Loc8::H), 2, 8, "Z01-"), // 0x64
    op("bit 4,L", Instr::Bit(4, Loc8::L), 2, 8, "Z01-"), // 0x65
    op("bit 4,[HL]", Instr::Bit(4, Loc8::HlInd), 2, 12, "Z01-"), // 0x66
    op("bit 4,A", Instr::Bit(4, Loc8::A), 2, 8, "Z01-"), // 0x67
    op("bit 5,B", Instr::Bit(5, Loc8::B), 2, 8, "Z01-"), // 0x68
    op("bit 5,C", Instr::Bit(5, Loc8::C), 2, 8, "Z01-"), // 0x69
    op("bit 5,D", Instr::Bit(5, Loc8::D), 2, 8, "Z01-"), // 0x6A
    op("bit 5,E", Instr::Bit(5, Loc8::E), 2, 8, "Z01-"), // 0x6B
    op("bit 5,H", Instr::Bit(5, Loc8::H), 2, 8, "Z01-"), // 0x6C
    op("bit 5,L", Instr::Bit(5, Loc8::L), 2, 8, "Z01-"), // 0x6D
    op("bit 5,[HL]", Instr::Bit(5, Loc8::HlInd), 2, 12, "Z01-"), // 0x6E
    op("bit 5,A", Instr::Bit(5, Loc8::A), 2, 8, "Z01-"), // 0x6F
    op("bit 6,B", Instr::Bit(6, Loc8::B), 2, 8, "Z01-"), // 0x70
    op("bit 6,C", Instr::Bit(6, Loc8::C), 2, 8, "Z01-"), // 0x71
    op("bit 6,D", Instr::Bit(6, Loc8::D), 2, 8, "Z01-"), // 0x72
    op("bit 6,E", Instr::Bit(6, Loc8::E), 2, 8, "Z01-"), // 0x73
    op("bit 6,H", Instr::Bit(6, Loc8::H), 2, 8, "Z01-"), // 0x74
    op("bit 6,L", Instr::Bit(6, Loc8::L), 2, 8, "Z01-"), // 0x75
    op("bit 6,[HL]", Instr::Bit(6, Loc8::HlInd), 2, 12, "Z01-"), // 0x76
    op("bit 6,A", Instr::Bit(6, Loc8::A), 2, 8, "Z01-"), // 0x77
    op("bit 7,B", Instr::Bit(7, Loc8::B), 2, 8, "Z01-"), // 0x78
    op("bit 7,C", Instr::Bit(7, Loc8::C), 2, 8, "Z01-"), // 0x79
    op("bit 7,D", Instr::Bit(7, Loc8::D), 2, 8, "Z01-"), // 0x7A
    op("bit 7,E", Instr::Bit(7, Loc8::E), 2, 8, "Z01-"), // 0x7B
    op("bit 7,H", Instr::Bit(7, Loc8::H), 2, 8, "Z01-"), // 0x7C
    op("bit 7,L", Instr::Bit(7, Loc8::L), 2, 8, "Z01-"), // 0x7D
    op("bit 7,[HL]", Instr::Bit(7, Loc8::HlInd), 2, 12, "Z01-"), // 0x7E
    op("bit 7,A", Instr::Bit(7, Loc8::A), 2, 8, "Z01-"), // 0x7F
    op("res 0,B", Instr::Res(0, Loc8::B), 2, 8, "----"), // 0x80
    op("res 0,C", Instr::Res(0, Loc8::C), 2, 8, "----"), // 0x81
    op("res 0,D", Instr::Res(0, Loc8::D), 2, 8, "----"), // 0x82
    op("res 0,E", Instr::Res(0, Loc8::E), 2, 8, "----"), // 0x83
    op("res 0,H", Instr::Res(0, Loc8::H), 2, 8, "----"), // 0x84
    op("res 0,L", Instr::Res(0, Loc8::L), 2, 8, "----"), // 0x85
    op("res 0,[HL]", Instr::Res(0, Loc8::HlInd), 2, 16, "----"), // 0x86
    op("res 0,A", Instr::Res(0, Loc8::A), 2, 8, "----"), // 0x87
    op("res 1,B", Instr::Res(1, Loc8::B), 2, 8, "----"), // 0x88
    op("res 1,C", Instr::Res(1, Loc8::C), 2, 8, "----"), // 0x89
    op("res 1,D", Instr::Res(1, Loc8::D), 2, 8, "----"), // 0x8A
    op("res 1,E", Instr::Res(1, Loc8::E), 2, 8, "----"), // 0x8B
    op("res 1,H", Instr::Res(1, Loc8::H), 2, 8, "----"), // 0x8C
    op("res 1,L", Instr::Res(1, Loc8::L), 2, 8, "----"), // 0x8D
    op("res 1,[HL]", Instr::Res(1, Loc8::HlInd), 2, 16, "----"), // 0x8E
    op("res 1,A", Instr::Res(1, Loc8::A), 2, 8, "----"), // 0x8F
    op("res 2,B", Instr::Res(2, Loc8::B), 2, 8, "----"), // 0x90
    op("res 2,C", Instr::Res(2, Loc8::C), 2, 8, "----"), // 0x91
    op("res 2,D", Instr::Res(2, Loc8::D), 2, 8, "----"), // 0x92
    op("res 2,E", Instr::Res(2, Loc8::E), 2, 8, "----"), // 0x93
    op("res 2,H", Instr::Res(2, Loc8::H), 2, 8, "----"), // 0x94
    op("res 2,L", Instr::Res(2, Loc8::L), 2, 8, "----"), // 0x95
    op("res 2,[HL]", Instr::Res(2, Loc8::HlInd), 2, 16, "----"), // 0x96
    op("res 2,A", Instr::Res(2, Loc8::A), 2, 8, "----"), // 0x97
    op("res 3,B", Instr::Res(3, Loc8::B), 2, 8, "----"), // 0x98
    op("res 3,C", Instr::Res(3, Loc8::C), 2, 8, "----"), // 0x99
    op("res 3,D", Instr::Res(3, Loc8::D), 2, 8, "----"), // 0x9A
    op("res 3,E", Instr::Res(3, Loc8::E), 2, 8, "----"), // 0x9B
    op("res 3,H", Instr::Res(3, Loc8::H), 2, 8, "----"), // 0x9C
    op("res 3,L", Instr::Res(3, Loc8::L), 2, 8, "----"), // 0x9D
    op("res 3,[HL]", Instr::Res(3, Loc8::HlInd), 2, 16, "----"), // 0x9E
    op("res 3,A", Instr::Res(3, Loc8::A), 2, 8, "----"), // 0x9F
    op("res 4,B", Instr::Res(4, Loc8::B), 2, 8, "----"), // 0xA0
    op("res 4,C", Instr::Res(4, Loc8::C), 2, 8, "----"), // 0xA1
    op("res 4,D", Instr::Res(4, Loc8::D), 2, 8, "----"), // 0xA2
    op("res 4,E", Instr::Res(4, Loc8::E), 2, 8, "----"), // 0xA3
    op("res 4,H", Instr::Res(4, Loc8::H), 2, 8, "----"), // 0xA4
    op("res 4,L", Instr::Res(4, Loc8::L), 2, 8, "----"), // 0xA5
    op("res 4,[HL]", Instr::Res(4, Loc8::HlInd), 2, 16, "----"), // 0xA6
    op("res 4,A", Instr::Res(4, Loc8::A), 2, 8, "----"), // 0xA7
    op("res 5,B", Instr::Res(5, Loc8::B), 2, 8, "----"), // 0xA8
    op("res 5,C", Instr::Res(5, Loc8::C), 2, 8, "----"), // 0xA9
    op("res 5,D", Instr::Res(5, Loc8::D), 2, 8, "----"), // 0xAA
    op("res 5,E", Instr::Res(5, Loc8::E), 2, 8, "----"), // 0xAB
    op("res 5,H", Instr::Res(5, Loc8::H), 2, 8, "----"), // 0xAC
    op("res 5,L", Instr::Res(5, Loc8::L), 2, 8, "----"), // 0xAD
    op("res 5,[HL]", Instr::Res(5, Loc8::HlInd), 2, 16, "----"), // 0xAE
    op("res 5,A", Instr::Res(5, Loc8::A), 2, 8, "----"), // 0xAF
    op("res 6,B", Instr::Res(6, Loc8::B), 2, 8, "----"), // 0xB0
    op("res 6,C", Instr::Res(6, Loc8::C), 2, 8, "----"), // 0xB1
    op("res 6,D", Instr::Res(6, Loc8::D), 2, 8, "----"), // 0xB2
    op("res 6,E", Instr::Res(6, Loc8::E), 2, 8, "----"), // 0xB3
    op("res 6,H", Instr::Res(6, Loc8::H), 2, 8, "----"), // 0xB4
    op("res 6,L", Instr::Res(6, Loc8::L), 2, 8, "----"), // 0xB5
    op("res 6,[HL]", Instr::Res(6, Loc8::HlInd), 2, 16, "----"), // 0xB6
    op("res 6,A", Instr::Res(6, Loc8::A), 2, 8, "----"), // 0xB7
    op("res 7,B", Instr::Res(7, Loc8::B), 2, 8, "----"), // 0xB8
    op("res 7,C", Instr::Res(7, Loc8::C), 2, 8, "----"), // 0xB9
    op("res 7,D", Instr::Res(7, Loc8::D), 2, 8, "----"), // 0xBA
    op("res 7,E", Instr::Res(7, Loc8::E), 2, 8, "----"), // 0xBB
    op("res 7,H", Instr::Res(7, Loc8::H), 2, 8, "----"), // 0xBC
    op("res 7,L", Instr::Res(7, Loc8::L), 2, 8, "----"), // 0xBD
    op("res 7,[HL]", Instr::Res(7, Loc8::HlInd), 2, 16, "----"), // 0xBE
    op("res 7,A", Instr::Res(7, Loc8::A), 2, 8, "----"), // 0xBF
    op("set 0,B", Instr::Set(0, Loc8::B), 2, 8, "----"), // 0xC0
    op("set 0,C", Instr::Set(0, Loc8::C), 2, 8, "----"), // 0xC1
    op("set 0,D", Instr::Set(0, Loc8::D), 2, 8, "----"), // 0xC2
    op("set 0,E", Instr::Set(0, Loc8::E), 2, 8, "----"), // 0xC3
    op("set 0,H", Instr::Set(0, Loc8::H), 2, 8, "----"), // 0xC4
    op("set 0,L", Instr::Set(0, Loc8::L), 2, 8, "----"), // 0xC5
    op("set 0,[HL]", Instr::Set(0, Loc8::HlInd), 2, 16, "----"), // 0xC6
    op("set 0,A", Instr::Set(0, Loc8::A), 2, 8, "----"), // 0xC7
    op("set 1,B", Instr::Set(1, Loc8::B), 2, 8, "----"), // 0xC8
    op("set 1,C", Instr::Set(1, Loc8::C), 2, 8, "----"), // 0xC9
    op("set 1,D", Instr::Set(1, Loc8::D), 2, 8, "----"), // 0xCA
    op("set 1,E", Instr::Set(1, Loc8::E), 2, 8, "----"), // 0xCB
    op("set 1,H", Instr::Set(1, Loc8::H), 2, 8, "----"), // 0xCC
    op("set 1,L", Instr::Set(1, Loc8::L), 2, 8, "----"), // 0xCD
    op("set 1,[HL]", Instr::Set(1, Loc8::HlInd), 2, 16, "----"), // 0xCE
    op("set 1,A", Instr::Set(1, Loc8::A), 2, 8, "----"), // 0xCF
    op("set 2,B", Instr::Set(2, Loc8::B), 2, 8, "----"), // 0xD0
    op("set 2,C", Instr::Set(2, Loc8::C), 2, 8, "----"), // 0xD1
    op("set 2,D", Instr::Set(2, Loc8::D), 2, 8, "----"), // 0xD2
    op("set 2,E", Instr::Set(2, Loc8::E), 2, 8, "----"), // 0xD3
    op("set 2,H", Instr::Set(2, Loc8::H), 2, 8, "----"), // 0xD4
    op("set 2,L", Instr::Set(2, Loc8::L), 2, 8, "----"), // 0xD5
    op("set 2,[HL]", Instr::Set(2, Loc8::HlInd), 2, 16, "----"), // 0xD6
    op("set 2,A", Instr::Set(2, Loc8::A), 2, 8, "----"), // 0xD7
    op("set 3,B", Instr::Set(3, Loc8::B), 2, 8, "----"), // 0xD8
    op("set 3,C", Instr::Set(3, Loc8::C), 2, 8, "----"), // 0xD9
    op("set 3,D", Instr::Set(3, Loc8::D), 2, 8, "----"), // 0xDA
    op("set 3,E", Instr::Set(3, Loc8::E), 2, 8, "----"), // 0xDB
    op("set 3,H", Instr::Set(3, Loc8::H), 2, 8, "----"), // 0xDC
    op("set 3,L", Instr::Set(3, Loc8::L), 2, 8, "----"), // 0xDD
    op("set 3,[HL]", Instr::Set(3, Loc8::HlInd), 2, 16, "----"), // 0xDE
    op("set 3,A", Instr::Set(3, Loc8::A), 2, 8, "----"), // 0xDF
    op("set 4,B", Instr::Set(4, Loc8::B), 2, 8, "----"), // 0xE0
    op("set 4,C", Instr::Set(4, Loc8::C), 2, 8, "----"), // 0xE1
    op("set 4,D", Instr::Set(4, Loc8::D), 2, 8, "----"), // 0xE2
    op("set 4,E", Instr::Set(4, Loc8::E), 2, 8, "----"), // 0xE3
    op("set 4,H", Instr::Set(4, Loc8::H), 2, 8, "----"), // 0xE4
    op("set 4,L", Instr::Set(4, Loc8::L), 2, 8, "----"), // 0xE5
    op("set 4,[HL]", Instr::Set(4, Loc8::HlInd), 2, 16, "----"), // 0xE6
    op("set 4,A", Instr::Set(4, Loc8::A), 2, 8, "----"), // 0xE7
    op("set 5,B", Instr::Set(5, Loc8::B), 2, 8, "----"), // 0xE8
    op("set 5,C", Instr::Set(5, Loc8::C), 2, 8, "----"), // 0xE9
    op("set 5,D", Instr::Set(5, Loc8::D), 2, 8, "----"), // 0xEA
    op("set 5,E", Instr::Set(5, Loc8::E), 2, 8, "----"), // 0xEB
    op("set 5,H", Instr::Set(5, Loc8::H), 2, 8, "----"), // 0xEC
    op("set 5,L", Instr::Set(5, Loc8::L), 2, 8, "----"), // 0xED
    op("set 5,[HL]", Instr::Set(5, Loc8::HlInd), 2, 16, "----"), // 0xEE
    op("set 5,A", Instr::Set(5, Loc8::A), 2, 8, "----"), // 0xEF
    op("set 6,B", Instr::Set(6, Loc8::B), 2, 8, "----"), // 0xF0
    op("set 6,C", Instr::Set(6, Loc8::C), 2, 8, "----"), // 0xF1
    op("set 6,D", Instr::Set(6, Loc8::D), 2, 8, "----"), // 0xF2
    op("set 6,E", Instr::Set(6, Loc8::E), 2, 8, "----"), // 0xF3
    op("set 6,H", Instr::Set(6, Loc8::H), 2, 8, "----"), // 0xF4
    op("set 6,L", Instr::Set(6, Loc8::L), 2, 8, "----"), // 0xF5
    op("set 6,[HL]", Instr::Set(6, Loc8::HlInd), 2, 16, "----"), // 0xF6
    op("set 6,A", Instr::Set(6, Loc8::A), 2, 8, "----"), // 0xF7
    op("set 7,B", Instr::Set(7, Loc8::B), 2, 8, "----"), // 0xF8
    op("set 7,C", Instr::Set(7, Loc8::C), 2, 8, "----"), // 0xF9
    op("set 7,D", Instr::Set(7, Loc8::D), 2, 8, "----"), // 0xFA
    op("set 7,E", Instr::Set(7, Loc8::E), 2, 8, "----"), // 0xFB
    op("set 7,H", Instr::Set(7, Loc8::H), 2, 8, "----"), // 0xFC
    op("set 7,L", Instr::Set(7, Loc8::L), 2, 8, "----"), // 0xFD
    op("set 7,[HL]", Instr::Set(7, Loc8::HlInd), 2, 16, "----"), // 0xFE
    op("set 7,A", Instr::Set(7, Loc8::A), 2, 8, "----"), // 0xFF
];
