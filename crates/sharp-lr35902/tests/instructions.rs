//! Instruction behavior tests: small programs executed end to end on a
//! flat bus, asserting registers, memory, flags and timing.

use emu_core::{SimpleBus, Ticks};
use sharp_lr35902::{Lr35902, Pair, CF, HF, NF, ZF};

const ORIGIN: u16 = 0x0100;

fn machine(program: &[u8]) -> (Lr35902, SimpleBus) {
    let mut bus = SimpleBus::new();
    bus.load(ORIGIN, program);
    (Lr35902::new(), bus)
}

/// Run the program until the core executes STOP, returning the machine
/// and the total T-states.
fn run_to_stop(program: &[u8]) -> (Lr35902, SimpleBus, Ticks) {
    let (mut cpu, mut bus) = machine(program);
    let ticks = cpu.run_until(&mut bus, Lr35902::is_stopped);
    (cpu, bus, ticks)
}

#[test]
fn store_accumulator_to_absolute_address() {
    // ld A,$11 ; ld [$000A],A ; stop
    let (cpu, bus, ticks) = run_to_stop(&[0x3E, 0x11, 0xEA, 0x0A, 0x00, 0x10, 0x00]);

    assert_eq!(bus.peek(0x000A), 0x11);
    assert_eq!(cpu.registers().a, 0x11);
    assert_eq!(ticks, Ticks::new(8 + 16 + 4));
    assert_eq!(ticks.machine_cycles(), 7);
}

#[test]
fn add_reports_half_and_full_carry() {
    // ld A,$FF ; ld B,$FF ; add B ; stop
    let (cpu, _, _) = run_to_stop(&[0x3E, 0xFF, 0x06, 0xFF, 0x80, 0x10, 0x00]);

    let regs = cpu.registers();
    assert_eq!(regs.a, 0xFE);
    assert!(!regs.flag(ZF));
    assert!(!regs.flag(NF));
    assert!(regs.flag(HF));
    assert!(regs.flag(CF));
}

#[test]
fn adc_chains_through_carry() {
    // ld A,$80 ; ld B,$80 ; ld C,$10 ; add B ; adc C ; stop
    let (cpu, _, _) =
        run_to_stop(&[0x3E, 0x80, 0x06, 0x80, 0x0E, 0x10, 0x80, 0x89, 0x10, 0x00]);

    // add: $80+$80 = $00 with carry; adc: $00+$10+1 = $11.
    let regs = cpu.registers();
    assert_eq!(regs.a, 0x11);
    assert!(!regs.flag(CF));
    assert!(!regs.flag(ZF));
}

#[test]
fn sbc_borrows_through_carry() {
    // ld A,$10 ; ld B,$20 ; sub B ; ld A,$05 ; sbc B ; stop
    let (cpu, _, _) =
        run_to_stop(&[0x3E, 0x10, 0x06, 0x20, 0x90, 0x3E, 0x05, 0x98, 0x10, 0x00]);

    // sub: $10-$20 borrows; sbc: $05-$20-1 = $E4 with borrow again.
    let regs = cpu.registers();
    assert_eq!(regs.a, 0xE4);
    assert!(regs.flag(NF));
    assert!(regs.flag(CF));
}

#[test]
fn inc_preserves_carry_and_dec_sets_n() {
    // scf ; ld B,$FF ; inc B ; stop
    let (cpu, _, _) = run_to_stop(&[0x37, 0x06, 0xFF, 0x04, 0x10, 0x00]);

    let regs = cpu.registers();
    assert_eq!(regs.b, 0x00);
    assert!(regs.flag(ZF));
    assert!(regs.flag(HF));
    assert!(!regs.flag(NF));
    assert!(regs.flag(CF), "inc must not touch carry");

    // ld B,$00 ; dec B ; stop
    let (cpu, _, _) = run_to_stop(&[0x06, 0x00, 0x05, 0x10, 0x00]);
    let regs = cpu.registers();
    assert_eq!(regs.b, 0xFF);
    assert!(regs.flag(NF));
    assert!(regs.flag(HF));
}

#[test]
fn wide_inc_dec_touch_no_flags() {
    // scf ; ld BC,$0000 ; dec BC ; inc SP ; stop
    let (cpu, _, _) = run_to_stop(&[0x37, 0x01, 0x00, 0x00, 0x0B, 0x33, 0x10, 0x00]);

    let regs = cpu.registers();
    assert_eq!(regs.pair(Pair::Bc), 0xFFFF);
    assert_eq!(regs.sp, 0xFFFF);
    assert_eq!(regs.f, CF, "16-bit inc/dec must leave F alone");
}

#[test]
fn add_hl_preserves_zero_flag() {
    // xor A ; ld HL,$0FFF ; ld BC,$0001 ; add HL,BC ; stop
    let (cpu, _, _) =
        run_to_stop(&[0xAF, 0x21, 0xFF, 0x0F, 0x01, 0x01, 0x00, 0x09, 0x10, 0x00]);

    let regs = cpu.registers();
    assert_eq!(regs.hl(), 0x1000);
    assert!(regs.flag(ZF), "add HL must preserve Z from xor");
    assert!(regs.flag(HF));
    assert!(!regs.flag(NF));
    assert!(!regs.flag(CF));
}

#[test]
fn add_sp_takes_signed_operand() {
    // ld SP,$00FF ; add SP,+1 ; stop
    let (cpu, _, _) = run_to_stop(&[0x31, 0xFF, 0x00, 0xE8, 0x01, 0x10, 0x00]);
    let regs = cpu.registers();
    assert_eq!(regs.sp, 0x0100);
    assert_eq!(regs.f, HF | CF, "flags come from the low-byte add");

    // ld SP,$0000 ; add SP,-1 ; stop
    let (cpu, _, _) = run_to_stop(&[0x31, 0x00, 0x00, 0xE8, 0xFF, 0x10, 0x00]);
    let regs = cpu.registers();
    assert_eq!(regs.sp, 0xFFFF);
    assert_eq!(regs.f, 0x00);
}

#[test]
fn ld_hl_sp_offset_computes_flags_like_add_sp() {
    // ld SP,$FFF8 ; ld HL,SP+8 ; stop
    let (cpu, _, _) = run_to_stop(&[0x31, 0xF8, 0xFF, 0xF8, 0x08, 0x10, 0x00]);

    let regs = cpu.registers();
    assert_eq!(regs.hl(), 0x0000);
    assert_eq!(regs.sp, 0xFFF8, "SP itself is unchanged");
    assert_eq!(regs.f, HF | CF);
}

#[test]
fn store_sp_to_memory_is_little_endian() {
    // ld SP,$BEEF ; ld [$C000],SP ; stop
    let (_, bus, _) = run_to_stop(&[0x31, 0xEF, 0xBE, 0x08, 0x00, 0xC0, 0x10, 0x00]);

    assert_eq!(bus.peek(0xC000), 0xEF);
    assert_eq!(bus.peek(0xC001), 0xBE);
}

#[test]
fn hl_post_increment_and_decrement_forms() {
    // ld HL,$C000 ; ld A,$AA ; ld [HL+],A ; ld A,$BB ; ld [HL-],A ;
    // ld A,[HL+] ; stop
    let (cpu, bus, _) = run_to_stop(&[
        0x21, 0x00, 0xC0, 0x3E, 0xAA, 0x22, 0x3E, 0xBB, 0x32, 0x2A, 0x10, 0x00,
    ]);

    assert_eq!(bus.peek(0xC000), 0xAA);
    assert_eq!(bus.peek(0xC001), 0xBB);
    let regs = cpu.registers();
    assert_eq!(regs.a, 0xAA, "readback through [HL+]");
    assert_eq!(regs.hl(), 0xC001);
}

#[test]
fn high_page_loads_and_stores() {
    // ld A,$77 ; ldh [$80],A ; ld C,$81 ; ldh [C],A ; ldh A,[$81] ; stop
    let (cpu, bus, _) = run_to_stop(&[
        0x3E, 0x77, 0xE0, 0x80, 0x0E, 0x81, 0xE2, 0xF0, 0x81, 0x10, 0x00,
    ]);

    assert_eq!(bus.peek(0xFF80), 0x77);
    assert_eq!(bus.peek(0xFF81), 0x77);
    assert_eq!(cpu.registers().a, 0x77);
}

#[test]
fn conditional_jump_falls_through_when_not_taken() {
    let (mut cpu, mut bus) = machine(&[0xAF, 0x20, 0x05, 0x10, 0x00]);

    cpu.step(&mut bus); // xor A sets Z
    let ticks = cpu.step(&mut bus); // jr NZ not taken
    assert_eq!(ticks, Ticks::from(8));
    assert_eq!(cpu.registers().pc, ORIGIN + 3);
}

#[test]
fn every_conditional_opcode_advances_declared_length_when_not_taken() {
    // (opcode, F value suppressing the branch, length, not-taken cost)
    let cases: [(u8, u8, u16, u64); 16] = [
        (0x20, ZF, 2, 8),  // jr NZ
        (0x28, 0, 2, 8),   // jr Z
        (0x30, CF, 2, 8),  // jr NC
        (0x38, 0, 2, 8),   // jr C
        (0xC2, ZF, 3, 12), // jp NZ
        (0xCA, 0, 3, 12),  // jp Z
        (0xD2, CF, 3, 12), // jp NC
        (0xDA, 0, 3, 12),  // jp C
        (0xC4, ZF, 3, 12), // call NZ
        (0xCC, 0, 3, 12),  // call Z
        (0xD4, CF, 3, 12), // call NC
        (0xDC, 0, 3, 12),  // call C
        (0xC0, ZF, 1, 8),  // ret NZ
        (0xC8, 0, 1, 8),   // ret Z
        (0xD0, CF, 1, 8),  // ret NC
        (0xD8, 0, 1, 8),   // ret C
    ];

    for (opcode, f, length, cost) in cases {
        let (mut cpu, mut bus) = machine(&[opcode, 0x00, 0x02]);
        cpu.registers_mut().f = f;
        let sp = cpu.registers().sp;

        let ticks = cpu.step(&mut bus);
        assert_eq!(ticks.get(), cost, "{opcode:#04X}: not-taken cost");
        assert_eq!(cpu.registers().pc, ORIGIN + length, "{opcode:#04X}: PC");
        assert_eq!(cpu.registers().sp, sp, "{opcode:#04X}: stack untouched");
    }
}

#[test]
fn backward_jump_loop_counts_down() {
    // ld B,$03 ; loop: dec B ; jr NZ,loop ; stop
    let (cpu, _, ticks) = run_to_stop(&[0x06, 0x03, 0x05, 0x20, 0xFD, 0x10, 0x00]);

    assert_eq!(cpu.registers().b, 0x00);
    // ld 8 + 3*(dec 4) + 2 taken jr at 12 + 1 not taken at 8 + stop 4.
    assert_eq!(ticks, Ticks::new(8 + 12 + 24 + 8 + 4));
}

#[test]
fn taken_conditional_branches_pay_the_surcharge() {
    // ld A,$01 ; or A ; jp NZ,$0110 ; (pad) ; at $0110: stop
    let mut program = [0u8; 0x20];
    program[..6].copy_from_slice(&[0x3E, 0x01, 0xB7, 0xC2, 0x10, 0x01]);
    program[0x10] = 0x10; // stop
    let (mut cpu, mut bus) = machine(&program);

    cpu.step(&mut bus);
    cpu.step(&mut bus);
    let ticks = cpu.step(&mut bus);
    assert_eq!(ticks, Ticks::from(16), "taken jp NZ costs 12+4");
    assert_eq!(cpu.registers().pc, 0x0110);
}

#[test]
fn call_and_ret_nest_through_the_stack() {
    // $0100: call $0110 ; stop
    // $0110: ld A,$5A ; ret
    let mut program = [0u8; 0x20];
    program[..5].copy_from_slice(&[0xCD, 0x10, 0x01, 0x10, 0x00]);
    program[0x10..0x13].copy_from_slice(&[0x3E, 0x5A, 0xC9]);
    let (mut cpu, mut bus) = machine(&program);

    let call = cpu.step(&mut bus);
    assert_eq!(call, Ticks::from(24));
    assert_eq!(cpu.registers().pc, 0x0110);
    assert_eq!(cpu.registers().sp, 0xFFFC);
    // Return address $0103, low byte at the lower address.
    assert_eq!(bus.peek(0xFFFC), 0x03);
    assert_eq!(bus.peek(0xFFFD), 0x01);

    cpu.step(&mut bus);
    let ret = cpu.step(&mut bus);
    assert_eq!(ret, Ticks::from(16));
    assert_eq!(cpu.registers().pc, 0x0103);
    assert_eq!(cpu.registers().sp, 0xFFFE);
    assert_eq!(cpu.registers().a, 0x5A);
}

#[test]
fn conditional_ret_surcharge_when_taken() {
    // $0100: ld A,$01 ; or A ; call $0110 ; stop
    // $0110: ret NZ
    let mut program = [0u8; 0x20];
    program[..7].copy_from_slice(&[0x3E, 0x01, 0xB7, 0xCD, 0x10, 0x01, 0x10]);
    program[0x10] = 0xC0;
    let (mut cpu, mut bus) = machine(&program);

    cpu.step(&mut bus);
    cpu.step(&mut bus);
    cpu.step(&mut bus); // call
    let ret = cpu.step(&mut bus);
    assert_eq!(ret, Ticks::from(20), "taken ret NZ costs 8+12");
    assert_eq!(cpu.registers().pc, 0x0106);
}

#[test]
fn rst_pushes_and_vectors() {
    let mut bus = SimpleBus::new();
    bus.load(ORIGIN, &[0xEF]); // rst 28
    bus.load(0x0028, &[0x10, 0x00]);
    let mut cpu = Lr35902::new();

    let ticks = cpu.step(&mut bus);
    assert_eq!(ticks, Ticks::from(16));
    assert_eq!(cpu.registers().pc, 0x0028);
    assert_eq!(bus.peek(0xFFFC), 0x01);
    assert_eq!(bus.peek(0xFFFD), 0x01);
}

#[test]
fn jp_hl_is_a_plain_register_jump() {
    let mut program = [0u8; 0x110];
    program[..4].copy_from_slice(&[0x21, 0x00, 0x02, 0xE9]); // ld HL,$0200 ; jp HL
    program[0x100] = 0x10; // $0200: stop
    let (mut cpu, mut bus) = machine(&program);

    cpu.step(&mut bus);
    let ticks = cpu.step(&mut bus);
    assert_eq!(ticks, Ticks::from(4));
    assert_eq!(cpu.registers().pc, 0x0200);
}

#[test]
fn reti_restores_pc_and_enables_interrupts() {
    // $0100: call $0110 ; stop ; $0110: reti
    let mut program = [0u8; 0x20];
    program[..5].copy_from_slice(&[0xCD, 0x10, 0x01, 0x10, 0x00]);
    program[0x10] = 0xD9;
    let (cpu, _, _) = {
        let (mut cpu, mut bus) = machine(&program);
        let ticks = cpu.run_until(&mut bus, Lr35902::is_stopped);
        (cpu, bus, ticks)
    };

    assert!(cpu.interrupts_enabled());
    assert_eq!(cpu.registers().sp, 0xFFFE);
}

#[test]
fn pop_af_masks_the_low_nibble() {
    // ld BC,$12FF ; push BC ; pop AF ; stop
    let (cpu, _, _) = run_to_stop(&[0x01, 0xFF, 0x12, 0xC5, 0xF1, 0x10, 0x00]);

    let regs = cpu.registers();
    assert_eq!(regs.a, 0x12);
    assert_eq!(regs.f, 0xF0, "F low nibble does not exist");
    assert_eq!(regs.sp, 0xFFFE);
}

#[test]
fn push_pop_round_trips_every_pair() {
    let pairs: [(u8, u8, Pair, u16); 4] = [
        (0xC5, 0xC1, Pair::Bc, 0x12FF),
        (0xD5, 0xD1, Pair::De, 0x34EE),
        (0xE5, 0xE1, Pair::Hl, 0x56DD),
        (0xF5, 0xF1, Pair::Af, 0x78F0),
    ];

    for (push, pop, pair, value) in pairs {
        let (mut cpu, mut bus) = machine(&[push, pop, 0x10, 0x00]);
        cpu.registers_mut().set_pair(pair, value);

        cpu.run_until(&mut bus, Lr35902::is_stopped);
        assert_eq!(cpu.registers().pair(pair), value, "{pair:?}: value");
        assert_eq!(cpu.registers().sp, 0xFFFE, "{pair:?}: SP restored");
    }
}

#[test]
fn accumulator_rotates_never_set_z() {
    // ld A,$00 ; rlca ; stop
    let (cpu, _, _) = run_to_stop(&[0x3E, 0x00, 0x07, 0x10, 0x00]);
    assert_eq!(cpu.registers().f, 0x00, "rlca clears Z even for zero");

    // ld B,$00 ; rlc B ; stop -- the CB form does compute Z
    let (cpu, _, _) = run_to_stop(&[0x06, 0x00, 0xCB, 0x00, 0x10, 0x00]);
    assert_eq!(cpu.registers().f, ZF);
}

#[test]
fn rra_shifts_carry_into_bit_7() {
    // scf ; ld A,$01 ; rra ; stop
    let (cpu, _, _) = run_to_stop(&[0x37, 0x3E, 0x01, 0x1F, 0x10, 0x00]);

    let regs = cpu.registers();
    assert_eq!(regs.a, 0x80);
    assert!(regs.flag(CF), "bit 0 went out to carry");
}

#[test]
fn cb_rotate_targets_the_accumulator() {
    // ld A,$80 ; ld E,$01 ; rlc A ; stop
    let (cpu, _, _) = run_to_stop(&[0x3E, 0x80, 0x1E, 0x01, 0xCB, 0x07, 0x10, 0x00]);

    let regs = cpu.registers();
    assert_eq!(regs.a, 0x01, "rlc A rotates A");
    assert_eq!(regs.e, 0x01, "other registers are untouched");
    assert!(regs.flag(CF));
}

#[test]
fn shifts_distinguish_arithmetic_and_logical() {
    // ld A,$81 ; sra A ; stop
    let (cpu, _, _) = run_to_stop(&[0x3E, 0x81, 0xCB, 0x2F, 0x10, 0x00]);
    assert_eq!(cpu.registers().a, 0xC0, "sra keeps the sign bit");
    assert!(cpu.registers().flag(CF));

    // ld A,$81 ; srl A ; stop
    let (cpu, _, _) = run_to_stop(&[0x3E, 0x81, 0xCB, 0x3F, 0x10, 0x00]);
    assert_eq!(cpu.registers().a, 0x40, "srl shifts in zero");
    assert!(cpu.registers().flag(CF));
}

#[test]
fn swap_exchanges_nibbles() {
    // ld A,$F1 ; swap A ; stop
    let (cpu, _, _) = run_to_stop(&[0x3E, 0xF1, 0xCB, 0x37, 0x10, 0x00]);
    assert_eq!(cpu.registers().a, 0x1F);
    assert_eq!(cpu.registers().f, 0x00);

    // xor A ; swap A ; stop
    let (cpu, _, _) = run_to_stop(&[0xAF, 0xCB, 0x37, 0x10, 0x00]);
    assert_eq!(cpu.registers().f, ZF);
}

#[test]
fn bit_test_preserves_carry() {
    // scf ; ld A,$04 ; bit 2,A ; stop
    let (cpu, _, _) = run_to_stop(&[0x37, 0x3E, 0x04, 0xCB, 0x57, 0x10, 0x00]);
    let regs = cpu.registers();
    assert!(!regs.flag(ZF));
    assert!(regs.flag(HF));
    assert!(!regs.flag(NF));
    assert!(regs.flag(CF), "bit must not touch carry");

    // ld A,$04 ; bit 3,A ; stop
    let (cpu, _, _) = run_to_stop(&[0x3E, 0x04, 0xCB, 0x5F, 0x10, 0x00]);
    assert!(cpu.registers().flag(ZF));
}

#[test]
fn set_and_res_modify_memory_through_hl() {
    // ld HL,$C000 ; set 7,[HL] ; set 0,[HL] ; res 7,[HL] ; stop
    let (_, bus, _) = run_to_stop(&[
        0x21, 0x00, 0xC0, 0xCB, 0xFE, 0xCB, 0xC6, 0xCB, 0xBE, 0x10, 0x00,
    ]);

    assert_eq!(bus.peek(0xC000), 0x01);
}

#[test]
fn daa_adjusts_bcd_addition_and_subtraction() {
    // ld A,$15 ; ld B,$27 ; add B ; daa ; stop
    let (cpu, _, _) = run_to_stop(&[0x3E, 0x15, 0x06, 0x27, 0x80, 0x27, 0x10, 0x00]);
    let regs = cpu.registers();
    assert_eq!(regs.a, 0x42);
    assert!(!regs.flag(CF));
    assert!(!regs.flag(ZF));

    // ld A,$20 ; ld B,$13 ; sub B ; daa ; stop
    let (cpu, _, _) = run_to_stop(&[0x3E, 0x20, 0x06, 0x13, 0x90, 0x27, 0x10, 0x00]);
    let regs = cpu.registers();
    assert_eq!(regs.a, 0x07, "daa honors N after subtraction");
    assert!(regs.flag(NF));
}

#[test]
fn cpl_scf_ccf_flag_behavior() {
    // ld A,$35 ; cpl ; stop
    let (cpu, _, _) = run_to_stop(&[0x3E, 0x35, 0x2F, 0x10, 0x00]);
    let regs = cpu.registers();
    assert_eq!(regs.a, 0xCA);
    assert!(regs.flag(NF));
    assert!(regs.flag(HF));

    // scf ; ccf ; stop
    let (cpu, _, _) = run_to_stop(&[0x37, 0x3F, 0x10, 0x00]);
    let regs = cpu.registers();
    assert!(!regs.flag(CF), "ccf inverts carry");
    assert!(!regs.flag(NF));
    assert!(!regs.flag(HF));
}

#[test]
fn reserved_opcodes_execute_as_noops() {
    for byte in [0xD3u8, 0xDB, 0xDD, 0xE3, 0xE4, 0xEB, 0xEC, 0xED, 0xF4, 0xFC, 0xFD] {
        let (mut cpu, mut bus) = machine(&[byte, 0x10, 0x00]);

        let before = cpu.registers();
        let ticks = cpu.step(&mut bus);
        assert_eq!(ticks, Ticks::from(4), "{byte:#04X}");

        let after = cpu.registers();
        assert_eq!(after.pc, before.pc.wrapping_add(1), "{byte:#04X}");
        assert_eq!(after.f, before.f, "{byte:#04X}");
        assert_eq!(after.a, before.a, "{byte:#04X}");
    }
}

#[test]
fn halt_parks_the_core_until_observed() {
    let (mut cpu, mut bus) = machine(&[0x00, 0x76]);

    let ticks = cpu.run_until(&mut bus, Lr35902::is_halted);
    assert_eq!(ticks, Ticks::new(4 + 4));
    assert!(cpu.is_halted());
    assert!(!cpu.is_stopped());
}

#[test]
fn register_to_register_loads_cover_the_block() {
    // ld B,$12 ; ld C,B ; ld D,C ; ld H,D ; ld A,H ; stop
    let (cpu, _, _) = run_to_stop(&[0x06, 0x12, 0x48, 0x51, 0x62, 0x7C, 0x10, 0x00]);

    let regs = cpu.registers();
    assert_eq!(regs.b, 0x12);
    assert_eq!(regs.c, 0x12);
    assert_eq!(regs.d, 0x12);
    assert_eq!(regs.h, 0x12);
    assert_eq!(regs.a, 0x12);
}

#[test]
fn compare_sets_flags_without_writing_a() {
    // ld A,$10 ; cp $20 ; stop
    let (cpu, _, _) = run_to_stop(&[0x3E, 0x10, 0xFE, 0x20, 0x10, 0x00]);

    let regs = cpu.registers();
    assert_eq!(regs.a, 0x10);
    assert!(regs.flag(NF));
    assert!(regs.flag(CF));
    assert!(!regs.flag(ZF));
}
