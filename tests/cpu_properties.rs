//! Property-style checks against the universal invariants: packed-status
//! round-trip, stack arithmetic, addressing-mode page-cross penalties,
//! branch cycle costs, BCD closure, and the JMP indirect page-wrap bug.

use mos6502_core::system::System;

fn fresh(ram_size: usize) -> System {
    System::new(ram_size, None, None, None).unwrap()
}

fn run_one(sys: &mut System, program: &[u8], start: u16) -> u64 {
    sys.load_program(start, program).unwrap();
    sys.reset();
    sys.step_instruction()
}

#[test]
fn packed_status_round_trip_via_php_plp() {
    let mut sys = fresh(0x10000);
    // SEC ; SEI ; SED ; PHP ; CLC ; CLI ; CLD ; PLP
    let program = [0x38, 0x78, 0xF8, 0x08, 0x18, 0x58, 0xD8, 0x28];
    sys.load_program(0x8000, &program).unwrap();
    sys.reset();
    for _ in 0..program.len() {
        sys.step_instruction();
    }
    // Bit 5 always reads 1; bit 4 (B) is not stored and reads 0 after PLP.
    assert_eq!(sys.cpu.p & 0x20, 0x20);
    assert_eq!(sys.cpu.p & 0x10, 0x00);
    // C, I, D restored to the set state before PHP.
    assert_eq!(sys.cpu.p & 0x01, 0x01); // C
    assert_eq!(sys.cpu.p & 0x04, 0x04); // I
    assert_eq!(sys.cpu.p & 0x08, 0x08); // D
}

#[test]
fn stack_push_pull_round_trips_and_restores_sp() {
    let mut sys = fresh(0x10000);
    // LDA #$42 ; PHA ; LDA #$00 ; PLA
    let program = [0xA9, 0x42, 0x48, 0xA9, 0x00, 0x68];
    sys.load_program(0x8000, &program).unwrap();
    sys.reset();
    let sp_before = sys.cpu.sp;
    for _ in 0..4 {
        sys.step_instruction();
    }
    assert_eq!(sys.cpu.a, 0x42);
    assert_eq!(sys.cpu.sp, sp_before);
}

#[test]
fn absolute_x_page_cross_costs_extra_cycle() {
    // LDA $20FF,X with X=1 crosses from page $20 to $21.
    let mut sys = fresh(0x10000);
    sys.load_program(0x8000, &[0xA2, 0x01]).unwrap(); // LDX #$01
    sys.reset();
    sys.step_instruction();
    let cycles = run_one(&mut sys, &[0xBD, 0xFF, 0x20], 0x8002);
    assert_eq!(cycles, 5); // 4 base + 1 page-cross penalty

    let mut sys2 = fresh(0x10000);
    sys2.load_program(0x8000, &[0xA2, 0x01]).unwrap();
    sys2.reset();
    sys2.step_instruction();
    let cycles_same_page = run_one(&mut sys2, &[0xBD, 0x00, 0x20], 0x8002);
    assert_eq!(cycles_same_page, 4);
}

#[test]
fn branch_not_taken_costs_base_cycles() {
    // CLC ; BCS +5 (not taken: C=0)
    let mut sys = fresh(0x10000);
    sys.load_program(0x8000, &[0x18]).unwrap();
    sys.reset();
    sys.step_instruction();
    let cycles = run_one(&mut sys, &[0xB0, 0x05], 0x8001);
    assert_eq!(cycles, 2);
}

#[test]
fn branch_taken_same_page_costs_base_plus_one() {
    // SEC ; BCS +5 (taken, same page)
    let mut sys = fresh(0x10000);
    sys.load_program(0x8000, &[0x38]).unwrap();
    sys.reset();
    sys.step_instruction();
    let cycles = run_one(&mut sys, &[0xB0, 0x05], 0x8001);
    assert_eq!(cycles, 3);
}

#[test]
fn branch_taken_crossing_page_costs_base_plus_two() {
    // Placed so the branch target crosses into the next page.
    let mut sys = fresh(0x10000);
    sys.load_program(0x8000, &[0x38]).unwrap(); // SEC
    sys.reset();
    sys.step_instruction();
    // BCS at $80F0 with offset $10 -> target $8102, crosses page $80->$81.
    let cycles = run_one(&mut sys, &[0xB0, 0x10], 0x80F0);
    assert_eq!(cycles, 4);
}

#[test]
fn bcd_closure_adc() {
    // SED ; CLC ; LDA #$09 ; ADC #$01 -> BCD 10 ($10), nibbles < $0A and < $A0.
    let mut sys = fresh(0x10000);
    let program = [0xF8, 0x18, 0xA9, 0x09, 0x69, 0x01];
    sys.load_program(0x8000, &program).unwrap();
    sys.reset();
    for _ in 0..3 {
        sys.step_instruction();
    }
    let adc_cycles = sys.step_instruction();
    assert_eq!(sys.cpu.a, 0x10);
    assert!(sys.cpu.a & 0x0F < 0x0A);
    assert!(sys.cpu.a & 0xF0 < 0xA0);
    // Immediate ADC is 2 cycles binary; decimal mode costs one more.
    assert_eq!(adc_cycles, 3);
}

#[test]
fn bcd_adc_decimal_mode_costs_one_extra_cycle_vs_binary() {
    // CLC ; LDA #$09 ; ADC #$01 (binary mode)
    let mut sys_binary = fresh(0x10000);
    sys_binary
        .load_program(0x8000, &[0x18, 0xA9, 0x09, 0x69, 0x01])
        .unwrap();
    sys_binary.reset();
    sys_binary.step_instruction();
    sys_binary.step_instruction();
    let binary_cycles = sys_binary.step_instruction();

    // SED ; CLC ; LDA #$09 ; ADC #$01 (decimal mode)
    let mut sys_decimal = fresh(0x10000);
    sys_decimal
        .load_program(0x8000, &[0xF8, 0x18, 0xA9, 0x09, 0x69, 0x01])
        .unwrap();
    sys_decimal.reset();
    for _ in 0..3 {
        sys_decimal.step_instruction();
    }
    let decimal_cycles = sys_decimal.step_instruction();

    assert_eq!(binary_cycles, 2);
    assert_eq!(decimal_cycles, binary_cycles + 1);
}

#[test]
fn jmp_indirect_page_wrap_bug() {
    // Pointer at $30FF; high byte should be fetched from $3000, not $3100.
    let mut sys = fresh(0x10000);
    sys.load_program(0x8000, &[0x6C, 0xFF, 0x30]).unwrap(); // JMP ($30FF)
    sys.load_program(0x30FF, &[0x00]).unwrap(); // low byte of target
    sys.load_program(0x3000, &[0x12]).unwrap(); // high byte, read due to the wrap bug
    sys.load_program(0x3100, &[0xFF]).unwrap(); // would be used without the bug
    // load_program above each rewrote the reset vector; set it explicitly
    // for the actual entry point now that all images are placed.
    sys.load_program(0x8000, &[0x6C, 0xFF, 0x30]).unwrap();
    sys.reset();
    sys.step_instruction();
    assert_eq!(sys.cpu.pc, 0x1200);
}
