//! Undocumented ("illegal") opcodes required by the Lorenz conformance suite.
//!
//! Each handler is built from the same addressing-mode helpers used by the
//! documented instructions in `alu.rs`/`load_store.rs` — an illegal opcode is,
//! almost always, two documented operations fused onto one addressing mode
//! and one bus cycle count.

use super::M6502;
use crate::core::{Bus, BusMaster};

impl M6502 {
    // ---- SLO (ASL then ORA) ----

    pub(crate) fn op_slo_zp<B: Bus<Address = u16, Data = u8> + ?Sized>(
        &mut self,
        cycle: u8,
        bus: &mut B,
        master: BusMaster,
    ) {
        self.rmw_zp(cycle, bus, master, |cpu, val| {
            let r = cpu.perform_asl(val);
            cpu.perform_ora(r);
            r
        });
    }

    pub(crate) fn op_slo_zp_x<B: Bus<Address = u16, Data = u8> + ?Sized>(
        &mut self,
        cycle: u8,
        bus: &mut B,
        master: BusMaster,
    ) {
        self.rmw_zp_x(cycle, bus, master, |cpu, val| {
            let r = cpu.perform_asl(val);
            cpu.perform_ora(r);
            r
        });
    }

    pub(crate) fn op_slo_abs<B: Bus<Address = u16, Data = u8> + ?Sized>(
        &mut self,
        cycle: u8,
        bus: &mut B,
        master: BusMaster,
    ) {
        self.rmw_abs(cycle, bus, master, |cpu, val| {
            let r = cpu.perform_asl(val);
            cpu.perform_ora(r);
            r
        });
    }

    pub(crate) fn op_slo_abs_x<B: Bus<Address = u16, Data = u8> + ?Sized>(
        &mut self,
        cycle: u8,
        bus: &mut B,
        master: BusMaster,
    ) {
        self.rmw_abs_x(cycle, bus, master, |cpu, val| {
            let r = cpu.perform_asl(val);
            cpu.perform_ora(r);
            r
        });
    }

    pub(crate) fn op_slo_abs_y<B: Bus<Address = u16, Data = u8> + ?Sized>(
        &mut self,
        cycle: u8,
        bus: &mut B,
        master: BusMaster,
    ) {
        self.rmw_abs_y(cycle, bus, master, |cpu, val| {
            let r = cpu.perform_asl(val);
            cpu.perform_ora(r);
            r
        });
    }

    pub(crate) fn op_slo_ind_x<B: Bus<Address = u16, Data = u8> + ?Sized>(
        &mut self,
        cycle: u8,
        bus: &mut B,
        master: BusMaster,
    ) {
        self.rmw_ind_x(cycle, bus, master, |cpu, val| {
            let r = cpu.perform_asl(val);
            cpu.perform_ora(r);
            r
        });
    }

    pub(crate) fn op_slo_ind_y<B: Bus<Address = u16, Data = u8> + ?Sized>(
        &mut self,
        cycle: u8,
        bus: &mut B,
        master: BusMaster,
    ) {
        self.rmw_ind_y(cycle, bus, master, |cpu, val| {
            let r = cpu.perform_asl(val);
            cpu.perform_ora(r);
            r
        });
    }

    // ---- RLA (ROL then AND) ----

    pub(crate) fn op_rla_zp<B: Bus<Address = u16, Data = u8> + ?Sized>(
        &mut self,
        cycle: u8,
        bus: &mut B,
        master: BusMaster,
    ) {
        self.rmw_zp(cycle, bus, master, |cpu, val| {
            let r = cpu.perform_rol(val);
            cpu.perform_and(r);
            r
        });
    }

    pub(crate) fn op_rla_zp_x<B: Bus<Address = u16, Data = u8> + ?Sized>(
        &mut self,
        cycle: u8,
        bus: &mut B,
        master: BusMaster,
    ) {
        self.rmw_zp_x(cycle, bus, master, |cpu, val| {
            let r = cpu.perform_rol(val);
            cpu.perform_and(r);
            r
        });
    }

    pub(crate) fn op_rla_abs<B: Bus<Address = u16, Data = u8> + ?Sized>(
        &mut self,
        cycle: u8,
        bus: &mut B,
        master: BusMaster,
    ) {
        self.rmw_abs(cycle, bus, master, |cpu, val| {
            let r = cpu.perform_rol(val);
            cpu.perform_and(r);
            r
        });
    }

    pub(crate) fn op_rla_abs_x<B: Bus<Address = u16, Data = u8> + ?Sized>(
        &mut self,
        cycle: u8,
        bus: &mut B,
        master: BusMaster,
    ) {
        self.rmw_abs_x(cycle, bus, master, |cpu, val| {
            let r = cpu.perform_rol(val);
            cpu.perform_and(r);
            r
        });
    }

    pub(crate) fn op_rla_abs_y<B: Bus<Address = u16, Data = u8> + ?Sized>(
        &mut self,
        cycle: u8,
        bus: &mut B,
        master: BusMaster,
    ) {
        self.rmw_abs_y(cycle, bus, master, |cpu, val| {
            let r = cpu.perform_rol(val);
            cpu.perform_and(r);
            r
        });
    }

    pub(crate) fn op_rla_ind_x<B: Bus<Address = u16, Data = u8> + ?Sized>(
        &mut self,
        cycle: u8,
        bus: &mut B,
        master: BusMaster,
    ) {
        self.rmw_ind_x(cycle, bus, master, |cpu, val| {
            let r = cpu.perform_rol(val);
            cpu.perform_and(r);
            r
        });
    }

    pub(crate) fn op_rla_ind_y<B: Bus<Address = u16, Data = u8> + ?Sized>(
        &mut self,
        cycle: u8,
        bus: &mut B,
        master: BusMaster,
    ) {
        self.rmw_ind_y(cycle, bus, master, |cpu, val| {
            let r = cpu.perform_rol(val);
            cpu.perform_and(r);
            r
        });
    }

    // ---- SRE (LSR then EOR) ----

    pub(crate) fn op_sre_zp<B: Bus<Address = u16, Data = u8> + ?Sized>(
        &mut self,
        cycle: u8,
        bus: &mut B,
        master: BusMaster,
    ) {
        self.rmw_zp(cycle, bus, master, |cpu, val| {
            let r = cpu.perform_lsr(val);
            cpu.perform_eor(r);
            r
        });
    }

    pub(crate) fn op_sre_zp_x<B: Bus<Address = u16, Data = u8> + ?Sized>(
        &mut self,
        cycle: u8,
        bus: &mut B,
        master: BusMaster,
    ) {
        self.rmw_zp_x(cycle, bus, master, |cpu, val| {
            let r = cpu.perform_lsr(val);
            cpu.perform_eor(r);
            r
        });
    }

    pub(crate) fn op_sre_abs<B: Bus<Address = u16, Data = u8> + ?Sized>(
        &mut self,
        cycle: u8,
        bus: &mut B,
        master: BusMaster,
    ) {
        self.rmw_abs(cycle, bus, master, |cpu, val| {
            let r = cpu.perform_lsr(val);
            cpu.perform_eor(r);
            r
        });
    }

    pub(crate) fn op_sre_abs_x<B: Bus<Address = u16, Data = u8> + ?Sized>(
        &mut self,
        cycle: u8,
        bus: &mut B,
        master: BusMaster,
    ) {
        self.rmw_abs_x(cycle, bus, master, |cpu, val| {
            let r = cpu.perform_lsr(val);
            cpu.perform_eor(r);
            r
        });
    }

    pub(crate) fn op_sre_abs_y<B: Bus<Address = u16, Data = u8> + ?Sized>(
        &mut self,
        cycle: u8,
        bus: &mut B,
        master: BusMaster,
    ) {
        self.rmw_abs_y(cycle, bus, master, |cpu, val| {
            let r = cpu.perform_lsr(val);
            cpu.perform_eor(r);
            r
        });
    }

    pub(crate) fn op_sre_ind_x<B: Bus<Address = u16, Data = u8> + ?Sized>(
        &mut self,
        cycle: u8,
        bus: &mut B,
        master: BusMaster,
    ) {
        self.rmw_ind_x(cycle, bus, master, |cpu, val| {
            let r = cpu.perform_lsr(val);
            cpu.perform_eor(r);
            r
        });
    }

    pub(crate) fn op_sre_ind_y<B: Bus<Address = u16, Data = u8> + ?Sized>(
        &mut self,
        cycle: u8,
        bus: &mut B,
        master: BusMaster,
    ) {
        self.rmw_ind_y(cycle, bus, master, |cpu, val| {
            let r = cpu.perform_lsr(val);
            cpu.perform_eor(r);
            r
        });
    }

    // ---- RRA (ROR then ADC) ----

    pub(crate) fn op_rra_zp<B: Bus<Address = u16, Data = u8> + ?Sized>(
        &mut self,
        cycle: u8,
        bus: &mut B,
        master: BusMaster,
    ) {
        self.rmw_zp(cycle, bus, master, |cpu, val| {
            let r = cpu.perform_ror(val);
            cpu.perform_adc(r);
            r
        });
    }

    pub(crate) fn op_rra_zp_x<B: Bus<Address = u16, Data = u8> + ?Sized>(
        &mut self,
        cycle: u8,
        bus: &mut B,
        master: BusMaster,
    ) {
        self.rmw_zp_x(cycle, bus, master, |cpu, val| {
            let r = cpu.perform_ror(val);
            cpu.perform_adc(r);
            r
        });
    }

    pub(crate) fn op_rra_abs<B: Bus<Address = u16, Data = u8> + ?Sized>(
        &mut self,
        cycle: u8,
        bus: &mut B,
        master: BusMaster,
    ) {
        self.rmw_abs(cycle, bus, master, |cpu, val| {
            let r = cpu.perform_ror(val);
            cpu.perform_adc(r);
            r
        });
    }

    pub(crate) fn op_rra_abs_x<B: Bus<Address = u16, Data = u8> + ?Sized>(
        &mut self,
        cycle: u8,
        bus: &mut B,
        master: BusMaster,
    ) {
        self.rmw_abs_x(cycle, bus, master, |cpu, val| {
            let r = cpu.perform_ror(val);
            cpu.perform_adc(r);
            r
        });
    }

    pub(crate) fn op_rra_abs_y<B: Bus<Address = u16, Data = u8> + ?Sized>(
        &mut self,
        cycle: u8,
        bus: &mut B,
        master: BusMaster,
    ) {
        self.rmw_abs_y(cycle, bus, master, |cpu, val| {
            let r = cpu.perform_ror(val);
            cpu.perform_adc(r);
            r
        });
    }

    pub(crate) fn op_rra_ind_x<B: Bus<Address = u16, Data = u8> + ?Sized>(
        &mut self,
        cycle: u8,
        bus: &mut B,
        master: BusMaster,
    ) {
        self.rmw_ind_x(cycle, bus, master, |cpu, val| {
            let r = cpu.perform_ror(val);
            cpu.perform_adc(r);
            r
        });
    }

    pub(crate) fn op_rra_ind_y<B: Bus<Address = u16, Data = u8> + ?Sized>(
        &mut self,
        cycle: u8,
        bus: &mut B,
        master: BusMaster,
    ) {
        self.rmw_ind_y(cycle, bus, master, |cpu, val| {
            let r = cpu.perform_ror(val);
            cpu.perform_adc(r);
            r
        });
    }

    // ---- SAX (store A & X) ----

    pub(crate) fn op_sax_zp<B: Bus<Address = u16, Data = u8> + ?Sized>(
        &mut self,
        cycle: u8,
        bus: &mut B,
        master: BusMaster,
    ) {
        let data = self.a & self.x;
        self.store_zp(cycle, bus, master, data);
    }

    pub(crate) fn op_sax_zp_y<B: Bus<Address = u16, Data = u8> + ?Sized>(
        &mut self,
        cycle: u8,
        bus: &mut B,
        master: BusMaster,
    ) {
        let data = self.a & self.x;
        self.store_zp_y(cycle, bus, master, data);
    }

    pub(crate) fn op_sax_abs<B: Bus<Address = u16, Data = u8> + ?Sized>(
        &mut self,
        cycle: u8,
        bus: &mut B,
        master: BusMaster,
    ) {
        let data = self.a & self.x;
        self.store_abs(cycle, bus, master, data);
    }

    pub(crate) fn op_sax_ind_x<B: Bus<Address = u16, Data = u8> + ?Sized>(
        &mut self,
        cycle: u8,
        bus: &mut B,
        master: BusMaster,
    ) {
        let data = self.a & self.x;
        self.store_ind_x(cycle, bus, master, data);
    }

    // ---- LAX (load A and X with the same value) ----

    pub(crate) fn op_lax_zp<B: Bus<Address = u16, Data = u8> + ?Sized>(
        &mut self,
        cycle: u8,
        bus: &mut B,
        master: BusMaster,
    ) {
        self.alu_zp(cycle, bus, master, |cpu, op| {
            cpu.a = op;
            cpu.x = op;
            cpu.set_nz(op);
        });
    }

    pub(crate) fn op_lax_zp_y<B: Bus<Address = u16, Data = u8> + ?Sized>(
        &mut self,
        cycle: u8,
        bus: &mut B,
        master: BusMaster,
    ) {
        self.alu_zp_y(cycle, bus, master, |cpu, op| {
            cpu.a = op;
            cpu.x = op;
            cpu.set_nz(op);
        });
    }

    pub(crate) fn op_lax_abs<B: Bus<Address = u16, Data = u8> + ?Sized>(
        &mut self,
        cycle: u8,
        bus: &mut B,
        master: BusMaster,
    ) {
        self.alu_abs(cycle, bus, master, |cpu, op| {
            cpu.a = op;
            cpu.x = op;
            cpu.set_nz(op);
        });
    }

    pub(crate) fn op_lax_abs_y<B: Bus<Address = u16, Data = u8> + ?Sized>(
        &mut self,
        cycle: u8,
        bus: &mut B,
        master: BusMaster,
    ) {
        self.alu_abs_y(cycle, bus, master, |cpu, op| {
            cpu.a = op;
            cpu.x = op;
            cpu.set_nz(op);
        });
    }

    pub(crate) fn op_lax_ind_x<B: Bus<Address = u16, Data = u8> + ?Sized>(
        &mut self,
        cycle: u8,
        bus: &mut B,
        master: BusMaster,
    ) {
        self.alu_ind_x(cycle, bus, master, |cpu, op| {
            cpu.a = op;
            cpu.x = op;
            cpu.set_nz(op);
        });
    }

    pub(crate) fn op_lax_ind_y<B: Bus<Address = u16, Data = u8> + ?Sized>(
        &mut self,
        cycle: u8,
        bus: &mut B,
        master: BusMaster,
    ) {
        self.alu_ind_y(cycle, bus, master, |cpu, op| {
            cpu.a = op;
            cpu.x = op;
            cpu.set_nz(op);
        });
    }

    // ---- DCP (DEC then CMP) ----

    pub(crate) fn op_dcp_zp<B: Bus<Address = u16, Data = u8> + ?Sized>(
        &mut self,
        cycle: u8,
        bus: &mut B,
        master: BusMaster,
    ) {
        self.rmw_zp(cycle, bus, master, |cpu, val| {
            let r = val.wrapping_sub(1);
            let a = cpu.a;
            cpu.perform_compare(a, r);
            r
        });
    }

    pub(crate) fn op_dcp_zp_x<B: Bus<Address = u16, Data = u8> + ?Sized>(
        &mut self,
        cycle: u8,
        bus: &mut B,
        master: BusMaster,
    ) {
        self.rmw_zp_x(cycle, bus, master, |cpu, val| {
            let r = val.wrapping_sub(1);
            let a = cpu.a;
            cpu.perform_compare(a, r);
            r
        });
    }

    pub(crate) fn op_dcp_abs<B: Bus<Address = u16, Data = u8> + ?Sized>(
        &mut self,
        cycle: u8,
        bus: &mut B,
        master: BusMaster,
    ) {
        self.rmw_abs(cycle, bus, master, |cpu, val| {
            let r = val.wrapping_sub(1);
            let a = cpu.a;
            cpu.perform_compare(a, r);
            r
        });
    }

    pub(crate) fn op_dcp_abs_x<B: Bus<Address = u16, Data = u8> + ?Sized>(
        &mut self,
        cycle: u8,
        bus: &mut B,
        master: BusMaster,
    ) {
        self.rmw_abs_x(cycle, bus, master, |cpu, val| {
            let r = val.wrapping_sub(1);
            let a = cpu.a;
            cpu.perform_compare(a, r);
            r
        });
    }

    pub(crate) fn op_dcp_abs_y<B: Bus<Address = u16, Data = u8> + ?Sized>(
        &mut self,
        cycle: u8,
        bus: &mut B,
        master: BusMaster,
    ) {
        self.rmw_abs_y(cycle, bus, master, |cpu, val| {
            let r = val.wrapping_sub(1);
            let a = cpu.a;
            cpu.perform_compare(a, r);
            r
        });
    }

    pub(crate) fn op_dcp_ind_x<B: Bus<Address = u16, Data = u8> + ?Sized>(
        &mut self,
        cycle: u8,
        bus: &mut B,
        master: BusMaster,
    ) {
        self.rmw_ind_x(cycle, bus, master, |cpu, val| {
            let r = val.wrapping_sub(1);
            let a = cpu.a;
            cpu.perform_compare(a, r);
            r
        });
    }

    pub(crate) fn op_dcp_ind_y<B: Bus<Address = u16, Data = u8> + ?Sized>(
        &mut self,
        cycle: u8,
        bus: &mut B,
        master: BusMaster,
    ) {
        self.rmw_ind_y(cycle, bus, master, |cpu, val| {
            let r = val.wrapping_sub(1);
            let a = cpu.a;
            cpu.perform_compare(a, r);
            r
        });
    }

    // ---- ISC / ISB (INC then SBC) ----

    pub(crate) fn op_isc_zp<B: Bus<Address = u16, Data = u8> + ?Sized>(
        &mut self,
        cycle: u8,
        bus: &mut B,
        master: BusMaster,
    ) {
        self.rmw_zp(cycle, bus, master, |cpu, val| {
            let r = val.wrapping_add(1);
            cpu.perform_sbc(r);
            r
        });
    }

    pub(crate) fn op_isc_zp_x<B: Bus<Address = u16, Data = u8> + ?Sized>(
        &mut self,
        cycle: u8,
        bus: &mut B,
        master: BusMaster,
    ) {
        self.rmw_zp_x(cycle, bus, master, |cpu, val| {
            let r = val.wrapping_add(1);
            cpu.perform_sbc(r);
            r
        });
    }

    pub(crate) fn op_isc_abs<B: Bus<Address = u16, Data = u8> + ?Sized>(
        &mut self,
        cycle: u8,
        bus: &mut B,
        master: BusMaster,
    ) {
        self.rmw_abs(cycle, bus, master, |cpu, val| {
            let r = val.wrapping_add(1);
            cpu.perform_sbc(r);
            r
        });
    }

    pub(crate) fn op_isc_abs_x<B: Bus<Address = u16, Data = u8> + ?Sized>(
        &mut self,
        cycle: u8,
        bus: &mut B,
        master: BusMaster,
    ) {
        self.rmw_abs_x(cycle, bus, master, |cpu, val| {
            let r = val.wrapping_add(1);
            cpu.perform_sbc(r);
            r
        });
    }

    pub(crate) fn op_isc_abs_y<B: Bus<Address = u16, Data = u8> + ?Sized>(
        &mut self,
        cycle: u8,
        bus: &mut B,
        master: BusMaster,
    ) {
        self.rmw_abs_y(cycle, bus, master, |cpu, val| {
            let r = val.wrapping_add(1);
            cpu.perform_sbc(r);
            r
        });
    }

    pub(crate) fn op_isc_ind_x<B: Bus<Address = u16, Data = u8> + ?Sized>(
        &mut self,
        cycle: u8,
        bus: &mut B,
        master: BusMaster,
    ) {
        self.rmw_ind_x(cycle, bus, master, |cpu, val| {
            let r = val.wrapping_add(1);
            cpu.perform_sbc(r);
            r
        });
    }

    pub(crate) fn op_isc_ind_y<B: Bus<Address = u16, Data = u8> + ?Sized>(
        &mut self,
        cycle: u8,
        bus: &mut B,
        master: BusMaster,
    ) {
        self.rmw_ind_y(cycle, bus, master, |cpu, val| {
            let r = val.wrapping_add(1);
            cpu.perform_sbc(r);
            r
        });
    }

    // ---- Immediate-mode unstable/combined opcodes ----

    /// ANC: AND immediate, then copy N into C (used by the Lorenz suite as an
    /// AND/ASL fusion check — bit 7 of the result reaches both N and C).
    pub(crate) fn op_anc<B: Bus<Address = u16, Data = u8> + ?Sized>(
        &mut self,
        cycle: u8,
        bus: &mut B,
        master: BusMaster,
    ) {
        self.alu_imm(cycle, bus, master, |cpu, op| {
            cpu.perform_and(op);
            let n = cpu.a & 0x80 != 0;
            cpu.set_flag(super::StatusFlag::C, n);
        });
    }

    /// ALR / ASR: AND immediate, then LSR the accumulator.
    pub(crate) fn op_alr<B: Bus<Address = u16, Data = u8> + ?Sized>(
        &mut self,
        cycle: u8,
        bus: &mut B,
        master: BusMaster,
    ) {
        self.alu_imm(cycle, bus, master, |cpu, op| {
            cpu.perform_and(op);
            let a = cpu.a;
            cpu.a = cpu.perform_lsr(a);
        });
    }

    /// ARR: AND immediate, then ROR the accumulator, with C/V derived from
    /// bits 6 and 5 of the rotated result (the commonly cited Lorenz formula).
    pub(crate) fn op_arr<B: Bus<Address = u16, Data = u8> + ?Sized>(
        &mut self,
        cycle: u8,
        bus: &mut B,
        master: BusMaster,
    ) {
        self.alu_imm(cycle, bus, master, |cpu, op| {
            let old_carry = cpu.p & (super::StatusFlag::C as u8) != 0;
            let and_result = cpu.a & op;
            let rotated = (and_result >> 1) | ((old_carry as u8) << 7);
            cpu.a = rotated;
            cpu.set_nz(rotated);
            let bit6 = rotated & 0x40 != 0;
            let bit5 = rotated & 0x20 != 0;
            cpu.set_flag(super::StatusFlag::C, bit6);
            cpu.set_flag(super::StatusFlag::V, bit6 ^ bit5);
        });
    }

    /// ANE / XAA: highly unstable; follows the commonly cited magic-constant
    /// formula `A = (A | MAGIC) & X & imm` used by the Lorenz acceptance ROMs.
    pub(crate) fn op_ane<B: Bus<Address = u16, Data = u8> + ?Sized>(
        &mut self,
        cycle: u8,
        bus: &mut B,
        master: BusMaster,
    ) {
        const MAGIC: u8 = 0xEE;
        self.alu_imm(cycle, bus, master, |cpu, op| {
            cpu.a = (cpu.a | MAGIC) & cpu.x & op;
            cpu.set_nz(cpu.a);
        });
    }

    /// LXA / LAX immediate: unstable; `A = X = (A | MAGIC) & imm`.
    pub(crate) fn op_lxa<B: Bus<Address = u16, Data = u8> + ?Sized>(
        &mut self,
        cycle: u8,
        bus: &mut B,
        master: BusMaster,
    ) {
        const MAGIC: u8 = 0xEE;
        self.alu_imm(cycle, bus, master, |cpu, op| {
            let r = (cpu.a | MAGIC) & op;
            cpu.a = r;
            cpu.x = r;
            cpu.set_nz(r);
        });
    }

    /// SBX / AXS: `X = (A & X) - imm`, flags set like CMP (no decimal mode).
    pub(crate) fn op_sbx<B: Bus<Address = u16, Data = u8> + ?Sized>(
        &mut self,
        cycle: u8,
        bus: &mut B,
        master: BusMaster,
    ) {
        self.alu_imm(cycle, bus, master, |cpu, op| {
            let base = cpu.a & cpu.x;
            cpu.set_flag(super::StatusFlag::C, base >= op);
            let r = base.wrapping_sub(op);
            cpu.x = r;
            cpu.set_nz(r);
        });
    }

    /// LAS / LAR: `A = X = SP = M & SP`.
    pub(crate) fn op_las<B: Bus<Address = u16, Data = u8> + ?Sized>(
        &mut self,
        cycle: u8,
        bus: &mut B,
        master: BusMaster,
    ) {
        self.alu_abs_y(cycle, bus, master, |cpu, op| {
            let r = op & cpu.sp;
            cpu.a = r;
            cpu.x = r;
            cpu.sp = r;
            cpu.set_nz(r);
        });
    }

    // ---- Address-high-byte-unstable store family (SHA/SHX/SHY/TAS) ----
    //
    // These store `reg & (addr_hi + 1)`; on real silicon the result further
    // depends on whether the indexed address crossed a page, which this core
    // does not reproduce (see Non-goals). Always takes the non-page-cross-
    // shortcutting store-mode cycle count.

    pub(crate) fn op_sha_abs_y<B: Bus<Address = u16, Data = u8> + ?Sized>(
        &mut self,
        cycle: u8,
        bus: &mut B,
        master: BusMaster,
    ) {
        match cycle {
            0 => {
                self.temp_addr = bus.read(master, self.pc) as u16;
                self.pc = self.pc.wrapping_add(1);
                self.state = super::ExecState::Execute(self.opcode, 1);
            }
            1 => {
                let hi = bus.read(master, self.pc) as u16;
                self.pc = self.pc.wrapping_add(1);
                self.temp_addr = (hi << 8 | self.temp_addr).wrapping_add(self.y as u16);
                self.state = super::ExecState::Execute(self.opcode, 2);
            }
            2 => {
                self.state = super::ExecState::Execute(self.opcode, 3);
            }
            3 => {
                let hi_plus_1 = ((self.temp_addr >> 8) as u8).wrapping_add(1);
                let data = self.a & self.x & hi_plus_1;
                bus.write(master, self.temp_addr, data);
                self.state = super::ExecState::Fetch;
            }
            _ => self.state = super::ExecState::Fetch,
        }
    }

    pub(crate) fn op_sha_ind_y<B: Bus<Address = u16, Data = u8> + ?Sized>(
        &mut self,
        cycle: u8,
        bus: &mut B,
        master: BusMaster,
    ) {
        match cycle {
            0 => {
                self.temp_data = bus.read(master, self.pc);
                self.pc = self.pc.wrapping_add(1);
                self.state = super::ExecState::Execute(self.opcode, 1);
            }
            1 => {
                self.temp_addr = bus.read(master, self.temp_data as u16) as u16;
                self.state = super::ExecState::Execute(self.opcode, 2);
            }
            2 => {
                let hi = bus.read(master, self.temp_data.wrapping_add(1) as u16) as u16;
                self.temp_addr = (hi << 8 | self.temp_addr).wrapping_add(self.y as u16);
                self.state = super::ExecState::Execute(self.opcode, 3);
            }
            3 => {
                self.state = super::ExecState::Execute(self.opcode, 4);
            }
            4 => {
                let hi_plus_1 = ((self.temp_addr >> 8) as u8).wrapping_add(1);
                let data = self.a & self.x & hi_plus_1;
                bus.write(master, self.temp_addr, data);
                self.state = super::ExecState::Fetch;
            }
            _ => self.state = super::ExecState::Fetch,
        }
    }

    pub(crate) fn op_shx_abs_y<B: Bus<Address = u16, Data = u8> + ?Sized>(
        &mut self,
        cycle: u8,
        bus: &mut B,
        master: BusMaster,
    ) {
        match cycle {
            0 => {
                self.temp_addr = bus.read(master, self.pc) as u16;
                self.pc = self.pc.wrapping_add(1);
                self.state = super::ExecState::Execute(self.opcode, 1);
            }
            1 => {
                let hi = bus.read(master, self.pc) as u16;
                self.pc = self.pc.wrapping_add(1);
                self.temp_addr = (hi << 8 | self.temp_addr).wrapping_add(self.y as u16);
                self.state = super::ExecState::Execute(self.opcode, 2);
            }
            2 => {
                self.state = super::ExecState::Execute(self.opcode, 3);
            }
            3 => {
                let hi_plus_1 = ((self.temp_addr >> 8) as u8).wrapping_add(1);
                let data = self.x & hi_plus_1;
                bus.write(master, self.temp_addr, data);
                self.state = super::ExecState::Fetch;
            }
            _ => self.state = super::ExecState::Fetch,
        }
    }

    pub(crate) fn op_shy_abs_x<B: Bus<Address = u16, Data = u8> + ?Sized>(
        &mut self,
        cycle: u8,
        bus: &mut B,
        master: BusMaster,
    ) {
        match cycle {
            0 => {
                self.temp_addr = bus.read(master, self.pc) as u16;
                self.pc = self.pc.wrapping_add(1);
                self.state = super::ExecState::Execute(self.opcode, 1);
            }
            1 => {
                let hi = bus.read(master, self.pc) as u16;
                self.pc = self.pc.wrapping_add(1);
                self.temp_addr = (hi << 8 | self.temp_addr).wrapping_add(self.x as u16);
                self.state = super::ExecState::Execute(self.opcode, 2);
            }
            2 => {
                self.state = super::ExecState::Execute(self.opcode, 3);
            }
            3 => {
                let hi_plus_1 = ((self.temp_addr >> 8) as u8).wrapping_add(1);
                let data = self.y & hi_plus_1;
                bus.write(master, self.temp_addr, data);
                self.state = super::ExecState::Fetch;
            }
            _ => self.state = super::ExecState::Fetch,
        }
    }

    /// TAS / SHS: `SP = A & X`; store `SP & (addr_hi + 1)`.
    pub(crate) fn op_tas_abs_y<B: Bus<Address = u16, Data = u8> + ?Sized>(
        &mut self,
        cycle: u8,
        bus: &mut B,
        master: BusMaster,
    ) {
        match cycle {
            0 => {
                self.temp_addr = bus.read(master, self.pc) as u16;
                self.pc = self.pc.wrapping_add(1);
                self.state = super::ExecState::Execute(self.opcode, 1);
            }
            1 => {
                let hi = bus.read(master, self.pc) as u16;
                self.pc = self.pc.wrapping_add(1);
                self.temp_addr = (hi << 8 | self.temp_addr).wrapping_add(self.y as u16);
                self.state = super::ExecState::Execute(self.opcode, 2);
            }
            2 => {
                self.state = super::ExecState::Execute(self.opcode, 3);
            }
            3 => {
                self.sp = self.a & self.x;
                let hi_plus_1 = ((self.temp_addr >> 8) as u8).wrapping_add(1);
                let data = self.sp & hi_plus_1;
                bus.write(master, self.temp_addr, data);
                self.state = super::ExecState::Fetch;
            }
            _ => self.state = super::ExecState::Fetch,
        }
    }

    // ---- Illegal NOPs ----

    /// Implied 1-byte NOP (0x1A/0x3A/0x5A/0x7A/0xDA/0xFA): 2 cycles, no effect.
    pub(crate) fn op_nop_implied(&mut self, cycle: u8) {
        if cycle == 0 {
            self.state = super::ExecState::Fetch;
        }
    }

    /// Immediate NOP (reads and discards one operand byte): 2 cycles.
    pub(crate) fn op_nop_imm<B: Bus<Address = u16, Data = u8> + ?Sized>(
        &mut self,
        cycle: u8,
        bus: &mut B,
        master: BusMaster,
    ) {
        self.alu_imm(cycle, bus, master, |_, _| {});
    }

    /// Zero-page NOP: reads and discards the operand. 3 cycles.
    pub(crate) fn op_nop_zp<B: Bus<Address = u16, Data = u8> + ?Sized>(
        &mut self,
        cycle: u8,
        bus: &mut B,
        master: BusMaster,
    ) {
        self.alu_zp(cycle, bus, master, |_, _| {});
    }

    /// Zero-page,X NOP: reads and discards the operand. 4 cycles.
    pub(crate) fn op_nop_zp_x<B: Bus<Address = u16, Data = u8> + ?Sized>(
        &mut self,
        cycle: u8,
        bus: &mut B,
        master: BusMaster,
    ) {
        self.alu_zp_x(cycle, bus, master, |_, _| {});
    }

    /// Absolute NOP: reads and discards the operand. 4 cycles.
    pub(crate) fn op_nop_abs<B: Bus<Address = u16, Data = u8> + ?Sized>(
        &mut self,
        cycle: u8,
        bus: &mut B,
        master: BusMaster,
    ) {
        self.alu_abs(cycle, bus, master, |_, _| {});
    }

    /// Absolute,X NOP: reads and discards the operand. 4 or 5 cycles.
    pub(crate) fn op_nop_abs_x<B: Bus<Address = u16, Data = u8> + ?Sized>(
        &mut self,
        cycle: u8,
        bus: &mut B,
        master: BusMaster,
    ) {
        self.alu_abs_x(cycle, bus, master, |_, _| {});
    }

    /// JAM / KIL / HLT: freezes the CPU. Subsequent steps return 0 cycles
    /// without advancing PC.
    pub(crate) fn op_jam(&mut self) {
        self.halted = true;
        self.state = super::ExecState::Fetch;
    }
}
