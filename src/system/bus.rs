//! The address-decoded system bus: owns RAM and the optional ACIA/VIA/TIA
//! peripherals, and is itself the `Bus` implementation the CPU drives.
//!
//! Decoding order on both read and write (first match wins): TIA
//! `$0000-$003F` (mirrored by `&$3F`), ACIA `$D000-$D00F`, VIA
//! `$6000-$600F`, then RAM, then the `$FF`/no-op sentinel. A small
//! registry of opt-in console hooks is checked ahead of the ladder so
//! legacy "print this byte" addresses need not be hard-coded into the
//! decoder itself.

use super::clock::ClockPacer;
use super::error::CoreError;
use super::loader;
use crate::core::{Bus, BusMaster, BusMasterComponent, Machine, bus::InterruptState};
use crate::cpu::{Cpu, m6502::M6502};
use crate::device::{Acia, Tia, Via};

const TIA_TOP: u16 = 0x003F;
const ACIA_BASE: u16 = 0xD000;
const ACIA_TOP: u16 = 0xD00F;
const VIA_BASE: u16 = 0x6000;
const VIA_TOP: u16 = 0x600F;

/// How many TIA color clocks to step per CPU cycle. The core models only
/// the 3:1 NTSC ratio; PAL systems use the same ratio on real hardware
/// despite the different scanline count.
const TIA_CYCLES_PER_CPU_CYCLE: u32 = 3;

/// The wired-together MOS 6502 system: CPU, RAM, and optional peripherals.
pub struct System {
    pub cpu: M6502,
    ram: Vec<u8>,
    pub tia: Option<Tia>,
    pub acia: Option<Acia>,
    pub via: Option<Via>,
    console_hooks: Vec<(u16, Box<dyn FnMut(u8)>)>,
    serial_output: Vec<u8>,
    pacer: Option<ClockPacer>,
}

impl System {
    /// Build a system with `ram_size` bytes of RAM (up to 64 KiB) and the
    /// given peripheral set. Peripherals are created by the caller and
    /// handed to the bus here; `None` means the device is not attached
    /// and its address range falls through to RAM.
    pub fn new(
        ram_size: usize,
        tia: Option<Tia>,
        acia: Option<Acia>,
        via: Option<Via>,
    ) -> Result<Self, CoreError> {
        if ram_size == 0 || ram_size > 0x1_0000 {
            return Err(CoreError::InvalidArgument(format!(
                "ram_size {ram_size} must be in 1..=65536"
            )));
        }
        Ok(Self {
            cpu: M6502::new(),
            ram: vec![0; ram_size],
            tia,
            acia,
            via,
            console_hooks: Vec::new(),
            serial_output: Vec::new(),
            pacer: None,
        })
    }

    /// Enable wall-clock pacing at `frequency_hz`. Without a pacer the
    /// stepper runs as fast as possible.
    pub fn enable_pacing(&mut self, frequency_hz: u64) {
        self.pacer = Some(ClockPacer::new(frequency_hz));
    }

    pub fn disable_pacing(&mut self) {
        self.pacer = None;
    }

    /// Register a write-side hook for a single address, invoked with the
    /// written byte instead of (not in addition to) the normal decode
    /// ladder. Used for legacy "print this byte" console addresses.
    pub fn add_console_hook(&mut self, addr: u16, handler: impl FnMut(u8) + 'static) {
        self.console_hooks.push((addr, Box::new(handler)));
    }

    /// Copy `image` into RAM starting at `start` and point the reset
    /// vector at it. Does not itself reset the CPU; call `reset()`
    /// afterward to pick up the new vector.
    pub fn load_program(&mut self, start: u16, image: &[u8]) -> Result<(), CoreError> {
        loader::load_program(start, image, |addr, byte| self.decode_write(addr, byte))?;
        self.decode_write(0xFFFC, (start & 0xFF) as u8);
        self.decode_write(0xFFFD, (start >> 8) as u8);
        Ok(())
    }

    /// Re-read the reset vector and reinitialize CPU registers.
    pub fn reset(&mut self) {
        let bus_ptr: *mut Self = self;
        unsafe {
            let bus = &mut *bus_ptr as &mut dyn Bus<Address = u16, Data = u8>;
            self.cpu.reset(bus);
        }
    }

    /// Feed bytes into the ACIA's RX ring, as if received over the wire.
    pub fn provide_serial_input(&mut self, bytes: &[u8]) {
        if let Some(acia) = &mut self.acia {
            acia.provide_input(bytes);
        }
    }

    /// Drain bytes the ACIA has transmitted since the last call.
    pub fn take_serial_output(&mut self) -> Vec<u8> {
        std::mem::take(&mut self.serial_output)
    }

    fn decode_read(&mut self, addr: u16) -> u8 {
        if let Some(tia) = &mut self.tia
            && addr <= TIA_TOP
        {
            return tia.read(addr);
        }
        if let Some(acia) = &mut self.acia
            && (ACIA_BASE..=ACIA_TOP).contains(&addr)
        {
            return acia.read((addr - ACIA_BASE) as u8);
        }
        if let Some(via) = &mut self.via
            && (VIA_BASE..=VIA_TOP).contains(&addr)
        {
            return via.read((addr - VIA_BASE) as u8);
        }
        if (addr as usize) < self.ram.len() {
            return self.ram[addr as usize];
        }
        0xFF
    }

    fn decode_write(&mut self, addr: u16, data: u8) {
        for (hook_addr, handler) in self.console_hooks.iter_mut() {
            if *hook_addr == addr {
                handler(data);
                return;
            }
        }
        if let Some(tia) = &mut self.tia
            && addr <= TIA_TOP
        {
            tia.write(addr, data);
            return;
        }
        if let Some(acia) = &mut self.acia
            && (ACIA_BASE..=ACIA_TOP).contains(&addr)
        {
            acia.write((addr - ACIA_BASE) as u8, data);
            return;
        }
        if let Some(via) = &mut self.via
            && (VIA_BASE..=VIA_TOP).contains(&addr)
        {
            via.write((addr - VIA_BASE) as u8, data);
            if let Some(byte) = via.take_serial_out() {
                self.serial_output.push(byte);
            }
            return;
        }
        if (addr as usize) < self.ram.len() {
            self.ram[addr as usize] = data;
        }
    }

    /// Advance one CPU cycle, then tick peripherals at the NTSC ratio
    /// (3 TIA color clocks, 1 VIA timer tick) and poll the ACIA's
    /// transmitter. Returns true at an instruction boundary.
    pub fn tick(&mut self) -> bool {
        let bus_ptr: *mut Self = self;
        let boundary = unsafe {
            let bus = &mut *bus_ptr as &mut dyn Bus<Address = u16, Data = u8>;
            self.cpu.tick_with_bus(bus, BusMaster::Cpu(0))
        };

        if let Some(tia) = &mut self.tia {
            for _ in 0..TIA_CYCLES_PER_CPU_CYCLE {
                tia.tia_step();
            }
        }
        if let Some(via) = &mut self.via {
            let sink = &mut self.serial_output;
            via.tick(&mut |b| sink.push(b));
        }
        if let Some(acia) = &mut self.acia {
            let sink = &mut self.serial_output;
            acia.process_tx(&mut |b| sink.push(b));
        }

        if let Some(pacer) = &mut self.pacer {
            pacer.wait_next_cycle();
        }

        boundary
    }

    /// Run cycles until an instruction boundary is reached. Returns the
    /// number of cycles the instruction consumed.
    pub fn step_instruction(&mut self) -> u64 {
        let start = self.cpu.cycle_count();
        loop {
            if self.tick() {
                break;
            }
        }
        self.cpu.cycle_count() - start
    }

    /// Step instructions until the program counter stops changing across a
    /// step (a deliberate `JMP *` trap), or `max_instructions` is reached.
    /// Returns the stable program counter.
    pub fn run_until_stable_pc(&mut self, max_instructions: u64) -> u16 {
        let mut last_pc = self.cpu.pc;
        for _ in 0..max_instructions {
            self.step_instruction();
            if self.cpu.pc == last_pc {
                return last_pc;
            }
            last_pc = self.cpu.pc;
        }
        last_pc
    }
}

impl Bus for System {
    type Address = u16;
    type Data = u8;

    fn read(&mut self, _master: BusMaster, addr: u16) -> u8 {
        self.decode_read(addr)
    }

    fn write(&mut self, _master: BusMaster, addr: u16, data: u8) {
        self.decode_write(addr, data);
    }

    fn is_halted_for(&self, _master: BusMaster) -> bool {
        false
    }

    fn check_interrupts(&self, _target: BusMaster) -> InterruptState {
        InterruptState {
            nmi: false,
            irq: self.via.as_ref().is_some_and(Via::irq_pending),
            firq: false,
        }
    }
}

/// Thin adapter exposing the system to a machine-agnostic frontend. Input
/// buttons are not modeled (the TIA register set implemented here has no
/// joystick/paddle ports); a frontend wanting controller input would attach
/// it via a console hook or a future VIA port-B wiring instead.
impl Machine for System {
    fn display_size(&self) -> (u32, u32) {
        match &self.tia {
            Some(tia) => (tia.width() as u32, tia.height() as u32),
            None => (0, 0),
        }
    }

    fn run_frame(&mut self) {
        if self.tia.is_none() {
            return;
        }
        loop {
            self.step_instruction();
            let done = self.tia.as_mut().is_some_and(Tia::take_frame_done);
            if done {
                break;
            }
        }
    }

    fn render_frame(&self, buffer: &mut [u8]) {
        let Some(tia) = &self.tia else { return };
        for (pixel, &rgba) in buffer.chunks_exact_mut(3).zip(tia.framebuffer()) {
            pixel[0] = (rgba >> 24) as u8;
            pixel[1] = (rgba >> 16) as u8;
            pixel[2] = (rgba >> 8) as u8;
        }
    }

    fn set_input(&mut self, _button: u8, _pressed: bool) {}

    fn input_map(&self) -> &[crate::core::InputButton] {
        &[]
    }

    fn reset(&mut self) {
        System::reset(self);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_outside_ram_return_ff() {
        let mut sys = System::new(0x1000, None, None, None).unwrap();
        assert_eq!(sys.decode_read(0x2000), 0xFF);
    }

    #[test]
    fn writes_outside_ram_are_ignored() {
        let mut sys = System::new(0x1000, None, None, None).unwrap();
        sys.decode_write(0x2000, 0x42);
        assert_eq!(sys.decode_read(0x2000), 0xFF);
    }

    #[test]
    fn tia_claims_low_range_over_ram() {
        let mut sys = System::new(0x10000, Some(Tia::new(crate::device::TvSystem::Ntsc)), None, None)
            .unwrap();
        sys.decode_write(0x09, 0x44); // COLUBK
        assert_eq!(sys.decode_read(0x09), 0x44);
    }

    #[test]
    fn load_program_sets_reset_vector() {
        let mut sys = System::new(0x10000, None, None, None).unwrap();
        sys.load_program(0x8000, &[0xEA, 0xEA]).unwrap();
        assert_eq!(sys.decode_read(0xFFFC), 0x00);
        assert_eq!(sys.decode_read(0xFFFD), 0x80);
    }

    #[test]
    fn console_hook_bypasses_ram() {
        let mut sys = System::new(0x10000, None, None, None).unwrap();
        let seen = std::rc::Rc::new(std::cell::RefCell::new(Vec::new()));
        let seen_clone = seen.clone();
        sys.add_console_hook(0x9000, move |b| seen_clone.borrow_mut().push(b));
        sys.decode_write(0x9000, b'!');
        assert_eq!(*seen.borrow(), vec![b'!']);
        assert_eq!(sys.decode_read(0x9000), 0); // never reached RAM
    }

    #[test]
    fn run_until_stable_pc_detects_jmp_trap() {
        let mut sys = System::new(0x10000, None, None, None).unwrap();
        // JMP $8000 (infinite trap)
        sys.load_program(0x8000, &[0x4C, 0x00, 0x80]).unwrap();
        sys.reset();
        let pc = sys.run_until_stable_pc(100);
        assert_eq!(pc, 0x8000);
    }
}
