pub mod core;
pub mod cpu;
pub mod device;
pub mod system;

pub mod prelude {
    pub use crate::core::{
        Bus, BusMaster, BusMasterComponent, Component, InputButton, Machine, bus::InterruptState,
    };
    pub use crate::cpu::Cpu;
    pub use crate::device::{Acia, Tia, TvSystem, Via};
    pub use crate::system::{CoreError, MonotonicClock, System};
}
