pub mod acia;
pub mod tia;
pub mod via;

pub use acia::Acia;
pub use tia::{Tia, TvSystem};
pub use via::{LcdMessage, Via};
