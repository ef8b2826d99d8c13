//! Error taxonomy for the core: construction failures, register-access
//! misuse, and loader failures. None of these are raised by the CPU while
//! executing a defined opcode; JAM/KIL is a terminal state observed via
//! `M6502::is_halted`, not an error.

use std::fmt;

/// Errors the core can report. Register accesses never return this type —
/// out-of-range addresses and invalid arguments there are absorbed
/// silently per the propagation policy (sentinel `$FF` for reads, no-op
/// for writes).
#[derive(Debug)]
pub enum CoreError {
    /// Memory could not be reserved for RAM or a framebuffer at construction.
    AllocationFailure(String),

    /// A caller-supplied argument was out of range (zero-sized memory,
    /// a register address past the device's span).
    InvalidArgument(String),

    /// A binary image could not be opened or was short-read.
    IoFailure(std::io::Error),

    /// A binary image would overflow the 64 KiB address space from the
    /// given start address.
    RangeExceeded { start: u32, len: usize },
}

impl fmt::Display for CoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AllocationFailure(reason) => write!(f, "allocation failure: {reason}"),
            Self::InvalidArgument(reason) => write!(f, "invalid argument: {reason}"),
            Self::IoFailure(e) => write!(f, "I/O failure: {e}"),
            Self::RangeExceeded { start, len } => write!(
                f,
                "image of {len} bytes at ${start:04X} exceeds the 64 KiB address space"
            ),
        }
    }
}

impl std::error::Error for CoreError {}

impl From<std::io::Error> for CoreError {
    fn from(e: std::io::Error) -> Self {
        Self::IoFailure(e)
    }
}
