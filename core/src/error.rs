use thiserror::Error;

/// Problems loading a ROM. These are fatal: nothing should run afterwards.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("ROM is {size} bytes but only {capacity} bytes of program memory are available")]
    RomTooLarge { size: usize, capacity: usize },

    #[error("could not read ROM: {0}")]
    Io(#[from] std::io::Error),
}

/// Problems executing a single instruction.
///
/// None of these stop the machine; the offending instruction is skipped and execution carries
/// on from the following one.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fault {
    #[error("unknown opcode {opcode:#06X} at {pc:#05X}")]
    UnknownOpcode { opcode: u16, pc: u16 },

    #[error("stack overflow calling from {pc:#05X}")]
    StackOverflow { pc: u16 },

    #[error("stack underflow returning from {pc:#05X}")]
    StackUnderflow { pc: u16 },
}
