use thiserror::Error;

/// Errors that can occur while loading or executing a program.
///
/// Every error is terminal for the current run; the machine performs no
/// retries or recovery.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MachineError {
    /// Fetched opcode has no entry in the instruction table.
    #[error("unsupported opcode 0x{opcode:02X} at address 0x{addr:02X}")]
    UnsupportedOpcode { opcode: u8, addr: u8 },
    /// Internal dispatch handed the ALU a non-ALU instruction.
    #[error("unsupported ALU operation: {mnemonic}")]
    UnsupportedAluOp { mnemonic: &'static str },
    /// Register operand exceeds the register file size.
    #[error("register index {index} out of bounds (register file holds {available})")]
    InvalidRegisterIndex { index: u8, available: usize },
    /// Program image does not fit in memory.
    #[error("program of {size} bytes exceeds memory capacity of {capacity}")]
    ProgramTooLarge { size: usize, capacity: usize },
    /// Source line is not an 8-bit binary literal.
    #[error("line {line}: invalid instruction byte `{text}`")]
    InvalidSourceLine { line: usize, text: String },
    /// File I/O error while reading a program.
    #[error("io error: {0}")]
    Io(String),
}
