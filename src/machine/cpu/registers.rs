use crate::machine::errors::MachineError;

/// Number of general-purpose registers.
pub const REGISTER_COUNT: usize = 8;

/// Index of the stack pointer register.
pub const SP: u8 = 7;

/// Initial stack pointer value; the stack grows downward from here.
pub const SP_INIT: u8 = 0xF4;

/// Register file holding the machine's 8-bit registers.
///
/// `r7` is reserved as the stack pointer. Access is bounds-checked: a
/// register operand outside the file is a reported error, never a silent
/// truncation.
pub(super) struct Registers {
    regs: [u8; REGISTER_COUNT],
}

impl Registers {
    /// Creates a register file with all registers zeroed except the stack
    /// pointer, which starts at [`SP_INIT`].
    pub(super) fn new() -> Self {
        let mut regs = [0; REGISTER_COUNT];
        regs[SP as usize] = SP_INIT;
        Self { regs }
    }

    /// Returns the value in register `idx`.
    ///
    /// Returns [`MachineError::InvalidRegisterIndex`] if `idx` is out of bounds.
    pub(super) fn get(&self, idx: u8) -> Result<u8, MachineError> {
        self.regs
            .get(idx as usize)
            .copied()
            .ok_or(MachineError::InvalidRegisterIndex {
                index: idx,
                available: REGISTER_COUNT,
            })
    }

    /// Stores a value into register `idx`.
    ///
    /// Returns [`MachineError::InvalidRegisterIndex`] if `idx` is out of bounds.
    pub(super) fn set(&mut self, idx: u8, value: u8) -> Result<(), MachineError> {
        let slot = self
            .regs
            .get_mut(idx as usize)
            .ok_or(MachineError::InvalidRegisterIndex {
                index: idx,
                available: REGISTER_COUNT,
            })?;
        *slot = value;
        Ok(())
    }

    /// Returns the stack pointer.
    pub(super) fn sp(&self) -> u8 {
        self.regs[SP as usize]
    }

    /// Overwrites the stack pointer.
    pub(super) fn set_sp(&mut self, value: u8) {
        self.regs[SP as usize] = value;
    }

    /// Iterates over all register values in index order.
    pub(super) fn iter(&self) -> impl Iterator<Item = u8> + '_ {
        self.regs.iter().copied()
    }
}
