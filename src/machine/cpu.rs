//! Core machine implementation.
//!
//! [`Machine`] owns all mutable state: the 256-byte memory, the register
//! file, the program counter, and the flags register. Execution is
//! single-threaded and synchronous; [`Machine::run`] loops
//! [`Machine::step`] until `HLT` clears the running flag or an error
//! propagates out. All register arithmetic uses wrapping semantics, so
//! 8-bit overflow never panics.

use crate::machine::cpu::registers::{Registers, SP_INIT};
use crate::machine::errors::MachineError;
use crate::machine::isa::Instruction;
use crate::machine::output::Output;
use std::cmp::Ordering;

mod registers;

/// Number of addressable memory cells.
pub const MEMORY_SIZE: usize = 256;

/// Flags register bit set by `CMP` when the operands are equal.
pub const FL_EQ: u8 = 0b001;
/// Flags register bit set by `CMP` when the first operand is greater.
pub const FL_GT: u8 = 0b010;
/// Flags register bit set by `CMP` when the first operand is less.
pub const FL_LT: u8 = 0b100;

/// LS-8 virtual machine.
///
/// Constructed once, loaded once with [`Machine::load`], then driven by
/// [`Machine::run`] or repeated [`Machine::step`] calls. Code and data share
/// the same unprotected memory; the stack occupies the high end, growing
/// downward from `0xF4`. Stack overflow and underflow are not bounds-checked
/// and may wrap into the rest of memory, matching the reference machine.
pub struct Machine {
    /// Memory holding both instructions and data.
    ram: [u8; MEMORY_SIZE],
    /// Register file; `r7` is the stack pointer.
    registers: Registers,
    /// Program counter.
    pc: u8,
    /// Flags register, layout `00000LGE`.
    fl: u8,
    /// Cleared by `HLT`; consulted only by [`Machine::run`].
    running: bool,
}

impl Machine {
    /// Creates a machine with zeroed memory and registers, PC at 0, and the
    /// stack pointer at `0xF4`.
    pub fn new() -> Self {
        Self {
            ram: [0; MEMORY_SIZE],
            registers: Registers::new(),
            pc: 0,
            fl: 0,
            running: true,
        }
    }

    /// Writes a program image into memory starting at address 0.
    ///
    /// The image is trusted to be well-formed; the only validation is that
    /// it fits in memory.
    pub fn load(&mut self, image: &[u8]) -> Result<(), MachineError> {
        if image.len() > MEMORY_SIZE {
            return Err(MachineError::ProgramTooLarge {
                size: image.len(),
                capacity: MEMORY_SIZE,
            });
        }
        self.ram[..image.len()].copy_from_slice(image);
        Ok(())
    }

    /// Reads the memory cell at `addr`.
    pub fn ram_read(&self, addr: u8) -> u8 {
        self.ram[addr as usize]
    }

    /// Writes `value` to the memory cell at `addr`.
    fn ram_write(&mut self, addr: u8, value: u8) {
        self.ram[addr as usize] = value;
    }

    /// Returns the program counter.
    pub fn pc(&self) -> u8 {
        self.pc
    }

    /// Returns the flags register.
    pub fn flags(&self) -> u8 {
        self.fl
    }

    /// Whether `HLT` has been executed yet.
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Returns the value of register `idx`.
    pub fn register(&self, idx: u8) -> Result<u8, MachineError> {
        self.registers.get(idx)
    }

    /// Runs fetch-decode-execute cycles until `HLT` or an error.
    pub fn run<O: Output>(&mut self, out: &mut O) -> Result<(), MachineError> {
        while self.running {
            self.step(out)?;
        }
        Ok(())
    }

    /// Performs exactly one fetch-decode-execute cycle.
    ///
    /// Fetches the opcode at PC, decodes it against the instruction table,
    /// executes it, then advances PC by `operand_count + 1` unless the
    /// opcode's sets-PC bit says the handler supplied the new PC itself.
    pub fn step<O: Output>(&mut self, out: &mut O) -> Result<(), MachineError> {
        let opcode = self.ram_read(self.pc);
        let instr = Instruction::try_from(opcode).map_err(|_| MachineError::UnsupportedOpcode {
            opcode,
            addr: self.pc,
        })?;
        self.exec(instr, out)?;
        if !instr.sets_pc() {
            self.pc = self.pc.wrapping_add(instr.operand_count() + 1);
        }
        Ok(())
    }

    /// Reads the `n`-th operand byte of the current instruction.
    fn operand(&self, n: u8) -> u8 {
        self.ram_read(self.pc.wrapping_add(n))
    }

    /// Executes a single decoded instruction.
    fn exec<O: Output>(&mut self, instr: Instruction, out: &mut O) -> Result<(), MachineError> {
        if instr.is_alu() {
            let (ra, rb) = (self.operand(1), self.operand(2));
            return self.alu(instr, ra, rb);
        }
        match instr {
            Instruction::Hlt => self.op_hlt(),
            Instruction::Ldi => self.op_ldi(self.operand(1), self.operand(2)),
            Instruction::Prn => self.op_prn(self.operand(1), out),
            Instruction::St => self.op_st(self.operand(1), self.operand(2)),
            Instruction::Push => self.op_push(self.operand(1)),
            Instruction::Pop => self.op_pop(self.operand(1)),
            Instruction::Call => self.op_call(self.operand(1)),
            Instruction::Ret => self.op_ret(),
            other => Err(MachineError::UnsupportedAluOp {
                mnemonic: other.mnemonic(),
            }),
        }
    }

    /// Performs an ALU operation on registers `ra` and `rb`.
    ///
    /// `ADD`, `MUL`, and `AND` write the result back to `ra` with 8-bit
    /// wrapping; `CMP` overwrites the whole flags register with exactly one
    /// of the Equal/Greater/Less bits. Any other instruction reaching the
    /// ALU is an internal-consistency error.
    fn alu(&mut self, op: Instruction, ra: u8, rb: u8) -> Result<(), MachineError> {
        let a = self.registers.get(ra)?;
        let b = self.registers.get(rb)?;
        match op {
            Instruction::Add => self.registers.set(ra, a.wrapping_add(b)),
            Instruction::Mul => self.registers.set(ra, a.wrapping_mul(b)),
            Instruction::And => self.registers.set(ra, a & b),
            Instruction::Cmp => {
                self.fl = match a.cmp(&b) {
                    Ordering::Equal => FL_EQ,
                    Ordering::Greater => FL_GT,
                    Ordering::Less => FL_LT,
                };
                Ok(())
            }
            other => Err(MachineError::UnsupportedAluOp {
                mnemonic: other.mnemonic(),
            }),
        }
    }

    fn op_hlt(&mut self) -> Result<(), MachineError> {
        self.running = false;
        Ok(())
    }

    fn op_ldi(&mut self, rd: u8, imm: u8) -> Result<(), MachineError> {
        self.registers.set(rd, imm)
    }

    fn op_prn<O: Output>(&mut self, rs: u8, out: &mut O) -> Result<(), MachineError> {
        let value = self.registers.get(rs)?;
        out.emit(value);
        Ok(())
    }

    fn op_st(&mut self, ra: u8, rb: u8) -> Result<(), MachineError> {
        let addr = self.registers.get(ra)?;
        let value = self.registers.get(rb)?;
        self.ram_write(addr, value);
        Ok(())
    }

    fn op_push(&mut self, rs: u8) -> Result<(), MachineError> {
        let value = self.registers.get(rs)?;
        self.stack_push(value);
        Ok(())
    }

    fn op_pop(&mut self, rd: u8) -> Result<(), MachineError> {
        let value = self.stack_pop();
        self.registers.set(rd, value)
    }

    /// `CALL` pushes the address of the instruction after the 2-byte call,
    /// then jumps to the address held in `rs`.
    fn op_call(&mut self, rs: u8) -> Result<(), MachineError> {
        let target = self.registers.get(rs)?;
        self.stack_push(self.pc.wrapping_add(2));
        self.pc = target;
        Ok(())
    }

    fn op_ret(&mut self) -> Result<(), MachineError> {
        self.pc = self.stack_pop();
        Ok(())
    }

    /// Decrements SP, then writes `value` at the new SP.
    fn stack_push(&mut self, value: u8) {
        let sp = self.registers.sp().wrapping_sub(1);
        self.registers.set_sp(sp);
        self.ram_write(sp, value);
    }

    /// Reads the value at SP, then increments SP.
    fn stack_pop(&mut self) -> u8 {
        let sp = self.registers.sp();
        let value = self.ram_read(sp);
        self.registers.set_sp(sp.wrapping_add(1));
        value
    }

    /// Renders the machine state for diagnostics.
    ///
    /// Shows PC, FL, the three memory bytes at PC, and all registers as
    /// fixed-width hex. Never mutates state.
    pub fn trace(&self) -> String {
        let mut line = format!(
            "TRACE: {:02X} {:02X} | {:02X} {:02X} {:02X} |",
            self.pc,
            self.fl,
            self.ram_read(self.pc),
            self.ram_read(self.pc.wrapping_add(1)),
            self.ram_read(self.pc.wrapping_add(2)),
        );
        for value in self.registers.iter() {
            line.push_str(&format!(" {value:02X}"));
        }
        line
    }
}

impl Default for Machine {
    fn default() -> Self {
        Self::new()
    }
}

// Re-exported so collaborators can reason about the stack layout.
pub use registers::{REGISTER_COUNT, SP, SP_INIT as STACK_START};

const _: () = assert!((SP_INIT as usize) < MEMORY_SIZE);
