//! Instruction Set Architecture (ISA) definitions.
//!
//! Defines the LS-8 instruction set. The
//! [`for_each_instruction!`](crate::for_each_instruction) macro holds the
//! canonical instruction definitions and invokes a callback macro for code
//! generation, so multiple modules can generate instruction-related code
//! without duplicating the table.
//!
//! This module generates:
//! - The [`Instruction`] enum with opcode mappings
//! - `TryFrom<u8>` for decoding opcodes
//!
//! # Opcode Format
//!
//! Each opcode byte embeds its own decode metadata:
//!
//! ```text
//! bits 6-7  operand count (0-2 bytes following the opcode)
//! bit  5    ALU class (operation is routed through the ALU)
//! bit  4    sets-PC flag (handler supplies the next PC itself)
//! bits 0-3  operation identifier
//! ```
//!
//! Metadata accessors decode these bits directly from the opcode value
//! rather than consulting a per-instruction lookup table.

use crate::machine::errors::MachineError;

/// Invokes a callback macro with the complete instruction definition list.
///
/// This macro enables code generation for instructions in multiple modules
/// without duplicating the instruction definitions.
#[macro_export]
macro_rules! for_each_instruction {
    ($callback:ident) => {
        $callback! {
            /// HLT ; stop the fetch-decode-execute loop
            Hlt = 0x01, "HLT" => [],
            /// LDI reg, imm8 ; reg = imm8
            Ldi = 0x82, "LDI" => [rd: Reg, imm: Imm8],
            /// PRN reg ; emit the register's value to the output sink
            Prn = 0x47, "PRN" => [rs: Reg],
            /// ST regA, regB ; memory[regA] = regB
            St = 0x84, "ST" => [ra: Reg, rb: Reg],
            /// PUSH reg ; decrement SP, write the register at memory[SP]
            Push = 0x45, "PUSH" => [rs: Reg],
            /// POP reg ; read memory[SP] into the register, increment SP
            Pop = 0x46, "POP" => [rd: Reg],
            /// CALL reg ; push the return address, jump to the register's value
            Call = 0x50, "CALL" => [rs: Reg],
            /// RET ; pop the return address into PC
            Ret = 0x11, "RET" => [],
            /// ADD regA, regB ; regA = (regA + regB) mod 256
            Add = 0xA0, "ADD" => [ra: Reg, rb: Reg],
            /// MUL regA, regB ; regA = (regA * regB) mod 256
            Mul = 0xA2, "MUL" => [ra: Reg, rb: Reg],
            /// AND regA, regB ; regA = regA & regB
            And = 0xA8, "AND" => [ra: Reg, rb: Reg],
            /// CMP regA, regB ; FL = exactly one of Equal/Greater/Less
            Cmp = 0xA7, "CMP" => [ra: Reg, rb: Reg],
        }
    };
}

macro_rules! define_instructions {
    (
        $(
            $(#[$doc:meta])*
            $name:ident = $opcode:expr, $mnemonic:literal => [
                $( $field:ident : $kind:ident ),* $(,)?
            ]
        ),* $(,)?
    ) => {
        /// LS-8 instruction, one variant per opcode.
        #[derive(Copy, Clone, Debug, Eq, PartialEq)]
        #[repr(u8)]
        pub enum Instruction {
            $(
                $(#[$doc])*
                $name = $opcode,
            )*
        }

        impl TryFrom<u8> for Instruction {
            type Error = MachineError;

            fn try_from(value: u8) -> Result<Self, Self::Error> {
                match value {
                    $( $opcode => Ok(Instruction::$name), )*
                    _ => Err(MachineError::UnsupportedOpcode {
                        opcode: value,
                        addr: 0,
                    }),
                }
            }
        }

        impl Instruction {
            /// Every instruction in the table, in declaration order.
            pub const ALL: &'static [Instruction] = &[
                $( Instruction::$name, )*
            ];

            /// Returns the assembly mnemonic for this instruction.
            pub const fn mnemonic(&self) -> &'static str {
                match self {
                    $( Instruction::$name => $mnemonic, )*
                }
            }
        }
    };
}

for_each_instruction!(define_instructions);

impl Instruction {
    /// Number of operand bytes following the opcode (bits 6-7).
    pub const fn operand_count(&self) -> u8 {
        (*self as u8) >> 6
    }

    /// Whether the handler supplies the next PC itself (bit 4).
    ///
    /// When clear, the cycle driver advances PC by `operand_count() + 1`.
    pub const fn sets_pc(&self) -> bool {
        (*self as u8) >> 4 & 1 == 1
    }

    /// Whether the operation is routed through the ALU (bit 5).
    pub const fn is_alu(&self) -> bool {
        (*self as u8) >> 5 & 1 == 1
    }
}
