//! Byte-addressed virtual machine for the LS-8 microcomputer.
//!
//! The machine executes byte-encoded instructions fetched from a 256-byte
//! memory that holds both code and data.
//!
//! # Architecture
//!
//! - **Memory**: 256 unsigned 8-bit cells, addressed by `u8`
//! - **Registers**: 8 general-purpose 8-bit registers; `r7` is the stack
//!   pointer, initialized to `0xF4` (stack grows downward)
//! - **Program counter**: 8-bit, starts at 0, advanced per-instruction from
//!   metadata packed into the opcode's high bits
//! - **Flags**: `00000LGE`, written only by `CMP`
//! - **Instruction format**: one opcode byte followed by 0–2 operand bytes
//!
//! # Modules
//!
//! - [`cpu`]: core machine implementation and fetch-decode-execute cycle
//! - [`errors`]: load and execution error types
//! - [`isa`]: instruction set definition and opcode mappings
//! - [`loader`]: `.ls8` text format parsing
//! - [`output`]: sink abstraction for the `PRN` instruction

pub mod cpu;
pub mod errors;
pub mod isa;
#[cfg(test)]
mod isa_static_check;
pub mod loader;
pub mod output;
