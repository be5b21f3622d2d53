//! LS-8 microcomputer emulator.
//!
//! Provides the fetch-decode-execute core, the `.ls8` program loader, and
//! logging utilities used by the emulator binary.

pub mod machine;
pub mod utils;
