//! Program image loading.
//!
//! Parses the textual `.ls8` format: one binary-encoded byte per line,
//! most-significant bit first. Everything after a `#` is a comment; blank
//! lines are skipped. The parsed image is handed to
//! [`Machine::load`](crate::machine::cpu::Machine::load) unvalidated beyond
//! length.

use crate::machine::errors::MachineError;
use std::fs;
use std::path::Path;

/// Parses `.ls8` source text into a program image.
///
/// Line numbers in errors are 1-based.
pub fn parse_source(source: &str) -> Result<Vec<u8>, MachineError> {
    let mut image = Vec::new();
    for (idx, line) in source.lines().enumerate() {
        let code = line.split('#').next().unwrap_or("").trim();
        if code.is_empty() {
            continue;
        }
        let byte =
            u8::from_str_radix(code, 2).map_err(|_| MachineError::InvalidSourceLine {
                line: idx + 1,
                text: code.to_string(),
            })?;
        image.push(byte);
    }
    Ok(image)
}

/// Reads and parses a `.ls8` file.
pub fn load_file<P: AsRef<Path>>(path: P) -> Result<Vec<u8>, MachineError> {
    let source = fs::read_to_string(path).map_err(|e| MachineError::Io(e.to_string()))?;
    parse_source(&source)
}
