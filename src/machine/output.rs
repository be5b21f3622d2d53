//! Output sink for the `PRN` instruction.
//!
//! The machine never writes to stdout directly; `PRN` hands each value to an
//! [`Output`] implementation so callers choose where values go.

/// Sink receiving one unsigned 8-bit value per `PRN`, in program order.
pub trait Output {
    /// Consumes a single emitted value.
    fn emit(&mut self, value: u8);
}

/// Writes each emitted value on its own line to standard output.
pub struct StdOutput;

impl Output for StdOutput {
    fn emit(&mut self, value: u8) {
        println!("{value}");
    }
}
