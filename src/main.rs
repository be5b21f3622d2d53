//! LS-8 emulator CLI.
//!
//! Loads a `.ls8` program image into the machine and runs it to completion.
//!
//! # Usage
//! ```text
//! ls8 <program.ls8> [OPTIONS]
//! ```
//!
//! # Arguments
//! - `program.ls8`: Program source file (one binary byte per line, `#` comments)
//!
//! # Options
//! - `-t, --trace`: Log the machine state before every instruction

use ls8::machine::cpu::Machine;
use ls8::machine::loader::load_file;
use ls8::machine::output::StdOutput;
use ls8::{error, info};
use std::env;
use std::path::Path;
use std::process;

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 || args[1] == "--help" || args[1] == "-h" {
        print_usage(&args[0]);
        process::exit(if args.len() < 2 { 1 } else { 0 });
    }

    let input_path = &args[1];
    let mut trace = false;

    let mut i = 2;
    while i < args.len() {
        match args[i].as_str() {
            "--trace" | "-t" => {
                trace = true;
                i += 1;
            }
            other => {
                error!("Unexpected argument: {}\n", other);
                print_usage(&args[0]);
                process::exit(1);
            }
        }
    }

    if !Path::new(input_path).exists() {
        error!("Input file does not exist: {}", input_path);
        process::exit(1);
    }

    let image = load_file(input_path).unwrap_or_else(|e| {
        error!("Failed to load {}: {}", input_path, e);
        process::exit(1);
    });

    let mut machine = Machine::new();
    if let Err(e) = machine.load(&image) {
        error!("Failed to load {}: {}", input_path, e);
        process::exit(1);
    }

    let mut out = StdOutput;
    let result = if trace {
        loop {
            if !machine.is_running() {
                break Ok(());
            }
            info!("{}", machine.trace());
            if let Err(e) = machine.step(&mut out) {
                break Err(e);
            }
        }
    } else {
        machine.run(&mut out)
    };

    if let Err(e) = result {
        error!("{e}");
        process::exit(1);
    }
}

const USAGE: &str = "\
LS-8 Emulator

USAGE:
    {program} <program.ls8> [OPTIONS]

ARGS:
    <program.ls8>    Program source file (one binary byte per line, # comments)

OPTIONS:
    -t, --trace    Log the machine state before every instruction
    -h, --help     Print this help message

EXAMPLES:
    # Run a program
    {program} print8.ls8

    # Run with a state trace on stderr
    {program} mult.ls8 --trace
";

fn print_usage(program: &str) {
    info!("{}", USAGE.replace("{program}", program));
}
