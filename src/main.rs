use std::fs;

use clap::Parser;
use gotolang::{interpreter::console::StdConsole, run_source};

/// gotolang is a tiny scripting language whose only control flow is a
/// computed GOTO over statement indices.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Path of the program file to run.
    program: String,
}

fn main() {
    let args = Args::parse();

    let script = fs::read_to_string(&args.program).unwrap_or_else(|_| {
        eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                  &args.program);
        std::process::exit(1);
    });

    let mut console = StdConsole;
    if let Err(e) = run_source(&script, &mut console) {
        eprintln!("{e}");
        std::process::exit(1);
    }
}
