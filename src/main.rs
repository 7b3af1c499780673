//! Desk Calc CLI
//!
//! Replays key presses from a CSV file (one `key` column: digits, `.`,
//! `AC` or an operation symbol) and prints a transcript with one row per
//! accepted key:
//!
//! - `step`: 1-based index of the key
//! - `key`: the key as pressed
//! - `display`: main display text (`20`, `0.5`, `inf`, `NaN`)
//! - `history`: description ending in ` ... ` while pending or ` = `
//! - `pending`: whether a binary operation awaits its second operand
//!
//! # Usage
//!
//! ```bash
//! cargo run -- keys.csv > transcript.csv
//! ```
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Set to `debug` or `warn` to control logging verbosity

use desk_calc::{CalcError, CalculatorEngine, Result};
use std::env;
use std::fs::File;
use std::io::{self, BufReader};
use std::process;

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        return Err(CalcError::MissingArgument);
    }

    let input_path = &args[1];
    let file = File::open(input_path)?;
    let reader = BufReader::new(file);

    let mut engine = CalculatorEngine::new();
    engine.process_csv(reader)?;

    let stdout = io::stdout();
    let handle = stdout.lock();
    engine.write_output(handle)?;

    Ok(())
}
