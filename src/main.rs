//! Fixture Kit CLI
//!
//! Reads a users CSV and prints the active users' display names with
//! their formatted prices.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- users.csv EUR > roster.csv
//! ```
//!
//! The currency argument is optional and defaults to `USD`.
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Set to `debug` or `warn` to control logging verbosity

use fixture_kit::{FixtureError, Result, Roster, DEFAULT_CURRENCY};
use log::debug;
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
        return Err(FixtureError::MissingArgument);
    }

    let input_path = &args[1];
    let currency = args.get(2).map(String::as_str).unwrap_or(DEFAULT_CURRENCY);
    debug!(
        "fixture-kit {} reading {} in {}",
        fixture_kit::version(),
        input_path,
        currency
    );

    let file = File::open(input_path)?;
    let reader = BufReader::new(file);

    let mut roster = Roster::new(currency);
    roster.process_csv(reader)?;

    let stdout = io::stdout();
    let handle = stdout.lock();
    roster.write_output(handle)?;

    Ok(())
}
