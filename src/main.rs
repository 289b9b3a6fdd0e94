//! Payment Instruction Engine CLI
//!
//! Command-line interface for settling free-text payment instructions
//! against an account snapshot.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- request.json
//! cargo run -- --pretty request.json
//! cargo run -- --on 2026-08-30 request.json
//! echo '{"accounts": [...], "instruction": "..."}' | cargo run -- -
//! ```
//!
//! The program reads one request document (a JSON object with `accounts`
//! and `instruction`), runs it through the settlement engine and prints the
//! outcome JSON to stdout. A rejected instruction is a normal outcome, not
//! a program error: the exit code stays 0 and the rejection is reported in
//! the outcome's `status_code`.
//!
//! # Exit Codes
//!
//! - 0: an outcome was produced (successful, pending or failed)
//! - 1: input error (file not found, unreadable input, invalid JSON)

use payment_instruction_engine::cli;
use payment_instruction_engine::core::{FixedClock, SettlementEngine};
use payment_instruction_engine::io;
use std::process;

fn main() {
    let args = cli::parse_args();

    let request = if args.reads_stdin() {
        io::read_request_from(std::io::stdin().lock())
    } else {
        io::read_request_value(&args.request)
    };
    let request = match request {
        Ok(request) => request,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    // A fixed --on date makes runs reproducible; otherwise the engine uses
    // the UTC wall-clock day.
    let outcome = match args.reference_date {
        Some(date) => SettlementEngine::with_clock(FixedClock(date)).process_request(&request),
        None => SettlementEngine::new().process_request(&request),
    };

    let mut stdout = std::io::stdout();
    if let Err(e) = io::write_outcome_json(&mut stdout, &outcome, args.pretty) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
