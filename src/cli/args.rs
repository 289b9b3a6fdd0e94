use chrono::NaiveDate;
use clap::Parser;
use std::path::PathBuf;

/// Parse, validate and settle a free-text payment instruction
#[derive(Parser, Debug)]
#[command(name = "payment-instruction-engine")]
#[command(
    about = "Parse, validate and settle a free-text payment instruction",
    long_about = None
)]
pub struct CliArgs {
    /// Request JSON document
    #[arg(
        value_name = "REQUEST",
        help = "Path to the request JSON file, or '-' to read from stdin"
    )]
    pub request: PathBuf,

    /// Pretty-print the outcome JSON
    #[arg(long = "pretty", help = "Indent the outcome JSON for reading")]
    pub pretty: bool,

    /// Reference date for the pending/immediate decision
    #[arg(
        long = "on",
        value_name = "YYYY-MM-DD",
        help = "Reference date for the pending/immediate decision (default: today, UTC)"
    )]
    pub reference_date: Option<NaiveDate>,
}

impl CliArgs {
    /// Whether the request should be read from stdin
    pub fn reads_stdin(&self) -> bool {
        self.request.as_os_str() == "-"
    }
}
