//! CLI command definitions

use clap::Parser;

/// CLI arguments for vet-clinic
#[derive(Parser, Debug)]
#[command(name = "vet-clinic")]
#[command(author, version, about = "A veterinarian treats a queue of pets and wild animals")]
#[command(long_about = r#"
Vet Clinic admits two pets and a wolf to the waiting room and has one
veterinarian treat them in arrival order.

Each treatment prints three lines to stdout. Diagnostic logs go to stderr
and are controlled with -v.
"#)]
pub struct Cli {
    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Log filter directive for the chosen verbosity
    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace", // -vvv or more
        }
    }
}
