//! `hqdm-conformance`: validates an HQDM slot table.
//!
//! Runs the inventory, slot integrity and builder scenario validators
//! against the built-in table or the one given with `--schema`.
//!
//! **Usage:**
//! ```text
//! hqdm-conformance [--schema <table.toml>] [--verbose]
//! ```
//!
//! Exits non-zero if any conformance check fails.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::path::PathBuf;
use std::process;

use anyhow::Result;
use clap::Parser;
use hqdm_conformance::{run_all, Severity};

/// Run the HQDM slot table conformance suite.
#[derive(Parser)]
#[command(
    name = "hqdm-conformance",
    about = "Validate an HQDM slot table and exercise its builder"
)]
struct Args {
    /// Slot table to load instead of the built-in one.
    #[arg(long)]
    schema: Option<PathBuf>,

    /// Log at debug level.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    hqdm_clients::init_logging(args.verbose);

    let schema = hqdm_clients::load_schema(args.schema.as_deref())?;
    let report = run_all(&schema);

    println!("HQDM Conformance Report");
    println!("=======================");
    println!();

    for result in &report.results {
        println!("[{}] {}: {}", result.severity, result.validator, result.message);
        for detail in &result.details {
            println!("       {detail}");
        }
    }

    let failed = report.count(Severity::Failure);
    println!();
    println!(
        "Summary: {} passed, {} warnings, {} failed",
        report.count(Severity::Pass),
        report.count(Severity::Warning),
        failed
    );

    if failed > 0 {
        eprintln!("Conformance FAILED: {failed} check(s) did not pass.");
        process::exit(1);
    }

    println!("Conformance PASSED.");
    Ok(())
}
