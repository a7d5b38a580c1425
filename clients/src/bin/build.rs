//! `hqdm-build`: builds HQDM entities from a JSON request file and prints
//! the resulting graph.
//!
//! The input is a JSON array of requests:
//! ```json
//! [{ "type": "aggregation", "id": "http://example.com/agg",
//!    "values": { "whole": ["http://example.com/car"], "part": ["http://example.com/wheel"] } }]
//! ```
//! Numeric slots go under `"scalars"`.
//!
//! **Usage:**
//! ```text
//! hqdm-build --input <requests.json> [--schema <table.toml>] [--format ntriples|jsonld] [--verbose]
//! ```
//!
//! Exits non-zero naming the first entity that fails to build.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::fs;
use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use hqdm::serializer::{jsonld, ntriples};

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Ntriples,
    Jsonld,
}

/// Build HQDM entities from a request file.
#[derive(Parser)]
#[command(name = "hqdm-build", about = "Build and serialize HQDM entities")]
struct Args {
    /// JSON array of entity requests.
    #[arg(long)]
    input: PathBuf,

    /// Slot table to load instead of the built-in one.
    #[arg(long)]
    schema: Option<PathBuf>,

    /// Output format.
    #[arg(long, value_enum, default_value = "ntriples")]
    format: Format,

    /// Log at debug level.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    hqdm_clients::init_logging(args.verbose);

    let schema = hqdm_clients::load_schema(args.schema.as_deref())?;
    let text = fs::read_to_string(&args.input)
        .with_context(|| format!("Failed to read {}", args.input.display()))?;
    let requests = hqdm_clients::parse_requests(&text)?;

    let entities = match hqdm_clients::build_all(&schema, &requests) {
        Ok(entities) => entities,
        Err(e) => {
            eprintln!("Build FAILED: {e:#}");
            process::exit(1);
        }
    };
    tracing::info!(entities = entities.len(), "all entities built");

    match args.format {
        Format::Ntriples => print!("{}", ntriples::entities_to_ntriples(&schema, &entities)),
        Format::Jsonld => {
            let value = jsonld::entities_to_json_ld(&schema, &entities);
            let json = serde_json::to_string_pretty(&value)
                .context("Failed to serialize entities to JSON-LD")?;
            println!("{json}");
        }
    }
    Ok(())
}
