//! `hqdm-schema`: prints the HQDM slot table.
//!
//! **Formats:**
//! - `summary`: one line per entity type with its slots and requirement classes
//! - `toml`: the table in the format `--schema` accepts
//! - `ntriples`: the table as OWL classes and properties
//!
//! **Usage:**
//! ```text
//! hqdm-schema [--schema <table.toml>] [--format summary|toml|ntriples] [--verbose]
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use hqdm::serializer::ntriples;
use hqdm::Schema;

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Summary,
    Toml,
    Ntriples,
}

/// Print the HQDM slot table.
#[derive(Parser)]
#[command(name = "hqdm-schema", about = "Print the HQDM slot table")]
struct Args {
    /// Slot table to load instead of the built-in one.
    #[arg(long)]
    schema: Option<PathBuf>,

    /// Output format.
    #[arg(long, value_enum, default_value = "summary")]
    format: Format,

    /// Log at debug level.
    #[arg(short, long)]
    verbose: bool,
}

fn summary(schema: &Schema) {
    println!(
        "HQDM slot table v{}: {} modules, {} entity types, {} slots",
        schema.version,
        schema.modules.len(),
        schema.entity_type_count(),
        schema.slot_count()
    );
    for module in &schema.modules {
        println!();
        println!("[{}]", module.group);
        for entity_type in &module.entity_types {
            let slots: Vec<String> = entity_type
                .slots
                .iter()
                .map(|s| format!("{}:{}", s.key, s.requirement.as_str()))
                .collect();
            println!("  {} {}", entity_type.name, slots.join(" "));
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    hqdm_clients::init_logging(args.verbose);

    let schema = hqdm_clients::load_schema(args.schema.as_deref())?;
    match args.format {
        Format::Summary => summary(&schema),
        Format::Toml => {
            let text = schema
                .to_toml_string()
                .context("Failed to serialize slot table to TOML")?;
            print!("{text}");
        }
        Format::Ntriples => print!("{}", ntriples::schema_to_ntriples(&schema)),
    }
    Ok(())
}
