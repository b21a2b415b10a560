//! Example generator run over a schema snapshot.
//!
//! Run with: `cargo run --example generate -- [--config typedfields.toml] [--out-dir DIR] [snapshot.json]`
//!
//! Without a snapshot the bundled `snapshot.json` is used. Files are written
//! to `target/typedfields` unless `--out-dir` is given.

use clap::Parser;
use std::path::PathBuf;
use typedfields::prelude::*;

const BUNDLED_SNAPSHOT: &str = include_str!("snapshot.json");

/// Generates typed custom fields and variant attributes from a snapshot.
#[derive(Debug, Parser)]
#[command(name = "generate", version, about)]
struct Args {
    /// Schema snapshot to read; the bundled one when omitted.
    snapshot: Option<PathBuf>,

    /// Generation configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Directory the generated files are written under.
    #[arg(short, long, default_value = "target/typedfields")]
    out_dir: PathBuf,

    /// Package name used when no configuration file is given.
    #[arg(short, long, default_value = "shop.generated")]
    package: String,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let config = match &args.config {
        Some(path) => Configuration::load(path)?,
        None => Configuration::new(args.package),
    };

    let files = match &args.snapshot {
        Some(path) => generate_from_file(path, &config)?,
        None => generate_from_json(BUNDLED_SNAPSHOT, &config)?,
    };

    for file in &files {
        let written = file.write_to(&args.out_dir)?;
        println!("Wrote {} ({} bytes)", written.display(), file.contents.len());
    }

    Ok(())
}
