//! pwd-policy command line tool
//!
//! Loads a common password list, then validates one candidate per line of
//! stdin. Rejected candidates are printed as `<sanitized> -> Error: <reason>`.

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use pwd_policy::{validate_lines, Dictionary};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Common password list, one password per line
    dictionary: PathBuf,
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging();

    let dictionary = Dictionary::from_path(&args.dictionary)
        .with_context(|| format!("Failed to load dictionary {:?}", args.dictionary))?;
    dictionary.sort();

    let stdin = io::stdin().lock();
    let mut out = io::stdout().lock();

    let summary = validate_lines(stdin, &dictionary, |outcome| {
        if !outcome.is_valid() {
            writeln!(out, "{}", outcome)?;
            // stdin may be a live pipe or terminal
            out.flush()?;
        }
        Ok(())
    })
    .context("Failed to validate passwords from stdin")?;

    info!(
        "{} passwords checked, {} rejected",
        summary.checked, summary.rejected
    );

    Ok(())
}
