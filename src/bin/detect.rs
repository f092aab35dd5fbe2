//! Detect binary - runs the detection pipeline on a local file and prints the chart
//!
//! Usage:
//!   cargo run --bin detect -- path/to/file.txt          # Reliable detections only
//!   cargo run --bin detect -- path/to/file.txt --all    # Include unreliable detections
//!   cargo run --bin detect -- path/to/file.txt --json   # Print segments as JSON
//!
//! Optional environment variables (same as the server):
//! - PROPORTION_THRESHOLD (defaults to 0.10)
//! - MIN_NUM_BYTES / MAX_NUM_BYTES (default to 0 / 1000)
//! - MAX_RESULTS (defaults to 1000)

use anyhow::{bail, Context, Result};
use std::path::Path;
use tracing::info;

use langchart::catalog::LanguageCatalog;
use langchart::config::Config;
use langchart::detector::WhatlangIdentifier;
use langchart::pipeline::{analyze, decode_upload, Outcome};
use langchart::render::{text_chart, NO_SIGNIFICANT_LANGUAGE};

struct Args {
    path: String,
    reliable_only: bool,
    json: bool,
}

fn parse_args(args: impl Iterator<Item = String>) -> Result<Args> {
    let mut path = None;
    let mut reliable_only = true;
    let mut json = false;

    for arg in args {
        match arg.as_str() {
            "--all" => reliable_only = false,
            "--json" => json = true,
            flag if flag.starts_with("--") => bail!("Unknown flag: {}", flag),
            _ if path.is_none() => path = Some(arg),
            _ => bail!("Only one file may be given"),
        }
    }

    Ok(Args {
        path: path.context("Usage: detect <file.txt> [--all] [--json]")?,
        reliable_only,
        json,
    })
}

/// Read a file and decode it the same way the server decodes uploads.
fn load_text(path: &Path) -> Result<String> {
    let bytes = std::fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    Ok(decode_upload(&file_name, &bytes)?)
}

fn main() -> Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("langchart=warn".parse()?),
        )
        .init();

    let args = parse_args(std::env::args().skip(1))?;
    let config = Config::from_env()?;

    let text = load_text(Path::new(&args.path))?;
    info!("Loaded {} bytes from {}", text.len(), args.path);

    let identifier = WhatlangIdentifier::new(config.min_num_bytes, config.max_num_bytes);
    let outcome = analyze(
        &text,
        &identifier,
        LanguageCatalog::global(),
        &config.filter(args.reliable_only),
        config.max_results,
    )?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(outcome.segments())?);
        return Ok(());
    }

    match outcome {
        Outcome::Languages { segments, .. } => {
            println!("Languages");
            print!("{}", text_chart(&segments));
        }
        Outcome::NoSignificantLanguage => println!("{}", NO_SIGNIFICANT_LANGUAGE),
    }

    Ok(())
}
