use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use fblthp_archive::{BatchPolicy, Config, Pipeline};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Download the Scryfall bulk feed and write one JSON file per card finish.
#[derive(Debug, Parser)]
#[command(name = "fblthp", version, about)]
struct Args {
    /// Bulk data description endpoint.
    #[arg(long)]
    bulk_url: Option<String>,

    /// Directory for downloaded payloads.
    #[arg(long)]
    raw_dir: Option<PathBuf>,

    /// Directory for per-card output files.
    #[arg(long)]
    card_dir: Option<PathBuf>,

    /// Skip printings that fail normalization instead of aborting.
    #[arg(long)]
    skip_invalid: bool,

    /// Normalize an existing payload file instead of downloading.
    #[arg(long)]
    input: Option<PathBuf>,
}

impl Args {
    fn config(&self) -> Config {
        let mut config = Config::default();
        if let Some(url) = &self.bulk_url {
            config.bulk_url = url.clone();
        }
        if let Some(dir) = &self.raw_dir {
            config = config.with_raw_dir(dir);
        }
        if let Some(dir) = &self.card_dir {
            config = config.with_card_dir(dir);
        }
        if self.skip_invalid {
            config = config.with_batch_policy(BatchPolicy::SkipInvalid);
        }
        config
    }
}

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();
    let pipeline = Pipeline::new(args.config());

    let result = match &args.input {
        Some(path) => pipeline.process_file(path),
        None => pipeline.run(),
    };

    match result {
        Ok(summary) => {
            info!(
                raw = summary.raw_records,
                cards = summary.cards,
                written = summary.written,
                skipped = summary.skipped,
                rejected = summary.rejected.len(),
                "done"
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(code = e.code(), "run failed: {}", e);
            ExitCode::FAILURE
        }
    }
}
