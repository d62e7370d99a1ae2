//! Pipeline configuration.

use std::path::{Path, PathBuf};

use time::Date;

/// What to do when a printing fails normalization.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BatchPolicy {
    /// Abort the whole run on the first failing printing.
    #[default]
    FailFast,
    /// Log and skip failing printings, keep the rest.
    SkipInvalid,
}

/// Where the pipeline reads from and writes to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Bulk data description endpoint.
    pub bulk_url: String,
    /// Directory for downloaded payloads.
    pub raw_dir: PathBuf,
    /// Directory for per-card output files.
    pub card_dir: PathBuf,
    pub batch_policy: BatchPolicy,
    /// Sent with every HTTP request.
    pub user_agent: String,
}

pub const DEFAULT_BULK_URL: &str = "https://api.scryfall.com/bulk-data/default-cards";

impl Default for Config {
    fn default() -> Self {
        Self {
            bulk_url: DEFAULT_BULK_URL.to_string(),
            raw_dir: PathBuf::from("raw"),
            card_dir: PathBuf::from("card"),
            batch_policy: BatchPolicy::default(),
            user_agent: concat!("fblthp-archive/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl Config {
    /// Payload file for the given day, e.g. `raw/cards-2026-10-19.json`.
    pub fn raw_file(&self, date: Date) -> PathBuf {
        self.raw_dir.join(format!("cards-{}.json", date))
    }

    /// Output file for a card with the given file name.
    pub fn card_file(&self, file_name: &str) -> PathBuf {
        self.card_dir.join(file_name)
    }

    pub fn with_card_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.card_dir = dir.as_ref().to_path_buf();
        self
    }

    pub fn with_raw_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.raw_dir = dir.as_ref().to_path_buf();
        self
    }

    pub fn with_batch_policy(mut self, policy: BatchPolicy) -> Self {
        self.batch_policy = policy;
        self
    }
}
