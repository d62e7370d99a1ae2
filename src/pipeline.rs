//! Batch run: download the bulk payload, normalize it, write one file per card.

use std::path::Path;

use tracing::{debug, info, warn};

use crate::card::{load_raw_cards, normalize_all, normalize_each, Card, RejectedRecord};
use crate::config::{BatchPolicy, Config};
use crate::error::Result;
use crate::feed::{write_json, WriteOutcome};

/// Counts for one run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunSummary {
    pub raw_records: usize,
    pub cards: usize,
    pub written: usize,
    /// Cards whose output file already existed.
    pub skipped: usize,
    pub rejected: Vec<RejectedRecord>,
}

pub struct Pipeline {
    config: Config,
}

impl Pipeline {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Download today's payload (unless already present) and process it.
    #[cfg(feature = "fetch")]
    pub fn run(&self) -> Result<RunSummary> {
        use crate::feed::ScryfallClient;

        let today = time::OffsetDateTime::now_utc().date();
        let target = self.config.raw_file(today);

        let client = ScryfallClient::new(self.config.bulk_url.as_str(), &self.config.user_agent)?;
        let payload = client.fetch_cards(&target)?;

        self.process_file(payload.path())
    }

    /// Normalize a payload already on disk and write its cards.
    pub fn process_file(&self, path: &Path) -> Result<RunSummary> {
        let raws = load_raw_cards(path)?;

        let (cards, rejected) = match self.config.batch_policy {
            BatchPolicy::FailFast => (normalize_all(&raws)?, Vec::new()),
            BatchPolicy::SkipInvalid => {
                let report = normalize_each(&raws);
                (report.cards, report.rejected)
            }
        };
        info!(
            raw = raws.len(),
            cards = cards.len(),
            rejected = rejected.len(),
            "normalized cards"
        );
        if !rejected.is_empty() {
            warn!(count = rejected.len(), "some printings were rejected");
        }

        let (written, skipped) = self.write_cards(&cards)?;
        info!(written, skipped, dir = %self.config.card_dir.display(), "wrote cards");

        Ok(RunSummary {
            raw_records: raws.len(),
            cards: cards.len(),
            written,
            skipped,
            rejected,
        })
    }

    /// Write each card to its own file, leaving existing files alone.
    /// Returns `(written, skipped)`.
    pub fn write_cards(&self, cards: &[Card]) -> Result<(usize, usize)> {
        let mut written = 0;
        let mut skipped = 0;

        for card in cards {
            let path = self.config.card_file(&card.file_name());
            match write_json(card, &path)? {
                WriteOutcome::Written(_) => written += 1,
                WriteOutcome::Skipped(p) => {
                    debug!(path = %p.display(), card = %card, "card file exists");
                    skipped += 1;
                }
            }
        }

        Ok((written, skipped))
    }
}
