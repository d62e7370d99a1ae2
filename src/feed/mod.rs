//! Feed/sink gateway: the bulk feed on one side, JSON files on the other.

mod files;
#[cfg(feature = "fetch")]
mod scryfall;

pub use files::{ensure_directory, read_json, write_json, WriteOutcome};
#[cfg(feature = "fetch")]
pub use scryfall::{BulkData, DownloadOutcome, ScryfallClient};
