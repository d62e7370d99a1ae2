//! Card catalog archiver.
//!
//! Reads the Scryfall bulk card feed and normalizes every printing into one
//! [`Card`] per finish, written as individual JSON files.
//!
//! ```no_run
//! use fblthp_archive::{Config, Pipeline};
//!
//! let summary = Pipeline::new(Config::default()).process_file("raw/cards-2026-10-19.json".as_ref())?;
//! println!("wrote {} cards", summary.written);
//! # Ok::<(), fblthp_archive::Error>(())
//! ```

pub mod card;
pub mod config;
pub mod error;
pub mod feed;
pub mod pipeline;
pub mod storage;

pub use card::{
    load_raw_cards, normalize_all, normalize_each, parse_type_line, BatchReport, Card, RawCard,
    RawCardFace, RejectedRecord, RelatedCard, TypeLine,
};
pub use config::{BatchPolicy, Config};
pub use error::{CardError, CardId, Error, FeedError, Result, StorageError};
pub use pipeline::{Pipeline, RunSummary};
pub use storage::{CardStore, IdAllocator, InMemoryCardStore};
