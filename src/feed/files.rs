use std::fs::{self, File};
use std::io::{BufReader, BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;
use tempfile::NamedTempFile;
use tracing::debug;

use crate::error::FeedError;

/// Result of a skip-if-exists write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriteOutcome {
    Written(PathBuf),
    /// A file was already there and was left untouched.
    Skipped(PathBuf),
}

/// Decode a JSON document from a file.
pub fn read_json<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<T, FeedError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| FeedError::io(path, e))?;
    serde_json::from_reader(BufReader::new(file)).map_err(|source| {
        if source.is_io() {
            FeedError::io(path, source.into())
        } else {
            FeedError::Decode {
                path: path.to_path_buf(),
                source,
            }
        }
    })
}

/// Write `item` as JSON to `path` unless the file already exists.
///
/// The document is staged next to `path` and only moved into place once it
/// is complete, so a failed write never leaves a partial file behind.
pub fn write_json<T: Serialize>(item: &T, path: impl AsRef<Path>) -> Result<WriteOutcome, FeedError> {
    let path = path.as_ref();
    if path.exists() {
        debug!(path = %path.display(), "file already exists");
        return Ok(WriteOutcome::Skipped(path.to_path_buf()));
    }

    let mut staged = stage(path)?;
    {
        let mut out = BufWriter::new(staged.as_file_mut());
        serde_json::to_writer(&mut out, item).map_err(|e| {
            if e.is_io() {
                FeedError::io(path, e.into())
            } else {
                FeedError::Encode(e)
            }
        })?;
        out.flush().map_err(|e| FeedError::io(path, e))?;
    }

    if !commit(staged, path)? {
        debug!(path = %path.display(), "file appeared while writing");
        return Ok(WriteOutcome::Skipped(path.to_path_buf()));
    }

    debug!(path = %path.display(), "wrote JSON");
    Ok(WriteOutcome::Written(path.to_path_buf()))
}

/// Open a temporary file in the directory that will hold `path`.
/// Dropping it before [`commit`] deletes it.
pub(crate) fn stage(path: &Path) -> Result<NamedTempFile, FeedError> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    ensure_directory(dir)?;
    NamedTempFile::new_in(dir).map_err(|e| FeedError::io(dir, e))
}

/// Move a staged file to `path` without replacing an existing file.
/// Returns `false` if `path` already exists; the staged file is then removed.
pub(crate) fn commit(staged: NamedTempFile, path: &Path) -> Result<bool, FeedError> {
    match staged.persist_noclobber(path) {
        Ok(_) => Ok(true),
        Err(e) if e.error.kind() == ErrorKind::AlreadyExists => Ok(false),
        Err(e) => Err(FeedError::io(path, e.error)),
    }
}

/// Create `dir` (and its parents) if missing.
pub fn ensure_directory(dir: &Path) -> Result<(), FeedError> {
    if dir.as_os_str().is_empty() || dir.is_dir() {
        return Ok(());
    }
    fs::create_dir_all(dir).map_err(|e| FeedError::io(dir, e))
}
