//! Scryfall bulk data client.

use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use reqwest::blocking::{Client, Response};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::files::{commit, stage};
use crate::error::FeedError;

/// Bulk data description. Only `download_uri` is needed to fetch the payload.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BulkData {
    pub id: Option<String>,
    pub uri: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub download_uri: Option<String>,
    pub updated_at: Option<String>,
    pub size: Option<u64>,
    pub content_type: Option<String>,
    pub content_encoding: Option<String>,
}

impl BulkData {
    pub fn download_uri(&self) -> Result<&str, FeedError> {
        match self.download_uri.as_deref() {
            Some(uri) if !uri.is_empty() => Ok(uri),
            _ => Err(FeedError::Http(
                "bulk description has no download_uri".to_string(),
            )),
        }
    }
}

/// Result of a skip-if-exists download.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DownloadOutcome {
    Downloaded(PathBuf),
    AlreadyPresent(PathBuf),
}

impl DownloadOutcome {
    pub fn path(&self) -> &Path {
        match self {
            DownloadOutcome::Downloaded(p) | DownloadOutcome::AlreadyPresent(p) => p,
        }
    }
}

/// Blocking Scryfall client.
#[derive(Debug, Clone)]
pub struct ScryfallClient {
    http: Client,
    bulk_url: String,
}

impl ScryfallClient {
    /// Create a client for `bulk_url`, identifying as `user_agent`.
    pub fn new(bulk_url: impl Into<String>, user_agent: &str) -> Result<Self, FeedError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let http = Client::builder()
            .user_agent(user_agent)
            .default_headers(headers)
            .build()?;

        Ok(Self {
            http,
            bulk_url: bulk_url.into(),
        })
    }

    fn get(&self, url: &str) -> Result<Response, FeedError> {
        debug!(url, "GET");
        let response = self.http.get(url).send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(FeedError::Http(format!("{} returned status {}", url, status)));
        }
        Ok(response)
    }

    /// Fetch the bulk data description.
    pub fn fetch_bulk_data(&self) -> Result<BulkData, FeedError> {
        info!(url = %self.bulk_url, "fetching bulk description");
        Ok(self.get(&self.bulk_url)?.json()?)
    }

    /// Download `url` into `target` unless `target` already exists.
    pub fn download(&self, url: &str, target: &Path) -> Result<DownloadOutcome, FeedError> {
        if target.exists() {
            info!(path = %target.display(), "payload already present, skipping download");
            return Ok(DownloadOutcome::AlreadyPresent(target.to_path_buf()));
        }

        info!(url, path = %target.display(), "downloading payload");
        let mut response = self.get(url)?;
        let mut staged = stage(target)?;
        let bytes = {
            let mut out = BufWriter::new(staged.as_file_mut());
            let bytes = response.copy_to(&mut out)?;
            out.flush().map_err(|e| FeedError::io(target, e))?;
            bytes
        };

        if !commit(staged, target)? {
            info!(path = %target.display(), "payload appeared during download, keeping it");
            return Ok(DownloadOutcome::AlreadyPresent(target.to_path_buf()));
        }

        info!(bytes, path = %target.display(), "download complete");
        Ok(DownloadOutcome::Downloaded(target.to_path_buf()))
    }

    /// Fetch the bulk description and download its payload into `target`.
    pub fn fetch_cards(&self, target: &Path) -> Result<DownloadOutcome, FeedError> {
        let bulk = self.fetch_bulk_data()?;
        self.download(bulk.download_uri()?, target)
    }
}
