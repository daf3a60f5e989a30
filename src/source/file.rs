//! Replay source backed by a JSON file of captured quotes

use super::{decode_records, prepare, OddsSource};
use crate::quote::RawQuote;
use anyhow::Context;
use async_trait::async_trait;
use std::path::PathBuf;

/// Reads a JSON array of raw quotes from disk on every fetch
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    name: String,
    path: PathBuf,
}

impl JsonFileSource {
    /// Create a file source; the file stem names it
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "file".to_string());
        Self { name, path }
    }

    /// Override the source name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }
}

#[async_trait]
impl OddsSource for JsonFileSource {
    fn name(&self) -> &str {
        &self.name
    }

    async fn fetch_upcoming(&self, days_ahead: u32) -> anyhow::Result<Vec<RawQuote>> {
        let content = tokio::fs::read_to_string(&self.path)
            .await
            .with_context(|| format!("Failed to read {}", self.path.display()))?;
        let records: Vec<serde_json::Value> = serde_json::from_str(&content)
            .with_context(|| format!("Invalid quote file {}", self.path.display()))?;
        let quotes = decode_records(records, &self.name);

        tracing::debug!(
            source = %self.name,
            path = %self.path.display(),
            quotes = quotes.len(),
            "Loaded quotes from file"
        );
        Ok(prepare(quotes, &self.name, days_ahead))
    }
}
