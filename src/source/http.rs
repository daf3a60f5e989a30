//! HTTP JSON feed source

use super::{decode_records, prepare, OddsSource};
use crate::quote::RawQuote;
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

/// Default request timeout
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);

/// Fetches a JSON array of raw quotes from an HTTP endpoint
///
/// `days_ahead` is forwarded as a query parameter and also enforced locally.
pub struct HttpFeedSource {
    name: String,
    url: String,
    client: Client,
}

impl HttpFeedSource {
    /// Create a feed source with the default request timeout
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> anyhow::Result<Self> {
        Self::with_timeout(name, url, DEFAULT_TIMEOUT)
    }

    /// Create a feed source with a custom request timeout
    pub fn with_timeout(
        name: impl Into<String>,
        url: impl Into<String>,
        timeout: Duration,
    ) -> anyhow::Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            name: name.into(),
            url: url.into(),
            client,
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl OddsSource for HttpFeedSource {
    fn name(&self) -> &str {
        &self.name
    }

    async fn fetch_upcoming(&self, days_ahead: u32) -> anyhow::Result<Vec<RawQuote>> {
        tracing::debug!(source = %self.name, url = %self.url, "Fetching odds feed");

        let response = self
            .client
            .get(&self.url)
            .query(&[("days_ahead", days_ahead)])
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("Feed {} error: {} - {}", self.name, status, body);
        }

        let records: Vec<serde_json::Value> = response.json().await?;
        let quotes = decode_records(records, &self.name);
        Ok(prepare(quotes, &self.name, days_ahead))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_source_creation() {
        let source = HttpFeedSource::new("feed", "http://localhost:8080/odds").unwrap();
        assert_eq!(source.name(), "feed");
        assert_eq!(source.url(), "http://localhost:8080/odds");
    }

    /// Serve one HTTP response with `body` on a local port
    async fn serve_once(body: &'static str) -> String {
        use tokio::io::{AsyncReadExt, AsyncWriteExt};

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = vec![0u8; 4096];
            let _ = socket.read(&mut buf).await;
            let response = format!(
                "HTTP/1.1 200 OK\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{}",
                body.len(),
                body
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.ok();
        });
        format!("http://{addr}/odds")
    }

    #[tokio::test]
    async fn test_bad_record_does_not_drop_the_feed() {
        let url = serve_once(
            r#"[
                {"home_team": "Flamengo", "away_team": "Vasco", "league": "Brasileirao",
                 "market": "1x2", "selection": "home", "price": 2.1},
                {"home_team": 7, "away_team": "Vasco", "league": "Brasileirao",
                 "market": "1x2", "selection": "away", "price": 3.4}
            ]"#,
        )
        .await;

        let source = HttpFeedSource::new("feed", url).unwrap();
        let quotes = source.fetch_upcoming(7).await.unwrap();
        assert_eq!(quotes.len(), 1);
        assert_eq!(quotes[0].bookmaker.as_deref(), Some("feed"));
    }

    #[tokio::test]
    async fn test_unreachable_feed_is_error() {
        let source =
            HttpFeedSource::with_timeout("feed", "http://127.0.0.1:9/odds", Duration::from_secs(2))
                .unwrap();
        assert!(source.fetch_upcoming(7).await.is_err());
    }
}
