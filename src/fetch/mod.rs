// Headline fetching — HTTP GET per source with bounded retry, then HTML
// tag scanning.
//
// Fetch failures never propagate: a source that cannot be reached after
// the configured number of attempts simply contributes zero headlines.
// Extraction from the response body is a pure function so it can be tested
// against fixture HTML without any network.

use std::time::Duration;

use anyhow::{Context, Result};
use scraper::{Html, Selector};
use tracing::{debug, warn};

use crate::config::Config;
use crate::sources::Source;

/// One scraped headline: normalized text plus the source it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Headline {
    /// Lowercased, whitespace-trimmed element text. Never empty.
    pub text: String,
    /// Display label of the source site.
    pub source: String,
}

/// HTTP client for headline fetching, with per-attempt timeout and a
/// fixed retry policy taken from [`Config`].
pub struct FetchClient {
    client: reqwest::Client,
    attempts: u32,
    retry_delay: Duration,
}

impl FetchClient {
    /// Build a client from the service configuration.
    pub fn new(config: &Config) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent("newsmatch/0.1 (headline similarity)")
            .timeout(config.fetch_timeout)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            attempts: config.fetch_attempts.max(1),
            retry_delay: config.retry_delay,
        })
    }

    /// Fetch one source's front page and extract its headlines.
    ///
    /// Retries transport failures (connect errors, timeouts, non-2xx
    /// responses) up to the configured attempt count, sleeping between
    /// attempts. After the final failure this returns an empty vector —
    /// it never returns an error.
    pub async fn fetch_headlines(&self, source: &Source) -> Vec<Headline> {
        for attempt in 1..=self.attempts {
            match self.get_body(source.url).await {
                Ok(body) => {
                    let headlines = extract_headlines(&body, source);
                    debug!(
                        source = source.name,
                        count = headlines.len(),
                        "extracted headlines"
                    );
                    return headlines;
                }
                Err(e) => {
                    warn!(
                        source = source.name,
                        attempt,
                        attempts = self.attempts,
                        error = %e,
                        "headline fetch failed"
                    );
                    if attempt < self.attempts {
                        tokio::time::sleep(self.retry_delay).await;
                    }
                }
            }
        }

        Vec::new()
    }

    /// GET the page body, treating non-2xx status as an error.
    async fn get_body(&self, url: &str) -> Result<String> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .with_context(|| format!("GET {url} failed"))?;

        if !response.status().is_success() {
            anyhow::bail!("GET {url} returned {}", response.status());
        }

        response
            .text()
            .await
            .with_context(|| format!("Failed to read body from {url}"))
    }
}

/// Scan an HTML document for the source's configured tags and turn each
/// element's visible text into a [`Headline`].
///
/// Text is whitespace-trimmed and lowercased; elements with no residual
/// text are dropped. No deduplication — repeated markup yields repeated
/// records, matching aggregation order downstream.
pub fn extract_headlines(html: &str, source: &Source) -> Vec<Headline> {
    let document = Html::parse_document(html);
    let mut headlines = Vec::new();

    for tag in source.tags.iter().copied() {
        let selector = match Selector::parse(tag) {
            Ok(s) => s,
            Err(e) => {
                warn!(source = source.name, tag, error = %e, "bad tag selector");
                continue;
            }
        };

        for element in document.select(&selector) {
            let text = element
                .text()
                .collect::<String>()
                .trim()
                .to_lowercase();
            if !text.is_empty() {
                headlines.push(Headline {
                    text,
                    source: source.name.to_string(),
                });
            }
        }
    }

    headlines
}
