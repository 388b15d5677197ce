use std::env;
use std::time::Duration;

use anyhow::Result;

/// Central configuration loaded from environment variables.
///
/// Everything has a default — the service runs with no configuration at
/// all. The .env file is loaded automatically at startup via dotenvy.
#[derive(Debug, Clone)]
pub struct Config {
    /// Minimum cosine similarity a headline must strictly exceed to be
    /// reported as a match.
    pub similarity_threshold: f64,
    /// Per-attempt HTTP request timeout for headline fetches.
    pub fetch_timeout: Duration,
    /// Total fetch attempts per source before giving up.
    pub fetch_attempts: u32,
    /// Delay between fetch attempts.
    pub retry_delay: Duration,
}

/// Default similarity threshold for match reporting.
pub const DEFAULT_THRESHOLD: f64 = 0.3;

impl Default for Config {
    fn default() -> Self {
        Self {
            similarity_threshold: DEFAULT_THRESHOLD,
            fetch_timeout: Duration::from_secs(10),
            fetch_attempts: 3,
            retry_delay: Duration::from_secs(2),
        }
    }
}

impl Config {
    /// Load configuration from environment variables, falling back to the
    /// defaults for anything unset or unparseable.
    pub fn load() -> Result<Self> {
        let defaults = Self::default();

        Ok(Self {
            similarity_threshold: env_parse(
                "NEWSMATCH_THRESHOLD",
                defaults.similarity_threshold,
            ),
            fetch_timeout: Duration::from_secs(env_parse(
                "NEWSMATCH_TIMEOUT_SECS",
                defaults.fetch_timeout.as_secs(),
            )),
            fetch_attempts: env_parse("NEWSMATCH_RETRIES", defaults.fetch_attempts),
            retry_delay: Duration::from_secs(env_parse(
                "NEWSMATCH_RETRY_DELAY_SECS",
                defaults.retry_delay.as_secs(),
            )),
        })
    }
}

/// Read an env var and parse it, falling back to `default` when the
/// variable is missing or doesn't parse.
fn env_parse<T: std::str::FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
