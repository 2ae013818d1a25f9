use std::env;
use std::time::Duration;

use anyhow::{Context, Result};

use crate::summarize::stopwords::StopwordFilter;
use crate::summarize::tokenizer::Tokenizer;
use crate::summarize::{Summarizer, DEFAULT_NUM_SENTENCES};

/// Central configuration loaded from environment variables.
///
/// The .env file is loaded automatically at startup via dotenvy, so every
/// setting can live there instead of the shell environment.
#[derive(Debug, Clone)]
pub struct Config {
    /// Stopword language, name or ISO code (GIST_LANGUAGE, default "english")
    pub language: String,
    /// Sentences returned when a request doesn't specify a count
    pub default_sentences: i64,
    /// Timeout for fetching pages to summarize
    pub fetch_timeout: Duration,
    /// Largest accepted upload body for the web server
    #[cfg(feature = "web")]
    pub max_upload_bytes: usize,
    /// Address the web server binds to
    #[cfg(feature = "web")]
    pub bind: String,
    #[cfg(feature = "web")]
    pub port: u16,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Everything has a default. A malformed sentence count falls back to the
    /// default; malformed numeric server settings are reported as errors.
    pub fn load() -> Result<Self> {
        let default_sentences = env::var("GIST_DEFAULT_SENTENCES")
            .ok()
            .and_then(|v| v.trim().parse().ok())
            .unwrap_or(DEFAULT_NUM_SENTENCES);

        let fetch_timeout_secs: u64 = match env::var("GIST_FETCH_TIMEOUT_SECS") {
            Ok(v) => v
                .trim()
                .parse()
                .with_context(|| format!("GIST_FETCH_TIMEOUT_SECS must be a whole number, got {v:?}"))?,
            Err(_) => 10,
        };

        #[cfg(feature = "web")]
        let max_upload_bytes: usize = match env::var("GIST_MAX_UPLOAD_BYTES") {
            Ok(v) => v
                .trim()
                .parse()
                .with_context(|| format!("GIST_MAX_UPLOAD_BYTES must be a byte count, got {v:?}"))?,
            Err(_) => 16 * 1024 * 1024,
        };

        #[cfg(feature = "web")]
        let port: u16 = match env::var("GIST_PORT") {
            Ok(v) => v
                .trim()
                .parse()
                .with_context(|| format!("GIST_PORT must be a port number, got {v:?}"))?,
            Err(_) => 5000,
        };

        Ok(Self {
            language: env::var("GIST_LANGUAGE").unwrap_or_else(|_| "english".to_string()),
            default_sentences,
            fetch_timeout: Duration::from_secs(fetch_timeout_secs),
            #[cfg(feature = "web")]
            max_upload_bytes,
            #[cfg(feature = "web")]
            bind: env::var("GIST_BIND").unwrap_or_else(|_| "0.0.0.0".to_string()),
            #[cfg(feature = "web")]
            port,
        })
    }

    /// Build the summarizer for this configuration.
    ///
    /// Loads the stopword set once; the returned summarizer is immutable and
    /// meant to be shared for the life of the process.
    pub fn build_summarizer(&self) -> Summarizer {
        Summarizer::new(
            Tokenizer::default(),
            StopwordFilter::new(&self.language),
        )
    }
}
