// Fetch a web page and extract its readable text.

use std::time::Duration;

use anyhow::{Context, Result};
use tracing::{info, warn};

use super::html::extract_main_text;
use super::ExtractError;

const USER_AGENT: &str = concat!("gist/", env!("CARGO_PKG_VERSION"), " (extractive-summarizer)");

/// Build the shared HTTP client used for URL summaries.
pub fn build_http_client(timeout: Duration) -> Result<reqwest::Client> {
    reqwest::Client::builder()
        .user_agent(USER_AGENT)
        .timeout(timeout)
        .build()
        .context("Failed to build HTTP client")
}

/// Download `url` and return the text of its main content.
///
/// Network errors, non-2xx responses and pages without any paragraph or
/// heading text all surface as `ExtractError::Extraction`.
pub async fn fetch_text(client: &reqwest::Client, url: &str) -> Result<String, ExtractError> {
    let html = match download(client, url).await {
        Ok(html) => html,
        Err(e) => {
            warn!(url, error = %format!("{e:#}"), "Failed to fetch URL");
            return Err(fetch_failed());
        }
    };

    let text = extract_main_text(&html).map_err(|e| {
        warn!(url, error = %format!("{e:#}"), "Failed to parse URL content");
        fetch_failed()
    })?;

    if text.trim().is_empty() {
        warn!(url, "Page had no extractable text");
        return Err(fetch_failed());
    }

    info!(url, chars = text.len(), "Fetched text from URL");
    Ok(text)
}

async fn download(client: &reqwest::Client, url: &str) -> Result<String> {
    let response = client
        .get(url)
        .send()
        .await
        .with_context(|| format!("Request to {url} failed"))?;

    if !response.status().is_success() {
        anyhow::bail!("{url} returned {}", response.status());
    }

    response
        .text()
        .await
        .context("Failed to read response body")
}

fn fetch_failed() -> ExtractError {
    ExtractError::Extraction("Failed to fetch or parse content from URL".to_string())
}
