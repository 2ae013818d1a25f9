// PDF text extraction via the pdf-extract crate.

use anyhow::{anyhow, Result};

/// Extract the text of every page, one line per non-empty text line.
pub fn extract_text(bytes: &[u8]) -> Result<String> {
    let raw = pdf_extract::extract_text_from_mem(bytes).map_err(|e| anyhow!("{e}"))?;
    Ok(tidy_lines(&raw))
}

/// Trim every line and drop the blank ones that separate pages and blocks.
fn tidy_lines(raw: &str) -> String {
    raw.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}
