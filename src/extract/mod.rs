// Text extraction: turns uploads and web pages into plain text.
//
// Everything here runs before the summarizer sees the document. Failures are
// typed so the web layer can map them to status codes; the summarizer itself
// never fails.

pub mod docx;
pub mod fetch;
pub mod html;
pub mod pdf;

use std::path::Path;

use thiserror::Error;
use tracing::info;

/// Why a request could not be turned into text to summarize.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ExtractError {
    /// Nothing usable was supplied, or the extracted text was empty.
    #[error("{0}")]
    Validation(String),
    /// A file or URL was supplied but could not be read or parsed.
    #[error("{0}")]
    Extraction(String),
    /// The uploaded file has an extension we don't handle.
    #[error("Unsupported file type: {0}. Please upload .txt, .pdf, or .docx files.")]
    UnsupportedFormat(String),
}

/// Supported upload formats, chosen by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    Text,
    Pdf,
    Docx,
}

impl SourceFormat {
    /// Detect the format from a file name's extension (case-insensitive).
    pub fn from_filename(name: &str) -> Result<Self, ExtractError> {
        let extension = Path::new(name)
            .extension()
            .map(|e| format!(".{}", e.to_string_lossy().to_lowercase()))
            .unwrap_or_default();

        match extension.as_str() {
            ".txt" => Ok(SourceFormat::Text),
            ".pdf" => Ok(SourceFormat::Pdf),
            ".docx" => Ok(SourceFormat::Docx),
            _ => Err(ExtractError::UnsupportedFormat(extension)),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SourceFormat::Text => "TXT",
            SourceFormat::Pdf => "PDF",
            SourceFormat::Docx => "DOCX",
        }
    }
}

/// Extract plain text from the bytes of an uploaded file.
pub fn extract_bytes(format: SourceFormat, bytes: &[u8]) -> Result<String, ExtractError> {
    let text = match format {
        SourceFormat::Text => String::from_utf8(bytes.to_vec()).map_err(anyhow::Error::from),
        SourceFormat::Pdf => pdf::extract_text(bytes),
        SourceFormat::Docx => docx::extract_text(bytes),
    }
    .map_err(|e| {
        ExtractError::Extraction(format!("Could not process {} file: {e:#}", format.label()))
    })?;

    info!(format = format.label(), chars = text.len(), "Extracted text from file");
    Ok(text)
}
