// Summary requests: resolving user input into one document and a count.
//
// A request carries any of an uploaded file, a URL, or raw text, plus an
// optional sentence count. The file wins over the URL, which wins over the
// text. Resolution produces the plain text handed to the summarizer.

use tracing::{info, warn};

use crate::extract::fetch::fetch_text;
use crate::extract::{extract_bytes, ExtractError, SourceFormat};
use crate::summarize::traits::SentenceSummarizer;
use crate::summarize::Summary;

/// An uploaded document.
#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub filename: String,
    pub bytes: Vec<u8>,
}

/// Everything a caller can send to get a summary.
#[derive(Debug, Clone, Default)]
pub struct SummaryRequest {
    pub file: Option<UploadedFile>,
    pub url: Option<String>,
    pub text: Option<String>,
    pub num_sentences: i64,
}

/// Parse a sentence count supplied as text, falling back to `default` when
/// it's missing or not an integer. Negative values pass through; the
/// summarizer clamps them.
pub fn parse_num_sentences(raw: Option<&str>, default: i64) -> i64 {
    match raw.map(str::trim) {
        None | Some("") => default,
        Some(value) => value.parse().unwrap_or_else(|_| {
            warn!(value, default, "Invalid num_sentences value, using default");
            default
        }),
    }
}

impl SummaryRequest {
    /// Produce the document text, fetching or extracting as needed.
    pub async fn resolve_text(&self, http: &reqwest::Client) -> Result<String, ExtractError> {
        let text = if let Some(file) = self.file.as_ref().filter(|f| !f.filename.is_empty()) {
            info!(filename = %file.filename, bytes = file.bytes.len(), "Processing uploaded file");
            let format = SourceFormat::from_filename(&file.filename)?;
            extract_bytes(format, &file.bytes)?
        } else if let Some(url) = non_empty(&self.url) {
            info!(url, "Fetching URL content");
            fetch_text(http, url).await?
        } else if let Some(text) = non_empty(&self.text) {
            info!(chars = text.len(), "Processing text input");
            text.to_string()
        } else {
            return Err(ExtractError::Validation(
                "No file, text, or URL provided".to_string(),
            ));
        };

        if text.trim().is_empty() {
            return Err(ExtractError::Validation(
                "Extracted content is empty or could not be processed".to_string(),
            ));
        }
        Ok(text)
    }

    /// Resolve the document and summarize it.
    pub async fn run(
        &self,
        summarizer: &dyn SentenceSummarizer,
        http: &reqwest::Client,
    ) -> Result<Summary, ExtractError> {
        let text = self.resolve_text(http).await?;

        info!(
            chars = text.len(),
            num_sentences = self.num_sentences,
            "Summarizing text"
        );
        let summary = summarizer.summarize(&text, self.num_sentences);
        info!(chars = summary.text.len(), "Generated summary");

        Ok(summary)
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::summarize::Summarizer;

    fn client() -> reqwest::Client {
        reqwest::Client::new()
    }

    #[test]
    fn test_parse_num_sentences() {
        assert_eq!(parse_num_sentences(None, 5), 5);
        assert_eq!(parse_num_sentences(Some(""), 5), 5);
        assert_eq!(parse_num_sentences(Some(" 3 "), 5), 3);
        assert_eq!(parse_num_sentences(Some("-2"), 5), -2);
        assert_eq!(parse_num_sentences(Some("three"), 5), 5);
        assert_eq!(parse_num_sentences(Some("2.5"), 5), 5);
    }

    #[tokio::test]
    async fn test_nothing_supplied() {
        let err = SummaryRequest::default().resolve_text(&client()).await.unwrap_err();
        assert_eq!(
            err,
            ExtractError::Validation("No file, text, or URL provided".to_string())
        );
    }

    #[tokio::test]
    async fn test_whitespace_text_counts_as_missing() {
        let req = SummaryRequest {
            text: Some("   ".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            req.resolve_text(&client()).await,
            Err(ExtractError::Validation(_))
        ));
    }

    #[tokio::test]
    async fn test_file_takes_precedence_over_text() {
        let req = SummaryRequest {
            file: Some(UploadedFile {
                filename: "notes.txt".to_string(),
                bytes: b"From the file.".to_vec(),
            }),
            text: Some("From the form.".to_string()),
            num_sentences: 5,
            ..Default::default()
        };
        assert_eq!(req.resolve_text(&client()).await.unwrap(), "From the file.");
    }

    #[tokio::test]
    async fn test_unnamed_file_is_ignored() {
        let req = SummaryRequest {
            file: Some(UploadedFile {
                filename: String::new(),
                bytes: b"ignored".to_vec(),
            }),
            text: Some("Used instead.".to_string()),
            ..Default::default()
        };
        assert_eq!(req.resolve_text(&client()).await.unwrap(), "Used instead.");
    }

    #[tokio::test]
    async fn test_empty_file_is_validation_error() {
        let req = SummaryRequest {
            file: Some(UploadedFile {
                filename: "blank.txt".to_string(),
                bytes: b"\n \n".to_vec(),
            }),
            ..Default::default()
        };
        assert_eq!(
            req.resolve_text(&client()).await.unwrap_err(),
            ExtractError::Validation(
                "Extracted content is empty or could not be processed".to_string()
            )
        );
    }

    #[tokio::test]
    async fn test_unsupported_upload() {
        let req = SummaryRequest {
            file: Some(UploadedFile {
                filename: "sheet.xlsx".to_string(),
                bytes: vec![1, 2, 3],
            }),
            ..Default::default()
        };
        assert!(matches!(
            req.resolve_text(&client()).await,
            Err(ExtractError::UnsupportedFormat(ext)) if ext == ".xlsx"
        ));
    }

    #[tokio::test]
    async fn test_run_summarizes_text() {
        let req = SummaryRequest {
            text: Some("Cats are great. Dogs are great too. Fish swim in water.".to_string()),
            num_sentences: 1,
            ..Default::default()
        };
        let summary = req.run(&Summarizer::default(), &client()).await.unwrap();
        assert_eq!(summary.text, "Cats are great.");
        assert_eq!(summary.total_sentences, 3);
    }
}
