// POST /api/summarize (also /summarize): summarize an uploaded file, a URL,
// or raw text.
//
// Accepts multipart/form-data with any of the fields `file`, `url`, `text`
// plus an optional `num_sentences`. Returns 200 {"summary": ...}, 400
// {"error": ...} when the input can't be turned into text, and 500 if
// summarization itself blows up.

use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use tracing::{error, warn};

use crate::request::{parse_num_sentences, SummaryRequest, UploadedFile};
use crate::summarize::traits::SentenceSummarizer;
use crate::web::{api_error, AppState};

/// Raw form fields before defaulting.
#[derive(Debug, Default)]
struct SummaryForm {
    file: Option<UploadedFile>,
    url: Option<String>,
    text: Option<String>,
    num_sentences: Option<String>,
}

impl SummaryForm {
    fn into_request(self, default_sentences: i64) -> SummaryRequest {
        SummaryRequest {
            num_sentences: parse_num_sentences(self.num_sentences.as_deref(), default_sentences),
            file: self.file,
            url: self.url,
            text: self.text,
        }
    }
}

pub async fn summarize(State(state): State<AppState>, multipart: Multipart) -> Response {
    let form = match read_form(multipart).await {
        Ok(form) => form,
        Err(message) => {
            warn!(%message, "Rejected malformed upload");
            return api_error(StatusCode::BAD_REQUEST, &message);
        }
    };

    let request = form.into_request(state.config.default_sentences);

    let text = match request.resolve_text(&state.http).await {
        Ok(text) => text,
        Err(e) => {
            warn!(error = %e, "Could not resolve summary input");
            return api_error(StatusCode::BAD_REQUEST, &e.to_string());
        }
    };

    let summarizer = state.summarizer.clone();
    let num_sentences = request.num_sentences;
    let chars = text.len();
    let result =
        tokio::task::spawn_blocking(move || summarizer.summarize(&text, num_sentences)).await;

    match result {
        Ok(summary) => {
            tracing::info!(
                chars,
                num_sentences,
                summary_chars = summary.text.len(),
                "Generated summary"
            );
            Json(serde_json::json!({ "summary": summary.text })).into_response()
        }
        Err(e) => {
            error!(error = %e, "Summarization task failed");
            api_error(
                StatusCode::INTERNAL_SERVER_ERROR,
                "An internal server error occurred",
            )
        }
    }
}

async fn read_form(mut multipart: Multipart) -> Result<SummaryForm, String> {
    let mut form = SummaryForm::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| format!("Multipart error: {e}"))?
    {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "file" => {
                let filename = field.file_name().unwrap_or_default().to_string();
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| format!("Failed to read file: {e}"))?;
                form.file = Some(UploadedFile {
                    filename,
                    bytes: bytes.to_vec(),
                });
            }
            "url" | "text" | "num_sentences" => {
                let value = field
                    .text()
                    .await
                    .map_err(|e| format!("Failed to read field {name}: {e}"))?;
                match name.as_str() {
                    "url" => form.url = Some(value),
                    "text" => form.text = Some(value),
                    _ => form.num_sentences = Some(value),
                }
            }
            _ => {}
        }
    }

    Ok(form)
}
