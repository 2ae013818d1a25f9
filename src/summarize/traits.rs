// Summarizer trait: the seam between request handling and the algorithm.
//
// The CLI and the web server only talk to this trait, so a different
// selection strategy can be dropped in without touching either of them.

use super::Summary;

/// Produces an extractive summary of a plain-text document.
///
/// Implementations never fail: degenerate input (empty text, a request for
/// zero or negative sentences) yields an empty summary.
pub trait SentenceSummarizer: Send + Sync {
    /// Summarize `text` down to at most `num_sentences` of its sentences.
    fn summarize(&self, text: &str, num_sentences: i64) -> Summary;
}
