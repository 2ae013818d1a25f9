// Sentence and word tokenization.
//
// Sentence boundaries come from Unicode sentence segmentation (UAX #29),
// which already keeps decimals like "3.14" and lowercase continuations like
// "e.g. apples" together. UAX #29 still breaks after titles ("Dr. Smith") and
// initials ("John F. Kennedy"), so adjacent fragments are re-joined when the
// earlier one ends in a known abbreviation, a dotted acronym, or an initial
// that follows a capitalized name.

use std::collections::HashSet;

use serde::Serialize;
use unicode_segmentation::UnicodeSegmentation;

/// Titles and short forms that are almost always followed by more of the
/// same sentence.
const DEFAULT_ABBREVIATIONS: &[&str] = &[
    "mr", "mrs", "ms", "dr", "prof", "sr", "jr", "st", "mt", "vs", "fig", "gen", "col", "lt",
    "sgt", "capt", "gov", "sen", "rep", "rev", "hon", "approx", "dept", "cf", "ca",
];

/// A sentence in its original position within the document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Sentence {
    /// 0-based position in the document
    pub index: usize,
    /// The sentence text, trimmed of surrounding whitespace
    pub text: String,
}

#[derive(Debug, Clone)]
pub struct Tokenizer {
    /// Lowercase abbreviations without the trailing period
    abbreviations: HashSet<String>,
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::with_abbreviations(DEFAULT_ABBREVIATIONS)
    }
}

impl Tokenizer {
    pub fn with_abbreviations(abbreviations: &[&str]) -> Self {
        Self {
            abbreviations: abbreviations
                .iter()
                .map(|a| a.trim_end_matches('.').to_lowercase())
                .collect(),
        }
    }

    /// Split a document into sentences, in reading order.
    ///
    /// Empty or whitespace-only input yields no sentences.
    pub fn segment(&self, text: &str) -> Vec<Sentence> {
        let fragments: Vec<&str> = text.split_sentence_bounds().collect();

        let mut sentences = Vec::new();
        let mut start = 0;
        let mut end = 0;

        for (i, fragment) in fragments.iter().enumerate() {
            end += fragment.len();

            if i + 1 < fragments.len() && self.continues_into_next(&text[start..end]) {
                continue;
            }

            let sentence = text[start..end].trim();
            if !sentence.is_empty() {
                sentences.push(Sentence {
                    index: sentences.len(),
                    text: sentence.to_string(),
                });
            }
            start = end;
        }

        sentences
    }

    /// Split a sentence into lowercase word and punctuation tokens, in order.
    /// Whitespace is dropped.
    pub fn words(&self, sentence: &str) -> Vec<String> {
        sentence
            .split_word_bounds()
            .filter(|token| !token.trim().is_empty())
            .map(str::to_lowercase)
            .collect()
    }

    /// Whether the pending text ends in a period that does not close a
    /// sentence, so the next fragment belongs to the same sentence.
    fn continues_into_next(&self, pending: &str) -> bool {
        let Some(body) = pending.trim_end().strip_suffix('.') else {
            return false;
        };

        let mut words = body.rsplit(|c: char| c.is_whitespace() || c == '(' || c == '"');
        let last = words.next().unwrap_or("");

        if is_dotted_acronym(last) || self.abbreviations.contains(&last.to_lowercase()) {
            return true;
        }

        if !is_initial(last) {
            return false;
        }

        // "John F. Kennedy", "George R. R. Martin": initials directly after a
        // capitalized name. "vitamin C." and a bare "A. B. C." run both end here.
        words
            .filter(|w| !w.is_empty())
            .find(|w| !is_initial(w.trim_end_matches('.')))
            .is_some_and(starts_uppercase)
    }
}

/// A single uppercase letter, e.g. the "F" of "John F. Kennedy".
fn is_initial(word: &str) -> bool {
    let mut chars = word.chars();
    matches!((chars.next(), chars.next()), (Some(c), None) if c.is_uppercase())
}

/// "U.S", "e.g", "Ph.D" (trailing period already stripped). Ellipses don't
/// qualify because they contain empty segments.
fn is_dotted_acronym(word: &str) -> bool {
    word.contains('.')
        && word
            .split('.')
            .all(|part| !part.is_empty() && part.chars().all(char::is_alphabetic))
}

fn starts_uppercase(word: &str) -> bool {
    word.chars().next().is_some_and(char::is_uppercase)
}
