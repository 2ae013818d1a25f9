// Stopword filter: decides which tokens count toward frequency scoring.
//
// The filter is built once at startup and never mutated afterwards, so a
// single instance can be shared across threads and requests without locking.
// Word lists are NLTK's, shipped by the stop-words crate's `nltk` feature.

use std::borrow::Cow;
use std::collections::HashSet;

use stop_words::{get, LANGUAGE};
use tracing::debug;

/// Immutable set of stopwords for one language.
#[derive(Debug, Clone)]
pub struct StopwordFilter {
    /// Lowercase stopwords
    words: HashSet<String>,
}

impl Default for StopwordFilter {
    fn default() -> Self {
        Self::new("english")
    }
}

impl StopwordFilter {
    /// Load the stopword set for `language` (name or ISO code).
    ///
    /// Unknown languages fall back to English.
    pub fn new(language: &str) -> Self {
        let words: HashSet<String> = get(language_for(language))
            .iter()
            .map(|w| w.trim().to_lowercase())
            .filter(|w| !w.is_empty())
            .collect();

        debug!(language, words = words.len(), "Loaded stopword set");
        Self { words }
    }

    /// Build a filter from an explicit word list (case-insensitive).
    pub fn from_words(words: &[&str]) -> Self {
        Self {
            words: words.iter().map(|w| w.to_lowercase()).collect(),
        }
    }

    /// True if `token` should contribute to frequency scoring: it must be
    /// non-empty, purely alphanumeric, and not a stopword.
    pub fn is_significant(&self, token: &str) -> bool {
        let normalized: Cow<'_, str> = if token.chars().any(char::is_uppercase) {
            Cow::Owned(token.to_lowercase())
        } else {
            Cow::Borrowed(token)
        };

        is_alphanumeric(&normalized) && !self.words.contains(normalized.as_ref())
    }

    /// True if `word` is in the stopword set, ignoring case.
    pub fn is_stopword(&self, word: &str) -> bool {
        self.words.contains(&word.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Non-empty and every character is a letter or digit in any script.
fn is_alphanumeric(token: &str) -> bool {
    !token.is_empty() && token.chars().all(char::is_alphanumeric)
}

fn language_for(name: &str) -> LANGUAGE {
    match name.trim().to_lowercase().as_str() {
        "en" | "english" => LANGUAGE::English,
        "de" | "german" => LANGUAGE::German,
        "fr" | "french" => LANGUAGE::French,
        "es" | "spanish" => LANGUAGE::Spanish,
        "it" | "italian" => LANGUAGE::Italian,
        "pt" | "portuguese" => LANGUAGE::Portuguese,
        "nl" | "dutch" => LANGUAGE::Dutch,
        "ru" | "russian" => LANGUAGE::Russian,
        "sv" | "swedish" => LANGUAGE::Swedish,
        "no" | "norwegian" => LANGUAGE::Norwegian,
        "da" | "danish" => LANGUAGE::Danish,
        "fi" | "finnish" => LANGUAGE::Finnish,
        _ => LANGUAGE::English,
    }
}
