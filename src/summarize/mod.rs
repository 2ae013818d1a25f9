// Extractive summarization: word-frequency sentence scoring.
//
// Pipeline: tokenizer -> frequency table -> sentence selection -> assembly.
// `Summarizer` owns the immutable pieces (tokenizer and stopword set) and is
// built once at startup, then shared by reference or `Arc`.

pub mod assembler;
pub mod frequency;
pub mod selector;
pub mod stopwords;
pub mod tokenizer;
pub mod traits;

use serde::Serialize;
use tracing::debug;

use self::assembler::assemble;
use self::frequency::FrequencyTable;
use self::selector::SentenceSelector;
use self::stopwords::StopwordFilter;
use self::tokenizer::Tokenizer;
use self::traits::SentenceSummarizer;

/// Default number of sentences when the caller doesn't ask for a count.
pub const DEFAULT_NUM_SENTENCES: i64 = 5;

/// The result of one summarization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    /// Selected sentences joined by single spaces, in document order
    pub text: String,
    /// Selected sentences with their scores, in document order
    pub selected: Vec<SelectedSentence>,
    /// Number of sentences found in the input
    pub total_sentences: usize,
    /// Number of distinct significant words in the input
    pub distinct_words: usize,
}

/// One sentence kept in a summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectedSentence {
    /// 0-based position in the document
    pub index: usize,
    pub score: u64,
    pub text: String,
}

impl Summary {
    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }
}

/// Frequency-based extractive summarizer.
#[derive(Debug, Clone, Default)]
pub struct Summarizer {
    tokenizer: Tokenizer,
    stopwords: StopwordFilter,
}

impl Summarizer {
    pub fn new(tokenizer: Tokenizer, stopwords: StopwordFilter) -> Self {
        Self {
            tokenizer,
            stopwords,
        }
    }

    pub fn stopwords(&self) -> &StopwordFilter {
        &self.stopwords
    }

    pub fn tokenizer(&self) -> &Tokenizer {
        &self.tokenizer
    }

    /// Summarize and return only the summary text.
    pub fn summarize_text(&self, text: &str, num_sentences: i64) -> String {
        self.summarize(text, num_sentences).text
    }

    /// Word frequencies of a whole document, as used for scoring.
    pub fn frequencies(&self, text: &str) -> FrequencyTable {
        let tokens = self
            .tokenizer
            .segment(text)
            .iter()
            .flat_map(|s| self.tokenizer.words(&s.text))
            .collect::<Vec<_>>();
        FrequencyTable::build(tokens, &self.stopwords)
    }
}

impl SentenceSummarizer for Summarizer {
    fn summarize(&self, text: &str, num_sentences: i64) -> Summary {
        let sentences = self.tokenizer.segment(text);
        let sentence_tokens: Vec<Vec<String>> = sentences
            .iter()
            .map(|s| self.tokenizer.words(&s.text))
            .collect();

        let table = FrequencyTable::build(sentence_tokens.iter().flatten(), &self.stopwords);

        let ranked =
            SentenceSelector::new(&self.stopwords).select(&sentence_tokens, &table, num_sentences);
        let indices: Vec<usize> = ranked.iter().map(|r| r.index).collect();
        let joined = assemble(&indices, &sentences);

        let mut selected: Vec<SelectedSentence> = ranked
            .iter()
            .map(|r| SelectedSentence {
                index: r.index,
                score: r.score,
                text: sentences[r.index].text.clone(),
            })
            .collect();
        selected.sort_by_key(|s| s.index);

        debug!(
            sentences = sentences.len(),
            distinct_words = table.len(),
            requested = num_sentences,
            selected = selected.len(),
            "Summarized document"
        );

        Summary {
            text: joined,
            selected,
            total_sentences: sentences.len(),
            distinct_words: table.len(),
        }
    }
}
