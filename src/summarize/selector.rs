// Sentence scoring and top-N selection.
//
// A sentence scores the sum of the document-wide counts of its significant
// tokens. Raw sums are used on purpose: longer sentences and sentences full
// of globally frequent words rank higher.

use serde::Serialize;

use super::frequency::FrequencyTable;
use super::stopwords::StopwordFilter;

/// A sentence position with its frequency score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RankedSentence {
    pub index: usize,
    pub score: u64,
}

/// Picks the highest-scoring sentences of a document.
pub struct SentenceSelector<'a> {
    filter: &'a StopwordFilter,
}

impl<'a> SentenceSelector<'a> {
    pub fn new(filter: &'a StopwordFilter) -> Self {
        Self { filter }
    }

    /// Score one sentence from its tokens.
    pub fn score(&self, tokens: &[String], table: &FrequencyTable) -> u64 {
        tokens
            .iter()
            .filter(|t| self.filter.is_significant(t))
            .map(|t| table.get(t))
            .sum()
    }

    /// Choose up to `num_sentences` sentences, best first.
    ///
    /// `sentence_tokens[i]` holds the tokens of sentence `i`. The request is
    /// clamped to `[0, sentence count]`. Equal scores keep document order, so
    /// at the cutoff the earlier sentence wins.
    pub fn select(
        &self,
        sentence_tokens: &[Vec<String>],
        table: &FrequencyTable,
        num_sentences: i64,
    ) -> Vec<RankedSentence> {
        let mut ranked: Vec<RankedSentence> = sentence_tokens
            .iter()
            .enumerate()
            .map(|(index, tokens)| RankedSentence {
                index,
                score: self.score(tokens, table),
            })
            .collect();

        let take = clamp_count(num_sentences, ranked.len());
        if take == 0 {
            return Vec::new();
        }

        ranked.sort_by(|a, b| b.score.cmp(&a.score).then(a.index.cmp(&b.index)));
        ranked.truncate(take);
        ranked
    }
}

/// Clamp a requested sentence count to `[0, available]`.
pub fn clamp_count(requested: i64, available: usize) -> usize {
    if requested <= 0 {
        0
    } else {
        usize::try_from(requested).map_or(available, |n| n.min(available))
    }
}
