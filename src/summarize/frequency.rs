// Document-wide word frequencies.

use std::collections::HashMap;

use super::stopwords::StopwordFilter;

/// Occurrence count of every significant token in a document.
///
/// Built once per summarization and read-only afterwards. Lookups for
/// tokens that never occurred return 0 rather than failing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: HashMap<String, u64>,
}

impl FrequencyTable {
    /// Count every significant token in `tokens`. Stopwords and
    /// non-alphanumeric tokens are skipped entirely.
    pub fn build<I, S>(tokens: I, filter: &StopwordFilter) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut counts: HashMap<String, u64> = HashMap::new();
        for token in tokens {
            let token = token.as_ref();
            if filter.is_significant(token) {
                *counts.entry(token.to_lowercase()).or_insert(0) += 1;
            }
        }
        Self { counts }
    }

    /// Count for `token`, or 0 if it never appeared.
    pub fn get(&self, token: &str) -> u64 {
        self.counts.get(token).copied().unwrap_or(0)
    }

    /// Number of distinct significant tokens.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Tokens ordered by count descending, ties alphabetical.
    pub fn top(&self, n: usize) -> Vec<(&str, u64)> {
        let mut ranked: Vec<(&str, u64)> = self
            .counts
            .iter()
            .map(|(token, &count)| (token.as_str(), count))
            .collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        ranked.truncate(n);
        ranked
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_significant_tokens_only() {
        let filter = StopwordFilter::default();
        let tokens = ["cats", "are", "great", ".", "dogs", "are", "great", "too", "."];
        let table = FrequencyTable::build(tokens, &filter);

        assert_eq!(table.get("great"), 2);
        assert_eq!(table.get("cats"), 1);
        assert_eq!(table.get("are"), 0);
        assert_eq!(table.get("."), 0);
        assert_eq!(table.len(), 3);
    }

    #[test]
    fn test_absent_token_is_zero() {
        let table = FrequencyTable::default();
        assert_eq!(table.get("anything"), 0);
        assert!(table.is_empty());
    }

    #[test]
    fn test_all_stopwords_gives_empty_table() {
        let filter = StopwordFilter::default();
        let table = FrequencyTable::build(["the", "and", "of", ","], &filter);
        assert!(table.is_empty());
    }

    #[test]
    fn test_top_ranks_by_count_then_token() {
        let filter = StopwordFilter::from_words(&[]);
        let table = FrequencyTable::build(["b", "a", "c", "c", "a"], &filter);
        assert_eq!(table.top(2), vec![("a", 2), ("c", 2)]);
        assert_eq!(table.top(10).len(), 3);
    }
}
