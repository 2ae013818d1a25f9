// Unit tests for the summarization pipeline.
//
// Covers the behavioral guarantees of Summarizer::summarize: output length,
// document ordering, clamping of the requested count, degenerate documents,
// and tie-breaking at the cutoff.

use gist::summarize::stopwords::StopwordFilter;
use gist::summarize::tokenizer::Tokenizer;
use gist::summarize::traits::SentenceSummarizer;
use gist::summarize::Summarizer;

const DOCUMENTS: &[&str] = &[
    "Cats are great. Dogs are great too. Fish swim in water. Birds fly in the sky.",
    "The committee met on Tuesday. Dr. Lee presented the budget. The budget grew 4.5 percent. \
     Members debated the budget for hours. Nobody objected in the end.",
    "Rust is fast. Rust is safe! Is Rust fun? Many people think Rust is fun.",
    "One sentence only",
    "A. B. C.",
];

fn sentence_count(text: &str) -> usize {
    Tokenizer::default().segment(text).len()
}

// ============================================================
// Output length and ordering
// ============================================================

#[test]
fn output_length_is_clamped_request() {
    let summarizer = Summarizer::default();
    for doc in DOCUMENTS {
        let total = sentence_count(doc);
        for n in -2..=8_i64 {
            let summary = summarizer.summarize(doc, n);
            let expected = n.clamp(0, total as i64) as usize;
            assert_eq!(
                summary.selected.len(),
                expected,
                "doc {doc:?} with n={n} should keep {expected} sentences"
            );
            assert_eq!(summary.total_sentences, total);
        }
    }
}

#[test]
fn output_preserves_document_order() {
    let summarizer = Summarizer::default();
    for doc in DOCUMENTS {
        for n in 1..=5 {
            let summary = summarizer.summarize(doc, n);
            let indices: Vec<usize> = summary.selected.iter().map(|s| s.index).collect();
            let mut sorted = indices.clone();
            sorted.sort_unstable();
            assert_eq!(indices, sorted);

            let joined: Vec<&str> = summary.selected.iter().map(|s| s.text.as_str()).collect();
            assert_eq!(summary.text, joined.join(" "));
        }
    }
}

#[test]
fn non_positive_request_is_empty() {
    let summarizer = Summarizer::default();
    for doc in DOCUMENTS {
        assert_eq!(summarizer.summarize_text(doc, 0), "");
        assert_eq!(summarizer.summarize_text(doc, -5), "");
        assert_eq!(summarizer.summarize_text(doc, i64::MIN), "");
    }
}

#[test]
fn empty_or_whitespace_document_is_empty() {
    let summarizer = Summarizer::default();
    for doc in ["", " ", "\n\n\t  \r\n"] {
        for n in [-1, 0, 1, 5, 100] {
            assert_eq!(summarizer.summarize_text(doc, n), "");
        }
    }
}

#[test]
fn request_beyond_length_returns_whole_document() {
    let summarizer = Summarizer::default();
    let doc = "First line here.\n\nSecond   line follows. Third one ends it.";
    assert_eq!(
        summarizer.summarize_text(doc, 50),
        "First line here. Second   line follows. Third one ends it."
    );
    assert_eq!(summarizer.summarize_text(doc, i64::MAX).len(), 58);
}

// ============================================================
// Scoring
// ============================================================

#[test]
fn all_stopword_document_returns_leading_sentences() {
    let summarizer = Summarizer::default();
    let doc = "It is what it is. They were there. We are here. You and I.";
    let summary = summarizer.summarize(doc, 2);
    assert!(summary.selected.iter().all(|s| s.score == 0));
    assert_eq!(summary.text, "It is what it is. They were there.");
    assert_eq!(summary.distinct_words, 0);
}

#[test]
fn frequent_words_drive_selection() {
    let summarizer = Summarizer::default();
    let doc = "The budget was late. Weather was mild. The budget grew and the budget passed. \
               Lunch was served.";
    let summary = summarizer.summarize(doc, 2);
    assert_eq!(
        summary.text,
        "The budget was late. The budget grew and the budget passed."
    );
}

#[test]
fn longer_sentences_are_favored_by_raw_sums() {
    let summarizer = Summarizer::default();
    let doc = "Apples grow. Apples grow on trees near rivers in valleys. Pears grow.";
    let summary = summarizer.summarize(doc, 1);
    assert_eq!(summary.selected[0].index, 1);
}

#[test]
fn ties_at_cutoff_keep_earliest() {
    let summarizer = Summarizer::default();
    let doc = "Red apples. Green pears. Blue plums.";
    assert_eq!(summarizer.summarize_text(doc, 1), "Red apples.");
    assert_eq!(summarizer.summarize_text(doc, 2), "Red apples. Green pears.");
}

#[test]
fn scoring_is_case_insensitive() {
    let summarizer = Summarizer::default();
    let doc = "Budget talks stalled. BUDGET cuts loom. Rain fell.";
    let summary = summarizer.summarize(doc, 3);
    assert_eq!(summary.selected[0].score, 4);
    assert_eq!(summary.selected[1].score, 4);
    assert_eq!(summary.selected[2].score, 2);
}

// ============================================================
// Scenarios
// ============================================================

#[test]
fn scenario_pets() {
    let summarizer = Summarizer::default();
    let doc = "Cats are great. Dogs are great too. Fish swim in water. Birds fly in the sky.";
    assert_eq!(
        summarizer.summarize_text(doc, 2),
        "Cats are great. Dogs are great too."
    );
}

#[test]
fn scenario_letters() {
    let summarizer = Summarizer::default();
    assert_eq!(summarizer.summarize_text("A. B. C.", 10), "A. B. C.");
}

#[test]
fn scenario_initial_after_lowercase_word() {
    let summarizer = Summarizer::default();
    let doc = "Take vitamin C. It helps a lot. Rest well.";
    let summary = summarizer.summarize(doc, 1);
    assert_eq!(summary.total_sentences, 3);
    assert_eq!(summary.text, "Take vitamin C.");
}

#[test]
fn scenario_empty() {
    assert_eq!(Summarizer::default().summarize_text("", 5), "");
}

// ============================================================
// Shared, immutable configuration
// ============================================================

#[test]
fn summarizer_is_shareable_across_threads() {
    let summarizer = std::sync::Arc::new(Summarizer::default());
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let s = summarizer.clone();
            std::thread::spawn(move || s.summarize_text(DOCUMENTS[0], 2))
        })
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), "Cats are great. Dogs are great too.");
    }
}

#[test]
fn custom_stopwords_change_scores() {
    let summarizer = Summarizer::new(
        Tokenizer::default(),
        StopwordFilter::from_words(&["great"]),
    );
    let doc = "Cats are great. Dogs are great too. Fish fish fish swim.";
    assert_eq!(summarizer.summarize_text(doc, 1), "Fish fish fish swim.");
}

#[test]
fn language_changes_stopwords() {
    let english = Summarizer::new(Tokenizer::default(), StopwordFilter::new("english"));
    let german = Summarizer::new(Tokenizer::default(), StopwordFilter::new("german"));
    let doc = "Der Hund und die Katze. Der Hund schläft.";
    assert_eq!(german.frequencies(doc).get("der"), 0);
    assert_eq!(english.frequencies(doc).get("der"), 2);
    assert_eq!(german.frequencies(doc).get("hund"), 2);
}
