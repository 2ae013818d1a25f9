// Colored terminal output for summaries and stopword checks.

use colored::Colorize;

use super::preview;
use crate::summarize::Summary;

/// Print a summary with a header showing how much of the document was kept.
pub fn display_summary(summary: &Summary, source: &str) {
    if summary.total_sentences == 0 {
        println!("{}", "No sentences found to summarize.".yellow());
        return;
    }

    println!(
        "\n{}",
        format!(
            "=== Summary of {} ({} of {} sentences) ===",
            source,
            summary.selected.len(),
            summary.total_sentences
        )
        .bold()
    );
    println!();

    if summary.is_empty() {
        println!("  {}", "(empty summary: requested 0 sentences)".dimmed());
        println!();
        return;
    }

    println!("{}", summary.text);
    println!();

    println!("{}", "Sentence scores:".dimmed());
    for sentence in &summary.selected {
        println!(
            "  {:>4}. {:>6}  {}",
            sentence.index + 1,
            sentence.score.to_string().cyan(),
            preview(&sentence.text, 60).dimmed()
        );
    }
    println!();
}

/// Report whether a word counts toward scoring.
pub fn display_word_check(word: &str, significant: bool) {
    if significant {
        println!("{} is {}", word.bold(), "significant".green());
    } else {
        println!("{} is {}", word.bold(), "excluded (stopword or non-alphanumeric)".red());
    }
}
