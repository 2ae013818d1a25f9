// Output formatting: terminal display of summaries.

pub mod terminal;

/// Collapse whitespace runs and cut to at most `max_chars` characters,
/// appending "..." if anything was cut.
///
/// Counts characters, not bytes, so multi-byte text never splits mid-char.
pub fn preview(text: &str, max_chars: usize) -> String {
    let collapsed = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if collapsed.chars().count() <= max_chars {
        collapsed
    } else {
        let truncated: String = collapsed.chars().take(max_chars).collect();
        format!("{}...", truncated.trim_end())
    }
}
