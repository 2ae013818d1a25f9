// Summary assembly: puts selected sentences back in reading order.

use super::tokenizer::Sentence;

/// Join the selected sentences in original document order, separated by a
/// single space. Indices outside `sentences` are ignored.
pub fn assemble(selected: &[usize], sentences: &[Sentence]) -> String {
    let mut ordered = selected.to_vec();
    ordered.sort_unstable();

    ordered
        .iter()
        .filter_map(|&i| sentences.get(i))
        .map(|s| s.text.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}
