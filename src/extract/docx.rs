// DOCX text extraction.
//
// A .docx file is a zip archive; the body text lives in word/document.xml as
// <w:p> paragraphs made of <w:t> runs. We only need the text, so the XML is
// scanned with regexes rather than parsed into a tree.

use std::io::{Cursor, Read};
use std::sync::LazyLock;

use anyhow::{Context, Result};
use regex_lite::{Captures, Regex};

const DOCUMENT_XML: &str = "word/document.xml";

static PARAGRAPH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<w:p[ >].*?</w:p>").expect("paragraph pattern"));
static RUN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)<w:t(?:\s[^>]*)?>(.*?)</w:t>|<w:tab/>").expect("run pattern")
});
static ENTITY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"&(#x[0-9a-fA-F]+|#[0-9]+|amp|lt|gt|quot|apos);").expect("entity pattern")
});

/// Extract the text of every non-empty paragraph, one per line.
pub fn extract_text(bytes: &[u8]) -> Result<String> {
    let mut archive =
        zip::ZipArchive::new(Cursor::new(bytes)).context("File is not a valid DOCX archive")?;

    let mut xml = String::new();
    archive
        .by_name(DOCUMENT_XML)
        .with_context(|| format!("DOCX archive has no {DOCUMENT_XML}"))?
        .read_to_string(&mut xml)
        .context("Failed to read DOCX document body")?;

    Ok(paragraphs(&xml).join("\n"))
}

/// Text of each non-empty `<w:p>` paragraph in document order.
pub fn paragraphs(xml: &str) -> Vec<String> {
    let mut out = Vec::new();
    for p in PARAGRAPH.find_iter(xml) {
        let mut text = String::new();
        for caps in RUN.captures_iter(p.as_str()) {
            match caps.get(1) {
                Some(t) => text.push_str(&decode_entities(t.as_str())),
                None => text.push('\t'),
            }
        }
        if !text.trim().is_empty() {
            out.push(text);
        }
    }
    out
}

/// Decode the five predefined XML entities and numeric character references.
fn decode_entities(s: &str) -> String {
    if !s.contains('&') {
        return s.to_string();
    }

    ENTITY
        .replace_all(s, |caps: &Captures| {
            let name = &caps[1];
            let c = match name {
                "amp" => Some('&'),
                "lt" => Some('<'),
                "gt" => Some('>'),
                "quot" => Some('"'),
                "apos" => Some('\''),
                _ => name
                    .strip_prefix("#x")
                    .map(|hex| u32::from_str_radix(hex, 16))
                    .unwrap_or_else(|| name[1..].parse())
                    .ok()
                    .and_then(char::from_u32),
            };
            c.map(String::from).unwrap_or_else(|| caps[0].to_string())
        })
        .into_owned()
}
