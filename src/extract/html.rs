// HTML main-content extraction.
//
// Prefers the page's <article>, then <main>; without either, falls back to
// the whole document. Only paragraphs and headings are kept, which drops
// most navigation, scripts and boilerplate.

use anyhow::{anyhow, Result};
use scraper::{ElementRef, Html, Selector};

const CONTAINERS: [&str; 2] = ["article", "main"];
const BLOCKS: &str = "p, h1, h2, h3, h4, h5, h6";

/// Paragraph and heading text of the page's main content, joined by spaces.
pub fn extract_main_text(html: &str) -> Result<String> {
    let doc = Html::parse_document(html);
    let blocks = selector(BLOCKS)?;

    let mut container: Option<ElementRef<'_>> = None;
    for name in CONTAINERS {
        if let Some(el) = doc.select(&selector(name)?).next() {
            container = Some(el);
            break;
        }
    }

    let texts: Vec<String> = match container {
        Some(root) => root.select(&blocks).map(element_text).collect(),
        None => doc.select(&blocks).map(element_text).collect(),
    };

    Ok(texts.join(" "))
}

fn selector(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| anyhow!("invalid selector {css:?}: {e:?}"))
}

fn element_text(el: ElementRef<'_>) -> String {
    el.text().collect::<String>()
}
