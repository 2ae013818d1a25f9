// Gist: extractive summarization by word frequency
//
// This is the library root. `summarize` holds the algorithm; the other
// modules turn files, web pages and requests into the plain text it needs.

pub mod config;
pub mod extract;
pub mod output;
pub mod request;
pub mod summarize;

#[cfg(feature = "web")]
pub mod web;
