use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;

use gist::config::Config;
use gist::extract::fetch::build_http_client;
use gist::output::terminal;
use gist::request::{SummaryRequest, UploadedFile};
use gist::summarize::Summarizer;

/// Gist: extractive summaries by word frequency.
///
/// Picks the sentences whose words occur most often across the document and
/// prints them in their original order.
#[derive(Parser)]
#[command(name = "gist", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Summarize a file, a web page, inline text, or stdin
    Summarize {
        #[command(flatten)]
        source: SourceArgs,

        /// Number of sentences to keep (default: GIST_DEFAULT_SENTENCES or 5)
        #[arg(short = 'n', long, allow_negative_numbers = true)]
        sentences: Option<i64>,

        /// Print {"summary": ...} instead of formatted output
        #[arg(long)]
        json: bool,
    },

    /// Show the most frequent significant words of a document
    Words {
        #[command(flatten)]
        source: SourceArgs,

        /// How many words to list
        #[arg(long, default_value = "15")]
        top: usize,
    },

    /// Show stopword set size, or check whether a word counts toward scoring
    Stopwords {
        /// Word to check
        #[arg(long)]
        check: Option<String>,
    },

    /// Run the HTTP summarization server
    #[cfg(feature = "web")]
    Serve {
        /// Port to listen on (default: GIST_PORT or 5000)
        #[arg(long)]
        port: Option<u16>,

        /// Address to bind (default: GIST_BIND or 0.0.0.0)
        #[arg(long)]
        bind: Option<String>,
    },
}

/// Where the document comes from. With none of these, stdin is read.
#[derive(Args)]
struct SourceArgs {
    /// Path to a .txt, .pdf or .docx file
    #[arg(long, conflicts_with_all = ["url", "text"])]
    file: Option<PathBuf>,

    /// Web page to fetch
    #[arg(long, conflicts_with = "text")]
    url: Option<String>,

    /// Text to summarize
    #[arg(long)]
    text: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Logs go to stderr so --json output stays clean
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("gist=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = Config::load()?;
    let summarizer = config.build_summarizer();
    info!(
        language = %config.language,
        stopwords = summarizer.stopwords().len(),
        "Summarizer ready"
    );

    match cli.command {
        Commands::Summarize {
            source,
            sentences,
            json,
        } => {
            let num_sentences = sentences.unwrap_or(config.default_sentences);
            let label = source.label();
            let request = build_request(source, num_sentences)?;
            let http = build_http_client(config.fetch_timeout)?;

            let spinner = (!json && request.url.is_some()).then(fetch_spinner);
            let result = request.run(&summarizer, &http).await;
            if let Some(pb) = spinner {
                pb.finish_and_clear();
            }
            let summary = result?;

            if json {
                println!(
                    "{}",
                    serde_json::to_string(&serde_json::json!({ "summary": summary.text }))?
                );
            } else {
                terminal::display_summary(&summary, &label);
            }
        }

        Commands::Words { source, top } => {
            let request = build_request(source, 0)?;
            let http = build_http_client(config.fetch_timeout)?;
            let text = request.resolve_text(&http).await?;
            show_top_words(&summarizer, &text, top);
        }

        Commands::Stopwords { check } => match check {
            Some(word) => {
                let significant = summarizer.stopwords().is_significant(&word);
                terminal::display_word_check(&word, significant);
            }
            None => {
                println!(
                    "Stopword set: {} words ({})",
                    summarizer.stopwords().len(),
                    config.language
                );
                println!("{}", "Set GIST_LANGUAGE to change it.".dimmed());
            }
        },

        #[cfg(feature = "web")]
        Commands::Serve { port, bind } => {
            let port = port.unwrap_or(config.port);
            let bind = bind.unwrap_or_else(|| config.bind.clone());
            let state = gist::web::AppState::new(config, summarizer)?;
            gist::web::run_server(state, &bind, port).await?;
        }
    }

    Ok(())
}

impl SourceArgs {
    fn label(&self) -> String {
        match (&self.file, &self.url, &self.text) {
            (Some(path), _, _) => path.display().to_string(),
            (_, Some(url), _) => url.clone(),
            (_, _, Some(_)) => "text".to_string(),
            _ => "stdin".to_string(),
        }
    }
}

/// Turn CLI source flags into a request, reading the file or stdin up front.
fn build_request(source: SourceArgs, num_sentences: i64) -> Result<SummaryRequest> {
    let mut request = SummaryRequest {
        num_sentences,
        ..Default::default()
    };

    if let Some(path) = source.file {
        let bytes =
            std::fs::read(&path).with_context(|| format!("Failed to read {}", path.display()))?;
        let filename = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        request.file = Some(UploadedFile { filename, bytes });
    } else if source.url.is_some() {
        request.url = source.url;
    } else if source.text.is_some() {
        request.text = source.text;
    } else {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("Failed to read stdin")?;
        request.text = Some(text);
    }

    Ok(request)
}

fn fetch_spinner() -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("  {spinner} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.set_message("Fetching page...");
    pb.enable_steady_tick(std::time::Duration::from_millis(100));
    pb
}

fn show_top_words(summarizer: &Summarizer, text: &str, top: usize) {
    let table = summarizer.frequencies(text);
    if table.is_empty() {
        println!("No significant words found.");
        return;
    }

    println!(
        "\n{}",
        format!("=== Top words ({} distinct) ===", table.len()).bold()
    );
    for (i, (word, count)) in table.top(top).into_iter().enumerate() {
        println!("  {:>3}. {:<24} {}", i + 1, word, count.to_string().cyan());
    }
    println!();
}
