//! # BBC Entities
//!
//! Scrapes BBC News articles into structured JSON records and sorts the
//! named entities found in article text into people, places, and
//! organisations.
//!
//! ## Usage
//!
//! ```sh
//! bbc_entities fetch https://www.bbc.co.uk/news/uk-52255054
//! bbc_entities classify "I work for Amazon."
//! bbc_entities analyze https://www.bbc.co.uk/news/uk-52255054
//! ```
//!
//! ## Architecture
//!
//! Two independent, stateless operations behind one CLI:
//! 1. **Fetch**: download an article page and extract the URL, title,
//!    publication date, and newline-joined body via fixed structural queries
//! 2. **Classify**: run a pretrained NER pipeline over a text and partition
//!    the labeled spans into three buckets via a fixed label table
//!
//! The NER pipeline (rust-bert) is behind the `ner` cargo feature; the model
//! handle is loaded once at startup and reused read-only. Results print to
//! stdout as JSON, one object per line.

use clap::Parser;
use serde::Serialize;
use std::error::Error;
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, fmt as tfmt};

mod cli;

use bbc_entities::scrapers;
use bbc_entities::utils::truncate_for_log;
use cli::{Cli, Command};

#[cfg(feature = "ner")]
use bbc_entities::{entities, models::AnalyzedArticle};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let args = Cli::parse();
    debug!(?args, "Parsed CLI arguments");

    match args.command {
        Command::Fetch { urls } => {
            let records = scrapers::bbc::fetch_articles(&urls).await?;
            for record in &records {
                debug!(
                    url = %record.url,
                    content = %truncate_for_log(&record.content, 120),
                    "Fetched record"
                );
                print_json(record, args.pretty)?;
            }
            info!(count = records.len(), "Fetch complete");
        }
        #[cfg(feature = "ner")]
        Command::Classify { text } => {
            let tagger = load_tagger().await?;
            debug!(text = %truncate_for_log(&text, 120), "Classifying text");
            let buckets = entities::extract_entities(&tagger, &text)?;
            print_json(&buckets, args.pretty)?;
        }
        #[cfg(feature = "ner")]
        Command::Analyze { urls } => {
            let tagger = load_tagger().await?;
            let records = scrapers::bbc::fetch_articles(&urls).await?;
            let total = records.len();
            for record in records {
                let entities = entities::extract_entities(&tagger, &record.content)?;
                print_json(&AnalyzedArticle { record, entities }, args.pretty)?;
            }
            info!(count = total, "Analysis complete");
        }
        #[cfg(not(feature = "ner"))]
        Command::Classify { .. } | Command::Analyze { .. } => {
            return Err(
                "entity classification requires the `ner` feature; rebuild with `--features ner`"
                    .into(),
            );
        }
    }

    Ok(())
}

/// Serialize a value to stdout as one JSON object.
fn print_json<T: Serialize>(value: &T, pretty: bool) -> Result<(), Box<dyn Error>> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{json}");
    Ok(())
}

/// Load the pretrained NER model off the async runtime.
///
/// Model construction is blocking and slow (it downloads weights on first
/// use), so it runs on a blocking thread. The returned handle is read-only
/// and serves every classification in the process.
#[cfg(feature = "ner")]
async fn load_tagger() -> Result<entities::BertTagger, Box<dyn Error>> {
    info!("Loading NER model (first run downloads the weights)");
    let tagger = tokio::task::spawn_blocking(entities::BertTagger::new).await??;
    Ok(tagger)
}
