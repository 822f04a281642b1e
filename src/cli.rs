//! Command-line interface definitions.
//!
//! One subcommand per operation: `fetch` for scraping, `classify` for
//! entity bucketing, and `analyze` for the two chained together. The
//! `classify` and `analyze` subcommands need the `ner` cargo feature.

use clap::{Parser, Subcommand};

/// Command-line arguments.
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Pretty-print JSON output
    #[arg(short, long, global = true)]
    pub pretty: bool,
}

/// The operation to run.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Fetch BBC article URLs and print one JSON record per article
    Fetch {
        /// Article URLs, fetched in order
        #[arg(required = true)]
        urls: Vec<String>,
    },
    /// Sort the named entities in a text into people, places, and organisations
    Classify {
        /// The text to classify
        text: String,
    },
    /// Fetch articles and classify the entities in each article body
    Analyze {
        /// Article URLs, fetched in order
        #[arg(required = true)]
        urls: Vec<String>,
    },
}
