//! Data models for scraped articles and classified entities.
//!
//! This module defines the two records the application produces:
//! - [`ArticleRecord`]: the structured result of one fetch-and-parse pass
//! - [`EntityBuckets`]: named entities sorted into people, places, and
//!   organisations
//!
//! The JSON key names (`URL`, `Title`, `Date_published`, `Content`) are part
//! of the output contract, hence the `#[serde(rename)]` attributes.

use serde::{Deserialize, Serialize};

/// A single scraped BBC News article.
///
/// Built fresh on every fetch and never mutated afterwards. `content` is the
/// introduction paragraph followed by each qualifying body paragraph joined
/// with `\n`, with a trailing `\n` appended. Title and date are carried
/// verbatim from the markup, whitespace included.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ArticleRecord {
    /// The URL the article was fetched from.
    #[serde(rename = "URL")]
    pub url: String,
    /// The article headline.
    #[serde(rename = "Title")]
    pub title: String,
    /// The publication date as printed on the page (e.g. "11 April 2020").
    #[serde(rename = "Date_published")]
    pub date_published: String,
    /// Newline-joined article body with a trailing newline.
    #[serde(rename = "Content")]
    pub content: String,
}

/// Named entities from one text, partitioned into three buckets.
///
/// Each bucket holds unique strings in first-seen order, and an entity string
/// appears in at most one bucket. Entities whose label falls outside the
/// recognized categories are absent entirely.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct EntityBuckets {
    /// Entities labeled as persons.
    pub people: Vec<String>,
    /// Entities labeled as locations or geopolitical entities.
    pub places: Vec<String>,
    /// Entities labeled as organisations.
    pub organisations: Vec<String>,
}

/// An article record paired with the entities found in its body.
///
/// Produced by the `analyze` subcommand; the record's fields are flattened
/// so the output reads as one object.
#[derive(Debug, Serialize)]
pub struct AnalyzedArticle {
    /// The scraped article.
    #[serde(flatten)]
    pub record: ArticleRecord,
    /// Entities extracted from the article's `Content`.
    pub entities: EntityBuckets,
}
