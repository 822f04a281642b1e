//! BBC News article scraper.
//!
//! Extracts the headline, printed publication date, and body text from a
//! BBC News article page (e.g. `https://www.bbc.co.uk/news/uk-52255054`)
//! using the `story-body` markup structure.
//!
//! # Body assembly
//!
//! The body is the introduction paragraph (`p.story-body__introduction`)
//! followed by every `p` in the story body that carries neither a `class`
//! nor an `aria-hidden` attribute, joined with `\n` and terminated with a
//! trailing `\n`. Captions, share widgets, and other decorated paragraphs
//! are excluded by that attribute rule.

use crate::models::ArticleRecord;
use crate::scrapers::{ArticleSelectors, NamedSelector, ScrapeError};
use once_cell::sync::Lazy;
use reqwest::get;
use scraper::Html;
use std::error::Error;
use tracing::{debug, info, instrument};
use url::Url;

static SELECTORS: Lazy<ArticleSelectors> = Lazy::new(|| ArticleSelectors {
    title: NamedSelector::parse("h1.story-body__h1"),
    body: NamedSelector::parse("div.story-body"),
    date: NamedSelector::parse("div[data-datetime]"),
    introduction: NamedSelector::parse("p.story-body__introduction"),
    paragraph: NamedSelector::parse("p:not([class]):not([aria-hidden])"),
});

/// Parse a BBC article page into an [`ArticleRecord`].
///
/// Pure function over the markup: identical HTML in, identical record out.
/// Title and date text are taken verbatim, whitespace included.
///
/// # Errors
///
/// Returns [`ScrapeError::MissingElement`] naming the selector that failed
/// to match when the page lacks any of the expected structural elements.
pub fn parse_article(url: &str, html: &str) -> Result<ArticleRecord, ScrapeError> {
    let document = Html::parse_document(html);

    let title = document
        .select(&SELECTORS.title.selector)
        .next()
        .ok_or_else(|| SELECTORS.title.missing())?
        .text()
        .collect::<String>();

    let body = document
        .select(&SELECTORS.body.selector)
        .next()
        .ok_or_else(|| SELECTORS.body.missing())?;

    let date_published = body
        .select(&SELECTORS.date.selector)
        .next()
        .ok_or_else(|| SELECTORS.date.missing())?
        .text()
        .collect::<String>();

    let mut content = body
        .select(&SELECTORS.introduction.selector)
        .next()
        .ok_or_else(|| SELECTORS.introduction.missing())?
        .text()
        .collect::<String>();

    for paragraph in body.select(&SELECTORS.paragraph.selector) {
        content.push('\n');
        content.push_str(&paragraph.text().collect::<String>());
    }
    content.push('\n');

    Ok(ArticleRecord {
        url: url.to_string(),
        title,
        date_published,
        content,
    })
}

/// Fetch a single BBC article and parse it.
///
/// One blocking round trip per call, no retry, no caching. Transport errors
/// and non-2xx statuses propagate, as does any [`ScrapeError`] from parsing.
/// The URL is validated before any network I/O.
#[instrument(level = "info", skip_all, fields(%url))]
pub async fn fetch_article(url: &str) -> Result<ArticleRecord, Box<dyn Error>> {
    Url::parse(url)?;

    let html = get(url).await?.error_for_status()?.text().await?;
    let record = parse_article(url, &html)?;

    info!(
        bytes = record.content.len(),
        title = %record.title,
        "Parsed BBC article"
    );
    Ok(record)
}

/// Fetch a list of BBC article URLs in turn.
///
/// Sequential, one record per URL, no state carried between calls. The first
/// failing URL aborts the batch; partial results are discarded.
#[instrument(level = "info", skip_all, fields(count = urls.len()))]
pub async fn fetch_articles(urls: &[String]) -> Result<Vec<ArticleRecord>, Box<dyn Error>> {
    let mut records = Vec::with_capacity(urls.len());
    for url in urls {
        let record = fetch_article(url).await?;
        debug!(%url, "Fetched BBC article");
        records.push(record);
    }
    info!(count = records.len(), "Fetched BBC article contents");
    Ok(records)
}
