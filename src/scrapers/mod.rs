//! Article scrapers keyed to one news source's markup.
//!
//! Each scraper module exports:
//! - `parse_article(url, html)`: pure extraction against fixed structural
//!   queries, testable without a network
//! - `fetch_article(url)`: download one page and parse it
//! - `fetch_articles(urls)`: fetch a list of URLs in turn, one record each
//!
//! Structural queries are gathered into an [`ArticleSelectors`] rules value
//! per source, so a markup change on the site means editing one place.
//! A missing structural element is a hard failure ([`ScrapeError`]); no
//! partial record is ever produced.

use scraper::Selector;
use thiserror::Error;

pub mod bbc;

/// Failure to locate an expected structural element in fetched markup.
///
/// Raised when a page does not match the source's known article layout,
/// either because the site changed its markup or because the URL does not
/// point at a standard article.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScrapeError {
    /// No element matched the named selector.
    #[error("expected element not found in article markup: {0}")]
    MissingElement(&'static str),
}

/// A compiled structural query paired with the string it was parsed from.
///
/// Keeping the source string next to the compiled form means a failed
/// lookup reports the selector actually in use, not a copy that can drift.
pub struct NamedSelector {
    /// The selector as written.
    pub source: &'static str,
    /// The compiled selector.
    pub selector: Selector,
}

impl NamedSelector {
    /// Compile a selector literal, keeping the literal alongside it.
    ///
    /// Panics on an invalid selector; callers pass fixed literals.
    pub fn parse(source: &'static str) -> Self {
        Self {
            source,
            selector: Selector::parse(source).unwrap(),
        }
    }

    /// The error to raise when this selector matched nothing.
    pub fn missing(&self) -> ScrapeError {
        ScrapeError::MissingElement(self.source)
    }
}

/// The compiled structural queries used to pull one source's article fields
/// out of its markup.
pub struct ArticleSelectors {
    /// Headline element, matched document-wide.
    pub title: NamedSelector,
    /// Container element holding the article body.
    pub body: NamedSelector,
    /// Publication date element, inside the body container.
    pub date: NamedSelector,
    /// Introduction paragraph, inside the body container.
    pub introduction: NamedSelector,
    /// Qualifying body paragraphs, inside the body container.
    pub paragraph: NamedSelector,
}
