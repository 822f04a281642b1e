//! Scrape BBC News articles into structured records and sort their named
//! entities into people, places, and organisations.
//!
//! Two independent, stateless operations:
//! - [`scrapers::bbc::fetch_article`]: one URL in, one [`models::ArticleRecord`]
//!   out, extracted with fixed structural queries against the article markup
//! - [`entities::extract_entities`]: one text in, one [`models::EntityBuckets`]
//!   out, via a pretrained NER pipeline and a fixed label table
//!
//! The pipeline is injected through the [`entities::TagEntities`] trait; the
//! rust-bert implementation is behind the `ner` cargo feature.

pub mod entities;
pub mod models;
pub mod scrapers;
pub mod utils;
