//! Named-entity classification over a pretrained tagging pipeline.
//!
//! The pipeline itself is external: anything implementing [`TagEntities`]
//! turns a text into labeled spans, and [`extract_entities`] partitions those
//! spans into the three output buckets. Keeping the pipeline behind a trait
//! makes its lifecycle explicit — the caller constructs one handle at
//! startup and reuses it read-only — and lets tests swap in a fixed tagger.
//!
//! # Label table
//!
//! | Label            | Bucket        |
//! |------------------|---------------|
//! | `ORG`            | organisations |
//! | `LOC`, `GPE`     | places        |
//! | `PER`, `PERSON`  | people        |
//! | anything else    | dropped       |
//!
//! BIO prefixes (`B-`, `I-`) are stripped before lookup, since tag schemes
//! differ between pretrained models.

use crate::models::EntityBuckets;
use itertools::Itertools;
use std::error::Error;
use tracing::{debug, instrument};

/// One labeled span produced by the tagging pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntitySpan {
    /// The span text as it appeared in the input.
    pub text: String,
    /// The category label assigned by the pipeline.
    pub label: String,
}

impl EntitySpan {
    /// Convenience constructor, mostly for tests.
    pub fn new(text: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            label: label.into(),
        }
    }
}

/// A pretrained sequence-labeling pipeline.
///
/// Implementations are expected to be read-only after construction so one
/// handle can serve every classification call in a process.
pub trait TagEntities {
    /// Tag `text`, returning every entity span the pipeline finds.
    fn tag(&self, text: &str) -> Result<Vec<EntitySpan>, Box<dyn Error>>;
}

/// The three output buckets an entity label can map to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Bucket {
    People,
    Places,
    Organisations,
}

/// Map a pipeline label to its output bucket, if it has one.
///
/// Both location-style labels (`LOC` for physical locations, `GPE` for
/// geopolitical entities) map to places; the distinction is not surfaced
/// in the output.
fn bucket_for(label: &str) -> Option<Bucket> {
    let label = label
        .strip_prefix("B-")
        .or_else(|| label.strip_prefix("I-"))
        .unwrap_or(label);

    match label {
        "ORG" => Some(Bucket::Organisations),
        "LOC" | "GPE" => Some(Bucket::Places),
        "PER" | "PERSON" => Some(Bucket::People),
        _ => None,
    }
}

/// Classify the named entities in `text` into [`EntityBuckets`].
///
/// Runs the tagger once, silently drops spans with unrecognized labels,
/// then deduplicates the rest by text: the first recognized span with a
/// given text wins, so an entity string lands in at most one bucket.
/// Bucket contents keep first-seen order.
#[instrument(level = "info", skip_all)]
pub fn extract_entities<T: TagEntities>(
    tagger: &T,
    text: &str,
) -> Result<EntityBuckets, Box<dyn Error>> {
    let spans = tagger.tag(text)?;
    debug!(count = spans.len(), "Tagged entity spans");

    let mut recognized = Vec::new();
    for span in spans {
        match bucket_for(&span.label) {
            Some(bucket) => recognized.push((span.text, bucket)),
            None => debug!(label = %span.label, "Dropped span with unrecognized label"),
        }
    }

    let mut buckets = EntityBuckets::default();
    for (text, bucket) in recognized.into_iter().unique_by(|(text, _)| text.clone()) {
        match bucket {
            Bucket::People => buckets.people.push(text),
            Bucket::Places => buckets.places.push(text),
            Bucket::Organisations => buckets.organisations.push(text),
        }
    }

    debug!(
        people = buckets.people.len(),
        places = buckets.places.len(),
        organisations = buckets.organisations.len(),
        "Bucketed entities"
    );
    Ok(buckets)
}

#[cfg(feature = "ner")]
pub use bert::BertTagger;

#[cfg(feature = "ner")]
mod bert {
    //! [`TagEntities`] backed by rust-bert's pretrained NER pipeline.

    use super::{EntitySpan, TagEntities};
    use rust_bert::RustBertError;
    use rust_bert::pipelines::ner::NERModel;
    use std::error::Error;
    use tracing::{info, instrument};

    /// A pretrained BERT token-classification model.
    ///
    /// Construction downloads the model weights on first use and takes
    /// several seconds; build one handle at startup and reuse it. The model
    /// is read-only after loading but not `Sync`, so share it from a single
    /// thread.
    pub struct BertTagger {
        model: NERModel,
    }

    impl BertTagger {
        /// Load the default pretrained NER model.
        ///
        /// Blocking; call from a blocking-safe context such as
        /// `tokio::task::spawn_blocking`.
        #[instrument(level = "info")]
        pub fn new() -> Result<Self, RustBertError> {
            let model = NERModel::new(Default::default())?;
            info!("NER model loaded");
            Ok(Self { model })
        }
    }

    impl std::fmt::Debug for BertTagger {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.debug_struct("BertTagger").finish_non_exhaustive()
        }
    }

    impl TagEntities for BertTagger {
        fn tag(&self, text: &str) -> Result<Vec<EntitySpan>, Box<dyn Error>> {
            let mut output = self.model.predict(&[text]);
            let entities = output.pop().unwrap_or_default();
            Ok(entities
                .into_iter()
                .map(|entity| EntitySpan {
                    text: entity.word,
                    label: entity.label,
                })
                .collect())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Tagger returning a canned span list, standing in for the pipeline.
    #[derive(Debug)]
    struct FixedTagger(Vec<EntitySpan>);

    impl TagEntities for FixedTagger {
        fn tag(&self, _text: &str) -> Result<Vec<EntitySpan>, Box<dyn Error>> {
            Ok(self.0.clone())
        }
    }

    #[test]
    fn test_organisation_span() {
        let tagger = FixedTagger(vec![EntitySpan::new("Amazon", "ORG")]);
        let buckets = extract_entities(&tagger, "I work for Amazon.").unwrap();

        assert_eq!(buckets.people, Vec::<String>::new());
        assert_eq!(buckets.places, Vec::<String>::new());
        assert_eq!(buckets.organisations, vec!["Amazon"]);
    }

    #[test]
    fn test_person_span() {
        let tagger = FixedTagger(vec![EntitySpan::new("Bob", "PERSON")]);
        let buckets = extract_entities(&tagger, "My name is Bob").unwrap();

        assert_eq!(buckets.people, vec!["Bob"]);
        assert_eq!(buckets.places, Vec::<String>::new());
        assert_eq!(buckets.organisations, Vec::<String>::new());
    }

    #[test]
    fn test_both_location_labels_map_to_places() {
        let tagger = FixedTagger(vec![
            EntitySpan::new("France", "GPE"),
            EntitySpan::new("the Alps", "LOC"),
        ]);
        let buckets = extract_entities(&tagger, "").unwrap();
        assert_eq!(buckets.places, vec!["France", "the Alps"]);
    }

    #[test]
    fn test_bio_prefixes_are_stripped() {
        let tagger = FixedTagger(vec![
            EntitySpan::new("Alice", "B-PER"),
            EntitySpan::new("NATO", "I-ORG"),
            EntitySpan::new("Paris", "I-LOC"),
        ]);
        let buckets = extract_entities(&tagger, "").unwrap();

        assert_eq!(buckets.people, vec!["Alice"]);
        assert_eq!(buckets.organisations, vec!["NATO"]);
        assert_eq!(buckets.places, vec!["Paris"]);
    }

    #[test]
    fn test_unrecognized_labels_are_dropped() {
        let tagger = FixedTagger(vec![
            EntitySpan::new("Tuesday", "DATE"),
            EntitySpan::new("three", "CARDINAL"),
            EntitySpan::new("Brexit", "MISC"),
            EntitySpan::new("Bob", "PERSON"),
        ]);
        let buckets = extract_entities(&tagger, "").unwrap();

        assert_eq!(buckets.people, vec!["Bob"]);
        assert_eq!(buckets.places, Vec::<String>::new());
        assert_eq!(buckets.organisations, Vec::<String>::new());
    }

    #[test]
    fn test_duplicate_spans_collapse() {
        let tagger = FixedTagger(vec![
            EntitySpan::new("Amazon", "ORG"),
            EntitySpan::new("Amazon", "ORG"),
            EntitySpan::new("Amazon", "ORG"),
        ]);
        let buckets = extract_entities(&tagger, "").unwrap();
        assert_eq!(buckets.organisations, vec!["Amazon"]);
    }

    #[test]
    fn test_first_label_wins_for_repeated_text() {
        // Same surface text tagged differently on a later occurrence stays
        // where its first label put it.
        let tagger = FixedTagger(vec![
            EntitySpan::new("Washington", "GPE"),
            EntitySpan::new("Washington", "PERSON"),
        ]);
        let buckets = extract_entities(&tagger, "").unwrap();

        assert_eq!(buckets.places, vec!["Washington"]);
        assert_eq!(buckets.people, Vec::<String>::new());
    }

    #[test]
    fn test_unrecognized_label_does_not_shadow_later_span() {
        // A span with a label outside the table is dropped before dedup, so
        // a later recognized span for the same text still lands in a bucket.
        let tagger = FixedTagger(vec![
            EntitySpan::new("Washington", "DATE"),
            EntitySpan::new("Washington", "GPE"),
        ]);
        let buckets = extract_entities(&tagger, "").unwrap();

        assert_eq!(buckets.places, vec!["Washington"]);
        assert_eq!(buckets.people, Vec::<String>::new());
    }

    #[test]
    fn test_bucket_order_is_first_seen() {
        let tagger = FixedTagger(vec![
            EntitySpan::new("Carol", "PERSON"),
            EntitySpan::new("Alice", "PERSON"),
            EntitySpan::new("Bob", "PERSON"),
            EntitySpan::new("Alice", "PERSON"),
        ]);
        let buckets = extract_entities(&tagger, "").unwrap();
        assert_eq!(buckets.people, vec!["Carol", "Alice", "Bob"]);
    }

    #[test]
    fn test_no_spans_yields_empty_buckets() {
        let tagger = FixedTagger(vec![]);
        let buckets = extract_entities(&tagger, "Nothing notable here.").unwrap();
        assert_eq!(buckets, EntityBuckets::default());
    }

    #[test]
    fn test_classification_is_idempotent() {
        let tagger = FixedTagger(vec![
            EntitySpan::new("Bob", "PERSON"),
            EntitySpan::new("Amazon", "ORG"),
        ]);
        let first = extract_entities(&tagger, "Bob works for Amazon.").unwrap();
        let second = extract_entities(&tagger, "Bob works for Amazon.").unwrap();
        assert_eq!(first, second);
    }
}
