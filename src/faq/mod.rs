//! FAQ answer engine.
//!
//! Questions from the corpus are normalized with [`preprocess`] and indexed as
//! TF-IDF vectors. A query is answered with the answer of the most similar
//! question, provided the cosine similarity clears the threshold.
//!
//! # Example
//!
//! ```rust
//! use faq_chat::faq::{FaqEntry, FaqIndex, NOT_UNDERSTOOD_TEXT};
//!
//! let index = FaqIndex::build(
//!     vec![
//!         FaqEntry::new("How do I reset my password?", "Use the reset link."),
//!         FaqEntry::new("What are your opening hours?", "9am to 5pm."),
//!     ],
//!     0.2,
//! )
//! .unwrap();
//!
//! assert_eq!(index.answer("reset password please"), "Use the reset link.");
//! assert_eq!(index.answer("tell me a joke"), NOT_UNDERSTOOD_TEXT);
//! ```

mod corpus;
mod text;
mod tfidf;

use std::path::Path;

use crate::error::FaqError;

pub use corpus::{FaqEntry, load_corpus, parse_rows};
pub use text::{is_stop_word, preprocess};
pub use tfidf::{SparseVector, TfidfModel};

/// Default minimum similarity for a match.
pub const DEFAULT_THRESHOLD: f64 = 0.2;

/// Returned when no question is similar enough.
pub const NOT_UNDERSTOOD_TEXT: &str = "Sorry, I couldn't understand your question.";

/// Best corpus question for a query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FaqMatch {
    /// Position of the entry in the corpus.
    pub index: usize,
    /// Cosine similarity with the query.
    pub score: f64,
}

/// Indexed FAQ corpus. Immutable after construction; share behind an `Arc`.
#[derive(Debug)]
pub struct FaqIndex {
    entries: Vec<FaqEntry>,
    model: TfidfModel,
    vectors: Vec<SparseVector>,
    threshold: f64,
}

impl FaqIndex {
    /// Index `entries`. Fails if no question contains an indexable term.
    pub fn build(entries: Vec<FaqEntry>, threshold: f64) -> Result<Self, FaqError> {
        let cleaned: Vec<String> = entries.iter().map(|e| preprocess(&e.question)).collect();
        let (model, vectors) = TfidfModel::fit(&cleaned)?;

        tracing::info!(
            name: "faq.index.built",
            entries = entries.len(),
            vocabulary = model.vocabulary_len(),
            threshold = threshold,
            "FAQ index built"
        );

        Ok(Self {
            entries,
            model,
            vectors,
            threshold,
        })
    }

    /// Load the corpus file at `path` and index it.
    pub fn load(path: impl AsRef<Path>, threshold: f64) -> Result<Self, FaqError> {
        Self::build(load_corpus(path)?, threshold)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Most similar corpus question. Ties go to the earliest entry.
    pub fn best_match(&self, query: &str) -> Option<FaqMatch> {
        let query = self.model.transform(&preprocess(query));
        let mut best: Option<FaqMatch> = None;
        for (index, vector) in self.vectors.iter().enumerate() {
            let score = query.dot(vector);
            if best.is_none_or(|b| score > b.score) {
                best = Some(FaqMatch { index, score });
            }
        }
        best
    }

    /// Answer for `query`, or [`NOT_UNDERSTOOD_TEXT`] below the threshold.
    pub fn answer(&self, query: &str) -> &str {
        match self.best_match(query) {
            Some(m) if m.score > self.threshold => {
                tracing::debug!(index = m.index, score = m.score, "FAQ match");
                &self.entries[m.index].answer
            }
            m => {
                tracing::debug!(score = ?m.map(|m| m.score), "No FAQ match above threshold");
                NOT_UNDERSTOOD_TEXT
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn index() -> FaqIndex {
        FaqIndex::build(
            vec![
                FaqEntry::new("How do I reset my password?", "Use the reset link."),
                FaqEntry::new("What are your opening hours?", "9am to 5pm."),
                FaqEntry::new("How much does shipping cost?", "Shipping is free."),
            ],
            DEFAULT_THRESHOLD,
        )
        .unwrap()
    }

    #[test]
    fn test_exact_question_matches() {
        let idx = index();
        assert_eq!(idx.len(), 3);
        assert!(!idx.is_empty());
        let m = idx.best_match("What are your opening hours?").unwrap();
        assert_eq!(m.index, 1);
        assert!((m.score - 1.0).abs() < 1e-9);
        assert_eq!(idx.answer("What are your opening hours?"), "9am to 5pm.");
    }

    #[test]
    fn test_paraphrase_matches() {
        assert_eq!(index().answer("shipping cost?"), "Shipping is free.");
    }

    #[test]
    fn test_unrelated_query_falls_back() {
        let idx = index();
        assert_eq!(idx.answer("tell me a joke"), NOT_UNDERSTOOD_TEXT);
        assert_eq!(idx.answer(""), NOT_UNDERSTOOD_TEXT);
    }

    #[test]
    fn test_threshold_is_strict() {
        let idx = FaqIndex::build(vec![FaqEntry::new("reset password", "link")], 1.0).unwrap();
        // A perfect match scores 1.0, which does not exceed a 1.0 threshold.
        assert_eq!(idx.answer("reset password"), NOT_UNDERSTOOD_TEXT);
    }

    #[test]
    fn test_ties_go_to_first_entry() {
        let idx = FaqIndex::build(
            vec![
                FaqEntry::new("refund policy", "first"),
                FaqEntry::new("refund policy", "second"),
            ],
            DEFAULT_THRESHOLD,
        )
        .unwrap();
        assert_eq!(idx.answer("refund policy"), "first");
    }

    #[test]
    fn test_stop_word_only_corpus_is_rejected() {
        let err = FaqIndex::build(vec![FaqEntry::new("what is this?", "?")], 0.2).unwrap_err();
        assert!(matches!(err, FaqError::EmptyVocabulary));
    }
}
