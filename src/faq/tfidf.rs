//! TF-IDF vectors over preprocessed questions.
//!
//! Tokens are runs of at least two word characters. Document frequencies use
//! smoothed IDF, `ln((1 + n) / (1 + df)) + 1`, term frequencies are raw counts
//! and every vector is L2-normalized, so the dot product of two vectors is
//! their cosine similarity.

use std::collections::{BTreeMap, HashMap};

use crate::error::FaqError;

/// Sparse vector stored as `(term index, weight)` pairs sorted by index.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SparseVector {
    entries: Vec<(usize, f64)>,
}

impl SparseVector {
    pub fn is_zero(&self) -> bool {
        self.entries.is_empty()
    }

    /// Dot product; equals cosine similarity for normalized vectors.
    pub fn dot(&self, other: &Self) -> f64 {
        let (mut i, mut j) = (0, 0);
        let mut sum = 0.0;
        while i < self.entries.len() && j < other.entries.len() {
            let (a_idx, a_w) = self.entries[i];
            let (b_idx, b_w) = other.entries[j];
            match a_idx.cmp(&b_idx) {
                std::cmp::Ordering::Less => i += 1,
                std::cmp::Ordering::Greater => j += 1,
                std::cmp::Ordering::Equal => {
                    sum += a_w * b_w;
                    i += 1;
                    j += 1;
                }
            }
        }
        sum
    }

    fn normalized(counts: BTreeMap<usize, f64>) -> Self {
        let norm = counts.values().map(|w| w * w).sum::<f64>().sqrt();
        if norm == 0.0 {
            return Self::default();
        }
        Self {
            entries: counts.into_iter().map(|(idx, w)| (idx, w / norm)).collect(),
        }
    }
}

/// Vocabulary and IDF weights learned from the corpus questions.
#[derive(Debug, Clone)]
pub struct TfidfModel {
    vocabulary: HashMap<String, usize>,
    idf: Vec<f64>,
}

impl TfidfModel {
    /// Learn the vocabulary from `documents` and return the model together
    /// with one vector per document, in order.
    pub fn fit(documents: &[String]) -> Result<(Self, Vec<SparseVector>), FaqError> {
        let mut terms: Vec<&str> = documents.iter().flat_map(|d| tokens(d)).collect();
        terms.sort_unstable();
        terms.dedup();
        if terms.is_empty() {
            return Err(FaqError::EmptyVocabulary);
        }

        // Sorted vocabulary gives stable term indices.
        let vocabulary: HashMap<String, usize> = terms
            .iter()
            .enumerate()
            .map(|(idx, term)| ((*term).to_string(), idx))
            .collect();

        let mut df = vec![0usize; vocabulary.len()];
        for doc in documents {
            let mut seen: Vec<usize> = tokens(doc).map(|t| vocabulary[t]).collect();
            seen.sort_unstable();
            seen.dedup();
            for idx in seen {
                df[idx] += 1;
            }
        }

        #[allow(clippy::cast_precision_loss)]
        let n = documents.len() as f64;
        #[allow(clippy::cast_precision_loss)]
        let idf = df
            .iter()
            .map(|&d| ((1.0 + n) / (1.0 + d as f64)).ln() + 1.0)
            .collect();

        let model = Self { vocabulary, idf };
        let vectors = documents.iter().map(|d| model.transform(d)).collect();
        Ok((model, vectors))
    }

    /// Vectorize `text`; terms outside the vocabulary are ignored.
    pub fn transform(&self, text: &str) -> SparseVector {
        let mut counts: BTreeMap<usize, f64> = BTreeMap::new();
        for token in tokens(text) {
            if let Some(&idx) = self.vocabulary.get(token) {
                *counts.entry(idx).or_insert(0.0) += 1.0;
            }
        }
        for (idx, weight) in &mut counts {
            *weight *= self.idf[*idx];
        }
        SparseVector::normalized(counts)
    }

    pub fn vocabulary_len(&self) -> usize {
        self.vocabulary.len()
    }

    /// IDF weight of `term`, if it is in the vocabulary.
    pub fn idf(&self, term: &str) -> Option<f64> {
        self.vocabulary.get(term).map(|&idx| self.idf[idx])
    }
}

fn tokens(text: &str) -> impl Iterator<Item = &str> {
    text.split(|c: char| !(c.is_alphanumeric() || c == '_'))
        .filter(|t| t.chars().count() >= 2)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn docs(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn test_idf_is_smoothed() {
        let (model, _) = TfidfModel::fit(&docs(&["reset password", "change password"])).unwrap();
        // Term in both documents: ln(3/3) + 1.
        assert!((model.idf("password").unwrap() - 1.0).abs() < 1e-9);
        // Term in one document: ln(3/2) + 1.
        assert!((model.idf("reset").unwrap() - (1.5f64.ln() + 1.0)).abs() < 1e-9);
        assert_eq!(model.vocabulary_len(), 3);
    }

    #[test]
    fn test_single_character_tokens_are_dropped() {
        let (model, _) = TfidfModel::fit(&docs(&["a plan b"])).unwrap();
        assert_eq!(model.vocabulary_len(), 1);
        assert!(model.idf("a").is_none());
    }

    #[test]
    fn test_vectors_are_unit_length() {
        let (_, vectors) = TfidfModel::fit(&docs(&["reset password now", "shipping cost"])).unwrap();
        for v in &vectors {
            assert!((v.dot(v) - 1.0).abs() < 1e-9);
        }
        assert!(vectors[0].dot(&vectors[1]).abs() < 1e-9);
    }

    #[test]
    fn test_unknown_terms_give_zero_vector() {
        let (model, _) = TfidfModel::fit(&docs(&["reset password"])).unwrap();
        let v = model.transform("weather forecast");
        assert!(v.is_zero());
        assert!(v.dot(&model.transform("reset")).abs() < 1e-9);
    }

    #[test]
    fn test_empty_vocabulary() {
        let err = TfidfModel::fit(&docs(&["", "a b"])).unwrap_err();
        assert!(matches!(err, FaqError::EmptyVocabulary));
    }
}
