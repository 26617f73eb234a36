//! TF-IDF sentence vectorization
//!
//! Raw term counts per sentence, smoothed inverse document frequency
//! `ln((1 + n) / (1 + df)) + 1`, then L2 normalization of every row.
//! The vocabulary is rebuilt on every call and sorted lexicographically.

use super::unit_vector::UnitVector;
use crate::errors::{Result, TextRankError};
use crate::nlp::tokenizer::Tokenizer;
use crate::types::Sentence;
use rustc_hash::FxHashMap;
use std::collections::BTreeSet;

/// Sentence-by-term TF-IDF matrix
#[derive(Debug, Clone)]
pub struct TermMatrix {
    /// Vocabulary, sorted; a term's position is its id
    pub vocabulary: Vec<String>,
    /// Inverse document frequency per term id
    pub idf: Vec<f64>,
    /// One normalized row per sentence, in sentence order
    pub rows: Vec<UnitVector>,
}

impl TermMatrix {
    /// Number of rows (sentences)
    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }

    /// Vocabulary size
    pub fn num_terms(&self) -> usize {
        self.vocabulary.len()
    }

    /// Look up a term id
    pub fn term_id(&self, term: &str) -> Option<u32> {
        self.vocabulary
            .binary_search_by(|t| t.as_str().cmp(term))
            .ok()
            .map(|i| i as u32)
    }
}

/// TF-IDF vectorizer
#[derive(Debug, Clone, Default)]
pub struct TfIdfVectorizer {
    tokenizer: Tokenizer,
}

impl TfIdfVectorizer {
    /// Create a new vectorizer
    pub fn new() -> Self {
        Self::default()
    }

    /// Vectorize a sentence set
    ///
    /// Fails with [`TextRankError::DegenerateInput`] when no sentence
    /// contains a single word.
    pub fn vectorize(&self, sentences: &[Sentence]) -> Result<TermMatrix> {
        let tokenized: Vec<Vec<String>> = sentences
            .iter()
            .map(|s| self.tokenizer.tokenize(&s.text))
            .collect();

        let vocabulary: Vec<String> = tokenized
            .iter()
            .flatten()
            .cloned()
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();

        if vocabulary.is_empty() {
            return Err(TextRankError::DegenerateInput);
        }

        let term_ids: FxHashMap<&str, u32> = vocabulary
            .iter()
            .enumerate()
            .map(|(i, t)| (t.as_str(), i as u32))
            .collect();

        // Term counts per sentence
        let counts: Vec<FxHashMap<u32, f64>> = tokenized
            .iter()
            .map(|tokens| {
                let mut tf: FxHashMap<u32, f64> = FxHashMap::default();
                for token in tokens {
                    *tf.entry(term_ids[token.as_str()]).or_insert(0.0) += 1.0;
                }
                tf
            })
            .collect();

        let mut df = vec![0usize; vocabulary.len()];
        for tf in &counts {
            for &term in tf.keys() {
                df[term as usize] += 1;
            }
        }

        let n = sentences.len() as f64;
        let idf: Vec<f64> = df
            .iter()
            .map(|&d| ((1.0 + n) / (1.0 + d as f64)).ln() + 1.0)
            .collect();

        let rows = counts
            .into_iter()
            .map(|tf| {
                UnitVector::from_weights(
                    tf.into_iter()
                        .map(|(term, count)| (term, count * idf[term as usize]))
                        .collect(),
                )
            })
            .collect();

        Ok(TermMatrix {
            vocabulary,
            idf,
            rows,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sentences(texts: &[&str]) -> Vec<Sentence> {
        texts
            .iter()
            .enumerate()
            .map(|(i, t)| Sentence::new(*t, i))
            .collect()
    }

    #[test]
    fn test_vocabulary_sorted_and_shared() {
        let matrix = TfIdfVectorizer::new()
            .vectorize(&sentences(&["ख क", "क ग"]))
            .unwrap();

        assert_eq!(matrix.vocabulary, vec!["क", "ख", "ग"]);
        assert_eq!(matrix.num_rows(), 2);
        assert_eq!(matrix.term_id("ख"), Some(1));
        assert_eq!(matrix.term_id("घ"), None);
    }

    #[test]
    fn test_idf_rare_terms_weigh_more() {
        let matrix = TfIdfVectorizer::new()
            .vectorize(&sentences(&["क ख", "क ग", "क घ"]))
            .unwrap();

        let common = matrix.idf[matrix.term_id("क").unwrap() as usize];
        let rare = matrix.idf[matrix.term_id("ख").unwrap() as usize];
        // n = 3, df = 3 -> ln(1) + 1
        assert!((common - 1.0).abs() < 1e-12);
        // n = 3, df = 1 -> ln(2) + 1
        assert!((rare - (2.0f64.ln() + 1.0)).abs() < 1e-12);
        assert!(rare > common);
    }

    #[test]
    fn test_rows_are_normalized() {
        let matrix = TfIdfVectorizer::new()
            .vectorize(&sentences(&["राम राम सीता", "सीता गीता", "मोहन"]))
            .unwrap();

        for row in &matrix.rows {
            let norm: f64 = row.entries.iter().map(|(_, w)| w * w).sum::<f64>().sqrt();
            assert!((norm - 1.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_sentence_without_words_gets_empty_row() {
        let matrix = TfIdfVectorizer::new()
            .vectorize(&sentences(&["राम", "..."]))
            .unwrap();

        assert_eq!(matrix.num_rows(), 2);
        assert!(!matrix.rows[0].is_empty());
        assert!(matrix.rows[1].is_empty());
    }

    #[test]
    fn test_empty_vocabulary_is_degenerate() {
        let result = TfIdfVectorizer::new().vectorize(&sentences(&["...", "!!!"]));
        assert!(matches!(result, Err(TextRankError::DegenerateInput)));

        let result = TfIdfVectorizer::new().vectorize(&[]);
        assert!(matches!(result, Err(TextRankError::DegenerateInput)));
    }

    #[test]
    fn test_deterministic() {
        let input = sentences(&["क ख ग", "ग घ", "ख घ ङ"]);
        let a = TfIdfVectorizer::new().vectorize(&input).unwrap();
        let b = TfIdfVectorizer::new().vectorize(&input).unwrap();

        assert_eq!(a.vocabulary, b.vocabulary);
        assert_eq!(a.rows, b.rows);
    }
}
