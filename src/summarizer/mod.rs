//! Summarization components
//!
//! Provides TF-IDF sentence vectors and ratio-based selection of the
//! top-ranked sentences.

pub mod selector;
pub mod unit_vector;
pub mod vectorizer;
