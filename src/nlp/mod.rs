//! Natural Language Processing components
//!
//! This module provides sentence segmentation and word tokenization.

pub mod segmenter;
pub mod tokenizer;
