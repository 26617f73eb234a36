//! Word tokenization
//!
//! Uses Unicode word boundaries (UAX #29), which keep Devanagari vowel signs
//! and viramas attached to their base consonants. Tokens are lowercased so
//! mixed-script input folds Latin case.

use unicode_segmentation::UnicodeSegmentation;

/// Unicode-aware word tokenizer
#[derive(Debug, Clone, Copy, Default)]
pub struct Tokenizer;

impl Tokenizer {
    /// Create a new tokenizer
    pub fn new() -> Self {
        Self
    }

    /// Split text into lowercased words, dropping punctuation and whitespace
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        text.unicode_words().map(|w| w.to_lowercase()).collect()
    }
}
