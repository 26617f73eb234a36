//! Core types for hindi_textrank
//!
//! This module defines the data that flows between pipeline stages
//! (sentences, scores, summaries) and the summarizer configuration.

use crate::errors::{Result, TextRankError};
use serde::{Deserialize, Serialize};

/// Devanagari danda, the canonical sentence terminator
pub const DANDA: char = '\u{0964}';

/// ASCII character commonly typed in place of the danda
pub const DEFAULT_PLACEHOLDER: char = '?';

// ============================================================================
// Sentences and scores
// ============================================================================

/// A trimmed, non-empty sentence and its position in the input
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sentence {
    /// Sentence text without the delimiter
    pub text: String,
    /// 0-based position in segmentation order
    pub index: usize,
}

impl Sentence {
    /// Create a new sentence
    pub fn new(text: impl Into<String>, index: usize) -> Self {
        Self {
            text: text.into(),
            index,
        }
    }
}

/// A PageRank score attached to a sentence index
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoredSentence {
    /// Stationary probability of the sentence node
    pub score: f64,
    /// Index of the sentence this score belongs to
    pub index: usize,
}

/// Output of one summarization call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    /// Selected sentences joined with the delimiter, in document order
    pub text: String,
    /// Selected sentences in document order
    pub selected: Vec<ScoredSentence>,
    /// Number of sentences the input was segmented into
    pub num_sentences: usize,
}

impl Summary {
    /// A summary that passes the (normalized) input through untouched
    pub fn passthrough(text: String, num_sentences: usize) -> Self {
        Self {
            text,
            selected: Vec::new(),
            num_sentences,
        }
    }

    /// Whether ranking was skipped for this call
    pub fn is_passthrough(&self) -> bool {
        self.selected.is_empty()
    }

    /// Indices of the selected sentences
    pub fn indices(&self) -> Vec<usize> {
        self.selected.iter().map(|s| s.index).collect()
    }
}

// ============================================================================
// Configuration
// ============================================================================

/// Configuration for summarization
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SummarizerConfig {
    /// Fraction of sentences to keep (at least one is always kept)
    pub ratio: f64,
    /// Damping factor for PageRank (typically 0.85)
    pub damping: f64,
    /// Maximum iterations for PageRank convergence
    pub max_iterations: usize,
    /// Convergence threshold (stop when the L1 delta drops below it)
    pub convergence_threshold: f64,
    /// Sentence terminator used for splitting and joining
    pub delimiter: char,
    /// Character treated as a mistyped delimiter
    pub placeholder: char,
}

impl Default for SummarizerConfig {
    fn default() -> Self {
        Self {
            ratio: 0.3,
            damping: 0.85,
            max_iterations: 100,
            convergence_threshold: 1e-6,
            delimiter: DANDA,
            placeholder: DEFAULT_PLACEHOLDER,
        }
    }
}

impl SummarizerConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a config from JSON; missing fields take their defaults
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.ratio) {
            return Err(TextRankError::invalid_config(format!(
                "ratio must be between 0 and 1, got {}",
                self.ratio
            )));
        }

        if !(0.0..=1.0).contains(&self.damping) {
            return Err(TextRankError::invalid_config(format!(
                "damping must be between 0 and 1, got {}",
                self.damping
            )));
        }

        if self.max_iterations == 0 {
            return Err(TextRankError::invalid_config("max_iterations must be > 0"));
        }

        if !(self.convergence_threshold > 0.0) {
            return Err(TextRankError::invalid_config(
                "convergence_threshold must be > 0",
            ));
        }

        if self.delimiter == self.placeholder {
            return Err(TextRankError::invalid_config(
                "placeholder must differ from delimiter",
            ));
        }

        Ok(())
    }

    /// Builder method: set summary ratio
    pub fn with_ratio(mut self, ratio: f64) -> Self {
        self.ratio = ratio;
        self
    }

    /// Builder method: set damping factor
    pub fn with_damping(mut self, damping: f64) -> Self {
        self.damping = damping;
        self
    }

    /// Builder method: set max iterations
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Builder method: set convergence threshold
    pub fn with_convergence_threshold(mut self, threshold: f64) -> Self {
        self.convergence_threshold = threshold;
        self
    }

    /// Builder method: set the sentence delimiter
    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Builder method: set the placeholder character
    pub fn with_placeholder(mut self, placeholder: char) -> Self {
        self.placeholder = placeholder;
        self
    }
}
