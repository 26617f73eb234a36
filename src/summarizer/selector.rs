//! Top-k sentence selection for summarization
//!
//! Picks the highest-scoring fraction of sentences and restores document
//! order. Sentences are tracked by index throughout, so repeated sentence
//! texts are selected independently of each other.

use crate::nlp::segmenter::join_with;
use crate::pagerank::by_score_then_index;
use crate::types::{ScoredSentence, Sentence, Summary, SummarizerConfig};

/// Configuration for sentence selection
#[derive(Debug, Clone)]
pub struct SelectorConfig {
    /// Fraction of sentences to keep
    pub ratio: f64,
    /// Delimiter used to join the selected sentences
    pub delimiter: char,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        let defaults = SummarizerConfig::default();
        Self {
            ratio: defaults.ratio,
            delimiter: defaults.delimiter,
        }
    }
}

/// Ratio-based sentence selector
#[derive(Debug, Default)]
pub struct SentenceSelector {
    config: SelectorConfig,
}

impl SentenceSelector {
    /// Create a new selector with default config
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with custom config
    pub fn with_config(config: SelectorConfig) -> Self {
        Self { config }
    }

    /// Take ratio and delimiter from a summarizer config
    pub fn from_config(config: &SummarizerConfig) -> Self {
        Self::with_config(SelectorConfig {
            ratio: config.ratio,
            delimiter: config.delimiter,
        })
    }

    /// Set the fraction of sentences to keep
    pub fn with_ratio(mut self, ratio: f64) -> Self {
        self.config.ratio = ratio;
        self
    }

    /// Number of sentences kept out of `n`: `max(1, ceil(ratio * n))`,
    /// never more than `n`
    pub fn target_count(&self, n: usize) -> usize {
        if n == 0 {
            return 0;
        }
        let wanted = (self.config.ratio * n as f64).ceil();
        let wanted = if wanted.is_finite() && wanted > 1.0 {
            wanted as usize
        } else {
            1
        };
        wanted.min(n)
    }

    /// Select sentences by score
    ///
    /// `scores` holds one entry per sentence, each naming the sentence by
    /// index (as produced by [`PageRankResult::scored`]). The highest `k`
    /// scores win, ties going to the earlier sentence; the winners are
    /// returned in document order.
    ///
    /// [`PageRankResult::scored`]: crate::pagerank::PageRankResult::scored
    pub fn select(&self, sentences: &[Sentence], scores: &[ScoredSentence]) -> Summary {
        debug_assert_eq!(
            sentences.len(),
            scores.len(),
            "one score per sentence expected"
        );

        let mut ranked: Vec<ScoredSentence> = scores
            .iter()
            .copied()
            .filter(|s| s.index < sentences.len())
            .collect();

        ranked.sort_by(|a, b| by_score_then_index(a.score, a.index, b.score, b.index));
        ranked.truncate(self.target_count(ranked.len()));

        // Restore document order
        ranked.sort_by_key(|s| s.index);

        let text = join_with(
            self.config.delimiter,
            ranked.iter().map(|s| sentences[s.index].text.as_str()),
        );

        Summary {
            text,
            selected: ranked,
            num_sentences: sentences.len(),
        }
    }
}
