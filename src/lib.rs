//! # hindi_textrank
//!
//! Extractive summarization of Devanagari text with TextRank.
//!
//! Sentences are split on the danda, turned into TF-IDF vectors, connected
//! by cosine similarity, and scored with PageRank. The best-scoring fraction
//! of sentences is returned in its original order.
//!
//! ```
//! let text = "भारत एक विशाल देश है। भारत की राजधानी दिल्ली है। \
//!             दिल्ली एक बड़ा शहर है। आज मौसम अच्छा है।";
//! let summary = hindi_textrank::summarize(text, 0.5).unwrap();
//! assert_eq!(summary.matches('।').count(), 1);
//! ```

pub mod errors;
pub mod evaluation;
pub mod graph;
pub mod nlp;
pub mod pagerank;
pub mod pipeline;
pub mod stats;
pub mod summarizer;
pub mod types;

// Re-export commonly used types
pub use errors::{Result, TextRankError};
pub use types::{ScoredSentence, Sentence, Summary, SummarizerConfig, DANDA};

// Re-export main functionality
pub use evaluation::{evaluate, score_pair, EvaluationReport, PairScore};
pub use graph::{csr::CsrGraph, similarity::SimilarityGraph};
pub use nlp::{segmenter::Segmenter, tokenizer::Tokenizer};
pub use pagerank::{standard::StandardPageRank, PageRankResult};
pub use pipeline::observer::{NoopObserver, PipelineObserver};
pub use pipeline::runner::Pipeline;
pub use stats::SummaryStats;
pub use summarizer::{selector::SentenceSelector, vectorizer::TfIdfVectorizer};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Summarize `text`, keeping `max(1, ceil(ratio * N))` of its N sentences
///
/// Text with fewer than two sentences is returned with line breaks and
/// placeholder characters normalized, but otherwise unchanged.
pub fn summarize(text: &str, ratio: f64) -> Result<String> {
    let config = SummarizerConfig::default().with_ratio(ratio);
    Ok(summarize_with_config(text, &config)?.text)
}

/// Summarize `text` with a full configuration
pub fn summarize_with_config(text: &str, config: &SummarizerConfig) -> Result<Summary> {
    Pipeline::new(config.clone())?.summarize(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_four_trivial_sentences() {
        let summary = summarize("अ। ब। स। द।", 0.3).unwrap();
        assert_eq!(summary, "अ।ब");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(summarize("", 0.3).unwrap(), "");
    }

    #[test]
    fn test_single_sentence_normalized() {
        assert_eq!(summarize("एक\nवाक्य?", 0.3).unwrap(), "एक वाक्य।");
    }

    #[test]
    fn test_invalid_ratio() {
        assert!(matches!(
            summarize("अ। ब।", 1.5),
            Err(TextRankError::InvalidConfig(_))
        ));
    }
}
