//! Summary statistics
//!
//! Word counts and compression ratio reported alongside a summary.

use serde::{Deserialize, Serialize};

/// Word counts of an input and its summary
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SummaryStats {
    /// Whitespace-separated words in the input
    pub original_length: usize,
    /// Whitespace-separated words in the summary
    pub summary_length: usize,
    /// `(1 - summary / original) * 100`, rounded to one decimal
    pub compression_ratio: f64,
}

impl SummaryStats {
    /// Compute statistics for an input and its summary
    ///
    /// The compression ratio is `0.0` when the input has no words.
    pub fn compute(original: &str, summary: &str) -> Self {
        let original_length = original.split_whitespace().count();
        let summary_length = summary.split_whitespace().count();

        let compression_ratio = if original_length > 0 {
            let ratio = (1.0 - summary_length as f64 / original_length as f64) * 100.0;
            (ratio * 10.0).round() / 10.0
        } else {
            0.0
        };

        Self {
            original_length,
            summary_length,
            compression_ratio,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compression_ratio() {
        let stats = SummaryStats::compute("एक दो तीन चार पांच छह", "एक दो");

        assert_eq!(stats.original_length, 6);
        assert_eq!(stats.summary_length, 2);
        assert_eq!(stats.compression_ratio, 66.7);
    }

    #[test]
    fn test_empty_original() {
        let stats = SummaryStats::compute("   ", "");

        assert_eq!(stats.original_length, 0);
        assert_eq!(stats.compression_ratio, 0.0);
    }

    #[test]
    fn test_no_compression() {
        let stats = SummaryStats::compute("एक दो", "एक दो");
        assert_eq!(stats.compression_ratio, 0.0);
    }

    #[test]
    fn test_serializes_field_names() {
        let json = serde_json::to_value(SummaryStats::compute("a b", "a")).unwrap();

        assert_eq!(json["original_length"], 2);
        assert_eq!(json["summary_length"], 1);
        assert_eq!(json["compression_ratio"], 50.0);
    }
}
