//! PageRank algorithms
//!
//! This module provides the weighted PageRank used to score sentences.

pub mod standard;

use crate::types::ScoredSentence;
use std::cmp::Ordering;

/// Result of a PageRank computation
#[derive(Debug, Clone)]
pub struct PageRankResult {
    /// Scores for each node (indexed by node ID)
    pub scores: Vec<f64>,
    /// Number of iterations performed
    pub iterations: usize,
    /// Final convergence delta
    pub delta: f64,
    /// Whether the algorithm converged
    pub converged: bool,
}

impl PageRankResult {
    /// Create a new PageRank result
    pub fn new(scores: Vec<f64>, iterations: usize, delta: f64, converged: bool) -> Self {
        Self {
            scores,
            iterations,
            delta,
            converged,
        }
    }

    /// Scores paired with their node index, in node order
    pub fn scored(&self) -> Vec<ScoredSentence> {
        self.scores
            .iter()
            .enumerate()
            .map(|(index, &score)| ScoredSentence { score, index })
            .collect()
    }
}

/// Descending score, then ascending index
pub(crate) fn by_score_then_index<I: Ord>(
    a_score: f64,
    a_idx: I,
    b_score: f64,
    b_idx: I,
) -> Ordering {
    b_score.total_cmp(&a_score).then_with(|| a_idx.cmp(&b_idx))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordering_breaks_ties_by_index() {
        let mut ranked = vec![(0usize, 0.2), (1, 0.3), (2, 0.2), (3, 0.3)];
        ranked.sort_by(|a, b| by_score_then_index(a.1, a.0, b.1, b.0));
        assert_eq!(
            ranked.iter().map(|(i, _)| *i).collect::<Vec<_>>(),
            vec![1, 3, 0, 2]
        );
    }

    #[test]
    fn test_scored_keeps_node_order() {
        let result = PageRankResult::new(vec![0.7, 0.3], 4, 0.0, true);
        let scored = result.scored();
        assert_eq!(scored[0].index, 0);
        assert_eq!(scored[1].score, 0.3);
    }
}
