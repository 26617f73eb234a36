//! Standard PageRank algorithm
//!
//! Implements weighted PageRank with power iteration and uniform
//! redistribution of the mass held by dangling nodes.

use super::PageRankResult;
use crate::errors::{Result, TextRankError};
use crate::graph::csr::CsrGraph;
use crate::types::SummarizerConfig;

/// Standard PageRank implementation
#[derive(Debug, Clone)]
pub struct StandardPageRank {
    /// Damping factor (typically 0.85)
    pub damping: f64,
    /// Maximum number of iterations
    pub max_iterations: usize,
    /// Convergence threshold
    pub threshold: f64,
}

impl Default for StandardPageRank {
    fn default() -> Self {
        Self {
            damping: 0.85,
            max_iterations: 100,
            threshold: 1e-6,
        }
    }
}

impl StandardPageRank {
    /// Create a new StandardPageRank with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Take damping, iteration cap and threshold from a summarizer config
    pub fn from_config(config: &SummarizerConfig) -> Self {
        Self {
            damping: config.damping,
            max_iterations: config.max_iterations,
            threshold: config.convergence_threshold,
        }
    }

    /// Set the damping factor
    pub fn with_damping(mut self, damping: f64) -> Self {
        self.damping = damping;
        self
    }

    /// Set the maximum iterations
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Set the convergence threshold
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    /// Run PageRank on a graph
    ///
    /// Returns the result even if convergence wasn't achieved, with
    /// `converged=false`. Fails only for a graph without nodes.
    pub fn run(&self, graph: &CsrGraph) -> Result<PageRankResult> {
        let n = graph.num_nodes;
        if n == 0 {
            return Err(TextRankError::EmptyGraph);
        }

        // Initialize scores uniformly
        let initial_score = 1.0 / n as f64;
        let mut scores = vec![initial_score; n];
        let mut new_scores = vec![0.0; n];

        let dangling_nodes = graph.dangling_nodes();

        let teleport = (1.0 - self.damping) / n as f64;
        let mut iterations = 0;
        let mut delta = f64::MAX;

        while iterations < self.max_iterations && delta > self.threshold {
            iterations += 1;

            // Mass of nodes without outgoing weight is spread over every node
            let dangling_mass: f64 = dangling_nodes.iter().map(|&d| scores[d as usize]).sum();
            let dangling_contribution = self.damping * dangling_mass / n as f64;

            new_scores.fill(teleport + dangling_contribution);

            for (node, &node_score) in scores.iter().enumerate() {
                let total_weight = graph.node_total_weight(node as u32);

                if total_weight > 0.0 {
                    for (neighbor, weight) in graph.neighbors(node as u32) {
                        let contribution = self.damping * node_score * weight / total_weight;
                        new_scores[neighbor as usize] += contribution;
                    }
                }
            }

            // L1 norm
            delta = scores
                .iter()
                .zip(new_scores.iter())
                .map(|(old, new)| (old - new).abs())
                .sum();

            std::mem::swap(&mut scores, &mut new_scores);
        }

        let sum: f64 = scores.iter().sum();
        if sum > 0.0 {
            for score in &mut scores {
                *score /= sum;
            }
        }

        let converged = delta <= self.threshold;

        #[cfg(feature = "tracing")]
        if !converged {
            tracing::warn!(
                nodes = n,
                iterations,
                delta,
                "pagerank stopped before converging"
            );
        }

        Ok(PageRankResult::new(scores, iterations, delta, converged))
    }
}
