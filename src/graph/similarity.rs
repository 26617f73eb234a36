//! Dense sentence-similarity graph
//!
//! Nodes are sentence indices; the weight between two nodes is the dot
//! product of their TF-IDF rows. The graph is complete, symmetric, and
//! carries a self-loop of weight 1 on every node with a non-empty vector.

use crate::summarizer::vectorizer::TermMatrix;

/// Complete weighted undirected graph over sentences
#[derive(Debug, Clone, PartialEq)]
pub struct SimilarityGraph {
    /// Number of nodes
    pub num_nodes: usize,
    /// Row-major N x N weights
    weights: Vec<f64>,
}

impl SimilarityGraph {
    /// Build the similarity graph from a TF-IDF matrix
    pub fn build(matrix: &TermMatrix) -> Self {
        let n = matrix.num_rows();
        let mut weights = vec![0.0; n * n];

        for (i, row_i) in matrix.rows.iter().enumerate() {
            weights[i * n + i] = if row_i.is_empty() { 0.0 } else { 1.0 };
            for (j, row_j) in matrix.rows.iter().enumerate().skip(i + 1) {
                let sim = row_i.dot(row_j);
                weights[i * n + j] = sim;
                weights[j * n + i] = sim;
            }
        }

        Self {
            num_nodes: n,
            weights,
        }
    }

    /// Build directly from a row-major weight matrix
    ///
    /// Returns `None` when `weights.len()` is not a perfect square.
    pub fn from_dense(weights: Vec<f64>) -> Option<Self> {
        let n = (weights.len() as f64).sqrt().round() as usize;
        (n * n == weights.len()).then_some(Self {
            num_nodes: n,
            weights,
        })
    }

    /// Edge weight between two nodes
    pub fn weight(&self, i: usize, j: usize) -> f64 {
        self.weights[i * self.num_nodes + j]
    }

    /// Weights of all edges leaving a node, including its self-loop
    pub fn row(&self, i: usize) -> &[f64] {
        &self.weights[i * self.num_nodes..(i + 1) * self.num_nodes]
    }

    /// Check if the graph is empty
    pub fn is_empty(&self) -> bool {
        self.num_nodes == 0
    }

    /// Check whether `weight(i, j) == weight(j, i)` for every pair
    pub fn is_symmetric(&self) -> bool {
        (0..self.num_nodes)
            .all(|i| (i + 1..self.num_nodes).all(|j| self.weight(i, j) == self.weight(j, i)))
    }
}
