//! Compressed Sparse Row (CSR) graph representation
//!
//! CSR is optimized for iteration over neighbors, which is exactly what
//! PageRank needs during power iteration. Only positive similarity weights
//! are stored; zero and rounding-noise negative entries carry no mass.

use super::similarity::SimilarityGraph;

/// A graph in Compressed Sparse Row format
#[derive(Debug, Clone)]
pub struct CsrGraph {
    /// Number of nodes
    pub num_nodes: usize,
    /// Row pointers: node i's edges are at indices row_ptr[i]..row_ptr[i+1]
    pub row_ptr: Vec<usize>,
    /// Column indices (target nodes) for each edge
    pub col_idx: Vec<u32>,
    /// Edge weights
    pub weights: Vec<f64>,
    /// Total outgoing weight for each node
    pub total_weight: Vec<f64>,
}

impl CsrGraph {
    /// Compress a dense similarity graph
    pub fn from_similarity(graph: &SimilarityGraph) -> Self {
        let num_nodes = graph.num_nodes;
        let mut row_ptr = Vec::with_capacity(num_nodes + 1);
        let mut col_idx = Vec::new();
        let mut weights = Vec::new();
        let mut total_weight = Vec::with_capacity(num_nodes);

        row_ptr.push(0);

        for node in 0..num_nodes {
            let mut total = 0.0;
            for (target, &weight) in graph.row(node).iter().enumerate() {
                if weight > 0.0 {
                    col_idx.push(target as u32);
                    weights.push(weight);
                    total += weight;
                }
            }
            total_weight.push(total);
            row_ptr.push(col_idx.len());
        }

        Self {
            num_nodes,
            row_ptr,
            col_idx,
            weights,
            total_weight,
        }
    }

    /// Iterate over neighbors of a node
    pub fn neighbors(&self, node: u32) -> impl Iterator<Item = (u32, f64)> + '_ {
        let start = self.row_ptr[node as usize];
        let end = self.row_ptr[node as usize + 1];
        (start..end).map(move |i| (self.col_idx[i], self.weights[i]))
    }

    /// Get the total outgoing weight of a node
    pub fn node_total_weight(&self, node: u32) -> f64 {
        self.total_weight[node as usize]
    }

    /// Check if the graph is empty
    pub fn is_empty(&self) -> bool {
        self.num_nodes == 0
    }

    /// Get the total number of stored edges (self-loops included)
    pub fn num_edges(&self) -> usize {
        self.col_idx.len()
    }

    /// Find dangling nodes (nodes with no outgoing weight)
    pub fn dangling_nodes(&self) -> Vec<u32> {
        (0..self.num_nodes as u32)
            .filter(|&n| self.total_weight[n as usize] <= 0.0)
            .collect()
    }
}

impl Default for CsrGraph {
    fn default() -> Self {
        Self {
            num_nodes: 0,
            row_ptr: vec![0],
            col_idx: Vec::new(),
            weights: Vec::new(),
            total_weight: Vec::new(),
        }
    }
}
