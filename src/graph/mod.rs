//! Graph construction and representation
//!
//! This module builds the dense sentence-similarity graph and its
//! compressed form used for PageRank.

pub mod csr;
pub mod similarity;
