//! Unit vector representation for sentences
//!
//! Sparse L2-normalized vectors over a call-scoped vocabulary. Entries are
//! kept sorted by term id so dot products are a linear merge.

/// A sparse unit vector: `(term id, weight)` pairs sorted by term id
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UnitVector {
    /// Non-zero dimensions
    pub entries: Vec<(u32, f64)>,
    /// L2 norm of the vector before normalization
    pub norm: f64,
}

impl UnitVector {
    /// Create a new empty unit vector
    pub fn new() -> Self {
        Self::default()
    }

    /// Create from raw weights, sorting by term id and normalizing
    pub fn from_weights(mut entries: Vec<(u32, f64)>) -> Self {
        entries.sort_by_key(|&(term, _)| term);
        entries.retain(|&(_, w)| w != 0.0);
        let norm = entries.iter().map(|(_, w)| w * w).sum::<f64>().sqrt();
        if norm > 0.0 {
            for (_, w) in &mut entries {
                *w /= norm;
            }
        }
        Self { entries, norm }
    }

    /// Dot product with another vector
    ///
    /// Both vectors are normalized, so this is their cosine similarity.
    pub fn dot(&self, other: &UnitVector) -> f64 {
        let (mut i, mut j) = (0, 0);
        let mut dot = 0.0;
        while i < self.entries.len() && j < other.entries.len() {
            let (a, wa) = self.entries[i];
            let (b, wb) = other.entries[j];
            match a.cmp(&b) {
                std::cmp::Ordering::Less => i += 1,
                std::cmp::Ordering::Greater => j += 1,
                std::cmp::Ordering::Equal => {
                    dot += wa * wb;
                    i += 1;
                    j += 1;
                }
            }
        }
        dot
    }

    /// Check if the vector is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Weight of a term, zero when absent
    pub fn weight(&self, term: u32) -> f64 {
        self.entries
            .binary_search_by_key(&term, |&(t, _)| t)
            .map(|i| self.entries[i].1)
            .unwrap_or(0.0)
    }
}
