//! Sparse term weight vectors.

use ahash::AHashMap;

/// A sparse mapping from vocabulary index to weight.
///
/// Entries whose weight is exactly zero are never stored, so
/// [`nnz`](Self::nnz) counts the terms that carry weight.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TermVector {
    weights: AHashMap<usize, f64>,
}

impl TermVector {
    /// Create an empty vector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Weight at `index`, 0.0 if absent.
    pub fn get(&self, index: usize) -> f64 {
        self.weights.get(&index).copied().unwrap_or(0.0)
    }

    /// Set the weight at `index`. A zero weight removes the entry.
    pub fn set(&mut self, index: usize, weight: f64) {
        if weight == 0.0 {
            self.weights.remove(&index);
        } else {
            self.weights.insert(index, weight);
        }
    }

    /// Number of non-zero entries.
    pub fn nnz(&self) -> usize {
        self.weights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    /// Iterate over `(index, weight)` pairs in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, f64)> + '_ {
        self.weights.iter().map(|(&index, &weight)| (index, weight))
    }

    /// Non-zero entries sorted by index.
    pub fn entries(&self) -> Vec<(usize, f64)> {
        let mut entries: Vec<_> = self.iter().collect();
        entries.sort_unstable_by_key(|&(index, _)| index);
        entries
    }

    /// Multiply every weight by `factor`.
    pub fn scale(&mut self, factor: f64) {
        if factor == 0.0 {
            self.weights.clear();
            return;
        }
        for weight in self.weights.values_mut() {
            *weight *= factor;
        }
    }

    /// Return a copy multiplied by `factor`.
    pub fn scaled(&self, factor: f64) -> Self {
        let mut vector = self.clone();
        vector.scale(factor);
        vector
    }

    /// Add `factor * other` to this vector in place.
    pub fn add_scaled(&mut self, other: &TermVector, factor: f64) {
        for (index, weight) in other.iter() {
            let updated = self.get(index) + factor * weight;
            self.set(index, updated);
        }
    }

    /// Euclidean norm.
    pub fn l2_norm(&self) -> f64 {
        self.weights.values().map(|w| w * w).sum::<f64>().sqrt()
    }

    /// Scale to unit length. A zero vector is left unchanged.
    pub fn normalize_l2(&mut self) {
        let norm = self.l2_norm();
        if norm > 0.0 {
            self.scale(1.0 / norm);
        }
    }

    /// Dot product with another vector.
    pub fn dot(&self, other: &TermVector) -> f64 {
        let (small, large) = if self.nnz() <= other.nnz() {
            (self, other)
        } else {
            (other, self)
        };
        small.iter().map(|(index, weight)| weight * large.get(index)).sum()
    }

    /// Sum of a group of vectors.
    pub fn sum<'a, I>(vectors: I) -> Self
    where
        I: IntoIterator<Item = &'a TermVector>,
    {
        let mut total = TermVector::new();
        for vector in vectors {
            total.add_scaled(vector, 1.0);
        }
        total
    }
}

impl FromIterator<(usize, f64)> for TermVector {
    fn from_iter<T: IntoIterator<Item = (usize, f64)>>(iter: T) -> Self {
        let mut vector = TermVector::new();
        for (index, weight) in iter {
            vector.set(index, weight);
        }
        vector
    }
}
