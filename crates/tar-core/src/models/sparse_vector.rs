use serde::{Deserialize, Serialize};

/// Sparse feature vector: strictly increasing indices with their values.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SparseVector {
    indices: Vec<usize>,
    values: Vec<f64>,
}

impl SparseVector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from `(index, value)` pairs in any order. Duplicate indices are
    /// summed and zero values dropped.
    pub fn from_pairs(mut pairs: Vec<(usize, f64)>) -> Self {
        pairs.sort_by_key(|&(i, _)| i);
        let mut indices = Vec::with_capacity(pairs.len());
        let mut values: Vec<f64> = Vec::with_capacity(pairs.len());
        for (i, v) in pairs {
            if indices.last() == Some(&i) {
                if let Some(last) = values.last_mut() {
                    *last += v;
                }
            } else {
                indices.push(i);
                values.push(v);
            }
        }
        let mut out = Self { indices, values };
        out.retain_nonzero();
        out
    }

    fn retain_nonzero(&mut self) {
        let mut k = 0;
        for j in 0..self.indices.len() {
            if self.values[j] != 0.0 {
                self.indices[k] = self.indices[j];
                self.values[k] = self.values[j];
                k += 1;
            }
        }
        self.indices.truncate(k);
        self.values.truncate(k);
    }

    pub fn nnz(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, f64)> + '_ {
        self.indices.iter().copied().zip(self.values.iter().copied())
    }

    /// Largest index plus one, or 0 for an empty vector.
    pub fn min_dimension(&self) -> usize {
        self.indices.last().map_or(0, |&i| i + 1)
    }

    pub fn l2_norm(&self) -> f64 {
        self.values.iter().map(|v| v * v).sum::<f64>().sqrt()
    }

    /// Scale to unit L2 norm. A zero vector is left unchanged.
    pub fn normalize(&mut self) {
        let norm = self.l2_norm();
        if norm > f64::EPSILON {
            for v in &mut self.values {
                *v /= norm;
            }
        }
    }

    /// Dot product with a dense weight vector. Indices past the end of
    /// `dense` contribute nothing.
    pub fn dot(&self, dense: &[f64]) -> f64 {
        self.iter()
            .filter_map(|(i, v)| dense.get(i).map(|w| w * v))
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_pairs_sorts_merges_and_drops_zeros() {
        let v = SparseVector::from_pairs(vec![(5, 1.0), (1, 2.0), (5, 0.5), (3, 0.0)]);
        let pairs: Vec<_> = v.iter().collect();
        assert_eq!(pairs, vec![(1, 2.0), (5, 1.5)]);
        assert_eq!(v.min_dimension(), 6);
    }

    #[test]
    fn normalize_gives_unit_norm() {
        let mut v = SparseVector::from_pairs(vec![(0, 3.0), (2, 4.0)]);
        v.normalize();
        assert!((v.l2_norm() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn normalize_leaves_zero_vector() {
        let mut v = SparseVector::new();
        v.normalize();
        assert!(v.is_empty());
    }

    #[test]
    fn dot_ignores_out_of_range_indices() {
        let v = SparseVector::from_pairs(vec![(0, 1.0), (10, 5.0)]);
        assert_eq!(v.dot(&[2.0, 3.0]), 2.0);
    }
}
