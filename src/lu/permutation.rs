//! Row permutations recorded during pivoting
use ndarray::{Array1, Array2};
use serde::{Deserialize, Serialize};

use crate::error::SolveError;

/// A bijection on `{0, …, n−1}` stored as an index array.
///
/// Entry `i` holds the original row that ends up in position `i`, so that
/// `(P·b)[i] = b[perm[i]]`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Permutation {
    perm: Vec<usize>,
    swaps: usize,
}

impl Permutation {
    /// Creates the identity permutation of size `n`.
    pub fn identity(n: usize) -> Self {
        Permutation {
            perm: (0..n).collect(),
            swaps: 0,
        }
    }

    /// Builds a permutation from an index array, checking that it is a bijection.
    ///
    /// The first out of range or repeated index is reported as
    /// [`SolveError::InvalidPermutation`].
    pub fn from_indices(perm: Vec<usize>) -> Result<Self, SolveError> {
        let n = perm.len();
        let mut seen = vec![false; n];
        for &p in perm.iter() {
            if p >= n || seen[p] {
                return Err(SolveError::InvalidPermutation { len: n, index: p });
            }
            seen[p] = true;
        }
        // parity from the cycle decomposition
        let mut visited = vec![false; n];
        let mut swaps = 0;
        for start in 0..n {
            let mut len = 0;
            let mut i = start;
            while !visited[i] {
                visited[i] = true;
                i = perm[i];
                len += 1;
            }
            if len > 0 {
                swaps += len - 1;
            }
        }
        Ok(Permutation { perm, swaps })
    }

    /// Size of the permutation.
    pub fn len(&self) -> usize {
        self.perm.len()
    }

    /// Checks whether the permutation acts on an empty set.
    pub fn is_empty(&self) -> bool {
        self.perm.is_empty()
    }

    /// Exchanges positions `i` and `j`.
    pub fn swap(&mut self, i: usize, j: usize) {
        if i != j {
            self.perm.swap(i, j);
            self.swaps += 1;
        }
    }

    /// Returns the underlying index array.
    pub fn as_slice(&self) -> &[usize] {
        &self.perm
    }

    /// Returns `+1` for an even and `−1` for an odd permutation.
    pub fn sign(&self) -> f64 {
        if self.swaps % 2 == 0 {
            1.0
        } else {
            -1.0
        }
    }

    /// Returns the inverse permutation.
    pub fn inverse(&self) -> Self {
        let mut inv = vec![0; self.len()];
        for (i, &p) in self.perm.iter().enumerate() {
            inv[p] = i;
        }
        Permutation {
            perm: inv,
            swaps: self.swaps,
        }
    }

    /// Computes `P·b`.
    pub fn apply(&self, b: &Array1<f64>) -> Array1<f64> {
        self.perm.iter().map(|&p| b[p]).collect()
    }

    /// Computes `P⁻¹·b`.
    pub fn apply_inverse(&self, b: &Array1<f64>) -> Array1<f64> {
        let mut out = Array1::zeros(b.len());
        for (i, &p) in self.perm.iter().enumerate() {
            out[p] = b[i];
        }
        out
    }

    /// Computes `P⁻¹·M`, moving row `i` of `m` back to row `perm[i]`.
    pub fn apply_inverse_rows(&self, m: &Array2<f64>) -> Array2<f64> {
        let mut out = Array2::zeros(m.dim());
        for (i, &p) in self.perm.iter().enumerate() {
            out.row_mut(p).assign(&m.row(i));
        }
        out
    }

    /// Builds the explicit `n×n` permutation matrix `P`.
    pub fn to_matrix(&self) -> Array2<f64> {
        let n = self.len();
        let mut p = Array2::zeros((n, n));
        for (i, &pi) in self.perm.iter().enumerate() {
            p[(i, pi)] = 1.0;
        }
        p
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn swaps_track_parity() {
        let mut p = Permutation::identity(3);
        assert_eq!(p.sign(), 1.0);
        p.swap(0, 2);
        assert_eq!(p.as_slice(), &[2, 1, 0]);
        assert_eq!(p.sign(), -1.0);
        p.swap(1, 1);
        assert_eq!(p.sign(), -1.0);
        p.swap(0, 1);
        assert_eq!(p.sign(), 1.0);
    }

    #[test]
    fn apply_matches_matrix() {
        let mut p = Permutation::identity(3);
        p.swap(0, 2);
        p.swap(1, 2);
        let b = array![10.0, 20.0, 30.0];
        assert_eq!(p.apply(&b), p.to_matrix().dot(&b));
        assert_eq!(p.apply_inverse(&p.apply(&b)), b);
        assert_eq!(p.inverse().apply(&b), p.apply_inverse(&b));
    }

    #[test]
    fn from_indices_rejects_non_bijection() {
        assert_eq!(
            Permutation::from_indices(vec![0, 0, 1]),
            Err(SolveError::InvalidPermutation { len: 3, index: 0 })
        );
        let err = Permutation::from_indices(vec![0, 3, 1]).unwrap_err();
        assert_eq!(err, SolveError::InvalidPermutation { len: 3, index: 3 });
        assert!(!err.is_dimension_error());
        let p = Permutation::from_indices(vec![1, 2, 0]).unwrap();
        assert_eq!(p.sign(), 1.0);
        let p = Permutation::from_indices(vec![1, 0, 2]).unwrap();
        assert_eq!(p.sign(), -1.0);
    }
}
