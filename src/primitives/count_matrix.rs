//! Document-by-term count matrix with dense and sparse storage.
//!
//! Both variants expose the same read-only view of the counts: shape,
//! non-zero traversal, per-term column extraction and axis sums. Every
//! statistic in [`crate::wordstats`] goes through these methods, so dense
//! and sparse corpora produce identical results.

use super::{Matrix, Vector};
use crate::error::{BurstinessError, Result};
use sprs::{CsMat, TriMat};

/// Term-document count matrix (rows = documents, columns = terms).
///
/// The storage is private and every constructor validates the counts, so a
/// `CountMatrix` never holds a negative or non-finite entry.
///
/// # Examples
///
/// ```
/// use burstiness::primitives::{CountMatrix, Matrix};
///
/// let dense = Matrix::from_rows(&[[2.0, 0.0], [1.0, 3.0]]).expect("equal rows");
/// let counts = CountMatrix::dense(dense).expect("non-negative counts");
/// assert_eq!(counts.shape(), (2, 2));
/// assert_eq!(counts.to_sparse().nnz(), 3);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct CountMatrix {
    storage: Storage,
}

#[derive(Debug, Clone, PartialEq)]
enum Storage {
    /// Row-major dense storage
    Dense(Matrix<f64>),
    /// Compressed sparse row storage
    Sparse(CsMat<f64>),
}

impl CountMatrix {
    /// Wraps a dense matrix.
    ///
    /// # Errors
    ///
    /// Returns a domain error if any count is negative or not finite.
    pub fn dense(matrix: Matrix<f64>) -> Result<Self> {
        let cols = matrix.n_cols().max(1);
        for (k, &v) in matrix.as_slice().iter().enumerate() {
            check_count(k % cols, v)?;
        }
        Ok(Self::from_storage(Storage::Dense(matrix)))
    }

    /// Wraps a sparse matrix, converting CSC storage to CSR.
    ///
    /// # Errors
    ///
    /// Returns a domain error if any stored count is negative or not finite.
    pub fn sparse(matrix: CsMat<f64>) -> Result<Self> {
        let matrix = if matrix.is_csr() {
            matrix
        } else {
            matrix.to_csr()
        };
        for row in matrix.outer_iterator() {
            for (term, &v) in row.iter() {
                check_count(term, v)?;
            }
        }
        Ok(Self::from_storage(Storage::Sparse(matrix)))
    }

    /// Builds a sparse matrix from `(doc, term, count)` triplets.
    /// Duplicate coordinates are summed.
    ///
    /// # Errors
    ///
    /// Returns a dimension error for out-of-range coordinates and a domain
    /// error for negative or non-finite counts.
    pub fn from_triplets(
        n_docs: usize,
        n_terms: usize,
        triplets: &[(usize, usize, f64)],
    ) -> Result<Self> {
        let mut tri = TriMat::new((n_docs, n_terms));
        for &(doc, term, count) in triplets {
            if doc >= n_docs {
                return Err(BurstinessError::dimension_mismatch("doc index <", n_docs, doc));
            }
            if term >= n_terms {
                return Err(BurstinessError::dimension_mismatch(
                    "term index <",
                    n_terms,
                    term,
                ));
            }
            check_count(term, count)?;
            tri.add_triplet(doc, term, count);
        }
        Ok(Self::from_storage(Storage::Sparse(tri.to_csr())))
    }

    fn from_storage(storage: Storage) -> Self {
        Self { storage }
    }

    /// Returns the shape as (documents, terms).
    #[must_use]
    pub fn shape(&self) -> (usize, usize) {
        match &self.storage {
            Storage::Dense(m) => m.shape(),
            Storage::Sparse(m) => (m.rows(), m.cols()),
        }
    }

    /// Number of documents `d`.
    #[must_use]
    pub fn n_docs(&self) -> usize {
        self.shape().0
    }

    /// Vocabulary size `m`.
    #[must_use]
    pub fn n_terms(&self) -> usize {
        self.shape().1
    }

    /// True for compressed storage.
    #[must_use]
    pub fn is_sparse(&self) -> bool {
        matches!(self.storage, Storage::Sparse(_))
    }

    /// Visits every non-zero entry as `(doc, term, value)`.
    pub fn for_each_nonzero<F: FnMut(usize, usize, f64)>(&self, mut f: F) {
        match &self.storage {
            Storage::Dense(m) => {
                for doc in 0..m.n_rows() {
                    for (term, &v) in m.row(doc).iter().enumerate() {
                        if v != 0.0 {
                            f(doc, term, v);
                        }
                    }
                }
            }
            Storage::Sparse(m) => {
                for (doc, row) in m.outer_iterator().enumerate() {
                    for (term, &v) in row.iter() {
                        if v != 0.0 {
                            f(doc, term, v);
                        }
                    }
                }
            }
        }
    }

    /// Applies `f(doc, term, value)` to every stored entry, keeping the
    /// storage kind. `f` must map zero to zero.
    #[must_use]
    pub fn map_entries<F: Fn(usize, usize, f64) -> f64>(&self, f: F) -> Self {
        match &self.storage {
            Storage::Dense(m) => {
                let (rows, cols) = m.shape();
                let data = (0..rows)
                    .flat_map(|doc| {
                        let f = &f;
                        m.row(doc)
                            .iter()
                            .enumerate()
                            .map(move |(term, &v)| f(doc, term, v))
                    })
                    .collect();
                Self::from_storage(Storage::Dense(Matrix::from_raw(rows, cols, data)))
            }
            Storage::Sparse(m) => {
                let mut tri = TriMat::with_capacity((m.rows(), m.cols()), m.nnz());
                for (doc, row) in m.outer_iterator().enumerate() {
                    for (term, &v) in row.iter() {
                        tri.add_triplet(doc, term, f(doc, term, v));
                    }
                }
                Self::from_storage(Storage::Sparse(tri.to_csr()))
            }
        }
    }

    /// Extracts the per-document counts of one term as a dense vector.
    ///
    /// # Panics
    ///
    /// Panics if `term` is out of bounds.
    #[must_use]
    pub fn column(&self, term: usize) -> Vector<f64> {
        match &self.storage {
            Storage::Dense(m) => m.column(term),
            Storage::Sparse(m) => m
                .outer_iterator()
                .map(|row| row.get(term).copied().unwrap_or(0.0))
                .collect(),
        }
    }

    /// Column sums (one per term).
    #[must_use]
    pub fn column_sums(&self) -> Vector<f64> {
        match &self.storage {
            Storage::Dense(m) => m.column_sums(),
            Storage::Sparse(_) => {
                let mut sums = vec![0.0; self.n_terms()];
                self.for_each_nonzero(|_, term, v| sums[term] += v);
                Vector::from_vec(sums)
            }
        }
    }

    /// Row sums (one per document).
    #[must_use]
    pub fn row_sums(&self) -> Vector<f64> {
        match &self.storage {
            Storage::Dense(m) => m.row_sums(),
            Storage::Sparse(m) => m
                .outer_iterator()
                .map(|row| row.iter().map(|(_, &v)| v).sum::<f64>())
                .collect(),
        }
    }

    /// Materializes dense storage.
    #[must_use]
    pub fn to_dense(&self) -> Matrix<f64> {
        match &self.storage {
            Storage::Dense(m) => m.clone(),
            Storage::Sparse(m) => {
                let cols = m.cols();
                let mut data = vec![0.0; m.rows() * cols];
                self.for_each_nonzero(|doc, term, v| data[doc * cols + term] = v);
                Matrix::from_raw(m.rows(), cols, data)
            }
        }
    }

    /// Converts to CSR storage, dropping explicit zeros.
    #[must_use]
    pub fn to_sparse(&self) -> CsMat<f64> {
        let (rows, cols) = self.shape();
        let mut tri = TriMat::new((rows, cols));
        self.for_each_nonzero(|doc, term, v| tri.add_triplet(doc, term, v));
        tri.to_csr()
    }
}

fn check_count(term: usize, value: f64) -> Result<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(BurstinessError::domain(
            "count_matrix",
            term,
            value,
            "counts must be finite and non-negative",
        ))
    }
}

impl TryFrom<CsMat<f64>> for CountMatrix {
    type Error = BurstinessError;

    /// Same checks as [`CountMatrix::sparse`].
    fn try_from(matrix: CsMat<f64>) -> Result<Self> {
        Self::sparse(matrix)
    }
}

impl TryFrom<Matrix<f64>> for CountMatrix {
    type Error = BurstinessError;

    /// Same checks as [`CountMatrix::dense`].
    fn try_from(matrix: Matrix<f64>) -> Result<Self> {
        Self::dense(matrix)
    }
}

#[cfg(test)]
#[path = "count_matrix_tests.rs"]
mod tests;
