//! Raw corpus aggregates: Ni, Nj, N, Bij, Bi, Bj.
//!
//! All sums come back as dense vectors whatever the storage of the input.

use crate::primitives::{CountMatrix, Vector};

/// Total occurrences of each term across the corpus (Ni, length m).
///
/// # Examples
///
/// ```
/// use burstiness::primitives::{CountMatrix, Matrix};
/// use burstiness::wordstats::term_totals;
///
/// let rows = Matrix::from_rows(&[[2.0, 0.0], [1.0, 3.0]]).expect("equal rows");
/// let counts = CountMatrix::dense(rows).expect("non-negative counts");
/// assert_eq!(term_totals(&counts).as_slice(), &[3.0, 3.0]);
/// ```
#[must_use]
pub fn term_totals(counts: &CountMatrix) -> Vector<f64> {
    counts.column_sums()
}

/// Token count of each document (Nj, length d).
#[must_use]
pub fn doc_totals(counts: &CountMatrix) -> Vector<f64> {
    counts.row_sums()
}

/// Total token count `n` from either [`term_totals`] or [`doc_totals`].
#[must_use]
pub fn grand_total(totals: &Vector<f64>) -> f64 {
    totals.sum()
}

/// Term presence indicator Bij: 1 where the count is positive, else 0.
/// Keeps the storage kind of `counts`.
#[must_use]
pub fn presence_matrix(counts: &CountMatrix) -> CountMatrix {
    counts.map_entries(|_, _, v| if v > 0.0 { 1.0 } else { 0.0 })
}

/// Number of documents containing each term (Bi, length m).
#[must_use]
pub fn term_doc_counts(presence: &CountMatrix) -> Vector<f64> {
    presence.column_sums()
}

/// Number of distinct terms in each document (Bj, length d).
#[must_use]
pub fn doc_term_counts(presence: &CountMatrix) -> Vector<f64> {
    presence.row_sums()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::Matrix;

    fn corpus() -> CountMatrix {
        let m = Matrix::from_rows(&[[2.0, 0.0, 1.0], [1.0, 3.0, 0.0], [0.0, 0.0, 5.0]])
            .expect("rows are equal length");
        CountMatrix::dense(m).expect("counts are non-negative")
    }

    #[test]
    fn test_totals_agree() {
        let counts = corpus();
        let ni = term_totals(&counts);
        let nj = doc_totals(&counts);
        assert_eq!(ni.as_slice(), &[3.0, 3.0, 6.0]);
        assert_eq!(nj.as_slice(), &[3.0, 4.0, 5.0]);
        assert_eq!(grand_total(&ni), 12.0);
        assert_eq!(grand_total(&ni), grand_total(&nj));
    }

    #[test]
    fn test_presence_counts() {
        let presence = presence_matrix(&corpus());
        assert_eq!(term_doc_counts(&presence).as_slice(), &[2.0, 1.0, 2.0]);
        assert_eq!(doc_term_counts(&presence).as_slice(), &[2.0, 2.0, 1.0]);
    }

    #[test]
    fn test_presence_sparse_stays_sparse() {
        let sparse = CountMatrix::sparse(corpus().to_sparse()).expect("valid");
        let presence = presence_matrix(&sparse);
        assert!(presence.is_sparse());
        assert_eq!(term_doc_counts(&presence).as_slice(), &[2.0, 1.0, 2.0]);
    }
}
