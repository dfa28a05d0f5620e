//! First-order frequency statistics: CF, DF, IDF, ICF, Church-Gale, Gries
//! and degree of pervasiveness.

use super::guard::{check_docs, check_len, check_positive, check_positive_scalar, finite};
use crate::error::{BurstinessError, Result};
use crate::primitives::{CountMatrix, Vector};

/// Collection frequency `cf_i = Ni_i / n` with `n = Σ Ni`.
///
/// # Errors
///
/// Domain error when the corpus holds no tokens.
///
/// # Examples
///
/// ```
/// use burstiness::primitives::Vector;
/// use burstiness::wordstats::collection_frequency;
///
/// let cf = collection_frequency(&Vector::from_slice(&[3.0, 1.0])).expect("non-empty corpus");
/// assert_eq!(cf.as_slice(), &[0.75, 0.25]);
/// ```
pub fn collection_frequency(ni: &Vector<f64>) -> Result<Vector<f64>> {
    let n = ni.sum();
    check_positive_scalar(
        "collection_frequency",
        n,
        "total token count must be positive",
    )?;
    Ok(ni.map(|x| x / n))
}

/// Document frequency `df_i = Bi_i / d`.
///
/// # Errors
///
/// Invalid parameter when `d == 0`; domain error when some `Bi_i > d`.
pub fn document_frequency(bi: &Vector<f64>, d: usize) -> Result<Vector<f64>> {
    check_docs(d)?;
    let d = d as f64;
    if let Some(i) = bi.iter().position(|b| b > d) {
        return Err(BurstinessError::domain(
            "document_frequency",
            i,
            bi[i],
            "Bi cannot exceed the number of documents",
        ));
    }
    Ok(bi.map(|b| b / d))
}

/// Inverse document frequency `idf_i = -ln(df_i)`.
///
/// # Errors
///
/// Domain error for any `df_i <= 0` (term absent from every document).
pub fn inverse_document_frequency(df: &Vector<f64>) -> Result<Vector<f64>> {
    check_positive(
        "inverse_document_frequency",
        df,
        "document frequency must be positive",
    )?;
    Ok(df.map(|x| -x.ln()))
}

/// Inverse collection frequency `icf_i = -ln(cf_i)`.
///
/// # Errors
///
/// Domain error for any `cf_i <= 0`.
pub fn inverse_collection_frequency(cf: &Vector<f64>) -> Result<Vector<f64>> {
    check_positive(
        "inverse_collection_frequency",
        cf,
        "collection frequency must be positive",
    )?;
    Ok(cf.map(|x| -x.ln()))
}

/// Church-Gale score `Ni_i / Bi_i`: mean occurrences per containing document.
///
/// # Errors
///
/// Dimension mismatch for unequal lengths; domain error for `Bi_i = 0`.
pub fn church_gale(ni: &Vector<f64>, bi: &Vector<f64>) -> Result<Vector<f64>> {
    check_len("Bi length", ni.len(), bi.len())?;
    check_positive("church_gale", bi, "Bi must be positive")?;
    Ok(ni.iter().zip(bi.iter()).map(|(n, b)| n / b).collect())
}

/// Gries dispersion `1 - ½ Σ_j |n_ij/Ni_i - Nj_j/n|`, in [0, 1] with 1
/// meaning the term is spread exactly like the corpus.
///
/// Documents where the term is absent contribute `Nj_j/n` each, so only the
/// non-zero counts are visited.
///
/// # Errors
///
/// Dimension mismatch when `ni`/`nj` do not match the matrix; domain error
/// for `Ni_i = 0` or `n <= 0`.
pub fn gries(
    counts: &CountMatrix,
    ni: &Vector<f64>,
    nj: &Vector<f64>,
    n: f64,
) -> Result<Vector<f64>> {
    let (d, m) = counts.shape();
    check_len("Ni length", m, ni.len())?;
    check_len("Nj length", d, nj.len())?;
    check_positive("gries", ni, "Ni must be positive")?;
    check_positive_scalar("gries", n, "total token count must be positive")?;

    let share_total: f64 = nj.iter().map(|x| x / n).sum();
    // Σ_j over present documents of |p - s| - s; absent ones add nothing beyond share_total
    let mut correction = vec![0.0; m];
    counts.for_each_nonzero(|doc, term, v| {
        let share = nj[doc] / n;
        correction[term] += (v / ni[term] - share).abs() - share;
    });

    finite(
        "gries",
        correction
            .into_iter()
            .map(|c| 1.0 - 0.5 * (share_total + c))
            .collect(),
    )
}

/// Degree of pervasiveness: the negated [`gries`] score, in [-1, 0], so
/// that larger values mean burstier terms.
///
/// # Errors
///
/// Same conditions as [`gries`].
pub fn degree_of_pervasiveness(
    counts: &CountMatrix,
    ni: &Vector<f64>,
    nj: &Vector<f64>,
    n: f64,
) -> Result<Vector<f64>> {
    Ok(gries(counts, ni, nj, n)?.neg())
}

#[cfg(test)]
#[path = "frequency_tests.rs"]
mod tests;
