//! Burstiness scores: Kwok, Irvine-Callison-Burch, chi-square and naive SHMS.
//!
//! Higher scores mean the term's occurrences cluster in fewer documents
//! than its frequency alone would predict.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use super::aggregate::{grand_total, presence_matrix, term_doc_counts, term_totals};
use super::guard::{check_len, check_positive, check_positive_scalar, finite};
use super::model::expected_icf_at;
use crate::error::{BurstinessError, Result};
use crate::primitives::{CountMatrix, Vector};
use crate::stats::hypothesis::chisquare;

/// Kwok score `ln(Ni_i / (n - Ni_i))`, the log-odds of a token being term i.
///
/// # Errors
///
/// Domain error when `Ni_i = 0` or `Ni_i >= n`.
pub fn kwok(ni: &Vector<f64>, n: f64) -> Result<Vector<f64>> {
    check_positive("kwok", ni, "Ni must be positive")?;
    if let Some(i) = ni.iter().position(|x| x >= n) {
        return Err(BurstinessError::domain(
            "kwok",
            i,
            ni[i],
            "Ni must be smaller than the total token count",
        ));
    }
    finite("kwok", ni.iter().map(|x| (x / (n - x)).ln()).collect())
}

/// Sum over documents of each term's relative frequency, `Σ_j n_ij / Nj_j`.
///
/// # Errors
///
/// Dimension mismatch for `nj`; domain error for an empty document.
pub fn nij_by_nj(counts: &CountMatrix, nj: &Vector<f64>) -> Result<Vector<f64>> {
    check_len("Nj length", counts.n_docs(), nj.len())?;
    check_positive("nij_by_nj", nj, "document token count Nj must be positive")?;
    let mut sums = vec![0.0; counts.n_terms()];
    counts.for_each_nonzero(|doc, term, v| sums[term] += v / nj[doc]);
    Ok(Vector::from_vec(sums))
}

/// Irvine and Callison-Burch score `(1 / Bi_i) · Σ_j n_ij / Nj_j`: the mean
/// relative frequency of the term over the documents that contain it.
///
/// # Errors
///
/// Dimension mismatch for unequal lengths; domain error for `Bi_i = 0`.
pub fn irvine_callison_burch(nij_by_nj: &Vector<f64>, bi: &Vector<f64>) -> Result<Vector<f64>> {
    check_len("Bi length", nij_by_nj.len(), bi.len())?;
    check_positive("irvine_callison_burch", bi, "Bi must be positive")?;
    Ok(nij_by_nj
        .iter()
        .zip(bi.iter())
        .map(|(s, b)| s / b)
        .collect())
}

/// Chi-square goodness-of-fit p-value of every term's per-document counts
/// against a uniform spread of `Ni_i / d` per document.
///
/// # Errors
///
/// Invalid parameter with fewer than two documents; domain error for a term
/// that never occurs.
pub fn chi_square_pvalues(counts: &CountMatrix) -> Result<Vector<f64>> {
    let d = counts.n_docs();
    if d < 2 {
        return Err(BurstinessError::invalid_parameter("d", d, "at least 2 documents"));
    }
    let ni = term_totals(counts);
    check_positive("chi_square_pvalues", &ni, "Ni must be positive")?;
    tracing::debug!(n_docs = d, n_terms = ni.len(), "chi-square scoring");

    let pvalue = |term: usize| -> Result<f64> {
        let observed = counts.column(term);
        let expected = vec![ni[term] / d as f64; d];
        Ok(chisquare(observed.as_slice(), &expected)?.pvalue)
    };

    #[cfg(feature = "parallel")]
    let pvalues: Result<Vec<f64>> = (0..ni.len()).into_par_iter().map(pvalue).collect();

    #[cfg(not(feature = "parallel"))]
    let pvalues: Result<Vec<f64>> = (0..ni.len()).map(pvalue).collect();

    Ok(Vector::from_vec(pvalues?))
}

/// Chi-square burstiness score `-ln(p)`; 0 for a perfectly even term.
///
/// # Errors
///
/// Same conditions as [`chi_square_pvalues`], plus a domain error when a
/// p-value underflows to zero.
pub fn chi_square_score(counts: &CountMatrix) -> Result<Vector<f64>> {
    let pvalues = chi_square_pvalues(counts)?;
    check_positive("chi_square_score", &pvalues, "p-value underflowed to zero")?;
    Ok(pvalues.map(|p| -p.ln()))
}

/// Naive SHMS score: the expected ICF of a term spread over exactly `Bi_i`
/// documents minus the term's observed ICF.
///
/// The baseline for `k` documents is `eICF(k / n, n)` for `k = 1..=d`.
///
/// # Errors
///
/// Domain error for an empty corpus or a term with `Bi_i = 0`, whose
/// baseline rank does not exist.
pub fn naive_shms(counts: &CountMatrix) -> Result<Vector<f64>> {
    let d = counts.n_docs();
    let ni = term_totals(counts);
    let bi = term_doc_counts(&presence_matrix(counts));
    let n = grand_total(&ni);
    check_positive_scalar("naive_shms", n, "total token count must be positive")?;
    check_positive(
        "naive_shms",
        &bi,
        "Bi must be positive to index the baseline",
    )?;

    let baseline: Vec<f64> = (1..=d).map(|k| expected_icf_at(k as f64 / n, n)).collect();
    finite(
        "naive_shms",
        ni.iter()
            .zip(bi.iter())
            .map(|(count, docs)| baseline[docs as usize - 1] + (count / n).ln())
            .collect(),
    )
}

#[cfg(test)]
#[path = "burstiness_tests.rs"]
mod tests;
