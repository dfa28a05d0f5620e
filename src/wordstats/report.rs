//! One-shot summary of a corpus.
//!
//! [`WordStatistics::compute`] runs every non-calibrated statistic over a
//! count matrix; [`WordStatistics::calibrate`] adds the optimal thetas and
//! RICF on top, term by term.

use serde::{Deserialize, Serialize};

use super::aggregate::{
    doc_term_counts, doc_totals, grand_total, presence_matrix, term_doc_counts, term_totals,
};
use super::burstiness::{chi_square_pvalues, irvine_callison_burch, kwok, naive_shms, nij_by_nj};
use super::calibration::{optimal_thetas, relative_icf, CalibrationConfig};
use super::frequency::{
    church_gale, collection_frequency, document_frequency, gries, inverse_collection_frequency,
    inverse_document_frequency,
};
use super::guard::{check_len, check_positive};
use super::model::{alpha_matrix, dirichlet_multinomial, improved_dm, mean_alpha, variance_alpha};
use crate::error::{BurstinessError, Result};
use crate::primitives::{CountMatrix, Vector};

/// Every per-term statistic of a corpus, plus its aggregates.
///
/// # Examples
///
/// ```
/// use burstiness::primitives::{CountMatrix, Matrix};
/// use burstiness::wordstats::WordStatistics;
///
/// let rows = [[2.0, 1.0, 0.0], [2.0, 0.0, 1.0], [2.0, 3.0, 1.0]];
/// let counts = CountMatrix::dense(Matrix::from_rows(&rows).expect("equal rows"))
///     .expect("non-negative counts");
///
/// let stats = WordStatistics::compute(&counts).expect("no empty term or document");
/// assert_eq!(stats.n, 12.0);
/// assert_eq!(stats.bi.as_slice(), &[3.0, 2.0, 2.0]);
/// // term 0 is spread evenly
/// assert!(stats.chi_square_score[0].expect("p-value above zero").abs() < 1e-12);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WordStatistics {
    /// Number of documents `d`
    pub n_docs: usize,
    /// Vocabulary size `m`
    pub n_terms: usize,
    /// Total token count
    pub n: f64,
    /// Occurrences per term
    pub ni: Vector<f64>,
    /// Tokens per document
    pub nj: Vector<f64>,
    /// Documents containing each term
    pub bi: Vector<f64>,
    /// Distinct terms per document
    pub bj: Vector<f64>,
    /// Collection frequency
    pub cf: Vector<f64>,
    /// Document frequency
    pub df: Vector<f64>,
    /// Inverse document frequency
    pub idf: Vector<f64>,
    /// Inverse collection frequency
    pub icf: Vector<f64>,
    /// Church-Gale score
    pub church_gale: Vector<f64>,
    /// Gries dispersion
    pub gries: Vector<f64>,
    /// Degree of pervasiveness
    pub dop: Vector<f64>,
    /// Column means of the alpha matrix
    pub mu_alpha: Vector<f64>,
    /// Column variances of the alpha matrix
    pub sigma2_alpha: Vector<f64>,
    /// Dirichlet-Multinomial score
    pub dm: Vector<f64>,
    /// Improved Dirichlet-Multinomial score
    pub improved_dm: Vector<f64>,
    /// Kwok score
    pub kwok: Vector<f64>,
    /// Irvine and Callison-Burch score
    pub irvine: Vector<f64>,
    /// Chi-square goodness-of-fit p-values
    pub chi_square_pvalue: Vector<f64>,
    /// `-ln(p)`, `None` where the p-value underflowed to zero
    pub chi_square_score: Vec<Option<f64>>,
    /// Naive SHMS score
    pub naive_shms: Vector<f64>,
}

/// Per-term calibration results; `None` where the term could not be
/// calibrated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Calibration {
    /// Optimal theta per term
    pub theta: Vec<Option<f64>>,
    /// Relative ICF per term
    pub ricf: Vec<Option<f64>>,
}

impl Calibration {
    /// Number of terms that calibrated successfully.
    #[must_use]
    pub fn n_calibrated(&self) -> usize {
        self.theta.iter().filter(|t| t.is_some()).count()
    }
}

impl WordStatistics {
    /// Computes every non-calibrated statistic of `counts`.
    ///
    /// # Errors
    ///
    /// Domain error for an empty document or a term that never occurs;
    /// invalid parameter for fewer than two documents. A single-term
    /// vocabulary fails the Kwok score (`Ni = n`).
    pub fn compute(counts: &CountMatrix) -> Result<Self> {
        let (d, m) = counts.shape();
        if m == 0 {
            return Err(BurstinessError::invalid_parameter("n_terms", m, ">0 terms"));
        }
        tracing::debug!(
            n_docs = d,
            n_terms = m,
            sparse = counts.is_sparse(),
            "computing word statistics"
        );

        let ni = term_totals(counts);
        let nj = doc_totals(counts);
        check_positive("word_statistics", &ni, "term never occurs")?;
        check_positive("word_statistics", &nj, "document is empty")?;
        let n = grand_total(&ni);

        let presence = presence_matrix(counts);
        let bi = term_doc_counts(&presence);
        let bj = doc_term_counts(&presence);

        let cf = collection_frequency(&ni)?;
        let df = document_frequency(&bi, d)?;
        let idf = inverse_document_frequency(&df)?;
        let icf = inverse_collection_frequency(&cf)?;

        let alpha = alpha_matrix(counts, &bj, &nj)?;
        let mu_alpha = mean_alpha(&alpha, d)?;
        let sigma2_alpha = variance_alpha(&alpha, &mu_alpha, d)?;

        // degree of pervasiveness is the negated Gries dispersion
        let gries = gries(counts, &ni, &nj, n)?;
        let dop = gries.neg();

        let chi_square_pvalue = chi_square_pvalues(counts)?;
        let chi_square_score = chi_square_pvalue
            .iter()
            .map(|p| (p > 0.0).then(|| -p.ln()))
            .collect();

        Ok(Self {
            n_docs: d,
            n_terms: m,
            church_gale: church_gale(&ni, &bi)?,
            gries,
            dop,
            dm: dirichlet_multinomial(counts, &bj, &nj, d)?,
            improved_dm: improved_dm(&sigma2_alpha, &mu_alpha)?,
            kwok: kwok(&ni, n)?,
            irvine: irvine_callison_burch(&nij_by_nj(counts, &nj)?, &bi)?,
            naive_shms: naive_shms(counts)?,
            chi_square_pvalue,
            chi_square_score,
            mu_alpha,
            sigma2_alpha,
            n,
            ni,
            nj,
            bi,
            bj,
            cf,
            df,
            idf,
            icf,
        })
    }

    /// Calibrates the optimal theta of every term and its RICF.
    ///
    /// Terms whose calibration fails, or whose RICF is not finite, are
    /// logged and left as `None`.
    ///
    /// # Errors
    ///
    /// `InvalidParameter` for an invalid configuration; dimension mismatch
    /// when `nj`, `bi` or `icf` do not match `n_docs`/`n_terms`.
    pub fn calibrate(&self, config: &CalibrationConfig) -> Result<Calibration> {
        check_len("Nj length", self.n_docs, self.nj.len())?;
        check_len("Bi length", self.n_terms, self.bi.len())?;
        check_len("ICF length", self.n_terms, self.icf.len())?;
        let thetas = optimal_thetas(self.n_docs, &self.nj, &self.bi, config)?;

        let mut theta = Vec::with_capacity(thetas.len());
        let mut ricf = Vec::with_capacity(thetas.len());
        for (term, result) in thetas.into_iter().enumerate() {
            match result {
                Ok(t) => {
                    theta.push(Some(t));
                    ricf.push(self.ricf_of(term, t));
                }
                Err(error) => {
                    tracing::warn!(term, %error, "optimal theta calibration failed");
                    theta.push(None);
                    ricf.push(None);
                }
            }
        }

        let calibration = Calibration { theta, ricf };
        tracing::debug!(
            calibrated = calibration.n_calibrated(),
            n_terms = self.n_terms,
            "calibration finished"
        );
        Ok(calibration)
    }

    fn ricf_of(&self, term: usize, theta: f64) -> Option<f64> {
        let observed = Vector::from_slice(&[self.icf[term]]);
        match relative_icf(&Vector::from_slice(&[theta]), self.n, &observed) {
            Ok(r) => Some(r[0]),
            Err(error) => {
                tracing::warn!(term, theta, %error, "relative ICF could not be computed");
                None
            }
        }
    }
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;
