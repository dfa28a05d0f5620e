//! Model-based statistics.
//!
//! Two families live here:
//!
//! - the per-document rate estimate `alpha_ij = n_ij · Bj_j / Nj_j` with its
//!   mean and variance (Dirichlet-Multinomial burstiness), and
//! - the independent-occurrence Bernoulli model, where each of the `Nj_j`
//!   tokens of document `j` is term `i` with probability `theta_i`, giving
//!   the expected mean and variance of `Bi` and expected ICF/IDF.

use super::guard::{
    check_docs, check_len, check_positive, check_positive_scalar, check_probability, finite,
};
use crate::error::{BurstinessError, Result};
use crate::primitives::{CountMatrix, Matrix, Vector};

/// Per-document, per-term rate estimate `alpha_ij = n_ij · (Bj_j / Nj_j)`.
/// Keeps the storage kind of `counts`.
///
/// # Errors
///
/// Dimension mismatch when `bj`/`nj` are not of length d; domain error for
/// an empty document (`Nj_j = 0`).
pub fn alpha_matrix(
    counts: &CountMatrix,
    bj: &Vector<f64>,
    nj: &Vector<f64>,
) -> Result<CountMatrix> {
    let d = counts.n_docs();
    check_len("Bj length", d, bj.len())?;
    check_len("Nj length", d, nj.len())?;
    check_positive(
        "alpha_matrix",
        nj,
        "document token count Nj must be positive",
    )?;

    let weights: Vec<f64> = bj.iter().zip(nj.iter()).map(|(b, n)| b / n).collect();
    Ok(counts.map_entries(|doc, _, v| v * weights[doc]))
}

/// Column mean of the alpha matrix, `mu_i = (1/d) Σ_j alpha_ij`.
///
/// # Errors
///
/// Invalid parameter for `d == 0`; dimension mismatch when `d` is not the
/// row count of `alpha`.
pub fn mean_alpha(alpha: &CountMatrix, d: usize) -> Result<Vector<f64>> {
    check_docs(d)?;
    check_len("alpha rows", d, alpha.n_docs())?;
    let d = d as f64;
    Ok(alpha.column_sums().map(|s| s / d))
}

/// Population variance of each alpha column, zeros included:
/// `sigma2_i = (1/d) Σ_j (alpha_ij - mu_i)²`.
///
/// # Errors
///
/// Same shape conditions as [`mean_alpha`], plus `mu` of length m.
pub fn variance_alpha(alpha: &CountMatrix, mu: &Vector<f64>, d: usize) -> Result<Vector<f64>> {
    check_docs(d)?;
    check_len("alpha rows", d, alpha.n_docs())?;
    check_len("mu length", alpha.n_terms(), mu.len())?;

    let m = alpha.n_terms();
    let mut squares = vec![0.0; m];
    let mut present = vec![0usize; m];
    alpha.for_each_nonzero(|_, term, a| {
        squares[term] += (a - mu[term]).powi(2);
        present[term] += 1;
    });

    // every implicit zero contributes mu²
    let df = d as f64;
    Ok((0..m)
        .map(|i| (squares[i] + (d - present[i]) as f64 * mu[i] * mu[i]) / df)
        .collect())
}

/// Dirichlet-Multinomial score `dm_i = (1/d) Σ_j (Bj_j / Nj_j) · n_ij`.
///
/// # Errors
///
/// Dimension mismatch for `bj`/`nj`/`d`; domain error for an empty document.
pub fn dirichlet_multinomial(
    counts: &CountMatrix,
    bj: &Vector<f64>,
    nj: &Vector<f64>,
    d: usize,
) -> Result<Vector<f64>> {
    check_docs(d)?;
    check_len("document count", counts.n_docs(), d)?;
    check_len("Bj length", d, bj.len())?;
    check_len("Nj length", d, nj.len())?;
    check_positive(
        "dirichlet_multinomial",
        nj,
        "document token count Nj must be positive",
    )?;

    let mut dm = vec![0.0; counts.n_terms()];
    counts.for_each_nonzero(|doc, term, v| dm[term] += bj[doc] / nj[doc] * v);
    let d = d as f64;
    Ok(dm.into_iter().map(|s| s / d).collect())
}

/// Improved Dirichlet-Multinomial score `sigma2_i / mu_i`.
///
/// # Errors
///
/// Dimension mismatch for unequal lengths; domain error for `mu_i <= 0`.
pub fn improved_dm(sigma2: &Vector<f64>, mu: &Vector<f64>) -> Result<Vector<f64>> {
    check_len("mu length", sigma2.len(), mu.len())?;
    check_positive("improved_dm", mu, "mean alpha must be positive")?;
    Ok(sigma2.iter().zip(mu.iter()).map(|(s, m)| s / m).collect())
}

/// Bernoulli building block: a d-row matrix whose rows all equal `1 - theta`.
///
/// # Errors
///
/// Invalid parameter for `d == 0`; domain error for theta outside (0, 1].
pub fn bernoulli_matrix(theta: &Vector<f64>, d: usize) -> Result<Matrix<f64>> {
    check_docs(d)?;
    check_probability("bernoulli_matrix", theta)?;
    let phi: Vec<f64> = theta.iter().map(|t| 1.0 - t).collect();
    Ok(Matrix::repeat_row(&phi, d))
}

/// Expected number of documents containing each term under the Bernoulli
/// model: `E[Bi] = d - Σ_j (1 - theta_i)^Nj_j`.
///
/// `theta` may be per-term or a grid of candidate values; the output has
/// the same length.
///
/// # Errors
///
/// Dimension mismatch when `nj` is not of length d; domain error for
/// theta outside (0, 1].
pub fn mean_bi(theta: &Vector<f64>, nj: &Vector<f64>, d: usize) -> Result<Vector<f64>> {
    check_docs(d)?;
    check_len("Nj length", d, nj.len())?;
    check_probability("mean_bi", theta)?;
    let df = d as f64;
    Ok(theta
        .iter()
        .map(|t| {
            let phi = 1.0 - t;
            df - nj.iter().map(|n| phi.powf(n)).sum::<f64>()
        })
        .collect())
}

/// Variance of `Bi` under the Bernoulli model,
/// `Var[Bi] = Σ_j [phi_ji^Nj_j - phi_ji^(2·Nj_j)]` with `phi` from
/// [`bernoulli_matrix`].
///
/// # Errors
///
/// Dimension mismatch when `phi` does not have one row per document.
pub fn variance_bi(nj: &Vector<f64>, phi: &Matrix<f64>) -> Result<Vector<f64>> {
    check_len("bernoulli matrix rows", nj.len(), phi.n_rows())?;
    let mut var = vec![0.0; phi.n_cols()];
    for (doc, n) in nj.iter().enumerate() {
        for (acc, &p) in var.iter_mut().zip(phi.row(doc)) {
            *acc += p.powf(n) - p.powf(2.0 * n);
        }
    }
    Ok(Vector::from_vec(var))
}

/// Largest grid [`theta_grid`] will allocate.
pub const MAX_GRID_POINTS: usize = 10_000_000;

/// Log-spaced grid of candidate thetas from `min(cf)` towards `max(cf)`.
///
/// The exponents are `ln(min) + k·step` for `k = 0, 1, ...` while below
/// `ln(max)`; the end point itself is excluded.
///
/// # Errors
///
/// Invalid parameter for a non-positive step, an empty `cf`, or a step so
/// small the grid would exceed [`MAX_GRID_POINTS`]; domain error for a
/// non-positive minimum.
///
/// # Examples
///
/// ```
/// use burstiness::primitives::Vector;
/// use burstiness::wordstats::theta_grid;
///
/// let cf = Vector::from_slice(&[0.01, 0.1]);
/// let grid = theta_grid(&cf, 0.5).expect("valid grid");
/// // ln(0.1) - ln(0.01) = 2.30..., so five steps of 0.5 fit below the end
/// assert_eq!(grid.len(), 5);
/// assert!((grid[0] - 0.01).abs() < 1e-15);
/// assert!(grid.max().expect("non-empty") < 0.1);
/// ```
pub fn theta_grid(cf: &Vector<f64>, step: f64) -> Result<Vector<f64>> {
    if !(step > 0.0 && step.is_finite()) {
        return Err(BurstinessError::invalid_parameter("step", step, "finite and >0"));
    }
    let (Some(low), Some(high)) = (cf.min(), cf.max()) else {
        return Err(BurstinessError::invalid_parameter("cf length", 0, ">0 terms"));
    };
    check_positive_scalar(
        "theta_grid",
        low,
        "minimum collection frequency must be positive",
    )?;

    let start = low.ln();
    let end = high.ln();
    let steps = ((end - start) / step).ceil().max(0.0);
    if !steps.is_finite() || steps > MAX_GRID_POINTS as f64 {
        return Err(BurstinessError::invalid_parameter(
            "step",
            step,
            "a grid of at most 10000000 points",
        ));
    }
    let count = steps as usize;
    Ok((0..count)
        .map(|k| (start + k as f64 * step).exp())
        .collect())
}

/// Expected inverse collection frequency under the Bernoulli model,
/// `eICF(theta) = (1 - theta) / (2·n·theta) - ln(theta)`.
///
/// # Errors
///
/// Domain error for `n <= 0` or theta outside (0, 1].
pub fn expected_icf(theta: &Vector<f64>, n: f64) -> Result<Vector<f64>> {
    check_positive_scalar("expected_icf", n, "total token count must be positive")?;
    check_probability("expected_icf", theta)?;
    Ok(theta.map(|t| expected_icf_at(t, n)))
}

pub(crate) fn expected_icf_at(theta: f64, n: f64) -> f64 {
    (1.0 - theta) / (2.0 * n * theta) - theta.ln()
}

/// Expected IDF from the moments of `Bi` (second-order Taylor expansion of
/// `-ln E[Bi/d]`): `-ln(E[Bi]) + Var[Bi] / (2·E[Bi]²) + ln(d)`.
///
/// # Errors
///
/// Dimension mismatch for unequal lengths; domain error for `E[Bi] <= 0`.
pub fn expected_idf(mean_bi: &Vector<f64>, var_bi: &Vector<f64>, d: usize) -> Result<Vector<f64>> {
    check_docs(d)?;
    check_len("Var[Bi] length", mean_bi.len(), var_bi.len())?;
    check_positive("expected_idf", mean_bi, "expected Bi must be positive")?;
    let ln_d = (d as f64).ln();
    finite(
        "expected_idf",
        mean_bi
            .iter()
            .zip(var_bi.iter())
            .map(|(mean, var)| -mean.ln() + var / (2.0 * mean * mean) + ln_d)
            .collect(),
    )
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
