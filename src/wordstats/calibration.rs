//! Optimal-theta calibration and relative ICF.
//!
//! For each term the calibration finds the Bernoulli probability `theta*`
//! whose expected IDF equals the observed IDF `ln(d / Bi_i)`. The RICF score
//! then compares the expected ICF at `theta*` with the observed ICF.
//!
//! # Example
//!
//! ```
//! use burstiness::primitives::Vector;
//! use burstiness::wordstats::{eidf_idf_diff, optimal_theta};
//!
//! let nj = Vector::from_slice(&[40.0, 60.0, 80.0, 100.0]);
//! // Bi = d makes the observed IDF zero, reached only at theta = 1
//! assert!(eidf_idf_diff(0.05, 4, &nj, 4.0).expect("valid inputs") > 0.0);
//!
//! let theta = optimal_theta(4, &nj, 2.0, 1e-6, 1.0).expect("sign change in bracket");
//! assert!(theta > 0.0 && theta < 0.05);
//! ```

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use serde::{Deserialize, Serialize};

use super::guard::{
    check_docs, check_len, check_positive, check_positive_scalar, check_probability, finite,
};
use super::model::expected_icf_at;
use crate::error::{BurstinessError, Result};
use crate::optim::{brentq, ConvergenceStatus};
use crate::primitives::Vector;

/// Bracket and stopping rule for the optimal-theta search.
///
/// # Examples
///
/// ```
/// use burstiness::wordstats::CalibrationConfig;
///
/// let config = CalibrationConfig::new()
///     .with_bracket(1e-8, 0.5)
///     .with_tolerance(1e-10);
/// assert!(config.validate().is_ok());
/// assert_eq!(config.max_iterations(), 100);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CalibrationConfig {
    theta_low: f64,
    theta_high: f64,
    tolerance: f64,
    max_iterations: usize,
}

impl Default for CalibrationConfig {
    fn default() -> Self {
        Self {
            theta_low: 1e-10,
            theta_high: 1.0,
            tolerance: 1e-12,
            max_iterations: 100,
        }
    }
}

impl CalibrationConfig {
    /// Default configuration: bracket `[1e-10, 1]`, absolute tolerance
    /// `1e-12`, 100 iterations.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the search bracket `[low, high]`.
    #[must_use]
    pub fn with_bracket(mut self, low: f64, high: f64) -> Self {
        self.theta_low = low;
        self.theta_high = high;
        self
    }

    /// Sets the absolute tolerance on theta.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Sets the iteration limit of the root finder.
    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Lower end of the bracket.
    #[must_use]
    pub fn theta_low(&self) -> f64 {
        self.theta_low
    }

    /// Upper end of the bracket.
    #[must_use]
    pub fn theta_high(&self) -> f64 {
        self.theta_high
    }

    /// Absolute tolerance on theta.
    #[must_use]
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Iteration limit.
    #[must_use]
    pub fn max_iterations(&self) -> usize {
        self.max_iterations
    }

    /// Checks `0 < low < high <= 1`, a positive tolerance and a non-zero
    /// iteration limit.
    ///
    /// # Errors
    ///
    /// `InvalidParameter` naming the first field that fails.
    pub fn validate(&self) -> Result<()> {
        if !(self.theta_low > 0.0) {
            return Err(BurstinessError::invalid_parameter(
                "theta_low",
                self.theta_low,
                ">0",
            ));
        }
        if !(self.theta_high > self.theta_low && self.theta_high <= 1.0) {
            return Err(BurstinessError::invalid_parameter(
                "theta_high",
                self.theta_high,
                "in (theta_low, 1]",
            ));
        }
        if !(self.tolerance > 0.0 && self.tolerance.is_finite()) {
            return Err(BurstinessError::invalid_parameter(
                "tolerance",
                self.tolerance,
                "finite and >0",
            ));
        }
        if self.max_iterations == 0 {
            return Err(BurstinessError::invalid_parameter("max_iterations", 0, ">0"));
        }
        Ok(())
    }
}

/// Expected IDF at `theta` minus the observed IDF `ln(d / Bi)`.
///
/// The expected IDF is computed from `S1 = Σ_j (1-theta)^Nj_j` and
/// `S2 = Σ_j (1-theta)^(2·Nj_j)` as
/// `ln d - ln(d - S1) + (S1 - S2) / (2·(d - S1)²)`.
///
/// # Errors
///
/// Invalid parameter for `d == 0`; dimension mismatch for `nj`; domain
/// error for an empty document, theta outside (0, 1] or `Bi` outside (0, d].
pub fn eidf_idf_diff(theta: f64, d: usize, nj: &Vector<f64>, bi: f64) -> Result<f64> {
    check_corpus(d, nj)?;
    check_probability("eidf_idf_diff", &Vector::from_slice(&[theta]))?;
    check_bi(0, bi, d)?;

    let value = objective(theta, d as f64, nj.as_slice(), bi);
    if value.is_finite() {
        Ok(value)
    } else {
        Err(BurstinessError::domain(
            "eidf_idf_diff",
            0,
            theta,
            "expected IDF is not finite at this theta",
        ))
    }
}

/// Root of [`eidf_idf_diff`] in `[theta_low, theta_high]` with the default
/// tolerance and iteration limit.
///
/// # Errors
///
/// `RootFinding` when the objective has no sign change over the bracket;
/// otherwise the conditions of [`optimal_theta_with`].
pub fn optimal_theta(
    d: usize,
    nj: &Vector<f64>,
    bi: f64,
    theta_low: f64,
    theta_high: f64,
) -> Result<f64> {
    let config = CalibrationConfig::new().with_bracket(theta_low, theta_high);
    optimal_theta_with(d, nj, bi, &config)
}

/// Root of [`eidf_idf_diff`] for one term under an explicit configuration.
///
/// # Errors
///
/// `InvalidParameter` for an invalid configuration, the input conditions of
/// [`eidf_idf_diff`], `RootFinding` without a sign change and
/// `ConvergenceFailure` when the iteration limit is hit.
pub fn optimal_theta_with(
    d: usize,
    nj: &Vector<f64>,
    bi: f64,
    config: &CalibrationConfig,
) -> Result<f64> {
    config.validate()?;
    check_corpus(d, nj)?;
    check_bi(0, bi, d)?;
    solve(d as f64, nj.as_slice(), bi, config)
}

/// Calibrates every term independently.
///
/// The outer error covers the shared inputs (configuration, `d`, `nj`);
/// each element carries that term's own result, with the term index
/// attached to root-finding failures.
///
/// # Errors
///
/// `InvalidParameter` for an invalid configuration or `d == 0`; dimension
/// mismatch for `nj`; domain error for an empty document.
pub fn optimal_thetas(
    d: usize,
    nj: &Vector<f64>,
    bi: &Vector<f64>,
    config: &CalibrationConfig,
) -> Result<Vec<Result<f64>>> {
    config.validate()?;
    check_corpus(d, nj)?;
    tracing::debug!(
        n_terms = bi.len(),
        theta_low = config.theta_low,
        theta_high = config.theta_high,
        "calibrating optimal thetas"
    );

    let df = d as f64;
    let nj = nj.as_slice();
    let calibrate = |(term, b): (usize, f64)| -> Result<f64> {
        check_bi(term, b, d)
            .and_then(|()| solve(df, nj, b, config))
            .map_err(|e| e.for_term(term))
    };

    #[cfg(feature = "parallel")]
    let thetas: Vec<Result<f64>> = bi
        .as_slice()
        .par_iter()
        .copied()
        .enumerate()
        .map(calibrate)
        .collect();

    #[cfg(not(feature = "parallel"))]
    let thetas: Vec<Result<f64>> = bi.iter().enumerate().map(calibrate).collect();

    Ok(thetas)
}

/// Relative ICF `eICF(theta*_i, n) - ICF_i`.
///
/// # Errors
///
/// Dimension mismatch for unequal lengths; domain error for `n <= 0` or a
/// theta outside (0, 1].
pub fn relative_icf(theta_star: &Vector<f64>, n: f64, icf: &Vector<f64>) -> Result<Vector<f64>> {
    check_len("ICF length", theta_star.len(), icf.len())?;
    check_positive_scalar("relative_icf", n, "total token count must be positive")?;
    check_probability("relative_icf", theta_star)?;
    finite(
        "relative_icf",
        theta_star
            .iter()
            .zip(icf.iter())
            .map(|(t, observed)| expected_icf_at(t, n) - observed)
            .collect(),
    )
}

fn check_corpus(d: usize, nj: &Vector<f64>) -> Result<()> {
    check_docs(d)?;
    check_len("Nj length", d, nj.len())?;
    check_positive(
        "eidf_idf_diff",
        nj,
        "document token count Nj must be positive",
    )
}

fn check_bi(term: usize, bi: f64, d: usize) -> Result<()> {
    if bi > 0.0 && bi <= d as f64 {
        Ok(())
    } else {
        Err(BurstinessError::domain(
            "optimal_theta",
            term,
            bi,
            "Bi must lie in (0, d]",
        ))
    }
}

fn solve(d: f64, nj: &[f64], bi: f64, config: &CalibrationConfig) -> Result<f64> {
    let result = brentq(
        |theta| objective(theta, d, nj, bi),
        config.theta_low,
        config.theta_high,
        config.tolerance,
        config.max_iterations,
    )?;
    match result.status {
        ConvergenceStatus::Converged => Ok(result.root),
        ConvergenceStatus::MaxIterations => Err(BurstinessError::ConvergenceFailure {
            iterations: result.iterations,
            residual: result.value.abs(),
        }),
    }
}

/// Unchecked objective. `d - S1` and `S1 - S2` are accumulated as sums of
/// `1 - q_j` and `q_j·(1 - q_j)` with `q_j = (1-theta)^Nj_j`, so small
/// thetas do not cancel to zero.
fn objective(theta: f64, d: f64, nj: &[f64], bi: f64) -> f64 {
    let log_phi = (-theta).ln_1p();
    let (mut mean, mut var) = (0.0, 0.0);
    for &n in nj {
        let q = (n * log_phi).exp();
        let p = -(n * log_phi).exp_m1();
        mean += p;
        var += q * p;
    }
    d.ln() - mean.ln() + var / (2.0 * mean * mean) - (d / bi).ln()
}

#[cfg(test)]
#[path = "calibration_tests.rs"]
mod tests;
