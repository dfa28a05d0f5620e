//! Statistical Hypothesis Testing
//!
//! Goodness-of-fit testing for per-term count distributions.
//!
//! # Example
//!
//! ```
//! use burstiness::stats::hypothesis::chisquare;
//!
//! let observed = [4.0, 4.0, 4.0];
//! let expected = [4.0, 4.0, 4.0];
//!
//! let result = chisquare(&observed, &expected).expect("valid chi-square inputs");
//! assert!((result.pvalue - 1.0).abs() < 1e-12);
//! ```

use crate::error::{BurstinessError, Result};
use statrs::distribution::{ChiSquared, ContinuousCDF};

/// Result of a chi-square test.
#[derive(Debug, Clone, PartialEq)]
pub struct ChiSquareResult {
    /// Chi-square statistic
    pub statistic: f64,

    /// p-value
    pub pvalue: f64,

    /// Degrees of freedom
    pub df: usize,
}

/// Chi-square goodness-of-fit test: Tests if observed frequencies match expected.
///
/// H₀: Observed frequencies follow expected distribution
/// H₁: Observed frequencies do not follow expected distribution
///
/// # Arguments
///
/// * `observed` - Observed frequencies
/// * `expected` - Expected frequencies
///
/// # Returns
///
/// `ChiSquareResult` with statistic, p-value (upper tail, `k - 1` degrees of
/// freedom), and degrees of freedom
///
/// # Errors
///
/// Fails on length mismatch, fewer than two categories, or a non-positive
/// expected frequency.
pub fn chisquare(observed: &[f64], expected: &[f64]) -> Result<ChiSquareResult> {
    if observed.len() != expected.len() {
        return Err(BurstinessError::DimensionMismatch {
            expected: format!("{} categories in expected", expected.len()),
            actual: format!("{} categories in observed", observed.len()),
        });
    }

    let k = observed.len();
    if k < 2 {
        return Err(BurstinessError::invalid_parameter(
            "categories",
            k,
            "at least 2 categories",
        ));
    }

    for (i, &exp) in expected.iter().enumerate() {
        if !(exp > 0.0 && exp.is_finite()) {
            return Err(BurstinessError::domain(
                "chisquare",
                i,
                exp,
                "expected frequencies must be positive",
            ));
        }
    }

    // χ² = Σ (O - E)² / E
    let statistic = observed
        .iter()
        .zip(expected.iter())
        .map(|(&obs, &exp)| (obs - exp).powi(2) / exp)
        .sum::<f64>();

    let df = k - 1;
    let pvalue = chi_square_pvalue(statistic, df)?;

    Ok(ChiSquareResult {
        statistic,
        pvalue,
        df,
    })
}

/// Upper-tail probability P(χ²_df > x).
fn chi_square_pvalue(chi2: f64, df: usize) -> Result<f64> {
    let dist = ChiSquared::new(df as f64)
        .map_err(|e| BurstinessError::invalid_parameter("df", df, &e.to_string()))?;
    Ok(dist.sf(chi2).clamp(0.0, 1.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chisquare_perfect_fit() {
        let result = chisquare(&[5.0, 5.0], &[5.0, 5.0]).expect("valid inputs");
        assert_eq!(result.statistic, 0.0);
        assert_eq!(result.df, 1);
        assert!((result.pvalue - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_chisquare_known_value() {
        // χ² = (4-2)²/2 + (0-2)²/2 = 4 with df = 1 → p = erfc(√2) ≈ 0.0455003
        let result = chisquare(&[4.0, 0.0], &[2.0, 2.0]).expect("valid inputs");
        assert!((result.statistic - 4.0).abs() < 1e-12);
        assert!((result.pvalue - 0.045_500_263_896_358_4).abs() < 1e-9);
    }

    #[test]
    fn test_chisquare_df_two() {
        // For df = 2 the survival function is exp(-x/2)
        let result = chisquare(&[6.0, 0.0, 0.0], &[2.0, 2.0, 2.0]).expect("valid inputs");
        assert!((result.statistic - 12.0).abs() < 1e-12);
        assert!((result.pvalue - (-6.0_f64).exp()).abs() < 1e-10);
    }

    #[test]
    fn test_chisquare_length_mismatch() {
        let err = chisquare(&[1.0, 2.0], &[1.0]).expect_err("mismatch");
        assert!(matches!(err, BurstinessError::DimensionMismatch { .. }));
    }

    #[test]
    fn test_chisquare_single_category() {
        assert!(chisquare(&[1.0], &[1.0]).is_err());
    }

    #[test]
    fn test_chisquare_zero_expected() {
        let err = chisquare(&[0.0, 0.0], &[0.0, 0.0]).expect_err("zero expected");
        assert!(matches!(err, BurstinessError::Domain { index: 0, .. }));
    }
}
