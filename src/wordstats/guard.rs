//! Shape and domain checks shared by the statistics.
//!
//! Shapes are checked before any arithmetic; domain checks name the
//! statistic and the first offending index.

use crate::error::{BurstinessError, Result};
use crate::primitives::Vector;

pub(crate) fn check_len(context: &str, expected: usize, actual: usize) -> Result<()> {
    if expected == actual {
        Ok(())
    } else {
        Err(BurstinessError::dimension_mismatch(context, expected, actual))
    }
}

/// Every element must be finite and strictly positive.
pub(crate) fn check_positive(
    operation: &'static str,
    values: &Vector<f64>,
    reason: &'static str,
) -> Result<()> {
    match values.iter().position(|v| !(v > 0.0 && v.is_finite())) {
        Some(i) => Err(BurstinessError::domain(operation, i, values[i], reason)),
        None => Ok(()),
    }
}

/// Scalar variant of [`check_positive`].
pub(crate) fn check_positive_scalar(
    operation: &'static str,
    value: f64,
    reason: &'static str,
) -> Result<()> {
    if value > 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(BurstinessError::domain(operation, 0, value, reason))
    }
}

/// Every element must lie in (0, 1].
pub(crate) fn check_probability(operation: &'static str, values: &Vector<f64>) -> Result<()> {
    match values.iter().position(|v| !(v > 0.0 && v <= 1.0)) {
        Some(i) => Err(BurstinessError::domain(
            operation,
            i,
            values[i],
            "probability must lie in (0, 1]",
        )),
        None => Ok(()),
    }
}

pub(crate) fn check_docs(d: usize) -> Result<()> {
    if d == 0 {
        Err(BurstinessError::invalid_parameter("d", d, ">0 documents"))
    } else {
        Ok(())
    }
}

/// Rejects NaN or infinite results instead of letting them propagate.
pub(crate) fn finite(operation: &'static str, values: Vec<f64>) -> Result<Vector<f64>> {
    match values.iter().position(|v| !v.is_finite()) {
        Some(i) => Err(BurstinessError::domain(
            operation,
            i,
            values[i],
            "result is not finite",
        )),
        None => Ok(Vector::from_vec(values)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_positive_reports_first_offender() {
        let v = Vector::from_slice(&[1.0, 0.0, -1.0]);
        let err = check_positive("test", &v, "must be positive").expect_err("zero present");
        assert!(matches!(err, BurstinessError::Domain { index: 1, .. }));
    }

    #[test]
    fn test_check_positive_rejects_nan() {
        let v = Vector::from_slice(&[f64::NAN]);
        assert!(check_positive("test", &v, "must be positive").is_err());
    }

    #[test]
    fn test_check_probability_bounds() {
        assert!(check_probability("test", &Vector::from_slice(&[1.0, 0.5])).is_ok());
        assert!(check_probability("test", &Vector::from_slice(&[1.5])).is_err());
        assert!(check_probability("test", &Vector::from_slice(&[0.0])).is_err());
    }

    #[test]
    fn test_finite_rejects_infinity() {
        let err = finite("test", vec![1.0, f64::INFINITY]).expect_err("inf present");
        assert!(matches!(err, BurstinessError::Domain { index: 1, .. }));
    }
}
