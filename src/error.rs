//! Error types for word statistics operations.
//!
//! Every failure carries enough context (operation, term or document
//! index, offending value) to diagnose a degenerate corpus.

use thiserror::Error;

/// Main error type for burstiness operations.
///
/// # Examples
///
/// ```
/// use burstiness::error::BurstinessError;
///
/// let err = BurstinessError::DimensionMismatch {
///     expected: "Nj length=3".to_string(),
///     actual: "2".to_string(),
/// };
/// assert!(err.to_string().contains("dimension mismatch"));
/// ```
#[derive(Debug, Error, Clone, PartialEq)]
pub enum BurstinessError {
    /// A ratio or logarithm received a value outside its domain.
    #[error("domain error in {operation} at index {index}: {reason} (value = {value})")]
    Domain {
        /// Name of the statistic being computed
        operation: &'static str,
        /// Term or document index of the offending value
        index: usize,
        /// Offending value
        value: f64,
        /// Constraint that was violated
        reason: &'static str,
    },

    /// The supplied bracket does not contain a sign change.
    #[error(
        "root finding failed{}: no sign change in [{low}, {high}] (f(low) = {f_low}, f(high) = {f_high})",
        .term.map(|t| format!(" for term {t}")).unwrap_or_default()
    )]
    RootFinding {
        /// Term index, when calibrating a corpus term
        term: Option<usize>,
        /// Lower end of the bracket
        low: f64,
        /// Upper end of the bracket
        high: f64,
        /// Objective at the lower end
        f_low: f64,
        /// Objective at the upper end
        f_high: f64,
    },

    /// Matrix/vector dimensions don't match for the operation.
    #[error("Matrix dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch {
        /// Expected dimensions description
        expected: String,
        /// Actual dimensions found
        actual: String,
    },

    /// Invalid parameter value provided.
    #[error("Invalid parameter: {param} = {value}, expected {constraint}")]
    InvalidParameter {
        /// Parameter name
        param: String,
        /// Provided value
        value: String,
        /// Constraint description
        constraint: String,
    },

    /// Iterative solver hit its iteration limit.
    #[error("Convergence failure after {iterations} iterations, residual = {residual}")]
    ConvergenceFailure {
        /// Number of iterations attempted
        iterations: usize,
        /// Magnitude of the objective at the last iterate
        residual: f64,
    },
}

impl BurstinessError {
    /// Create a dimension mismatch error with descriptive context
    #[must_use]
    pub fn dimension_mismatch(context: &str, expected: usize, actual: usize) -> Self {
        Self::DimensionMismatch {
            expected: format!("{context}={expected}"),
            actual: format!("{actual}"),
        }
    }

    /// Create a domain error for a single offending element
    #[must_use]
    pub fn domain(operation: &'static str, index: usize, value: f64, reason: &'static str) -> Self {
        Self::Domain {
            operation,
            index,
            value,
            reason,
        }
    }

    /// Create an invalid parameter error
    #[must_use]
    pub fn invalid_parameter(param: &str, value: impl ToString, constraint: &str) -> Self {
        Self::InvalidParameter {
            param: param.to_string(),
            value: value.to_string(),
            constraint: constraint.to_string(),
        }
    }

    /// Attach a term index to a root-finding failure.
    #[must_use]
    pub fn for_term(self, term_index: usize) -> Self {
        match self {
            Self::RootFinding {
                low,
                high,
                f_low,
                f_high,
                ..
            } => Self::RootFinding {
                term: Some(term_index),
                low,
                high,
                f_low,
                f_high,
            },
            other => other,
        }
    }
}

/// Convenience type alias for Results.
pub type Result<T> = std::result::Result<T, BurstinessError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimension_mismatch_display() {
        let err = BurstinessError::dimension_mismatch("Bi length", 4, 3);
        let msg = err.to_string();
        assert!(msg.contains("dimension mismatch"));
        assert!(msg.contains("Bi length=4"));
        assert!(msg.contains('3'));
    }

    #[test]
    fn test_domain_display() {
        let err = BurstinessError::domain("church_gale", 7, 0.0, "Bi must be positive");
        let msg = err.to_string();
        assert!(msg.contains("church_gale"));
        assert!(msg.contains("index 7"));
        assert!(msg.contains("Bi must be positive"));
    }

    #[test]
    fn test_root_finding_display_with_term() {
        let err = BurstinessError::RootFinding {
            term: None,
            low: 0.1,
            high: 0.2,
            f_low: 1.0,
            f_high: 2.0,
        }
        .for_term(5);
        let msg = err.to_string();
        assert!(msg.contains("for term 5"));
        assert!(msg.contains("no sign change"));
    }

    #[test]
    fn test_root_finding_display_without_term() {
        let err = BurstinessError::RootFinding {
            term: None,
            low: 0.1,
            high: 0.2,
            f_low: 1.0,
            f_high: 2.0,
        };
        assert!(!err.to_string().contains("for term"));
    }

    #[test]
    fn test_for_term_leaves_other_variants() {
        let err = BurstinessError::invalid_parameter("step", -1.0, ">0");
        assert_eq!(err.clone().for_term(3), err);
    }

    #[test]
    fn test_invalid_parameter_display() {
        let err = BurstinessError::invalid_parameter("step", "0", ">0");
        let msg = err.to_string();
        assert!(msg.contains("Invalid parameter"));
        assert!(msg.contains("step"));
        assert!(msg.contains(">0"));
    }

    #[test]
    fn test_convergence_failure_display() {
        let err = BurstinessError::ConvergenceFailure {
            iterations: 100,
            residual: 0.42,
        };
        assert!(err.to_string().contains("Convergence failure"));
        assert!(err.to_string().contains("100"));
    }
}
