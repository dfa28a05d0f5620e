//! Numerical solvers.
//!
//! # Available Solvers
//!
//! - [`brentq`] - Brent's bracketing root finder (inverse quadratic
//!   interpolation with bisection fallback)
//!
//! ```
//! use burstiness::optim::{brentq, ConvergenceStatus};
//!
//! let result = brentq(|x| x * x - 2.0, 0.0, 2.0, 1e-12, 100).expect("bracket has a sign change");
//! assert_eq!(result.status, ConvergenceStatus::Converged);
//! assert!((result.root - 2.0_f64.sqrt()).abs() < 1e-10);
//! ```

use serde::{Deserialize, Serialize};

pub mod root;

pub use root::{brentq, RootResult, DEFAULT_RTOL};

/// Convergence status of an iterative solver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConvergenceStatus {
    /// Converged (bracket narrower than tolerance, or exact zero hit)
    Converged,
    /// Reached maximum iteration limit
    MaxIterations,
}
