//! Bracketing root finding.

use serde::{Deserialize, Serialize};

use super::ConvergenceStatus;
use crate::error::{BurstinessError, Result};

/// Relative tolerance added to the absolute tolerance at each step.
pub const DEFAULT_RTOL: f64 = 4.0 * f64::EPSILON;

/// Result of a root search.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RootResult {
    /// Best estimate of the root
    pub root: f64,
    /// Objective value at `root`
    pub value: f64,
    /// Number of iterations performed
    pub iterations: usize,
    /// Convergence status
    pub status: ConvergenceStatus,
}

/// Finds a root of `f` in `[a, b]` with Brent's method.
///
/// `f(a)` and `f(b)` must have opposite signs (or one of them be zero).
/// Each iteration tries inverse quadratic interpolation or the secant step
/// and falls back to bisection when the step would leave the bracket or
/// shrink it too slowly, so the bracket always contains a sign change.
///
/// # Arguments
///
/// * `f` - Continuous function ℝ → ℝ
/// * `a`, `b` - Bracket ends
/// * `xtol` - Absolute tolerance on the root (must be positive)
/// * `max_iter` - Iteration limit
///
/// # Errors
///
/// `RootFinding` when the bracket has no sign change or an endpoint value
/// is not finite; `InvalidParameter` for a non-positive tolerance.
pub fn brentq<F>(f: F, a: f64, b: f64, xtol: f64, max_iter: usize) -> Result<RootResult>
where
    F: Fn(f64) -> f64,
{
    if !(xtol > 0.0) {
        return Err(BurstinessError::invalid_parameter("xtol", xtol, ">0"));
    }

    let mut xpre = a;
    let mut xcur = b;
    let mut fpre = f(xpre);
    let mut fcur = f(xcur);

    if !fpre.is_finite() || !fcur.is_finite() || fpre * fcur > 0.0 {
        return Err(BurstinessError::RootFinding {
            term: None,
            low: a,
            high: b,
            f_low: fpre,
            f_high: fcur,
        });
    }
    if fpre == 0.0 {
        return Ok(converged(xpre, fpre, 0));
    }
    if fcur == 0.0 {
        return Ok(converged(xcur, fcur, 0));
    }

    let mut xblk = 0.0;
    let mut fblk = 0.0;
    let mut spre = 0.0;
    let mut scur = 0.0;

    for iteration in 1..=max_iter {
        if fpre != 0.0 && fcur != 0.0 && fpre.is_sign_negative() != fcur.is_sign_negative() {
            xblk = xpre;
            fblk = fpre;
            spre = xcur - xpre;
            scur = spre;
        }
        if fblk.abs() < fcur.abs() {
            xpre = xcur;
            xcur = xblk;
            xblk = xpre;

            fpre = fcur;
            fcur = fblk;
            fblk = fpre;
        }

        let delta = (xtol + DEFAULT_RTOL * xcur.abs()) / 2.0;
        let sbis = (xblk - xcur) / 2.0;
        if fcur == 0.0 || sbis.abs() < delta {
            return Ok(converged(xcur, fcur, iteration));
        }

        if spre.abs() > delta && fcur.abs() < fpre.abs() {
            let stry = if xpre == xblk {
                // secant
                -fcur * (xcur - xpre) / (fcur - fpre)
            } else {
                // inverse quadratic interpolation
                let dpre = (fpre - fcur) / (xpre - xcur);
                let dblk = (fblk - fcur) / (xblk - xcur);
                -fcur * (fblk * dblk - fpre * dpre) / (dblk * dpre * (fblk - fpre))
            };
            if 2.0 * stry.abs() < spre.abs().min(3.0 * sbis.abs() - delta) {
                spre = scur;
                scur = stry;
            } else {
                spre = sbis;
                scur = sbis;
            }
        } else {
            spre = sbis;
            scur = sbis;
        }

        xpre = xcur;
        fpre = fcur;
        if scur.abs() > delta {
            xcur += scur;
        } else {
            xcur += if sbis > 0.0 { delta } else { -delta };
        }
        fcur = f(xcur);
    }

    Ok(RootResult {
        root: xcur,
        value: fcur,
        iterations: max_iter,
        status: ConvergenceStatus::MaxIterations,
    })
}

fn converged(root: f64, value: f64, iterations: usize) -> RootResult {
    RootResult {
        root,
        value,
        iterations,
        status: ConvergenceStatus::Converged,
    }
}
