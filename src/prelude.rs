//! Convenience re-exports for common usage.
//!
//! # Usage
//!
//! ```
//! use burstiness::prelude::*;
//! ```

pub use crate::error::BurstinessError;
pub use crate::primitives::{CountMatrix, Matrix, Vector};
pub use crate::wordstats::{Calibration, CalibrationConfig, WordStatistics};
pub use crate::wordstats::{
    chi_square_score, church_gale, collection_frequency, document_frequency, gries,
    inverse_collection_frequency, inverse_document_frequency, irvine_callison_burch, kwok,
    naive_shms, optimal_theta, relative_icf,
};
