//! Burstiness: corpus word statistics and word burstiness in pure Rust.
//!
//! Given a term-document count matrix (rows are documents, columns are
//! terms), the crate computes classic frequency statistics (CF, DF, IDF,
//! ICF), dispersion measures (Church-Gale, Gries), model-based scores
//! (Dirichlet-Multinomial, Bernoulli expected ICF/IDF) and burstiness
//! scores (Kwok, Irvine-Callison-Burch, chi-square, naive SHMS, RICF).
//!
//! # Quick Start
//!
//! ```
//! use burstiness::prelude::*;
//!
//! // three documents, three terms
//! let counts = CountMatrix::from_triplets(
//!     3,
//!     3,
//!     &[
//!         (0, 0, 2.0),
//!         (0, 1, 1.0),
//!         (1, 0, 2.0),
//!         (1, 2, 1.0),
//!         (2, 0, 2.0),
//!         (2, 1, 3.0),
//!         (2, 2, 1.0),
//!     ],
//! )
//! .expect("coordinates in range");
//!
//! let stats = WordStatistics::compute(&counts).expect("no empty term or document");
//! assert_eq!(stats.bi.as_slice(), &[3.0, 2.0, 2.0]);
//!
//! let calibration = stats
//!     .calibrate(&CalibrationConfig::default())
//!     .expect("valid configuration");
//! assert_eq!(calibration.n_calibrated(), 3);
//! ```
//!
//! # Modules
//!
//! - [`primitives`]: Vector, Matrix and the dense/sparse [`CountMatrix`]
//! - [`wordstats`]: every corpus statistic and burstiness score
//! - [`stats`]: chi-square goodness-of-fit test
//! - [`optim`]: Brent's bracketing root finder
//! - [`error`]: error type shared by all modules
//!
//! # Features
//!
//! - `parallel`: per-term chi-square scoring and calibration run on rayon

pub mod error;
pub mod optim;
pub mod prelude;
pub mod primitives;
pub mod stats;
pub mod wordstats;

pub use error::{BurstinessError, Result};
pub use primitives::{CountMatrix, Matrix, Vector};
