//! Word statistics and burstiness over a term-document count matrix.
//!
//! Every function is pure: it reads a [`CountMatrix`](crate::primitives::CountMatrix)
//! or vectors derived from it and returns a new [`Vector`](crate::primitives::Vector)
//! (one value per term unless stated otherwise). Dense and sparse storage
//! give identical results.
//!
//! # Layers
//!
//! - [`aggregate`]: Ni, Nj, n, presence matrix, Bi, Bj
//! - [`frequency`]: CF, DF, IDF, ICF, Church-Gale, Gries, degree of pervasiveness
//! - [`model`]: alpha matrix and Dirichlet-Multinomial scores, the Bernoulli
//!   model (mean/variance of Bi, theta grid, expected ICF/IDF)
//! - [`burstiness`]: Kwok, Irvine-Callison-Burch, chi-square, naive SHMS
//! - [`calibration`]: optimal theta per term and relative ICF
//! - [`report`]: everything above in one [`WordStatistics`] value
//!
//! # Example
//!
//! ```
//! use burstiness::primitives::{CountMatrix, Matrix};
//! use burstiness::wordstats::{
//!     church_gale, collection_frequency, presence_matrix, term_doc_counts, term_totals,
//! };
//!
//! let rows = Matrix::from_rows(&[[2.0, 0.0], [1.0, 3.0]]).expect("equal rows");
//! let counts = CountMatrix::dense(rows).expect("non-negative counts");
//!
//! let ni = term_totals(&counts);
//! let bi = term_doc_counts(&presence_matrix(&counts));
//! assert_eq!(collection_frequency(&ni).expect("tokens present").as_slice(), &[0.5, 0.5]);
//! assert_eq!(church_gale(&ni, &bi).expect("Bi > 0").as_slice(), &[1.5, 3.0]);
//! ```

pub mod aggregate;
pub mod burstiness;
pub mod calibration;
pub mod frequency;
mod guard;
pub mod model;
pub mod report;

pub use aggregate::{
    doc_term_counts, doc_totals, grand_total, presence_matrix, term_doc_counts, term_totals,
};
pub use burstiness::{
    chi_square_pvalues, chi_square_score, irvine_callison_burch, kwok, naive_shms, nij_by_nj,
};
pub use calibration::{
    eidf_idf_diff, optimal_theta, optimal_theta_with, optimal_thetas, relative_icf,
    CalibrationConfig,
};
pub use frequency::{
    church_gale, collection_frequency, degree_of_pervasiveness, document_frequency, gries,
    inverse_collection_frequency, inverse_document_frequency,
};
pub use model::{
    alpha_matrix, bernoulli_matrix, dirichlet_multinomial, expected_icf, expected_idf,
    improved_dm, mean_alpha, mean_bi, theta_grid, variance_alpha, variance_bi, MAX_GRID_POINTS,
};
pub use report::{Calibration, WordStatistics};
