//! Core containers (Vector, Matrix, CountMatrix).
//!
//! Every statistic consumes a [`CountMatrix`] and produces [`Vector`]s.

mod count_matrix;
mod matrix;
mod vector;

pub use count_matrix::CountMatrix;
pub use matrix::Matrix;
pub use vector::Vector;
