//! Statistical tests used by the burstiness scores.

pub mod hypothesis;

pub use hypothesis::{chisquare, ChiSquareResult};
