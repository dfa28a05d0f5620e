pub(crate) use super::*;
use crate::wordstats::aggregate::{doc_term_counts, doc_totals, presence_matrix};

/// N = [[2, 0], [1, 3]]: Nj = [2, 4], Bj = [1, 2], so both weights are 1/2.
fn two_by_two(sparse: bool) -> CountMatrix {
    let dense = CountMatrix::dense(Matrix::from_rows(&[[2.0, 0.0], [1.0, 3.0]]).expect("rows"))
        .expect("non-negative counts");
    if sparse {
        CountMatrix::sparse(dense.to_sparse()).expect("valid")
    } else {
        dense
    }
}

fn alpha_of(counts: &CountMatrix) -> CountMatrix {
    let nj = doc_totals(counts);
    let bj = doc_term_counts(&presence_matrix(counts));
    alpha_matrix(counts, &bj, &nj).expect("no empty documents")
}

#[test]
fn test_alpha_matrix_values() {
    let alpha = alpha_of(&two_by_two(false)).to_dense();
    assert_eq!(alpha.as_slice(), &[1.0, 0.0, 0.5, 1.5]);
}

#[test]
fn test_alpha_mean_and_variance() {
    for sparse in [false, true] {
        let alpha = alpha_of(&two_by_two(sparse));
        let mu = mean_alpha(&alpha, 2).expect("valid d");
        assert_eq!(mu.as_slice(), &[0.75, 0.75]);

        let sigma2 = variance_alpha(&alpha, &mu, 2).expect("valid shapes");
        assert!((sigma2[0] - 0.0625).abs() < 1e-15);
        assert!((sigma2[1] - 0.5625).abs() < 1e-15);

        let score = improved_dm(&sigma2, &mu).expect("positive means");
        assert!((score[0] - 1.0 / 12.0).abs() < 1e-15);
        assert!((score[1] - 0.75).abs() < 1e-15);
    }
}

#[test]
fn test_sparse_alpha_stays_sparse() {
    assert!(alpha_of(&two_by_two(true)).is_sparse());
}

#[test]
fn test_dirichlet_multinomial_matches_mean_alpha() {
    let counts = two_by_two(true);
    let nj = doc_totals(&counts);
    let bj = doc_term_counts(&presence_matrix(&counts));
    let dm = dirichlet_multinomial(&counts, &bj, &nj, 2).expect("valid");
    let mu = mean_alpha(&alpha_of(&counts), 2).expect("valid");
    assert!(dm.approx_eq(&mu, 1e-15));
}

#[test]
fn test_empty_document_is_domain_error() {
    let counts = CountMatrix::from_triplets(2, 1, &[(0, 0, 1.0)]).expect("valid");
    let nj = doc_totals(&counts);
    let bj = doc_term_counts(&presence_matrix(&counts));
    let err = alpha_matrix(&counts, &bj, &nj).expect_err("doc 1 is empty");
    assert!(matches!(err, BurstinessError::Domain { index: 1, .. }));
    assert!(dirichlet_multinomial(&counts, &bj, &nj, 2).is_err());
}

#[test]
fn test_alpha_shape_mismatch() {
    let counts = two_by_two(false);
    let short = Vector::from_slice(&[1.0]);
    let err = alpha_matrix(&counts, &short, &doc_totals(&counts)).expect_err("Bj too short");
    assert!(matches!(err, BurstinessError::DimensionMismatch { .. }));
    assert!(mean_alpha(&alpha_of(&counts), 3).is_err());
}

#[test]
fn test_improved_dm_zero_mean() {
    let err = improved_dm(&Vector::from_slice(&[0.1]), &Vector::from_slice(&[0.0]))
        .expect_err("zero mean");
    assert!(matches!(err, BurstinessError::Domain { .. }));
}

#[test]
fn test_bernoulli_moments() {
    let theta = Vector::from_slice(&[0.5]);
    let nj = Vector::from_slice(&[2.0, 4.0]);

    let mean = mean_bi(&theta, &nj, 2).expect("valid");
    assert!((mean[0] - 1.6875).abs() < 1e-15);

    let phi = bernoulli_matrix(&theta, 2).expect("valid");
    assert_eq!(phi.shape(), (2, 1));
    assert_eq!(phi.get(1, 0), 0.5);

    let var = variance_bi(&nj, &phi).expect("valid");
    assert!((var[0] - 0.246_093_75).abs() < 1e-15);

    let eidf = expected_idf(&mean, &var, 2).expect("positive mean");
    let expected = -1.6875_f64.ln() + 0.246_093_75 / (2.0 * 1.6875 * 1.6875) + 2.0_f64.ln();
    assert!((eidf[0] - expected).abs() < 1e-15);
}

#[test]
fn test_mean_bi_certain_occurrence() {
    // theta = 1: every document with at least one token contains the term
    let nj = Vector::from_slice(&[3.0, 1.0]);
    let mean = mean_bi(&Vector::from_slice(&[1.0]), &nj, 2).expect("valid");
    assert_eq!(mean[0], 2.0);
}

#[test]
fn test_bernoulli_rejects_invalid_theta() {
    assert!(bernoulli_matrix(&Vector::from_slice(&[0.0]), 2).is_err());
    assert!(mean_bi(&Vector::from_slice(&[1.5]), &Vector::from_slice(&[1.0]), 1).is_err());
    assert!(expected_icf(&Vector::from_slice(&[-0.1]), 10.0).is_err());
}

#[test]
fn test_variance_bi_shape_mismatch() {
    let phi = bernoulli_matrix(&Vector::from_slice(&[0.5]), 3).expect("valid");
    let err = variance_bi(&Vector::from_slice(&[1.0, 2.0]), &phi).expect_err("3 rows vs 2 docs");
    assert!(matches!(err, BurstinessError::DimensionMismatch { .. }));
}

#[test]
fn test_expected_icf_values() {
    let eicf = expected_icf(&Vector::from_slice(&[0.5, 1.0]), 6.0).expect("valid");
    assert!((eicf[0] - (0.5 / 6.0 + std::f64::consts::LN_2)).abs() < 1e-15);
    assert_eq!(eicf[1], 0.0);
}

#[test]
fn test_expected_idf_zero_mean() {
    let err = expected_idf(&Vector::from_slice(&[0.0]), &Vector::from_slice(&[0.0]), 2)
        .expect_err("zero mean");
    assert!(matches!(err, BurstinessError::Domain { .. }));
}

#[test]
fn test_theta_grid_spacing() {
    let cf = Vector::from_slice(&[0.2, 0.001, 0.05]);
    let grid = theta_grid(&cf, 0.25).expect("valid");
    assert!((grid[0] - 0.001).abs() < 1e-15);
    for pair in grid.as_slice().windows(2) {
        assert!(((pair[1] / pair[0]).ln() - 0.25).abs() < 1e-12);
    }
    assert!(grid.max().expect("non-empty") < 0.2);
    // ceil((ln 0.2 - ln 0.001) / 0.25) = ceil(21.19...) = 22
    assert_eq!(grid.len(), 22);
}

#[test]
fn test_theta_grid_degenerate() {
    assert!(theta_grid(&Vector::from_slice(&[0.1, 0.2]), 0.0).is_err());
    assert!(theta_grid(&Vector::from_slice(&[]), 0.1).is_err());
    assert!(theta_grid(&Vector::from_slice(&[0.0, 0.2]), 0.1).is_err());
    assert!(theta_grid(&Vector::from_slice(&[0.3, 0.3]), 0.1)
        .expect("single point")
        .is_empty());
}

#[test]
fn test_theta_grid_rejects_oversized_grid() {
    let cf = Vector::from_slice(&[0.01, 0.1]);
    let err = theta_grid(&cf, 1e-300).expect_err("grid would not fit in memory");
    assert!(matches!(
        err,
        BurstinessError::InvalidParameter { ref param, .. } if param == "step"
    ));
    // ceil(ln(10) / 1e-3) = 2303
    assert_eq!(theta_grid(&cf, 1e-3).expect("bounded grid").len(), 2303);
}
