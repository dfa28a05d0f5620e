//! Property-based tests using proptest.
//!
//! These tests verify invariants of the corpus statistics on random count
//! matrices with no empty term and no empty document.

use burstiness::prelude::*;
use burstiness::wordstats::{
    alpha_matrix, chi_square_pvalues, degree_of_pervasiveness, doc_term_counts, doc_totals,
    grand_total, mean_alpha, presence_matrix, term_doc_counts, term_totals, variance_alpha,
};
use proptest::prelude::*;

// Strategy for count matrices where every row and every column is non-empty
fn counts_strategy() -> impl Strategy<Value = Matrix<f64>> {
    (2usize..7, 2usize..7)
        .prop_flat_map(|(d, m)| (Just(d), Just(m), proptest::collection::vec(0u8..5, d * m)))
        .prop_map(|(d, m, raw)| {
            let mut data: Vec<f64> = raw.into_iter().map(f64::from).collect();
            for doc in 0..d {
                data[doc * m + doc % m] += 1.0;
            }
            for term in 0..m {
                data[(term % d) * m + term] += 1.0;
            }
            Matrix::from_vec(d, m, data).expect("Test data should be valid")
        })
}

fn both(matrix: Matrix<f64>) -> (CountMatrix, CountMatrix) {
    let dense = CountMatrix::dense(matrix).expect("non-negative counts");
    let sparse = CountMatrix::sparse(dense.to_sparse()).expect("non-negative counts");
    (dense, sparse)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn term_and_document_totals_agree(m in counts_strategy()) {
        let counts = CountMatrix::dense(m).expect("non-negative counts");
        let by_term = grand_total(&term_totals(&counts));
        let by_doc = grand_total(&doc_totals(&counts));
        prop_assert!((by_term - by_doc).abs() < 1e-9);
    }

    #[test]
    fn presence_is_binary_and_bounded(m in counts_strategy()) {
        let counts = CountMatrix::dense(m).expect("non-negative counts");
        let (d, n_terms) = counts.shape();
        let presence = presence_matrix(&counts);
        let dense = presence.to_dense();
        prop_assert!(dense.as_slice().iter().all(|&v| v == 0.0 || v == 1.0));

        let bi = term_doc_counts(&presence);
        let bj = doc_term_counts(&presence);
        prop_assert!(bi.iter().all(|b| b >= 1.0 && b <= d as f64));
        prop_assert!(bj.iter().all(|b| b >= 1.0 && b <= n_terms as f64));
        prop_assert!((bi.sum() - bj.sum()).abs() < 1e-12);
    }

    #[test]
    fn collection_frequency_sums_to_one(m in counts_strategy()) {
        let counts = CountMatrix::dense(m).expect("non-negative counts");
        let cf = collection_frequency(&term_totals(&counts)).expect("tokens present");
        prop_assert!((cf.sum() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn gries_lies_in_unit_interval(m in counts_strategy()) {
        let counts = CountMatrix::dense(m).expect("non-negative counts");
        let ni = term_totals(&counts);
        let nj = doc_totals(&counts);
        let n = grand_total(&ni);

        let g = gries(&counts, &ni, &nj, n).expect("no empty term");
        prop_assert!(g.iter().all(|x| (-1e-12..=1.0 + 1e-12).contains(&x)));

        let dop = degree_of_pervasiveness(&counts, &ni, &nj, n).expect("no empty term");
        prop_assert_eq!(dop, g.neg());
    }

    #[test]
    fn chi_square_pvalues_are_probabilities(m in counts_strategy()) {
        let counts = CountMatrix::dense(m).expect("non-negative counts");
        let p = chi_square_pvalues(&counts).expect("d >= 2 and no empty term");
        prop_assert!(p.iter().all(|x| (0.0..=1.0).contains(&x)));
    }

    #[test]
    fn dense_and_sparse_agree(m in counts_strategy()) {
        let (dense, sparse) = both(m);
        let d = dense.n_docs();

        let ni = term_totals(&dense);
        let nj = doc_totals(&dense);
        let n = grand_total(&ni);
        prop_assert!(ni.approx_eq(&term_totals(&sparse), 1e-12));
        prop_assert!(nj.approx_eq(&doc_totals(&sparse), 1e-12));

        let g_dense = gries(&dense, &ni, &nj, n).expect("valid");
        let g_sparse = gries(&sparse, &ni, &nj, n).expect("valid");
        prop_assert!(g_dense.approx_eq(&g_sparse, 1e-12));

        let p_dense = chi_square_pvalues(&dense).expect("valid");
        let p_sparse = chi_square_pvalues(&sparse).expect("valid");
        prop_assert!(p_dense.approx_eq(&p_sparse, 1e-12));

        let bj = doc_term_counts(&presence_matrix(&dense));
        let alpha_dense = alpha_matrix(&dense, &bj, &nj).expect("valid");
        let alpha_sparse = alpha_matrix(&sparse, &bj, &nj).expect("valid");
        let mu = mean_alpha(&alpha_dense, d).expect("valid");
        prop_assert!(mu.approx_eq(&mean_alpha(&alpha_sparse, d).expect("valid"), 1e-12));
        let var_dense = variance_alpha(&alpha_dense, &mu, d).expect("valid");
        let var_sparse = variance_alpha(&alpha_sparse, &mu, d).expect("valid");
        prop_assert!(var_dense.approx_eq(&var_sparse, 1e-12));

        let shms_dense = naive_shms(&dense).expect("valid");
        let shms_sparse = naive_shms(&sparse).expect("valid");
        prop_assert!(shms_dense.approx_eq(&shms_sparse, 1e-12));
    }

    #[test]
    fn idf_is_non_negative(m in counts_strategy()) {
        // a term in every document has zero IDF
        let counts = CountMatrix::dense(m).expect("non-negative counts");
        let d = counts.n_docs();
        let bi = term_doc_counts(&presence_matrix(&counts));
        let idf = inverse_document_frequency(&document_frequency(&bi, d).expect("Bi <= d"))
            .expect("Bi > 0");
        for (b, x) in bi.iter().zip(idf.iter()) {
            prop_assert!(x >= 0.0);
            if b == d as f64 {
                prop_assert!(x.abs() < 1e-15);
            }
        }
    }
}
