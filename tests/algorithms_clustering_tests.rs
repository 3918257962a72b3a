#![cfg(feature = "dev")]

use approx::assert_relative_eq;
use rbfn_rs::internals::algorithms::clustering::{
    CenterSelector, FixedCenters, KMeans, check_cluster_request,
};
use rbfn_rs::internals::primitives::errors::RbfnError;

fn sorted(mut v: Vec<f64>) -> Vec<f64> {
    v.sort_by(|a, b| a.partial_cmp(b).unwrap());
    v
}

// ============================================================================
// Request Validation Tests
// ============================================================================

#[test]
fn test_check_cluster_request_counts_points() {
    let x = [0.0, 1.0, 2.0, 3.0, 4.0, 5.0];
    assert_eq!(check_cluster_request(&x, 2, 3).unwrap(), 3);
}

#[test]
fn test_check_cluster_request_zero_k() {
    let err = check_cluster_request(&[1.0, 2.0], 1, 0).unwrap_err();
    assert!(err.is_configuration());
}

#[test]
fn test_check_cluster_request_k_exceeds_n() {
    let err = check_cluster_request(&[1.0, 2.0], 1, 3).unwrap_err();
    assert!(err.is_configuration());
    assert!(err.to_string().contains("exceeds"));
}

#[test]
fn test_check_cluster_request_empty() {
    let x: [f64; 0] = [];
    assert_eq!(check_cluster_request(&x, 1, 1), Err(RbfnError::EmptyInput));
}

#[test]
fn test_check_cluster_request_ragged() {
    let err = check_cluster_request(&[1.0, 2.0, 3.0], 2, 1).unwrap_err();
    assert!(matches!(err, RbfnError::DimensionMismatch { .. }));
}

// ============================================================================
// K-Means Options Tests
// ============================================================================

#[test]
fn test_kmeans_defaults() {
    let km = KMeans::default();
    assert_eq!(km.max_iterations, 300);
    assert_eq!(km.restarts, 10);
    assert_eq!(km.seed, 0);
    assert_relative_eq!(km.tolerance, 1e-4);
    assert!(km.validate().is_ok());
}

#[test]
fn test_kmeans_invalid_options() {
    let zero_iter = KMeans {
        max_iterations: 0,
        ..KMeans::default()
    };
    assert!(zero_iter.validate().unwrap_err().is_configuration());

    let zero_restarts = KMeans {
        restarts: 0,
        ..KMeans::default()
    };
    assert!(zero_restarts.validate().is_err());

    let bad_tol = KMeans {
        tolerance: f64::NAN,
        ..KMeans::default()
    };
    assert!(bad_tol.validate().is_err());

    let negative_tol = KMeans {
        tolerance: -1.0,
        ..KMeans::default()
    };
    assert!(negative_tol.validate().is_err());
}

// ============================================================================
// K-Means Clustering Tests
// ============================================================================

#[test]
fn test_kmeans_line_split() {
    let x = [0.0, 1.0, 2.0, 3.0];
    let result = KMeans::default().run(&x, 1, 2).unwrap();

    let centers = sorted(result.centers.clone());
    assert_relative_eq!(centers[0], 0.5, epsilon = 1e-12);
    assert_relative_eq!(centers[1], 2.5, epsilon = 1e-12);
    assert_relative_eq!(result.inertia, 1.0, epsilon = 1e-12);
    assert!(result.converged);
    assert_eq!(result.labels.len(), 4);
    assert_eq!(result.labels[0], result.labels[1]);
    assert_eq!(result.labels[2], result.labels[3]);
    assert_ne!(result.labels[0], result.labels[2]);
}

#[test]
fn test_kmeans_separated_groups_2d() {
    let x = [
        0.0, 0.0, 0.2, 0.0, 0.0, 0.2, // group A
        10.0, 10.0, 10.2, 10.0, 10.0, 10.2, // group B
    ];
    let result = KMeans::default().run(&x, 2, 2).unwrap();
    assert_eq!(result.centers.len(), 4);

    let mut rows: Vec<[f64; 2]> = result
        .centers
        .chunks_exact(2)
        .map(|c| [c[0], c[1]])
        .collect();
    rows.sort_by(|a, b| a[0].partial_cmp(&b[0]).unwrap());

    let third = 0.2 / 3.0;
    assert_relative_eq!(rows[0][0], third, epsilon = 1e-10);
    assert_relative_eq!(rows[0][1], third, epsilon = 1e-10);
    assert_relative_eq!(rows[1][0], 10.0 + third, epsilon = 1e-10);
    assert_relative_eq!(rows[1][1], 10.0 + third, epsilon = 1e-10);
}

#[test]
fn test_kmeans_k_equals_n_returns_points() {
    let x = [5.0, -1.0, 3.0];
    let result = KMeans::default().run(&x, 1, 3).unwrap();
    assert_eq!(sorted(result.centers), vec![-1.0, 3.0, 5.0]);
    assert_relative_eq!(result.inertia, 0.0);
}

#[test]
fn test_kmeans_deterministic_for_seed() {
    let x: Vec<f64> = (0..40).map(|i| ((i * 37) % 17) as f64 * 0.3).collect();
    let km = KMeans {
        seed: 42,
        ..KMeans::default()
    };
    let a = km.run(&x, 2, 4).unwrap();
    let b = km.run(&x, 2, 4).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_kmeans_identical_points() {
    // All distances zero: seeding falls back to uniform draws
    let x = [2.0, 2.0, 2.0, 2.0];
    let result = KMeans::default().run(&x, 1, 2).unwrap();
    assert_eq!(result.centers, vec![2.0, 2.0]);
    assert_eq!(result.inertia, 0.0);
}

#[test]
fn test_kmeans_single_iteration_budget() {
    let x = [0.0, 1.0, 2.0, 3.0, 10.0, 11.0];
    let km = KMeans {
        max_iterations: 1,
        restarts: 1,
        ..KMeans::default()
    };
    let result = km.run(&x, 1, 2).unwrap();
    assert_eq!(result.iterations, 1);
    assert_eq!(result.centers.len(), 2);
}

#[test]
fn test_kmeans_rejects_bad_request() {
    let err = KMeans::default().run(&[1.0, 2.0], 1, 5).unwrap_err();
    assert!(err.is_configuration());
}

#[test]
fn test_kmeans_as_center_selector() {
    let x = [0.0, 1.0, 2.0, 3.0];
    let selector: &dyn CenterSelector<f64> = &KMeans::default();
    let centers = selector.select_centers(&x, 1, 2).unwrap();
    assert_eq!(centers.len(), 2);
}

// ============================================================================
// Fixed Centers Tests
// ============================================================================

#[test]
fn test_fixed_centers_returned_as_is() {
    let x = [0.0, 1.0, 2.0];
    let fixed = FixedCenters(vec![2.0, 0.0]);
    assert_eq!(fixed.select_centers(&x, 1, 2).unwrap(), vec![2.0, 0.0]);
}

#[test]
fn test_fixed_centers_wrong_length() {
    let x = [0.0, 1.0, 2.0];
    let fixed = FixedCenters(vec![1.0]);
    let err = fixed.select_centers(&x, 1, 2).unwrap_err();
    assert!(matches!(
        err,
        RbfnError::DimensionMismatch {
            expected: 2,
            got: 1,
            ..
        }
    ));
}

#[test]
fn test_fixed_centers_still_check_k() {
    let x = [0.0];
    let fixed = FixedCenters(vec![0.0, 1.0]);
    assert!(fixed.select_centers(&x, 1, 2).unwrap_err().is_configuration());
}
