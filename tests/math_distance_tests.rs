#![cfg(feature = "dev")]

use approx::assert_relative_eq;
use rbfn_rs::internals::math::distance::{
    DistanceLinalg, column_means, euclidean, mean_variance, nearest,
};

// ============================================================================
// Euclidean Distance Tests
// ============================================================================

#[test]
fn test_euclidean_distance_1d() {
    let a = [1.0];
    let b = [4.0];
    assert_relative_eq!(euclidean(&a, &b), 3.0);
}

#[test]
fn test_euclidean_distance_2d() {
    let a = [0.0, 0.0];
    let b = [3.0, 4.0];
    assert_relative_eq!(euclidean(&a, &b), 5.0);
}

#[test]
fn test_euclidean_distance_3d_scalar_tail() {
    let a = [1.0, 2.0, 3.0];
    let b = [4.0, 6.0, 8.0];
    // diffs: 3, 4, 5. sum_sq: 9+16+25=50
    assert_relative_eq!(euclidean(&a, &b), 50.0f64.sqrt());
}

#[test]
fn test_squared_euclidean_f32_lanes_and_tail() {
    // 5 dims: one full f32x4 lane plus a scalar tail
    let a = [1.0f32, 2.0, 3.0, 4.0, 5.0];
    let b = [0.0f32, 0.0, 0.0, 0.0, 0.0];
    assert_relative_eq!(f32::squared_euclidean(&a, &b), 55.0f32);
}

#[test]
fn test_distance_symmetric_and_zero_on_identity() {
    let a = [0.3, -1.2, 4.5, 2.0];
    let b = [1.1, 0.4, -2.0, 3.3];
    assert_relative_eq!(euclidean(&a, &b), euclidean(&b, &a));
    assert_eq!(euclidean(&a, &a), 0.0);
}

// ============================================================================
// Nearest Row Tests
// ============================================================================

#[test]
fn test_nearest_picks_closest_row() {
    let points = [
        0.0, 0.0, // row 0
        10.0, 10.0, // row 1
        2.0, 1.0, // row 2
    ];
    let (idx, d2) = nearest(&[2.0, 2.0], &points, 2).unwrap();
    assert_eq!(idx, 2);
    assert_relative_eq!(d2, 1.0);
}

#[test]
fn test_nearest_ties_resolve_to_lowest_index() {
    let points = [-1.0, 1.0];
    let (idx, _) = nearest(&[0.0], &points, 1).unwrap();
    assert_eq!(idx, 0);
}

#[test]
fn test_nearest_empty_points() {
    let points: [f64; 0] = [];
    assert!(nearest(&[0.0], &points, 1).is_none());
}

// ============================================================================
// Point Set Statistics Tests
// ============================================================================

#[test]
fn test_column_means() {
    let points = [
        1.0, 10.0, // p1
        2.0, 5.0, // p2
        6.0, 30.0, // p3
    ];
    assert_eq!(column_means(&points, 2), vec![3.0, 15.0]);
}

#[test]
fn test_mean_variance() {
    // Column 0: 0, 2 -> variance 1. Column 1: 0, 4 -> variance 4.
    let points = [0.0, 0.0, 2.0, 4.0];
    assert_relative_eq!(mean_variance(&points, 2), 2.5);
}

#[test]
fn test_mean_variance_constant_points() {
    let points = [3.0, 3.0, 3.0];
    assert_eq!(mean_variance(&points, 1), 0.0);
}
