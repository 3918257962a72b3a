#![cfg(feature = "dev")]

use approx::assert_relative_eq;
use rbfn_rs::internals::math::linalg::FloatLinalg;

// ============================================================================
// Least-Squares Solve Tests
// ============================================================================

#[test]
fn test_square_system_exact() {
    // [2 0; 0 4] x = [2; 8] -> x = [1; 2]
    let a = [2.0, 0.0, 0.0, 4.0];
    let b = [2.0, 8.0];
    let x = f64::solve_least_squares(&a, 2, 2, &b, 1).unwrap();
    assert_relative_eq!(x[0], 1.0, epsilon = 1e-12);
    assert_relative_eq!(x[1], 2.0, epsilon = 1e-12);
}

#[test]
fn test_overdetermined_line_fit() {
    // Fit y = 2t + 1 through exact points with a ones column
    let a = [
        0.0, 1.0, //
        1.0, 1.0, //
        2.0, 1.0, //
        3.0, 1.0, //
    ];
    let b = [1.0, 3.0, 5.0, 7.0];
    let x = f64::solve_least_squares(&a, 4, 2, &b, 1).unwrap();
    assert_relative_eq!(x[0], 2.0, epsilon = 1e-10);
    assert_relative_eq!(x[1], 1.0, epsilon = 1e-10);
}

#[test]
fn test_overdetermined_least_squares_mean() {
    // Single column of ones: solution is the mean of b
    let a = [1.0, 1.0, 1.0];
    let b = [1.0, 2.0, 6.0];
    let x = f64::solve_least_squares(&a, 3, 1, &b, 1).unwrap();
    assert_relative_eq!(x[0], 3.0, epsilon = 1e-12);
}

#[test]
fn test_multiple_right_hand_sides() {
    let a = [1.0, 0.0, 0.0, 1.0];
    // Row-major 2x2 rhs
    let b = [1.0, 2.0, 3.0, 4.0];
    let x = f64::solve_least_squares(&a, 2, 2, &b, 2).unwrap();
    for (got, want) in x.iter().zip(&b) {
        assert_relative_eq!(*got, *want, epsilon = 1e-12);
    }
}

#[test]
fn test_rank_deficient_minimum_norm() {
    // Two identical columns: minimum-norm solution splits the weight evenly
    let a = [1.0, 1.0, 2.0, 2.0];
    let b = [2.0, 4.0];
    let x = f64::solve_least_squares(&a, 2, 2, &b, 1).unwrap();
    assert_relative_eq!(x[0], 1.0, epsilon = 1e-10);
    assert_relative_eq!(x[1], 1.0, epsilon = 1e-10);
}

#[test]
fn test_f32_solve() {
    let a = [1.0f32, 0.0, 0.0, 2.0];
    let b = [3.0f32, 4.0];
    let x = f32::solve_least_squares(&a, 2, 2, &b, 1).unwrap();
    assert_relative_eq!(x[0], 3.0f32, epsilon = 1e-5);
    assert_relative_eq!(x[1], 2.0f32, epsilon = 1e-5);
}

// ============================================================================
// Pseudoinverse Tests
// ============================================================================

#[test]
fn test_pseudo_inverse_shape_and_identity() {
    // 3x2 with full column rank: pinv(A) * A = I
    let a = [1.0, 0.0, 0.0, 1.0, 1.0, 1.0];
    let p = f64::pseudo_inverse(&a, 3, 2).unwrap();
    assert_eq!(p.len(), 6);

    // p is 2x3 row-major
    for i in 0..2 {
        for j in 0..2 {
            let v: f64 = (0..3).map(|k| p[i * 3 + k] * a[k * 2 + j]).sum();
            let expected = if i == j { 1.0 } else { 0.0 };
            assert_relative_eq!(v, expected, epsilon = 1e-12);
        }
    }
}
