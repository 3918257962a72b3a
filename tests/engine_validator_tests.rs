#![cfg(feature = "dev")]

use rbfn_rs::internals::algorithms::clustering::KMeans;
use rbfn_rs::internals::engine::validator::Validator;
use rbfn_rs::internals::primitives::errors::RbfnError;

// ============================================================================
// Training Input Tests
// ============================================================================

#[test]
fn test_validate_inputs_ok() {
    let x = [0.0, 1.0, 2.0, 3.0, 4.0, 5.0];
    let y = [1.0, 2.0, 3.0];
    assert_eq!(Validator::validate_inputs(&x, &y, 2, 1).unwrap(), 3);
}

#[test]
fn test_validate_inputs_multi_output() {
    let x = [0.0, 1.0];
    let y = [1.0, 2.0, 3.0, 4.0];
    assert_eq!(Validator::validate_inputs(&x, &y, 1, 2).unwrap(), 2);
}

#[test]
fn test_validate_inputs_empty() {
    let empty: [f64; 0] = [];
    assert_eq!(
        Validator::validate_inputs(&empty, &empty, 1, 1),
        Err(RbfnError::EmptyInput)
    );
}

#[test]
fn test_validate_inputs_ragged_rows() {
    let x = [0.0, 1.0, 2.0];
    let y = [1.0];
    let err = Validator::validate_inputs(&x, &y, 2, 1).unwrap_err();
    assert!(matches!(
        err,
        RbfnError::DimensionMismatch {
            context: "input row width",
            ..
        }
    ));
}

#[test]
fn test_validate_inputs_target_length() {
    let x = [0.0, 1.0, 2.0];
    let y = [1.0, 2.0];
    let err = Validator::validate_inputs(&x, &y, 1, 1).unwrap_err();
    assert_eq!(
        err,
        RbfnError::DimensionMismatch {
            context: "target length",
            expected: 3,
            got: 2,
        }
    );
}

#[test]
fn test_validate_inputs_non_finite() {
    let x = [0.0, f64::NAN];
    let y = [1.0, 2.0];
    let err = Validator::validate_inputs(&x, &y, 1, 1).unwrap_err();
    assert!(matches!(err, RbfnError::InvalidNumericValue(_)));

    let x = [0.0, 1.0];
    let y = [1.0, f64::INFINITY];
    let err = Validator::validate_inputs(&x, &y, 1, 1).unwrap_err();
    assert!(err.to_string().contains("y[1]"));
}

#[test]
fn test_validate_inputs_zero_dimensions() {
    let x = [0.0];
    let y = [0.0];
    assert!(Validator::validate_inputs(&x, &y, 0, 1).unwrap_err().is_configuration());
}

#[test]
fn test_validate_inputs_target_size_overflow() {
    let x = [0.0, 1.0];
    let y = [0.0, 1.0];
    let err = Validator::validate_inputs(&x, &y, 1, usize::MAX).unwrap_err();
    assert!(err.is_configuration());
}

#[test]
fn test_checked_size() {
    assert_eq!(Validator::checked_size(3, 4, "centers").unwrap(), 12);
    let err = Validator::checked_size(usize::MAX, 2, "centers").unwrap_err();
    assert!(err.to_string().contains("overflows"));
}

// ============================================================================
// Query Tests
// ============================================================================

#[test]
fn test_validate_query() {
    assert_eq!(Validator::validate_query(&[1.0, 2.0, 3.0, 4.0], 2).unwrap(), 2);
    let empty: [f64; 0] = [];
    assert_eq!(Validator::validate_query(&empty, 3).unwrap(), 0);
    assert!(Validator::validate_query(&[1.0, 2.0, 3.0], 2).is_err());
    assert!(Validator::validate_query(&[f64::NAN], 1).is_err());
}

// ============================================================================
// Parameter Tests
// ============================================================================

#[test]
fn test_validate_hidden_shape() {
    assert!(Validator::validate_hidden_shape(1, 1).is_ok());
    assert!(Validator::validate_hidden_shape(4, 4).is_ok());
    assert!(Validator::validate_hidden_shape(0, 4).unwrap_err().is_configuration());
    assert!(Validator::validate_hidden_shape(5, 4).unwrap_err().is_configuration());
}

#[test]
fn test_validate_sigma() {
    assert!(Validator::validate_sigma(0.5).is_ok());
    assert!(Validator::validate_sigma(0.0).unwrap_err().is_configuration());
    assert!(Validator::validate_sigma(-1.0).is_err());
    assert!(Validator::validate_sigma(f64::NAN).is_err());
}

#[test]
fn test_validate_kmeans() {
    assert!(Validator::validate_kmeans(&KMeans::default()).is_ok());
    let bad = KMeans {
        restarts: 0,
        ..KMeans::default()
    };
    assert!(Validator::validate_kmeans(&bad).is_err());
}

#[test]
fn test_validate_no_duplicates() {
    assert!(Validator::validate_no_duplicates(None).is_ok());
    let err = Validator::validate_no_duplicates(Some("seed")).unwrap_err();
    assert!(err.to_string().contains("seed"));
}
