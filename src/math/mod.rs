//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides pure mathematical functions used throughout the network:
//! - Euclidean distance with a SIMD fast path
//! - Radial basis kernels
//! - Spread estimation from pairwise center distances
//! - Pseudoinverse least-squares solves
//!
//! These are reusable mathematical building blocks with no pipeline logic.
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Engine
//!   ↓
//! Layer 4: Evaluation
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Euclidean distance and point-set statistics.
pub mod distance;

/// Radial basis kernels.
pub mod kernel;

/// Spread (sigma) estimation.
pub mod spread;

/// Linear algebra backend (nalgebra).
pub mod linalg;
