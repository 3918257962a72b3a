//! Layer 4: Evaluation
//!
//! # Purpose
//!
//! This layer provides post-fit statistics: how well the network reproduces
//! its training outputs.
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Engine
//!   ↓
//! Layer 4: Evaluation ← You are here
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Training-set diagnostics (RMSE, MAE, R²).
pub mod diagnostics;
