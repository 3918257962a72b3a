//! Layer 1: Primitives
//!
//! # Purpose
//!
//! This layer provides the foundational types shared by every other layer.
//! Currently this is the crate-wide error type.
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
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives ← You are here
//! ```

/// Error types for RBFN configuration, fitting, and prediction.
pub mod errors;
