//! Layer 5: Engine
//!
//! # Purpose
//!
//! This layer orchestrates the network: it validates inputs, runs the fit
//! pipeline, holds the fitted state, and reports results.
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Engine ← You are here
//!   ↓
//! Layer 4: Evaluation
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Fit pipeline and fitted state.
pub mod executor;

/// Fit summaries.
pub mod output;

/// Input and configuration validation.
pub mod validator;
