//! Layer 3: Algorithms
//!
//! # Purpose
//!
//! This layer contains the building blocks of the network pipeline:
//! - Center selection (k-means and injected center sets)
//! - Design matrix construction and output-layer evaluation
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
//! Layer 3: Algorithms ← You are here
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Center selection for the hidden layer.
pub mod clustering;

/// Design matrix construction.
pub mod design;
