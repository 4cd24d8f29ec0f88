//! # cred-weights — Hierarchical Weight Evaluator
//!
//! Scoring weights for a collaboration graph, declared over a hierarchical
//! namespace of node and edge categories and composed multiplicatively.
//!
//! ## Design Principles
//!
//! 1. **Addresses are structural**: prefix matching compares segment
//!    sequences, never joined strings
//! 2. **Tables hold exact keys only**: prefix composition belongs to the
//!    evaluator, not the table
//! 3. **Evaluators are snapshots**: built once from a table, immutable and
//!    referentially transparent afterwards
//! 4. **Distinct kinds by type**: node and edge addresses cannot be mixed,
//!    checked at compile time
//!
//! ## Quick Start
//!
//! ```rust
//! use cred_weights::{NodeAddress, NodeWeights, NodeWeightEvaluator};
//!
//! # fn example() -> cred_weights::Result<()> {
//! let mut weights = NodeWeights::empty();
//! weights.set(NodeAddress::from_parts(["github", "issue"]), 2.0)?;
//! weights.set(NodeAddress::from_parts(["github", "issue", "comment"]), 3.0)?;
//!
//! let evaluator = NodeWeightEvaluator::new(&weights);
//!
//! // Weights compose cumulatively down the hierarchy.
//! assert_eq!(evaluator.weight(&NodeAddress::from_parts(["github", "issue"])), 2.0);
//! assert_eq!(
//!     evaluator.weight(&NodeAddress::from_parts(["github", "issue", "comment", "42"])),
//!     6.0,
//! );
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```
//!
//! The produced weights are plain numeric inputs to whatever cred-flow
//! algorithm consumes them; that algorithm, the graph itself, and the
//! presentation layer all live elsewhere.

// ============================================================================
// Modules
// ============================================================================

pub mod address;
pub mod evaluator;
pub mod store;
pub mod weights;

// ============================================================================
// Re-exports: Addresses
// ============================================================================

pub use address::{Address, AddressKind, EdgeAddress, EdgeKind, NodeAddress, NodeKind};

// ============================================================================
// Re-exports: Weight tables
// ============================================================================

pub use weights::{EdgeWeight, EdgeWeights, NodeWeight, NodeWeights, Weights};

// ============================================================================
// Re-exports: Evaluators
// ============================================================================

pub use evaluator::{EdgeWeightEvaluator, NodeWeightEvaluator};

// ============================================================================
// Re-exports: Shared store
// ============================================================================

pub use store::SharedWeights;

// ============================================================================
// Error Types
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid weight {weight} for {address}: {reason}")]
    InvalidWeight {
        address: String,
        weight: f64,
        reason: &'static str,
    },

    #[error("conflicting {kind} weights for {address} during merge")]
    MergeConflict {
        kind: &'static str,
        address: String,
    },

    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
