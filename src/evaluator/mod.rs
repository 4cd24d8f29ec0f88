//! # Weight Evaluator
//!
//! Turns a weight table into a total function from concrete address to
//! composed weight: the product of every table entry whose key is a prefix
//! of the query. An address with no matching entries gets the
//! multiplicative identity (1.0, or `{1, 1}` for edges), so weights declared
//! at a category apply to every descendant and compose cumulatively down
//! the hierarchy — never "closest match wins".
//!
//! Evaluators snapshot the table at construction. This is a semantic
//! guarantee, not an optimization: mutating the table afterwards never
//! changes an existing evaluator's answers, so a computation pass always
//! sees one consistent set of weights. Rebuild after mutating.
//!
//! Numerics are plain IEEE 754 `f64` multiplication. Pathologically deep
//! hierarchies saturate at `+inf` rather than failing.

use tracing::trace;

use crate::address::{EdgeAddress, NodeAddress};
use crate::weights::{EdgeWeight, EdgeWeights, NodeWeight, NodeWeights};

/// Composed node weights: `address -> scalar`.
///
/// Immutable once built; cheap to share across threads for read-only use.
#[derive(Debug, Clone)]
pub struct NodeWeightEvaluator {
    entries: Vec<(NodeAddress, NodeWeight)>,
}

impl NodeWeightEvaluator {
    /// Snapshot `weights` and build the evaluator.
    pub fn new(weights: &NodeWeights) -> Self {
        let entries: Vec<_> = weights
            .entries()
            .map(|(address, weight)| (address.clone(), weight))
            .collect();
        trace!(entries = entries.len(), "built node weight evaluator");
        Self { entries }
    }

    /// The product of every retained entry whose key is a prefix of
    /// `address`. Defaults to 1.0 when nothing matches.
    pub fn weight(&self, address: &NodeAddress) -> NodeWeight {
        self.entries
            .iter()
            .filter(|(key, _)| address.has_prefix(key))
            .fold(1.0, |product, (_, weight)| product * weight)
    }
}

/// Composed edge weights: `address -> {forwards, backwards}`.
///
/// The two directions accumulate independently.
#[derive(Debug, Clone)]
pub struct EdgeWeightEvaluator {
    entries: Vec<(EdgeAddress, EdgeWeight)>,
}

impl EdgeWeightEvaluator {
    /// Snapshot `weights` and build the evaluator.
    pub fn new(weights: &EdgeWeights) -> Self {
        let entries: Vec<_> = weights
            .entries()
            .map(|(address, weight)| (address.clone(), weight))
            .collect();
        trace!(entries = entries.len(), "built edge weight evaluator");
        Self { entries }
    }

    /// Directional products over every retained entry whose key is a prefix
    /// of `address`. Defaults to `{1, 1}` when nothing matches.
    pub fn weight(&self, address: &EdgeAddress) -> EdgeWeight {
        self.entries
            .iter()
            .filter(|(key, _)| address.has_prefix(key))
            .fold(EdgeWeight::default(), |acc, (_, pair)| EdgeWeight {
                forwards: acc.forwards * pair.forwards,
                backwards: acc.backwards * pair.backwards,
            })
    }
}
