//! Shared weight store with snapshot evaluators.
//!
//! Tables themselves are plain values and not safe for concurrent mutation
//! while an evaluator is being built from them. `SharedWeights` closes that
//! gap for callers that edit weights from one place (configuration reloads,
//! an admin surface) while computation passes run elsewhere: mutation goes
//! through a write lock, and evaluators are constructed under the read lock
//! so they always snapshot a consistent table.

use std::sync::Arc;

use parking_lot::RwLock;

use crate::evaluator::{EdgeWeightEvaluator, NodeWeightEvaluator};
use crate::weights::Weights;

/// Clone-able handle to a lock-guarded [`Weights`].
///
/// Clones share the same underlying tables. Evaluators built from the
/// handle are immutable snapshots; later `update` calls never affect them.
#[derive(Debug, Clone, Default)]
pub struct SharedWeights {
    inner: Arc<RwLock<Weights>>,
}

impl SharedWeights {
    pub fn new(weights: Weights) -> Self {
        Self {
            inner: Arc::new(RwLock::new(weights)),
        }
    }

    /// Mutate the tables under the write lock.
    pub fn update<R>(&self, f: impl FnOnce(&mut Weights) -> R) -> R {
        f(&mut self.inner.write())
    }

    /// A copy of the current tables.
    pub fn snapshot(&self) -> Weights {
        self.inner.read().clone()
    }

    /// Build a node evaluator from a consistent snapshot of the tables.
    pub fn node_evaluator(&self) -> NodeWeightEvaluator {
        NodeWeightEvaluator::new(&self.inner.read().node_weights)
    }

    /// Build an edge evaluator from a consistent snapshot of the tables.
    pub fn edge_evaluator(&self) -> EdgeWeightEvaluator {
        EdgeWeightEvaluator::new(&self.inner.read().edge_weights)
    }
}
