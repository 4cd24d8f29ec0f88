//! # Weight Tables
//!
//! The authoritative store of user-declared category weights: a scalar per
//! node address, a directional pair per edge address. Tables hold exact
//! addresses only — turning them into composed weights for concrete graph
//! elements is the evaluator's job.
//!
//! [`Weights`] pairs one node table with one edge table; it is the unit
//! that configuration tooling declares, merges, and persists as JSON.

pub mod edge;
pub mod node;

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::address::{EdgeAddress, NodeAddress};
use crate::{Error, Result};

pub use edge::{EdgeWeight, EdgeWeights};
pub use node::{NodeWeight, NodeWeights};

/// Shared validation for declared weight components.
///
/// Non-finite and sign-negative values are rejected; `-0.0` counts as
/// negative, so stored zeros are always `+0.0`. Zero passes, documented as
/// pruning the subtree's contribution.
pub(crate) fn check_weight(address: &dyn fmt::Display, weight: f64) -> Result<()> {
    let reason = if weight.is_nan() {
        "weight must not be NaN"
    } else if weight.is_infinite() {
        "weight must be finite"
    } else if weight.is_sign_negative() {
        "weight must be non-negative"
    } else {
        return Ok(());
    };
    Err(Error::InvalidWeight {
        address: address.to_string(),
        weight,
        reason,
    })
}

/// One node table and one edge table: the complete weight declaration for
/// a graph.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Weights {
    pub node_weights: NodeWeights,
    pub edge_weights: EdgeWeights,
}

impl Weights {
    /// Empty node and edge tables.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Merge several weight declarations into one.
    ///
    /// Entries for distinct addresses accumulate side by side. Duplicate
    /// entries with identical values are accepted; differing values for the
    /// same address are a [`Error::MergeConflict`] — there is no implicit
    /// precedence between declarations. To decide collisions some other
    /// way, use [`Weights::merge_with`].
    pub fn merge<'a>(all: impl IntoIterator<Item = &'a Weights>) -> Result<Weights> {
        Self::merge_with(
            all,
            |address, existing, incoming| {
                if existing == incoming {
                    Ok(existing)
                } else {
                    Err(Error::MergeConflict {
                        kind: "node",
                        address: address.to_string(),
                    })
                }
            },
            |address, existing, incoming| {
                if existing == incoming {
                    Ok(existing)
                } else {
                    Err(Error::MergeConflict {
                        kind: "edge",
                        address: address.to_string(),
                    })
                }
            },
        )
    }

    /// Merge with caller-supplied collision resolvers.
    ///
    /// When the same address is declared more than once, the matching
    /// resolver is called with `(address, existing, incoming)` and its
    /// result becomes the merged entry (still subject to weight
    /// validation). Resolvers may refuse a collision by returning an error.
    pub fn merge_with<'a, I, N, E>(
        all: I,
        mut node_resolver: N,
        mut edge_resolver: E,
    ) -> Result<Weights>
    where
        I: IntoIterator<Item = &'a Weights>,
        N: FnMut(&NodeAddress, NodeWeight, NodeWeight) -> Result<NodeWeight>,
        E: FnMut(&EdgeAddress, EdgeWeight, EdgeWeight) -> Result<EdgeWeight>,
    {
        let mut merged = Weights::empty();
        for weights in all {
            for (address, weight) in weights.node_weights.entries() {
                let resolved = match merged.node_weights.get(address) {
                    Some(existing) => node_resolver(address, existing, weight)?,
                    None => weight,
                };
                merged.node_weights.set(address.clone(), resolved)?;
            }
            for (address, weight) in weights.edge_weights.entries() {
                let resolved = match merged.edge_weights.get(address) {
                    Some(existing) => edge_resolver(address, existing, weight)?,
                    None => weight,
                };
                merged.edge_weights.set(address.clone(), resolved)?;
            }
        }
        debug!(
            nodes = merged.node_weights.len(),
            edges = merged.edge_weights.len(),
            "merged weight declarations"
        );
        Ok(merged)
    }

    /// Serialize to the JSON configuration format.
    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse from the JSON configuration format. Declared weights are
    /// re-validated on the way in.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
