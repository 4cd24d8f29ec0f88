//! Node weight table.

use hashbrown::HashMap;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::Result;
use crate::address::NodeAddress;

/// Declared multiplicative weight for a node category.
pub type NodeWeight = f64;

/// Mapping from exact node address to its declared weight.
///
/// Lookup here is exact-key only; prefix composition is the evaluator's
/// job. Entry iteration order is unspecified and carries no precedence —
/// composition is multiplication, which commutes.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NodeWeights {
    entries: HashMap<NodeAddress, NodeWeight>,
}

impl NodeWeights {
    /// A table with no entries. Every address evaluates to the default 1.0.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Insert or replace the weight for an exact address.
    ///
    /// Rejects non-finite and negative weights, leaving the table unchanged.
    /// Zero is allowed: it prunes the contribution of the whole subtree
    /// under `address`.
    pub fn set(&mut self, address: NodeAddress, weight: NodeWeight) -> Result<()> {
        super::check_weight(&address, weight)?;
        self.entries.insert(address, weight);
        Ok(())
    }

    /// Exact-key lookup. `None` means "unset", which the evaluator treats
    /// as the multiplicative identity — distinct from an explicit 1.0 only
    /// in that an explicit entry survives `entries()` enumeration.
    pub fn get(&self, address: &NodeAddress) -> Option<NodeWeight> {
        self.entries.get(address).copied()
    }

    /// All `(address, weight)` entries, in unspecified order.
    pub fn entries(&self) -> impl Iterator<Item = (&NodeAddress, NodeWeight)> {
        self.entries.iter().map(|(address, weight)| (address, *weight))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Serialized as a sequence of `[address, weight]` pairs. Addresses are
/// segment sequences, so they cannot be JSON object keys.
impl Serialize for NodeWeights {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_seq(self.entries())
    }
}

impl<'de> Deserialize<'de> for NodeWeights {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let pairs: Vec<(NodeAddress, NodeWeight)> = Vec::deserialize(deserializer)?;
        let mut table = Self::empty();
        for (address, weight) in pairs {
            table.set(address, weight).map_err(D::Error::custom)?;
        }
        Ok(table)
    }
}
