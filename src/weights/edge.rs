//! Edge weight table with directional pairs.

use hashbrown::HashMap;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::Result;
use crate::address::EdgeAddress;

/// Directional weight pair for an edge category.
///
/// `forwards` multiplies traversal along the edge's nominal direction,
/// `backwards` multiplies traversal against it. The two compose
/// independently.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EdgeWeight {
    pub forwards: f64,
    pub backwards: f64,
}

impl EdgeWeight {
    pub fn new(forwards: f64, backwards: f64) -> Self {
        Self { forwards, backwards }
    }
}

/// The multiplicative identity `{forwards: 1, backwards: 1}`.
impl Default for EdgeWeight {
    fn default() -> Self {
        Self { forwards: 1.0, backwards: 1.0 }
    }
}

/// Mapping from exact edge address to its declared directional pair.
///
/// Same contract as [`NodeWeights`](crate::weights::NodeWeights): exact-key
/// lookup only, unordered entries, last write wins.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct EdgeWeights {
    entries: HashMap<EdgeAddress, EdgeWeight>,
}

impl EdgeWeights {
    /// A table with no entries. Every address evaluates to `{1, 1}`.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Insert or replace the pair for an exact address.
    ///
    /// Both components are validated independently: non-finite or negative
    /// values are rejected and the table is left unchanged. Zero prunes the
    /// corresponding direction for the whole subtree.
    pub fn set(&mut self, address: EdgeAddress, weight: EdgeWeight) -> Result<()> {
        super::check_weight(&address, weight.forwards)?;
        super::check_weight(&address, weight.backwards)?;
        self.entries.insert(address, weight);
        Ok(())
    }

    pub fn get(&self, address: &EdgeAddress) -> Option<EdgeWeight> {
        self.entries.get(address).copied()
    }

    /// All `(address, weight)` entries, in unspecified order.
    pub fn entries(&self) -> impl Iterator<Item = (&EdgeAddress, EdgeWeight)> {
        self.entries.iter().map(|(address, weight)| (address, *weight))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Serialized as a sequence of `[address, pair]` entries, like
/// [`NodeWeights`](crate::weights::NodeWeights).
impl Serialize for EdgeWeights {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_seq(self.entries())
    }
}

impl<'de> Deserialize<'de> for EdgeWeights {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let pairs: Vec<(EdgeAddress, EdgeWeight)> = Vec::deserialize(deserializer)?;
        let mut table = Self::empty();
        for (address, weight) in pairs {
            table.set(address, weight).map_err(D::Error::custom)?;
        }
        Ok(table)
    }
}
