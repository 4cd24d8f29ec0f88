//! Hierarchical addresses for nodes and edges.
//!
//! An address is an ordered sequence of string segments. Address `A` is a
//! *prefix* of address `B` when every segment of `A` matches the segment of
//! `B` at the same position, starting from the front. The empty address is a
//! prefix of everything, including itself.
//!
//! Prefix testing is structural (segment by segment), never string
//! concatenation — segments may themselves contain any characters, including
//! whatever a textual rendering would use as a separator.
//!
//! Node and edge addresses live in separate namespaces. The `K` marker makes
//! them distinct types, so mixing them up is a compile error rather than a
//! runtime check.

use std::fmt;
use std::marker::PhantomData;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Marker for the node address namespace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {}

/// Marker for the edge address namespace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EdgeKind {}

mod sealed {
    pub trait Sealed {}
    impl Sealed for super::NodeKind {}
    impl Sealed for super::EdgeKind {}
}

/// The namespace an address belongs to. Sealed: only [`NodeKind`] and
/// [`EdgeKind`] exist.
pub trait AddressKind: sealed::Sealed {
    const KIND: &'static str;
}

impl AddressKind for NodeKind {
    const KIND: &'static str = "node";
}

impl AddressKind for EdgeKind {
    const KIND: &'static str = "edge";
}

/// Address of a node category or instance.
pub type NodeAddress = Address<NodeKind>;

/// Address of an edge category or instance.
pub type EdgeAddress = Address<EdgeKind>;

/// An immutable ordered sequence of string segments, tagged with the
/// namespace it addresses.
///
/// Addresses are plain values: equality, hashing, and prefix testing all
/// operate on the segment sequence. Most real addresses are short
/// (plugin, category, subcategory, id), so segments are stored inline.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent, bound(serialize = "", deserialize = ""))]
pub struct Address<K: AddressKind> {
    segments: SmallVec<[String; 4]>,
    #[serde(skip)]
    _kind: PhantomData<fn() -> K>,
}

impl<K: AddressKind> Address<K> {
    /// The empty address: zero segments, prefix of every address.
    pub fn empty() -> Self {
        Self {
            segments: SmallVec::new(),
            _kind: PhantomData,
        }
    }

    /// Build an address from its segments, in order.
    pub fn from_parts<I, S>(parts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            segments: parts.into_iter().map(Into::into).collect(),
            _kind: PhantomData,
        }
    }

    /// The segments, front to back.
    pub fn parts(&self) -> &[String] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// A new address with `segment` appended. Useful for building instance
    /// addresses under a category prefix.
    pub fn child(&self, segment: impl Into<String>) -> Self {
        let mut segments = self.segments.clone();
        segments.push(segment.into());
        Self {
            segments,
            _kind: PhantomData,
        }
    }

    /// Whether `prefix` matches an initial run of this address's segments.
    ///
    /// Inclusive at both extremes: every address has itself as a prefix, and
    /// the empty address is a prefix of every address.
    pub fn has_prefix(&self, prefix: &Self) -> bool {
        self.segments.starts_with(&prefix.segments)
    }
}

impl<K: AddressKind> Default for Address<K> {
    fn default() -> Self {
        Self::empty()
    }
}

/// Human-readable rendering for logs and error messages only. Matching is
/// always structural, never based on this string form.
impl<K: AddressKind> fmt::Display for Address<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[", K::KIND)?;
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{segment:?}")?;
        }
        write!(f, "]")
    }
}
