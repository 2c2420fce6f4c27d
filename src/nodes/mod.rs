//! The node variants of the binary trie.

use crate::{bits::BitSequence, value::ValueCodec};
use alloy_primitives::{Bytes, B256};

mod internal;
pub use internal::InternalNode;

mod leaf;
pub use leaf::LeafNode;

mod stem;
pub use stem::StemNode;

/// Number of bits in a full key.
pub const KEY_BITS: usize = 256;

/// Number of bits in a stem, the top part of a key shared by an aggregate.
pub const STEM_BITS: usize = 248;

/// Number of suffix bits indexing a slot within a stem.
pub const SUFFIX_BITS: usize = 8;

/// Number of child slots of a stem node.
pub const STEM_FANOUT: usize = 256;

/// A node in the binary trie.
///
/// The trie is a radix-2 structure whose interior consists of
/// [`Internal`](Node::Internal) branches and terminates in
/// [`Stem`](Node::Stem) aggregates; a stem holds one [`Leaf`](Node::Leaf)
/// slot per 8-bit suffix. The two null variants mark absent subtrees and
/// absent slots and carry no payload.
///
/// Nodes are immutable after construction apart from the dirty flag, and are
/// shared across successive roots through [`Arc`](alloc::sync::Arc) handles.
#[derive(Debug)]
pub enum Node<V> {
    /// A branch with a subtree per direction bit.
    Internal(InternalNode<V>),
    /// An aggregate of up to [`STEM_FANOUT`] sibling leaves sharing the top
    /// [`STEM_BITS`] key bits.
    Stem(StemNode<V>),
    /// A suffix slot carrying an optional value.
    Leaf(LeafNode<V>),
    /// Absent subtree at an internal position.
    NullBranch,
    /// Absent suffix slot inside a stem.
    NullLeaf,
}

impl<V> Node<V> {
    /// Encodes the node's defining fields for the commitment layer.
    ///
    /// Leaves serialize their value through the trie's codec; internal nodes
    /// contribute their commitment word (empty when it is the zero word);
    /// stems concatenate their encoded stem with both commitment words; the
    /// null variants encode to nothing.
    pub fn encode<C: ValueCodec<V>>(&self, codec: &C) -> Bytes {
        match self {
            Self::Internal(node) => node.encode(),
            Self::Stem(node) => node.encode(),
            Self::Leaf(node) => node.encode(codec),
            Self::NullBranch | Self::NullLeaf => Bytes::new(),
        }
    }

    /// Returns `true` if the node's commitment is stale.
    ///
    /// Every node allocated during an insert starts dirty; the commitment
    /// subsystem clears the flag once it has recomputed the node. The null
    /// variants are never dirty.
    pub fn is_dirty(&self) -> bool {
        match self {
            Self::Internal(node) => node.is_dirty(),
            Self::Stem(node) => node.is_dirty(),
            Self::Leaf(node) => node.is_dirty(),
            Self::NullBranch | Self::NullLeaf => false,
        }
    }

    /// Marks the node's commitment as stale.
    pub fn mark_dirty(&self) {
        match self {
            Self::Internal(node) => node.mark_dirty(),
            Self::Stem(node) => node.mark_dirty(),
            Self::Leaf(node) => node.mark_dirty(),
            Self::NullBranch | Self::NullLeaf => {}
        }
    }

    /// Clears the dirty flag after the commitment has been recomputed.
    pub fn mark_clean(&self) {
        match self {
            Self::Internal(node) => node.mark_clean(),
            Self::Stem(node) => node.mark_clean(),
            Self::Leaf(node) => node.mark_clean(),
            Self::NullBranch | Self::NullLeaf => {}
        }
    }
}

/// Extracts the 8-bit suffix slot index from a full-width key.
pub(crate) fn key_suffix(key: &BitSequence) -> u8 {
    debug_assert_eq!(key.len(), KEY_BITS);
    (0..SUFFIX_BITS).fold(0u8, |acc, i| acc << 1 | key.bit(STEM_BITS + i) as u8)
}

/// The 32-byte word of a commitment, or empty bytes when absent.
fn commitment_word(commitment: &Option<B256>) -> Bytes {
    commitment.map(|c| Bytes::copy_from_slice(c.as_slice())).unwrap_or_default()
}
