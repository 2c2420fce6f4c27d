//! The trie facade.

use crate::{
    bits::BitSequence,
    insert::insert_at,
    lookup::lookup_at,
    nodes::Node,
    value::{RawBytes, ValueCodec},
};
use alloc::sync::Arc;
use alloy_primitives::{Bytes, B256};
use core::fmt;

/// A binary prefix trie mapping 32-byte keys to values.
///
/// The facade owns a handle to the current root and swaps it for the
/// transformer's result on every [`put`](BinaryTrie::put); earlier roots stay
/// valid and share every untouched subtree with the new one. Keys are always
/// interpreted as 256-bit big-endian bit strings, so the bit-length
/// precondition of the underlying transformers holds by construction.
pub struct BinaryTrie<V = Bytes, C = RawBytes> {
    root: Arc<Node<V>>,
    codec: C,
}

impl<V> BinaryTrie<V, RawBytes> {
    /// Creates an empty trie over raw byte values.
    pub fn new() -> Self {
        Self::with_codec(RawBytes)
    }
}

impl<V, C> BinaryTrie<V, C> {
    /// Creates an empty trie with the given value codec.
    pub fn with_codec(codec: C) -> Self {
        Self { root: Arc::new(Node::NullBranch), codec }
    }

    /// Returns the value stored under `key`, if any.
    pub fn get(&self, key: &B256) -> Option<&V> {
        lookup_at(&self.root, &BitSequence::from_bytes(key.as_slice()), 0)
    }

    /// Inserts `value` under `key`.
    ///
    /// The update is atomic: the root handle is only replaced once the new
    /// path has been fully built.
    pub fn put(&mut self, key: B256, value: V) {
        let path = BitSequence::from_bytes(key.as_slice());
        self.root = insert_at(&self.root, &path, value, 0);
    }

    /// Returns a handle to the current root node.
    #[inline]
    pub const fn root(&self) -> &Arc<Node<V>> {
        &self.root
    }
}

impl<V, C: ValueCodec<V>> BinaryTrie<V, C> {
    /// Encodes the current root for the commitment layer.
    pub fn root_encoding(&self) -> Bytes {
        self.root.encode(&self.codec)
    }
}

impl<V> Default for BinaryTrie<V, RawBytes> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: fmt::Debug, C> fmt::Debug for BinaryTrie<V, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BinaryTrie").field("root", &self.root).finish_non_exhaustive()
    }
}
