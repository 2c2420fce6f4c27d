use super::{commitment_word, Node, STEM_BITS, STEM_FANOUT};
use crate::bits::BitSequence;
use alloc::{boxed::Box, sync::Arc, vec::Vec};
use alloy_primitives::{Bytes, B256};
use core::{
    fmt,
    sync::atomic::{AtomicBool, Ordering},
};

/// The aggregation node of the trie.
///
/// A stem covers every key sharing its top [`STEM_BITS`] bits and holds one
/// child slot per 8-bit suffix. Slots are either leaves or
/// [`Node::NullLeaf`]; the interior trie never appears below a stem.
///
/// Besides the commitment over its own fields, a stem carries a second word
/// committing to the values of its populated slots. Both are opaque here.
pub struct StemNode<V> {
    /// The top [`STEM_BITS`] bits shared by every key under this node.
    pub stem: BitSequence,
    /// Commitment over the stem fields, `None` until first computed.
    pub commitment: Option<B256>,
    /// Commitment over the suffix values, `None` until first computed.
    pub values_commitment: Option<B256>,
    children: Box<[Arc<Node<V>>; STEM_FANOUT]>,
    dirty: AtomicBool,
}

impl<V> StemNode<V> {
    /// Creates a stem with every suffix slot absent.
    ///
    /// `stem` must be exactly [`STEM_BITS`] long. The null slots share a
    /// single allocation.
    pub fn new(stem: BitSequence) -> Self {
        debug_assert_eq!(stem.len(), STEM_BITS);
        let null_leaf: Arc<Node<V>> = Arc::new(Node::NullLeaf);
        Self {
            stem,
            commitment: None,
            values_commitment: None,
            children: Box::new(core::array::from_fn(|_| null_leaf.clone())),
            dirty: AtomicBool::new(true),
        }
    }

    /// Returns the child slot for the given suffix.
    #[inline]
    pub fn child(&self, suffix: u8) -> &Arc<Node<V>> {
        &self.children[suffix as usize]
    }

    /// Returns all [`STEM_FANOUT`] child slots in suffix order.
    pub fn children(&self) -> &[Arc<Node<V>>] {
        &self.children[..]
    }

    /// Returns a copy of this stem with one slot replaced.
    ///
    /// The remaining slots are shared with `self`; commitments carry over
    /// stale and the copy starts dirty.
    pub fn replace_child(&self, suffix: u8, child: Arc<Node<V>>) -> Self {
        let mut children = self.children.clone();
        children[suffix as usize] = child;
        Self {
            stem: self.stem.clone(),
            commitment: self.commitment,
            values_commitment: self.values_commitment,
            children,
            dirty: AtomicBool::new(true),
        }
    }

    /// Returns `true` if the commitments are stale.
    pub fn is_dirty(&self) -> bool {
        self.dirty.load(Ordering::Acquire)
    }

    /// Marks the commitments as stale.
    pub fn mark_dirty(&self) {
        self.dirty.store(true, Ordering::Release);
    }

    /// Clears the dirty flag.
    pub fn mark_clean(&self) {
        self.dirty.store(false, Ordering::Release);
    }

    pub(super) fn encode(&self) -> Bytes {
        let stem = self.stem.encode();
        let commitment = commitment_word(&self.commitment);
        let values = commitment_word(&self.values_commitment);
        let mut out = Vec::with_capacity(stem.len() + commitment.len() + values.len());
        out.extend_from_slice(&stem);
        out.extend_from_slice(&commitment);
        out.extend_from_slice(&values);
        out.into()
    }
}

impl<V> fmt::Debug for StemNode<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let populated =
            self.children.iter().filter(|c| !matches!(c.as_ref(), Node::NullLeaf)).count();
        f.debug_struct("StemNode")
            .field("stem", &self.stem)
            .field("commitment", &self.commitment)
            .field("values_commitment", &self.values_commitment)
            .field("populated", &populated)
            .finish()
    }
}
