use super::{commitment_word, Node};
use crate::EMPTY_COMMITMENT;
use alloc::sync::Arc;
use alloy_primitives::{Bytes, B256};
use core::sync::atomic::{AtomicBool, Ordering};

/// A radix-2 branch node.
///
/// Each internal node consumes exactly one bit of the key path: `0` descends
/// left, `1` descends right. The commitment is an opaque word over the two
/// children maintained by the external commitment subsystem; path rebuilds
/// propagate it unchanged and rely on the dirty flag to schedule a
/// recomputation.
#[derive(Debug)]
pub struct InternalNode<V> {
    /// Commitment over the children, `None` until first computed.
    pub commitment: Option<B256>,
    /// Subtree of paths whose next bit is `0`.
    pub left: Arc<Node<V>>,
    /// Subtree of paths whose next bit is `1`.
    pub right: Arc<Node<V>>,
    dirty: AtomicBool,
}

impl<V> InternalNode<V> {
    /// Creates a branch with no commitment yet.
    pub fn new(left: Arc<Node<V>>, right: Arc<Node<V>>) -> Self {
        Self::with_commitment(None, left, right)
    }

    /// Creates a branch carrying a possibly stale commitment.
    ///
    /// The node starts dirty, like every node allocated along an insert path.
    pub fn with_commitment(
        commitment: Option<B256>,
        left: Arc<Node<V>>,
        right: Arc<Node<V>>,
    ) -> Self {
        Self { commitment, left, right, dirty: AtomicBool::new(true) }
    }

    /// Returns the child selected by one path bit.
    #[inline]
    pub const fn child(&self, bit: bool) -> &Arc<Node<V>> {
        if bit {
            &self.right
        } else {
            &self.left
        }
    }

    /// Returns `true` if the commitment is stale.
    pub fn is_dirty(&self) -> bool {
        self.dirty.load(Ordering::Acquire)
    }

    /// Marks the commitment as stale.
    pub fn mark_dirty(&self) {
        self.dirty.store(true, Ordering::Release);
    }

    /// Clears the dirty flag.
    pub fn mark_clean(&self) {
        self.dirty.store(false, Ordering::Release);
    }

    pub(super) fn encode(&self) -> Bytes {
        commitment_word(&self.commitment.filter(|c| *c != EMPTY_COMMITMENT))
    }
}
