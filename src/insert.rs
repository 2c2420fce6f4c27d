//! Path-guided insertion.

use crate::{
    bits::BitSequence,
    nodes::{key_suffix, InternalNode, LeafNode, Node, StemNode, KEY_BITS, STEM_BITS},
    TrieError,
};
use alloc::sync::Arc;
use tracing::trace;

/// Inserts `value` under the 256-bit `key`, returning the new root.
///
/// The previous root is untouched: nodes are allocated only along the
/// affected path and every unaffected subtree is shared between the two
/// roots. Newly allocated nodes carry stale commitments and start dirty.
///
/// Fails with [`TrieError::InvalidInput`] if `key` is not exactly
/// [`KEY_BITS`](crate::nodes::KEY_BITS) long.
pub fn insert<V>(
    root: &Arc<Node<V>>,
    key: &BitSequence,
    value: V,
) -> Result<Arc<Node<V>>, TrieError> {
    if key.len() != KEY_BITS {
        return Err(TrieError::InvalidInput("key must be exactly 256 bits"));
    }
    Ok(insert_at(root, key, value, 0))
}

/// Rebuilds the path below `node`, where `depth` bits of `key` have already
/// been decided by the ancestors.
pub(crate) fn insert_at<V>(
    node: &Arc<Node<V>>,
    key: &BitSequence,
    value: V,
    depth: usize,
) -> Arc<Node<V>> {
    match node.as_ref() {
        Node::Internal(internal) => {
            let (left, right) = if key.bit(depth) {
                (internal.left.clone(), insert_at(&internal.right, key, value, depth + 1))
            } else {
                (insert_at(&internal.left, key, value, depth + 1), internal.right.clone())
            };
            Arc::new(Node::Internal(InternalNode::with_commitment(internal.commitment, left, right)))
        }
        Node::Stem(stem_node) => {
            if stem_node.stem == key.slice_unchecked(0, STEM_BITS) {
                let suffix = key_suffix(key);
                let child = insert_at(stem_node.child(suffix), key, value, depth + 1);
                Arc::new(Node::Stem(stem_node.replace_child(suffix, child)))
            } else {
                // Divergent stems: push the existing aggregate one level down
                // behind a fresh branch and retry at the same depth. Layers
                // accrue until the first differing bit routes the new key to
                // the empty side. The old stem is shared, not copied.
                trace!(depth, "interposing branch above divergent stem");
                let (left, right) = if stem_node.stem.bit(depth) {
                    (Arc::new(Node::NullBranch), node.clone())
                } else {
                    (node.clone(), Arc::new(Node::NullBranch))
                };
                let branch = Arc::new(Node::Internal(InternalNode::new(left, right)));
                insert_at(&branch, key, value, depth)
            }
        }
        Node::Leaf(_) | Node::NullLeaf => Arc::new(Node::Leaf(LeafNode::new(Some(value)))),
        Node::NullBranch => {
            // Lazy growth: materialize the stem for this key in place of the
            // absent subtree, then descend into it for the suffix slot.
            trace!(depth, "materializing stem under absent subtree");
            let stem = Arc::new(Node::Stem(StemNode::new(key.slice_unchecked(0, STEM_BITS))));
            insert_at(&stem, key, value, depth)
        }
    }
}
