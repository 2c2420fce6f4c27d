//! Path-guided lookup.

use crate::{
    bits::BitSequence,
    nodes::{key_suffix, Node, KEY_BITS},
    TrieError,
};

/// Looks up the value stored under the 256-bit `key`.
///
/// Returns `None` when the path runs into an absent subtree, a stem whose
/// top bits disagree with the key, or a leaf that holds no value.
///
/// Fails with [`TrieError::InvalidInput`] if `key` is not exactly
/// [`KEY_BITS`](crate::nodes::KEY_BITS) long.
pub fn lookup<'a, V>(root: &'a Node<V>, key: &BitSequence) -> Result<Option<&'a V>, TrieError> {
    if key.len() != KEY_BITS {
        return Err(TrieError::InvalidInput("key must be exactly 256 bits"));
    }
    Ok(lookup_at(root, key, 0))
}

pub(crate) fn lookup_at<'a, V>(node: &'a Node<V>, key: &BitSequence, depth: usize) -> Option<&'a V> {
    match node {
        Node::Internal(internal) => lookup_at(internal.child(key.bit(depth)), key, depth + 1),
        Node::Stem(stem_node) => {
            if key.common_prefix(&stem_node.stem).len() < stem_node.stem.len() {
                return None;
            }
            lookup_at(stem_node.child(key_suffix(key)), key, depth + 1)
        }
        Node::Leaf(leaf) => leaf.value.as_ref(),
        Node::NullBranch | Node::NullLeaf => None,
    }
}
