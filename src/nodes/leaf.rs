use crate::value::ValueCodec;
use alloy_primitives::Bytes;
use core::sync::atomic::{AtomicBool, Ordering};

/// A suffix slot holding a value.
///
/// A leaf with no value is treated as absent by lookups; it can occur when an
/// embedding system reserves a slot without writing to it.
#[derive(Debug)]
pub struct LeafNode<V> {
    /// The held value, if any.
    pub value: Option<V>,
    dirty: AtomicBool,
}

impl<V> LeafNode<V> {
    /// Creates a leaf. New leaves start dirty.
    pub fn new(value: Option<V>) -> Self {
        Self { value, dirty: AtomicBool::new(true) }
    }

    /// Returns `true` if the enclosing commitments are stale.
    pub fn is_dirty(&self) -> bool {
        self.dirty.load(Ordering::Acquire)
    }

    /// Marks the leaf as needing recommitment.
    pub fn mark_dirty(&self) {
        self.dirty.store(true, Ordering::Release);
    }

    /// Clears the dirty flag.
    pub fn mark_clean(&self) {
        self.dirty.store(false, Ordering::Release);
    }

    pub(super) fn encode<C: ValueCodec<V>>(&self, codec: &C) -> Bytes {
        self.value.as_ref().map(|value| codec.encode_value(value)).unwrap_or_default()
    }
}
