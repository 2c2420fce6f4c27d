use alloy_primitives::Bytes;

/// Serializes trie values into the byte form the commitment layer hashes.
///
/// The codec is a capability of the trie, not of individual leaves: one trie
/// serializes all of its values the same way.
pub trait ValueCodec<V> {
    /// Encodes a value for the commitment layer.
    fn encode_value(&self, value: &V) -> Bytes;
}

/// Passthrough codec for values that already are byte strings.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RawBytes;

impl<V: AsRef<[u8]>> ValueCodec<V> for RawBytes {
    #[inline]
    fn encode_value(&self, value: &V) -> Bytes {
        Bytes::copy_from_slice(value.as_ref())
    }
}
