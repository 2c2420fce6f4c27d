//! Order-preserving wire codec for bit sequences.
//!
//! Encoding folds the payload bit count of each backing byte into the byte
//! itself: every zero payload bit contributes one to the reserved low-order
//! tag position. The result compares byte-wise in exactly the order the
//! underlying sequences compare bit-wise, which lets encoded prefixes be used
//! directly as ordered database keys.

use super::{byte_count, BitSequence, BITS_PER_BYTE};
use alloc::vec::Vec;
use alloy_primitives::hex;
use core::fmt;
use derive_more::{AsRef, Deref, From, Into};
use smallvec::SmallVec;

/// The encoded form of a [`BitSequence`].
///
/// Byte-lexicographic comparison of two [`EncodedBits`] values — the derived
/// [`Ord`] — equals the bit-lexicographic comparison of the sequences they
/// were produced from.
#[derive(Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, AsRef, Deref, From, Into)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EncodedBits(Vec<u8>);

impl EncodedBits {
    /// Returns the encoded bytes as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Debug for EncodedBits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EncodedBits({})", hex::encode_prefixed(&self.0))
    }
}

impl BitSequence {
    /// Encodes the sequence into its order-preserving byte form.
    ///
    /// Every full backing byte `d` becomes `d + 7 - popcount(d)`; the last
    /// byte uses its actual payload bit count in place of `7`, which records
    /// the sequence length without a separate prefix.
    pub fn encode(&self) -> EncodedBits {
        let n = self.data.len();
        let mut out = Vec::with_capacity(n);
        if n == 0 {
            return EncodedBits(out);
        }
        for &d in &self.data[..n - 1] {
            out.push(d + (BITS_PER_BYTE as u8 - d.count_ones() as u8));
        }
        let last = self.data[n - 1];
        let mut fill = (self.bit_len % BITS_PER_BYTE) as u8;
        if fill == 0 {
            fill = BITS_PER_BYTE as u8;
        }
        out.push(last + (fill - last.count_ones() as u8));
        EncodedBits(out)
    }

    /// Decodes a sequence from its encoded form, the inverse of
    /// [`BitSequence::encode`].
    ///
    /// Each byte is scanned with a descending power cursor: a value at least
    /// the cursor consumes it as a `1` bit, anything else consumes a single
    /// tag unit as a `0` bit, until the byte is exhausted. Decoding is total;
    /// canonical encodings round-trip exactly.
    pub fn decode(encoded: &[u8]) -> Self {
        let mut bit_len = 0usize;
        let mut data = SmallVec::with_capacity(byte_count(encoded.len() * BITS_PER_BYTE));
        for &byte in encoded {
            let mut enc = byte as u32;
            let mut dec = 0u8;
            let mut power = 128u32;
            while enc > 0 {
                bit_len += 1;
                if enc >= power {
                    enc -= power;
                    dec += power as u8;
                } else {
                    enc -= 1;
                }
                power >>= 1;
            }
            data.push(dec);
        }
        Self { data, bit_len }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn bits(s: &str) -> BitSequence {
        BitSequence::from_binary_str(s).unwrap()
    }

    #[test]
    fn encode_empty() {
        assert!(BitSequence::new().encode().is_empty());
        assert_eq!(BitSequence::decode(&[]), BitSequence::new());
    }

    #[test]
    fn encode_decode_one_byte() {
        let a = bits("1101");
        let encoded = a.encode();
        assert_eq!(encoded[0], 209);
        assert_eq!(BitSequence::decode(&encoded), a);
    }

    #[test]
    fn encode_decode_multi_byte() {
        let a = bits("1101001001");
        let encoded = a.encode();
        assert_eq!(encoded.as_slice(), [0b1101_0101, 0b0010_0010]);
        assert_eq!(BitSequence::decode(&encoded), a);
    }

    #[test]
    fn encode_decode_fully_packed() {
        let a = bits("11111110000000");
        let encoded = a.encode();
        assert_eq!(encoded.as_slice(), [0b1111_1110, 0b0000_0111]);
        assert_eq!(BitSequence::decode(&encoded), a);
    }

    #[test]
    fn single_byte_order() {
        let mut previous = BitSequence::from_int(0);
        for v in 1..128u32 {
            let current = BitSequence::from_int(v);
            assert!(previous < current, "bit order {previous} < {current}");
            assert!(
                previous.encode() < current.encode(),
                "encoded order for {previous} < {current}"
            );
            previous = current;
        }
    }

    fn any_bits(max_len: usize) -> impl Strategy<Value = BitSequence> {
        prop::collection::vec(any::<bool>(), 0..max_len)
            .prop_map(|bits| bits.into_iter().collect::<BitSequence>())
    }

    proptest! {
        #[test]
        fn prop_round_trip(s in any_bits(400)) {
            prop_assert_eq!(BitSequence::decode(&s.encode()), s);
        }

        // Byte order of the encodings equals bit order of the sequences.
        #[test]
        fn prop_order_preserving(a in any_bits(200), b in any_bits(200)) {
            prop_assert_eq!(a.encode().cmp(&b.encode()), a.cmp(&b));
        }

        // One encoding per distinct sequence.
        #[test]
        fn prop_unique_encoding(a in any_bits(200), b in any_bits(200)) {
            prop_assert_eq!(a.encode() == b.encode(), a == b);
        }
    }
}
