use thiserror::Error;

/// Error type for trie operations.
///
/// The core is pure and in-memory: every error is a precondition violation,
/// raised synchronously and fatal only to the in-flight operation. An insert
/// that fails returns no new root, so the trie is never partially updated.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrieError {
    /// An input value violated a precondition.
    #[error("invalid input: {0}")]
    InvalidInput(&'static str),

    /// A bit index or slice bound fell outside the sequence.
    #[error("index {index} out of bounds for bit sequence of length {length}")]
    IndexError {
        /// The offending index or bound.
        index: isize,
        /// The length of the sequence that was indexed.
        length: usize,
    },

    /// An integer conversion was attempted on a sequence wider than 32 bits.
    #[error("bit sequence of length {length} does not fit in a u32")]
    Overflow {
        /// The length of the sequence that overflowed.
        length: usize,
    },
}
