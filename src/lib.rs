#![doc = include_str!("../README.md")]
#![warn(
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    unreachable_pub,
    clippy::missing_const_for_fn,
    rustdoc::all
)]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
#![deny(unused_must_use, rust_2018_idioms)]
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]

extern crate alloc;

pub mod bits;
pub use bits::{BitSequence, EncodedBits};

pub mod nodes;
pub use nodes::{InternalNode, LeafNode, Node, StemNode};

mod error;
pub use error::TrieError;

mod insert;
pub use insert::insert;

mod lookup;
pub use lookup::lookup;

mod trie;
pub use trie::BinaryTrie;

mod value;
pub use value::{RawBytes, ValueCodec};

/// Commitment value of an absent or never-committed node: the 32-byte zero word.
pub const EMPTY_COMMITMENT: alloy_primitives::B256 = alloy_primitives::B256::ZERO;
