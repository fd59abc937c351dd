//! Huffman coding of symbol sequences.
//!
//! Version 0.1.0
//!
//! Counts the symbols of an input, builds the minimal-weight Huffman tree for those counts,
//! derives a prefix-free code for every symbol from the tree, and encodes the input with it.
//! Each call works on its own fresh tables, so independent inputs never share codes.
//!
//! Ties between equal weights are broken by order of first appearance in the input, with
//! merged nodes ordered after every leaf of the same weight. The first node taken from the
//! queue becomes the left (0) child. The same input therefore always gets the same codes.
//!
//! Basic usage:
//!
//! ```
//! let data: Vec<char> = "aaabbbccccc".chars().collect();
//! let result = huffcode::compress(&data).unwrap();
//! assert_eq!(result.table.get(&'c').unwrap().to_string(), "0");
//! assert_eq!(result.bits.len(), 17);
//! ```
//!
//! The `huffcode` binary does the same for files: `$> huffcode -w data.txt`
//!
use std::fmt::Debug;
use std::hash::Hash;

pub mod bitstream;
pub mod compression;
pub mod error;
pub mod huffman_coding;
pub mod tools;

pub use bitstream::bitstring::BitString;
pub use compression::compress::{compress, Compressed};
pub use error::{Error, Result};
pub use huffman_coding::codes::{assign_codes, CodeTable};
pub use huffman_coding::encode::encode;
pub use huffman_coding::node::Node;
pub use huffman_coding::tree::build_tree;
pub use tools::freq_count::{freqs, FrequencyTable};

/// Anything usable as an alphabet symbol: `char` for text, `u8` for bytes, or any other
/// small copyable type with a total order.
pub trait Symbol: Copy + Ord + Hash + Debug {}

impl<T: Copy + Ord + Hash + Debug> Symbol for T {}
