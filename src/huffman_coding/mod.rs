//! The huffman_coding module turns symbol counts into prefix-free codes and applies them.
//!
//! - node: the tree element, a leaf or an internal node owning two children, and the order
//!   nodes are merged in.
//! - tree: greedy construction of the Huffman tree from a frequency table.
//! - codes: the code table and the walk that derives it from a finished tree.
//! - encode: concatenation of codes for an input sequence.
//!
//! Everything here is sequential and allocates fresh per call. No state is kept between calls.
//!

pub mod codes;
pub mod encode;
pub mod node;
pub mod tree;
