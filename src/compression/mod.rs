//! The compression module runs the full coding chain for one input.
//!
//! Compression happens in the following steps:
//! - Frequency count: tally each symbol, remembering the order symbols first appear in.
//! - Tree build: merge the two lightest nodes until one root is left.
//! - Code assignment: walk the tree, 0 for left and 1 for right.
//! - Encoding: replace every input symbol with its code.
//!
//! Decoding is not provided here.
//!

pub mod compress;
