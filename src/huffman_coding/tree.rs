//! Greedy Huffman tree construction.
//!
//! Every distinct symbol starts as a leaf. The two lowest-ordered nodes are repeatedly joined
//! under a new parent until a single root is left. The node removed first becomes the left
//! child (bit 0) and the node removed second becomes the right child (bit 1).

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use log::{debug, trace};

use super::node::Node;
use crate::tools::freq_count::FrequencyTable;
use crate::Symbol;

/// Build the Huffman tree for a frequency table. Returns None when the table is empty.
/// A table with a single symbol yields a bare leaf as the root.
pub fn build_tree<S: Symbol>(freqs: &FrequencyTable<S>) -> Option<Node<S>> {
    // Leaves are numbered in first-appearance order; parents continue the numbering.
    let mut heap: BinaryHeap<Reverse<Node<S>>> = freqs
        .iter()
        .enumerate()
        .map(|(seq, (symbol, freq))| Reverse(Node::leaf(symbol, freq, seq)))
        .collect();
    let mut next_seq = heap.len();

    while heap.len() > 1 {
        let (Some(Reverse(left)), Some(Reverse(right))) = (heap.pop(), heap.pop()) else {
            break;
        };
        trace!(
            "join #{} (w {}) + #{} (w {}) -> #{}",
            left.seq(),
            left.freq(),
            right.seq(),
            right.freq(),
            next_seq
        );
        heap.push(Reverse(Node::join(left, right, next_seq)));
        next_seq += 1;
    }

    let root = heap.pop().map(|Reverse(root)| root);
    if let Some(root) = &root {
        debug!(
            "Tree built: {} leaves, height {}, weight {}",
            root.leaf_count(),
            root.height(),
            root.freq()
        );
    }
    root
}

#[cfg(test)]
mod test {
    use super::build_tree;
    use crate::huffman_coding::node::Node;
    use crate::tools::freq_count::freqs;

    #[test]
    fn empty_has_no_tree_test() {
        assert!(build_tree(&freqs::<char>(&[])).is_none());
    }

    #[test]
    fn single_symbol_is_bare_leaf_test() {
        let root = build_tree(&freqs(b"aaaa")).unwrap();
        assert!(root.is_leaf());
        assert_eq!(root.freq(), 4);
    }

    #[test]
    fn two_symbols_test() {
        let root = build_tree(&freqs(b"aab")).unwrap();
        match root {
            Node::Internal { left, right, freq, .. } => {
                assert_eq!(freq, 3);
                // b has the lower weight, so it is removed first and goes left.
                assert!(matches!(*left, Node::Leaf { symbol: b'b', freq: 1, .. }));
                assert!(matches!(*right, Node::Leaf { symbol: b'a', freq: 2, .. }));
            }
            Node::Leaf { .. } => panic!("expected an internal root"),
        }
    }

    #[test]
    fn equal_weights_merge_in_input_order_test() {
        let root = build_tree(&freqs(b"abcd")).unwrap();
        assert_eq!(root.height(), 2);
        assert_eq!(root.leaf_count(), 4);
        let Node::Internal { left, right, .. } = root else {
            panic!("expected an internal root");
        };
        let Node::Internal { left: a, right: b, .. } = *left else {
            panic!("expected internal left child");
        };
        assert!(matches!(*a, Node::Leaf { symbol: b'a', .. }));
        assert!(matches!(*b, Node::Leaf { symbol: b'b', .. }));
        let Node::Internal { left: c, right: d, .. } = *right else {
            panic!("expected internal right child");
        };
        assert!(matches!(*c, Node::Leaf { symbol: b'c', .. }));
        assert!(matches!(*d, Node::Leaf { symbol: b'd', .. }));
    }

    #[test]
    fn tree_is_full_test() {
        fn check(node: &Node<u8>) -> u64 {
            match node {
                Node::Leaf { freq, .. } => *freq,
                Node::Internal { freq, left, right, .. } => {
                    let sum = check(left) + check(right);
                    assert_eq!(*freq, sum);
                    sum
                }
            }
        }
        let data = b"the quick brown fox jumps over the lazy dog";
        let table = freqs(data);
        let root = build_tree(&table).unwrap();
        assert_eq!(root.leaf_count(), table.len());
        assert_eq!(check(&root), data.len() as u64);
    }
}
