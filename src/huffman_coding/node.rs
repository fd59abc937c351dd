use std::cmp::Ordering;

use crate::Symbol;

/// One element of a Huffman tree. Internal nodes own both children outright.
#[derive(Debug, Clone)]
pub enum Node<S: Symbol> {
    Leaf {
        symbol: S,
        freq: u64,
        seq: usize,
    },
    Internal {
        freq: u64,
        seq: usize,
        left: Box<Node<S>>,
        right: Box<Node<S>>,
    },
}

impl<S: Symbol> Node<S> {
    /// Create a new leaf
    pub fn leaf(symbol: S, freq: u64, seq: usize) -> Self {
        Node::Leaf { symbol, freq, seq }
    }

    /// Join two nodes under a new parent whose weight is the sum of theirs.
    pub fn join(left: Node<S>, right: Node<S>, seq: usize) -> Self {
        Node::Internal {
            freq: left.freq() + right.freq(),
            seq,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn freq(&self) -> u64 {
        match self {
            Node::Leaf { freq, .. } | Node::Internal { freq, .. } => *freq,
        }
    }

    /// Creation index, used to break frequency ties.
    pub fn seq(&self) -> usize {
        match self {
            Node::Leaf { seq, .. } | Node::Internal { seq, .. } => *seq,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf { .. })
    }

    /// Number of leaves below (and including) this node.
    pub fn leaf_count(&self) -> usize {
        match self {
            Node::Leaf { .. } => 1,
            Node::Internal { left, right, .. } => left.leaf_count() + right.leaf_count(),
        }
    }

    /// Longest root-to-leaf path, in edges. A bare leaf has height 0.
    pub fn height(&self) -> usize {
        match self {
            Node::Leaf { .. } => 0,
            Node::Internal { left, right, .. } => 1 + left.height().max(right.height()),
        }
    }
}

/*
    Nodes order by frequency, then by sequence number. Leaves are numbered in order of first
    appearance in the input and internal nodes take the next number as they are created, so
    a leaf always sorts ahead of an internal node with the same frequency. Sequence numbers
    are unique within one build, which makes this a total order.
*/
impl<S: Symbol> Ord for Node<S> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.freq()
            .cmp(&other.freq())
            .then_with(|| self.seq().cmp(&other.seq()))
    }
}

impl<S: Symbol> PartialOrd for Node<S> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<S: Symbol> PartialEq for Node<S> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<S: Symbol> Eq for Node<S> {}
