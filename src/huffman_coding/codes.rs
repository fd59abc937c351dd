use std::collections::BTreeMap;

use log::debug;

use super::node::Node;
use crate::bitstream::bitstring::BitString;
use crate::tools::freq_count::FrequencyTable;
use crate::Symbol;

/// Symbol to code mapping. Iterates in symbol order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeTable<S: Symbol> {
    codes: BTreeMap<S, BitString>,
}

impl<S: Symbol> CodeTable<S> {
    pub fn new() -> Self {
        Self {
            codes: BTreeMap::new(),
        }
    }

    /// Set the code for a symbol, returning any code it replaced.
    pub fn insert(&mut self, symbol: S, code: BitString) -> Option<BitString> {
        self.codes.insert(symbol, code)
    }

    pub fn get(&self, symbol: &S) -> Option<&BitString> {
        self.codes.get(symbol)
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&S, &BitString)> + '_ {
        self.codes.iter()
    }

    /// Total encoded length, in bits, of an input with the given counts.
    /// Symbols without a code contribute nothing.
    pub fn weighted_length(&self, freqs: &FrequencyTable<S>) -> u64 {
        freqs
            .iter()
            .filter_map(|(s, f)| self.codes.get(&s).map(|c| f * c.len() as u64))
            .sum()
    }
}

impl<S: Symbol> Default for CodeTable<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Symbol> FromIterator<(S, BitString)> for CodeTable<S> {
    fn from_iter<I: IntoIterator<Item = (S, BitString)>>(iter: I) -> Self {
        Self {
            codes: iter.into_iter().collect(),
        }
    }
}

/// Walk the tree and return a fresh table holding one code per leaf.
///
/// Going left appends a 0 and going right appends a 1. A tree that is a single leaf has no
/// edges to walk, so its only symbol gets the one-digit code "0".
pub fn assign_codes<S: Symbol>(root: Option<&Node<S>>) -> CodeTable<S> {
    let mut table = CodeTable::new();
    match root {
        None => {}
        Some(Node::Leaf { symbol, .. }) => {
            table.insert(*symbol, BitString::from_iter([false]));
        }
        Some(node) => {
            let mut path = BitString::with_capacity(node.height());
            fill_codes(node, &mut path, &mut table);
        }
    }
    debug!("Assigned {} codes", table.len());
    table
}

/// Recursively walk the tree, recording the path to each leaf.
fn fill_codes<S: Symbol>(node: &Node<S>, path: &mut BitString, table: &mut CodeTable<S>) {
    match node {
        Node::Internal { left, right, .. } => {
            path.push(false);
            fill_codes(left, path, table);
            path.pop();
            path.push(true);
            fill_codes(right, path, table);
            path.pop();
        }
        Node::Leaf { symbol, .. } => {
            table.insert(*symbol, path.clone());
        }
    }
}

#[cfg(test)]
mod test {
    use super::{assign_codes, CodeTable};
    use crate::bitstream::bitstring::BitString;
    use crate::huffman_coding::tree::build_tree;
    use crate::tools::freq_count::freqs;

    fn codes_for(data: &str) -> CodeTable<char> {
        let data: Vec<char> = data.chars().collect();
        assign_codes(build_tree(&freqs(&data)).as_ref())
    }

    fn code(table: &CodeTable<char>, c: char) -> String {
        table.get(&c).unwrap().to_string()
    }

    #[test]
    fn empty_table_test() {
        assert!(codes_for("").is_empty());
    }

    #[test]
    fn single_leaf_gets_zero_test() {
        let table = codes_for("aaaa");
        assert_eq!(table.len(), 1);
        assert_eq!(code(&table, 'a'), "0");
    }

    #[test]
    fn two_symbols_test() {
        let table = codes_for("aab");
        assert_eq!(code(&table, 'b'), "0");
        assert_eq!(code(&table, 'a'), "1");
    }

    #[test]
    fn four_equal_symbols_test() {
        let table = codes_for("abcd");
        assert_eq!(code(&table, 'a'), "00");
        assert_eq!(code(&table, 'b'), "01");
        assert_eq!(code(&table, 'c'), "10");
        assert_eq!(code(&table, 'd'), "11");
    }

    #[test]
    fn skewed_weights_test() {
        let data: Vec<char> = "aaabbbccccc".chars().collect();
        let counts = freqs(&data);
        let table = assign_codes(build_tree(&counts).as_ref());
        assert_eq!(code(&table, 'c'), "0");
        assert_eq!(code(&table, 'a'), "10");
        assert_eq!(code(&table, 'b'), "11");
        assert_eq!(table.weighted_length(&counts), 17);
    }

    #[test]
    fn iterates_in_symbol_order_test() {
        let table = codes_for("zyxzyz");
        let order: Vec<char> = table.iter().map(|(s, _)| *s).collect();
        assert_eq!(order, vec!['x', 'y', 'z']);
    }

    #[test]
    fn fresh_table_per_call_test() {
        let first = codes_for("aab");
        let second = codes_for("xyz");
        assert!(first.get(&'x').is_none());
        assert!(second.get(&'a').is_none());
        assert_eq!(first.len(), 2);
        assert_eq!(second.len(), 3);
    }

    #[test]
    fn collect_test() {
        let table: CodeTable<u8> = vec![
            (b'a', BitString::from_digits("1").unwrap()),
            (b'b', BitString::from_digits("0").unwrap()),
        ]
        .into_iter()
        .collect();
        assert_eq!(table.len(), 2);
        assert_eq!(table.get(&b'a').unwrap().to_string(), "1");
    }
}
