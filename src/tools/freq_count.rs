use rustc_hash::FxHashMap;

use crate::Symbol;

/// Symbol counts for one input, kept in order of first appearance.
///
/// First-appearance order is what the tree builder numbers its leaves by, so two tables built
/// from the same input always produce the same tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyTable<S: Symbol> {
    entries: Vec<(S, u64)>,
    index: FxHashMap<S, usize>,
}

impl<S: Symbol> FrequencyTable<S> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            index: FxHashMap::default(),
        }
    }

    /// Count one more occurrence of `symbol`.
    pub fn add(&mut self, symbol: S) {
        match self.index.get(&symbol) {
            Some(&i) => self.entries[i].1 += 1,
            None => {
                self.index.insert(symbol, self.entries.len());
                self.entries.push((symbol, 1));
            }
        }
    }

    /// Count for `symbol`, or 0 if it never appeared.
    pub fn get(&self, symbol: &S) -> u64 {
        self.index.get(symbol).map_or(0, |&i| self.entries[i].1)
    }

    /// Number of distinct symbols.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all counts, which equals the input length.
    pub fn total(&self) -> u64 {
        self.entries.iter().map(|&(_, f)| f).sum()
    }

    /// (symbol, count) pairs in order of first appearance.
    pub fn iter(&self) -> impl Iterator<Item = (S, u64)> + '_ {
        self.entries.iter().copied()
    }
}

impl<S: Symbol> Default for FrequencyTable<S> {
    fn default() -> Self {
        Self::new()
    }
}

/// Returns a frequency count of the input data.
pub fn freqs<S: Symbol>(data: &[S]) -> FrequencyTable<S> {
    let mut table = FrequencyTable::new();
    data.iter().for_each(|&el| table.add(el));
    table
}

#[cfg(test)]
mod test {
    use super::freqs;

    #[test]
    fn counts_test() {
        let data: Vec<char> = "abracadabra".chars().collect();
        let table = freqs(&data);
        assert_eq!(table.len(), 5);
        assert_eq!(table.get(&'a'), 5);
        assert_eq!(table.get(&'b'), 2);
        assert_eq!(table.get(&'r'), 2);
        assert_eq!(table.get(&'c'), 1);
        assert_eq!(table.get(&'d'), 1);
        assert_eq!(table.get(&'z'), 0);
        assert_eq!(table.total(), data.len() as u64);
    }

    #[test]
    fn first_appearance_order_test() {
        let table = freqs(b"cabbac");
        let order: Vec<u8> = table.iter().map(|(s, _)| s).collect();
        assert_eq!(order, b"cab".to_vec());
    }

    #[test]
    fn order_does_not_change_counts_test() {
        let fwd = freqs(b"mississippi");
        let mut rev = b"mississippi".to_vec();
        rev.reverse();
        let rev = freqs(&rev);
        for (s, f) in fwd.iter() {
            assert_eq!(rev.get(&s), f);
        }
        assert_eq!(fwd.len(), rev.len());
    }

    #[test]
    fn empty_test() {
        let table = freqs::<u8>(&[]);
        assert!(table.is_empty());
        assert_eq!(table.total(), 0);
    }
}
