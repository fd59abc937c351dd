use std::fmt::{Display, Formatter};

/// An owned sequence of binary digits. Used both for single symbol codes and for the
/// encoded output. One `bool` per digit; packing into bytes is left to the caller.
#[derive(Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct BitString {
    bits: Vec<bool>,
}

impl BitString {
    /// Create an empty bitstring.
    pub fn new() -> Self {
        Self { bits: Vec::new() }
    }

    /// Create an empty bitstring able to hold `size` digits without reallocating.
    pub fn with_capacity(size: usize) -> Self {
        Self {
            bits: Vec::with_capacity(size),
        }
    }

    /// Parse a string of '0' and '1' characters. Returns None if any other character appears.
    pub fn from_digits(digits: &str) -> Option<Self> {
        digits
            .chars()
            .map(|c| match c {
                '0' => Some(false),
                '1' => Some(true),
                _ => None,
            })
            .collect::<Option<Vec<bool>>>()
            .map(|bits| Self { bits })
    }

    /// Append one digit.
    pub fn push(&mut self, bit: bool) {
        self.bits.push(bit);
    }

    /// Remove and return the last digit.
    pub fn pop(&mut self) -> Option<bool> {
        self.bits.pop()
    }

    /// Append every digit of `other`.
    pub fn extend_from(&mut self, other: &BitString) {
        self.bits.extend_from_slice(&other.bits);
    }

    /// Number of digits.
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// True if `prefix` matches the leading digits of self.
    pub fn starts_with(&self, prefix: &BitString) -> bool {
        self.bits.starts_with(&prefix.bits)
    }

    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        self.bits.iter().copied()
    }

    pub fn as_slice(&self) -> &[bool] {
        &self.bits
    }
}

impl FromIterator<bool> for BitString {
    fn from_iter<I: IntoIterator<Item = bool>>(iter: I) -> Self {
        Self {
            bits: iter.into_iter().collect(),
        }
    }
}

impl Display for BitString {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let digits: String = self
            .bits
            .iter()
            .map(|&b| if b { '1' } else { '0' })
            .collect();
        f.pad(&digits)
    }
}
