use log::{info, warn};

use crate::bitstream::bitstring::BitString;
use crate::error::Result;
use crate::huffman_coding::codes::{assign_codes, CodeTable};
use crate::huffman_coding::encode::encode;
use crate::huffman_coding::tree::build_tree;
use crate::tools::freq_count::freqs;
use crate::Symbol;

/// Result of compressing one input: its code table and the encoded bits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Compressed<S: Symbol> {
    pub table: CodeTable<S>,
    pub bits: BitString,
    /// Number of symbols in the input
    pub symbols: usize,
}

impl<S: Symbol> Compressed<S> {
    /// Number of distinct symbols
    pub fn distinct(&self) -> usize {
        self.table.len()
    }

    /// Bits needed to store the input at `symbol_bits` bits per symbol.
    pub fn fixed_width_bits(&self, symbol_bits: usize) -> usize {
        self.symbols * symbol_bits
    }
}

/// Run the whole chain for one input: count, build the tree, assign codes, encode.
///
/// The frequency table and tree live only for this call.
pub fn compress<S: Symbol>(data: &[S]) -> Result<Compressed<S>> {
    let counts = freqs(data);
    match counts.len() {
        0 => warn!("Empty input, nothing to encode"),
        1 => warn!("Only one distinct symbol; using the one-bit code 0"),
        _ => {}
    }

    let table = {
        let root = build_tree(&counts);
        assign_codes(root.as_ref())
    };
    let bits = encode(data, &table)?;

    info!(
        "{} symbols, {} distinct, {} bits",
        data.len(),
        table.len(),
        bits.len()
    );
    Ok(Compressed {
        table,
        bits,
        symbols: data.len(),
    })
}
