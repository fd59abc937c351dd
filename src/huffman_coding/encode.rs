use log::{error, trace};

use super::codes::CodeTable;
use crate::bitstream::bitstring::BitString;
use crate::error::{Error, Result};
use crate::Symbol;

/// Encode `data` by concatenating the code of each symbol in input order.
///
/// The table may come from anywhere, so every lookup is checked. The first symbol without a
/// code stops encoding with `Error::MissingCode`; nothing is skipped or substituted.
pub fn encode<S: Symbol>(data: &[S], table: &CodeTable<S>) -> Result<BitString> {
    let expected: usize = data
        .iter()
        .map(|s| table.get(s).map_or(0, BitString::len))
        .sum();
    let mut out = BitString::with_capacity(expected);

    for (position, symbol) in data.iter().enumerate() {
        match table.get(symbol) {
            Some(code) => out.extend_from(code),
            None => {
                error!("No code for {:?} at position {}", symbol, position);
                return Err(Error::MissingCode {
                    symbol: format!("{:?}", symbol),
                    position,
                });
            }
        }
    }
    trace!("Encoded {} symbols into {} bits", data.len(), out.len());
    Ok(out)
}
