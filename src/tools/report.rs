use std::fmt::Write;

use crate::compression::compress::Compressed;
use crate::Symbol;

/// Printable name for a symbol in the code listing.
pub trait Label {
    fn label(&self) -> String;
}

impl Label for char {
    fn label(&self) -> String {
        if self.is_control() || self.is_whitespace() {
            format!("U+{:04X}", *self as u32)
        } else {
            self.to_string()
        }
    }
}

impl Label for u8 {
    fn label(&self) -> String {
        if self.is_ascii_graphic() {
            (*self as char).to_string()
        } else {
            format!("0x{:02x}", self)
        }
    }
}

/// Format a result the way the console shows it: a "<distinct> <bit length>" line, one
/// "<symbol>: <code>" line per symbol in symbol order, then the encoded bits unless
/// `codes_only` is set.
pub fn render<S: Symbol + Label>(result: &Compressed<S>, codes_only: bool) -> String {
    let mut out = String::new();
    // Writing to a String cannot fail.
    let _ = writeln!(out, "{} {}", result.distinct(), result.bits.len());
    for (symbol, code) in result.table.iter() {
        let _ = writeln!(out, "{}: {}", symbol.label(), code);
    }
    if !codes_only {
        let _ = writeln!(out, "{}", result.bits);
    }
    out
}
