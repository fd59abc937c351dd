//! Error types for huffcode.
//!
//! Empty input and single-symbol input are not errors. The only failure the coding core can
//! report is an encoder asked to encode a symbol its code table does not cover. Failing to
//! obtain the input at all belongs to the front end, which reports it as `Source`.

use thiserror::Error;

/// Error variants for frequency counting, code assignment and encoding.
#[derive(Debug, Error)]
pub enum Error {
    /// The code table handed to the encoder has no entry for a symbol in the input.
    #[error("no code for symbol {symbol} at input position {position}")]
    MissingCode { symbol: String, position: usize },

    /// The input source could not be read.
    #[error("cannot read input {path}: {source}")]
    Source {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// A specialized Result type for huffcode operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod test {
    use super::Error;

    #[test]
    fn missing_code_message_test() {
        let err = Error::MissingCode {
            symbol: "'z'".to_string(),
            position: 7,
        };
        assert_eq!(err.to_string(), "no code for symbol 'z' at input position 7");
    }

    #[test]
    fn source_keeps_cause_test() {
        use std::error::Error as _;
        let err = Error::Source {
            path: "missing.txt".to_string(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        };
        assert!(err.to_string().starts_with("cannot read input missing.txt"));
        assert!(err.source().is_some());
    }
}
