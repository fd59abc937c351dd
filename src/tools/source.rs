use std::fs::File;
use std::io::{self, Read};

use log::{debug, warn};

use crate::error::{Error, Result};

/// Name used for standard input in messages
pub const STDIN_NAME: &str = "<stdin>";

/// Read all of a file, or standard input when no path is given.
pub fn read_input(path: Option<&str>) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    let name = path.unwrap_or(STDIN_NAME);
    let read = match path {
        Some(p) => File::open(p).and_then(|mut f| f.read_to_end(&mut buf)),
        None => io::stdin().lock().read_to_end(&mut buf),
    };
    read.map_err(|source| Error::Source {
        path: name.to_string(),
        source,
    })?;
    debug!("Read {} bytes from {}", buf.len(), name);
    Ok(buf)
}

/// The first whitespace-delimited word of `data`, or an empty slice if there is none.
pub fn first_word(data: &[u8]) -> &[u8] {
    data.split(|b| b.is_ascii_whitespace())
        .find(|w| !w.is_empty())
        .unwrap_or(&[])
}

/// Decode `data` as UTF-8 characters. Invalid sequences become U+FFFD.
pub fn to_chars(data: &[u8]) -> Vec<char> {
    let text = String::from_utf8_lossy(data);
    if let std::borrow::Cow::Owned(_) = text {
        warn!("Input is not valid UTF-8; invalid sequences replaced");
    }
    text.chars().collect()
}
