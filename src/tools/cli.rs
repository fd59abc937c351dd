use std::{fmt::Display, fmt::Formatter};

use clap::Parser;
use log::{info, LevelFilter};

/// Verbosity of user information
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    Quiet,
    Errors,
    Warnings,
    Info,
    Debug,
    Trace,
}

impl Verbosity {
    /// Level filter handed to the logger
    pub fn level_filter(self) -> LevelFilter {
        match self {
            Verbosity::Quiet => LevelFilter::Off,
            Verbosity::Errors => LevelFilter::Error,
            Verbosity::Warnings => LevelFilter::Warn,
            Verbosity::Info => LevelFilter::Info,
            Verbosity::Debug => LevelFilter::Debug,
            Verbosity::Trace => LevelFilter::Trace,
        }
    }
}

/// Text, Bytes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolMode {
    /// Symbols are the UTF-8 characters of the input
    Text,
    /// Symbols are the raw bytes of the input
    Bytes,
}
impl Display for SymbolMode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Command Line Interpretation - uses external CLAP crate.
#[derive(Parser, Debug)]
#[clap(
    version,
    about = "Builds Huffman code tables and encodes input with them",
    long_about = "
    Counts the symbols of each input, builds the optimal prefix-free code for them and prints
    the number of distinct symbols and the encoded length, the code of every symbol, and the
    encoded bitstring. With no file names the input is read from standard input."
)]
pub struct Args {
    /// Files to encode
    #[clap()]
    files: Vec<String>,

    /// Encode only the first whitespace-delimited word of each input
    #[clap(short = 'w', long = "first-word")]
    first_word: bool,

    /// Treat input as raw bytes instead of UTF-8 text
    #[clap(short = 'b', long = "bytes")]
    bytes: bool,

    /// Print the code table but not the encoded bitstring
    #[clap(short = 'c', long = "codes-only")]
    codes_only: bool,

    /// Sets verbosity. Repeat for more (-vvvv is trace)
    #[clap(short = 'v', long = "verbose", parse(from_occurrences))]
    verbose: u8,

    /// Suppress all log messages
    #[clap(short = 'q', long = "quiet")]
    quiet: bool,
}

/// Options read by the rest of the program
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HuffOpts {
    /// Vec of names of files to read for input. Empty means standard input.
    pub files: Vec<String>,
    /// Keep only the first word of each input
    pub first_word: bool,
    /// How input is split into symbols
    pub mode: SymbolMode,
    /// Skip printing the encoded bits
    pub codes_only: bool,
    /// Verbosity of user information
    pub verbose: Verbosity,
}

impl HuffOpts {
    pub fn new() -> Self {
        Self {
            files: vec![],
            first_word: false,
            mode: SymbolMode::Text,
            codes_only: false,
            verbose: Verbosity::Errors,
        }
    }
}

impl Default for HuffOpts {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Args> for HuffOpts {
    fn from(args: Args) -> Self {
        let verbose = if args.quiet {
            Verbosity::Quiet
        } else {
            match args.verbose {
                0 => Verbosity::Errors,
                1 => Verbosity::Warnings,
                2 => Verbosity::Info,
                3 => Verbosity::Debug,
                _ => Verbosity::Trace,
            }
        };
        Self {
            files: args.files,
            first_word: args.first_word,
            mode: if args.bytes {
                SymbolMode::Bytes
            } else {
                SymbolMode::Text
            },
            codes_only: args.codes_only,
            verbose,
        }
    }
}

/// Parse options from an explicit argument list (the first item is the program name).
pub fn parse_from<I, T>(itr: I) -> HuffOpts
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Args::parse_from(itr).into()
}

/// Parse the process arguments and set the log level from them.
pub fn huffopts_init() -> HuffOpts {
    let opts: HuffOpts = Args::parse().into();
    log::set_max_level(opts.verbose.level_filter());

    info!("---- Initialization ----");
    info!("Verbosity set to {}", log::max_level());
    info!("Symbol mode set to {}", opts.mode);
    if opts.files.is_empty() {
        info!("Getting input from stdin");
    } else {
        info!("Getting input from {:?}", opts.files);
    }
    if opts.first_word {
        info!("Encoding first word only");
    }
    opts
}
