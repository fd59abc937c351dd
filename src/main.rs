//Enable more cargo lint tests
#![warn(rust_2018_idioms)]
#![warn(clippy::disallowed_types)]

use std::process::ExitCode;

use huffcode::tools::cli::{huffopts_init, HuffOpts, SymbolMode};
use huffcode::tools::report::render;
use huffcode::tools::source::{first_word, read_input, to_chars, STDIN_NAME};
use huffcode::{compress, Result};

use log::{error, info, LevelFilter};
use simplelog::{Config, TermLogger, TerminalMode};

#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

fn main() -> ExitCode {
    // Available log levels are Error, Warn, Info, Debug, Trace
    if TermLogger::init(
        LevelFilter::Trace,
        Config::default(),
        TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    )
    .is_err()
    {
        eprintln!("Logger already initialized");
    }

    let opts = huffopts_init();

    let mut status = ExitCode::SUCCESS;
    if opts.files.is_empty() {
        if let Err(e) = run(None, &opts) {
            error!("{}", e);
            status = ExitCode::FAILURE;
        }
    }
    for file in &opts.files {
        if opts.files.len() > 1 {
            println!("==> {} <==", file);
        }
        if let Err(e) = run(Some(file.as_str()), &opts) {
            error!("{}", e);
            status = ExitCode::FAILURE;
        }
    }

    info!("Done.\n");
    status
}

/// Read one input, encode it and print the listing.
fn run(path: Option<&str>, opts: &HuffOpts) -> Result<()> {
    let raw = read_input(path)?;
    let data = if opts.first_word {
        first_word(&raw)
    } else {
        &raw[..]
    };
    info!(
        "Encoding {} ({} bytes)",
        path.unwrap_or(STDIN_NAME),
        data.len()
    );

    let listing = match opts.mode {
        SymbolMode::Text => render(&compress(&to_chars(data))?, opts.codes_only),
        SymbolMode::Bytes => render(&compress(data)?, opts.codes_only),
    };
    print!("{}", listing);
    Ok(())
}
