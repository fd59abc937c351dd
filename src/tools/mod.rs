//! The tools module provides the frequency counter and the helpers the command line front end uses.
//!
//! The tools are:
//! - cli: Command line options for huffcode.
//! - freq_count: Frequency count of an input sequence.
//! - report: Console listing of a code table and its encoding.
//! - source: Reading input from files or standard input.
//!
pub mod cli;
pub mod freq_count;
pub mod report;
pub mod source;
