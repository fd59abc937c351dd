//! The bitstream module holds the bit sequence type shared by the code table and the encoder.
//!
//! Codes and encoded output are kept one digit per element. Packing digits into dense bytes,
//! framing, and writing a container format are left to whatever consumes the output.
//!
pub mod bitstring;
