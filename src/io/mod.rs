//! IO module for reading and writing dense matrices as delimited text.
//!
//! Matrices are stored headerless, one row per line, with a single-byte delimiter
//! between values (comma by default).

mod csv;

pub use csv::*;
