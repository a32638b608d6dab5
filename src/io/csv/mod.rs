//! Delimited text reading and writing operations.

mod read;
mod write;

pub use read::*;
pub use write::*;
