//! Minimum spanning tree construction over dense weight matrices.

mod frontier;
mod prim;

pub use frontier::FrontierEntry;
pub use prim::{prim, Frontier};
