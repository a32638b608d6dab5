pub mod check;
pub mod mst;
