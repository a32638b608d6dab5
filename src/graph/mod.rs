mod graph;
mod matrix;

pub use graph::{Graph, MatrixSource, MstSummary};
pub use matrix::{TreeEdge, WeightMatrix, edge_count, is_connected, tree_edges, tree_weight, validate_weights};
pub(crate) use matrix::sentinel;
