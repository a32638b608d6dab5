#![doc = "Minimum spanning trees over dense adjacency matrices"]
mod error;
mod graph;
mod io;
mod mst;

#[doc(inline)]
pub use error::{GraphError, Result};

#[doc(inline)]
pub use graph::{
    Graph, MatrixSource, MstSummary, TreeEdge, WeightMatrix,
    edge_count, is_connected, tree_edges, tree_weight, validate_weights,
};

#[doc(inline)]
pub use mst::{Frontier, FrontierEntry, prim};

#[doc(inline)]
pub use io::{read_matrix, read_matrix_str, write_matrix, write_matrix_string};
