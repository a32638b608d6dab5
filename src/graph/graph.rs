use std::path::{Path, PathBuf};

use ndarray::{Array2, ArrayD, Ix2};
use serde::Serialize;
use tracing::debug;

use crate::{
    error::{GraphError, Result},
    graph::{TreeEdge, WeightMatrix, edge_count, is_connected, tree_edges, tree_weight, validate_weights},
    io::read_matrix,
    mst::{Frontier, prim},
};

/// Anything a [`Graph`] can be built from.
#[derive(Clone, Debug)]
pub enum MatrixSource {
    /// An already materialized weight matrix.
    Matrix(Array2<f64>),
    /// An array of unknown dimensionality; must turn out to be two-dimensional.
    Dynamic(ArrayD<f64>),
    /// A comma-delimited text file holding the matrix, one row per line.
    Path(PathBuf),
}

impl From<Array2<f64>> for MatrixSource {
    fn from(matrix: Array2<f64>) -> Self { Self::Matrix(matrix) }
}

impl From<ArrayD<f64>> for MatrixSource {
    fn from(array: ArrayD<f64>) -> Self { Self::Dynamic(array) }
}

impl From<PathBuf> for MatrixSource {
    fn from(path: PathBuf) -> Self { Self::Path(path) }
}

impl From<&Path> for MatrixSource {
    fn from(path: &Path) -> Self { Self::Path(path.to_path_buf()) }
}

impl From<&str> for MatrixSource {
    fn from(path: &str) -> Self { Self::Path(PathBuf::from(path)) }
}

impl From<String> for MatrixSource {
    fn from(path: String) -> Self { Self::Path(PathBuf::from(path)) }
}

/// Headline numbers for a constructed spanning tree.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct MstSummary {
    pub nodes: usize,
    pub edges: usize,
    pub total_weight: f64,
}

/// An undirected weighted graph stored as a dense adjacency matrix, together with
/// its minimum spanning tree once one has been constructed.
#[derive(Clone, Debug)]
pub struct Graph {
    weights: WeightMatrix,
    tree: Option<Array2<f64>>,
}

impl Graph {
    /// Build a graph from a matrix or from a comma-delimited file.
    ///
    /// Symmetry and non-negativity are not checked here; see [`Graph::validate`].
    pub fn new(source: impl Into<MatrixSource>) -> Result<Self> {
        match source.into() {
            MatrixSource::Matrix(matrix) => Self::from_matrix(matrix),
            MatrixSource::Dynamic(array) => {
                let ndim = array.ndim();
                let matrix = array.into_dimensionality::<Ix2>()
                    .map_err(|_| GraphError::InvalidInputKind { ndim })?;
                Self::from_matrix(matrix)
            }
            MatrixSource::Path(path) => Self::from_delimited(&path, b','),
        }
    }

    /// Build a graph from an in-memory weight matrix.
    pub fn from_matrix(weights: WeightMatrix) -> Result<Self> {
        let (rows, cols) = weights.dim();
        if rows != cols { return Err(GraphError::NotSquare { rows, cols }) }
        Ok(Self { weights, tree: None })
    }

    /// Build a graph from a headerless delimited text file.
    pub fn from_delimited(path: &Path, delimiter: u8) -> Result<Self> {
        let weights = read_matrix(path, delimiter).map_err(GraphError::Load)?;
        debug!(path = %path.display(), nodes = weights.nrows(), "loaded weight matrix");
        Self::from_matrix(weights)
    }

    /// Get the number of vertices.
    #[inline] pub fn node_count(&self) -> usize { self.weights.nrows() }

    /// Get the number of undirected edges in the input graph.
    #[inline] pub fn edge_count(&self) -> usize { edge_count(&self.weights) }

    /// Get a reference to the input weight matrix.
    #[inline] pub fn weight_matrix(&self) -> &WeightMatrix { &self.weights }

    /// Get the spanning tree matrix, or `None` if it has not been constructed.
    #[inline] pub fn spanning_tree(&self) -> Option<&Array2<f64>> { self.tree.as_ref() }

    /// Check the adjacency matrix conventions (finite, non-negative, zero diagonal, symmetric).
    pub fn validate(&self) -> Result<()> { validate_weights(&self.weights) }

    /// Returns true if every vertex is reachable from vertex 0.
    pub fn is_connected(&self) -> bool { is_connected(&self.weights) }

    /// Construct the minimum spanning tree with the default frontier.
    pub fn construct_mst(&mut self) -> Result<()> { self.construct_mst_with(Frontier::default()) }

    /// Construct the minimum spanning tree, replacing any previous result.
    /// On failure no tree is stored.
    pub fn construct_mst_with(&mut self, frontier: Frontier) -> Result<()> {
        self.tree = None;
        debug!(nodes = self.node_count(), ?frontier, "constructing minimum spanning tree");

        let tree = prim(&self.weights, frontier)?;
        debug!(edges = edge_count(&tree), total_weight = tree_weight(&tree), "spanning tree complete");

        self.tree = Some(tree);
        Ok(())
    }

    /// Get the edges of the constructed tree, if any.
    pub fn tree_edges(&self) -> Option<Vec<TreeEdge>> { self.tree.as_ref().map(tree_edges) }

    /// Summarize the constructed tree, if any.
    pub fn summary(&self) -> Option<MstSummary> {
        self.tree.as_ref().map(|tree| MstSummary {
            nodes: self.node_count(),
            edges: edge_count(tree),
            total_weight: tree_weight(tree),
        })
    }
}
