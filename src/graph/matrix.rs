use std::collections::VecDeque;

use ndarray::Array2;
use serde::Serialize;

use crate::error::{GraphError, Result};

/// Dense, symmetric adjacency matrix where 0 off the diagonal means "no edge".
pub type WeightMatrix = Array2<f64>;

/// Tolerance used when checking symmetry.
const SYMMETRY_TOLERANCE: f64 = 1e-9;

/// A single undirected edge of a spanning tree, stored with `source < target`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct TreeEdge {
    pub source: usize,
    pub target: usize,
    pub weight: f64,
}

/// Value that loses every comparison against a real edge weight: `max + 1`.
///
/// Falls back to `f64::INFINITY` when the largest weight is too large for
/// `+ 1` to change it.
pub(crate) fn sentinel(weights: &WeightMatrix) -> f64 {
    let max = weights.iter().copied().fold(0.0, f64::max);
    let infinity = max + 1.0;
    if infinity > max { infinity } else { f64::INFINITY }
}

/// Check that `weights` is square, finite, non-negative, zero on the diagonal and symmetric.
pub fn validate_weights(weights: &WeightMatrix) -> Result<()> {
    let (rows, cols) = weights.dim();
    if rows != cols { return Err(GraphError::NotSquare { rows, cols }) }

    let invalid = |row, col, reason| Err(GraphError::InvalidWeights { row, col, reason });
    for ((row, col), &weight) in weights.indexed_iter() {
        if !weight.is_finite() { return invalid(row, col, "weight is not finite") }
        if weight < 0.0 { return invalid(row, col, "weight is negative") }
        if row == col && weight != 0.0 { return invalid(row, col, "diagonal entry is nonzero") }
        if (weight - weights[[col, row]]).abs() > SYMMETRY_TOLERANCE {
            return invalid(row, col, "matrix is not symmetric");
        }
    }
    Ok(())
}

/// Returns true if every vertex is reachable from vertex 0 along positive-weight edges.
/// Empty and single-vertex matrices are connected.
pub fn is_connected(weights: &WeightMatrix) -> bool {
    let n = weights.nrows();
    if n <= 1 { return true }

    let mut seen = vec![false; n];
    let mut queue = VecDeque::from([0]);
    seen[0] = true;
    let mut reached = 1;

    while let Some(u) = queue.pop_front() {
        for (v, &weight) in weights.row(u).iter().enumerate() {
            if weight > 0.0 && !seen[v] {
                seen[v] = true;
                reached += 1;
                queue.push_back(v);
            }
        }
    }
    reached == n
}

/// List the edges of a tree matrix, reading the upper triangle in row-major order.
pub fn tree_edges(tree: &Array2<f64>) -> Vec<TreeEdge> {
    tree.indexed_iter()
        .filter(|&((source, target), &weight)| source < target && weight != 0.0)
        .map(|((source, target), &weight)| TreeEdge { source, target, weight })
        .collect()
}

/// Number of undirected edges in an adjacency matrix, each pair counted once.
pub fn edge_count(matrix: &Array2<f64>) -> usize {
    matrix.indexed_iter()
        .filter(|&((i, j), &weight)| i < j && weight != 0.0)
        .count()
}

/// Total weight of an adjacency matrix, each undirected edge counted once.
pub fn tree_weight(tree: &Array2<f64>) -> f64 {
    tree_edges(tree).iter().map(|edge| edge.weight).sum()
}
