use ndarray::Array2;
use tracing::trace;

use crate::{error::{GraphError, Result}, graph::{WeightMatrix, sentinel}};

use super::frontier::{FrontierQueue, HeapFrontier, ScanFrontier, seed_entries};

/// Vertex the tree is grown from.
const SEED: usize = 0;

/// How the outside vertices are kept ordered between iterations.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Frontier {
    /// Binary heap, fully re-heapified after every relaxation pass. O(n² log n).
    #[default]
    Heap,
    /// Flat array scanned for the minimum each iteration. O(n²).
    Scan,
}

/// Compute a minimum spanning tree of `weights` with Prim's algorithm, seeded at vertex 0.
///
/// Returns the tree as an adjacency matrix of the same shape, holding only the selected
/// edges. The input is never modified. Fails with `DisconnectedGraph` if some vertex
/// cannot be reached from the seed.
pub fn prim(weights: &WeightMatrix, frontier: Frontier) -> Result<Array2<f64>> {
    let (rows, cols) = weights.dim();
    if rows != cols { return Err(GraphError::NotSquare { rows, cols }) }
    if rows == 0 { return Ok(Array2::zeros((0, 0))) }

    let entries = seed_entries(weights, SEED, sentinel(weights));
    match frontier {
        Frontier::Heap => grow(weights, HeapFrontier::new(entries)),
        Frontier::Scan => grow(weights, ScanFrontier::new(entries)),
    }
}

/// Main loop: attach the cheapest outside vertex until none remain.
fn grow(weights: &WeightMatrix, mut queue: impl FrontierQueue) -> Result<Array2<f64>> {
    let n = weights.nrows();
    let mut tree = Array2::<f64>::zeros((n, n));

    while let Some(entry) = queue.pop_min() {
        // The cheapest vertex has no real edge, so neither does any other.
        let Some(source) = entry.best_source else {
            return Err(GraphError::DisconnectedGraph { vertex: entry.vertex });
        };

        let vertex = entry.vertex;
        tree[[vertex, source]] = weights[[vertex, source]];
        tree[[source, vertex]] = weights[[source, vertex]];
        trace!(vertex, source, weight = entry.best_weight, remaining = queue.len(), "attached vertex");

        queue.relax(vertex, weights.row(vertex));
    }

    Ok(tree)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{edge_count, tree_weight};
    use ndarray::array;

    const FRONTIERS: [Frontier; 2] = [Frontier::Heap, Frontier::Scan];

    #[test]
    fn two_vertices() {
        let weights = array![[0.0, 3.0], [3.0, 0.0]];
        for frontier in FRONTIERS {
            assert_eq!(prim(&weights, frontier).unwrap(), weights);
        }
    }

    #[test]
    fn empty_and_single_vertex() {
        for frontier in FRONTIERS {
            assert_eq!(prim(&Array2::zeros((0, 0)), frontier).unwrap().dim(), (0, 0));
            assert_eq!(prim(&Array2::zeros((1, 1)), frontier).unwrap(), Array2::<f64>::zeros((1, 1)));
        }
    }

    #[test]
    fn picks_cheapest_edges_through_later_vertices() {
        // Vertex 2 is only cheaply reachable through vertex 1.
        let weights = array![
            [0.0, 1.0, 9.0],
            [1.0, 0.0, 2.0],
            [9.0, 2.0, 0.0],
        ];
        let expected = array![
            [0.0, 1.0, 0.0],
            [1.0, 0.0, 2.0],
            [0.0, 2.0, 0.0],
        ];
        for frontier in FRONTIERS {
            assert_eq!(prim(&weights, frontier).unwrap(), expected);
        }
    }

    #[test]
    fn reaches_vertices_not_adjacent_to_seed() {
        let weights = array![
            [0.0, 5.0, 0.0, 0.0],
            [5.0, 0.0, 1.0, 0.0],
            [0.0, 1.0, 0.0, 4.0],
            [0.0, 0.0, 4.0, 0.0],
        ];
        for frontier in FRONTIERS {
            let tree = prim(&weights, frontier).unwrap();
            assert_eq!(tree, weights);
            assert_eq!(edge_count(&tree), 3);
            assert_eq!(tree_weight(&tree), 10.0);
        }
    }

    #[test]
    fn disconnected_graph_is_rejected() {
        let weights = array![
            [0.0, 1.0, 0.0],
            [1.0, 0.0, 0.0],
            [0.0, 0.0, 0.0],
        ];
        for frontier in FRONTIERS {
            assert!(matches!(prim(&weights, frontier), Err(GraphError::DisconnectedGraph { vertex: 2 })));
        }
    }

    #[test]
    fn non_square_is_rejected() {
        let weights = Array2::<f64>::zeros((2, 3));
        assert!(matches!(prim(&weights, Frontier::Heap), Err(GraphError::NotSquare { rows: 2, cols: 3 })));
    }

    #[test]
    fn input_is_not_modified() {
        let weights = array![
            [0.0, 2.0, 3.0],
            [2.0, 0.0, 1.0],
            [3.0, 1.0, 0.0],
        ];
        let before = weights.clone();
        for frontier in FRONTIERS {
            prim(&weights, frontier).unwrap();
            assert_eq!(weights, before);
        }
    }
}
