use std::{cmp::Ordering, collections::BinaryHeap};

use ndarray::ArrayView1;

use crate::graph::WeightMatrix;

/// Cheapest known edge connecting an outside vertex to the growing tree.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrontierEntry {
    pub vertex: usize,
    pub best_weight: f64,
    pub best_source: Option<usize>,
}

impl FrontierEntry {
    /// Initialise an entry for `vertex` from the seed's row of the weight matrix.
    pub(crate) fn seeded(weights: &WeightMatrix, seed: usize, vertex: usize, infinity: f64) -> Self {
        let weight = weights[[seed, vertex]];
        if weight > 0.0 {
            Self { vertex, best_weight: weight, best_source: Some(seed) }
        } else {
            Self { vertex, best_weight: infinity, best_source: None }
        }
    }

    /// Attach via `source` if `weight` is a real edge cheaper than the current best.
    #[inline]
    pub(crate) fn relax(&mut self, source: usize, weight: f64) -> bool {
        if 0.0 < weight && weight < self.best_weight {
            self.best_weight = weight;
            self.best_source = Some(source);
            true
        } else {
            false
        }
    }

    /// Ordering used to pick the next vertex: cheaper first, then lower index.
    #[inline]
    pub(crate) fn priority_cmp(&self, other: &Self) -> Ordering {
        self.best_weight.total_cmp(&other.best_weight)
            .then_with(|| self.vertex.cmp(&other.vertex))
    }
}

/// Seed entries for every vertex except `seed`, in vertex order.
pub(crate) fn seed_entries(weights: &WeightMatrix, seed: usize, infinity: f64) -> Vec<FrontierEntry> {
    (0..weights.nrows())
        .filter(|&vertex| vertex != seed)
        .map(|vertex| FrontierEntry::seeded(weights, seed, vertex, infinity))
        .collect()
}

/// The set of vertices not yet in the tree, ordered by their best known edge.
pub(crate) trait FrontierQueue {
    /// Remove and return the outside vertex with the cheapest attachment.
    fn pop_min(&mut self) -> Option<FrontierEntry>;

    /// Offer the edges in `row` (the row of the vertex just added as `source`).
    fn relax(&mut self, source: usize, row: ArrayView1<f64>);

    fn len(&self) -> usize;
}

/// Reverses `priority_cmp` so the std max-heap surfaces the cheapest entry.
#[derive(Debug)]
struct MinFirst(FrontierEntry);

impl Ord for MinFirst {
    fn cmp(&self, other: &Self) -> Ordering { other.0.priority_cmp(&self.0) }
}

impl PartialOrd for MinFirst {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> { Some(self.cmp(other)) }
}

impl PartialEq for MinFirst {
    fn eq(&self, other: &Self) -> bool { self.cmp(other) == Ordering::Equal }
}

impl Eq for MinFirst {}

/// Binary heap that is rebuilt from scratch after every relaxation pass.
#[derive(Debug)]
pub(crate) struct HeapFrontier {
    heap: BinaryHeap<MinFirst>,
}

impl HeapFrontier {
    pub(crate) fn new(entries: Vec<FrontierEntry>) -> Self {
        Self { heap: entries.into_iter().map(MinFirst).collect() }
    }
}

impl FrontierQueue for HeapFrontier {
    fn pop_min(&mut self) -> Option<FrontierEntry> {
        self.heap.pop().map(|entry| entry.0)
    }

    fn relax(&mut self, source: usize, row: ArrayView1<f64>) {
        let mut entries = std::mem::take(&mut self.heap).into_vec();
        for MinFirst(entry) in &mut entries {
            entry.relax(source, row[entry.vertex]);
        }
        // Priorities changed in place, so the heap order must be rebuilt.
        self.heap = BinaryHeap::from(entries);
    }

    #[inline] fn len(&self) -> usize { self.heap.len() }
}

/// Flat array of entries scanned linearly for the minimum.
#[derive(Debug)]
pub(crate) struct ScanFrontier {
    entries: Vec<FrontierEntry>,
}

impl ScanFrontier {
    pub(crate) fn new(entries: Vec<FrontierEntry>) -> Self { Self { entries } }
}

impl FrontierQueue for ScanFrontier {
    fn pop_min(&mut self) -> Option<FrontierEntry> {
        let index = self.entries.iter()
            .enumerate()
            .min_by(|(_, a), (_, b)| a.priority_cmp(b))
            .map(|(index, _)| index)?;
        Some(self.entries.swap_remove(index))
    }

    fn relax(&mut self, source: usize, row: ArrayView1<f64>) {
        for entry in &mut self.entries {
            entry.relax(source, row[entry.vertex]);
        }
    }

    #[inline] fn len(&self) -> usize { self.entries.len() }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    fn star() -> WeightMatrix {
        array![
            [0.0, 4.0, 0.0, 1.0],
            [4.0, 0.0, 2.0, 0.0],
            [0.0, 2.0, 0.0, 3.0],
            [1.0, 0.0, 3.0, 0.0],
        ]
    }

    #[test]
    fn seeded_entries_use_seed_row_or_sentinel() {
        let entries = seed_entries(&star(), 0, 5.0);
        assert_eq!(entries, vec![
            FrontierEntry { vertex: 1, best_weight: 4.0, best_source: Some(0) },
            FrontierEntry { vertex: 2, best_weight: 5.0, best_source: None },
            FrontierEntry { vertex: 3, best_weight: 1.0, best_source: Some(0) },
        ]);
    }

    #[test]
    fn relax_only_accepts_cheaper_real_edges() {
        let mut entry = FrontierEntry { vertex: 2, best_weight: 5.0, best_source: None };

        assert!(!entry.relax(1, 0.0)); // no edge
        assert!(!entry.relax(1, 7.0)); // more expensive
        assert!(entry.relax(1, 3.0));
        assert!(!entry.relax(3, 3.0)); // ties keep the first source
        assert_eq!(entry, FrontierEntry { vertex: 2, best_weight: 3.0, best_source: Some(1) });
    }

    #[test]
    fn priority_breaks_ties_by_vertex() {
        let a = FrontierEntry { vertex: 1, best_weight: 2.0, best_source: Some(0) };
        let b = FrontierEntry { vertex: 4, best_weight: 2.0, best_source: Some(0) };
        let c = FrontierEntry { vertex: 0, best_weight: 3.0, best_source: None };

        assert_eq!(a.priority_cmp(&b), Ordering::Less);
        assert_eq!(b.priority_cmp(&c), Ordering::Less);
        assert_eq!(a.priority_cmp(&a), Ordering::Equal);
    }

    fn drain(mut queue: impl FrontierQueue, weights: &WeightMatrix) -> Vec<(usize, Option<usize>)> {
        let mut order = Vec::new();
        while let Some(entry) = queue.pop_min() {
            order.push((entry.vertex, entry.best_source));
            queue.relax(entry.vertex, weights.row(entry.vertex));
        }
        order
    }

    #[test]
    fn heap_and_scan_visit_in_the_same_order() {
        let weights = star();
        let heap = HeapFrontier::new(seed_entries(&weights, 0, 5.0));
        let scan = ScanFrontier::new(seed_entries(&weights, 0, 5.0));
        assert_eq!(heap.len(), 3);
        assert_eq!(scan.len(), 3);

        let expected = vec![(3, Some(0)), (2, Some(3)), (1, Some(2))];
        assert_eq!(drain(heap, &weights), expected);
        assert_eq!(drain(scan, &weights), expected);
    }

    #[test]
    fn empty_queues_pop_nothing() {
        assert!(HeapFrontier::new(Vec::new()).pop_min().is_none());
        assert!(ScanFrontier::new(Vec::new()).pop_min().is_none());
    }
}
