// Ordering search: multi-start nearest neighbor.
//
// Finding the slip sequence with minimum summed adjacent similarity is a
// shortest Hamiltonian path problem, so an exact answer is out of reach
// beyond a handful of slips. Instead a greedy path is grown from every
// possible starting slip and the cheapest of the N results wins. Each
// start is independent, so the attempts run on the rayon pool and a
// min-reduction picks the winner.

use std::cmp::Ordering;

use rayon::prelude::*;
use tracing::info;

use crate::similarity::DistanceTable;

/// One complete ordering of all slips, with its total cost.
#[derive(Debug, Clone, PartialEq)]
pub struct Tour {
    /// Slip indices in scheduled order; a permutation of `0..n`.
    pub order: Vec<usize>,
    /// Sum of pairwise similarity over consecutive slips.
    pub cost: f64,
}

/// Total similarity along `order`: the sum over consecutive pairs.
///
/// No wraparound: a schedule is a path, not a cycle. Empty and
/// single-slip orders cost 0.0.
pub fn path_cost(order: &[usize], table: &DistanceTable) -> f64 {
    order.windows(2).map(|w| table.between(w[0], w[1])).sum()
}

/// Grow a greedy path from `start`: repeatedly append the unvisited slip
/// nearest to the current end of the path.
///
/// Equidistant candidates tie-break to the lowest index (the scan keeps
/// the first strict improvement), so a fixed slip ordering always
/// reproduces the same path.
fn nearest_neighbor_from(start: usize, table: &DistanceTable) -> Tour {
    let n = table.len();
    let mut order = Vec::with_capacity(n);
    order.push(start);
    let mut last = start;

    let mut remaining: Vec<usize> = (0..n).filter(|&i| i != start).collect();

    while !remaining.is_empty() {
        let mut pick = 0;
        let mut best = table.between(last, remaining[0]);
        for (slot, &candidate) in remaining.iter().enumerate().skip(1) {
            let dist = table.between(last, candidate);
            if dist < best {
                best = dist;
                pick = slot;
            }
        }
        last = remaining.remove(pick);
        order.push(last);
    }

    let cost = path_cost(&order, table);
    Tour { order, cost }
}

/// Run the greedy construction from every start and keep the cheapest
/// tour.
///
/// Returns `None` when there are no slips. Equal-cost tours tie-break to
/// the lowest start index; the comparator totally orders candidates, so
/// the parallel reduction returns exactly the sequential answer.
pub fn best_tour(table: &DistanceTable) -> Option<Tour> {
    if table.is_empty() {
        return None;
    }

    let best = (0..table.len())
        .into_par_iter()
        .map(|start| nearest_neighbor_from(start, table))
        .min_by(|a, b| {
            a.cost
                .partial_cmp(&b.cost)
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.order[0].cmp(&b.order[0]))
        });

    if let Some(tour) = &best {
        info!(slips = table.len(), cost = tour.cost, "ordering search finished");
    }
    best
}
