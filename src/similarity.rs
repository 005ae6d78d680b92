// Vocabulary overlap between route slips.
//
// Two slips are compared by the Jaccard index of their word sets:
//
//   similarity = |words_a ∩ words_b| / |words_a ∪ words_b|
//
// 0.0 means the slips share no vocabulary, 1.0 means identical vocabulary.
// The ordering search uses this value directly as the cost of scheduling
// two slips back to back, so similar slips repel each other in the final
// sequence.

use std::collections::HashSet;

use tracing::info;

use crate::slip::RouteSlip;

/// Jaccard similarity of two word sets, in [0.0, 1.0].
///
/// Two empty sets count as identical (1.0) rather than dividing by zero.
pub fn jaccard(a: &HashSet<String>, b: &HashSet<String>) -> f64 {
    let union = a.union(b).count();
    if union == 0 {
        return 1.0;
    }
    let intersection = a.intersection(b).count();
    intersection as f64 / union as f64
}

/// Complete pairwise similarity table over a set of slips.
///
/// Slips are addressed by their index into the slice the table was built
/// from. Every ordered pair of distinct slips has an entry and the score
/// is symmetric; the diagonal exists but is never consulted.
pub struct DistanceTable {
    scores: Vec<Vec<f64>>,
}

impl DistanceTable {
    /// Compute all pairwise scores. O(N²) set intersections.
    pub fn build(slips: &[RouteSlip]) -> Self {
        let n = slips.len();
        let mut scores = vec![vec![0.0; n]; n];
        for i in 0..n {
            for j in (i + 1)..n {
                let score = jaccard(&slips[i].words, &slips[j].words);
                scores[i][j] = score;
                scores[j][i] = score;
            }
        }
        info!(slips = n, "built pairwise similarity table");
        Self { scores }
    }

    /// Number of slips the table covers.
    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    /// Similarity between slips `from` and `to`; symmetric in its arguments.
    pub fn between(&self, from: usize, to: usize) -> f64 {
        self.scores[from][to]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> HashSet<String> {
        list.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_identical_sets_score_one() {
        let a = words(&["ridge", "lake", "ferry"]);
        assert!((jaccard(&a, &a) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_disjoint_sets_score_zero() {
        let a = words(&["ridge", "lake"]);
        let b = words(&["ferry", "quarry"]);
        assert_eq!(jaccard(&a, &b), 0.0);
    }

    #[test]
    fn test_both_empty_counts_as_identical() {
        let a = words(&[]);
        let b = words(&[]);
        assert_eq!(jaccard(&a, &b), 1.0);
    }

    #[test]
    fn test_one_empty_scores_zero() {
        let a = words(&[]);
        let b = words(&["ridge"]);
        assert_eq!(jaccard(&a, &b), 0.0);
    }

    #[test]
    fn test_partial_overlap() {
        // Union {a, b, c, d} = 4, intersection {a, b} = 2.
        let a = words(&["a", "b", "c"]);
        let b = words(&["a", "b", "d"]);
        assert!((jaccard(&a, &b) - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_symmetry() {
        let a = words(&["ridge", "lake", "ferry"]);
        let b = words(&["lake", "quarry"]);
        assert_eq!(jaccard(&a, &b), jaccard(&b, &a));
    }

    #[test]
    fn test_table_covers_every_pair_symmetrically() {
        let slips = vec![
            RouteSlip::from_text("a", "ridge lake ferry"),
            RouteSlip::from_text("b", "lake quarry"),
            RouteSlip::from_text("c", "canal towpath"),
        ];
        let table = DistanceTable::build(&slips);
        assert_eq!(table.len(), 3);
        for i in 0..3 {
            for j in 0..3 {
                if i != j {
                    assert_eq!(table.between(i, j), table.between(j, i));
                    assert!((0.0..=1.0).contains(&table.between(i, j)));
                }
            }
        }
    }
}
