//! Pairwise score tables across the configured tau set.
//!
//! Every unordered series pair is scored at every tau, then the tau
//! dimension is collapsed by arithmetic mean. A single tau biases the
//! result toward one granularity; the mean over the configured set keeps
//! the user's intended range of granularities without favoring one.

use std::collections::BTreeMap;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::result::PairTable;
use crate::sync::coincidence::coincidence_score;
use crate::types::SeriesPair;

#[cfg(feature = "parallel")]
use crate::thread_pool;

/// One score per unordered pair: the arithmetic mean of the coincidence
/// score across the tau set.
///
/// Each `events[i]` is the ascending event-time sequence of series `i`.
/// Pair scoring is independent per pair, so the work fans out across the
/// shared thread pool when the `parallel` feature is enabled; results are
/// collected in pair order either way, so the table is deterministic.
pub fn pair_scores(events: &[Vec<f64>], taus: &[u32]) -> PairTable {
    let pairs = all_pairs(events.len());

    #[cfg(feature = "parallel")]
    let scores: Vec<f64> = thread_pool::install(|| {
        pairs
            .par_iter()
            .map(|pair| mean_over_taus(&events[pair.first()], &events[pair.second()], taus))
            .collect()
    });

    #[cfg(not(feature = "parallel"))]
    let scores: Vec<f64> = pairs
        .iter()
        .map(|pair| mean_over_taus(&events[pair.first()], &events[pair.second()], taus))
        .collect();

    pairs.into_iter().zip(scores).collect()
}

/// Per-(pair, tau) score table, ascending by pair then tau.
///
/// Diagnostic view of the uncollapsed scores; [`pair_scores`] is the
/// collapsed table everything downstream consumes.
pub fn per_tau_scores(events: &[Vec<f64>], taus: &[u32]) -> BTreeMap<(SeriesPair, u32), f64> {
    let mut table = BTreeMap::new();
    for pair in all_pairs(events.len()) {
        for &tau in taus {
            let score = coincidence_score(&events[pair.first()], &events[pair.second()], tau as f64);
            table.insert((pair, tau), score);
        }
    }
    table
}

fn mean_over_taus(a: &[f64], b: &[f64], taus: &[u32]) -> f64 {
    let sum: f64 = taus.iter().map(|&tau| coincidence_score(a, b, tau as f64)).sum();
    sum / taus.len() as f64
}

fn all_pairs(count: usize) -> Vec<SeriesPair> {
    let mut pairs = Vec::with_capacity(count.saturating_sub(1) * count / 2);
    for i in 0..count {
        for j in (i + 1)..count {
            pairs.push(SeriesPair::new(i, j));
        }
    }
    pairs
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scores_every_unordered_pair() {
        let events = vec![vec![0.0, 10.0], vec![1.0, 11.0], vec![100.0]];
        let table = pair_scores(&events, &[2]);

        assert_eq!(table.len(), 3);
        assert_eq!(table[&SeriesPair::new(0, 1)], 1.0);
        assert_eq!(table[&SeriesPair::new(0, 2)], 0.0);
        assert_eq!(table[&SeriesPair::new(1, 2)], 0.0);
    }

    #[test]
    fn collapses_taus_by_arithmetic_mean() {
        // tau=1 misses, tau=5 matches: mean of 0 and 1.
        let events = vec![vec![10.0], vec![13.0]];
        let table = pair_scores(&events, &[1, 5]);
        assert_eq!(table[&SeriesPair::new(0, 1)], 0.5);
    }

    #[test]
    fn empty_pair_mean_is_nan() {
        let events = vec![vec![], vec![]];
        let table = pair_scores(&events, &[1, 5]);
        assert!(table[&SeriesPair::new(0, 1)].is_nan());
    }

    #[test]
    fn per_tau_table_keeps_the_window_dimension() {
        let events = vec![vec![10.0], vec![13.0]];
        let table = per_tau_scores(&events, &[1, 5]);

        let pair = SeriesPair::new(0, 1);
        assert_eq!(table[&(pair, 1)], 0.0);
        assert_eq!(table[&(pair, 5)], 1.0);
    }

    #[test]
    fn single_series_yields_empty_table() {
        let events = vec![vec![1.0, 2.0]];
        assert!(pair_scores(&events, &[1]).is_empty());
        assert!(pair_scores(&Vec::<Vec<f64>>::new(), &[1]).is_empty());
    }
}
