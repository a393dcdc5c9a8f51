//! Intra-class, inter-class, and aggregated groupings of pair scores.
//!
//! All three groupings are unweighted arithmetic means over the entries
//! that land in a group. Groups with nothing to average yield NaN rather
//! than disappearing, so a misconfigured class surfaces in the output
//! instead of being silently dropped. NaN member scores propagate into
//! their group mean for the same reason.

use std::collections::{BTreeMap, BTreeSet};

use crate::result::{AggregatedTable, LabelPairTable, LabelTable, PairTable, UnmappedPair};
use crate::types::{AggregationMapping, ClassLabel, LabelPair, SeriesPair};

/// Mean pairwise score within each class.
///
/// A class with fewer than two member series has no pairs to average and
/// yields NaN.
pub fn intra_class(pairs: &PairTable, classes: &[ClassLabel]) -> LabelTable {
    let members = members_by_label(classes);
    members
        .into_iter()
        .map(|(label, indices)| {
            let mut sum = 0.0;
            let mut count = 0usize;
            for (slot, &i) in indices.iter().enumerate() {
                for &j in &indices[slot + 1..] {
                    if let Some(&score) = pairs.get(&SeriesPair::new(i, j)) {
                        sum += score;
                        count += 1;
                    }
                }
            }
            let mean = if count == 0 { f64::NAN } else { sum / count as f64 };
            (label, mean)
        })
        .collect()
}

/// Mean pairwise score between each unordered pair of distinct classes,
/// averaged over the full cross product of their members.
pub fn inter_class(pairs: &PairTable, classes: &[ClassLabel]) -> LabelPairTable {
    let members = members_by_label(classes);
    let labels: Vec<&ClassLabel> = members.keys().collect();

    let mut table = LabelPairTable::new();
    for (slot, &left) in labels.iter().enumerate() {
        for &right in &labels[slot + 1..] {
            let mut sum = 0.0;
            let mut count = 0usize;
            for &i in &members[left] {
                for &j in &members[right] {
                    if let Some(&score) = pairs.get(&SeriesPair::new(i, j)) {
                        sum += score;
                        count += 1;
                    }
                }
            }
            let mean = if count == 0 { f64::NAN } else { sum / count as f64 };
            table.insert(LabelPair::new(left.clone(), right.clone()), mean);
        }
    }
    table
}

/// Collapse an inter-class table onto aggregation-class pairs.
///
/// Every label pair maps through `mapping` to an aggregation-class pair;
/// entries landing on the same pair are averaged, unweighted. A label pair
/// with an unmapped side is excluded and reported in the warnings.
pub fn aggregate_labels(inter: &LabelPairTable, mapping: &AggregationMapping) -> AggregatedTable {
    let mut accumulator: BTreeMap<LabelPair, (f64, usize)> = BTreeMap::new();
    let mut unmapped: BTreeSet<LabelPair> = BTreeSet::new();

    for (pair, &score) in inter {
        match (mapping.get(pair.first()), mapping.get(pair.second())) {
            (Some(left), Some(right)) => {
                let entry = accumulator.entry(LabelPair::new(left.clone(), right.clone())).or_insert((0.0, 0));
                entry.0 += score;
                entry.1 += 1;
            }
            _ => {
                unmapped.insert(pair.clone());
            }
        }
    }

    finish_aggregation(accumulator, unmapped)
}

/// Collapse a pairwise (series-keyed) table onto aggregation-class pairs.
///
/// Each series pair resolves through its class labels to an
/// aggregation-class pair; used for macro-event results, which are keyed
/// by series rather than by class. Same-class pairs land on the diagonal
/// aggregation pair.
pub fn aggregate_pairs(
    pairs: &PairTable,
    classes: &[ClassLabel],
    mapping: &AggregationMapping,
) -> AggregatedTable {
    let mut accumulator: BTreeMap<LabelPair, (f64, usize)> = BTreeMap::new();
    let mut unmapped: BTreeSet<LabelPair> = BTreeSet::new();

    for (pair, &score) in pairs {
        let left_label = &classes[pair.first()];
        let right_label = &classes[pair.second()];
        match (mapping.get(left_label), mapping.get(right_label)) {
            (Some(left), Some(right)) => {
                let entry = accumulator.entry(LabelPair::new(left.clone(), right.clone())).or_insert((0.0, 0));
                entry.0 += score;
                entry.1 += 1;
            }
            _ => {
                unmapped.insert(LabelPair::new(left_label.clone(), right_label.clone()));
            }
        }
    }

    finish_aggregation(accumulator, unmapped)
}

fn finish_aggregation(
    accumulator: BTreeMap<LabelPair, (f64, usize)>,
    unmapped: BTreeSet<LabelPair>,
) -> AggregatedTable {
    let values = accumulator
        .into_iter()
        .map(|(pair, (sum, count))| (pair, sum / count as f64))
        .collect();

    let warnings: Vec<UnmappedPair> = unmapped.into_iter().map(UnmappedPair::from).collect();
    for warning in &warnings {
        log::warn!("{warning}");
    }

    AggregatedTable { values, warnings }
}

/// Group series indices by their class label, preserving label order.
fn members_by_label(classes: &[ClassLabel]) -> BTreeMap<ClassLabel, Vec<usize>> {
    let mut members: BTreeMap<ClassLabel, Vec<usize>> = BTreeMap::new();
    for (index, label) in classes.iter().enumerate() {
        members.entry(label.clone()).or_default().push(index);
    }
    members
}
