//! Result tables and the finalized report.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::types::{ClassLabel, LabelPair, SeriesPair};

/// Scores keyed by unordered series pair.
pub type PairTable = BTreeMap<SeriesPair, f64>;

/// Scores keyed by a single class label (intra-class results).
pub type LabelTable = BTreeMap<ClassLabel, f64>;

/// Scores keyed by unordered label pair (inter-class and aggregated
/// results).
pub type LabelPairTable = BTreeMap<LabelPair, f64>;

/// A class-label pair that was excluded from an aggregated table because
/// the aggregation mapping does not cover it.
///
/// A warning value, never an error: the rest of the batch still
/// aggregates.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct UnmappedPair {
    /// Lexicographically lower class label of the excluded pair.
    pub left: ClassLabel,
    /// Lexicographically higher class label of the excluded pair.
    pub right: ClassLabel,
}

impl From<LabelPair> for UnmappedPair {
    fn from(pair: LabelPair) -> Self {
        Self {
            left: pair.first().to_string(),
            right: pair.second().to_string(),
        }
    }
}

impl fmt::Display for UnmappedPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "class pair '{}'/'{}' has no aggregation mapping; excluded from aggregated results",
            self.left, self.right
        )
    }
}

/// An aggregated table together with the pairs excluded from it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AggregatedTable {
    /// Mean score per aggregation-class pair.
    pub values: LabelPairTable,
    /// Label pairs the mapping did not cover, one entry per distinct pair.
    pub warnings: Vec<UnmappedPair>,
}

/// Named bundle of engine outputs handed to
/// [`finalize_results`](crate::SyncEngine::finalize_results).
///
/// Categories a caller did not compute stay empty; an empty table
/// finalizes to an empty table.
#[derive(Debug, Clone, Default)]
pub struct ResultSet {
    /// Per-class intra-class synchronization.
    pub intra_class: LabelTable,
    /// Per-label-pair inter-class synchronization.
    pub inter_class: LabelPairTable,
    /// Inter-class results rolled up by the aggregation mapping.
    pub aggregated_inter_class: AggregatedTable,
    /// Per-series-pair macro-event synchronization.
    pub macro_event: PairTable,
    /// Macro-event results rolled up by the aggregation mapping.
    pub aggregated_macro_event: AggregatedTable,
}

/// Finalized, schema-stable synchronization report.
///
/// The single structure presentation code may rely on: every value is a
/// plain scalar in [0, 1] or NaN (the documented empty-group sentinel).
/// NaN cells serialize as JSON `null`; consumers omit them from
/// rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SyncReport {
    /// Tau set the scores were computed over, ascending.
    pub taus: Vec<u32>,
    /// Mean pairwise score within each class.
    pub intra_class: LabelTable,
    /// Mean pairwise score between each pair of distinct classes.
    pub inter_class: LabelPairTable,
    /// Inter-class scores per aggregation-class pair.
    pub aggregated_inter_class: LabelPairTable,
    /// Pairwise scores over criterion-derived macro-events.
    pub macro_event: PairTable,
    /// Macro-event scores per aggregation-class pair.
    pub aggregated_macro_event: LabelPairTable,
    /// Unmapped-pair warnings from both aggregation steps, deduplicated.
    pub warnings: Vec<UnmappedPair>,
}

impl SyncReport {
    /// True if no category holds any entries.
    pub fn is_empty(&self) -> bool {
        self.intra_class.is_empty()
            && self.inter_class.is_empty()
            && self.aggregated_inter_class.is_empty()
            && self.macro_event.is_empty()
            && self.aggregated_macro_event.is_empty()
    }
}
