//! Main `SyncEngine` entry point.
//!
//! A single engine call processes one batch of series and returns a fully
//! materialized result; no state persists between calls beyond the
//! immutable configuration.

use crate::config::Config;
use crate::error::{ConfigError, FinalizeError, SyncError};
use crate::events::{extract_events, EventSet};
use crate::finalize::finalize;
use crate::result::{AggregatedTable, LabelPairTable, LabelTable, PairTable, ResultSet, SyncReport};
use crate::sync::{aggregate_labels, aggregate_pairs, inter_class, intra_class, pair_scores};
use crate::types::{AggregationMapping, ClassLabel};

/// Synchronization engine for a fixed tau set.
///
/// # Example
///
/// ```ignore
/// use event_sync::{SyncEngine, helpers};
///
/// let engine = SyncEngine::new(&[1, 5, 10])?;
/// let report = engine.analyze(
///     &series,
///     &classes,
///     helpers::above(180.0),
///     &mapping,
/// )?;
///
/// println!("{}", event_sync::output::format_report(&report));
/// ```
#[derive(Debug, Clone)]
pub struct SyncEngine {
    config: Config,
}

impl SyncEngine {
    /// Create an engine from a set of coincidence-window half-widths.
    ///
    /// The tau set is validated up front: it must be non-empty, strictly
    /// positive, and duplicate-free.
    pub fn new(taus: &[u32]) -> Result<Self, ConfigError> {
        Ok(Self {
            config: Config::with_taus(taus)?,
        })
    }

    /// Set the finalizer clip tolerance.
    pub fn clip_epsilon(mut self, eps: f64) -> Self {
        self.config.clip_epsilon = eps;
        self
    }

    /// Get the current configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The validated tau set, ascending.
    pub fn taus(&self) -> &[u32] {
        &self.config.taus
    }

    /// Extract macro-events from every series under one criterion.
    ///
    /// An empty [`EventSet`] is a valid result; scoring treats it as
    /// "nothing can coincide", not as an error.
    pub fn identify_macro_events<S, F>(&self, series: &[S], criterion: F) -> Vec<EventSet>
    where
        S: AsRef<[f64]>,
        F: Fn(f64) -> bool,
    {
        series
            .iter()
            .map(|s| extract_events(s.as_ref(), &criterion))
            .collect()
    }

    /// Pairwise macro-event synchronization: one score per unordered
    /// series pair, averaged across the tau set.
    pub fn compute_macro_event_synchronization(&self, events: &[EventSet]) -> PairTable {
        let times: Vec<Vec<f64>> = events.iter().map(EventSet::times).collect();
        pair_scores(&times, &self.config.taus)
    }

    /// Roll pairwise macro-event results up to aggregation-class pairs.
    ///
    /// Each series pair resolves through `classes` to a label pair and
    /// then through `mapping` to an aggregation-class pair. Scores landing
    /// on the same pair are averaged, unweighted. A score referencing a
    /// series index beyond `classes` is a configuration error.
    pub fn compute_aggregated_macro_event_synchronization(
        &self,
        macro_results: &PairTable,
        classes: &[ClassLabel],
        mapping: &AggregationMapping,
    ) -> Result<AggregatedTable, ConfigError> {
        if let Some(pair) = macro_results.keys().find(|p| p.second() >= classes.len()) {
            return Err(ConfigError::SeriesIndexOutOfRange {
                index: pair.second(),
                labels: classes.len(),
            });
        }
        Ok(aggregate_pairs(macro_results, classes, mapping))
    }

    /// Mean pairwise synchronization within each class.
    ///
    /// The raw series are treated as event-time sequences. A class with
    /// fewer than two members yields NaN.
    pub fn compute_intra_class_synchronization<S>(
        &self,
        series: &[S],
        classes: &[ClassLabel],
    ) -> Result<LabelTable, ConfigError>
    where
        S: AsRef<[f64]>,
    {
        check_lengths(series.len(), classes.len())?;
        let pairs = pair_scores(&raw_event_times(series), &self.config.taus);
        Ok(intra_class(&pairs, classes))
    }

    /// Mean pairwise synchronization between each pair of distinct
    /// classes, averaged over the full member cross product.
    pub fn compute_inter_class_synchronization<S>(
        &self,
        series: &[S],
        classes: &[ClassLabel],
    ) -> Result<LabelPairTable, ConfigError>
    where
        S: AsRef<[f64]>,
    {
        check_lengths(series.len(), classes.len())?;
        let pairs = pair_scores(&raw_event_times(series), &self.config.taus);
        Ok(inter_class(&pairs, classes))
    }

    /// Roll inter-class results up to aggregation-class pairs.
    ///
    /// Unmapped label pairs are excluded and reported in the returned
    /// warnings, never raised.
    pub fn compute_aggregated_inter_class_synchronization(
        &self,
        inter: &LabelPairTable,
        mapping: &AggregationMapping,
    ) -> AggregatedTable {
        aggregate_labels(inter, mapping)
    }

    /// Merge named result tables into the final report, clipping values
    /// into [0, 1] within the configured tolerance.
    pub fn finalize_results(&self, results: ResultSet) -> Result<SyncReport, FinalizeError> {
        finalize(&self.config, results)
    }

    /// Full pipeline: intra, inter, aggregated-inter, macro-event, and
    /// aggregated-macro synchronization, finalized into one report.
    ///
    /// The pairwise score table over the raw series is computed once and
    /// shared by the intra and inter groupings.
    pub fn analyze<S, F>(
        &self,
        series: &[S],
        classes: &[ClassLabel],
        criterion: F,
        mapping: &AggregationMapping,
    ) -> Result<SyncReport, SyncError>
    where
        S: AsRef<[f64]>,
        F: Fn(f64) -> bool,
    {
        check_lengths(series.len(), classes.len())?;

        let raw_pairs = pair_scores(&raw_event_times(series), &self.config.taus);
        let intra = intra_class(&raw_pairs, classes);
        let inter = inter_class(&raw_pairs, classes);
        let aggregated_inter = aggregate_labels(&inter, mapping);

        let events = self.identify_macro_events(series, criterion);
        let macro_table = self.compute_macro_event_synchronization(&events);
        let aggregated_macro = aggregate_pairs(&macro_table, classes, mapping);

        let report = self.finalize_results(ResultSet {
            intra_class: intra,
            inter_class: inter,
            aggregated_inter_class: aggregated_inter,
            macro_event: macro_table,
            aggregated_macro_event: aggregated_macro,
        })?;
        Ok(report)
    }
}

/// Copy each raw series and sort it ascending so the matcher's sweep
/// applies. Matching is an existence test, so reordering cannot change a
/// score. Non-finite samples are not event times and are dropped.
fn raw_event_times<S: AsRef<[f64]>>(series: &[S]) -> Vec<Vec<f64>> {
    series
        .iter()
        .map(|s| {
            let mut times = s.as_ref().to_vec();
            times.retain(|v| v.is_finite());
            times.sort_unstable_by(|a, b| a.total_cmp(b));
            times
        })
        .collect()
}

fn check_lengths(series: usize, labels: usize) -> Result<(), ConfigError> {
    if series != labels {
        return Err(ConfigError::LengthMismatch { series, labels });
    }
    Ok(())
}
