//! # event-sync
//!
//! Synchronization metrics between discrete-event time series grouped into
//! named classes, following the multi-event-class synchronization family of
//! measures.
//!
//! Given a collection of series, a set of coincidence-window sizes ("tau"
//! values), and per-series class labels, the engine quantifies how strongly
//! pairs and groups of series fire events in temporal alignment:
//! - Pairwise coincidence scores in [0, 1] per window size, collapsed by
//!   arithmetic mean across the tau set
//! - Intra-class and inter-class synchronization from the class labels
//! - A second roll-up level over user-defined aggregation classes
//! - Macro-event synchronization over criterion-derived events
//!
//! Undefined cells (a class with one member, a pair of event-free series)
//! are NaN sentinels, never errors; configuration problems fail fast before
//! any computation.
//!
//! ## Quick Start
//!
//! ```ignore
//! use event_sync::{analyze, helpers};
//!
//! let series = vec![
//!     vec![170.0, 190.0, 175.0, 188.0],
//!     vec![172.0, 191.0, 174.0, 186.0],
//! ];
//! let classes = vec!["basketball".to_string(), "soccer".to_string()];
//! let mapping = [
//!     ("basketball".to_string(), "team".to_string()),
//!     ("soccer".to_string(), "team".to_string()),
//! ]
//! .into();
//!
//! let report = analyze(&series, &classes, &[1, 5], helpers::above(180.0), &mapping)?;
//! println!("{}", event_sync::output::format_report(&report));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

// Core modules
mod config;
mod engine;
mod error;
mod events;
mod finalize;
mod result;
mod thread_pool;
mod types;

// Functional modules
pub mod helpers;
pub mod output;
pub mod sync;

// Re-exports for public API
pub use config::{Config, DEFAULT_CLIP_EPSILON};
pub use engine::SyncEngine;
pub use error::{ConfigError, FinalizeError, ParsePairError, SyncError};
pub use events::{extract_events, EventSet};
pub use result::{
    AggregatedTable, LabelPairTable, LabelTable, PairTable, ResultSet, SyncReport, UnmappedPair,
};
pub use types::{AggregationMapping, Category, ClassLabel, LabelPair, SeriesPair};

/// Convenience function running the full pipeline with a fresh engine.
///
/// Computes intra-class, inter-class, aggregated inter-class, macro-event,
/// and aggregated macro-event synchronization in one call and finalizes
/// the result. Equivalent to `SyncEngine::new(taus)?.analyze(...)`.
///
/// # Arguments
///
/// * `series` - The raw series collection (event-time sequences)
/// * `classes` - One class label per series
/// * `taus` - Coincidence-window half-widths (non-empty, positive, distinct)
/// * `criterion` - Predicate deriving macro-events from sample values
/// * `mapping` - Class-label to aggregation-class mapping
///
/// # Errors
///
/// Fails fast with a [`ConfigError`] on an invalid tau set or mismatched
/// collection lengths, before any scores are computed.
pub fn analyze<S, F>(
    series: &[S],
    classes: &[ClassLabel],
    taus: &[u32],
    criterion: F,
    mapping: &AggregationMapping,
) -> Result<SyncReport, SyncError>
where
    S: AsRef<[f64]>,
    F: Fn(f64) -> bool,
{
    SyncEngine::new(taus)?.analyze(series, classes, criterion, mapping)
}
