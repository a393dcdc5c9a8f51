//! Error types for engine configuration and result finalization.
//!
//! Configuration problems are detected before any computation starts and
//! surface as [`ConfigError`]. Undefined values inside an otherwise valid
//! batch (empty classes, event-free series pairs) are never errors; they
//! propagate as NaN table cells instead.

use thiserror::Error;

use crate::types::Category;

/// Rejected engine configuration or malformed call inputs.
///
/// Raised at the call that detects the problem, before any scores are
/// computed, so a caller never observes partial results.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// The tau set was empty.
    #[error("tau set must not be empty")]
    EmptyTauSet,

    /// A tau value of zero was supplied; window half-widths must be positive.
    #[error("tau values must be positive (got 0)")]
    ZeroTau,

    /// The same tau value was supplied more than once.
    #[error("duplicate tau value {0}")]
    DuplicateTau(u32),

    /// The series collection and class-label collection differ in length.
    #[error("series collection has {series} entries but {labels} class labels were supplied")]
    LengthMismatch {
        /// Number of series in the collection.
        series: usize,
        /// Number of class labels supplied.
        labels: usize,
    },

    /// A pair score referenced a series index with no class label.
    #[error("series index {index} has no class label (only {labels} labels supplied)")]
    SeriesIndexOutOfRange {
        /// The offending series index.
        index: usize,
        /// Number of class labels supplied.
        labels: usize,
    },
}

/// A finalized value escaped [0, 1] by more than the clip tolerance.
///
/// Values out of range by a rounding-sized margin are clipped silently;
/// anything larger indicates an upstream bug and is reported instead of
/// being clamped away.
#[derive(Debug, Clone, Error)]
pub enum FinalizeError {
    /// Out-of-range value in one of the result tables.
    #[error("{category} value for '{key}' is {value}, outside [0, 1] beyond tolerance")]
    ValueOutOfRange {
        /// Result category the value belongs to.
        category: Category,
        /// Rendered table key.
        key: String,
        /// The offending value.
        value: f64,
    },
}

/// Umbrella error for the full-pipeline driver.
#[derive(Debug, Clone, Error)]
pub enum SyncError {
    /// Configuration rejected before computation.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Result assembly failed.
    #[error(transparent)]
    Finalize(#[from] FinalizeError),
}

/// Failed to parse a serialized pair key.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("invalid pair key '{0}': expected 'first|second'")]
pub struct ParsePairError(pub String);
