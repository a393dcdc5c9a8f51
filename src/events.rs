//! Macro-event extraction from raw series.
//!
//! A criterion is any pure predicate over a sample value. Extraction keeps
//! no state between calls; an empty result is a valid outcome that
//! downstream scoring treats as "synchronization undefined", not an error.

use serde::{Deserialize, Serialize};

/// Ordered set of sample indices at which a criterion holds for one series.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventSet {
    indices: Vec<usize>,
}

impl EventSet {
    /// Build an event set from raw indices, normalizing to ascending order
    /// and dropping duplicates.
    pub fn from_indices(mut indices: Vec<usize>) -> Self {
        indices.sort_unstable();
        indices.dedup();
        Self { indices }
    }

    /// Sample indices in ascending order.
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    /// Number of events.
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// True if the criterion held nowhere.
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Event times for coincidence matching (indices widened to `f64`,
    /// still ascending).
    pub fn times(&self) -> Vec<f64> {
        self.indices.iter().map(|&i| i as f64).collect()
    }
}

/// Extract the ordered set of indices where `criterion` holds.
pub fn extract_events<F>(series: &[f64], criterion: F) -> EventSet
where
    F: Fn(f64) -> bool,
{
    let indices = series
        .iter()
        .enumerate()
        .filter(|(_, &value)| criterion(value))
        .map(|(index, _)| index)
        .collect();
    EventSet { indices }
}
