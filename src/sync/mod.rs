//! Synchronization computation: coincidence matching, pair scoring, and
//! class aggregation.
//!
//! The layers compose strictly: event-time sequences feed the
//! [`coincidence`] matcher, [`pairs`] drives the matcher across every
//! pair and window size, and [`aggregate`] groups the resulting pair
//! table by class labels.

mod aggregate;
mod coincidence;
mod pairs;

pub use aggregate::{aggregate_labels, aggregate_pairs, inter_class, intra_class};
pub use coincidence::coincidence_score;
pub use pairs::{pair_scores, per_tau_scores};
