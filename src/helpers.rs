//! Criterion constructors for macro-event extraction.
//!
//! A criterion is any `Fn(f64) -> bool`; closures work directly. These
//! constructors cover the thresholds that come up constantly when turning
//! a continuous measurement into discrete events.
//!
//! # Example
//!
//! ```ignore
//! use event_sync::{helpers, SyncEngine};
//!
//! let engine = SyncEngine::new(&[5])?;
//! let events = engine.identify_macro_events(&series, helpers::above(180.0));
//! ```

/// Criterion holding where the sample exceeds `threshold`.
pub fn above(threshold: f64) -> impl Fn(f64) -> bool + Copy {
    move |value| value > threshold
}

/// Criterion holding where the sample is below `threshold`.
pub fn below(threshold: f64) -> impl Fn(f64) -> bool + Copy {
    move |value| value < threshold
}

/// Criterion holding where the sample leaves the closed band
/// `[low, high]`.
pub fn outside(low: f64, high: f64) -> impl Fn(f64) -> bool + Copy {
    move |value| value < low || value > high
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn above_is_strict() {
        let criterion = above(180.0);
        assert!(criterion(180.5));
        assert!(!criterion(180.0));
        assert!(!criterion(170.0));
    }

    #[test]
    fn below_is_strict() {
        let criterion = below(10.0);
        assert!(criterion(9.9));
        assert!(!criterion(10.0));
    }

    #[test]
    fn outside_excludes_the_closed_band() {
        let criterion = outside(-1.0, 1.0);
        assert!(criterion(-1.5));
        assert!(criterion(1.5));
        assert!(!criterion(-1.0));
        assert!(!criterion(0.0));
        assert!(!criterion(1.0));
    }
}
