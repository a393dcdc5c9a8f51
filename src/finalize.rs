//! Final result assembly: merge, clip, and schema guarantees.
//!
//! The finalizer is the single place the report schema is established.
//! Values are clipped into [0, 1] only to absorb floating-point rounding
//! at the boundary; anything further out is an upstream bug and is
//! reported as an error rather than clamped away. NaN sentinels pass
//! through untouched.

use std::collections::BTreeMap;
use std::fmt;

use crate::config::Config;
use crate::error::FinalizeError;
use crate::result::{ResultSet, SyncReport};
use crate::types::Category;

pub(crate) fn finalize(config: &Config, results: ResultSet) -> Result<SyncReport, FinalizeError> {
    let ResultSet {
        mut intra_class,
        mut inter_class,
        aggregated_inter_class,
        mut macro_event,
        aggregated_macro_event,
    } = results;

    let mut aggregated_inter = aggregated_inter_class.values;
    let mut aggregated_macro = aggregated_macro_event.values;

    let eps = config.clip_epsilon;
    clip_table(&mut intra_class, Category::IntraClass, eps)?;
    clip_table(&mut inter_class, Category::InterClass, eps)?;
    clip_table(&mut aggregated_inter, Category::AggregatedInterClass, eps)?;
    clip_table(&mut macro_event, Category::MacroEvent, eps)?;
    clip_table(&mut aggregated_macro, Category::AggregatedMacroEvent, eps)?;

    let mut warnings = aggregated_inter_class.warnings;
    warnings.extend(aggregated_macro_event.warnings);
    warnings.sort();
    warnings.dedup();

    Ok(SyncReport {
        taus: config.taus.clone(),
        intra_class,
        inter_class,
        aggregated_inter_class: aggregated_inter,
        macro_event,
        aggregated_macro_event: aggregated_macro,
        warnings,
    })
}

fn clip_table<K>(
    table: &mut BTreeMap<K, f64>,
    category: Category,
    eps: f64,
) -> Result<(), FinalizeError>
where
    K: fmt::Display + Ord,
{
    for (key, value) in table.iter_mut() {
        if value.is_nan() {
            continue;
        }
        if *value < -eps || *value > 1.0 + eps {
            return Err(FinalizeError::ValueOutOfRange {
                category,
                key: key.to_string(),
                value: *value,
            });
        }
        *value = value.clamp(0.0, 1.0);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::result::{AggregatedTable, LabelPairTable, UnmappedPair};
    use crate::types::{LabelPair, SeriesPair};

    fn config() -> Config {
        Config::with_taus(&[1, 2]).unwrap()
    }

    #[test]
    fn rounding_overshoot_is_clipped() {
        let mut results = ResultSet::default();
        results.intra_class.insert("a".to_string(), 1.0 + 1e-12);
        results.intra_class.insert("b".to_string(), -1e-12);

        let report = finalize(&config(), results).unwrap();
        assert_eq!(report.intra_class["a"], 1.0);
        assert_eq!(report.intra_class["b"], 0.0);
    }

    #[test]
    fn large_overshoot_is_an_error() {
        let mut results = ResultSet::default();
        results.macro_event.insert(SeriesPair::new(0, 1), 1.5);

        let err = finalize(&config(), results).unwrap_err();
        let FinalizeError::ValueOutOfRange { category, key, value } = err;
        assert_eq!(category, Category::MacroEvent);
        assert_eq!(key, "0|1");
        assert_eq!(value, 1.5);
    }

    #[test]
    fn nan_sentinels_survive() {
        let mut results = ResultSet::default();
        results.intra_class.insert("solo".to_string(), f64::NAN);

        let report = finalize(&config(), results).unwrap();
        assert!(report.intra_class["solo"].is_nan());
    }

    #[test]
    fn warnings_from_both_aggregations_merge_deduplicated() {
        let warning = UnmappedPair::from(LabelPair::new("a", "mystery"));
        let results = ResultSet {
            aggregated_inter_class: AggregatedTable {
                values: LabelPairTable::new(),
                warnings: vec![warning.clone()],
            },
            aggregated_macro_event: AggregatedTable {
                values: LabelPairTable::new(),
                warnings: vec![warning.clone()],
            },
            ..ResultSet::default()
        };

        let report = finalize(&config(), results).unwrap();
        assert_eq!(report.warnings, vec![warning]);
    }

    #[test]
    fn report_echoes_the_tau_set() {
        let report = finalize(&config(), ResultSet::default()).unwrap();
        assert_eq!(report.taus, vec![1, 2]);
        assert!(report.is_empty());
    }
}
