//! JSON serialization for synchronization reports.

use crate::result::SyncReport;

/// Serialize a SyncReport to a compact JSON string.
///
/// NaN cells (empty-group sentinels) serialize as `null`.
///
/// # Errors
///
/// Returns an error if serialization fails (should not happen for
/// SyncReport).
pub fn to_json(report: &SyncReport) -> Result<String, serde_json::Error> {
    serde_json::to_string(report)
}

/// Serialize a SyncReport to a pretty-printed JSON string.
///
/// # Errors
///
/// Returns an error if serialization fails (should not happen for
/// SyncReport).
pub fn to_json_pretty(report: &SyncReport) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::result::{LabelPairTable, LabelTable, PairTable, UnmappedPair};
    use crate::types::{LabelPair, SeriesPair};

    fn make_report() -> SyncReport {
        let mut intra = LabelTable::new();
        intra.insert("basketball".to_string(), 0.4);
        intra.insert("solo".to_string(), f64::NAN);

        let mut inter = LabelPairTable::new();
        inter.insert(LabelPair::new("basketball", "soccer"), 0.25);

        let mut macro_event = PairTable::new();
        macro_event.insert(SeriesPair::new(0, 1), 1.0);

        SyncReport {
            taus: vec![1, 5],
            intra_class: intra,
            inter_class: inter,
            aggregated_inter_class: LabelPairTable::new(),
            macro_event,
            aggregated_macro_event: LabelPairTable::new(),
            warnings: vec![UnmappedPair {
                left: "basketball".to_string(),
                right: "chess".to_string(),
            }],
        }
    }

    #[test]
    fn test_to_json() {
        let json = to_json(&make_report()).unwrap();
        assert!(json.contains("\"basketball\":0.4"));
        assert!(json.contains("\"basketball|soccer\":0.25"));
        assert!(json.contains("\"0|1\":1.0"));
        // NaN sentinel becomes null.
        assert!(json.contains("\"solo\":null"));
    }

    #[test]
    fn test_to_json_pretty() {
        let json = to_json_pretty(&make_report()).unwrap();
        assert!(json.contains('\n'));
        assert!(json.contains("intra_class"));
        assert!(json.contains("warnings"));
    }

    #[test]
    fn round_trip_without_nan_cells() {
        let mut report = make_report();
        report.intra_class.remove("solo");

        let json = to_json(&report).unwrap();
        let parsed: SyncReport = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, report);
    }
}
