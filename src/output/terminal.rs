//! Terminal output formatting for synchronization reports.

use colored::Colorize;

use crate::result::SyncReport;

/// Format a SyncReport for human-readable terminal output.
///
/// NaN cells (empty-group sentinels) are omitted from rendering; unmapped
/// aggregation pairs are listed at the end.
pub fn format_report(report: &SyncReport) -> String {
    let mut output = String::new();
    let sep = "\u{2500}".repeat(62);

    output.push_str("event-sync\n");
    output.push_str(&sep);
    output.push('\n');
    output.push('\n');

    let taus: Vec<String> = report.taus.iter().map(|t| t.to_string()).collect();
    output.push_str(&format!("  Tau set: [{}]\n\n", taus.join(", ")));

    push_section(
        &mut output,
        "Intra-class",
        report.intra_class.iter().map(|(k, &v)| (k.to_string(), v)),
    );
    push_section(
        &mut output,
        "Inter-class",
        report.inter_class.iter().map(|(k, &v)| (k.to_string(), v)),
    );
    push_section(
        &mut output,
        "Aggregated inter-class",
        report
            .aggregated_inter_class
            .iter()
            .map(|(k, &v)| (k.to_string(), v)),
    );
    push_section(
        &mut output,
        "Macro-event",
        report.macro_event.iter().map(|(k, &v)| (k.to_string(), v)),
    );
    push_section(
        &mut output,
        "Aggregated macro-event",
        report
            .aggregated_macro_event
            .iter()
            .map(|(k, &v)| (k.to_string(), v)),
    );

    if !report.warnings.is_empty() {
        output.push_str(&format!(
            "  {}\n",
            format!(
                "\u{26A0} {} class pair(s) missing from the aggregation mapping",
                report.warnings.len()
            )
            .yellow()
            .bold()
        ));
        for warning in &report.warnings {
            output.push_str(&format!("    {}\n", warning));
        }
        output.push('\n');
    }

    output.push_str(&sep);
    output.push('\n');
    output
}

fn push_section(
    output: &mut String,
    title: &str,
    entries: impl Iterator<Item = (String, f64)>,
) {
    let rendered: Vec<(String, f64)> = entries.filter(|(_, v)| !v.is_nan()).collect();
    if rendered.is_empty() {
        return;
    }

    output.push_str(&format!("  {}\n", title.bold()));
    for (key, value) in rendered {
        output.push_str(&format!("    {:<28} {:.3}\n", key, value));
    }
    output.push('\n');
}
