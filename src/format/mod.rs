//! Text rendering for query results.
//!
//! JSON output goes through serde directly; these helpers produce the
//! plain-text tables printed by the CLI.

use crate::model::{ChartSeries, ReportEntry};
use std::fmt::Write as _;

/// Render the per-patient report as an aligned text table.
#[must_use]
pub fn render_report(entries: &[ReportEntry]) -> String {
    if entries.is_empty() {
        return "No readings recorded.\n".to_string();
    }

    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<28} {:<20} {:>10} {:>8}",
        "TIME", "NAME", "HEARTRATE", "RECORDS"
    );
    for entry in entries {
        let _ = writeln!(
            out,
            "{:<28} {:<20} {:>10} {:>8}",
            entry.time, entry.name, entry.last_heartrate, entry.records
        );
    }
    out
}

/// Render a chart series as one `time  value` line per point.
#[must_use]
pub fn render_chart(name: &str, series: &ChartSeries) -> String {
    match series {
        ChartSeries::Empty => format!("No readings for '{name}'.\n"),
        ChartSeries::Series { times, values } => {
            let mut out = String::new();
            for (time, value) in times.iter().zip(values) {
                let _ = writeln!(out, "{time}  {value}");
            }
            out
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_table_has_header_and_rows() {
        let entries = vec![ReportEntry {
            time: "2024-05-01 08:00:00.000000".to_string(),
            name: "Ana".to_string(),
            last_heartrate: 72,
            records: 3,
        }];
        let out = render_report(&entries);
        let mut lines = out.lines();
        assert!(lines.next().unwrap().starts_with("TIME"));
        let row = lines.next().unwrap();
        assert!(row.contains("Ana"));
        assert!(row.contains("72"));
        assert!(row.ends_with('3'));
    }

    #[test]
    fn empty_report_says_so() {
        assert_eq!(render_report(&[]), "No readings recorded.\n");
    }

    #[test]
    fn chart_lines_pair_time_and_value() {
        let series = ChartSeries::Series {
            times: vec![
                "2024-05-01 08:00:00.000000".to_string(),
                "2024-05-01 08:00:01.000000".to_string(),
            ],
            values: vec![60, 65],
        };
        let out = render_chart("Hernan", &series);
        assert_eq!(out.lines().count(), 2);
        assert!(out.starts_with("2024-05-01 08:00:00.000000  60"));
    }

    #[test]
    fn empty_chart_names_the_patient() {
        let out = render_chart("Nobody", &ChartSeries::Empty);
        assert!(out.contains("Nobody"));
    }
}
