//! CSV export for estimate reports.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use crate::report::Report;

/// Column header for report CSV export.
const HEADER: [&str; 3] = ["section", "label", "value"];

/// Exports a report to a CSV file at the given path.
///
/// Writes a header row followed by one row per input, result, the advisory
/// and each recommendation, in that order. Produces deterministic output
/// for identical reports.
///
/// # Errors
///
/// Returns an `io::Error` if file creation or writing fails.
pub fn export_report_csv(report: &Report, path: &Path) -> io::Result<()> {
    let file = File::create(path)?;
    let buf = io::BufWriter::new(file);
    write_report_csv(report, buf)
}

/// Writes a report as CSV to any writer.
///
/// # Errors
///
/// Returns an `io::Error` if writing fails.
pub fn write_report_csv(report: &Report, writer: impl Write) -> io::Result<()> {
    let mut wtr = csv::WriterBuilder::new().from_writer(writer);

    wtr.write_record(HEADER)?;

    for field in &report.inputs {
        wtr.write_record(["input", field.label.as_str(), field.value.as_str()])?;
    }
    for field in &report.results {
        wtr.write_record(["result", field.label.as_str(), field.value.as_str()])?;
    }
    wtr.write_record(["advisory", "Advisory", report.advisory.as_str()])?;
    for line in &report.recommendations {
        wtr.write_record(["recommendation", "Recommendation", line.as_str()])?;
    }

    wtr.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::estimate::appliance::estimate_energy;
    use crate::estimate::diesel::estimate_diesel;
    use crate::estimate::types::{ApplianceEntry, GeneratorProfile};

    fn diesel_report() -> Report {
        let profile = GeneratorProfile::default();
        Report::diesel(&profile, &estimate_diesel(&profile), "Run fewer hours, save more.", None)
    }

    fn to_string(report: &Report) -> String {
        let mut buf = Vec::new();
        write_report_csv(report, &mut buf).ok();
        String::from_utf8(buf).unwrap_or_default()
    }

    #[test]
    fn header_row() {
        let output = to_string(&diesel_report());
        assert_eq!(output.lines().next(), Some("section,label,value"));
    }

    #[test]
    fn row_count_matches_report() {
        let report = diesel_report();
        let output = to_string(&report);
        // header + inputs + results + advisory + recommendations
        let expected = 1 + report.inputs.len() + report.results.len() + 1 + report.recommendations.len();
        assert_eq!(output.lines().count(), expected);
    }

    #[test]
    fn deterministic_output() {
        let report = diesel_report();
        assert_eq!(to_string(&report), to_string(&report));
    }

    #[test]
    fn values_with_commas_are_quoted() {
        let appliances = vec![ApplianceEntry::new("Refrigerator", 1, 20.0, 150.0)];
        let result = estimate_energy(&appliances);
        let report = Report::energy(&appliances, &result, "tip", None);
        let mut buf = Vec::new();
        write_report_csv(&report, &mut buf).ok();

        let mut rdr = csv::ReaderBuilder::new().from_reader(buf.as_slice());
        let cost = rdr
            .records()
            .filter_map(|r| r.ok())
            .find(|r| &r[1] == "Estimated system cost")
            .map(|r| r[2].to_string());
        // 3 kWh/day: 4 kW solar, 2 batteries, 1000 W inverter
        assert_eq!(cost.as_deref(), Some("₦810,000"));
    }
}
