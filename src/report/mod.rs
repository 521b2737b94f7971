//! Printable report projection of estimator results.
//!
//! Reports are flat lists of labelled, already formatted values. Rendering
//! them to HTML or PDF is left to the consumer; this crate prints them as
//! text ([`fmt::Display`]), CSV ([`crate::io::export`]) or JSON.

pub mod format;

use std::fmt;

use serde::Serialize;

use crate::estimate::appliance::{estimated_monthly_savings, total_battery_capacity_kwh};
use crate::estimate::diesel::{cost_per_hour, monthly_co2_kg};
use crate::estimate::types::{ApplianceEntry, DieselResult, EnergyResult, GeneratorProfile};
use format::{CURRENCY_SYMBOL, format_naira, format_with_unit};

/// Location printed when the caller supplies none.
pub const DEFAULT_LOCATION: &str = "Nigeria";

const DIESEL_RECOMMENDATIONS: &[&str] = &[
    "Consider a hybrid solar-diesel system to reduce fuel costs by up to 60%",
    "Regular generator maintenance can improve fuel efficiency by 10-15%",
    "Load management during peak hours can reduce overall consumption",
    "Solar system payback period is typically 3-5 years in Nigeria",
    "Battery backup can reduce generator runtime during short outages",
    "Proper generator sizing prevents fuel wastage from oversized units",
];

const ENERGY_RECOMMENDATIONS: &[&str] = &[
    "LED appliances can reduce energy consumption by up to 60%",
    "Smart load management can optimize battery usage and extend life",
    "Regular system maintenance ensures optimal performance",
    "Consider time-of-use scheduling for high-power appliances",
    "Battery monitoring systems help prevent over-discharge",
    "Proper inverter sizing prevents efficiency losses",
    "Energy-efficient appliances provide better ROI with solar systems",
];

/// Which calculator produced a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportKind {
    Diesel,
    Energy,
}

/// One labelled, formatted value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportField {
    pub label: String,
    pub value: String,
}

impl ReportField {
    fn new(label: &str, value: impl Into<String>) -> Self {
        Self {
            label: label.to_string(),
            value: value.into(),
        }
    }
}

/// Formatted projection of one estimate, ready to print.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub kind: ReportKind,
    pub title: String,
    /// What the user entered.
    pub inputs: Vec<ReportField>,
    /// What was computed.
    pub results: Vec<ReportField>,
    /// The selected advisory tip.
    pub advisory: String,
    /// Static recommendations for this kind of report.
    pub recommendations: Vec<String>,
}

impl Report {
    /// Builds the diesel generator report.
    pub fn diesel(
        profile: &GeneratorProfile,
        result: &DieselResult,
        advisory: impl Into<String>,
        location: Option<&str>,
    ) -> Self {
        let days = profile.days_per_week;
        let inputs = vec![
            ReportField::new(
                "Generator size",
                format!("{} kVA", profile.generator_size_kva),
            ),
            ReportField::new("Daily hours", format!("{} hours", profile.daily_hours)),
            ReportField::new(
                "Diesel price",
                format!("{} per liter", format_naira(profile.fuel_price_per_liter)),
            ),
            ReportField::new(
                "Days per week",
                format!("{days} {}", if days == 1 { "day" } else { "days" }),
            ),
            ReportField::new("Location", location.unwrap_or(DEFAULT_LOCATION)),
        ];
        let results = vec![
            ReportField::new(
                "Daily consumption",
                format_with_unit(result.daily_consumption_l, 1, "liters"),
            ),
            ReportField::new(
                "Weekly consumption",
                format_with_unit(result.weekly_consumption_l, 1, "liters"),
            ),
            ReportField::new(
                "Monthly consumption",
                format_with_unit(result.monthly_consumption_l, 1, "liters"),
            ),
            ReportField::new("Daily cost", format_naira(result.daily_cost)),
            ReportField::new("Weekly cost", format_naira(result.weekly_cost)),
            ReportField::new("Monthly cost", format_naira(result.monthly_cost)),
            ReportField::new("Annual cost", format_naira(result.annual_cost)),
            ReportField::new(
                "Monthly CO2 emissions",
                format_with_unit(monthly_co2_kg(result), 1, "kg"),
            ),
            ReportField::new(
                "Cost per hour",
                format!("{CURRENCY_SYMBOL}{:.2}", cost_per_hour(result)),
            ),
        ];
        Self {
            kind: ReportKind::Diesel,
            title: "Diesel Generator Analysis Report".to_string(),
            inputs,
            results,
            advisory: advisory.into(),
            recommendations: to_owned_lines(DIESEL_RECOMMENDATIONS),
        }
    }

    /// Builds the appliance energy usage report.
    pub fn energy(
        appliances: &[ApplianceEntry],
        result: &EnergyResult,
        advisory: impl Into<String>,
        location: Option<&str>,
    ) -> Self {
        let mut inputs = vec![
            ReportField::new("Total appliances", appliances.len().to_string()),
            ReportField::new("Location", location.unwrap_or(DEFAULT_LOCATION)),
        ];
        inputs.extend(appliances.iter().map(|a| {
            ReportField::new(
                "Appliance",
                format!(
                    "{}x {} ({}W, {}h/day)",
                    a.quantity, a.name, a.wattage, a.daily_hours
                ),
            )
        }));

        let results = vec![
            ReportField::new(
                "Daily energy usage",
                format_with_unit(result.total_daily_usage_kwh, 2, "kWh"),
            ),
            ReportField::new(
                "Weekly energy usage",
                format_with_unit(result.total_weekly_usage_kwh, 2, "kWh"),
            ),
            ReportField::new(
                "Monthly energy usage",
                format_with_unit(result.total_monthly_usage_kwh, 2, "kWh"),
            ),
            ReportField::new("Peak load", format_with_unit(result.peak_load_kw, 2, "kW")),
            ReportField::new(
                "Average load",
                format_with_unit(result.average_load_kw, 2, "kW"),
            ),
            ReportField::new(
                "Recommended solar size",
                format!("{} kW", result.recommended_solar_size_kw),
            ),
            ReportField::new(
                "Recommended batteries",
                format!("{} units (100Ah each)", result.recommended_batteries),
            ),
            ReportField::new(
                "Recommended inverter size",
                format!("{} W", result.recommended_inverter_size_w),
            ),
            ReportField::new("Estimated system cost", format_naira(result.estimated_cost)),
            ReportField::new(
                "Total battery capacity",
                format_with_unit(total_battery_capacity_kwh(result), 1, "kWh"),
            ),
            ReportField::new(
                "Estimated monthly savings",
                format_naira(estimated_monthly_savings(result)),
            ),
        ];
        Self {
            kind: ReportKind::Energy,
            title: "Energy Usage Analysis Report".to_string(),
            inputs,
            results,
            advisory: advisory.into(),
            recommendations: to_owned_lines(ENERGY_RECOMMENDATIONS),
        }
    }

    /// Looks up a result value by label.
    pub fn result(&self, label: &str) -> Option<&str> {
        find_field(&self.results, label)
    }

    /// Looks up an input value by label (first match).
    pub fn input(&self, label: &str) -> Option<&str> {
        find_field(&self.inputs, label)
    }
}

fn find_field<'a>(fields: &'a [ReportField], label: &str) -> Option<&'a str> {
    fields
        .iter()
        .find(|f| f.label == label)
        .map(|f| f.value.as_str())
}

fn to_owned_lines(lines: &[&str]) -> Vec<String> {
    lines.iter().map(|l| (*l).to_string()).collect()
}

fn write_fields(f: &mut fmt::Formatter<'_>, fields: &[ReportField]) -> fmt::Result {
    for field in fields {
        writeln!(f, "  {:<28}{}", format!("{}:", field.label), field.value)?;
    }
    Ok(())
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "--- {} ---", self.title)?;
        writeln!(f, "Input summary")?;
        write_fields(f, &self.inputs)?;
        writeln!(f, "Analysis results")?;
        write_fields(f, &self.results)?;
        writeln!(f, "Advisory")?;
        writeln!(f, "  {}", self.advisory)?;
        write!(f, "Recommendations")?;
        for line in &self.recommendations {
            write!(f, "\n  - {line}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::estimate::appliance::estimate_energy;
    use crate::estimate::diesel::estimate_diesel;

    fn diesel_report() -> Report {
        let profile = GeneratorProfile::new(10.0, 8.0, 800.0, 7);
        let result = estimate_diesel(&profile);
        Report::diesel(&profile, &result, "tip", None)
    }

    #[test]
    fn diesel_inputs_carry_units() {
        let report = diesel_report();
        assert_eq!(report.input("Generator size"), Some("10 kVA"));
        assert_eq!(report.input("Daily hours"), Some("8 hours"));
        assert_eq!(report.input("Diesel price"), Some("₦800 per liter"));
        assert_eq!(report.input("Days per week"), Some("7 days"));
        assert_eq!(report.input("Location"), Some("Nigeria"));
    }

    #[test]
    fn diesel_results_are_formatted() {
        let report = diesel_report();
        assert_eq!(report.result("Daily consumption"), Some("20.0 liters"));
        assert_eq!(report.result("Weekly consumption"), Some("140.0 liters"));
        assert_eq!(report.result("Monthly consumption"), Some("606.2 liters"));
        assert_eq!(report.result("Daily cost"), Some("₦16,000"));
        assert_eq!(report.result("Weekly cost"), Some("₦112,000"));
        assert_eq!(report.result("Monthly CO2 emissions"), Some("1624.6 kg"));
        assert_eq!(report.recommendations.len(), 6);
        assert_eq!(report.kind, ReportKind::Diesel);
    }

    #[test]
    fn single_day_is_singular() {
        let profile = GeneratorProfile::new(5.0, 2.0, 900.0, 1);
        let report = Report::diesel(&profile, &estimate_diesel(&profile), "", Some("Ghana"));
        assert_eq!(report.input("Days per week"), Some("1 day"));
        assert_eq!(report.input("Location"), Some("Ghana"));
    }

    #[test]
    fn energy_report_lists_each_appliance() {
        let appliances = vec![
            ApplianceEntry::new("LED Light Bulb", 1, 6.0, 10.0),
            ApplianceEntry::new("Ceiling Fan", 2, 8.5, 75.0),
        ];
        let result = estimate_energy(&appliances);
        let report = Report::energy(&appliances, &result, "tip", None);

        assert_eq!(report.input("Total appliances"), Some("2"));
        let lines: Vec<&str> = report
            .inputs
            .iter()
            .filter(|f| f.label == "Appliance")
            .map(|f| f.value.as_str())
            .collect();
        assert_eq!(
            lines,
            vec![
                "1x LED Light Bulb (10W, 6h/day)",
                "2x Ceiling Fan (75W, 8.5h/day)"
            ]
        );
        assert_eq!(report.result("Recommended inverter size"), Some("1000 W"));
        assert_eq!(
            report.result("Recommended batteries"),
            Some("1 units (100Ah each)")
        );
        assert_eq!(report.recommendations.len(), 7);
    }

    #[test]
    fn empty_energy_report_is_zeroed() {
        let report = Report::energy(&[], &estimate_energy(&[]), "", None);
        assert_eq!(report.result("Daily energy usage"), Some("0.00 kWh"));
        assert_eq!(report.result("Estimated system cost"), Some("₦0"));
        assert_eq!(report.result("Recommended solar size"), Some("0 kW"));
    }

    #[test]
    fn display_has_all_sections() {
        let text = diesel_report().to_string();
        assert!(text.starts_with("--- Diesel Generator Analysis Report ---"));
        for heading in ["Input summary", "Analysis results", "Advisory", "Recommendations"] {
            assert!(text.contains(heading), "missing {heading}");
        }
        assert!(text.contains("Daily cost:"));
        assert!(text.contains("  - Proper generator sizing"));
    }
}
