//! Estimator inputs and results.

use serde::{Deserialize, Serialize};

use crate::error::{EstimateError, Result};

/// Hours in a day; upper bound for any daily runtime.
pub const HOURS_PER_DAY: f64 = 24.0;

/// Diesel generator usage submitted for a cost estimate.
///
/// # Examples
///
/// ```
/// use enerlyst::estimate::types::GeneratorProfile;
///
/// let profile = GeneratorProfile::new(10.0, 8.0, 800.0, 7);
/// assert!(profile.validate().is_ok());
/// assert!(GeneratorProfile::new(0.0, 8.0, 800.0, 7).validate().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GeneratorProfile {
    /// Generator apparent power rating (kVA, > 0).
    pub generator_size_kva: f64,
    /// Runtime per day of use (hours, 0–24).
    pub daily_hours: f64,
    /// Diesel price (currency per liter, > 0).
    pub fuel_price_per_liter: f64,
    /// Days the generator runs each week (1–7).
    pub days_per_week: u8,
}

impl GeneratorProfile {
    /// Creates a profile without validating it.
    pub fn new(
        generator_size_kva: f64,
        daily_hours: f64,
        fuel_price_per_liter: f64,
        days_per_week: u8,
    ) -> Self {
        Self {
            generator_size_kva,
            daily_hours,
            fuel_price_per_liter,
            days_per_week,
        }
    }

    /// Checks every field against its allowed range.
    ///
    /// # Errors
    ///
    /// Returns [`EstimateError::InvalidInput`] naming the first offending field.
    pub fn validate(&self) -> Result<()> {
        if !is_positive(self.generator_size_kva) {
            return Err(EstimateError::invalid(
                "generator_size_kva",
                "must be a finite number > 0",
            ));
        }
        check_daily_hours("daily_hours", self.daily_hours)?;
        if !is_positive(self.fuel_price_per_liter) {
            return Err(EstimateError::invalid(
                "fuel_price_per_liter",
                "must be a finite number > 0",
            ));
        }
        if !(1..=7).contains(&self.days_per_week) {
            return Err(EstimateError::invalid(
                "days_per_week",
                format!("must be in [1, 7], got {}", self.days_per_week),
            ));
        }
        Ok(())
    }
}

impl Default for GeneratorProfile {
    fn default() -> Self {
        Self::new(10.0, 8.0, 800.0, 7)
    }
}

/// Fuel consumption and cost figures for one [`GeneratorProfile`].
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct DieselResult {
    /// Liters burned per day of use.
    pub daily_consumption_l: f64,
    /// Liters burned per week.
    pub weekly_consumption_l: f64,
    /// Liters burned per average month (4.33 weeks).
    pub monthly_consumption_l: f64,
    pub daily_cost: f64,
    pub weekly_cost: f64,
    pub monthly_cost: f64,
    pub annual_cost: f64,
}

/// One line of the user's appliance list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ApplianceEntry {
    /// Display name, e.g. `"Ceiling Fan"`.
    pub name: String,
    /// Number of identical units (> 0).
    pub quantity: u32,
    /// Hours each unit runs per day (0–24).
    pub daily_hours: f64,
    /// Rated draw of a single unit (W, > 0).
    pub wattage: f64,
}

impl ApplianceEntry {
    /// Creates an entry without validating it.
    pub fn new(name: impl Into<String>, quantity: u32, daily_hours: f64, wattage: f64) -> Self {
        Self {
            name: name.into(),
            quantity,
            daily_hours,
            wattage,
        }
    }

    /// Checks every field against its allowed range.
    ///
    /// # Errors
    ///
    /// Returns [`EstimateError::InvalidInput`] naming the first offending field.
    pub fn validate(&self) -> Result<()> {
        self.validate_with_prefix("")
    }

    fn validate_with_prefix(&self, prefix: &str) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(EstimateError::invalid(
                format!("{prefix}name"),
                "must not be empty",
            ));
        }
        if self.quantity == 0 {
            return Err(EstimateError::invalid(
                format!("{prefix}quantity"),
                "must be > 0",
            ));
        }
        check_daily_hours(&format!("{prefix}daily_hours"), self.daily_hours)?;
        if !is_positive(self.wattage) {
            return Err(EstimateError::invalid(
                format!("{prefix}wattage"),
                "must be a finite number > 0",
            ));
        }
        if !self.daily_usage_kwh().is_finite() {
            return Err(EstimateError::invalid(
                format!("{prefix}wattage"),
                format!("combined load of {} units is out of range", self.quantity),
            ));
        }
        Ok(())
    }

    /// Connected load of all units (W).
    pub fn load_w(&self) -> f64 {
        self.wattage * f64::from(self.quantity)
    }

    /// Energy used per day by all units (kWh).
    pub fn daily_usage_kwh(&self) -> f64 {
        self.load_w() * self.daily_hours / 1000.0
    }
}

/// Validates a whole appliance list, reporting indexed field paths.
///
/// An empty list is valid and estimates to all zeros.
///
/// # Errors
///
/// Returns the first [`EstimateError::InvalidInput`] found, with a field
/// path such as `appliances[2].wattage`.
pub fn validate_appliances(appliances: &[ApplianceEntry]) -> Result<()> {
    for (i, appliance) in appliances.iter().enumerate() {
        appliance.validate_with_prefix(&format!("appliances[{i}]."))?;
    }
    Ok(())
}

/// Aggregate usage and recommended solar system for an appliance list.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct EnergyResult {
    pub total_daily_usage_kwh: f64,
    pub total_weekly_usage_kwh: f64,
    /// Thirty-day month.
    pub total_monthly_usage_kwh: f64,
    /// Sum of all connected loads (kW), not a coincident peak.
    pub peak_load_kw: f64,
    /// Daily energy spread evenly over 24 hours (kW).
    pub average_load_kw: f64,
    /// PV array size with a 30% margin (kW, whole units).
    pub recommended_solar_size_kw: u64,
    /// Number of 100Ah / 2.4 kWh batteries.
    pub recommended_batteries: u64,
    /// Inverter rating rounded up to the next whole kW (W).
    pub recommended_inverter_size_w: u64,
    /// Rough installed cost of the recommended system.
    pub estimated_cost: f64,
}

fn is_positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

fn check_daily_hours(field: &str, hours: f64) -> Result<()> {
    if hours.is_finite() && (0.0..=HOURS_PER_DAY).contains(&hours) {
        Ok(())
    } else {
        Err(EstimateError::invalid(field, "must be in [0, 24]"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_profile_is_valid() {
        assert!(GeneratorProfile::default().validate().is_ok());
    }

    #[test]
    fn profile_rejects_each_bad_field() {
        let cases = [
            (GeneratorProfile::new(-1.0, 8.0, 800.0, 7), "generator_size_kva"),
            (GeneratorProfile::new(f64::NAN, 8.0, 800.0, 7), "generator_size_kva"),
            (GeneratorProfile::new(10.0, 25.0, 800.0, 7), "daily_hours"),
            (GeneratorProfile::new(10.0, -0.5, 800.0, 7), "daily_hours"),
            (GeneratorProfile::new(10.0, 8.0, 0.0, 7), "fuel_price_per_liter"),
            (GeneratorProfile::new(10.0, 8.0, 800.0, 0), "days_per_week"),
            (GeneratorProfile::new(10.0, 8.0, 800.0, 8), "days_per_week"),
        ];
        for (profile, field) in cases {
            let err = profile.validate().expect_err("profile should be rejected");
            assert_eq!(err.field(), field, "{profile:?}");
        }
    }

    #[test]
    fn zero_hours_is_allowed() {
        assert!(GeneratorProfile::new(10.0, 0.0, 800.0, 1).validate().is_ok());
        assert!(ApplianceEntry::new("Fan", 1, 0.0, 75.0).validate().is_ok());
    }

    #[test]
    fn appliance_list_errors_are_indexed() {
        let list = vec![
            ApplianceEntry::new("LED Light Bulb", 1, 6.0, 10.0),
            ApplianceEntry::new("Fan", 0, 6.0, 75.0),
        ];
        let err = validate_appliances(&list).expect_err("quantity 0 should be rejected");
        assert_eq!(err.field(), "appliances[1].quantity");
    }

    #[test]
    fn appliance_rejects_blank_name_and_zero_wattage() {
        let blank = ApplianceEntry::new("  ", 1, 1.0, 10.0);
        assert_eq!(blank.validate().map_err(|e| e.field().to_string()), Err("name".to_string()));
        let no_watts = ApplianceEntry::new("Iron", 1, 1.0, 0.0);
        assert_eq!(
            no_watts.validate().map_err(|e| e.field().to_string()),
            Err("wattage".to_string())
        );
    }

    #[test]
    fn appliance_rejects_unbounded_combined_load() {
        let list = vec![
            ApplianceEntry::new("Fan", 1, 8.0, 75.0),
            ApplianceEntry::new("Plant", 4_000_000_000, 0.0, 1.0e300),
        ];
        let err = validate_appliances(&list).expect_err("infinite load should be rejected");
        assert_eq!(err.field(), "appliances[1].wattage");
        assert!(ApplianceEntry::new("Plant", 2, 1.0, 1.0e19).validate().is_ok());
    }

    #[test]
    fn empty_appliance_list_is_valid() {
        assert!(validate_appliances(&[]).is_ok());
    }

    #[test]
    fn appliance_usage_helpers() {
        let fridge = ApplianceEntry::new("Refrigerator", 2, 24.0, 150.0);
        assert_eq!(fridge.load_w(), 300.0);
        assert!((fridge.daily_usage_kwh() - 7.2).abs() < 1e-9);
    }
}
