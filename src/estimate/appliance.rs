//! Appliance load aggregation and solar system sizing.

use super::types::{ApplianceEntry, EnergyResult, HOURS_PER_DAY};

/// Oversizing factor applied to daily usage when sizing the PV array.
pub const SOLAR_MARGIN: f64 = 1.3;
/// Usable energy of one 100Ah battery (kWh).
pub const BATTERY_UNIT_KWH: f64 = 2.4;
pub const SOLAR_PRICE_PER_KW: f64 = 150_000.0;
pub const BATTERY_PRICE_PER_UNIT: f64 = 80_000.0;
pub const INVERTER_PRICE_PER_W: f64 = 50.0;
/// Grid tariff assumed when estimating savings (currency per kWh).
pub const GRID_PRICE_PER_KWH: f64 = 50.0;

const DAYS_PER_WEEK: f64 = 7.0;
const DAYS_PER_MONTH: f64 = 30.0;

/// Aggregates an appliance list into usage totals and a recommended system.
///
/// The whole list is reduced on every call. An empty list yields an
/// all-zero [`EnergyResult`].
///
/// # Examples
///
/// ```
/// use enerlyst::estimate::appliance::estimate_energy;
/// use enerlyst::estimate::types::ApplianceEntry;
///
/// let result = estimate_energy(&[ApplianceEntry::new("LED Light Bulb", 1, 6.0, 10.0)]);
/// assert_eq!(result.recommended_solar_size_kw, 1);
/// assert_eq!(result.recommended_batteries, 1);
/// ```
pub fn estimate_energy(appliances: &[ApplianceEntry]) -> EnergyResult {
    let (total_daily_usage_kwh, peak_load_w) = appliances
        .iter()
        .fold((0.0_f64, 0.0_f64), |(kwh, watts), a| {
            (kwh + a.daily_usage_kwh(), watts + a.load_w())
        });

    let recommended_solar_size_kw = ceil_count(total_daily_usage_kwh * SOLAR_MARGIN);
    let recommended_batteries = ceil_count(total_daily_usage_kwh / BATTERY_UNIT_KWH);
    let recommended_inverter_size_w = ceil_count(peak_load_w / 1000.0).saturating_mul(1000);

    let estimated_cost = recommended_solar_size_kw as f64 * SOLAR_PRICE_PER_KW
        + recommended_batteries as f64 * BATTERY_PRICE_PER_UNIT
        + recommended_inverter_size_w as f64 * INVERTER_PRICE_PER_W;

    let result = EnergyResult {
        total_daily_usage_kwh,
        total_weekly_usage_kwh: total_daily_usage_kwh * DAYS_PER_WEEK,
        total_monthly_usage_kwh: total_daily_usage_kwh * DAYS_PER_MONTH,
        peak_load_kw: peak_load_w / 1000.0,
        average_load_kw: total_daily_usage_kwh * 1000.0 / HOURS_PER_DAY / 1000.0,
        recommended_solar_size_kw,
        recommended_batteries,
        recommended_inverter_size_w,
        estimated_cost,
    };
    log::debug!(
        "energy estimate: {} appliances -> {:.3} kWh/day, {} kW solar, {} batteries, {} W inverter",
        appliances.len(),
        result.total_daily_usage_kwh,
        result.recommended_solar_size_kw,
        result.recommended_batteries,
        result.recommended_inverter_size_w
    );
    result
}

/// Combined capacity of the recommended batteries (kWh).
pub fn total_battery_capacity_kwh(result: &EnergyResult) -> f64 {
    result.recommended_batteries as f64 * BATTERY_UNIT_KWH
}

/// Grid spend avoided each month if the system covers all usage.
pub fn estimated_monthly_savings(result: &EnergyResult) -> f64 {
    result.total_monthly_usage_kwh * GRID_PRICE_PER_KWH
}

/// Whole years for the avoided grid spend to repay the system cost.
///
/// Returns 0 when there is nothing to save.
pub fn payback_years(result: &EnergyResult) -> u64 {
    let annual_savings = estimated_monthly_savings(result) * 12.0;
    if annual_savings <= 0.0 {
        return 0;
    }
    ceil_count(result.estimated_cost / annual_savings)
}

/// Rounds up to a whole count; negative and NaN values clamp to 0.
fn ceil_count(value: f64) -> u64 {
    if value.is_nan() || value <= 0.0 {
        0
    } else {
        value.ceil() as u64
    }
}
