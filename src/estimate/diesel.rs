//! Diesel generator fuel and cost estimation.

use super::types::{DieselResult, GeneratorProfile};

/// Fuel burn per kVA of rating per running hour (liters).
pub const LITERS_PER_KVA_HOUR: f64 = 0.25;
/// Average weeks in a month.
pub const WEEKS_PER_MONTH: f64 = 4.33;
pub const MONTHS_PER_YEAR: f64 = 12.0;
/// CO₂ emitted per liter of diesel burned (kg).
pub const CO2_KG_PER_LITER: f64 = 2.68;
pub const HOURS_PER_YEAR: f64 = 8760.0;

/// Converts generator usage into consumption and cost figures.
///
/// Total for any input; validate with [`GeneratorProfile::validate`] first.
///
/// # Examples
///
/// ```
/// use enerlyst::estimate::diesel::estimate_diesel;
/// use enerlyst::estimate::types::GeneratorProfile;
///
/// let result = estimate_diesel(&GeneratorProfile::new(10.0, 8.0, 800.0, 7));
/// assert_eq!(result.daily_consumption_l, 20.0);
/// assert_eq!(result.daily_cost, 16000.0);
/// ```
pub fn estimate_diesel(profile: &GeneratorProfile) -> DieselResult {
    let hourly_consumption_l = profile.generator_size_kva * LITERS_PER_KVA_HOUR;
    let daily_consumption_l = hourly_consumption_l * profile.daily_hours;
    let weekly_consumption_l = daily_consumption_l * f64::from(profile.days_per_week);
    let monthly_consumption_l = weekly_consumption_l * WEEKS_PER_MONTH;

    let price = profile.fuel_price_per_liter;
    let monthly_cost = monthly_consumption_l * price;

    let result = DieselResult {
        daily_consumption_l,
        weekly_consumption_l,
        monthly_consumption_l,
        daily_cost: daily_consumption_l * price,
        weekly_cost: weekly_consumption_l * price,
        monthly_cost,
        annual_cost: monthly_cost * MONTHS_PER_YEAR,
    };
    log::debug!(
        "diesel estimate: {} kVA, {} h/day, {} days/week -> {:.2} L/month, {:.2} per year",
        profile.generator_size_kva,
        profile.daily_hours,
        profile.days_per_week,
        result.monthly_consumption_l,
        result.annual_cost
    );
    result
}

/// Monthly CO₂ emissions of the generator (kg).
pub fn monthly_co2_kg(result: &DieselResult) -> f64 {
    result.monthly_consumption_l * CO2_KG_PER_LITER
}

/// Annual fuel cost spread over every hour of the year.
pub fn cost_per_hour(result: &DieselResult) -> f64 {
    result.annual_cost / HOURS_PER_YEAR
}
