//! Templated advisory tips drawn at random from a fixed pool.
//!
//! Each pool is rebuilt from the estimate it describes, so the same
//! template can read differently for different results. Selection is
//! uniform; pin the random source with [`AdvisoryTextSelector::seeded`]
//! to get reproducible output.

use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, SeedableRng};

use crate::estimate::appliance::{payback_years, total_battery_capacity_kwh};
use crate::estimate::diesel::{cost_per_hour, monthly_co2_kg};
use crate::estimate::types::{DieselResult, EnergyResult};
use crate::report::format::{CURRENCY_SYMBOL, format_naira};

/// Share of the annual fuel bill a solar system is assumed to save.
const SOLAR_SAVINGS_SHARE: f64 = 0.7;
/// Solar array size suggested per kVA of generator rating.
const SOLAR_KW_PER_KVA: f64 = 0.8;

/// Every diesel tip for `result`, in a fixed order.
pub fn diesel_tips(result: &DieselResult, size_kva: f64) -> Vec<String> {
    let solar_kw = (size_kva * SOLAR_KW_PER_KVA).ceil().max(0.0);
    let solar_savings = result.annual_cost * SOLAR_SAVINGS_SHARE;
    vec![
        format!(
            "Solar switch: a {solar_kw:.0}kW solar system could save you {} a year on fuel.",
            format_naira(solar_savings)
        ),
        format!(
            "Environmental impact: your generator emits about {:.1}kg of CO2 each month. \
             Solar power removes these emissions.",
            monthly_co2_kg(result)
        ),
        "Hybrid option: a solar-diesel hybrid system can cut fuel costs by around 60% \
         while keeping the generator as backup."
            .to_string(),
        format!(
            "Running cost: your generator costs {CURRENCY_SYMBOL}{:.2} per hour across the year, \
             compared with about {CURRENCY_SYMBOL}0.50 per hour for solar.",
            cost_per_hour(result)
        ),
        "Sizing tip: users with similar usage typically cut energy costs by 65% \
         with a properly sized solar system."
            .to_string(),
    ]
}

/// Every energy tip for `result`, in a fixed order.
pub fn energy_tips(result: &EnergyResult) -> Vec<String> {
    vec![
        format!(
            "System size: your usage suggests a {}kW solar system with {} batteries.",
            result.recommended_solar_size_kw, result.recommended_batteries
        ),
        format!(
            "Load scheduling: your peak load of {:.1}kW can be reduced by staggering \
             high-power appliances, which also lowers inverter cost.",
            result.peak_load_kw
        ),
        format!(
            "Payback: a solar system for your usage would pay for itself in about {} years.",
            payback_years(result)
        ),
        "Savings: households with similar profiles typically save up to 70% \
         on energy costs with solar."
            .to_string(),
        format!(
            "Storage: {} batteries ({:.1}kWh) give you backup power sized to your daily usage.",
            result.recommended_batteries,
            total_battery_capacity_kwh(result)
        ),
        format!(
            "Efficiency: your average load of {:.1}kW could drop by up to 40% \
             with LED lighting and efficient appliances.",
            result.average_load_kw
        ),
    ]
}

/// Picks one advisory tip per call using an injected random source.
#[derive(Debug)]
pub struct AdvisoryTextSelector<R> {
    rng: R,
}

impl<R: Rng> AdvisoryTextSelector<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Returns one of [`diesel_tips`] for this result.
    pub fn diesel_tip(&mut self, result: &DieselResult, size_kva: f64) -> String {
        self.pick(diesel_tips(result, size_kva))
    }

    /// Returns one of [`energy_tips`] for this result.
    pub fn energy_tip(&mut self, result: &EnergyResult) -> String {
        self.pick(energy_tips(result))
    }

    fn pick(&mut self, mut pool: Vec<String>) -> String {
        let idx = self.rng.random_range(0..pool.len());
        pool.swap_remove(idx)
    }
}

impl AdvisoryTextSelector<StdRng> {
    /// Selector with a pinned seed; the same seed yields the same sequence of tips.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl AdvisoryTextSelector<ThreadRng> {
    /// Selector over the thread-local generator.
    pub fn from_entropy() -> Self {
        Self::new(rand::rng())
    }
}
