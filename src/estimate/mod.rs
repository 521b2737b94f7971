//! Pure energy and fuel cost estimators.

pub mod appliance;
/// Diesel generator consumption and cost.
pub mod diesel;
pub mod types;

pub use appliance::estimate_energy;
pub use diesel::estimate_diesel;
pub use types::{ApplianceEntry, DieselResult, EnergyResult, GeneratorProfile};
