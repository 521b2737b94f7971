//! Validate → estimate → advise → report, shared by the CLI and the API.

use rand::Rng;
use serde::Serialize;

use crate::advisory::AdvisoryTextSelector;
use crate::error::Result;
use crate::estimate::types::{
    ApplianceEntry, DieselResult, EnergyResult, GeneratorProfile, validate_appliances,
};
use crate::estimate::{estimate_diesel, estimate_energy};
use crate::report::Report;

/// Raw result, the selected tip and its printable report.
#[derive(Debug, Clone, Serialize)]
pub struct Estimate<T> {
    pub result: T,
    pub advisory: String,
    pub report: Report,
}

/// Runs the diesel calculator on a validated profile.
///
/// # Errors
///
/// Returns [`crate::error::EstimateError::InvalidInput`] if the profile fails validation.
pub fn run_diesel<R: Rng>(
    profile: &GeneratorProfile,
    location: Option<&str>,
    selector: &mut AdvisoryTextSelector<R>,
) -> Result<Estimate<DieselResult>> {
    profile.validate().inspect_err(|e| log::warn!("rejected generator profile: {e}"))?;

    let result = estimate_diesel(profile);
    let advisory = selector.diesel_tip(&result, profile.generator_size_kva);
    let report = Report::diesel(profile, &result, advisory.clone(), location);
    Ok(Estimate {
        result,
        advisory,
        report,
    })
}

/// Runs the energy calculator on a validated appliance list.
///
/// # Errors
///
/// Returns [`crate::error::EstimateError::InvalidInput`] for the first invalid appliance.
pub fn run_energy<R: Rng>(
    appliances: &[ApplianceEntry],
    location: Option<&str>,
    selector: &mut AdvisoryTextSelector<R>,
) -> Result<Estimate<EnergyResult>> {
    validate_appliances(appliances).inspect_err(|e| log::warn!("rejected appliance list: {e}"))?;

    let result = estimate_energy(appliances);
    let advisory = selector.energy_tip(&result);
    let report = Report::energy(appliances, &result, advisory.clone(), location);
    Ok(Estimate {
        result,
        advisory,
        report,
    })
}
