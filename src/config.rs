//! TOML-based scenario configuration and preset definitions.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::catalog;
use crate::error::EstimateError;
use crate::estimate::types::{ApplianceEntry, GeneratorProfile};
use crate::report::DEFAULT_LOCATION;

/// Top-level scenario: a generator, an appliance list and report settings.
///
/// All sections have defaults matching the `household` preset's report
/// settings and the calculator's form defaults. Load from TOML with
/// [`ScenarioConfig::from_toml_file`] or pick a preset with
/// [`ScenarioConfig::from_preset`].
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScenarioConfig {
    /// Report location and advisory seed.
    #[serde(default)]
    pub report: ReportConfig,
    /// Diesel generator usage.
    #[serde(default)]
    pub diesel: DieselConfig,
    /// Appliance list for the energy calculator.
    #[serde(default = "default_appliances")]
    pub appliances: Vec<ApplianceConfig>,
}

/// Report metadata and advisory selection.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReportConfig {
    /// Location printed on the report.
    pub location: String,
    /// Pinned advisory seed; unset means a fresh random tip every run.
    pub seed: Option<u64>,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            location: DEFAULT_LOCATION.to_string(),
            seed: None,
        }
    }
}

/// Diesel generator parameters.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DieselConfig {
    /// Generator rating (kVA).
    pub generator_size_kva: f64,
    /// Runtime per day of use (hours).
    pub daily_hours: f64,
    /// Diesel price per liter.
    pub fuel_price_per_liter: f64,
    /// Days of use per week (1-7).
    pub days_per_week: u8,
}

impl Default for DieselConfig {
    fn default() -> Self {
        let p = GeneratorProfile::default();
        Self {
            generator_size_kva: p.generator_size_kva,
            daily_hours: p.daily_hours,
            fuel_price_per_liter: p.fuel_price_per_liter,
            days_per_week: p.days_per_week,
        }
    }
}

/// One appliance row. `wattage` may be omitted for catalog appliances.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ApplianceConfig {
    pub name: String,
    #[serde(default = "default_quantity")]
    pub quantity: u32,
    pub daily_hours: f64,
    /// Rated draw per unit (W); looked up in the catalog when absent.
    #[serde(default)]
    pub wattage: Option<f64>,
}

fn default_quantity() -> u32 {
    1
}

fn default_appliances() -> Vec<ApplianceConfig> {
    let entry = catalog::default_entry();
    vec![ApplianceConfig {
        name: entry.name,
        quantity: entry.quantity,
        daily_hours: entry.daily_hours,
        wattage: Some(entry.wattage),
    }]
}

fn appliance(name: &str, quantity: u32, daily_hours: f64) -> ApplianceConfig {
    ApplianceConfig {
        name: name.to_string(),
        quantity,
        daily_hours,
        wattage: None,
    }
}

/// Configuration error with field path and constraint description.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("config error: {field} — {message}")]
pub struct ConfigError {
    /// Dotted field path (e.g., `"diesel.days_per_week"`).
    pub field: String,
    /// Human-readable constraint description.
    pub message: String,
}

impl ConfigError {
    fn from_estimate(prefix: &str, err: EstimateError) -> Self {
        match err {
            EstimateError::InvalidInput { field, message } => Self {
                field: format!("{prefix}{field}"),
                message,
            },
        }
    }
}

impl ApplianceConfig {
    /// Resolves the row into an [`ApplianceEntry`], filling in catalog wattage.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` when the wattage is missing and the name is
    /// not a catalog appliance.
    pub fn to_entry(&self) -> Result<ApplianceEntry, ConfigError> {
        let wattage = match self.wattage {
            Some(w) => w,
            None => catalog::lookup_wattage(&self.name).ok_or_else(|| ConfigError {
                field: "wattage".to_string(),
                message: format!(
                    "required for \"{}\", which is not a catalog appliance",
                    self.name
                ),
            })?,
        };
        Ok(ApplianceEntry::new(
            self.name.clone(),
            self.quantity,
            self.daily_hours,
            wattage,
        ))
    }
}

impl ScenarioConfig {
    /// Available preset names.
    pub const PRESETS: &[&str] = &["household", "small_shop", "office"];

    /// A family home: lights, fans, a fridge and a TV on a small generator.
    pub fn household() -> Self {
        Self {
            report: ReportConfig::default(),
            diesel: DieselConfig {
                generator_size_kva: 5.0,
                daily_hours: 6.0,
                ..DieselConfig::default()
            },
            appliances: vec![
                appliance("LED Light Bulb", 6, 6.0),
                appliance("Ceiling Fan", 2, 8.0),
                appliance("Refrigerator", 1, 24.0),
                appliance("Television (LED)", 1, 5.0),
                appliance("Laptop", 1, 4.0),
            ],
        }
    }

    /// A small retail shop open six days a week.
    pub fn small_shop() -> Self {
        Self {
            report: ReportConfig::default(),
            diesel: DieselConfig {
                generator_size_kva: 10.0,
                daily_hours: 10.0,
                fuel_price_per_liter: 850.0,
                days_per_week: 6,
            },
            appliances: vec![
                appliance("LED Light Bulb", 8, 10.0),
                appliance("Refrigerator", 2, 24.0),
                appliance("Ceiling Fan", 2, 10.0),
                appliance("Desktop Computer", 1, 8.0),
            ],
        }
    }

    /// A weekday office with air conditioning.
    pub fn office() -> Self {
        Self {
            report: ReportConfig::default(),
            diesel: DieselConfig {
                generator_size_kva: 20.0,
                daily_hours: 9.0,
                days_per_week: 5,
                ..DieselConfig::default()
            },
            appliances: vec![
                appliance("LED Light Bulb", 20, 9.0),
                appliance("Air Conditioner (1.5HP)", 2, 8.0),
                appliance("Desktop Computer", 6, 8.0),
                appliance("Microwave", 1, 0.5),
                appliance("Electric Kettle", 1, 0.5),
            ],
        }
    }

    /// Loads a scenario from a named preset.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the preset name is unknown.
    pub fn from_preset(name: &str) -> Result<Self, ConfigError> {
        match name {
            "household" => Ok(Self::household()),
            "small_shop" => Ok(Self::small_shop()),
            "office" => Ok(Self::office()),
            _ => Err(ConfigError {
                field: "preset".to_string(),
                message: format!(
                    "unknown preset \"{name}\", available: {}",
                    Self::PRESETS.join(", ")
                ),
            }),
        }
    }

    /// Parses a scenario from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the file cannot be read or the TOML is invalid.
    pub fn from_toml_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError {
            field: "scenario".to_string(),
            message: format!("cannot read \"{}\": {e}", path.display()),
        })?;
        Self::from_toml_str(&content)
    }

    /// Parses a scenario from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the TOML is invalid or contains unknown fields.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        toml::from_str(s).map_err(|e| ConfigError {
            field: "toml".to_string(),
            message: e.to_string(),
        })
    }

    /// The generator described by the `[diesel]` section.
    pub fn generator_profile(&self) -> GeneratorProfile {
        let d = &self.diesel;
        GeneratorProfile::new(
            d.generator_size_kva,
            d.daily_hours,
            d.fuel_price_per_liter,
            d.days_per_week,
        )
    }

    /// The resolved appliance list.
    ///
    /// # Errors
    ///
    /// Returns the first unresolvable row; see [`ApplianceConfig::to_entry`].
    pub fn appliance_entries(&self) -> Result<Vec<ApplianceEntry>, ConfigError> {
        self.appliances
            .iter()
            .enumerate()
            .map(|(i, a)| {
                a.to_entry().map_err(|e| ConfigError {
                    field: format!("appliances[{i}].{}", e.field),
                    message: e.message,
                })
            })
            .collect()
    }

    /// Validates all sections and returns a list of errors.
    ///
    /// Returns an empty vector if configuration is valid.
    pub fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        if self.report.location.trim().is_empty() {
            errors.push(ConfigError {
                field: "report.location".into(),
                message: "must not be empty".into(),
            });
        }

        if let Err(e) = self.generator_profile().validate() {
            errors.push(ConfigError::from_estimate("diesel.", e));
        }

        for (i, a) in self.appliances.iter().enumerate() {
            let prefix = format!("appliances[{i}].");
            match a.to_entry() {
                Ok(entry) => {
                    if let Err(e) = entry.validate() {
                        errors.push(ConfigError::from_estimate(&prefix, e));
                    }
                }
                Err(e) => errors.push(ConfigError {
                    field: format!("{prefix}{}", e.field),
                    message: e.message,
                }),
            }
        }

        errors
    }
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self {
            report: ReportConfig::default(),
            diesel: DieselConfig::default(),
            appliances: default_appliances(),
        }
    }
}
