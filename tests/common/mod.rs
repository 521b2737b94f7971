//! Shared test fixtures for integration tests.

#![allow(dead_code)]

use enerlyst::estimate::types::{ApplianceEntry, GeneratorProfile};

/// The calculator's form defaults: 10 kVA, 8 h/day, 800 per liter, 7 days.
pub fn reference_profile() -> GeneratorProfile {
    GeneratorProfile::new(10.0, 8.0, 800.0, 7)
}

/// A typical home: lights, fans, fridge, TV and a laptop (6.26 kWh/day).
pub fn household_appliances() -> Vec<ApplianceEntry> {
    vec![
        ApplianceEntry::new("LED Light Bulb", 6, 6.0, 10.0),
        ApplianceEntry::new("Ceiling Fan", 2, 8.0, 75.0),
        ApplianceEntry::new("Refrigerator", 1, 24.0, 150.0),
        ApplianceEntry::new("Television (LED)", 1, 5.0, 100.0),
        ApplianceEntry::new("Laptop", 1, 4.0, 65.0),
    ]
}
