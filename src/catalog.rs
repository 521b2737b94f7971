//! Common household appliances and their typical rated wattage.

use serde::Serialize;

use crate::estimate::types::ApplianceEntry;

/// A catalog entry: display name and typical draw of one unit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CatalogAppliance {
    pub name: &'static str,
    /// Typical rated draw (W).
    pub wattage: f64,
}

/// Appliances offered for quick selection, in display order.
pub const COMMON_APPLIANCES: &[CatalogAppliance] = &[
    CatalogAppliance { name: "LED Light Bulb", wattage: 10.0 },
    CatalogAppliance { name: "Ceiling Fan", wattage: 75.0 },
    CatalogAppliance { name: "Refrigerator", wattage: 150.0 },
    CatalogAppliance { name: "Air Conditioner (1HP)", wattage: 746.0 },
    CatalogAppliance { name: "Air Conditioner (1.5HP)", wattage: 1119.0 },
    CatalogAppliance { name: "Television (LED)", wattage: 100.0 },
    CatalogAppliance { name: "Laptop", wattage: 65.0 },
    CatalogAppliance { name: "Desktop Computer", wattage: 300.0 },
    CatalogAppliance { name: "Washing Machine", wattage: 500.0 },
    CatalogAppliance { name: "Microwave", wattage: 1000.0 },
    CatalogAppliance { name: "Electric Kettle", wattage: 1500.0 },
    CatalogAppliance { name: "Iron", wattage: 1200.0 },
    CatalogAppliance { name: "Water Heater", wattage: 3000.0 },
    CatalogAppliance { name: "Blender", wattage: 400.0 },
    CatalogAppliance { name: "Rice Cooker", wattage: 700.0 },
];

/// Looks up the typical wattage of a catalog appliance.
///
/// Matching ignores ASCII case and surrounding whitespace.
pub fn lookup_wattage(name: &str) -> Option<f64> {
    let name = name.trim();
    COMMON_APPLIANCES
        .iter()
        .find(|a| a.name.eq_ignore_ascii_case(name))
        .map(|a| a.wattage)
}

/// The entry a fresh appliance row starts from: one LED bulb, six hours a day.
pub fn default_entry() -> ApplianceEntry {
    ApplianceEntry::new("LED Light Bulb", 1, 6.0, 10.0)
}
