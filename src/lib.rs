//! Diesel generator and appliance energy cost estimation.

pub mod advisory;
#[cfg(feature = "api")]
pub mod api;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
/// Pure diesel and appliance estimators.
pub mod estimate;
pub mod io;
/// Printable report projection and formatting helpers.
pub mod report;
pub mod runner;
