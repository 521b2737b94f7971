//! Enerlyst entry point: CLI wiring and scenario-driven estimates.

use std::process;

use rand::Rng;

use enerlyst::advisory::AdvisoryTextSelector;
use enerlyst::cli::{self, CliOptions, Command};
use enerlyst::config::{ConfigError, ScenarioConfig};
use enerlyst::io::export::export_report_csv;
use enerlyst::report::Report;
use enerlyst::runner::{run_diesel, run_energy};

/// Default API server port.
#[cfg(feature = "api")]
const DEFAULT_PORT: u16 = 3000;

/// Loads the scenario named on the command line and applies flag overrides.
fn load_scenario(cli: &CliOptions) -> Result<ScenarioConfig, ConfigError> {
    // --scenario takes priority, then --preset, then form defaults
    let mut scenario = if let Some(ref path) = cli.scenario {
        ScenarioConfig::from_toml_file(path)?
    } else if let Some(ref name) = cli.preset {
        ScenarioConfig::from_preset(name)?
    } else {
        ScenarioConfig::default()
    };

    let d = &mut scenario.diesel;
    if let Some(v) = cli.generator_size_kva {
        d.generator_size_kva = v;
    }
    if let Some(v) = cli.daily_hours {
        d.daily_hours = v;
    }
    if let Some(v) = cli.fuel_price_per_liter {
        d.fuel_price_per_liter = v;
    }
    if let Some(v) = cli.days_per_week {
        d.days_per_week = v;
    }
    if !cli.appliances.is_empty() {
        scenario.appliances = cli.appliances.clone();
    }
    if let Some(ref location) = cli.location {
        scenario.report.location = location.clone();
    }
    if cli.seed.is_some() {
        scenario.report.seed = cli.seed;
    }
    Ok(scenario)
}

/// Validation errors relevant to `command`; the other calculator's section is ignored.
fn errors_for(scenario: &ScenarioConfig, command: Command) -> Vec<ConfigError> {
    let section = match command {
        Command::Diesel => "diesel.",
        Command::Energy => "appliances",
    };
    scenario
        .validate()
        .into_iter()
        .filter(|e| e.field.starts_with(section) || e.field.starts_with("report."))
        .collect()
}

fn build_report(scenario: &ScenarioConfig, command: Command) -> Result<Report, String> {
    match scenario.report.seed {
        Some(seed) => report_with(scenario, command, &mut AdvisoryTextSelector::seeded(seed)),
        None => report_with(scenario, command, &mut AdvisoryTextSelector::from_entropy()),
    }
}

fn report_with<R: Rng>(
    scenario: &ScenarioConfig,
    command: Command,
    selector: &mut AdvisoryTextSelector<R>,
) -> Result<Report, String> {
    let location = Some(scenario.report.location.as_str());
    let report = match command {
        Command::Diesel => run_diesel(&scenario.generator_profile(), location, selector)
            .map_err(|e| e.to_string())?
            .report,
        Command::Energy => {
            let appliances = scenario.appliance_entries().map_err(|e| e.to_string())?;
            run_energy(&appliances, location, selector)
                .map_err(|e| e.to_string())?
                .report
        }
    };
    Ok(report)
}

fn fail(message: impl std::fmt::Display) -> ! {
    eprintln!("error: {message}");
    process::exit(1);
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = match cli::parse_args() {
        Ok(cli) => cli,
        Err(e) => {
            eprintln!("error: {e}");
            cli::print_usage();
            process::exit(1);
        }
    };

    let scenario = match load_scenario(&cli) {
        Ok(scenario) => scenario,
        Err(e) => {
            eprintln!("{e}");
            process::exit(1);
        }
    };

    if let Some(command) = cli.command {
        let errors = errors_for(&scenario, command);
        if !errors.is_empty() {
            for e in &errors {
                eprintln!("{e}");
            }
            process::exit(1);
        }

        let report = build_report(&scenario, command).unwrap_or_else(|e| fail(e));
        println!("{report}");

        if let Some(ref path) = cli.report_out {
            if let Err(e) = export_report_csv(&report, path) {
                fail(format!("failed to write CSV: {e}"));
            }
            eprintln!("Report written to {}", path.display());
        }
    }

    if cli.serve {
        serve(&cli, scenario.report.seed);
    }
}

#[cfg(feature = "api")]
fn serve(cli: &CliOptions, seed: Option<u64>) {
    use std::net::SocketAddr;
    use std::sync::Arc;

    let state = Arc::new(enerlyst::api::AppState { seed });
    let addr = SocketAddr::from(([0, 0, 0, 0], cli.port.unwrap_or(DEFAULT_PORT)));
    let rt = tokio::runtime::Runtime::new()
        .unwrap_or_else(|e| fail(format!("failed to create tokio runtime: {e}")));
    rt.block_on(enerlyst::api::serve(state, addr));
}

#[cfg(not(feature = "api"))]
fn serve(_cli: &CliOptions, _seed: Option<u64>) {
    fail("--serve requires a build with the `api` feature");
}
