//! Command-line argument parsing for the `enerlyst` binary.

use std::env;
use std::path::PathBuf;

use crate::config::ApplianceConfig;

/// Which calculator to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Diesel,
    Energy,
}

#[derive(Debug, Default)]
pub struct CliOptions {
    pub command: Option<Command>,
    pub scenario: Option<PathBuf>,
    pub preset: Option<String>,
    pub generator_size_kva: Option<f64>,
    pub daily_hours: Option<f64>,
    pub fuel_price_per_liter: Option<f64>,
    pub days_per_week: Option<u8>,
    /// Appliances given with `--appliance`; replace the scenario's list when non-empty.
    pub appliances: Vec<ApplianceConfig>,
    pub seed: Option<u64>,
    pub location: Option<String>,
    pub report_out: Option<PathBuf>,
    pub serve: bool,
    pub port: Option<u16>,
}

pub fn parse_args() -> Result<CliOptions, String> {
    let args: Vec<String> = env::args().skip(1).collect();
    parse_args_from(args)
}

pub fn parse_args_from(args: Vec<String>) -> Result<CliOptions, String> {
    if args.len() == 1 && (args[0] == "--help" || args[0] == "-h") {
        print_usage();
        std::process::exit(0);
    }
    parse_options(&args)
}

fn parse_options(args: &[String]) -> Result<CliOptions, String> {
    let mut i = 0usize;
    let mut opts = CliOptions::default();

    while i < args.len() {
        match args[i].as_str() {
            "diesel" | "energy" if opts.command.is_none() => {
                opts.command = Some(if args[i] == "diesel" {
                    Command::Diesel
                } else {
                    Command::Energy
                });
            }
            "--scenario" => {
                i += 1;
                let path = args.next_or_err(
                    i,
                    "missing value for --scenario (expected a TOML file path)",
                )?;
                if opts.scenario.replace(PathBuf::from(path)).is_some() {
                    return Err("--scenario provided more than once".to_string());
                }
            }
            "--preset" => {
                i += 1;
                let name =
                    args.next_or_err(i, "missing value for --preset (expected a preset name)")?;
                if opts.preset.replace(name.to_string()).is_some() {
                    return Err("--preset provided more than once".to_string());
                }
            }
            "--size" => {
                i += 1;
                opts.generator_size_kva = Some(parse_value(args, i, "--size", "a number of kVA")?);
            }
            "--hours" => {
                i += 1;
                opts.daily_hours = Some(parse_value(args, i, "--hours", "a number of hours")?);
            }
            "--price" => {
                i += 1;
                opts.fuel_price_per_liter =
                    Some(parse_value(args, i, "--price", "a price per liter")?);
            }
            "--days" => {
                i += 1;
                opts.days_per_week = Some(parse_value(args, i, "--days", "an integer 1-7")?);
            }
            "--appliance" => {
                i += 1;
                let spec = args.next_or_err(
                    i,
                    "missing value for --appliance (expected name:quantity:hours[:watts])",
                )?;
                opts.appliances.push(parse_appliance_spec(spec)?);
            }
            "--seed" => {
                i += 1;
                opts.seed = Some(parse_value(args, i, "--seed", "a u64")?);
            }
            "--location" => {
                i += 1;
                let name = args.next_or_err(i, "missing value for --location")?;
                opts.location = Some(name.to_string());
            }
            "--report-out" => {
                i += 1;
                let path = args.next_or_err(
                    i,
                    "missing value for --report-out (expected a file path)",
                )?;
                if opts.report_out.replace(PathBuf::from(path)).is_some() {
                    return Err("--report-out provided more than once".to_string());
                }
            }
            "--serve" => opts.serve = true,
            "--port" => {
                i += 1;
                opts.port = Some(parse_value(args, i, "--port", "a u16")?);
            }
            "--help" | "-h" => {
                print_usage();
                std::process::exit(0);
            }
            other => return Err(format!("unknown argument: {other}")),
        }
        i += 1;
    }

    if opts.scenario.is_some() && opts.preset.is_some() {
        return Err(
            "arguments `--scenario` and `--preset` are mutually exclusive; choose one source"
                .to_string(),
        );
    }

    let diesel_flags = opts.generator_size_kva.is_some()
        || opts.daily_hours.is_some()
        || opts.fuel_price_per_liter.is_some()
        || opts.days_per_week.is_some();
    if diesel_flags && opts.command == Some(Command::Energy) {
        return Err("--size, --hours, --price and --days apply to the diesel command".to_string());
    }
    if !opts.appliances.is_empty() && opts.command == Some(Command::Diesel) {
        return Err("--appliance applies to the energy command".to_string());
    }
    if opts.command.is_none() && !opts.serve {
        return Err("expected a command: `diesel` or `energy`".to_string());
    }

    Ok(opts)
}

/// Parses `name:quantity:hours[:watts]`; without watts the catalog value is used.
pub fn parse_appliance_spec(spec: &str) -> Result<ApplianceConfig, String> {
    let parts: Vec<&str> = spec.split(':').collect();
    if !(3..=4).contains(&parts.len()) || parts[0].trim().is_empty() {
        return Err(format!(
            "invalid --appliance \"{spec}\" (expected name:quantity:hours[:watts])"
        ));
    }
    let quantity = parts[1]
        .trim()
        .parse::<u32>()
        .map_err(|_| format!("invalid quantity \"{}\" in --appliance \"{spec}\"", parts[1]))?;
    let daily_hours = parts[2]
        .trim()
        .parse::<f64>()
        .map_err(|_| format!("invalid hours \"{}\" in --appliance \"{spec}\"", parts[2]))?;
    let wattage = match parts.get(3) {
        Some(w) => Some(
            w.trim()
                .parse::<f64>()
                .map_err(|_| format!("invalid watts \"{w}\" in --appliance \"{spec}\""))?,
        ),
        None => None,
    };
    Ok(ApplianceConfig {
        name: parts[0].trim().to_string(),
        quantity,
        daily_hours,
        wattage,
    })
}

fn parse_value<T: std::str::FromStr>(
    args: &[String],
    index: usize,
    flag: &str,
    expected: &str,
) -> Result<T, String> {
    let raw = args.next_or_err(index, &format!("missing value for {flag} (expected {expected})"))?;
    raw.parse::<T>()
        .map_err(|_| format!("{flag} value \"{raw}\" is not valid (expected {expected})"))
}

trait SliceArgExt {
    fn next_or_err(&self, index: usize, err: &str) -> Result<&str, String>;
}

impl SliceArgExt for [String] {
    fn next_or_err(&self, index: usize, err: &str) -> Result<&str, String> {
        self.get(index)
            .map(String::as_str)
            .ok_or_else(|| err.to_string())
    }
}

pub fn print_usage() {
    eprintln!("enerlyst — diesel generator and appliance energy cost estimator");
    eprintln!();
    eprintln!("Usage:");
    eprintln!("  enerlyst diesel [--size <kva>] [--hours <h>] [--price <per-liter>] [--days <1-7>]");
    eprintln!("  enerlyst energy [--appliance <name:quantity:hours[:watts]>]...");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --scenario <path>        Load inputs from a TOML scenario file");
    eprintln!("  --preset <name>          Use a built-in scenario (household, small_shop, office)");
    eprintln!("  --seed <u64>             Pin the advisory tip selection");
    eprintln!("  --location <name>        Location printed on the report");
    eprintln!("  --report-out <path>      Export the report to CSV");
    eprintln!("  --serve                  Start the REST API (requires the `api` feature)");
    eprintln!("  --port <u16>             API server port (default: 3000)");
    eprintln!("  --help                   Show this help message");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn supports_diesel_flags() {
        let opts = parse_args_from(args(&[
            "diesel", "--size", "15", "--hours", "12", "--price", "950", "--days", "5",
        ]))
        .expect("parse should succeed");
        assert_eq!(opts.command, Some(Command::Diesel));
        assert_eq!(opts.generator_size_kva, Some(15.0));
        assert_eq!(opts.daily_hours, Some(12.0));
        assert_eq!(opts.fuel_price_per_liter, Some(950.0));
        assert_eq!(opts.days_per_week, Some(5));
    }

    #[test]
    fn supports_repeated_appliances() {
        let opts = parse_args_from(args(&[
            "energy",
            "--appliance",
            "Refrigerator:1:24",
            "--appliance",
            "Borehole Pump:1:2:750",
        ]))
        .expect("parse should succeed");
        assert_eq!(opts.appliances.len(), 2);
        assert_eq!(opts.appliances[0].wattage, None);
        assert_eq!(opts.appliances[1].name, "Borehole Pump");
        assert_eq!(opts.appliances[1].wattage, Some(750.0));
    }

    #[test]
    fn supports_preset_and_seed() {
        let opts = parse_args_from(args(&["energy", "--preset", "office", "--seed", "9"]))
            .expect("parse should succeed");
        assert_eq!(opts.preset.as_deref(), Some("office"));
        assert_eq!(opts.seed, Some(9));
        assert!(opts.scenario.is_none());
    }

    #[test]
    fn scenario_and_preset_conflict() {
        let err = parse_args_from(args(&[
            "diesel", "--scenario", "a.toml", "--preset", "office",
        ]))
        .expect_err("should conflict");
        assert!(err.contains("mutually exclusive"));
    }

    #[test]
    fn flags_must_match_command() {
        assert!(parse_args_from(args(&["energy", "--size", "10"])).is_err());
        assert!(parse_args_from(args(&["diesel", "--appliance", "Iron:1:1"])).is_err());
    }

    #[test]
    fn command_is_required_unless_serving() {
        assert!(parse_args_from(args(&["--seed", "1"])).is_err());
        assert!(parse_args_from(args(&["--serve"])).is_ok());
    }

    #[test]
    fn rejects_bad_values() {
        assert!(parse_args_from(args(&["diesel", "--days", "seven"])).is_err());
        assert!(parse_args_from(args(&["diesel", "--size"])).is_err());
        assert!(parse_args_from(args(&["diesel", "--bogus"])).is_err());
        assert!(parse_appliance_spec("Iron:one:1").is_err());
        assert!(parse_appliance_spec("Iron:1").is_err());
        assert!(parse_appliance_spec(":1:1").is_err());
    }
}
