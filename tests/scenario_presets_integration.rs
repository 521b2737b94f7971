use std::process::Command;

fn run_cli(args: &[&str]) -> String {
    let output = Command::new(env!("CARGO_BIN_EXE_enerlyst"))
        .args(args)
        .output()
        .expect("enerlyst process should run");

    assert!(
        output.status.success(),
        "run failed for {args:?}: stderr={} ",
        String::from_utf8_lossy(&output.stderr)
    );

    String::from_utf8(output.stdout).expect("stdout should be valid UTF-8")
}

/// Returns the value printed after `label:` in a rendered report.
fn field<'a>(stdout: &'a str, label: &str) -> &'a str {
    let prefix = format!("{label}:");
    stdout
        .lines()
        .map(str::trim_start)
        .find(|l| l.starts_with(&prefix))
        .map(|l| l[prefix.len()..].trim())
        .unwrap_or_else(|| panic!("missing {label} in output:\n{stdout}"))
}

#[test]
fn scenario_files_run_via_cli() {
    let shop = run_cli(&["diesel", "--scenario", "scenarios/small_shop.toml"]);
    assert_eq!(field(&shop, "Daily consumption"), "25.0 liters");
    assert_eq!(field(&shop, "Daily cost"), "₦21,250");
    assert_eq!(field(&shop, "Days per week"), "6 days");
    assert_eq!(field(&shop, "Location"), "Ibadan");

    let shop = run_cli(&["energy", "--scenario", "scenarios/small_shop.toml"]);
    assert_eq!(field(&shop, "Daily energy usage"), "11.90 kWh");
    assert_eq!(field(&shop, "Recommended solar size"), "16 kW");
    assert_eq!(field(&shop, "Recommended batteries"), "5 units (100Ah each)");
}

#[test]
fn scenario_file_matches_its_preset() {
    let from_file = run_cli(&["energy", "--scenario", "scenarios/household.toml"]);
    let from_preset = run_cli(&["energy", "--preset", "household"]);
    for label in [
        "Daily energy usage",
        "Recommended solar size",
        "Recommended batteries",
        "Recommended inverter size",
        "Estimated system cost",
    ] {
        assert_eq!(field(&from_file, label), field(&from_preset, label), "{label}");
    }
    assert_eq!(field(&from_preset, "Recommended solar size"), "8 kW");
}

#[test]
fn presets_produce_distinct_estimates() {
    let household = run_cli(&["diesel", "--preset", "household"]);
    let office = run_cli(&["diesel", "--preset", "office"]);
    assert_eq!(field(&household, "Daily cost"), "₦6,000");
    assert_eq!(field(&office, "Daily cost"), "₦36,000");
    assert_ne!(field(&household, "Monthly cost"), field(&office, "Monthly cost"));
}

#[test]
fn seed_pins_the_whole_report() {
    let args = ["diesel", "--preset", "office", "--seed", "1234"];
    assert_eq!(run_cli(&args), run_cli(&args));
}

#[test]
fn flags_override_scenario_values() {
    let out = run_cli(&[
        "diesel",
        "--scenario",
        "scenarios/household.toml",
        "--hours",
        "12",
        "--location",
        "Enugu",
    ]);
    assert_eq!(field(&out, "Daily consumption"), "15.0 liters");
    assert_eq!(field(&out, "Location"), "Enugu");
}

#[test]
fn report_out_writes_csv() {
    let path = std::env::temp_dir().join(format!("enerlyst-report-{}.csv", std::process::id()));
    run_cli(&[
        "energy",
        "--appliance",
        "Refrigerator:1:20",
        "--seed",
        "3",
        "--report-out",
        path.to_str().expect("temp path should be UTF-8"),
    ]);

    let csv = std::fs::read_to_string(&path).expect("CSV report should exist");
    std::fs::remove_file(&path).ok();
    assert!(csv.starts_with("section,label,value"));
    assert!(csv.contains("result,Estimated system cost,\"₦810,000\""));
}

#[test]
fn invalid_input_exits_nonzero() {
    for args in [
        &["diesel", "--preset", "factory"][..],
        &["diesel", "--days", "0"][..],
        &["energy", "--appliance", "Hoverboard:1:2"][..],
        &["energy", "--scenario", "scenarios/missing.toml"][..],
    ] {
        let output = Command::new(env!("CARGO_BIN_EXE_enerlyst"))
            .args(args)
            .output()
            .expect("enerlyst process should run");
        assert!(!output.status.success(), "expected failure for {args:?}");
        assert!(!output.stderr.is_empty());
    }
}
