#![cfg(feature = "cli")]

use predicates::prelude::*;

fn sample_json() -> serde_json::Value {
    serde_json::json!({
        "dic_mg_per_l": 8.5,
        "ph": 7.2,
        "temp_c": 15.0,
        "pressure_kpa": 98.8
    })
}

#[test]
fn cli_fails_without_any_input() {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("dic_speciation");
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Missing input data"));
}

#[test]
fn cli_works_without_assumptions_with_inputs_json() {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("dic_speciation");
    cmd.arg("--json")
        .arg("--inputs-json")
        .arg(sample_json().to_string());

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("\"calc_CO2_uM\""))
        .stdout(predicate::str::contains("\"calc_pCO2_perc_sat\""));
}

#[test]
fn cli_prints_text_table_by_default() {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("dic_speciation");
    let batch = serde_json::json!([sample_json(), sample_json()]).to_string();
    cmd.arg("--inputs-json").arg(batch);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Sample 2:"))
        .stdout(predicate::str::contains("calc_HCO3_uM"));
}

#[test]
fn cli_reads_document_from_stdin() {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("dic_speciation");
    let doc = serde_json::json!({
        "samples": [sample_json()],
        "assumptions": { "atm_co2_ppm": 420.0 }
    })
    .to_string();

    cmd.arg("--json").arg("--input").arg("-").write_stdin(doc);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("\"calc_carb_alk_uM\""));
}

#[test]
fn cli_reports_invalid_json_for_inputs_json() {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("dic_speciation");
    cmd.arg("--inputs-json").arg("{not valid json}");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Invalid JSON for --inputs-json"));
}

#[test]
fn cli_reports_invalid_json_in_file() {
    use std::fs::File;
    use std::io::Write as _;
    use tempfile::tempdir;

    let dir = tempdir().unwrap();
    let file_path = dir.path().join("bad.json");
    let mut f = File::create(&file_path).unwrap();
    writeln!(f, "this is not json").unwrap();

    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("dic_speciation");
    cmd.arg("--input").arg(file_path);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Invalid JSON in input document"));
}

#[test]
fn cli_strict_mode_rejects_zero_pressure() {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("dic_speciation");
    let inputs = serde_json::json!({
        "dic_mg_per_l": 8.5,
        "ph": 7.2,
        "temp_c": 15.0,
        "pressure_kpa": 0.0
    })
    .to_string();

    cmd.arg("--inputs-json")
        .arg(inputs)
        .arg("--assumptions-json")
        .arg(r#"{"strict": true}"#);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains(
            "Non-finite result for calc_pCO2_perc_sat",
        ));
}

#[test]
fn cli_text_output_keeps_trace_carbonate_visible() {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("dic_speciation");
    let inputs = serde_json::json!({
        "dic_mg_per_l": 15.0,
        "ph": 5.5,
        "temp_c": 18.0,
        "pressure_kpa": 98.9
    })
    .to_string();
    cmd.arg("--inputs-json").arg(inputs);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("1.7836e-3"))
        .stdout(predicate::str::contains("0.0000").not());
}

#[test]
fn cli_verbose_logs_to_stderr_only() {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("dic_speciation");
    cmd.arg("--json")
        .arg("--verbose")
        .arg("--inputs-json")
        .arg(sample_json().to_string());

    cmd.assert()
        .success()
        .stdout(predicate::str::starts_with("["))
        .stderr(predicate::str::contains("parsed inputs"));
}
