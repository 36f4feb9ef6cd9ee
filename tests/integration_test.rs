use std::path::Path;
use std::process::Command;

use anyhow::{anyhow, Result};
use serde_json::Value;

fn run_report(extra_args: &[&str]) -> Result<Value> {
    let binary_path = env!("CARGO_BIN_EXE_catch-summary");
    let catch_path = Path::new("samples").join("catch_records.csv");
    let trap_path = Path::new("samples").join("trap_visits.csv");

    let output = Command::new(binary_path)
        .arg(catch_path)
        .arg(trap_path)
        .args(["--as-of", "2024-05-15"])
        .args(extra_args)
        .env_remove("CATCH_SUMMARY_PROGRAMS")
        .output()?;

    assert!(output.status.success());

    Ok(serde_json::from_slice(&output.stdout)?)
}

fn find_row<'a>(summary: &'a [Value], species: &str) -> Result<&'a Value> {
    summary.iter()
        .find(|row| row["species"] == species)
        .ok_or_else(|| anyhow!("{species} missing from summary"))
}

#[test]
fn test_cli_daily_report_has_no_summary() -> Result<()> {
    let report = run_report(&[])?;

    let catch_results = report["catchResults"].as_array().ok_or_else(|| anyhow!("catchResults missing"))?;
    let trap_results = report["trapResults"].as_array().ok_or_else(|| anyhow!("trapResults missing"))?;

    assert_eq!(catch_results.len(), 2);
    assert_eq!(trap_results.len(), 1);
    assert!(report.get("catchSummaryResults").is_none());
    assert_eq!(catch_results[0]["trap_name"], "RST 8.3");
    assert_eq!(catch_results[0]["trap_visit_time_start"], "2024-05-14T07:15:00");

    Ok(())
}

#[test]
fn test_cli_monthly_report_summarises_species() -> Result<()> {
    let report = run_report(&["--window", "monthly"])?;

    assert_eq!(report["catchResults"].as_array().map(Vec::len), Some(6));
    assert_eq!(report["trapResults"].as_array().map(Vec::len), Some(2));
    assert_eq!(report["catchResults"][2]["adipose_clipped"], true);
    assert_eq!(report["catchResults"][2]["mark_type"], "adipose fin clip");
    assert_eq!(report["trapResults"][0]["is_paper_entry"], false);

    let summary = report["catchSummaryResults"].as_array().ok_or_else(|| anyhow!("catchSummaryResults missing"))?;
    let species: Vec<&str> = summary.iter().filter_map(|row| row["species"].as_str()).collect();

    assert_eq!(species, vec!["All", "Chinook", "Unknown", "Coho", "Steelhead"]);

    let all = &summary[0];

    assert_eq!(all["totalFishCaught"], 33);
    assert_eq!(all["forkLengthRecordCount"], 4);
    assert_eq!(all["averageForkLength"], "114.50");
    assert_eq!(all["weightRecordCount"], 3);
    assert_eq!(all["averageWeight"], "35.77");

    let chinook = find_row(summary, "Chinook")?;

    assert_eq!(chinook["totalFishCaught"], 27);
    assert_eq!(chinook["averageForkLength"], "89.00");
    assert_eq!(chinook["averageWeight"], "5.60");

    let unknown = find_row(summary, "Unknown")?;

    assert_eq!(unknown["forkLengthRecordCount"], 0);
    assert_eq!(unknown["averageForkLength"], "NA");

    Ok(())
}

#[test]
fn test_cli_program_scope_can_be_widened() -> Result<()> {
    let report = run_report(&["--window", "monthly", "--programs", "1,2,3"])?;

    assert_eq!(report["catchResults"].as_array().map(Vec::len), Some(7));
    assert_eq!(report["trapResults"].as_array().map(Vec::len), Some(3));

    Ok(())
}

#[test]
fn test_cli_fails_on_missing_input() -> Result<()> {
    let binary_path = env!("CARGO_BIN_EXE_catch-summary");

    let output = Command::new(binary_path)
        .arg("samples/does_not_exist.csv")
        .arg(Path::new("samples").join("trap_visits.csv"))
        .output()?;

    assert!(!output.status.success());

    Ok(())
}
