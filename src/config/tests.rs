use super::errors::ConfigError;
use super::{Args, ReportConfig, ReportWindow};

use anyhow::{anyhow, Result};
use chrono::NaiveDate;
use clap::Parser;

fn date(year: i32, month: u32, day: u32) -> Result<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| anyhow!("invalid fixture date"))
}

#[test]
fn test_daily_window_starts_at_midnight_the_day_before() -> Result<()> {
    let start = ReportWindow::Daily.start(date(2024, 5, 15)?).ok_or_else(|| anyhow!("no window start"))?;

    assert_eq!(start.to_string(), "2024-05-14 00:00:00");

    Ok(())
}

#[test]
fn test_monthly_window_steps_back_one_calendar_month() -> Result<()> {
    let start = ReportWindow::Monthly.start(date(2024, 5, 15)?).ok_or_else(|| anyhow!("no window start"))?;
    assert_eq!(start.to_string(), "2024-04-15 00:00:00");

    let clamped = ReportWindow::Monthly.start(date(2024, 3, 31)?).ok_or_else(|| anyhow!("no window start"))?;
    assert_eq!(clamped.to_string(), "2024-02-29 00:00:00");

    Ok(())
}

#[test]
fn test_args_apply_defaults() -> Result<()> {
    let args = Args::try_parse_from(["catch-summary", "catch.csv", "traps.csv"])?;

    assert_eq!(args.window, ReportWindow::Daily);
    assert!(!args.summary);
    assert!(args.as_of.is_none());
    assert_eq!(args.log_level, "error");

    Ok(())
}

#[test]
fn test_args_parse_window_programs_and_date() -> Result<()> {
    let args = Args::try_parse_from([
        "catch-summary", "catch.csv", "traps.csv",
        "--window", "monthly",
        "--programs", "3,4",
        "--as-of", "2024-06-01"
    ])?;

    assert_eq!(args.window, ReportWindow::Monthly);
    assert_eq!(args.programs, vec![3, 4]);
    assert_eq!(args.as_of, Some(date(2024, 6, 1)?));

    Ok(())
}

#[test]
fn test_args_reject_unknown_window() {
    assert!(Args::try_parse_from(["catch-summary", "catch.csv", "traps.csv", "--window", "weekly"]).is_err());
}

#[test]
fn test_config_uses_today_when_no_date_given() -> Result<()> {
    let args = Args::try_parse_from(["catch-summary", "catch.csv", "traps.csv", "--programs", "1"])?;
    let config = ReportConfig::from_args(&args, date(2024, 1, 1)?)?;

    assert_eq!(config.scope.window_start.to_string(), "2023-12-31 00:00:00");
    assert_eq!(config.scope.programs, vec![1]);
    assert!(!config.include_summary);

    Ok(())
}

#[test]
fn test_config_includes_summary_for_monthly_or_on_request() -> Result<()> {
    let monthly = Args::try_parse_from(["catch-summary", "catch.csv", "traps.csv", "--window", "monthly"])?;
    assert!(ReportConfig::from_args(&monthly, date(2024, 1, 1)?)?.include_summary);

    let daily = Args::try_parse_from(["catch-summary", "catch.csv", "traps.csv", "--summary"])?;
    assert!(ReportConfig::from_args(&daily, date(2024, 1, 1)?)?.include_summary);

    Ok(())
}

#[test]
fn test_config_rejects_empty_program_scope() -> Result<()> {
    let mut args = Args::try_parse_from(["catch-summary", "catch.csv", "traps.csv"])?;
    args.programs.clear();

    let result = ReportConfig::from_args(&args, date(2024, 1, 1)?);

    assert!(matches!(result, Err(ConfigError::EmptyProgramScope)));

    Ok(())
}
