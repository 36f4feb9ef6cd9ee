use std::path::PathBuf;

use chrono::NaiveDate;
use clap::Parser;

use crate::config::ReportWindow;
use crate::types::ProgramId;

/// Fisheries catch report
///
/// Reads CSV exports of the catch and trap visit queries, keeps the rows that fall inside
/// the reporting window and writes a JSON report to stdout. Monthly reports also carry a
/// per-species catch summary.
///
/// Examples:
///   catch-summary catch.csv trap_visits.csv
///   catch-summary catch.csv trap_visits.csv --window monthly --as-of 2024-06-01
///   catch-summary catch.csv trap_visits.csv --programs 1,2,3 --log-level info
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// CSV export of the catch query
    #[arg(value_name = "CATCH_CSV")]
    pub catch_records: PathBuf,

    /// CSV export of the trap visit query
    #[arg(value_name = "TRAP_CSV")]
    pub trap_visits: PathBuf,

    /// Reporting window to cover
    #[arg(short, long, value_enum, default_value_t = ReportWindow::Daily)]
    pub window: ReportWindow,

    /// Monitoring programs to include
    #[arg(
        short,
        long,
        value_delimiter = ',',
        default_value = "1,2",
        env = "CATCH_SUMMARY_PROGRAMS"
    )]
    pub programs: Vec<ProgramId>,

    /// Date the window ends on (defaults to today, UTC)
    #[arg(long, value_name = "YYYY-MM-DD")]
    pub as_of: Option<NaiveDate>,

    /// Include the species summary even on a daily report
    #[arg(long)]
    pub summary: bool,

    /// Log level: error, warn, info, debug or trace
    #[arg(long, default_value = "error", env = "CATCH_SUMMARY_LOG")]
    pub log_level: String
}
