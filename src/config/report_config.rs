use std::path::PathBuf;

use chrono::{Months, NaiveDate, NaiveDateTime, TimeDelta};
use clap::ValueEnum;

use crate::config::errors::ConfigError;
use crate::config::Args;
use crate::engine::ReportScope;

/// How far back a report reaches from the start of its `as_of` date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportWindow {
    /// From midnight of the day before `as_of` onwards.
    Daily,
    /// From midnight of the same day one calendar month before `as_of` onwards.
    Monthly
}

impl ReportWindow {
    pub fn start(self, as_of: NaiveDate) -> Option<NaiveDateTime> {
        let midnight = as_of.and_hms_opt(0, 0, 0)?;

        match self {
            ReportWindow::Daily => midnight.checked_sub_signed(TimeDelta::hours(24)),
            ReportWindow::Monthly => midnight.checked_sub_months(Months::new(1))
        }
    }

    pub fn includes_summary(self) -> bool {
        matches!(self, ReportWindow::Monthly)
    }
}

/// Everything the report engine needs, resolved from the command line.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportConfig {
    pub catch_records: PathBuf,
    pub trap_visits: PathBuf,
    pub scope: ReportScope,
    pub include_summary: bool
}

impl ReportConfig {
    /// Resolves the window against `as_of`, or `today` when no date was given.
    pub fn from_args(args: &Args, today: NaiveDate) -> Result<Self, ConfigError> {
        if args.programs.is_empty() {
            return Err(ConfigError::EmptyProgramScope);
        }

        let as_of = args.as_of.unwrap_or(today);
        let window_start = args.window.start(as_of)
            .ok_or(ConfigError::WindowOutOfRange { window: args.window, as_of })?;

        Ok(Self {
            catch_records: args.catch_records.clone(),
            trap_visits: args.trap_visits.clone(),
            scope: ReportScope::new(args.programs.clone(), window_start),
            include_summary: args.summary || args.window.includes_summary()
        })
    }
}
