use chrono::NaiveDate;
use thiserror::Error;

use crate::config::ReportWindow;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("At least one program id is required")]
    EmptyProgramScope,
    #[error("A [{window:?}] window ending on [{as_of}] is out of range")]
    WindowOutOfRange {
        window: ReportWindow,
        as_of: NaiveDate
    }
}
