use serde::Serialize;

use crate::models::{CatchRecord, SummaryRow, TrapVisit};

/// The complete response for one reporting window.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub catch_results: Vec<CatchRecord>,
    pub trap_results: Vec<TrapVisit>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub catch_summary_results: Option<Vec<SummaryRow>>
}
