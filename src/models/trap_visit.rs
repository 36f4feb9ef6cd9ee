use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::types::{deserialize_optional_flag, deserialize_optional_timestamp, ProgramId};

/// Represents a single row of the trap visit query export.
///
/// Trap visits are reported as-is; nothing here is aggregated. The daily export carries
/// debris volume in liters and the monthly export in gallons, so both are optional.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct TrapVisit {
    pub program_name: Option<String>,
    pub trap_name: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_flag")]
    pub is_paper_entry: Option<bool>,
    #[serde(default, deserialize_with = "deserialize_optional_timestamp")]
    pub trap_visit_time_start: Option<NaiveDateTime>,
    #[serde(default, deserialize_with = "deserialize_optional_timestamp")]
    pub trap_visit_time_end: Option<NaiveDateTime>,
    pub fish_processed: Option<String>,
    pub why_fish_not_processed: Option<String>,
    pub cone_depth: Option<String>,
    pub trap_functioning: Option<String>,
    pub trap_status_at_end: Option<String>,
    pub total_revolutions: Option<i64>,
    pub rpm_at_start: Option<String>,
    pub rpm_at_end: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub debris_volume_liters: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub debris_volume_gal: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub program_id: Option<ProgramId>
}
