use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::models::UNKNOWN_SPECIES;
use crate::types::{deserialize_optional_flag, deserialize_optional_timestamp, FishCount, Measurement, ProgramId};

/// Represents a single row of the catch query export.
///
/// Columns are carried through to the report untouched. Only `species_common_name`,
/// `num_fish_caught`, `fork_length` and `weight` feed the species summary. The two
/// measurement columns stay as raw text because numeric columns arrive as text and are
/// parsed leniently when summarised.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct CatchRecord {
    #[serde(default, deserialize_with = "deserialize_optional_timestamp")]
    pub trap_visit_time_start: Option<NaiveDateTime>,
    #[serde(default, deserialize_with = "deserialize_optional_timestamp")]
    pub trap_visit_time_end: Option<NaiveDateTime>,
    pub trap_name: Option<String>,
    /// Left-joined from the taxon table, so it may be missing.
    pub species_common_name: Option<String>,
    pub capture_run: Option<String>,
    pub mark_type: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_flag")]
    pub adipose_clipped: Option<bool>,
    #[serde(default, deserialize_with = "deserialize_optional_flag")]
    pub dead: Option<bool>,
    pub life_stage: Option<String>,
    pub fork_length: Option<String>,
    pub weight: Option<String>,
    pub num_fish_caught: Option<FishCount>,
    #[serde(default, deserialize_with = "deserialize_optional_flag")]
    pub plus_count: Option<bool>,
    pub plus_count_methodology: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub release_id: Option<i64>,
    pub mark_color: Option<String>,
    pub mark_position: Option<String>,
    /// Only present when the export includes the visit's program.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub program_id: Option<ProgramId>
}

/// The parts of a catch record that the species summary folds over.
#[derive(Debug, Clone, PartialEq)]
pub struct CatchObservation<'a> {
    pub species: &'a str,
    pub fish_count: FishCount,
    pub fork_length: Option<Measurement>,
    pub weight: Option<Measurement>
}

impl CatchRecord {
    /// Groups missing and blank species names under a single label.
    pub fn species_label(&self) -> &str {
        match self.species_common_name.as_deref().map(str::trim) {
            Some(name) if !name.is_empty() => name,
            _ => UNKNOWN_SPECIES
        }
    }

    /// A missing fish count contributes nothing rather than poisoning the totals.
    pub fn fish_count(&self) -> FishCount {
        self.num_fish_caught.unwrap_or(0)
    }

    pub fn observe(&self) -> CatchObservation<'_> {
        CatchObservation {
            species: self.species_label(),
            fish_count: self.fish_count(),
            fork_length: Measurement::from_field(self.fork_length.as_deref()),
            weight: Measurement::from_field(self.weight.as_deref())
        }
    }
}
