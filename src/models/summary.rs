use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Serialize, Serializer};
use std::fmt;
use std::fmt::{Display, Formatter};

use crate::types::FishCount;

const AVERAGE_DECIMAL_PLACES: u32 = 2;
const NOT_AVAILABLE: &str = "NA";

/// An average rounded half away from zero to exactly two fraction digits, or "NA" when
/// nothing was measured.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Average {
    Value(Decimal),
    NotAvailable
}

impl Average {
    pub fn from_tally(sum: Decimal, count: u64) -> Self {
        if count == 0 {
            return Average::NotAvailable;
        }

        match sum.checked_div(Decimal::from(count)) {
            Some(mean) => {
                let mut rounded = mean.round_dp_with_strategy(AVERAGE_DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero);
                rounded.rescale(AVERAGE_DECIMAL_PLACES);
                Average::Value(rounded)
            }
            None => Average::NotAvailable
        }
    }
}

impl Display for Average {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Average::Value(value) => write!(formatter, "{value}"),
            Average::NotAvailable => formatter.write_str(NOT_AVAILABLE)
        }
    }
}

impl Serialize for Average {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

/// One line of the catch summary table.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryRow {
    pub species: String,
    pub total_fish_caught: FishCount,
    pub fork_length_record_count: u64,
    pub average_fork_length: Average,
    pub weight_record_count: u64,
    pub average_weight: Average
}
