use crate::types::errors::MeasurementError;
use rust_decimal::Decimal;
use std::fmt;
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use tracing::debug;

/// A single biological measurement (fork length or weight) taken from a catch record.
///
/// The data layer hands numeric columns over as text, so a `Measurement` is only ever
/// built by parsing. Values are kept as exact decimals to avoid drifting averages.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd)]
pub struct Measurement(Decimal);

impl Measurement {
    /// Parses an optional raw column value, treating absent, empty and malformed text as
    /// "not measured".
    pub fn from_field(field: Option<&str>) -> Option<Measurement> {
        let raw = field?;

        match raw.parse() {
            Ok(measurement) => Some(measurement),
            Err(MeasurementError::Empty) => None,
            Err(error) => {
                debug!("Skipping unparseable measurement: {error}");
                None
            }
        }
    }

    pub fn value(&self) -> Decimal {
        self.0
    }
}

impl Display for Measurement {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}", self.0)
    }
}

impl FromStr for Measurement {
    type Err = MeasurementError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let value = value.trim();

        if value.is_empty() {
            return Err(MeasurementError::Empty);
        }

        //NOTE: Decimal has no NaN or infinity, so anything it accepts is finite
        Decimal::from_str(value)
            .or_else(|_| Decimal::from_scientific(value))
            .map(Measurement)
            .map_err(|_| MeasurementError::InvalidFormat(value.to_string()))
    }
}
