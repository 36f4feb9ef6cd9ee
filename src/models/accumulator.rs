use rust_decimal::Decimal;
use tracing::error;

use crate::models::{Average, CatchObservation, SummaryRow};
use crate::types::{FishCount, Measurement};

/// Running sum and count of the measurements that were actually taken.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MeasurementTally {
    sum: Decimal,
    count: u64
}

impl MeasurementTally {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, measurement: Measurement) {
        match self.sum.checked_add(measurement.value()) {
            Some(sum) => {
                self.sum = sum;
                self.count += 1;
            }
            None => error!("Measurement sum overflowed, dropping value [{measurement}]")
        }
    }

    pub fn accepts(&self, measurement: Measurement) -> bool {
        self.sum.checked_add(measurement.value()).is_some()
    }

    pub fn count(&self) -> u64 {
        self.count
    }

    pub fn average(&self) -> Average {
        Average::from_tally(self.sum, self.count)
    }
}

/// Accumulates catch totals for one species (or for every species under "All").
///
/// Created the first time a species is seen and only ever grows as records are folded in.
#[derive(Debug, Clone, PartialEq)]
pub struct SpeciesAccumulator {
    pub species: String,
    pub total_fish_count: FishCount,
    pub fork_length: MeasurementTally,
    pub weight: MeasurementTally
}

impl SpeciesAccumulator {
    pub fn new(species: &str) -> Self {
        Self {
            species: species.to_string(),
            total_fish_count: 0,
            fork_length: MeasurementTally::new(),
            weight: MeasurementTally::new()
        }
    }

    /// Whether the observation fits without overflowing any running total.
    pub fn accepts(&self, observation: &CatchObservation) -> bool {
        self.total_fish_count.checked_add(observation.fish_count).is_some()
            && observation.fork_length.is_none_or(|value| self.fork_length.accepts(value))
            && observation.weight.is_none_or(|value| self.weight.accepts(value))
    }

    /// Folds a single observation into the running totals.
    ///
    /// Absent measurements leave their tally untouched; they are never counted as zero.
    pub fn apply(&mut self, observation: &CatchObservation) {
        match self.total_fish_count.checked_add(observation.fish_count) {
            Some(total) => self.total_fish_count = total,
            None => error!("Fish count for [{}] overflowed, dropping [{}]", self.species, observation.fish_count)
        }

        if let Some(fork_length) = observation.fork_length {
            self.fork_length.record(fork_length);
        }

        if let Some(weight) = observation.weight {
            self.weight.record(weight);
        }
    }
}

impl From<SpeciesAccumulator> for SummaryRow {
    fn from(accumulator: SpeciesAccumulator) -> Self {
        SummaryRow {
            species: accumulator.species,
            total_fish_caught: accumulator.total_fish_count,
            fork_length_record_count: accumulator.fork_length.count(),
            average_fork_length: accumulator.fork_length.average(),
            weight_record_count: accumulator.weight.count(),
            average_weight: accumulator.weight.average()
        }
    }
}
