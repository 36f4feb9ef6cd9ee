use std::collections::HashMap;

use tracing::error;

use crate::models::{CatchRecord, SpeciesAccumulator, SummaryRow, ALL_SPECIES};

/// Folds catch records into a grand total plus one accumulator per species.
///
/// Species are kept in first-encounter order so that the final sort, which is stable,
/// breaks ties between equal totals by whichever species appeared first.
pub struct CatchSummarizer {
    totals: SpeciesAccumulator,
    species: Vec<SpeciesAccumulator>,
    positions: HashMap<String, usize>
}

impl CatchSummarizer {
    pub fn new() -> Self {
        Self {
            totals: SpeciesAccumulator::new(ALL_SPECIES),
            species: Vec::new(),
            positions: HashMap::new()
        }
    }

    /// Adds one record to the grand total and to its species.
    ///
    /// A record that would overflow either total is dropped from both, so the species rows
    /// always add up to the "All" row.
    pub fn fold(&mut self, record: &CatchRecord) {
        let observation = record.observe();
        let position = self.position_of(observation.species);

        if !self.totals.accepts(&observation) || !self.species[position].accepts(&observation) {
            error!("Totals for [{}] would overflow, dropping record of [{}] fish", observation.species, observation.fish_count);
            return;
        }

        self.totals.apply(&observation);
        self.species[position].apply(&observation);
    }

    fn position_of(&mut self, species: &str) -> usize {
        if let Some(&position) = self.positions.get(species) {
            return position;
        }

        self.species.push(SpeciesAccumulator::new(species));
        let position = self.species.len() - 1;
        self.positions.insert(species.to_string(), position);
        position
    }

    /// Emits the "All" row followed by the species rows, largest catch first.
    pub fn finish(self) -> Vec<SummaryRow> {
        let mut species = self.species;
        species.sort_by(|a, b| b.total_fish_count.cmp(&a.total_fish_count));

        let mut rows = Vec::with_capacity(species.len() + 1);
        rows.push(SummaryRow::from(self.totals));
        rows.extend(species.into_iter().map(SummaryRow::from));
        rows
    }
}

/// Summarises a window of catch records in a single pass.
pub fn summarize(records: &[CatchRecord]) -> Vec<SummaryRow> {
    let mut summarizer = CatchSummarizer::new();

    for record in records {
        summarizer.fold(record);
    }

    summarizer.finish()
}
