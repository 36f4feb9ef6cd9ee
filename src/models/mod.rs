mod accumulator;
mod catch_record;
mod report;
mod summary;
mod trap_visit;

pub use accumulator::SpeciesAccumulator;
pub use catch_record::{CatchObservation, CatchRecord};
pub use report::Report;
pub use summary::{Average, SummaryRow};
pub use trap_visit::TrapVisit;

/// Label of the grand-total row, always first in a summary.
pub const ALL_SPECIES: &str = "All";
/// Label for catches whose species could not be resolved.
pub const UNKNOWN_SPECIES: &str = "Unknown";
