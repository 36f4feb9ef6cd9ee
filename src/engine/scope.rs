use chrono::NaiveDateTime;

use crate::models::{CatchRecord, TrapVisit};
use crate::types::ProgramId;

/// Anything that can be placed inside a reporting window.
pub trait Scoped {
    fn visit_start(&self) -> Option<NaiveDateTime>;
    fn program_id(&self) -> Option<ProgramId>;
}

impl Scoped for CatchRecord {
    fn visit_start(&self) -> Option<NaiveDateTime> {
        self.trap_visit_time_start
    }

    fn program_id(&self) -> Option<ProgramId> {
        self.program_id
    }
}

impl Scoped for TrapVisit {
    fn visit_start(&self) -> Option<NaiveDateTime> {
        self.trap_visit_time_start
    }

    fn program_id(&self) -> Option<ProgramId> {
        self.program_id
    }
}

/// Which monitoring programs and which slice of time a report covers.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportScope {
    pub programs: Vec<ProgramId>,
    pub window_start: NaiveDateTime
}

impl ReportScope {
    pub fn new(programs: Vec<ProgramId>, window_start: NaiveDateTime) -> Self {
        Self { programs, window_start }
    }

    /// A row without a visit start can never fall inside the window. A row without a
    /// program is assumed to have been scoped by whoever exported it.
    pub fn admits<T: Scoped>(&self, row: &T) -> bool {
        let in_window = row.visit_start()
            .is_some_and(|start| start >= self.window_start);

        let in_program = row.program_id()
            .is_none_or(|program| self.programs.contains(&program));

        in_window && in_program
    }
}
