mod errors;
mod flag;
mod measurement;
mod timestamp;

pub use flag::deserialize_optional_flag;
pub use measurement::Measurement;
pub use timestamp::deserialize_optional_timestamp;

pub type ProgramId = u32;
pub type FishCount = i64;
