mod args;
mod errors;
mod report_config;
#[cfg(test)]
mod tests;

pub use args::Args;
pub use report_config::{ReportConfig, ReportWindow};
