mod errors;
mod report_engine;
mod scope;
mod summarizer;

pub use report_engine::ReportEngine;
pub use scope::ReportScope;
pub use summarizer::summarize;
