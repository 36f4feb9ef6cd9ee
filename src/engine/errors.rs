use std::path::PathBuf;

use thiserror::Error;
use tokio::task::JoinError;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Unable to open CSV at path [{}]: {source}", path.display())]
    Open {
        path: PathBuf,
        source: csv::Error
    },
    #[error("Unable to read CSV header row at path [{}]: {source}", path.display())]
    Header {
        path: PathBuf,
        source: csv::Error
    },
    #[error("CSV reader for [{}] stopped unexpectedly: {source}", path.display())]
    Reader {
        path: PathBuf,
        source: JoinError
    }
}
