use std::collections::HashSet;
use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, StringRecord, Trim};
use serde::de::DeserializeOwned;
use tokio::sync::mpsc;
use tokio::task::{spawn_blocking, JoinHandle};
use tracing::{debug, error, info, warn};

use crate::config::ReportConfig;
use crate::engine::errors::EngineError;
use crate::engine::scope::{ReportScope, Scoped};
use crate::engine::summarize;
use crate::models::{CatchRecord, Report, TrapVisit};

/// Builds a report by streaming the catch and trap visit exports through the window filter.
pub struct ReportEngine {
    config: ReportConfig,
    backpressure: usize
}

impl ReportEngine {
    /// Creates a new engine instance for the provided report configuration.
    pub fn new(config: ReportConfig) -> Self {
        Self {
            config,
            backpressure: 256
        }
    }

    /// Reads both exports concurrently, keeps the rows inside the reporting scope and
    /// summarises the catches when the report calls for it.
    pub async fn run(&self) -> Result<Report, EngineError> {
        let (catch_sender, catch_receiver) = mpsc::channel::<CatchRecord>(self.backpressure);
        let (trap_sender, trap_receiver) = mpsc::channel::<TrapVisit>(self.backpressure);

        let catch_handle = spawn_csv_reader(self.config.catch_records.clone(), catch_sender);
        let trap_handle = spawn_csv_reader(self.config.trap_visits.clone(), trap_sender);

        let (catch_results, trap_results) = tokio::join!(
            collect_in_scope(&self.config.scope, catch_receiver),
            collect_in_scope(&self.config.scope, trap_receiver)
        );

        await_reader(&self.config.catch_records, catch_handle).await?;
        await_reader(&self.config.trap_visits, trap_handle).await?;

        info!("Collected [{}] catch records and [{}] trap visits in scope", catch_results.len(), trap_results.len());

        let catch_summary_results = self.config.include_summary
            .then(|| summarize(&catch_results));

        Ok(Report {
            catch_results,
            trap_results,
            catch_summary_results
        })
    }
}

fn spawn_csv_reader<T>(path: PathBuf, sender: mpsc::Sender<T>) -> JoinHandle<Result<usize, EngineError>>
where
    T: DeserializeOwned + Send + 'static,
{
    spawn_blocking(move || {
        let mut reader = ReaderBuilder::new()
            .trim(Trim::All)
            .flexible(true)
            .from_path(&path)
            .map_err(|source| EngineError::Open { path: path.clone(), source })?;

        let headers = reader.headers()
            .map_err(|source| EngineError::Header { path: path.clone(), source })?;
        let headers = deduplicate_headers(headers);
        reader.set_headers(headers);

        let mut rows = 0;

        for result in reader.deserialize::<T>() {
            match result {
                Ok(row) => {
                    rows += 1;

                    if sender.blocking_send(row).is_err() {
                        break;
                    }
                }
                Err(error) => {
                    error!("CSV deserialization error in [{}]: {error}", path.display());
                }
            }
        }

        debug!("Read [{rows}] rows from [{}]", path.display());

        Ok(rows)
    })
}

/// Keeps the first occurrence of each column name. Later repeats get a name no row type
/// reads, so serde ignores them instead of rejecting every row as a duplicate field.
fn deduplicate_headers(headers: &StringRecord) -> StringRecord {
    let mut seen = HashSet::new();

    headers.iter()
        .enumerate()
        .map(|(position, name)| {
            if seen.insert(name) {
                name.to_string()
            } else {
                warn!("Ignoring repeated CSV column [{name}] at position [{position}]");
                format!("{name}#{position}")
            }
        })
        .collect()
}

async fn collect_in_scope<T: Scoped>(scope: &ReportScope, mut receiver: mpsc::Receiver<T>) -> Vec<T> {
    let mut rows = Vec::new();

    while let Some(row) = receiver.recv().await {
        if scope.admits(&row) {
            rows.push(row);
        }
    }

    rows
}

async fn await_reader(path: &Path, handle: JoinHandle<Result<usize, EngineError>>) -> Result<usize, EngineError> {
    handle.await
        .map_err(|source| EngineError::Reader { path: path.to_path_buf(), source })?
}
