use thiserror::Error;

#[derive(Debug, Error)]
pub enum MeasurementError {
    #[error("Measurement error: Value is an empty string")]
    Empty,
    #[error("Measurement error: '{0}' is not a finite decimal")]
    InvalidFormat(String)
}

#[derive(Debug, Error)]
pub enum TimestampError {
    #[error("Timestamp error: Value is an empty string")]
    Empty,
    #[error("Timestamp error: '{0}' is not a recognised date or date-time")]
    InvalidFormat(String)
}
