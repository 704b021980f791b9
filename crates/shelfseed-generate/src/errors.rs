use thiserror::Error;

/// Errors emitted by the transaction generator.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// A referenced entity table has no rows to draw ids from.
    #[error("cannot generate rows: '{0}' is empty")]
    EmptyParent(&'static str),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}
