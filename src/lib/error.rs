use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Csv(#[from] csv::Error),
    #[error("Cannot find value for {0} column")]
    ColumnNotFound(String),
    #[error("Cannot parse {0:?} value as {1} in {2} column")]
    ColumnParseError(String, &'static str, String),
    #[error("Cannot serialize catalog record for output")]
    Json(#[source] serde_json::Error),
    #[error("Cannot write catalog record into output stream")]
    OutputError,
    #[error("Record writer stopped before the feed was fully processed")]
    Synchronization,
}
