//! CLI error type.

use std::path::PathBuf;

use tabletree::TableTreeError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("cannot read {}: {source}", path.display())]
    ReadForest {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("cannot open log file {}: {source}", path.display())]
    LogFile {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("logger error: {0}")]
    Logger(#[from] log::SetLoggerError),
    #[error(transparent)]
    Table(#[from] TableTreeError),
    #[error("unknown column: {0}")]
    UnknownColumn(String),
}
