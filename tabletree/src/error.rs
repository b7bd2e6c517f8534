//! Error types for the table tree engine.

use thiserror::Error;

use crate::model::NodePath;

/// Errors raised by the engine.
///
/// Rendering itself never fails: missing optional configuration degrades to
/// empty defaults. Errors only surface when a host addresses something that
/// does not exist in the current tree or definition.
#[derive(Debug, Error)]
pub enum TableTreeError {
    /// A row click referenced a row outside the current flattened view.
    #[error("row {row} is out of range ({len} visible rows)")]
    RowOutOfRange {
        /// The requested row index.
        row: usize,
        /// Number of rows in the current view.
        len: usize,
    },

    /// A header click referenced a column that is not defined.
    #[error("column {column} is out of range ({len} columns)")]
    ColumnOutOfRange {
        /// The requested column index.
        column: usize,
        /// Number of configured columns.
        len: usize,
    },

    /// A node path does not resolve to a node in the forest.
    #[error("no node at path {0}")]
    InvalidPath(NodePath),

    /// The forest could not be parsed from JSON.
    #[error("invalid forest json: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result alias for engine operations.
pub type Result<T> = std::result::Result<T, TableTreeError>;
