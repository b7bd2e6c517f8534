//! Render a forest of nodes as a sortable, collapsible table.
//!
//! The engine turns tree data plus a column configuration into an ordered
//! sequence of rows and cells. Drawing those rows, wiring clicks and laying
//! out a fixed header are left to the host.

pub mod error;
pub mod model;
pub mod table;

pub use error::{Result, TableTreeError};

pub mod prelude {
    pub use crate::error::{Result, TableTreeError};
    pub use crate::model::{Node, NodePath, Value};
    pub use crate::table::{
        Cell, CellPosition, Column, RenderedTable, Row, RowSpec, SortDirection, TableDef,
        TableTree,
    };
}
