//! Sortable, collapsible table rendering of a forest.
//!
//! The table is described by a [`TableDef`] (columns, row settings and
//! defaults) and derived from the forest by [`render`]. Two gestures
//! mutate state: [`sort_by_column`] for header clicks and [`toggle_row`]
//! for row clicks. After either, the host renders again from scratch.
//!
//! # Example
//!
//! ```
//! use tabletree::model::Node;
//! use tabletree::table::{Column, TableDef, render, sort_by_column};
//!
//! let mut forest = vec![
//!     Node::new().set("name", "b").set("size", 2),
//!     Node::new().set("name", "a").set("size", 10),
//! ];
//! let mut def = TableDef::new()
//!     .column(Column::new("name").heading("Name"))
//!     .column(Column::new("size").heading("Size"));
//!
//! sort_by_column(&mut forest, &mut def.columns, 0).unwrap();
//! let view = render(&mut forest, &def);
//! assert_eq!(view.body[0].cells[0].text(), "b");
//! ```

mod collapse;
mod column;
mod definition;
mod layout;
mod render;
mod sort;
mod state;

pub use collapse::{set_all_collapsed, toggle_collapsed, toggle_row};
pub use column::{
    CellAlterFn, CellPosition, Column, Comparator, FormatFn, Resolvable, SortDirection,
    ValueFn, ValueSource,
};
pub use definition::{ChangeFn, DEFAULT_INDENT_SIZE, RowAlterFn, RowSpec, TableDef};
pub use layout::distribute_widths;
pub use render::{
    Cell, FlatNode, RenderedTable, Row, flatten, header_cells, render, visible_nodes,
};
pub use sort::{default_comparator, resolve_comparator, resolve_key, sort_by_column, sort_forest};
pub use state::TableTree;
