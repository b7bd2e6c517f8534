//! Table definition: everything the engine needs besides the forest.

use std::fmt;
use std::sync::Arc;

use crate::model::Node;

use super::column::{Column, Resolvable};
use super::render::Row;

/// Customizes a row once its whole subtree has been derived.
pub type RowAlterFn = Arc<dyn Fn(&mut Row, &Node) + Send + Sync>;

/// Called after every full render.
pub type ChangeFn = Arc<dyn Fn() + Send + Sync>;

/// Default indentation per tree level.
pub const DEFAULT_INDENT_SIZE: u32 = 20;

/// Row-level settings shared by every body row.
#[derive(Clone, Default)]
pub struct RowSpec {
    /// Class added to each row.
    pub class: Option<Resolvable<String>>,
    /// Per-row customization hook.
    pub alter: Option<RowAlterFn>,
}

impl RowSpec {
    /// Create an empty row spec.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add the same class to every row.
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(Resolvable::Literal(class.into()));
        self
    }

    /// Compute the row class from each node.
    pub fn class_with(mut self, f: impl Fn(&Node) -> String + Send + Sync + 'static) -> Self {
        self.class = Some(Resolvable::derived(f));
        self
    }

    /// Customize each row after its subtree is derived.
    pub fn alter(mut self, f: impl Fn(&mut Row, &Node) + Send + Sync + 'static) -> Self {
        self.alter = Some(Arc::new(f));
        self
    }
}

impl fmt::Debug for RowSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RowSpec")
            .field("class", &self.class)
            .field("alter", &self.alter.as_ref().map(|_| ".."))
            .finish()
    }
}

/// Table configuration.
///
/// The column list fixes the column order and pairs each header cell with
/// the body cell at the same position in every row.
///
/// # Example
///
/// ```
/// use tabletree::table::{Column, RowSpec, TableDef};
///
/// let def = TableDef::new()
///     .collapsed(true)
///     .indent_size(2)
///     .column(Column::new("name").heading("Name").indent())
///     .column(Column::new("size").heading("Size"))
///     .rows(RowSpec::new().class("entry"));
///
/// assert_eq!(def.columns.len(), 2);
/// ```
#[derive(Clone)]
pub struct TableDef {
    /// Collapse state given to nodes that do not set one.
    pub collapsed: bool,
    /// Indentation per tree level for indented columns.
    pub indent_size: u32,
    /// Ordered column specifications.
    pub columns: Vec<Column>,
    /// Pseudo-node the header row is derived from.
    pub header: Node,
    /// Row-level settings.
    pub rows: RowSpec,
    /// The body scrolls independently of a fixed header.
    pub scrollable: bool,
    /// Class added to the table.
    pub class: Option<String>,
    /// Called after every full render.
    pub on_change: Option<ChangeFn>,
}

impl Default for TableDef {
    fn default() -> Self {
        Self {
            collapsed: false,
            indent_size: DEFAULT_INDENT_SIZE,
            columns: Vec::new(),
            header: Node::new(),
            rows: RowSpec::default(),
            scrollable: false,
            class: None,
            on_change: None,
        }
    }
}

impl TableDef {
    /// Create a definition with default settings and no columns.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the default collapse state.
    pub fn collapsed(mut self, collapsed: bool) -> Self {
        self.collapsed = collapsed;
        self
    }

    /// Set the indentation per tree level.
    pub fn indent_size(mut self, size: u32) -> Self {
        self.indent_size = size;
        self
    }

    /// Append a column.
    pub fn column(mut self, column: Column) -> Self {
        self.columns.push(column);
        self
    }

    /// Replace all columns.
    pub fn columns(mut self, columns: Vec<Column>) -> Self {
        self.columns = columns;
        self
    }

    /// Set the header pseudo-node.
    pub fn header(mut self, header: Node) -> Self {
        self.header = header;
        self
    }

    /// Set the row-level settings.
    pub fn rows(mut self, rows: RowSpec) -> Self {
        self.rows = rows;
        self
    }

    /// Let the body scroll under a fixed header.
    pub fn scrollable(mut self) -> Self {
        self.scrollable = true;
        self
    }

    /// Add a class to the table.
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    /// Register the render notification hook.
    pub fn on_change(mut self, f: impl Fn() + Send + Sync + 'static) -> Self {
        self.on_change = Some(Arc::new(f));
        self
    }
}

impl fmt::Debug for TableDef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TableDef")
            .field("collapsed", &self.collapsed)
            .field("indent_size", &self.indent_size)
            .field("columns", &self.columns)
            .field("header", &self.header)
            .field("rows", &self.rows)
            .field("scrollable", &self.scrollable)
            .field("class", &self.class)
            .field("on_change", &self.on_change.as_ref().map(|_| ".."))
            .finish()
    }
}
