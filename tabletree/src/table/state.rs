//! Table tree state owned on behalf of a host.

use log::info;

use crate::error::Result;
use crate::model::{Node, set_default_collapsed};

use super::collapse::{set_all_collapsed, toggle_row};
use super::definition::TableDef;
use super::render::{RenderedTable, render};
use super::sort::sort_by_column;

/// A forest plus its table definition, driven by user gestures.
///
/// `TableTree` wires the engine's operations into the
/// "mutate, then re-derive everything" loop:
/// - header clicks sort the whole forest by that column
/// - row clicks toggle the collapse state of the row's node
/// - every handled gesture returns a fresh full render
///
/// # Example
///
/// ```
/// use tabletree::model::Node;
/// use tabletree::table::{Column, TableDef, TableTree};
///
/// let forest = vec![
///     Node::new().set("name", "a").child(Node::new().set("name", "a1")),
///     Node::new().set("name", "b"),
/// ];
/// let def = TableDef::new().column(Column::new("name").heading("Name").indent());
///
/// let mut table = TableTree::new(def, forest);
/// assert_eq!(table.render().row_count(), 3);
///
/// // collapse "a"
/// let view = table.click_row(0).unwrap().expect("row 0 is collapsible");
/// assert_eq!(view.row_count(), 2);
/// ```
#[derive(Debug)]
pub struct TableTree {
    /// The data being shown.
    forest: Vec<Node>,
    /// The table configuration.
    def: TableDef,
    /// Set by mutations, cleared by `render`.
    dirty: bool,
}

impl TableTree {
    /// Create a table tree. Nothing is rendered until [`render`](Self::render).
    pub fn new(def: TableDef, forest: Vec<Node>) -> Self {
        Self {
            forest,
            def,
            dirty: true,
        }
    }

    // -------------------------------------------------------------------------
    // Access
    // -------------------------------------------------------------------------

    /// The forest in its current order and collapse state.
    pub fn forest(&self) -> &[Node] {
        &self.forest
    }

    /// Mutable access to the forest. Marks the table dirty.
    pub fn forest_mut(&mut self) -> &mut Vec<Node> {
        self.dirty = true;
        &mut self.forest
    }

    /// The table definition.
    pub fn definition(&self) -> &TableDef {
        &self.def
    }

    /// Mutable access to the definition. Marks the table dirty.
    pub fn definition_mut(&mut self) -> &mut TableDef {
        self.dirty = true;
        &mut self.def
    }

    /// Whether state changed since the last render.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Give the forest and definition back to the host.
    pub fn into_parts(self) -> (TableDef, Vec<Node>) {
        (self.def, self.forest)
    }

    // -------------------------------------------------------------------------
    // Rendering
    // -------------------------------------------------------------------------

    /// Derive the full table from the current state.
    pub fn render(&mut self) -> RenderedTable {
        let table = render(&mut self.forest, &self.def);
        self.dirty = false;
        table
    }

    // -------------------------------------------------------------------------
    // Gestures
    // -------------------------------------------------------------------------

    /// Header click on column `column`.
    ///
    /// Returns the re-rendered table, or `None` when the column is
    /// unsortable and the click was ignored.
    pub fn click_header(&mut self, column: usize) -> Result<Option<RenderedTable>> {
        if !sort_by_column(&mut self.forest, &mut self.def.columns, column)? {
            return Ok(None);
        }
        info!(
            "Sorted by column {} ({})",
            column, self.def.columns[column].sort
        );
        self.dirty = true;
        Ok(Some(self.render()))
    }

    /// Click on body row `row` of the current view.
    ///
    /// Unset collapse states take the table default first, so rows map to
    /// the nodes a render shows even before the first render.
    ///
    /// Returns the re-rendered table, or `None` when the row's node cannot
    /// be collapsed and the click was ignored.
    pub fn click_row(&mut self, row: usize) -> Result<Option<RenderedTable>> {
        set_default_collapsed(&mut self.forest, self.def.collapsed);
        if !toggle_row(&mut self.forest, row)? {
            return Ok(None);
        }
        info!("Toggled row {row}");
        self.dirty = true;
        Ok(Some(self.render()))
    }

    /// Expand every collapsible node.
    pub fn expand_all(&mut self) {
        set_all_collapsed(&mut self.forest, false);
        self.dirty = true;
    }

    /// Collapse every collapsible node.
    pub fn collapse_all(&mut self) {
        set_all_collapsed(&mut self.forest, true);
        self.dirty = true;
    }
}
