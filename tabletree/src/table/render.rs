//! Row flattening and cell derivation.
//!
//! Rendering is a pure re-derivation: the forest and definition go in, a
//! [`RenderedTable`] comes out. Nothing is cached between renders, so a
//! host redraws after any mutation simply by calling [`render`] again.

use log::{debug, trace};

use crate::model::{Node, NodePath, Value, set_default_collapsed};

use super::column::{CellPosition, Column};
use super::definition::TableDef;

/// A derived cell, ready for a rendering adapter.
#[derive(Debug, Clone, PartialEq)]
pub struct Cell {
    /// Index of the column this cell was derived from.
    pub column: usize,
    /// Display content. `None` renders as empty.
    pub content: Option<Value>,
    /// Classes for the cell content.
    pub classes: Vec<String>,
    /// Classes for the enclosing cell container.
    pub container_classes: Vec<String>,
    /// Column span, when configured.
    pub colspan: Option<u32>,
    /// Row span, when configured.
    pub rowspan: Option<u32>,
    /// Left indentation, for indented columns.
    pub indent: Option<u32>,
}

impl Cell {
    /// Whether the cell carries `class`.
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Content as display text; undefined content is empty.
    pub fn text(&self) -> String {
        self.content
            .as_ref()
            .map(ToString::to_string)
            .unwrap_or_default()
    }

    /// Add a class unless it is already present.
    pub fn add_class(&mut self, class: &str) {
        push_classes(&mut self.classes, Some(class));
    }
}

/// A derived body row: one visible node.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    /// Path of the node this row shows.
    pub node: NodePath,
    /// Tree depth of the node.
    pub depth: usize,
    /// Index of the node among its siblings.
    pub sibling_index: usize,
    /// Row classes.
    pub classes: Vec<String>,
    /// Whether a click on this row toggles the node.
    pub collapsible: bool,
    /// The node's collapse state at render time.
    pub collapsed: Option<bool>,
    /// Cells in column order. Skipped cells are absent.
    pub cells: Vec<Cell>,
}

impl Row {
    /// Whether the row carries `class`.
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Add a class unless it is already present.
    pub fn add_class(&mut self, class: &str) {
        push_classes(&mut self.classes, Some(class));
    }

    /// The cell derived from column `column`, if it was not skipped.
    pub fn cell(&self, column: usize) -> Option<&Cell> {
        self.cells.iter().find(|c| c.column == column)
    }
}

/// The full output of one render.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedTable {
    /// Table class from the definition.
    pub class: Option<String>,
    /// The body scrolls independently of the header.
    pub scrollable: bool,
    /// Header cells, one per column.
    pub header: Vec<Cell>,
    /// Body rows in display order.
    pub body: Vec<Row>,
}

impl RenderedTable {
    /// Number of body rows.
    pub fn row_count(&self) -> usize {
        self.body.len()
    }

    /// Number of header cells.
    pub fn column_count(&self) -> usize {
        self.header.len()
    }
}

/// A node in the collapse-aware pre-order traversal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlatNode {
    /// Path to the node.
    pub path: NodePath,
    /// Depth in tree (0 = root).
    pub depth: usize,
}

/// Renders the table: fills default collapse states, derives the header
/// and body, then fires the definition's change hook.
pub fn render(forest: &mut [Node], def: &TableDef) -> RenderedTable {
    set_default_collapsed(forest, def.collapsed);

    let table = RenderedTable {
        class: def.class.clone(),
        scrollable: def.scrollable,
        header: header_cells(def),
        body: flatten(forest, def),
    };
    debug!(
        "Rendered {} rows x {} columns",
        table.row_count(),
        table.column_count()
    );

    if let Some(on_change) = &def.on_change {
        on_change();
    }
    table
}

/// Derives the header cells from the header pseudo-node.
///
/// Each column's `heading` is the content. Header cells are never skipped
/// and never pass through `format` or `alter`.
pub fn header_cells(def: &TableDef) -> Vec<Cell> {
    def.columns
        .iter()
        .enumerate()
        .map(|(index, column)| {
            derive_cell(column, index, &def.header, column.heading.clone(), def, 0)
        })
        .collect()
}

/// Flattens the forest into body rows.
///
/// Pre-order: each node's row is followed by the rows of its children when
/// the node has children and is not collapsed.
pub fn flatten(forest: &[Node], def: &TableDef) -> Vec<Row> {
    let mut rows = Vec::new();
    flatten_level(forest, def, 0, &NodePath::default(), &mut rows);
    rows
}

fn flatten_level(
    nodes: &[Node],
    def: &TableDef,
    depth: usize,
    parent: &NodePath,
    out: &mut Vec<Row>,
) {
    for (sibling_index, node) in nodes.iter().enumerate() {
        let path = parent.child(sibling_index);

        let mut classes = Vec::new();
        if let Some(class) = &def.rows.class {
            push_classes(&mut classes, Some(class.eval(node).as_str()));
        }

        let cells = derive_row_cells(node, def, depth, sibling_index);
        let index = out.len();
        out.push(Row {
            node: path.clone(),
            depth,
            sibling_index,
            classes,
            collapsible: node.is_collapsible(),
            collapsed: node.collapsed,
            cells,
        });

        if node.has_children() && node.is_expanded() {
            trace!("Descending into {path} ({} children)", node.children.len());
            flatten_level(&node.children, def, depth + 1, &path, out);
        }

        if let Some(alter) = &def.rows.alter {
            alter(&mut out[index], node);
        }
    }
}

fn derive_row_cells(
    node: &Node,
    def: &TableDef,
    depth: usize,
    sibling_index: usize,
) -> Vec<Cell> {
    let mut cells = Vec::with_capacity(def.columns.len());
    for (index, column) in def.columns.iter().enumerate() {
        let mut content = column.value.get(node);
        if let Some(format) = &column.format {
            content = format(content, node);
        }

        if column.skippable && content.is_none() {
            continue;
        }

        let mut cell = derive_cell(column, index, node, content, def, depth);
        if let Some(alter) = &column.alter {
            let position = CellPosition {
                row: sibling_index,
                column: index,
                depth,
            };
            alter(&mut cell, node, position);
        }
        cells.push(cell);
    }
    cells
}

fn derive_cell(
    column: &Column,
    index: usize,
    node: &Node,
    content: Option<Value>,
    def: &TableDef,
    depth: usize,
) -> Cell {
    let mut classes = Vec::new();
    match node.collapsed {
        Some(true) => push_classes(&mut classes, Some("collapsed")),
        Some(false) => push_classes(&mut classes, Some("expanded")),
        None => {}
    }
    push_classes(&mut classes, column.class.as_deref());
    push_classes(&mut classes, node.class.as_deref());

    if column.is_sortable() {
        push_classes(&mut classes, Some("sortable"));
        push_classes(&mut classes, Some(format!("sorted-{}", column.sort).as_str()));
    } else {
        push_classes(&mut classes, Some("unsortable"));
    }

    let mut container_classes = Vec::new();
    push_classes(&mut container_classes, column.cellclass.as_deref());
    push_classes(&mut container_classes, node.cellclass.as_deref());

    let indent = column
        .indent
        .then(|| u32::try_from(depth).unwrap_or(u32::MAX).saturating_mul(def.indent_size));

    Cell {
        column: index,
        content,
        classes,
        container_classes,
        colspan: column.colspan.as_ref().map(|span| span.eval(node)),
        rowspan: column.rowspan.as_ref().map(|span| span.eval(node)),
        indent,
    }
}

/// Appends each whitespace-separated class not already present.
fn push_classes(classes: &mut Vec<String>, class: Option<&str>) {
    let Some(class) = class else { return };
    for name in class.split_whitespace() {
        if !classes.iter().any(|c| c == name) {
            classes.push(name.to_string());
        }
    }
}

/// The nodes a render would show, in row order.
///
/// Uses the same traversal as [`flatten`], so entry `n` is the node behind
/// body row `n` of a render of the same forest state.
pub fn visible_nodes(forest: &[Node]) -> Vec<FlatNode> {
    let mut out = Vec::new();
    collect_visible(forest, 0, &NodePath::default(), &mut out);
    out
}

fn collect_visible(nodes: &[Node], depth: usize, parent: &NodePath, out: &mut Vec<FlatNode>) {
    for (index, node) in nodes.iter().enumerate() {
        let path = parent.child(index);
        out.push(FlatNode {
            path: path.clone(),
            depth,
        });
        if node.has_children() && node.is_expanded() {
            collect_visible(&node.children, depth + 1, &path, out);
        }
    }
}
