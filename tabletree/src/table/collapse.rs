//! Collapse state transitions.

use log::debug;

use crate::error::{Result, TableTreeError};
use crate::model::{Node, NodePath};

use super::render::visible_nodes;

/// Flips the collapse state of the node at `path`.
///
/// An unset state counts as expanded, so it becomes collapsed. Only the
/// addressed node changes. Returns the new state.
pub fn toggle_collapsed(forest: &mut [Node], path: &NodePath) -> Result<bool> {
    let node = path
        .resolve_mut(forest)
        .ok_or_else(|| TableTreeError::InvalidPath(path.clone()))?;
    let collapsed = node.is_expanded();
    node.collapsed = Some(collapsed);
    debug!("Toggled {path}: collapsed = {collapsed}");
    Ok(collapsed)
}

/// Handles a click on body row `row`.
///
/// The row is mapped to its node through the same traversal the renderer
/// uses, against the forest as it is now. Rows whose node has no children
/// or is uncollapsible ignore the click and return `Ok(false)`.
pub fn toggle_row(forest: &mut [Node], row: usize) -> Result<bool> {
    let visible = visible_nodes(forest);
    let Some(flat) = visible.get(row) else {
        return Err(TableTreeError::RowOutOfRange {
            row,
            len: visible.len(),
        });
    };

    let collapsible = flat.path.resolve(forest).is_some_and(Node::is_collapsible);
    if !collapsible {
        return Ok(false);
    }

    toggle_collapsed(forest, &flat.path)?;
    Ok(true)
}

/// Sets every collapsible node in the forest to `collapsed`.
///
/// Uncollapsible nodes keep their state.
pub fn set_all_collapsed(nodes: &mut [Node], collapsed: bool) {
    for node in nodes {
        if node.is_collapsible() {
            node.collapsed = Some(collapsed);
        }
        set_all_collapsed(&mut node.children, collapsed);
    }
}
