//! Recursive multi-level sorting.

use std::cmp::Ordering;
use std::sync::Arc;

use log::debug;

use crate::error::{Result, TableTreeError};
use crate::model::{Node, Value};

use super::column::{Column, Comparator, SortDirection, ValueSource};

/// The default key ordering: the larger key sorts first.
///
/// Keys are compared with [`Value::greater_than`]. Keys that are neither
/// greater nor smaller than each other (equal, undefined or incomparable)
/// are `Equal`, which keeps their relative order.
pub fn default_comparator(a: Option<&Value>, b: Option<&Value>) -> Ordering {
    if Value::greater_than(a, b) {
        Ordering::Less
    } else if Value::greater_than(b, a) {
        Ordering::Greater
    } else {
        Ordering::Equal
    }
}

/// Returns the function that extracts a column's sort key from a node.
///
/// `sortvalue` wins over `value`; either may name a field or derive the key.
pub fn resolve_key(column: &Column) -> ValueSource {
    column
        .sortvalue
        .clone()
        .unwrap_or_else(|| column.value.clone())
}

/// Returns the column's comparator, or the default one.
pub fn resolve_comparator(column: &Column) -> Comparator {
    match &column.comparator {
        Some(compare) => Arc::clone(compare),
        None => Arc::new(default_comparator),
    }
}

/// Sorts every sibling list of the forest by `column`.
///
/// `Up` applies the comparator as is. `Down` and `None` both apply its
/// reverse, so they produce the same order. Children are sorted before
/// their parent's level, and collapsed subtrees are sorted too.
pub fn sort_forest(forest: &mut [Node], column: &Column) {
    let key = resolve_key(column);
    let compare = resolve_comparator(column);
    let ascending = column.sort == SortDirection::Up;

    debug!("Sorting by {:?} ({})", key, column.sort);
    sort_level(forest, &key, &|a: Option<&Value>, b: Option<&Value>| {
        let ordering = compare(a, b);
        if ascending { ordering } else { ordering.reverse() }
    });
}

fn sort_level(
    nodes: &mut [Node],
    key: &ValueSource,
    compare: &dyn Fn(Option<&Value>, Option<&Value>) -> Ordering,
) {
    for node in nodes.iter_mut() {
        if node.has_children() {
            sort_level(&mut node.children, key, compare);
        }
    }

    // A panicking key or comparator leaves every node in the slice.
    nodes.sort_by(|a, b| compare(key.get(a).as_ref(), key.get(b).as_ref()));
}

/// Handles a header click on column `index`.
///
/// Cycles that column's direction (`None → Up → Down → Up`), resets every
/// other column to `None`, then sorts the forest. Returns `Ok(false)`
/// without touching anything when the column is unsortable.
pub fn sort_by_column(forest: &mut [Node], columns: &mut [Column], index: usize) -> Result<bool> {
    let len = columns.len();
    let Some(column) = columns.get(index) else {
        return Err(TableTreeError::ColumnOutOfRange { column: index, len });
    };
    if !column.is_sortable() {
        return Ok(false);
    }

    let direction = column.sort.next();
    for column in columns.iter_mut() {
        column.sort = SortDirection::None;
    }
    columns[index].sort = direction;

    sort_forest(forest, &columns[index]);
    Ok(true)
}
