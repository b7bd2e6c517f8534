use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use tabletree::model::{Node, Value};
use tabletree::table::{
    Column, RowSpec, SortDirection, TableDef, flatten, header_cells, render, visible_nodes,
};

fn named(name: &str) -> Node {
    Node::new().set("name", name)
}

/// `[A[B, C], D]`
fn abcd(collapsed: Option<bool>) -> Vec<Node> {
    let mut a = named("A").child(named("B")).child(named("C"));
    a.collapsed = collapsed;
    vec![a, named("D")]
}

fn name_table() -> TableDef {
    TableDef::new().column(Column::new("name").heading("Name").indent())
}

fn names(forest: &mut [Node], def: &TableDef) -> Vec<String> {
    render(forest, def)
        .body
        .iter()
        .map(|row| row.cells[0].text())
        .collect()
}

// ============================================================================
// Traversal Tests
// ============================================================================

#[test]
fn test_expanded_traversal_order() {
    let mut forest = abcd(Some(false));
    assert_eq!(names(&mut forest, &name_table()), ["A", "B", "C", "D"]);
}

#[test]
fn test_collapsed_traversal_order() {
    let mut forest = abcd(Some(true));
    assert_eq!(names(&mut forest, &name_table()), ["A", "D"]);
}

#[test]
fn test_unset_state_follows_table_default() {
    let mut forest = abcd(None);
    assert_eq!(names(&mut forest, &name_table().collapsed(true)), ["A", "D"]);
    assert_eq!(forest[0].collapsed, Some(true), "default written back");

    let mut forest = abcd(None);
    assert_eq!(names(&mut forest, &name_table()), ["A", "B", "C", "D"]);
    assert_eq!(forest[0].collapsed, Some(false));
}

#[test]
fn test_unset_state_without_default_fill_is_expanded() {
    let forest = abcd(None);
    assert_eq!(flatten(&forest, &name_table()).len(), 4);
}

#[test]
fn test_rows_carry_depth_and_paths() {
    let mut forest = vec![
        named("A").child(named("B").child(named("C"))),
        named("D"),
    ];
    let view = render(&mut forest, &name_table());

    let depths: Vec<usize> = view.body.iter().map(|r| r.depth).collect();
    assert_eq!(depths, [0, 1, 2, 0]);

    let paths: Vec<String> = view.body.iter().map(|r| r.node.to_string()).collect();
    assert_eq!(paths, ["[0]", "[0.0]", "[0.0.0]", "[1]"]);

    let siblings: Vec<usize> = view.body.iter().map(|r| r.sibling_index).collect();
    assert_eq!(siblings, [0, 0, 0, 1]);
}

#[test]
fn test_visible_nodes_match_rows() {
    let mut forest = vec![
        named("A").child(named("B").collapsed(true).child(named("hidden"))).child(named("C")),
        named("D").child(named("E")),
    ];
    let view = render(&mut forest, &name_table());
    let visible = visible_nodes(&forest);

    assert_eq!(visible.len(), view.row_count());
    for (flat, row) in visible.iter().zip(&view.body) {
        assert_eq!(flat.path, row.node);
        assert_eq!(flat.depth, row.depth);
    }
}

#[test]
fn test_empty_forest_still_has_header() {
    let mut forest: Vec<Node> = Vec::new();
    let view = render(&mut forest, &name_table());

    assert_eq!(view.row_count(), 0);
    assert_eq!(view.column_count(), 1);
    assert_eq!(view.header[0].text(), "Name");
}

// ============================================================================
// Cell Derivation Tests
// ============================================================================

#[test]
fn test_field_and_derived_values() {
    let def = TableDef::new()
        .column(Column::new("name"))
        .column(Column::derived(|n| Some(Value::from(n.children.len() as i64))))
        .column(Column::new("missing"));
    let mut forest = vec![named("A").child(named("B"))];

    let view = render(&mut forest, &def);
    let row = &view.body[0];
    assert_eq!(row.cells.len(), 3);
    assert_eq!(row.cells[0].content, Some(Value::from("A")));
    assert_eq!(row.cells[1].content, Some(Value::Int(1)));
    assert_eq!(row.cells[2].content, None, "missing field is undefined");
    assert_eq!(row.cells[2].text(), "", "undefined renders empty");
}

#[test]
fn test_format_receives_raw_value_and_node() {
    let def = TableDef::new().column(Column::new("size").format(|raw, node| {
        let name = node.get("name").map(ToString::to_string).unwrap_or_default();
        raw.map(|v| Value::from(format!("{name}:{v}")))
    }));
    let mut forest = vec![named("A").set("size", 3)];

    let view = render(&mut forest, &def);
    assert_eq!(view.body[0].cells[0].text(), "A:3");
}

#[test]
fn test_skippable_column_omits_only_undefined_cells() {
    let def = TableDef::new()
        .column(Column::new("name"))
        .column(Column::new("note").skippable())
        .column(Column::new("size"));
    let mut forest = vec![
        named("A").set("note", "hello").set("size", 1),
        named("B").set("size", 2),
    ];

    let view = render(&mut forest, &def);
    assert_eq!(view.body[0].cells.len(), 3);
    assert_eq!(view.body[1].cells.len(), 2);
    assert!(view.body[1].cell(1).is_none());
    assert_eq!(view.body[1].cell(2).unwrap().text(), "2", "later cells keep their column index");
}

#[test]
fn test_skippable_uses_formatted_content() {
    let def = TableDef::new().column(
        Column::new("size")
            .skippable()
            .format(|raw, _| raw.filter(|v| v.as_number().is_some_and(|n| n > 0.0))),
    );
    let mut forest = vec![named("A").set("size", 0), named("B").set("size", 5)];

    let view = render(&mut forest, &def);
    assert!(view.body[0].cells.is_empty());
    assert_eq!(view.body[1].cells.len(), 1);
}

#[test]
fn test_null_is_not_skipped() {
    let def = TableDef::new().column(Column::new("note").skippable());
    let mut forest = vec![named("A").set("note", Value::Null)];

    let view = render(&mut forest, &def);
    assert_eq!(view.body[0].cells.len(), 1);
}

#[test]
fn test_indent_uses_depth_and_indent_size() {
    let def = TableDef::new()
        .indent_size(4)
        .column(Column::new("name").indent())
        .column(Column::new("size"));
    let mut forest = vec![named("A").child(named("B").child(named("C")))];

    let view = render(&mut forest, &def);
    let indents: Vec<Option<u32>> = view.body.iter().map(|r| r.cells[0].indent).collect();
    assert_eq!(indents, [Some(0), Some(4), Some(8)]);
    assert_eq!(view.body[2].cells[1].indent, None, "column not indented");
}

#[test]
fn test_default_indent_size() {
    let mut forest = abcd(Some(false));
    let view = render(&mut forest, &name_table());
    assert_eq!(view.body[1].cells[0].indent, Some(20));
}

#[test]
fn test_spans_literal_and_derived() {
    let def = TableDef::new()
        .column(Column::new("name").colspan(2))
        .column(Column::new("size").rowspan_with(|n| if n.has_children() { 3 } else { 1 }));
    let mut forest = vec![named("A").child(named("B"))];

    let view = render(&mut forest, &def);
    assert_eq!(view.body[0].cells[0].colspan, Some(2));
    assert_eq!(view.body[0].cells[0].rowspan, None);
    assert_eq!(view.body[0].cells[1].rowspan, Some(3));
    assert_eq!(view.body[1].cells[1].rowspan, Some(1));
}

// ============================================================================
// Class Tests
// ============================================================================

#[test]
fn test_sort_classes() {
    let def = TableDef::new()
        .column(Column::new("name"))
        .column(Column::new("size").sorted(SortDirection::Down))
        .column(Column::new("note").unsortable());
    let mut forest = vec![named("A")];

    let view = render(&mut forest, &def);
    let cells = &view.body[0].cells;
    assert!(cells[0].has_class("sortable"));
    assert!(cells[0].has_class("sorted-none"));
    assert!(cells[1].has_class("sorted-down"));
    assert!(cells[2].has_class("unsortable"));
    assert!(!cells[2].classes.iter().any(|c| c.starts_with("sorted-")));
}

#[test]
fn test_collapse_classes() {
    let mut forest = vec![
        named("open").collapsed(false).child(named("leaf")),
        named("shut").collapsed(true).child(named("hidden")),
    ];
    let view = render(&mut forest, &name_table());

    assert_eq!(view.row_count(), 3);
    assert!(view.body[0].cells[0].has_class("expanded"));
    assert!(view.body[2].cells[0].has_class("collapsed"));
    assert!(!view.body[2].cells[0].has_class("expanded"));

    let leaf = &view.body[1].cells[0];
    assert!(!leaf.has_class("expanded") && !leaf.has_class("collapsed"), "leaf has no state");
}

#[test]
fn test_column_and_node_classes_merge() {
    let def = TableDef::new().column(Column::new("name").class("title bold").cellclass("col"));
    let mut forest = vec![named("A").class("dir").cellclass("wide"), named("B")];

    let view = render(&mut forest, &def);
    let a = &view.body[0].cells[0];
    assert_eq!(a.classes[..3], ["title", "bold", "dir"]);
    assert_eq!(a.container_classes, ["col", "wide"]);

    let b = &view.body[1].cells[0];
    assert!(!b.has_class("dir"));
    assert_eq!(b.container_classes, ["col"]);
}

#[test]
fn test_row_class_literal_and_derived() {
    let mut forest = abcd(Some(false));

    let def = name_table().rows(RowSpec::new().class("entry"));
    let view = render(&mut forest, &def);
    assert!(view.body.iter().all(|r| r.has_class("entry")));

    let def = name_table().rows(RowSpec::new().class_with(|n| {
        if n.has_children() { "parent".into() } else { String::new() }
    }));
    let view = render(&mut forest, &def);
    assert!(view.body[0].has_class("parent"));
    assert!(view.body[1].classes.is_empty());
}

// ============================================================================
// Header Tests
// ============================================================================

#[test]
fn test_header_uses_headings_and_header_node() {
    let def = TableDef::new()
        .header(Node::new().class("head"))
        .column(Column::new("name").heading("Name").indent().format(|_, _| None))
        .column(Column::new("size").skippable());

    let header = header_cells(&def);
    assert_eq!(header.len(), 2, "header cells are never skipped");
    assert_eq!(header[0].text(), "Name", "format does not apply to headings");
    assert_eq!(header[0].indent, Some(0));
    assert!(header[0].has_class("head"));
    assert_eq!(header[1].content, None, "absent heading is empty");
}

// ============================================================================
// Hook Tests
// ============================================================================

#[test]
fn test_cell_alter_receives_positions() {
    let seen = Arc::new(std::sync::Mutex::new(Vec::new()));
    let log = Arc::clone(&seen);
    let def = TableDef::new()
        .column(Column::new("name"))
        .column(Column::new("size").alter(move |cell, _, pos| {
            cell.add_class("altered");
            log.lock().unwrap().push((pos.row, pos.column, pos.depth));
        }));
    let mut forest = vec![named("A").child(named("B")).child(named("C")), named("D")];

    let view = render(&mut forest, &def);
    assert!(view.body.iter().all(|r| r.cells[1].has_class("altered")));
    assert!(!view.body[0].cells[0].has_class("altered"));
    assert_eq!(
        *seen.lock().unwrap(),
        [(0, 1, 0), (0, 1, 1), (1, 1, 1), (1, 1, 0)]
    );
}

#[test]
fn test_cell_alter_skipped_with_cell() {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    let def = TableDef::new().column(Column::new("note").skippable().alter(move |_, _, _| {
        counter.fetch_add(1, Ordering::SeqCst);
    }));
    let mut forest = vec![named("A").set("note", "x"), named("B")];

    render(&mut forest, &def);
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[test]
fn test_row_alter_runs_after_subtree() {
    let order = Arc::new(std::sync::Mutex::new(Vec::new()));
    let log = Arc::clone(&order);
    let def = name_table().rows(RowSpec::new().alter(move |row, node| {
        row.add_class("seen");
        let name = node.get("name").map(ToString::to_string).unwrap_or_default();
        log.lock().unwrap().push(name);
    }));
    let mut forest = abcd(Some(false));

    let view = render(&mut forest, &def);
    assert!(view.body.iter().all(|r| r.has_class("seen")));
    assert_eq!(*order.lock().unwrap(), ["B", "C", "A", "D"]);
}

#[test]
fn test_on_change_fires_once_per_render() {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    let def = name_table().on_change(move || {
        counter.fetch_add(1, Ordering::SeqCst);
    });
    let mut forest = abcd(None);

    render(&mut forest, &def);
    assert_eq!(calls.load(Ordering::SeqCst), 1);
    render(&mut forest, &def);
    assert_eq!(calls.load(Ordering::SeqCst), 2);
}

// ============================================================================
// Determinism Tests
// ============================================================================

#[test]
fn test_repeated_render_is_identical() {
    let def = TableDef::new()
        .class("files")
        .scrollable()
        .column(Column::new("name").heading("Name").indent())
        .column(Column::new("size").heading("Size"));
    let mut forest = vec![
        named("A").set("size", 1).child(named("B").set("size", 2)),
        named("C").set("size", 3),
    ];

    let first = render(&mut forest, &def);
    let second = render(&mut forest, &def);
    assert_eq!(first, second);
    assert_eq!(first.class.as_deref(), Some("files"));
    assert!(first.scrollable);
}
