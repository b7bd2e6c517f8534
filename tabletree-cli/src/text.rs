//! Plain-text rendering of a [`RenderedTable`].

use tabletree::table::{Cell, RenderedTable, Row, distribute_widths};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const COLUMN_GAP: &str = "  ";

/// Renders the table as aligned text lines.
///
/// When `width` is given the column widths are stretched or shrunk to fill
/// it; cells that no longer fit are cut.
pub fn render_text(table: &RenderedTable, width: Option<u32>) -> String {
    let gutter = table.row_count().saturating_sub(1).to_string().len();
    let mut widths = natural_widths(table);

    if let Some(width) = width {
        let used = gutter + COLUMN_GAP.len() * widths.len();
        let available = u32::try_from(used).map_or(0, |used| width.saturating_sub(used));
        widths = distribute_widths(available, &to_u32(&widths))
            .into_iter()
            .map(|w| w as usize)
            .collect();
    }

    let mut out = String::new();
    let header: Vec<String> = table.header.iter().map(header_text).collect();
    push_line(&mut out, &" ".repeat(gutter), &header, &widths);

    let rule: usize = gutter + widths.iter().map(|w| w + COLUMN_GAP.len()).sum::<usize>();
    out.push_str(&"-".repeat(rule));
    out.push('\n');

    for (index, row) in table.body.iter().enumerate() {
        let mut texts = vec![String::new(); widths.len()];
        for cell in &row.cells {
            if let Some(slot) = texts.get_mut(cell.column) {
                *slot = body_text(cell, row);
            }
        }
        push_line(&mut out, &format!("{index:>gutter$}"), &texts, &widths);
    }
    out
}

fn natural_widths(table: &RenderedTable) -> Vec<usize> {
    let mut widths: Vec<usize> = table.header.iter().map(|c| header_text(c).width()).collect();
    for row in &table.body {
        for cell in &row.cells {
            if let Some(w) = widths.get_mut(cell.column) {
                *w = (*w).max(body_text(cell, row).width());
            }
        }
    }
    widths
}

fn header_text(cell: &Cell) -> String {
    let arrow = if cell.has_class("sorted-up") {
        " ^"
    } else if cell.has_class("sorted-down") {
        " v"
    } else {
        ""
    };
    format!("{}{arrow}", cell.text())
}

fn body_text(cell: &Cell, row: &Row) -> String {
    let Some(indent) = cell.indent else {
        return cell.text();
    };
    let marker = match (row.collapsible, row.collapsed) {
        (true, Some(true)) => "+ ",
        (true, _) => "- ",
        _ => "  ",
    };
    format!("{}{marker}{}", " ".repeat(indent as usize), cell.text())
}

fn push_line(out: &mut String, gutter: &str, texts: &[String], widths: &[usize]) {
    let mut line = String::from(gutter);
    for (text, &width) in texts.iter().zip(widths) {
        line.push_str(COLUMN_GAP);
        line.push_str(&fit(text, width));
    }
    out.push_str(line.trim_end());
    out.push('\n');
}

/// Pads or cuts `text` to exactly `width` display columns.
fn fit(text: &str, width: usize) -> String {
    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > width {
            break;
        }
        used += w;
        out.push(ch);
    }
    out.push_str(&" ".repeat(width - used));
    out
}

fn to_u32(widths: &[usize]) -> Vec<u32> {
    widths
        .iter()
        .map(|&w| u32::try_from(w).unwrap_or(u32::MAX))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tabletree::model::Node;
    use tabletree::table::{Column, SortDirection, TableDef, render};

    fn sample() -> RenderedTable {
        let def = TableDef::new()
            .indent_size(2)
            .column(Column::new("name").heading("Name").indent())
            .column(Column::new("size").heading("Size").sorted(SortDirection::Up));
        let mut forest = vec![
            Node::new()
                .set("name", "src")
                .set("size", 12)
                .child(Node::new().set("name", "lib.rs").set("size", 9)),
            Node::new().set("name", "README").set("size", 3).collapsed(true),
        ];
        render(&mut forest, &def)
    }

    #[test]
    fn test_fit_pads_and_cuts() {
        assert_eq!(fit("ab", 4), "ab  ");
        assert_eq!(fit("abcdef", 3), "abc");
        assert_eq!(fit("日本", 3), "日 ");
    }

    #[test]
    fn test_render_text_layout() {
        let text = render_text(&sample(), None);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "   Name        Size ^");
        assert!(lines[1].chars().all(|c| c == '-'));
        assert_eq!(lines[2], "0  - src       12");
        assert_eq!(lines[3], "1      lib.rs  9");
        assert_eq!(lines[4], "2    README    3");
        assert_eq!(lines.len(), 5);
    }

    #[test]
    fn test_render_text_scrollable_width() {
        let text = render_text(&sample(), Some(20));
        for line in text.lines() {
            assert!(line.width() <= 20, "{line:?} is too wide");
        }
    }
}
