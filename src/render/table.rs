//! Box-drawing table renderer.
//!
//! Columns come from the first row's keys in insertion order; every cell is
//! padded to the widest value in its column. The rendered table is terminal
//! only — the audit file gets a one-line marker instead.

use serde_json::Value;

/// Renders non-empty input. Callers handle the empty-table placeholder.
#[must_use]
pub fn render(rows: &[Value]) -> Vec<String> {
    let Some(first) = rows.first().and_then(Value::as_object) else {
        // A primitive or array first row has no columns to derive.
        return rows
            .iter()
            .enumerate()
            .map(|(i, v)| format!("{i}: {}", cell_text(Some(v))))
            .collect();
    };

    let keys: Vec<&str> = first.keys().map(String::as_str).collect();
    let widths: Vec<usize> = keys
        .iter()
        .map(|k| {
            let cells = rows
                .iter()
                .map(|r| cell_text(r.get(k)).chars().count())
                .max()
                .unwrap_or(0);
            k.chars().count().max(cells)
        })
        .collect();

    let top = border(&widths, '┌', '┬', '┐');
    let middle = border(&widths, '├', '┼', '┤');
    let bottom = border(&widths, '└', '┴', '┘');

    let head = row_line(&widths, keys.iter().map(ToString::to_string));
    let body = rows
        .iter()
        .map(|r| row_line(&widths, keys.iter().map(|k| cell_text(r.get(k)))));

    let mut lines = vec![top, head, middle];
    lines.extend(body);
    lines.push(bottom);
    lines
}

/// Missing and null cells render empty; strings render unquoted; anything
/// else stringifies compactly.
fn cell_text(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

fn border(widths: &[usize], left: char, join: char, right: char) -> String {
    let segments: Vec<String> = widths.iter().map(|w| "─".repeat(w + 2)).collect();
    format!("{left}{}{right}", segments.join(&join.to_string()))
}

fn row_line(widths: &[usize], cells: impl Iterator<Item = String>) -> String {
    let padded: Vec<String> = cells
        .zip(widths.iter().copied())
        .map(|(cell, w)| format!(" {cell:<w$} "))
        .collect();
    format!("│{}│", padded.join("│"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn widths_track_longest_cell() {
        let lines = render(&[json!({"a": 1, "bb": 22}), json!({"a": 333, "bb": 4})]);
        // a column: max(1, 3) = 3; bb column: max(2, 2, 1) = 2.
        assert_eq!(lines[0], "┌─────┬────┐");
        assert_eq!(lines[1], "│ a   │ bb │");
        assert_eq!(lines[2], "├─────┼────┤");
        assert_eq!(lines[3], "│ 1   │ 22 │");
        assert_eq!(lines[4], "│ 333 │ 4  │");
        assert_eq!(lines[5], "└─────┴────┘");
    }

    #[test]
    fn missing_and_null_cells_render_empty() {
        let lines = render(&[json!({"a": "x", "b": null}), json!({"a": "y"})]);
        assert_eq!(lines[3], "│ x │   │");
        assert_eq!(lines[4], "│ y │   │");
    }

    #[test]
    fn primitive_rows_fall_back_to_indexed_listing() {
        let lines = render(&[json!(10), json!("twenty")]);
        assert_eq!(lines, vec!["0: 10", "1: twenty"]);
    }
}
