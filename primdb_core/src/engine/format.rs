use crate::storage::Schema;
use crate::types::Row;

/// Formats a SELECT result as a bordered text table:
///
/// ```text
/// +----+-------+-----+
/// | ID | name  | age |
/// +----+-------+-----+
/// | 1  | Alice | 30  |
/// +----+-------+-----+
/// ```
///
/// With no rows, only the framed header is returned.
pub fn format_select(schema: &Schema, rows: &[Row]) -> String {
    let headers: Vec<&str> = schema.columns.iter().map(|c| c.name.as_str()).collect();
    let cells: Vec<Vec<String>> = rows
        .iter()
        .map(|row| row.iter().map(|v| v.to_string()).collect())
        .collect();

    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in &cells {
        for (i, cell) in row.iter().enumerate() {
            if i < widths.len() {
                widths[i] = widths[i].max(cell.chars().count());
            }
        }
    }

    let border = widths
        .iter()
        .map(|w| format!("+{}", "-".repeat(w + 2)))
        .collect::<String>()
        + "+";

    let mut lines: Vec<String> = Vec::with_capacity(cells.len() + 3);
    lines.push(border.clone());
    lines.push(format_line(&headers, &widths));
    lines.push(border.clone());
    for row in &cells {
        let cols: Vec<&str> = row.iter().map(String::as_str).collect();
        lines.push(format_line(&cols, &widths));
    }
    if !cells.is_empty() {
        lines.push(border);
    }
    lines.join("\n")
}

fn format_line(cols: &[&str], widths: &[usize]) -> String {
    let mut line = String::new();
    for (cell, width) in cols.iter().zip(widths) {
        let pad = width - cell.chars().count();
        line.push_str("| ");
        line.push_str(cell);
        line.push_str(&" ".repeat(pad));
        line.push(' ');
    }
    line.push('|');
    line
}
