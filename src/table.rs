use crate::flatten::CommentRecord;

pub const COLUMNS: [&str; 5] = ["Name", "Date", "Likes", "isPinned", "Comment"];

const MAX_CELL_CHARS: usize = 50;
const MAX_ROWS: usize = 60;
const EDGE_ROWS: usize = 5;

pub fn bool_label(v: bool) -> &'static str {
    if v { "True" } else { "False" }
}

/// Console rendering of the comment table, 1-indexed.
///
/// Long comments are cut to 50 characters. Tables over 60 rows show the first and last
/// five rows around a `...` row and end with a `[N rows x 5 columns]` footer.
pub fn render_table(records: &[CommentRecord]) -> String {
    if records.is_empty() {
        return format!("Empty table\nColumns: [{}]", COLUMNS.join(", "));
    }

    let truncated = records.len() > MAX_ROWS;
    let mut rows: Vec<[String; 6]> = Vec::new();
    for (i, r) in records.iter().enumerate() {
        if truncated && i == EDGE_ROWS {
            rows.push(std::array::from_fn(|_| "...".to_string()));
        }
        if truncated && i >= EDGE_ROWS && i < records.len() - EDGE_ROWS {
            continue;
        }
        rows.push([
            (i + 1).to_string(),
            display_cell(&r.name),
            display_cell(&r.date),
            r.likes.to_string(),
            bool_label(r.is_pinned).to_string(),
            display_cell(&r.comment),
        ]);
    }

    let mut header: [String; 6] = Default::default();
    for (slot, name) in header[1..].iter_mut().zip(COLUMNS) {
        *slot = name.to_string();
    }

    let mut widths = [0usize; 6];
    for row in std::iter::once(&header).chain(rows.iter()) {
        for (w, cell) in widths.iter_mut().zip(row) {
            *w = (*w).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    push_line(&mut out, &header, &widths);
    for row in &rows {
        out.push('\n');
        push_line(&mut out, row, &widths);
    }
    if truncated {
        out.push_str(&format!(
            "\n\n[{} rows x {} columns]",
            records.len(),
            COLUMNS.len()
        ));
    }
    out
}

fn push_line(out: &mut String, row: &[String; 6], widths: &[usize; 6]) {
    let mut line = String::new();
    for (idx, (cell, width)) in row.iter().zip(widths).enumerate() {
        let pad = width - cell.chars().count();
        if idx == 0 {
            line.push_str(cell);
            line.push_str(&" ".repeat(pad));
        } else {
            line.push_str("  ");
            line.push_str(&" ".repeat(pad));
            line.push_str(cell);
        }
    }
    out.push_str(line.trim_end());
}

fn display_cell(raw: &str) -> String {
    let escaped = raw.replace('\r', "\\r").replace('\n', "\\n");
    if escaped.chars().count() <= MAX_CELL_CHARS {
        return escaped;
    }
    let cut: String = escaped.chars().take(MAX_CELL_CHARS - 3).collect();
    format!("{cut}...")
}
