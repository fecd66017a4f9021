use std::fs;
use std::path::Path;

use crate::competency::tools::error::Result;
use crate::competency::tools::model::{OUTPUT_COLUMNS, OutputRow};

/// Writes the rows as an import-ready CSV file.
pub fn write_rows(path: &Path, rows: &[OutputRow]) -> Result<()> {
    fs::write(path, render(rows))?;
    Ok(())
}

/// Renders the header line and rows as CSV text, prefixed with a UTF-8
/// byte-order-mark.
///
/// Quoting is deliberately more aggressive than RFC 4180: the downstream
/// importer expects fields containing a bare space or `[` to be quoted too.
pub fn render(rows: &[OutputRow]) -> String {
    let mut out = String::from('\u{feff}');
    push_line(&mut out, &OUTPUT_COLUMNS);
    for row in rows {
        push_line(&mut out, &row.cells());
    }
    out
}

fn push_line(out: &mut String, fields: &[&str; 14]) {
    for (index, field) in fields.iter().enumerate() {
        if index > 0 {
            out.push(',');
        }
        push_field(out, field);
    }
    out.push_str("\r\n");
}

fn push_field(out: &mut String, field: &str) {
    if !needs_quoting(field) {
        out.push_str(field);
        return;
    }
    out.push('"');
    for ch in field.chars() {
        if ch == '"' {
            out.push('"');
        }
        out.push(ch);
    }
    out.push('"');
}

fn needs_quoting(field: &str) -> bool {
    field
        .chars()
        .any(|ch| matches!(ch, ',' | '"' | '\n' | '\r' | ' ' | '['))
}
