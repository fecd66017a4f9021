use tracing::warn;

use crate::competency::tools::model::InputRecord;

/// Substring that marks the name column in the header row.
pub const NAME_HEADER: &str = "Name";
/// Substring that marks the description column in the header row.
pub const DESCRIPTION_HEADER: &str = "Description";

/// Extracts records from raw rows following the export conventions: the first
/// row is a metadata banner, the second row holds the column headers, and the
/// name/description columns are located by case-sensitive substring match.
///
/// A header row without both columns is treated as a malformed file: a warning
/// is logged and no records are returned, which downstream handles the same
/// way as an empty export. Rows where both extracted fields are empty after
/// trimming are dropped.
pub fn extract_records(rows: Vec<Vec<String>>) -> Vec<InputRecord> {
    let mut rows = rows.into_iter();
    let _metadata = rows.next();
    let Some(headers) = rows.next() else {
        return Vec::new();
    };

    let name_column = headers.iter().position(|header| header.contains(NAME_HEADER));
    let description_column = headers
        .iter()
        .position(|header| header.contains(DESCRIPTION_HEADER));
    let (Some(name_column), Some(description_column)) = (name_column, description_column) else {
        warn!(
            headers = ?headers,
            "header row is missing the Name/Description columns"
        );
        return Vec::new();
    };

    rows.filter_map(|row| {
        let name = cell(&row, name_column);
        let description = cell(&row, description_column);
        if name.is_empty() && description.is_empty() {
            None
        } else {
            Some(InputRecord { name, description })
        }
    })
    .collect()
}

fn cell(row: &[String], index: usize) -> String {
    row.get(index)
        .map(|value| value.trim().to_string())
        .unwrap_or_default()
}
