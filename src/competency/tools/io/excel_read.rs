use std::path::Path;

use calamine::{DataType, Reader, open_workbook_auto};

use crate::competency::tools::error::{Result, ToolError};
use crate::competency::tools::io::tabular;
use crate::competency::tools::model::InputRecord;

/// Reads records from the first worksheet of a spreadsheet export. The
/// workbook format (`.xls` or `.xlsx`) is detected from the file itself.
pub fn read_records(path: &Path) -> Result<Vec<InputRecord>> {
    let mut workbook = open_workbook_auto(path)?;
    let range_result = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| ToolError::InvalidWorkbook("workbook has no sheets".into()))?;
    let range = range_result.map_err(ToolError::from)?;

    let rows = range
        .rows()
        .map(|row| row.iter().map(cell_to_string).collect())
        .collect();
    Ok(tabular::extract_records(rows))
}

fn cell_to_string(cell: &DataType) -> String {
    match cell {
        DataType::String(value) => value.clone(),
        DataType::Float(value) => value.to_string(),
        DataType::Int(value) => value.to_string(),
        DataType::Bool(value) => value.to_string(),
        DataType::Empty => String::new(),
        other => other.to_string(),
    }
}
