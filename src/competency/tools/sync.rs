use std::path::Path;

use tracing::{debug, info, instrument, warn};

use crate::competency::tools::codes::CuratedPrefixes;
use crate::competency::tools::error::{Result, ToolError};
use crate::competency::tools::io::{csv_read, csv_write, excel_read};
use crate::competency::tools::model::{InputRecord, ProgramContext};
use crate::competency::tools::reformat;

/// Reads records from a tabular source, dispatching on the file extension.
pub fn read_tabular(path: &Path) -> Result<Vec<InputRecord>> {
    let extension = path
        .extension()
        .and_then(|extension| extension.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();
    match extension.as_str() {
        "csv" => csv_read::read_records(path),
        "xls" | "xlsx" => excel_read::read_records(path),
        _ => Err(ToolError::UnsupportedExtension(path.to_path_buf())),
    }
}

/// Reformats one program export into an import-ready CSV file.
#[instrument(
    level = "info",
    skip_all,
    fields(input = %input.display(), output = %output.display(), program = %context.program_name)
)]
pub fn reformat_file(
    input: &Path,
    output: &Path,
    context: &ProgramContext,
    curated: &CuratedPrefixes,
) -> Result<()> {
    let records = read_tabular(input)?;
    if records.is_empty() {
        return Err(ToolError::EmptyInput(context.program_name.clone()));
    }
    info!(record_count = records.len(), "parsed records from tabular source");

    let report = reformat::reformat(&records, context, curated)?;
    for name in &report.orphaned {
        warn!(row = %name, "row matched no area pattern; emitted at top level");
    }
    debug!(row_count = report.rows.len(), "import rows constructed");

    csv_write::write_rows(output, &report.rows)
}
