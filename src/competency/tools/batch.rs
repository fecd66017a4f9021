use std::fs;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::competency::tools::codes::CuratedPrefixes;
use crate::competency::tools::error::Result;
use crate::competency::tools::model::{DEFAULT_ROOT_ID, ProgramContext};
use crate::competency::tools::sync;

/// File extensions the batch driver picks up when scanning a directory.
pub const INPUT_EXTENSIONS: &[&str] = &["csv", "xls", "xlsx"];

/// Settings for one batch run. With no fixed `root_id` the driver prompts for
/// a framework identifier per file, defaulting to [`DEFAULT_ROOT_ID`].
#[derive(Debug, Clone, Default)]
pub struct BatchOptions {
    pub root_id: Option<String>,
    pub curated: CuratedPrefixes,
}

/// Outcome counts of a batch run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub processed: usize,
    pub skipped: usize,
}

/// Reformats every recognised export in `input_dir` (non-recursively) into
/// `output_dir`. Per-file failures are logged and counted; the batch always
/// runs to completion.
pub fn run(input_dir: &Path, output_dir: &Path, options: &BatchOptions) -> Result<BatchSummary> {
    let mut inputs: Vec<PathBuf> = fs::read_dir(input_dir)?
        .filter_map(|entry| entry.ok().map(|entry| entry.path()))
        .filter(|path| path.is_file() && has_input_extension(path))
        .collect();
    inputs.sort();

    fs::create_dir_all(output_dir)?;

    let mut summary = BatchSummary::default();
    for path in inputs {
        let program = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default();
        let root_id = match &options.root_id {
            Some(root_id) => root_id.clone(),
            None => prompt_root_id(&program)?,
        };
        let context = ProgramContext::new(&program, root_id);
        let output = output_dir.join(format!("Reformatted - {program}.csv"));

        match sync::reformat_file(&path, &output, &context, &options.curated) {
            Ok(()) => {
                info!(input = %path.display(), output = %output.display(), "file reformatted");
                summary.processed += 1;
            }
            Err(error) => {
                warn!(input = %path.display(), %error, "skipping file");
                summary.skipped += 1;
            }
        }
    }

    Ok(summary)
}

fn has_input_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|extension| extension.to_str())
        .is_some_and(|extension| {
            INPUT_EXTENSIONS
                .iter()
                .any(|candidate| extension.eq_ignore_ascii_case(candidate))
        })
}

fn prompt_root_id(program: &str) -> Result<String> {
    let mut stderr = io::stderr();
    write!(stderr, "Framework ID for '{program}' [{DEFAULT_ROOT_ID}]: ")?;
    stderr.flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    let trimmed = line.trim();
    if trimmed.is_empty() {
        Ok(DEFAULT_ROOT_ID.to_string())
    } else {
        Ok(trimmed.to_string())
    }
}
