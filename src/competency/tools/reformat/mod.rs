//! Pure hierarchy inference: classifies an ordered list of named rows into
//! the fixed three-tier area scheme and synthesizes parent/child identifiers
//! for the import schema.

use std::collections::BTreeMap;

use crate::competency::tools::codes::{self, Area, CuratedPrefixes};
use crate::competency::tools::error::{Result, ToolError};
use crate::competency::tools::model::{InputRecord, OutputRow, ProgramContext};

/// Result of one reformatting pass. `orphaned` lists the names of rows that
/// matched no classification rule and were emitted at the top level; callers
/// surface them as diagnostics rather than failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReformatReport {
    pub rows: Vec<OutputRow>,
    pub orphaned: Vec<String>,
}

/// Area identifiers resolved while scanning one file, keyed by canonical
/// label. Scoped to a single `reformat` call.
#[derive(Debug, Default)]
struct AreaTable {
    entries: BTreeMap<&'static str, String>,
}

impl AreaTable {
    fn record(&mut self, label: &'static str, id: String) {
        self.entries.insert(label, id);
    }

    fn id_of(&self, label: &str) -> Option<&str> {
        self.entries.get(label).map(String::as_str)
    }
}

/// How a row name was classified, before identifiers are resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Classification {
    /// Exact match on a canonical area label.
    Area(&'static Area),
    /// A single K/S/C letter followed by digits; carries the letter.
    Leaf(char),
    /// Anything else.
    Other,
}

/// Resolved placement of one row within the hierarchy.
#[derive(Debug)]
struct Placement {
    id: String,
    parent_id: String,
    orphaned: bool,
}

/// Reformats one program's records into import rows.
///
/// The first record is the framework root and is never reinterpreted as a
/// competency. Subsequent records with empty names are skipped; everything
/// else is classified first-match-wins and emitted in input order. Malformed
/// names never fail the pass; the only error is an empty record sequence.
pub fn reformat(
    records: &[InputRecord],
    context: &ProgramContext,
    curated: &CuratedPrefixes,
) -> Result<ReformatReport> {
    let root = records
        .first()
        .ok_or_else(|| ToolError::EmptyInput(context.program_name.clone()))?;

    let prefix = codes::synthesize_program_prefix(&context.program_name, curated);
    let mut table = AreaTable::default();
    let mut rows = vec![OutputRow::framework(
        &context.root_id,
        &root.name,
        &root.description,
    )];
    let mut orphaned = Vec::new();

    for record in &records[1..] {
        if record.name.is_empty() {
            continue;
        }
        let placement = place(&record.name, &prefix, &mut table);
        if placement.orphaned {
            orphaned.push(record.name.clone());
        }
        rows.push(OutputRow::competency(
            &placement.parent_id,
            &placement.id,
            &record.name,
            &record.description,
        ));
    }

    Ok(ReformatReport { rows, orphaned })
}

fn classify(name: &str) -> Classification {
    if let Some(area) = codes::area(name) {
        return Classification::Area(area);
    }
    if let Some(letter) = codes::leaf_letter(name) {
        return Classification::Leaf(letter);
    }
    Classification::Other
}

fn place(name: &str, prefix: &str, table: &mut AreaTable) -> Placement {
    match classify(name) {
        Classification::Area(area) => {
            let parent_id = area.parent_id(prefix).unwrap_or_default();
            let id = area.id(prefix);
            table.record(area.label, id.clone());
            Placement {
                id,
                parent_id,
                orphaned: false,
            }
        }
        Classification::Leaf(letter) => {
            let sub_area = codes::default_sub_area(letter);
            match sub_area.and_then(|label| table.id_of(label)) {
                Some(parent_id) => Placement {
                    id: format!("{parent_id}-{}", name.to_uppercase()),
                    parent_id: parent_id.to_string(),
                    orphaned: false,
                },
                None => Placement {
                    id: format!("{prefix}-{}", name.to_uppercase()),
                    parent_id: String::new(),
                    orphaned: true,
                },
            }
        }
        Classification::Other => {
            let code = codes::synthesize_code(name);
            let known_parent = name
                .chars()
                .next()
                .and_then(codes::default_sub_area)
                .and_then(|label| table.id_of(label));
            match known_parent {
                Some(parent_id) => Placement {
                    id: format!("{parent_id}-{code}"),
                    parent_id: parent_id.to_string(),
                    orphaned: false,
                },
                None => Placement {
                    id: format!("{prefix}-{code}"),
                    parent_id: String::new(),
                    orphaned: true,
                },
            }
        }
    }
}
