use serde::{Deserialize, Serialize};

/// Column headers of the import schema, in the exact order the importer
/// expects them.
pub const OUTPUT_COLUMNS: [&str; 14] = [
    "Parent ID number",
    "ID number",
    "Short name",
    "Description",
    "Description format",
    "Scale values",
    "Scale configuration",
    "Rule type (optional)",
    "Rule outcome (optional)",
    "Rule config (optional)",
    "Cross-referenced competency ID numbers",
    "Exported ID (optional)",
    "Is framework",
    "Taxonomy",
];

/// Framework identifier used when the user accepts the prompt default.
pub const DEFAULT_ROOT_ID: &str = "2299";

/// Description format marker shared by every emitted row.
pub const DESCRIPTION_FORMAT: &str = "1";

/// Proficiency scale attached to the framework row.
pub const FRAMEWORK_SCALE_VALUES: &str = "Not yet competent,Competent";

/// Two-level proficiency scale configuration attached to the framework row.
/// Competency rows leave their scale fields blank and inherit this one.
pub const FRAMEWORK_SCALE_CONFIGURATION: &str =
    r#"[{"scaleid":"2"},{"id":1,"scaledefault":1,"proficient":0},{"id":2,"scaledefault":0,"proficient":1}]"#;

/// Taxonomy labels for the five levels the importer supports.
pub const TAXONOMY: &str = "competency,competency,competency,competency,competency";

/// Marker placed in the `Is framework` column of the framework row.
pub const IS_FRAMEWORK: &str = "1";

/// One source row: a competency name and its free-text description. Readers
/// guarantee at least one of the two fields is non-empty after trimming.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputRecord {
    pub name: String,
    pub description: String,
}

impl InputRecord {
    /// Creates a record from the raw name/description pair.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }
}

/// Per-file processing context: the program name derived from the source file
/// and the framework identifier chosen by the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgramContext {
    pub program_name: String,
    pub root_id: String,
}

impl ProgramContext {
    /// Creates a context for the given program name and framework identifier.
    pub fn new(program_name: impl Into<String>, root_id: impl Into<String>) -> Self {
        Self {
            program_name: program_name.into(),
            root_id: root_id.into(),
        }
    }
}

/// One row of the import schema. Rows are created once by the reformatter and
/// only read afterwards; fields that a row does not use stay empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputRow {
    pub parent_id: String,
    pub id: String,
    pub short_name: String,
    pub description: String,
    pub description_format: String,
    pub scale_values: String,
    pub scale_configuration: String,
    pub rule_type: String,
    pub rule_outcome: String,
    pub rule_config: String,
    pub cross_referenced_ids: String,
    pub exported_id: String,
    pub is_framework: String,
    pub taxonomy: String,
}

impl OutputRow {
    /// Builds the framework row that leads every output file.
    pub fn framework(root_id: &str, name: &str, description: &str) -> Self {
        Self {
            id: root_id.to_string(),
            short_name: name.to_string(),
            description: description.to_string(),
            description_format: DESCRIPTION_FORMAT.to_string(),
            scale_values: FRAMEWORK_SCALE_VALUES.to_string(),
            scale_configuration: FRAMEWORK_SCALE_CONFIGURATION.to_string(),
            is_framework: IS_FRAMEWORK.to_string(),
            taxonomy: TAXONOMY.to_string(),
            ..Self::default()
        }
    }

    /// Builds a competency row. Scale fields stay blank; the importer inherits
    /// them from the framework row.
    pub fn competency(parent_id: &str, id: &str, name: &str, description: &str) -> Self {
        Self {
            parent_id: parent_id.to_string(),
            id: id.to_string(),
            short_name: name.to_string(),
            description: description.to_string(),
            description_format: DESCRIPTION_FORMAT.to_string(),
            taxonomy: TAXONOMY.to_string(),
            ..Self::default()
        }
    }

    /// Returns the field values in output column order.
    pub fn cells(&self) -> [&str; 14] {
        [
            &self.parent_id,
            &self.id,
            &self.short_name,
            &self.description,
            &self.description_format,
            &self.scale_values,
            &self.scale_configuration,
            &self.rule_type,
            &self.rule_outcome,
            &self.rule_config,
            &self.cross_referenced_ids,
            &self.exported_id,
            &self.is_framework,
            &self.taxonomy,
        ]
    }
}
