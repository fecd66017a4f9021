//! Identifier synthesis: short codes for competency rows, program-level
//! prefixes for namespacing, and the static area-code table the reformatter
//! classifies against.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One entry of the fixed area taxonomy. Top-level areas have no parent code;
/// sub-areas carry the code of the area they nest under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Area {
    pub label: &'static str,
    pub code: &'static str,
    pub parent_code: Option<&'static str>,
}

impl Area {
    /// Identifier of this area under the given program prefix.
    pub fn id(&self, prefix: &str) -> String {
        match self.parent_code {
            Some(parent) => format!("{prefix}-{parent}-{}", self.code),
            None => format!("{prefix}-{}", self.code),
        }
    }

    /// Identifier of this area's parent, or `None` for top-level areas.
    pub fn parent_id(&self, prefix: &str) -> Option<String> {
        self.parent_code.map(|parent| format!("{prefix}-{parent}"))
    }
}

/// The fixed three-tier area taxonomy recognised by name.
pub const AREAS: &[Area] = &[
    Area {
        label: "Knowledge",
        code: "K",
        parent_code: None,
    },
    Area {
        label: "Skills",
        code: "S",
        parent_code: None,
    },
    Area {
        label: "Competence",
        code: "C",
        parent_code: None,
    },
    Area {
        label: "Theoretical Understanding",
        code: "TU",
        parent_code: Some("K"),
    },
    Area {
        label: "Applied Knowledge",
        code: "AK",
        parent_code: Some("K"),
    },
    Area {
        label: "Practical Application",
        code: "PA",
        parent_code: Some("S"),
    },
    Area {
        label: "Communication Skills",
        code: "CS",
        parent_code: Some("S"),
    },
    Area {
        label: "Generic Problem Solving",
        code: "GPS",
        parent_code: Some("S"),
    },
    Area {
        label: "Critical Thinking",
        code: "CT",
        parent_code: Some("S"),
    },
    Area {
        label: "Autonomy & Responsibility",
        code: "AR",
        parent_code: Some("C"),
    },
];

/// Looks up an area by its exact label.
pub fn area(label: &str) -> Option<&'static Area> {
    AREAS.iter().find(|area| area.label == label)
}

/// Default sub-area that leaf outcomes of the given letter attach to.
pub fn default_sub_area(letter: char) -> Option<&'static str> {
    match letter.to_ascii_uppercase() {
        'K' => Some("Theoretical Understanding"),
        'S' => Some("Generic Problem Solving"),
        'C' => Some("Autonomy & Responsibility"),
        _ => None,
    }
}

/// Curated overrides mapping full program names to hand-picked prefixes.
/// Consulted before any procedural derivation; defaults to empty. The table
/// deserializes from a plain JSON object of name → prefix pairs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CuratedPrefixes(BTreeMap<String, String>);

impl CuratedPrefixes {
    /// Returns the curated prefix for the verbatim program name, if any.
    pub fn lookup(&self, program_name: &str) -> Option<&str> {
        self.0.get(program_name).map(String::as_str)
    }

    /// Registers or replaces an override.
    pub fn insert(&mut self, program_name: impl Into<String>, prefix: impl Into<String>) {
        self.0.insert(program_name.into(), prefix.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Filler words stripped from program names before prefix derivation. Covers
/// the export boilerplate seen in both English and Arabic file names.
const BOILERPLATE_WORDS: &[&str] = &[
    "of",
    "Outcomes",
    "outcomes",
    "Program",
    "program",
    "Department",
    "department",
    "مخرجات",
    "برنامج",
    "قسم",
];

fn is_boilerplate(word: &str) -> bool {
    BOILERPLATE_WORDS.contains(&word)
}

/// Derives a short code from a row name.
///
/// Names that are already codes (letters followed by digits, e.g. `K1`) pass
/// through verbatim with their case preserved. Anything else becomes the
/// uppercased acronym of its words; a name with no alphanumeric characters at
/// all is returned unchanged.
pub fn synthesize_code(name: &str) -> String {
    if is_pre_coded(name) {
        return name.to_string();
    }
    let acronym: String = name
        .split_whitespace()
        .filter_map(|word| word.chars().find(|ch| ch.is_alphanumeric()))
        .flat_map(char::to_uppercase)
        .collect();
    if acronym.is_empty() {
        name.to_string()
    } else {
        acronym
    }
}

/// Derives the program-level prefix used to namespace every identifier in one
/// output file.
///
/// Curated overrides win outright. Otherwise the name is truncated at the
/// first `" - "` separator, boilerplate words are dropped, and the remainder
/// is abbreviated: an embedded run of uppercase Latin letters when one exists,
/// the initials of the first two words otherwise, or the leading three
/// characters of a single-word name.
pub fn synthesize_program_prefix(program_name: &str, curated: &CuratedPrefixes) -> String {
    if let Some(prefix) = curated.lookup(program_name) {
        return prefix.to_string();
    }

    let base = program_name.split(" - ").next().unwrap_or(program_name);
    let parts: Vec<&str> = base
        .split_whitespace()
        .filter(|word| !is_boilerplate(word))
        .collect();

    match parts.as_slice() {
        [] => leading_characters(program_name.trim()),
        [word] => leading_characters(word),
        _ => {
            let embedded: String = parts
                .iter()
                .flat_map(|word| word.chars())
                .filter(char::is_ascii_uppercase)
                .collect();
            if embedded.chars().count() >= 2 {
                embedded
            } else {
                parts
                    .iter()
                    .take(2)
                    .filter_map(|word| word.chars().next())
                    .flat_map(char::to_uppercase)
                    .collect()
            }
        }
    }
}

fn leading_characters(word: &str) -> String {
    word.chars().take(3).flat_map(char::to_uppercase).collect()
}

/// A name is pre-coded when it is one run of ASCII letters followed by one run
/// of ASCII digits, with nothing else.
fn is_pre_coded(name: &str) -> bool {
    let letters_end = name
        .find(|ch: char| !ch.is_ascii_alphabetic())
        .unwrap_or(name.len());
    let (letters, rest) = name.split_at(letters_end);
    !letters.is_empty() && !rest.is_empty() && rest.chars().all(|ch| ch.is_ascii_digit())
}

/// Letter of a leaf-outcome name (`K1`, `s12`, ...), uppercased, when the name
/// is a single K/S/C letter followed by digits.
pub fn leaf_letter(name: &str) -> Option<char> {
    let mut chars = name.chars();
    let first = chars.next()?;
    if !matches!(first, 'K' | 'k' | 'S' | 's' | 'C' | 'c') {
        return None;
    }
    let rest = chars.as_str();
    if !rest.is_empty() && rest.chars().all(|ch| ch.is_ascii_digit()) {
        Some(first.to_ascii_uppercase())
    } else {
        None
    }
}
