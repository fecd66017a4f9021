use competency_tools::ToolError;
use competency_tools::codes::{CuratedPrefixes, synthesize_code, synthesize_program_prefix};
use competency_tools::io::csv_write;
use competency_tools::model::{InputRecord, ProgramContext};
use competency_tools::reformat::reformat;

fn physical_education(root_id: &str) -> ProgramContext {
    ProgramContext::new("Physical Education", root_id)
}

#[test]
fn pre_coded_names_pass_through_unchanged() {
    assert_eq!(synthesize_code("K1"), "K1");
    assert_eq!(synthesize_code("s12"), "s12");
    assert_eq!(synthesize_code("QF12"), "QF12");
}

#[test]
fn multi_word_names_become_acronyms() {
    assert_eq!(synthesize_code("Physical Education"), "PE");
    assert_eq!(synthesize_code("Generic Problem Solving"), "GPS");
    assert_eq!(synthesize_code("Bachelor of Science"), "BOS");

    let code = synthesize_code("a name with many short words");
    assert!(code.len() <= "a name with many short words".split_whitespace().count());
    assert!(code.chars().all(char::is_uppercase));
}

#[test]
fn names_without_alphanumerics_fall_back_to_original() {
    assert_eq!(synthesize_code("- / -"), "- / -");
    assert_eq!(synthesize_code("123 456"), "14");
}

#[test]
fn curated_prefix_overrides_heuristics() {
    let mut curated = CuratedPrefixes::default();
    curated.insert("Physical Education", "PHED");

    assert_eq!(synthesize_program_prefix("Physical Education", &curated), "PHED");
    assert_eq!(
        synthesize_program_prefix("Physical Education", &CuratedPrefixes::default()),
        "PE"
    );
}

#[test]
fn embedded_abbreviations_win_for_multi_word_names() {
    let curated = CuratedPrefixes::default();
    assert_eq!(synthesize_program_prefix("Information Technology", &curated), "IT");
    assert_eq!(synthesize_program_prefix("health informatics", &curated), "HI");
}

#[test]
fn single_word_programs_use_leading_characters() {
    let curated = CuratedPrefixes::default();
    assert_eq!(synthesize_program_prefix("Physics", &curated), "PHY");
    assert_eq!(synthesize_program_prefix("IT", &curated), "IT");
}

#[test]
fn boilerplate_and_suffixes_are_stripped_from_program_names() {
    let curated = CuratedPrefixes::default();
    assert_eq!(
        synthesize_program_prefix("Program Outcomes of Nursing - 2024 intake", &curated),
        "NUR"
    );
    assert_eq!(synthesize_program_prefix("مخرجات برنامج الرياضيات", &curated), "الر");
}

#[test]
fn framework_row_leads_the_output() {
    let records = vec![
        InputRecord::new("Physical Education", "Program desc"),
        InputRecord::new("Knowledge", ""),
        InputRecord::new("Theoretical Understanding", ""),
        InputRecord::new("K1", "Outcome 1"),
    ];
    let report = reformat(&records, &physical_education("100"), &CuratedPrefixes::default())
        .expect("records reformatted");

    assert_eq!(report.rows.len(), 4);
    assert!(report.orphaned.is_empty());

    let framework = &report.rows[0];
    assert_eq!(framework.id, "100");
    assert_eq!(framework.parent_id, "");
    assert_eq!(framework.short_name, "Physical Education");
    assert_eq!(framework.description, "Program desc");
    assert_eq!(framework.is_framework, "1");
    assert_eq!(framework.scale_values, "Not yet competent,Competent");

    assert_eq!(report.rows[1].id, "PE-K");
    assert_eq!(report.rows[1].parent_id, "");
    assert_eq!(report.rows[2].id, "PE-K-TU");
    assert_eq!(report.rows[2].parent_id, "PE-K");
    assert_eq!(report.rows[3].id, "PE-K-TU-K1");
    assert_eq!(report.rows[3].parent_id, "PE-K-TU");
    assert_eq!(report.rows[3].description, "Outcome 1");
}

#[test]
fn competency_rows_leave_scale_fields_blank() {
    let records = vec![
        InputRecord::new("Physical Education", ""),
        InputRecord::new("Knowledge", ""),
    ];
    let report = reformat(&records, &physical_education("100"), &CuratedPrefixes::default())
        .expect("records reformatted");

    let row = &report.rows[1];
    assert_eq!(row.is_framework, "");
    assert_eq!(row.scale_values, "");
    assert_eq!(row.scale_configuration, "");
    assert_eq!(row.description_format, "1");
    assert_eq!(
        row.taxonomy,
        "competency,competency,competency,competency,competency"
    );
}

#[test]
fn rows_with_empty_names_are_skipped() {
    let records = vec![
        InputRecord::new("Physical Education", "Program desc"),
        InputRecord::new("Knowledge", ""),
        InputRecord::new("", "description without a name"),
        InputRecord::new("K1", "Outcome 1"),
    ];
    let report = reformat(&records, &physical_education("100"), &CuratedPrefixes::default())
        .expect("records reformatted");

    assert_eq!(report.rows.len(), 3);
    assert!(report.rows.iter().all(|row| row.short_name != ""));
}

#[test]
fn leaf_rows_attach_to_their_default_sub_areas() {
    let records = vec![
        InputRecord::new("Physical Education", ""),
        InputRecord::new("Knowledge", ""),
        InputRecord::new("Skills", ""),
        InputRecord::new("Competence", ""),
        InputRecord::new("Theoretical Understanding", ""),
        InputRecord::new("Generic Problem Solving", ""),
        InputRecord::new("Autonomy & Responsibility", ""),
        InputRecord::new("K1", ""),
        InputRecord::new("S2", ""),
        InputRecord::new("C3", ""),
        InputRecord::new("k4", ""),
    ];
    let report = reformat(&records, &physical_education("100"), &CuratedPrefixes::default())
        .expect("records reformatted");
    assert!(report.orphaned.is_empty());

    let find = |id: &str| {
        report
            .rows
            .iter()
            .find(|row| row.id == id)
            .unwrap_or_else(|| panic!("row {id} missing"))
    };
    assert_eq!(find("PE-K-TU-K1").parent_id, "PE-K-TU");
    assert_eq!(find("PE-S-GPS-S2").parent_id, "PE-S-GPS");
    assert_eq!(find("PE-C-AR-C3").parent_id, "PE-C-AR");
    assert_eq!(find("PE-K-TU-K4").short_name, "k4");
}

#[test]
fn generic_rows_starting_with_an_area_letter_attach_when_known() {
    let records = vec![
        InputRecord::new("Physical Education", ""),
        InputRecord::new("Competence", ""),
        InputRecord::new("Autonomy & Responsibility", ""),
        InputRecord::new("Collaboration and teamwork", "works in groups"),
    ];
    let report = reformat(&records, &physical_education("100"), &CuratedPrefixes::default())
        .expect("records reformatted");

    let row = &report.rows[3];
    assert_eq!(row.parent_id, "PE-C-AR");
    assert_eq!(row.id, "PE-C-AR-CAT");
    assert!(report.orphaned.is_empty());
}

#[test]
fn unmatched_rows_are_orphaned_to_the_top_level() {
    let records = vec![
        InputRecord::new("Physical Education", ""),
        InputRecord::new("Unrelated Topic", "does not fit the scheme"),
    ];
    let report = reformat(&records, &physical_education("100"), &CuratedPrefixes::default())
        .expect("records reformatted");

    let row = &report.rows[1];
    assert_eq!(row.parent_id, "");
    assert_eq!(row.id, "PE-UT");
    assert_eq!(report.orphaned, vec!["Unrelated Topic".to_string()]);
}

#[test]
fn leaf_rows_without_a_known_sub_area_are_orphaned() {
    let records = vec![
        InputRecord::new("Physical Education", ""),
        InputRecord::new("K1", "appears before any area row"),
    ];
    let report = reformat(&records, &physical_education("100"), &CuratedPrefixes::default())
        .expect("records reformatted");

    let row = &report.rows[1];
    assert_eq!(row.parent_id, "");
    assert_eq!(row.id, "PE-K1");
    assert_eq!(report.orphaned, vec!["K1".to_string()]);
}

#[test]
fn parents_always_precede_their_children() {
    let records = vec![
        InputRecord::new("Physical Education", ""),
        InputRecord::new("Knowledge", ""),
        InputRecord::new("Theoretical Understanding", ""),
        InputRecord::new("K1", ""),
        InputRecord::new("K2", ""),
        InputRecord::new("Skills", ""),
        InputRecord::new("Generic Problem Solving", ""),
        InputRecord::new("S1", ""),
        InputRecord::new("Competence", ""),
        InputRecord::new("Autonomy & Responsibility", ""),
        InputRecord::new("C1", ""),
    ];
    let report = reformat(&records, &physical_education("100"), &CuratedPrefixes::default())
        .expect("records reformatted");

    for (index, row) in report.rows.iter().enumerate() {
        if row.parent_id.is_empty() {
            continue;
        }
        let seen_earlier = report.rows[..index]
            .iter()
            .any(|earlier| earlier.id == row.parent_id);
        assert!(seen_earlier, "row {} references unseen parent {}", row.id, row.parent_id);
    }
}

#[test]
fn empty_record_sequences_are_rejected() {
    let error = reformat(&[], &physical_education("100"), &CuratedPrefixes::default())
        .expect_err("empty input rejected");
    assert!(matches!(error, ToolError::EmptyInput(_)));
}

#[test]
fn reformatting_is_deterministic() {
    let records = vec![
        InputRecord::new("Physical Education", "Program desc"),
        InputRecord::new("Knowledge", ""),
        InputRecord::new("Theoretical Understanding", ""),
        InputRecord::new("K1", "Outcome 1"),
        InputRecord::new("Unrelated Topic", ""),
    ];
    let context = physical_education("100");
    let curated = CuratedPrefixes::default();

    let first = reformat(&records, &context, &curated).expect("first pass");
    let second = reformat(&records, &context, &curated).expect("second pass");

    assert_eq!(first, second);
    assert_eq!(csv_write::render(&first.rows), csv_write::render(&second.rows));
}
