//! Extraction orchestrator

use super::fallback::extract_specific_tests_comprehensive;
use super::keywords::{extract_diagnoses, extract_medications};
use super::lab_tests::extract_lab_tests_universal;
use super::notes::extract_clinical_interpretation;
use super::order::extract_order_info;
use super::patient::extract_patient_info;
use super::report_type::detect_report_type;
use crate::domain::{ExtractionError, ExtractionMetadata, ExtractionResult, LabTest};
use crate::log_extraction_complete;
use std::collections::HashSet;
use std::time::Instant;

/// Converts one report text into a structured result.
///
/// Fails only when the text is empty or whitespace. A text in which nothing
/// was recognised yields `Ok` with empty sections.
///
/// # Example
///
/// ```
/// use labex::extraction::extract;
///
/// let result = extract("TOTAL BILIRUBIN 1.8↑ mg/dl 0.4-1.0").unwrap();
/// assert_eq!(result.lab_tests[0].status.as_str(), "High");
/// ```
pub fn extract(text: &str) -> Result<ExtractionResult, ExtractionError> {
    if text.trim().is_empty() {
        return Err(ExtractionError::EmptyInput);
    }

    let started = Instant::now();
    let metadata = ExtractionMetadata::now();

    let result = ExtractionResult {
        report_type: detect_report_type(text),
        patient: extract_patient_info(text),
        order: extract_order_info(text),
        lab_tests: merge_lab_tests(
            extract_lab_tests_universal(text),
            extract_specific_tests_comprehensive(text),
        ),
        diagnoses: extract_diagnoses(text),
        medications: extract_medications(text),
        clinical_notes: extract_clinical_interpretation(text),
        metadata,
    };

    log_extraction_complete!(&result, started.elapsed());

    Ok(result)
}

/// Appends fallback tests whose name the grammars did not already produce.
///
/// Grammar rows keep line order and win every name collision; fallback rows
/// follow in table order.
pub fn merge_lab_tests(grammar: Vec<LabTest>, fallback: Vec<LabTest>) -> Vec<LabTest> {
    let known: HashSet<String> = grammar.iter().map(LabTest::dedup_key).collect();

    let mut merged = grammar;
    let before = merged.len();
    merged.extend(
        fallback
            .into_iter()
            .filter(|test| !known.contains(&test.dedup_key())),
    );

    tracing::debug!(
        grammar = before,
        fallback_added = merged.len() - before,
        "Merged lab tests"
    );

    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::TestStatus;

    #[test]
    fn test_empty_input_is_error() {
        assert_eq!(extract("").unwrap_err(), ExtractionError::EmptyInput);
        assert_eq!(extract(" \n\t ").unwrap_err(), ExtractionError::EmptyInput);
    }

    #[test]
    fn test_nothing_recognised_is_ok() {
        let result = extract("lorem ipsum dolor").unwrap();
        assert!(result.lab_tests.is_empty());
        assert!(result.patient.name.is_none());
        assert!(result.clinical_notes.is_none());
    }

    #[test]
    fn test_merge_grammar_wins_collision() {
        let grammar = vec![LabTest::new("SGOT(AST)", "45", "IU/L", "5-40", TestStatus::Normal)];
        let fallback = vec![
            LabTest::new("sgot(ast)", "40", "IU/L", "5-40", TestStatus::High),
            LabTest::new("Albumin", "4.1", "gm/dl", "3.5-5.5", TestStatus::Normal),
        ];
        let merged = merge_lab_tests(grammar, fallback);
        assert_eq!(merged.len(), 2);
        assert_eq!(merged[0].value, "45");
        assert_eq!(merged[1].test_name, "Albumin");
    }

    #[test]
    fn test_metadata_stamped() {
        let result = extract("GLUCOSE 95 mg/dl 70-110").unwrap();
        assert_eq!(result.metadata.extraction_method, "Universal Pattern Matching");
        assert_eq!(result.metadata.department, "Auto-detected");
    }
}
