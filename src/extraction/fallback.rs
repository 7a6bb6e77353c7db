//! Named-test fallback table
//!
//! Recovers well-known liver function and blood count tests that the line
//! grammars missed, typically because OCR split a row across lines. Each
//! entry carries its own detection pattern plus the unit and reference range
//! recorded for it. Patterns search the whole text case-insensitively with
//! `.` crossing line breaks.

use super::patterns::compile;
use super::status::determine_status;
use crate::domain::LabTest;
use regex::Regex;
use std::sync::LazyLock;

/// Characters of context taken on each side of a match for status markers
pub const STATUS_WINDOW_CHARS: usize = 100;

/// (canonical name, detection pattern, unit, reference range), in priority order
const SPECIFIC_TESTS: &[(&str, &str, &str, &str)] = &[
    // Liver function panel
    ("Total Bilirubin", r"TOTAL\s+BILIRUBIN.*?(\d[\d\.]*)", "mg/dl", "0.4-1.0"),
    ("Direct Bilirubin", r"DIRECT\s+BILIRUBIN.*?(\d[\d\.]*)", "mg/dl", "0.1-0.5"),
    ("Indirect Bilirubin", r"INDIRECT\s+BILIRUBIN.*?(\d[\d\.]*)", "mg/dl", "0.2-0.8"),
    ("SGOT(AST)", r"(?:SERUM\s+)?SGOT.*?(\d[\d\.]*)", "IU/L", "5-40"),
    ("SGPT(ALT)", r"(?:SERUM\s+)?SGPT.*?(\d[\d\.]*)", "IU/L", "5-55"),
    ("Total Protein", r"(?:SERUM\s+)?TOTAL\s+PROTEIN.*?(\d[\d\.]*)", "gm/dl", "6.0-8.0"),
    ("Albumin", r"(?:SERUM\s+)?ALBUMIN.*?(\d[\d\.]*)", "gm/dl", "3.5-5.5"),
    ("Globulin", r"(?:SERUM\s+)?GLOBULIN.*?(\d[\d\.]*)", "gm/dl", "2.0-4.0"),
    ("A/G Ratio", r"A[/\\]G\s+RATIO.*?(\d[\d\.]*(?::\d)?)", "RATIO", "1.0-1.85"),
    ("Alkaline Phosphatase", r"ALKALINE\s+PHOSPHAT[ES]+.*?(\d[\d\.]*)", "IU/L", "up to 280"),
    // Blood count and differential panel
    ("Platelet Count", r"Platelet\s+count.*?(\d[\d\.]*)", "Lakhs/Cumm", "2.1 - 5.0"),
    ("Mean Cell Volume", r"Mean\s+Cell\s+Volume.*?(\d[\d\.]*)", "fL", "92 - 118"),
    ("Mean Cell Haemoglobin", r"Mean\s+Cell\s+Haemoglobin\s*\(MCH\).*?(\d[\d\.]*)", "pg", "31 - 37"),
    ("MCHC", r"Mean\s+Cell\s+Haemoglobin\s+Concentration.*?(\d[\d\.]*)", "g/L", "29 - 47"),
    ("RDW", r"RDW.*?(\d[\d\.]*)", "%", "11.6 - 14.0"),
    ("Neutrophils", r"Neutrophils\.?\s+(\d[\d\.]*)", "%", "20 - 45"),
    ("Lymphocytes", r"Lymphocytes\s+(\d[\d\.]*)", "%", "28 - 35"),
    ("Eosinophils", r"Eosinophils\s+(\d[\d\.]*)", "%", "1.4 - 4.3"),
    ("Monocytes", r"Monocytes\s+(\d[\d\.]*)", "%", "4 - 7"),
    ("Basophils", r"Basophils\s+(\d[\d\.]*)", "%", "0 - 1"),
];

/// One compiled fallback entry
struct SpecificTest {
    name: &'static str,
    pattern: Regex,
    unit: &'static str,
    reference_range: &'static str,
}

static SPECIFIC_TEST_TABLE: LazyLock<Vec<SpecificTest>> = LazyLock::new(|| {
    SPECIFIC_TESTS
        .iter()
        .map(|&(name, pattern, unit, reference_range)| SpecificTest {
            name,
            pattern: compile(&format!("(?is){pattern}")),
            unit,
            reference_range,
        })
        .collect()
});

/// Searches the whole text for every table entry, in table order.
pub fn extract_specific_tests_comprehensive(text: &str) -> Vec<LabTest> {
    SPECIFIC_TEST_TABLE
        .iter()
        .filter_map(|entry| {
            let caps = entry.pattern.captures(text)?;
            let whole = caps.get(0)?;
            let value = caps.get(1)?.as_str();
            let window = context_window(text, whole.start(), whole.end());

            Some(LabTest::new(
                entry.name,
                value,
                entry.unit,
                entry.reference_range,
                determine_status(window, ""),
            ))
        })
        .collect()
}

/// Slice of `text` spanning the match plus up to [`STATUS_WINDOW_CHARS`]
/// characters either side, clamped to the text.
fn context_window(text: &str, start: usize, end: usize) -> &str {
    let begin = text[..start]
        .char_indices()
        .rev()
        .nth(STATUS_WINDOW_CHARS - 1)
        .map_or(0, |(i, _)| i);
    let finish = text[end..]
        .char_indices()
        .nth(STATUS_WINDOW_CHARS)
        .map_or(text.len(), |(i, _)| end + i);
    &text[begin..finish]
}
