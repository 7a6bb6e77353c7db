//! Line normalization and classification

/// Lines with fewer characters than this are discarded
pub const MIN_LINE_LENGTH: usize = 3;

/// Keywords marking the start of a results section
const SECTION_HEADERS: &[&str] = &[
    "BIOCHEMISTRY",
    "LFT",
    "LIVER FUNCTION TEST",
    "DIFFERENTIAL COUNT",
    "INVESTIGATIONS",
];

/// Column captions that appear alone on a line
const COLUMN_HEADERS: &[&str] = &[
    "VALUE",
    "UNIT",
    "REF.RANGE",
    "REFERENCE",
    "RESULT",
    "SPECIMEN",
    "METHOD",
];

/// What a normalized line is, as far as the test-row grammars care
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// Opens a results section; never parsed as a test row
    SectionHeader,
    /// A bare column caption
    ColumnHeader,
    /// Anything else; may be a test row
    Candidate,
}

/// Splits `text` into trimmed logical lines, dropping short ones.
pub fn normalize_lines(text: &str) -> impl Iterator<Item = &str> {
    text.lines()
        .map(str::trim)
        .filter(|line| line.chars().count() >= MIN_LINE_LENGTH)
}

/// Classifies a normalized line.
///
/// Section keywords match anywhere in the line, case-insensitively; column
/// captions must make up the whole line.
pub fn classify_line(line: &str) -> LineKind {
    let upper = line.to_uppercase();
    if SECTION_HEADERS.iter().any(|h| upper.contains(h)) {
        LineKind::SectionHeader
    } else if COLUMN_HEADERS.contains(&upper.as_str()) {
        LineKind::ColumnHeader
    } else {
        LineKind::Candidate
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_trims_and_drops_short_lines() {
        let text = "  GLUCOSE 95 mg/dl  \r\nab\n\n   \nALBUMIN 4.1 gm/dl\n";
        let lines: Vec<&str> = normalize_lines(text).collect();
        assert_eq!(lines, vec!["GLUCOSE 95 mg/dl", "ALBUMIN 4.1 gm/dl"]);
    }

    #[test]
    fn test_length_counts_characters() {
        let lines: Vec<&str> = normalize_lines("↑↓\n↑↓↑").collect();
        assert_eq!(lines, vec!["↑↓↑"]);
    }

    #[test]
    fn test_classify_section_header_substring() {
        assert_eq!(classify_line("BIOCHEMISTRY"), LineKind::SectionHeader);
        assert_eq!(classify_line("Liver Function Test (LFT)"), LineKind::SectionHeader);
        assert_eq!(classify_line("Differential Count:"), LineKind::SectionHeader);
    }

    #[test]
    fn test_classify_column_header_whole_line() {
        assert_eq!(classify_line("Value"), LineKind::ColumnHeader);
        assert_eq!(classify_line("REF.RANGE"), LineKind::ColumnHeader);
        assert_eq!(classify_line("Value mg/dl"), LineKind::Candidate);
    }

    #[test]
    fn test_classify_candidate() {
        assert_eq!(classify_line("GLUCOSE 95 mg/dl 70-110"), LineKind::Candidate);
    }
}
