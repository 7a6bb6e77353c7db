//! Clinical interpretation block extraction

use super::patterns::{compile_all, first_accepted};
use regex::Regex;
use std::sync::LazyLock;

/// Longest note kept, in characters
pub const MAX_NOTE_CHARS: usize = 500;

/// Notes must be longer than this, in characters, after trimming
const MIN_NOTE_CHARS: usize = 10;

/// Printed on most reports; never a useful note on its own
const BOILERPLATE: &str = "PLEASE CORRELATE CLINICALLY.";

/// Label patterns, each capturing up to the next known section label or the end of text
static NOTE_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    compile_all(&[
        r"(?is)Remarks[:=]?\s*(.*?)(?:Liver|Magnesium|COAGULATION|Method|DIFFERENTIAL|$)",
        r"(?is)Interpretation[:=]?\s*(.*?)(?:Note|Method|$)",
        r"(?is)Comments[:=]?\s*(.*?)(?:Method|$)",
    ])
});

/// Pulls the free-text remarks, interpretation or comments block.
pub fn extract_clinical_interpretation(text: &str) -> Option<String> {
    first_accepted(&NOTE_PATTERNS, text, |caps| {
        let note = caps.get(1)?.as_str().trim();
        if note.chars().count() <= MIN_NOTE_CHARS || note == BOILERPLATE {
            return None;
        }
        Some(note.chars().take(MAX_NOTE_CHARS).collect())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remarks_stop_at_next_section() {
        let text = "Remarks: Mild elevation of bilirubin noted.\nLiver Function Test\nSGOT 40";
        assert_eq!(
            extract_clinical_interpretation(text).as_deref(),
            Some("Mild elevation of bilirubin noted.")
        );
    }

    #[test]
    fn test_boilerplate_falls_through_to_next_label() {
        let text = "Remarks: PLEASE CORRELATE CLINICALLY.\nMethod: Photometry\n\
                    Interpretation: Suggestive of obstructive jaundice";
        assert_eq!(
            extract_clinical_interpretation(text).as_deref(),
            Some("Suggestive of obstructive jaundice")
        );
    }

    #[test]
    fn test_short_note_rejected() {
        assert_eq!(extract_clinical_interpretation("Comments: ok"), None);
        assert_eq!(extract_clinical_interpretation("GLUCOSE 95"), None);
    }

    #[test]
    fn test_note_truncated() {
        let text = format!("Comments: {}", "é".repeat(800));
        let note = extract_clinical_interpretation(&text).unwrap();
        assert_eq!(note.chars().count(), MAX_NOTE_CHARS);
    }
}
