//! Abnormality status classification

use crate::domain::TestStatus;

/// Derives a status from inline markers in `window` or the captured `flag`.
///
/// Arrow glyphs take precedence over starred letters. A marker in either
/// input counts, so callers may pass the flag token, the whole line, or both.
pub fn determine_status(window: &str, flag: &str) -> TestStatus {
    let has = |marker: &str| window.contains(marker) || flag.contains(marker);

    if has("↑") {
        TestStatus::High
    } else if has("↓") {
        TestStatus::Low
    } else if has("*H") {
        TestStatus::High
    } else if has("*L") {
        TestStatus::Low
    } else {
        TestStatus::Normal
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("TOTAL BILIRUBIN 1.8↑ mg/dl", "" => TestStatus::High; "up arrow in window")]
    #[test_case("ALBUMIN 2.1 gm/dl", "↓" => TestStatus::Low; "down arrow in flag")]
    #[test_case("SGPT 88 *H IU/L", "" => TestStatus::High; "starred high")]
    #[test_case("HB 9.2 *L gm/dl", "" => TestStatus::Low; "starred low")]
    #[test_case("GLUCOSE 95 mg/dl 70-110", "" => TestStatus::Normal; "no marker")]
    #[test_case("VALUE 3 *L", "↑" => TestStatus::High; "arrow beats starred letter")]
    #[test_case("HB 9.2 H gm/dl", "H" => TestStatus::Normal; "bare letter is not a marker")]
    fn test_determine_status(window: &str, flag: &str) -> TestStatus {
        determine_status(window, flag)
    }
}
