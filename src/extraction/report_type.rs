//! Report classification

use crate::domain::ReportType;

/// Classifies the whole document by keyword, first rule wins.
///
/// Keywords are plain lowercase substrings, so short tokens such as `pt`
/// also match inside longer words.
pub fn detect_report_type(text: &str) -> ReportType {
    let lower = text.to_lowercase();
    let has = |keyword: &str| lower.contains(keyword);

    if has("differential count") || has("neutrophils") {
        ReportType::CbcWithDifferential
    } else if has("liver function") || has("lft") || (has("sgot") && has("sgpt")) {
        ReportType::LiverFunction
    } else if has("coagulation") || (has("pt") && has("inr")) {
        ReportType::CoagulationPanel
    } else if has("cbc") || has("complete blood count") {
        ReportType::CompleteBloodCount
    } else {
        ReportType::General
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("DIFFERENTIAL COUNT\nLFT" => ReportType::CbcWithDifferential; "differential outranks lft")]
    #[test_case("Neutrophils. 58" => ReportType::CbcWithDifferential; "neutrophils")]
    #[test_case("Liver Function Test" => ReportType::LiverFunction; "liver function")]
    #[test_case("SGOT 40\nSGPT 32" => ReportType::LiverFunction; "both transaminases")]
    #[test_case("SGOT 40" => ReportType::General; "single transaminase")]
    #[test_case("PT 13.2 sec\nINR 1.1" => ReportType::CoagulationPanel; "pt and inr")]
    #[test_case("Coagulation profile" => ReportType::CoagulationPanel; "coagulation")]
    #[test_case("CBC\nHaemoglobin 13" => ReportType::CompleteBloodCount; "cbc")]
    #[test_case("GLUCOSE 95 mg/dl" => ReportType::General; "fallthrough")]
    #[test_case("" => ReportType::General; "empty")]
    fn test_detect_report_type(text: &str) -> ReportType {
        detect_report_type(text)
    }
}
