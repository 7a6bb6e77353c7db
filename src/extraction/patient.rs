//! Patient demographics extraction
//!
//! Each field owns an ordered pattern table. Fields are resolved
//! independently: the first pattern whose first match survives the field's
//! checks wins, and a field with no surviving match stays `None`.

use super::order::resolve_facility;
use super::patterns::{compile_all, first_accepted, first_capture};
use crate::domain::PatientInfo;
use regex::Regex;
use std::sync::LazyLock;

static NAME_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    compile_all(&[
        r"(?im)PATIENT\s+NAME\s*[:=]?\s*([A-Z\s]+?)(?:\s+Age\b|\s*UHID|\s*IPID|\s*Referred|$)",
        r"(?im)Patient\s+Name\s*[:=]\s*([A-Z\s\.]+?)(?:\s+Age\b|\s*UHID|$)",
        r"(?im)Patient\s*[:=]\s*([A-Z\s\.]+?)(?:\s+Age\b|\s+Sex\b|$)",
    ])
});

static AGE_SEX_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    compile_all(&[
        r"(?i)Age\s*[/\\]\s*Sex\s*[:=]?\s*(\d+)\s*Y(?:ears?|rs?)?\b.*?\b(Male|Female|M|F)\b",
        r"(?i)Age\s*[:=]?\s*(\d+).*?\b(Male|Female|M|F)\b",
        r"(?i)\b(\d{2,3})\s*Y(?:ears?|rs?)?\b.*?\b(Male|Female|M|F)\b",
    ])
});

static UHID_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    compile_all(&[r"(?i)(?:UHID|IPID|Patient\s*ID|MRN|Admn\s*No)\s*[:=]\s*([A-Z0-9\.\-]+)"])
});

static EPISODE_PATTERNS: LazyLock<Vec<Regex>> =
    LazyLock::new(|| compile_all(&[r"(?i)Episode\s*[:=]\s*([A-Z0-9\-]+)"]));

static DOCTOR_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    compile_all(&[
        r"(?im)(?:Referred\s+By|Ref\.?\s*Doctor|By)\s*[:=]\s*([A-Z\s\./]+?)(?:\s+Ward|\s*Date|\s*Report|$)",
    ])
});

/// Contiguous 10-13 digit numbers, then the split `98765 43210` form
static MOBILE_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    compile_all(&[
        r"(?i)\bMob(?:ile)?\.?\s*(?:No\.?)?\s*[:=]?\s*(\+?\d{10,13})\b",
        r"(?i)\bMob(?:ile)?\.?\s*(?:No\.?)?\s*[:=]?\s*(\d{5}[\- ]\d{5})\b",
    ])
});

static WARD_PATTERNS: LazyLock<Vec<Regex>> =
    LazyLock::new(|| compile_all(&[r"(?i)\bWard\s*(?:No\.?)?\s*[:=]\s*([A-Z0-9\-]+)"]));

static BED_PATTERNS: LazyLock<Vec<Regex>> =
    LazyLock::new(|| compile_all(&[r"(?i)\bBed\s*(?:No\.?)?\s*[:=]\s*([A-Z0-9\-]+)"]));

/// Minimum length of an accepted referring doctor name
const MIN_DOCTOR_NAME_LEN: usize = 4;

/// Extracts patient demographics from the whole report text.
pub fn extract_patient_info(text: &str) -> PatientInfo {
    let mut patient = PatientInfo {
        name: first_accepted(&NAME_PATTERNS, text, |caps| clean_person_name(&caps[1])),
        uhid: first_capture(&UHID_PATTERNS, text),
        episode: first_capture(&EPISODE_PATTERNS, text),
        referring_doctor: first_accepted(&DOCTOR_PATTERNS, text, |caps| {
            clean_person_name(&caps[1]).filter(|name| is_plausible_doctor(name))
        }),
        facility: resolve_facility(text),
        mobile_no: first_capture(&MOBILE_PATTERNS, text),
        ward: first_capture(&WARD_PATTERNS, text),
        bed: first_capture(&BED_PATTERNS, text),
        ..Default::default()
    };

    if let Some((age, sex)) = first_accepted(&AGE_SEX_PATTERNS, text, |caps| {
        let age = match caps[1].parse::<u32>() {
            Ok(age) => age,
            Err(e) => {
                tracing::debug!(candidate = &caps[1], error = %e, "Discarding unparseable age");
                return None;
            }
        };
        let sex = caps[2].chars().next()?.to_ascii_uppercase().to_string();
        Some((age, sex))
    }) {
        patient.age = Some(age);
        patient.sex = Some(sex);
    }

    tracing::debug!(
        name_found = patient.name.is_some(),
        age_found = patient.age.is_some(),
        uhid_found = patient.uhid.is_some(),
        "Patient information extracted"
    );

    patient
}

/// Collapses whitespace and strips trailing punctuation from a captured name.
fn clean_person_name(raw: &str) -> Option<String> {
    let collapsed = raw.split_whitespace().collect::<Vec<_>>().join(" ");
    let cleaned = collapsed.trim_end_matches([',', ':', '=', '/']).trim();
    (!cleaned.is_empty()).then(|| cleaned.to_string())
}

/// Rejects short captures and facility names caught by a doctor label.
fn is_plausible_doctor(name: &str) -> bool {
    name.chars().count() >= MIN_DOCTOR_NAME_LEN && !name.to_uppercase().contains("HOSPITAL")
}
