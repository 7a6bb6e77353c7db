//! Fixed-vocabulary diagnosis and medication spotting
//!
//! A term present anywhere in the text, ignoring case, yields one entry in
//! vocabulary order. There is no contextual disambiguation: "no evidence of
//! hepatitis" still reports hepatitis.

use crate::domain::{Diagnosis, Medication};

/// Category attached to every spotted diagnosis
pub const DIAGNOSIS_CATEGORY: &str = "Disease/Condition";

/// Category attached to every spotted medication
pub const MEDICATION_CATEGORY: &str = "Medication/Chemical";

const DIAGNOSIS_TERMS: &[&str] = &[
    "diabetes",
    "hypertension",
    "anemia",
    "liver disease",
    "kidney disease",
    "heart disease",
    "hepatitis",
    "cirrhosis",
    "infection",
    "inflammation",
];

const MEDICATION_TERMS: &[&str] = &[
    "aspirin",
    "metformin",
    "warfarin",
    "heparin",
    "vitamin k",
    "paracetamol",
    "antibiotic",
];

/// Known diseases and conditions mentioned anywhere in the text, in vocabulary order.
///
/// ```
/// use labex::extraction::extract_diagnoses;
///
/// let diagnoses = extract_diagnoses("Chronic liver disease with HYPERTENSION");
/// assert_eq!(diagnoses[0].condition, "Hypertension");
/// assert_eq!(diagnoses[1].condition, "Liver Disease");
/// ```
pub fn extract_diagnoses(text: &str) -> Vec<Diagnosis> {
    spot(text, DIAGNOSIS_TERMS)
        .map(|condition| Diagnosis {
            condition,
            category: DIAGNOSIS_CATEGORY.to_string(),
        })
        .collect()
}

/// Known drugs and chemicals mentioned anywhere in the text, in vocabulary order.
pub fn extract_medications(text: &str) -> Vec<Medication> {
    spot(text, MEDICATION_TERMS)
        .map(|name| Medication {
            name,
            category: MEDICATION_CATEGORY.to_string(),
        })
        .collect()
}

/// Title-cased vocabulary terms present in `text`.
fn spot<'a>(text: &str, vocabulary: &'a [&'a str]) -> impl Iterator<Item = String> + 'a {
    let lower = text.to_lowercase();
    vocabulary
        .iter()
        .filter(move |term| lower.contains(*term))
        .map(|term| title_case(term))
}

fn title_case(term: &str) -> String {
    term.split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diagnoses_in_vocabulary_order() {
        let text = "Known case of HEPATITIS B. History of Diabetes.";
        let conditions: Vec<String> = extract_diagnoses(text)
            .into_iter()
            .map(|d| d.condition)
            .collect();
        assert_eq!(conditions, vec!["Diabetes", "Hepatitis"]);
    }

    #[test]
    fn test_multi_word_terms_title_cased() {
        let diagnoses = extract_diagnoses("suspected chronic liver disease");
        assert_eq!(diagnoses.len(), 1);
        assert_eq!(diagnoses[0].condition, "Liver Disease");
        assert_eq!(diagnoses[0].category, DIAGNOSIS_CATEGORY);

        let medications = extract_medications("On VITAMIN K and aspirin");
        let names: Vec<&str> = medications.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["Aspirin", "Vitamin K"]);
        assert!(medications.iter().all(|m| m.category == MEDICATION_CATEGORY));
    }

    #[test]
    fn test_negated_mention_still_reported() {
        let diagnoses = extract_diagnoses("No evidence of cirrhosis");
        assert_eq!(diagnoses[0].condition, "Cirrhosis");
    }

    #[test]
    fn test_substring_match() {
        // "heparin" inside "heparinised"
        let medications = extract_medications("Sample: heparinised plasma");
        assert_eq!(medications[0].name, "Heparin");
    }

    #[test]
    fn test_nothing_spotted() {
        assert!(extract_diagnoses("GLUCOSE 95 mg/dl").is_empty());
        assert!(extract_medications("").is_empty());
    }
}
