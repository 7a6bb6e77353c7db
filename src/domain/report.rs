//! Laboratory report domain model
//!
//! This module defines the structured record produced from one report text:
//! patient demographics, order metadata, discrete lab test rows, detected
//! diagnoses and medications, and the report classification.
//!
//! Every optional field uses `None` for "not found in the text". Dates are
//! kept as the literal substring found in the report because source formats
//! vary and OCR damage makes calendar parsing unsafe.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Unit recorded when a test row carries no unit token
pub const UNIT_UNKNOWN: &str = "-";

/// Reference range recorded when a test row carries no range
pub const RANGE_UNKNOWN: &str = "N/A";

/// Method tag stamped on every extraction
pub const EXTRACTION_METHOD: &str = "Universal Pattern Matching";

/// Department label stamped on every extraction
pub const DEPARTMENT_AUTO: &str = "Auto-detected";

/// Abnormality status of a lab value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TestStatus {
    /// Flagged above the reference range
    High,
    /// Flagged below the reference range
    Low,
    /// No abnormality marker present
    Normal,
}

impl TestStatus {
    /// Label used in serialized output
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::High => "High",
            Self::Low => "Low",
            Self::Normal => "Normal",
        }
    }

    /// Whether the value was flagged as outside its reference range
    pub fn is_abnormal(&self) -> bool {
        !matches!(self, Self::Normal)
    }
}

impl fmt::Display for TestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Report classification derived from the whole document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReportType {
    #[serde(rename = "Complete Blood Count (CBC) with Differential")]
    CbcWithDifferential,
    #[serde(rename = "Liver Function Test (LFT)")]
    LiverFunction,
    #[serde(rename = "Coagulation Panel")]
    CoagulationPanel,
    #[serde(rename = "Complete Blood Count")]
    CompleteBloodCount,
    #[serde(rename = "General Laboratory Report")]
    General,
}

impl ReportType {
    /// Human-readable label, identical to the serialized form
    pub fn label(&self) -> &'static str {
        match self {
            Self::CbcWithDifferential => "Complete Blood Count (CBC) with Differential",
            Self::LiverFunction => "Liver Function Test (LFT)",
            Self::CoagulationPanel => "Coagulation Panel",
            Self::CompleteBloodCount => "Complete Blood Count",
            Self::General => "General Laboratory Report",
        }
    }
}

impl fmt::Display for ReportType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Patient demographics
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatientInfo {
    pub name: Option<String>,
    pub age: Option<u32>,
    /// Single-letter code (`M` or `F`)
    pub sex: Option<String>,
    pub uhid: Option<String>,
    pub episode: Option<String>,
    pub referring_doctor: Option<String>,
    pub facility: Option<String>,
    pub mobile_no: Option<String>,
    pub ward: Option<String>,
    pub bed: Option<String>,
}

/// Order and report metadata
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderInfo {
    pub bill_no: Option<String>,
    pub bill_date: Option<String>,
    pub order_date: Option<String>,
    pub report_date: Option<String>,
    pub collection_date: Option<String>,
    pub sample_no: Option<String>,
    pub service_no: Option<String>,
    pub facility: Option<String>,
}

/// One discrete lab test row
///
/// `value` keeps the literal numeric-looking text from the report; it is not
/// coerced to a float because OCR artifacts are common.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabTest {
    pub test_name: String,
    pub value: String,
    pub unit: String,
    pub reference_range: String,
    pub status: TestStatus,
}

impl LabTest {
    /// Creates a lab test row
    pub fn new(
        test_name: impl Into<String>,
        value: impl Into<String>,
        unit: impl Into<String>,
        reference_range: impl Into<String>,
        status: TestStatus,
    ) -> Self {
        Self {
            test_name: test_name.into(),
            value: value.into(),
            unit: unit.into(),
            reference_range: reference_range.into(),
            status,
        }
    }

    /// Key used for case-insensitive de-duplication within one extraction
    pub fn dedup_key(&self) -> String {
        self.test_name.to_lowercase()
    }
}

/// A condition spotted in the report text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnosis {
    pub condition: String,
    pub category: String,
}

/// A medication spotted in the report text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Medication {
    pub name: String,
    pub category: String,
}

/// Provenance of one extraction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionMetadata {
    pub extraction_timestamp: DateTime<Utc>,
    pub extraction_method: String,
    pub department: String,
}

impl ExtractionMetadata {
    /// Metadata stamped at the current instant
    pub fn now() -> Self {
        Self {
            extraction_timestamp: Utc::now(),
            extraction_method: EXTRACTION_METHOD.to_string(),
            department: DEPARTMENT_AUTO.to_string(),
        }
    }
}

/// Structured record produced from one report text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractionResult {
    pub report_type: ReportType,
    pub patient: PatientInfo,
    pub order: OrderInfo,
    pub lab_tests: Vec<LabTest>,
    pub diagnoses: Vec<Diagnosis>,
    pub medications: Vec<Medication>,
    pub clinical_notes: Option<String>,
    pub metadata: ExtractionMetadata,
}

impl ExtractionResult {
    /// Number of tests flagged High or Low
    pub fn abnormal_count(&self) -> usize {
        self.lab_tests
            .iter()
            .filter(|t| t.status.is_abnormal())
            .count()
    }

    /// Looks up a test by name, ignoring case
    pub fn find_test(&self, name: &str) -> Option<&LabTest> {
        let key = name.to_lowercase();
        self.lab_tests.iter().find(|t| t.dedup_key() == key)
    }

    /// Serializes the result into a nested key/value document
    pub fn to_document(&self) -> serde_json::Result<serde_json::Value> {
        serde_json::to_value(self)
    }
}
