//! Record store abstraction
//!
//! A record store persists extraction results as flat rows, one per lab
//! test, and reports read-only statistics about what it holds.

use crate::domain::{ExtractionResult, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Timestamp format of the `extraction_date` column
pub const EXTRACTION_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One stored row: a lab test flattened together with its report header
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabRecordRow {
    pub patient_name: Option<String>,
    pub age: Option<u32>,
    pub sex: Option<String>,
    pub uhid: Option<String>,
    pub episode: Option<String>,
    pub ref_doctor: Option<String>,
    pub test_name: String,
    pub test_value: String,
    pub unit: String,
    pub reference_range: String,
    pub status: String,
    pub bill_no: Option<String>,
    pub facility: Option<String>,
    pub sample_no: Option<String>,
    pub collection_date: Option<String>,
    pub report_date: Option<String>,
    pub extraction_date: String,
}

impl LabRecordRow {
    /// Flattens a result into one row per lab test, in test order
    ///
    /// The facility comes from the order header, falling back to the one
    /// found with the patient block.
    pub fn rows_for(result: &ExtractionResult) -> Vec<Self> {
        let patient = &result.patient;
        let order = &result.order;
        let extraction_date = result
            .metadata
            .extraction_timestamp
            .format(EXTRACTION_DATE_FORMAT)
            .to_string();
        let facility = order.facility.clone().or_else(|| patient.facility.clone());

        result
            .lab_tests
            .iter()
            .map(|test| Self {
                patient_name: patient.name.clone(),
                age: patient.age,
                sex: patient.sex.clone(),
                uhid: patient.uhid.clone(),
                episode: patient.episode.clone(),
                ref_doctor: patient.referring_doctor.clone(),
                test_name: test.test_name.clone(),
                test_value: test.value.clone(),
                unit: test.unit.clone(),
                reference_range: test.reference_range.clone(),
                status: test.status.as_str().to_string(),
                bill_no: order.bill_no.clone(),
                facility: facility.clone(),
                sample_no: order.sample_no.clone(),
                collection_date: order.collection_date.clone(),
                report_date: order.report_date.clone(),
                extraction_date: extraction_date.clone(),
            })
            .collect()
    }
}

/// Read-only statistics about a record store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreStats {
    /// Whether the backing store exists yet
    pub exists: bool,

    /// Number of stored rows
    pub total_records: usize,

    /// Number of distinct non-null patient names
    pub unique_patients: usize,

    /// Location of the backing store
    pub path: String,
}

/// Record store trait for persisting extraction results
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Appends one row per lab test in `result`
    ///
    /// # Arguments
    ///
    /// * `result` - Extraction result to store
    /// * `dry_run` - If true, count the rows without writing them
    ///
    /// # Returns
    ///
    /// The number of rows written (or that would have been written).
    /// A result without lab tests writes nothing and returns 0.
    ///
    /// # Errors
    ///
    /// Returns an error if the rows cannot be written.
    async fn append(&self, result: &ExtractionResult, dry_run: bool) -> Result<usize>;

    /// Reads statistics about the stored rows
    ///
    /// # Errors
    ///
    /// Returns an error if the store exists but cannot be read or decoded.
    async fn stats(&self) -> Result<StoreStats>;

    /// Human-readable location of the store
    fn location(&self) -> String;
}
