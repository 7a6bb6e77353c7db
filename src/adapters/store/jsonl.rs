//! JSON-lines record store
//!
//! Each row is one JSON object on its own line. Appends open the file in
//! append mode and write a whole result's rows in one buffer.

use super::traits::{LabRecordRow, RecordStore, StoreStats};
use crate::domain::{ExtractionResult, Result, StoreError};
use crate::log_rows_appended;
use async_trait::async_trait;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tokio::io::AsyncWriteExt;

/// Record store backed by a JSON-lines file
#[derive(Debug, Clone)]
pub struct JsonLinesStore {
    path: PathBuf,
}

impl JsonLinesStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn encode(rows: &[LabRecordRow]) -> Result<String> {
        let mut buffer = String::new();
        for row in rows {
            let line = serde_json::to_string(row)
                .map_err(|e| StoreError::WriteFailed(format!("Failed to encode row: {e}")))?;
            buffer.push_str(&line);
            buffer.push('\n');
        }
        Ok(buffer)
    }

    async fn write_rows(&self, buffer: &str) -> std::io::Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }

        let mut file = tokio::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await?;
        file.write_all(buffer.as_bytes()).await?;
        file.flush().await
    }
}

#[async_trait]
impl RecordStore for JsonLinesStore {
    async fn append(&self, result: &ExtractionResult, dry_run: bool) -> Result<usize> {
        let rows = LabRecordRow::rows_for(result);

        if rows.is_empty() {
            tracing::warn!(
                path = %self.path.display(),
                "No lab tests to store, nothing written"
            );
            return Ok(0);
        }

        if dry_run {
            log_rows_appended!(rows.len(), self.path.display(), true);
            return Ok(rows.len());
        }

        let buffer = Self::encode(&rows)?;
        self.write_rows(&buffer).await.map_err(|e| {
            StoreError::WriteFailed(format!("{}: {}", self.path.display(), e))
        })?;

        log_rows_appended!(rows.len(), self.path.display(), false);

        Ok(rows.len())
    }

    async fn stats(&self) -> Result<StoreStats> {
        let location = self.location();

        if !tokio::fs::try_exists(&self.path).await.unwrap_or(false) {
            return Ok(StoreStats {
                exists: false,
                total_records: 0,
                unique_patients: 0,
                path: location,
            });
        }

        let contents = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| StoreError::ReadFailed(format!("{location}: {e}")))?;

        let mut total_records = 0;
        let mut patients = HashSet::new();

        for (index, line) in contents.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            let row: LabRecordRow =
                serde_json::from_str(line).map_err(|e| StoreError::CorruptRecord {
                    line: index + 1,
                    message: e.to_string(),
                })?;
            total_records += 1;
            if let Some(name) = row.patient_name {
                patients.insert(name);
            }
        }

        tracing::debug!(
            path = %location,
            total_records,
            unique_patients = patients.len(),
            "Record store statistics read"
        );

        Ok(StoreStats {
            exists: true,
            total_records,
            unique_patients: patients.len(),
            path: location,
        })
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}
