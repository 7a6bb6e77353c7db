//! Analysis pipeline - document to stored rows
//!
//! Composes the document adapter, the extraction engine and the record
//! store. Store write failures do not fail the analysis: the extraction is
//! still returned, with the failure reported in [`ExportInfo`].

use crate::adapters::document::{DocumentToText, PlainTextAdapter};
use crate::adapters::store::{create_record_store, RecordStore, StoreStats};
use crate::config::LabexConfig;
use crate::domain::{ExtractionError, ExtractionResult, LabexError, Result};
use crate::extraction::extract;
use crate::log_error_with_context;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::Arc;

/// Outcome of appending one result to the record store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportInfo {
    /// Whether any row was stored
    pub success: bool,

    /// Rows written (or counted, in dry-run mode)
    pub rows_added: usize,

    pub message: String,
}

/// Full outcome of analyzing one document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisOutcome {
    pub result: ExtractionResult,
    pub export: ExportInfo,
    pub stats: StoreStats,
}

/// Report analysis pipeline
pub struct ReportPipeline {
    documents: Arc<dyn DocumentToText>,
    store: Arc<dyn RecordStore + Send + Sync>,
    min_text_length: usize,
    dry_run: bool,
}

impl ReportPipeline {
    /// Create a pipeline from configuration, reading plain-text documents
    pub fn new(config: &LabexConfig) -> Result<Self> {
        Ok(Self::with_adapters(
            Arc::new(PlainTextAdapter::new()),
            create_record_store(config)?,
            config.extraction.min_text_length,
            config.application.dry_run,
        ))
    }

    /// Create a pipeline from explicit collaborators
    pub fn with_adapters(
        documents: Arc<dyn DocumentToText>,
        store: Arc<dyn RecordStore + Send + Sync>,
        min_text_length: usize,
        dry_run: bool,
    ) -> Self {
        Self {
            documents,
            store,
            min_text_length,
            dry_run,
        }
    }

    /// Enable or disable dry-run mode
    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Extract a document without touching the record store
    ///
    /// # Errors
    ///
    /// Returns a document error if the text cannot be read, or an extraction
    /// error if the text is empty or too short.
    pub fn extract_file(&self, path: &Path) -> Result<ExtractionResult> {
        let text = self.documents.extract_text(path)?;
        self.extract_checked(path, &text)
    }

    /// Extract a document, append its rows and read the store statistics
    ///
    /// # Errors
    ///
    /// Returns the errors of [`extract_file`](Self::extract_file), or a store
    /// error if statistics cannot be read afterwards.
    pub async fn analyze(&self, path: &Path) -> Result<AnalysisOutcome> {
        tracing::info!(path = %path.display(), dry_run = self.dry_run, "Analyzing report");

        let text = self.read_text_blocking(path).await?;
        let result = self.extract_checked(path, &text)?;
        let export = self.export(&result).await;
        let stats = self.store.stats().await?;

        Ok(AnalysisOutcome {
            result,
            export,
            stats,
        })
    }

    /// Read statistics from the record store
    pub async fn stats(&self) -> Result<StoreStats> {
        self.store.stats().await
    }

    /// Runs the document adapter on the blocking thread pool
    async fn read_text_blocking(&self, path: &Path) -> Result<String> {
        let documents = Arc::clone(&self.documents);
        let owned = path.to_path_buf();

        let text = tokio::task::spawn_blocking(move || documents.extract_text(&owned))
            .await
            .map_err(|e| LabexError::Other(format!("Document reader task failed: {e}")))??;

        Ok(text)
    }

    fn extract_checked(&self, path: &Path, text: &str) -> Result<ExtractionResult> {
        let length = text.trim().chars().count();
        if length < self.min_text_length {
            tracing::warn!(
                path = %path.display(),
                length,
                minimum = self.min_text_length,
                "Insufficient text extracted from document"
            );
            return Err(ExtractionError::InsufficientText {
                length,
                minimum: self.min_text_length,
            }
            .into());
        }

        Ok(extract(text)?)
    }

    async fn export(&self, result: &ExtractionResult) -> ExportInfo {
        match self.store.append(result, self.dry_run).await {
            Ok(rows_added) => {
                let message = if self.dry_run {
                    format!(
                        "Dry run: {} lab test records would be added to {}",
                        rows_added,
                        self.store.location()
                    )
                } else {
                    format!(
                        "Added {} lab test records to {}",
                        rows_added,
                        self.store.location()
                    )
                };
                ExportInfo {
                    success: rows_added > 0,
                    rows_added,
                    message,
                }
            }
            Err(e) => {
                log_error_with_context!(&e, "Appending lab test records");
                ExportInfo {
                    success: false,
                    rows_added: 0,
                    message: e.to_string(),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{DocumentError, StoreError};
    use async_trait::async_trait;
    use std::sync::Mutex;

    const REPORT: &str = "PATIENT NAME : RAVI KUMAR\n\
                          BIOCHEMISTRY\n\
                          GLUCOSE 95 mg/dl 70-110\n\
                          TOTAL BILIRUBIN 1.8↑ mg/dl 0.4-1.0\n";

    struct FixedText(&'static str);

    impl DocumentToText for FixedText {
        fn extract_text(&self, _path: &Path) -> std::result::Result<String, DocumentError> {
            Ok(self.0.to_string())
        }
    }

    #[derive(Default)]
    struct MemoryStore {
        rows: Mutex<usize>,
        fail: bool,
    }

    #[async_trait]
    impl RecordStore for MemoryStore {
        async fn append(&self, result: &ExtractionResult, dry_run: bool) -> Result<usize> {
            if self.fail {
                return Err(StoreError::WriteFailed("disk full".to_string()).into());
            }
            let count = result.lab_tests.len();
            if !dry_run {
                *self.rows.lock().unwrap() += count;
            }
            Ok(count)
        }

        async fn stats(&self) -> Result<StoreStats> {
            let total_records = *self.rows.lock().unwrap();
            Ok(StoreStats {
                exists: total_records > 0,
                total_records,
                unique_patients: usize::from(total_records > 0),
                path: self.location(),
            })
        }

        fn location(&self) -> String {
            "memory".to_string()
        }
    }

    fn pipeline(text: &'static str, store: MemoryStore) -> ReportPipeline {
        ReportPipeline::with_adapters(Arc::new(FixedText(text)), Arc::new(store), 50, false)
    }

    #[tokio::test]
    async fn test_analyze_appends_rows() {
        let outcome = pipeline(REPORT, MemoryStore::default())
            .analyze(Path::new("report.txt"))
            .await
            .unwrap();

        assert_eq!(outcome.result.lab_tests.len(), 2);
        assert!(outcome.export.success);
        assert_eq!(outcome.export.rows_added, 2);
        assert_eq!(outcome.export.message, "Added 2 lab test records to memory");
        assert_eq!(outcome.stats.total_records, 2);
    }

    #[tokio::test]
    async fn test_analyze_dry_run() {
        let outcome = pipeline(REPORT, MemoryStore::default())
            .dry_run(true)
            .analyze(Path::new("report.txt"))
            .await
            .unwrap();

        assert_eq!(outcome.export.rows_added, 2);
        assert!(outcome.export.message.starts_with("Dry run"));
        assert_eq!(outcome.stats.total_records, 0);
    }

    #[tokio::test]
    async fn test_analyze_rejects_short_text() {
        let err = pipeline("GLUCOSE 95", MemoryStore::default())
            .analyze(Path::new("report.txt"))
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            LabexError::Extraction(ExtractionError::InsufficientText {
                length: 10,
                minimum: 50
            })
        ));
    }

    #[tokio::test]
    async fn test_store_failure_is_reported_not_raised() {
        let store = MemoryStore {
            fail: true,
            ..Default::default()
        };
        let outcome = pipeline(REPORT, store)
            .analyze(Path::new("report.txt"))
            .await
            .unwrap();

        assert!(!outcome.export.success);
        assert_eq!(outcome.export.rows_added, 0);
        assert!(outcome.export.message.contains("disk full"));
    }

    /// Fails if called on a runtime worker, where `block_on` panics
    struct OffRuntimeText;

    impl DocumentToText for OffRuntimeText {
        fn extract_text(&self, _path: &Path) -> std::result::Result<String, DocumentError> {
            tokio::runtime::Handle::current().block_on(async {});
            Ok(REPORT.to_string())
        }
    }

    #[tokio::test]
    async fn test_analyze_reads_document_off_the_runtime() {
        let pipeline = ReportPipeline::with_adapters(
            Arc::new(OffRuntimeText),
            Arc::new(MemoryStore::default()),
            50,
            false,
        );

        let outcome = pipeline.analyze(Path::new("report.txt")).await.unwrap();
        assert_eq!(outcome.result.lab_tests.len(), 2);
    }

    #[test]
    fn test_extract_file_zero_minimum_still_rejects_blank() {
        let pipeline = ReportPipeline::with_adapters(
            Arc::new(FixedText("   ")),
            Arc::new(MemoryStore::default()),
            0,
            false,
        );

        let err = pipeline.extract_file(Path::new("blank.txt")).unwrap_err();
        assert!(matches!(
            err,
            LabexError::Extraction(ExtractionError::EmptyInput)
        ));
    }
}
