//! Record store layer
//!
//! Trait-based persistence for extraction results. The JSON-lines
//! implementation is the only backend.

pub mod factory;
pub mod jsonl;
pub mod traits;

pub use factory::create_record_store;
pub use jsonl::JsonLinesStore;
pub use traits::{LabRecordRow, RecordStore, StoreStats};
