// Rust guideline compliant 2026-10-17

//! Albert Core Library
//!
//! This crate provides the reconciliation pipeline behind `albert-collections`:
//! - Runtime settings (catalog URL, bearer key, request timeout)
//! - The remote catalog client and its `CollectionCatalog` seam
//! - Collection configuration loading and atomic artifact writes
//! - The reconciler that merges resolved IDs into the configuration
//! - Error types and result handling

pub mod catalog;
pub mod collections;
pub mod error;
pub mod reconcile;
pub mod settings;

pub use catalog::{
    CatalogMatch, CollectionCatalog, CollectionId, CollectionPage, CollectionRecord, HttpCatalog,
    Resolution, PAGE_LIMIT, PAGE_OFFSET,
};
pub use collections::{CollectionsConfig, DEFAULT_CONFIG_PATH, DEFAULT_OUTPUT_PATH};
pub use error::{Error, ErrorKind, Result};
pub use reconcile::{ReconcileReport, Reconciler};
pub use settings::{Settings, DEFAULT_ENV_FILE, DEFAULT_TIMEOUT_SECS};
