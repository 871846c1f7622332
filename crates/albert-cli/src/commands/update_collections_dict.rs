// Rust guideline compliant 2026-10-17

//! Implementation of the `update_collections_dict` command.
//!
//! Resolves every collection of the configuration file against the catalog
//! and writes the enriched artifact to `data/data_gouv_search_collections.json`.

use albert_core::{
    HttpCatalog, ReconcileReport, Reconciler, Settings, DEFAULT_ENV_FILE, DEFAULT_OUTPUT_PATH,
};
use anyhow::{Context, Result};
use std::path::Path;

/// Updates the collections dictionary from `config_file`.
///
/// Settings are read from `.env` (when present) and the process environment.
///
/// # Arguments
///
/// * `config_file` - Path to the collections configuration
///
/// # Returns
///
/// The reconciliation report.
///
/// # Errors
///
/// Returns an error if:
/// - `API_URL` or `API_KEY` is missing or invalid
/// - The configuration cannot be loaded
/// - A catalog request fails
/// - The artifact cannot be written
pub fn execute(config_file: &Path) -> Result<ReconcileReport> {
    let settings = Settings::load(Path::new(DEFAULT_ENV_FILE)).context("loading settings")?;
    tracing::debug!(?settings, "Settings loaded");

    let catalog = HttpCatalog::new(&settings)?;
    let reconciler = Reconciler::new(&catalog, DEFAULT_OUTPUT_PATH);

    tracing::info!(
        "Updating collections dictionary from {}",
        config_file.display()
    );
    let report = reconciler.reconcile(config_file)?;

    tracing::info!(
        found = report.found.len(),
        missing = report.missing.len(),
        "Collections dictionary updated successfully."
    );
    Ok(report)
}
