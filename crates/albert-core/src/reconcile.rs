// Rust guideline compliant 2026-10-17

//! Reconciliation of configured collections with catalog identifiers.

use crate::{CollectionCatalog, CollectionsConfig, Resolution, Result};
use std::path::{Path, PathBuf};

/// Summary of a completed reconciliation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReconcileReport {
    /// Collections that received an identifier, in configuration order.
    pub found: Vec<String>,
    /// Collections left with a null identifier, in configuration order.
    ///
    /// This includes collections the catalog lists without an id.
    pub missing: Vec<String>,
    /// Where the artifact was written.
    pub output_path: PathBuf,
}

impl ReconcileReport {
    /// Total number of processed collections.
    #[must_use]
    pub fn total(&self) -> usize {
        self.found.len() + self.missing.len()
    }
}

/// Merges catalog identifiers into a collections configuration.
pub struct Reconciler<'a> {
    catalog: &'a dyn CollectionCatalog,
    output_path: PathBuf,
}

impl<'a> Reconciler<'a> {
    /// Creates a reconciler writing to `output_path`.
    pub fn new(catalog: &'a dyn CollectionCatalog, output_path: impl Into<PathBuf>) -> Self {
        Self {
            catalog,
            output_path: output_path.into(),
        }
    }

    /// Loads `config_path`, resolves every collection and writes the artifact.
    ///
    /// Each collection is looked up with its own catalog request. A collection
    /// the catalog does not know gets a null `id`; any transport or parse
    /// failure aborts the run before anything is written.
    ///
    /// # Arguments
    ///
    /// * `config_path` - Path to the collections configuration
    ///
    /// # Returns
    ///
    /// A report of found and missing collections.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The configuration cannot be loaded
    /// - A catalog request fails
    /// - The artifact cannot be written
    pub fn reconcile(&self, config_path: &Path) -> Result<ReconcileReport> {
        let mut config = CollectionsConfig::load(config_path)?;
        tracing::debug!(
            path = %config_path.display(),
            collections = config.len(),
            "Loaded collections configuration"
        );
        self.reconcile_config(&mut config)
    }

    /// Resolves every collection of an in-memory configuration and writes it.
    ///
    /// # Errors
    ///
    /// Returns an error if a catalog request fails or the artifact cannot be
    /// written.
    pub fn reconcile_config(&self, config: &mut CollectionsConfig) -> Result<ReconcileReport> {
        let names: Vec<String> = config.names().map(str::to_string).collect();
        let mut found = Vec::new();
        let mut missing = Vec::new();

        for name in names {
            match self.catalog.resolve_one(&name)? {
                Resolution::Found(id) => {
                    config.set_id(&name, Some(&id));
                    tracing::info!("Collection '{}' found with ID: {}", name, id);
                    found.push(name);
                }
                Resolution::Unidentified => {
                    config.set_id(&name, None);
                    tracing::info!("Collection '{}' found with ID: None", name);
                    missing.push(name);
                }
                Resolution::NotFound => {
                    config.set_id(&name, None);
                    tracing::error!("Collection '{}' not found. ID: None", name);
                    missing.push(name);
                }
            }
        }

        config.save(&self.output_path)?;
        tracing::info!(
            path = %self.output_path.display(),
            "Configuration file updated with collection IDs."
        );

        Ok(ReconcileReport {
            found,
            missing,
            output_path: self.output_path.clone(),
        })
    }
}
