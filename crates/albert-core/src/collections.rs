// Rust guideline compliant 2026-10-17

//! Collections configuration file handling.
//!
//! The configuration is a JSON object keyed by collection name. Each value is
//! an object of free-form attributes that the reconciler extends with an `id`.

use crate::{CollectionId, Error, Result};
use serde::Serialize;
use serde_json::{Map, Value};
use std::fs;
use std::path::{Path, PathBuf};

/// Default location of the collections configuration.
pub const DEFAULT_CONFIG_PATH: &str = "config/data_gouv_search_config.json";

/// Default location of the enriched artifact.
pub const DEFAULT_OUTPUT_PATH: &str = "data/data_gouv_search_collections.json";

const ID_FIELD: &str = "id";

/// In-memory collections configuration, in file order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CollectionsConfig {
    entries: Map<String, Value>,
}

impl CollectionsConfig {
    /// Loads and validates a configuration file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the JSON configuration
    ///
    /// # Returns
    ///
    /// The parsed configuration with entries in file order.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be read
    /// - The file is not valid JSON
    /// - The root or any entry is not a JSON object
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| Error::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let value: Value = serde_json::from_str(&content).map_err(|source| Error::ConfigParse {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_value(value)
    }

    /// Builds a configuration from an already parsed JSON value.
    ///
    /// # Errors
    ///
    /// Returns an error if the root or any entry is not a JSON object.
    pub fn from_value(value: Value) -> Result<Self> {
        let Value::Object(entries) = value else {
            return Err(Error::InvalidConfig(
                "expected a JSON object keyed by collection name".to_string(),
            ));
        };

        if let Some((name, _)) = entries.iter().find(|(_, attrs)| !attrs.is_object()) {
            return Err(Error::InvalidConfig(format!(
                "attributes of collection '{}' must be a JSON object",
                name
            )));
        }

        Ok(Self { entries })
    }

    /// Returns the collection names in file order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Returns the number of collections.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no collections are configured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the attributes of a collection.
    #[must_use]
    pub fn attributes(&self, name: &str) -> Option<&Map<String, Value>> {
        self.entries.get(name).and_then(Value::as_object)
    }

    /// Sets the `id` field of a collection, `None` writing a JSON null.
    ///
    /// Unknown names are ignored.
    pub fn set_id(&mut self, name: &str, id: Option<&CollectionId>) {
        if let Some(attrs) = self.entries.get_mut(name).and_then(Value::as_object_mut) {
            let value = id.map_or(Value::Null, |id| Value::String(id.as_str().to_string()));
            attrs.insert(ID_FIELD.to_string(), value);
        }
    }

    /// Renders the configuration with 4-space indentation.
    ///
    /// Non-ASCII characters are written as-is.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_pretty_json(&self) -> Result<String> {
        let mut buffer = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);
        self.entries.serialize(&mut serializer)?;
        String::from_utf8(buffer).map_err(|e| {
            Error::Io(std::io::Error::new(std::io::ErrorKind::InvalidData, e))
        })
    }

    /// Writes the configuration to `path`, replacing any previous file.
    ///
    /// Missing parent directories are created. Uses atomic write operations
    /// (temp file + rename) so readers never observe a partial artifact.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The parent directory cannot be created
    /// - The temp file cannot be written
    /// - The rename fails
    pub fn save(&self, path: &Path) -> Result<()> {
        use std::io::Write;

        let json = self.to_pretty_json()?;

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        let temp_path = temp_path_for(path);
        {
            let mut file = fs::File::create(&temp_path)?;
            file.write_all(json.as_bytes())?;
            file.sync_all()?;
        }

        if let Err(e) = fs::rename(&temp_path, path) {
            let _ = fs::remove_file(&temp_path);
            return Err(e.into());
        }

        Ok(())
    }
}

fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}
