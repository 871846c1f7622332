// Rust guideline compliant 2026-10-17

//! Remote catalog client.
//!
//! The catalog exposes a paginated `GET /collections` listing. Lookups fetch a
//! single page (offset 0, limit 15) and match requested names against it;
//! names outside that page are reported as not found.

use crate::{Error, Result, Settings};
use reqwest::blocking::Client;
use reqwest::header::ACCEPT;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt;

/// Offset sent with every listing request.
pub const PAGE_OFFSET: u32 = 0;

/// Page size sent with every listing request.
pub const PAGE_LIMIT: u32 = 15;

/// Opaque collection identifier assigned by the catalog.
///
/// The catalog may send string or numeric IDs; numbers are kept in their
/// decimal form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct CollectionId(String);

impl CollectionId {
    /// Creates an identifier from its string form.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Reads an identifier from a listing value.
    ///
    /// Returns `None` for values that cannot name a collection (booleans,
    /// null, arrays, objects).
    #[must_use]
    pub fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::String(text) => Some(Self(text.clone())),
            Value::Number(n) => Some(Self(n.to_string())),
            _ => None,
        }
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CollectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One entry of the catalog listing.
///
/// Fields of an unexpected type are read as absent, so an odd record never
/// invalidates the rest of the page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CollectionRecord {
    /// Display name of the collection.
    pub name: Option<String>,

    /// Catalog identifier.
    pub id: Option<CollectionId>,
}

impl CollectionRecord {
    /// Reads a record from one element of the listing's `data` array.
    #[must_use]
    pub fn from_value(value: &Value) -> Self {
        Self {
            name: value.get("name").and_then(Value::as_str).map(str::to_string),
            id: value.get("id").and_then(CollectionId::from_value),
        }
    }
}

/// Body of a `GET /collections` response.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CollectionPage {
    /// Records on this page.
    #[serde(default, deserialize_with = "deserialize_records")]
    pub data: Vec<CollectionRecord>,
}

fn deserialize_records<'de, D>(
    deserializer: D,
) -> std::result::Result<Vec<CollectionRecord>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Vec<Value>>::deserialize(deserializer)?;
    Ok(raw
        .unwrap_or_default()
        .iter()
        .map(CollectionRecord::from_value)
        .collect())
}

impl CollectionPage {
    /// Matches requested names against the page.
    ///
    /// For each requested name the first record carrying that name wins, even
    /// when that record has no usable id. Matches are returned in the order of
    /// `names`.
    #[must_use]
    pub fn match_names(&self, names: &[&str]) -> Vec<CatalogMatch> {
        let mut matches: Vec<CatalogMatch> = Vec::new();
        for name in names {
            if matches.iter().any(|m| m.name == *name) {
                continue;
            }
            let hit = self
                .data
                .iter()
                .find(|record| record.name.as_deref() == Some(*name));
            if let Some(record) = hit {
                matches.push(CatalogMatch {
                    name: (*name).to_string(),
                    id: record.id.clone(),
                });
            }
        }
        matches
    }

    /// Returns true when the page holds as many records as were requested.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.data.len() >= PAGE_LIMIT as usize
    }
}

/// A requested name found in the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogMatch {
    /// Requested collection name.
    pub name: String,
    /// Identifier reported by the catalog, if the record carried one.
    pub id: Option<CollectionId>,
}

/// Outcome of a single-name lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// The catalog knows the collection.
    Found(CollectionId),
    /// The catalog lists the collection without a usable id.
    Unidentified,
    /// The collection is absent from the inspected page.
    NotFound,
}

impl Resolution {
    /// Returns the identifier when found.
    #[must_use]
    pub fn id(&self) -> Option<&CollectionId> {
        match self {
            Resolution::Found(id) => Some(id),
            Resolution::Unidentified | Resolution::NotFound => None,
        }
    }
}

/// Source of collection identifiers.
///
/// Transport and parse failures are returned as `Err`; a name that is simply
/// absent is not an error.
pub trait CollectionCatalog {
    /// Resolves several names with one catalog lookup.
    ///
    /// # Arguments
    ///
    /// * `names` - Collection names to look up
    ///
    /// # Returns
    ///
    /// Matches for the subset of `names` the catalog knows, in request order.
    ///
    /// # Errors
    ///
    /// Returns an error if the catalog cannot be reached or its answer cannot
    /// be parsed.
    fn resolve(&self, names: &[&str]) -> Result<Vec<CatalogMatch>>;

    /// Resolves a single name.
    ///
    /// # Errors
    ///
    /// Propagates the errors of [`CollectionCatalog::resolve`].
    fn resolve_one(&self, name: &str) -> Result<Resolution> {
        let matches = self.resolve(&[name])?;
        Ok(match matches.into_iter().next() {
            Some(CatalogMatch { id: Some(id), .. }) => Resolution::Found(id),
            Some(CatalogMatch { id: None, .. }) => Resolution::Unidentified,
            None => Resolution::NotFound,
        })
    }
}

/// Catalog client backed by the remote HTTP API.
#[derive(Clone)]
pub struct HttpCatalog {
    client: Client,
    collections_url: String,
    api_key: String,
}

impl HttpCatalog {
    /// Creates a client for the catalog described by `settings`.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(settings: &Settings) -> Result<Self> {
        let client = Client::builder()
            .user_agent(format!("albert-collections/{}", env!("CARGO_PKG_VERSION")))
            .timeout(settings.timeout)
            .build()?;

        Ok(Self {
            client,
            collections_url: settings.collections_url(),
            api_key: settings.api_key.clone(),
        })
    }

    /// Fetches the single listing page used for lookups.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The request fails or times out
    /// - The catalog answers with a non-2xx status
    /// - The body is not a JSON listing
    pub fn fetch_page(&self) -> Result<CollectionPage> {
        tracing::debug!(
            url = %self.collections_url,
            offset = PAGE_OFFSET,
            limit = PAGE_LIMIT,
            "Listing catalog collections"
        );

        let response = self
            .client
            .get(&self.collections_url)
            .query(&[("offset", PAGE_OFFSET), ("limit", PAGE_LIMIT)])
            .header(ACCEPT, "application/json")
            .bearer_auth(&self.api_key)
            .send()
            .map_err(|e| {
                tracing::error!("Error during HTTP request: {}", e);
                Error::Transport(e)
            })?;

        let status = response.status();
        if !status.is_success() {
            tracing::error!(
                "Error during HTTP request: catalog returned HTTP {}",
                status.as_u16()
            );
            return Err(Error::HttpStatus {
                status: status.as_u16(),
                url: self.collections_url.clone(),
            });
        }

        let body = response.text()?;
        serde_json::from_str(&body).map_err(|e| {
            tracing::error!("Error during JSON parsing: {}", e);
            Error::CatalogParse(e)
        })
    }
}

impl CollectionCatalog for HttpCatalog {
    fn resolve(&self, names: &[&str]) -> Result<Vec<CatalogMatch>> {
        let page = self.fetch_page()?;
        let matches = page.match_names(names);

        let not_found: Vec<&str> = names
            .iter()
            .copied()
            .filter(|name| !matches.iter().any(|m| m.name == *name))
            .collect();

        if !not_found.is_empty() {
            tracing::error!("Collections not found: {:?}", not_found);
            if page.is_full() {
                tracing::warn!(
                    limit = PAGE_LIMIT,
                    "Only the first catalog page is inspected; collections beyond it cannot be resolved"
                );
            }
        }

        Ok(matches)
    }
}
