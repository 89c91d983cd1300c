use crate::models::{Client, Property};
use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur while loading the catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid catalog JSON: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("Duplicate {kind} id: {id}")]
    DuplicateId { kind: &'static str, id: String },
}

/// Seed file layout
#[derive(Debug, Default, Deserialize)]
struct CatalogSeed {
    #[serde(default)]
    clients: Vec<Client>,
    #[serde(default)]
    properties: Vec<Property>,
}

/// Read-only in-memory catalog of clients and property listings
///
/// Loaded once at startup and shared across workers behind an `Arc`.
#[derive(Debug, Default)]
pub struct Catalog {
    clients: Vec<Client>,
    properties: Vec<Property>,
}

impl Catalog {
    pub fn new(clients: Vec<Client>, properties: Vec<Property>) -> Result<Self, CatalogError> {
        ensure_unique("client", clients.iter().map(|c| c.id.as_str()))?;
        ensure_unique("property", properties.iter().map(|p| p.id.as_str()))?;

        Ok(Self { clients, properties })
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// Parse a catalog from its JSON seed representation
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let seed: CatalogSeed = serde_json::from_str(json)?;
        Self::new(seed.clients, seed.properties)
    }

    /// Load the catalog from a seed file
    pub async fn load<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let json = tokio::fs::read_to_string(path).await?;
        let catalog = Self::from_json(&json)?;

        tracing::info!(
            "Loaded catalog from {} ({} clients, {} properties)",
            path.display(),
            catalog.clients.len(),
            catalog.properties.len()
        );

        Ok(catalog)
    }

    pub fn clients(&self) -> &[Client] {
        &self.clients
    }

    pub fn properties(&self) -> &[Property] {
        &self.properties
    }

    pub fn client(&self, id: &str) -> Option<&Client> {
        self.clients.iter().find(|c| c.id == id)
    }

    pub fn property(&self, id: &str) -> Option<&Property> {
        self.properties.iter().find(|p| p.id == id)
    }

    /// Resolve property ids in the given order, reporting the first unknown id
    pub fn properties_by_id(&self, ids: &[String]) -> Result<Vec<Property>, String> {
        ids.iter()
            .map(|id| self.property(id).cloned().ok_or_else(|| id.clone()))
            .collect()
    }
}

fn ensure_unique<'a>(kind: &'static str, ids: impl Iterator<Item = &'a str>) -> Result<(), CatalogError> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(CatalogError::DuplicateId { kind, id: id.to_string() });
        }
    }
    Ok(())
}
