//! Search engine registry and query URL construction.

use std::collections::HashSet;
use std::path::Path;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use serde::Deserialize;

use crate::error::Error;

/// Characters kept verbatim when percent-encoding a query, matching the
/// unreserved set of `encodeURIComponent`.
const QUERY_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Placeholder in an engine's URL template that the query replaces.
pub const QUERY_PLACEHOLDER: &str = "{query}";

#[derive(Debug, Clone, Deserialize)]
pub struct SearchEngine {
    pub id: String,
    pub name: String,
    pub icon: String,
    #[serde(rename = "searchUrl")]
    pub search_url: String,
}

impl SearchEngine {
    /// Substitute the trimmed, percent-encoded query into the engine's URL
    /// template.
    pub fn query_url(&self, query: &str) -> String {
        let encoded = utf8_percent_encode(query.trim(), QUERY_SET).to_string();
        self.search_url.replace(QUERY_PLACEHOLDER, &encoded)
    }
}

/// Ordered list of engines offered by the search box. The first entry is
/// the preselected default.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchRegistry {
    pub engines: Vec<SearchEngine>,
}

impl SearchRegistry {
    /// Load and validate the registry from a JSON file.
    pub fn from_json_file(path: &Path) -> Result<Self, Error> {
        let raw = std::fs::read_to_string(path)?;
        let registry: Self = serde_json::from_str(&raw)?;
        registry.validate()?;
        Ok(registry)
    }

    pub fn validate(&self) -> Result<(), Error> {
        if self.engines.is_empty() {
            return Err(Error::BadRegistry("no engines defined".into()));
        }
        let mut seen = HashSet::new();
        for engine in &self.engines {
            if engine.id.trim().is_empty() {
                return Err(Error::BadRegistry("engine with blank id".into()));
            }
            if !seen.insert(engine.id.as_str()) {
                return Err(Error::BadRegistry(format!(
                    "duplicate engine id '{}'",
                    engine.id
                )));
            }
            if !engine.search_url.contains(QUERY_PLACEHOLDER) {
                return Err(Error::BadRegistry(format!(
                    "engine '{}' template is missing {QUERY_PLACEHOLDER}",
                    engine.id
                )));
            }
        }
        Ok(())
    }

    /// The engine preselected in the search box.
    pub fn default_engine(&self) -> &SearchEngine {
        &self.engines[0]
    }
}
