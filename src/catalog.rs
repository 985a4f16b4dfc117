//! Static navigation data: categories of bookmarked websites.

use std::collections::HashSet;
use std::path::Path;

use serde::Deserialize;

use crate::error::Error;

/// A single bookmarked website inside a category.
#[derive(Debug, Clone, Deserialize)]
pub struct Website {
    pub title: String,
    pub url: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub icon: Option<String>,
}

/// A named group of websites.
#[derive(Debug, Clone, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub icon: Option<String>,
    pub websites: Vec<Website>,
}

/// The whole navigation catalog, as bundled in the sites JSON file.
#[derive(Debug, Clone, Deserialize)]
pub struct Catalog {
    pub categories: Vec<Category>,
}

impl Catalog {
    /// Load and validate the catalog from a JSON file.
    pub fn from_json_file(path: &Path) -> Result<Self, Error> {
        let raw = std::fs::read_to_string(path)?;
        let catalog: Self = serde_json::from_str(&raw)?;
        catalog.validate()?;
        Ok(catalog)
    }

    pub fn validate(&self) -> Result<(), Error> {
        let mut seen = HashSet::new();
        for category in &self.categories {
            if category.id.trim().is_empty() {
                return Err(Error::BadCatalog("category with blank id".into()));
            }
            if category.name.trim().is_empty() {
                return Err(Error::BadCatalog(format!(
                    "category '{}' has a blank name",
                    category.id
                )));
            }
            if !seen.insert(category.id.as_str()) {
                return Err(Error::BadCatalog(format!(
                    "duplicate category id '{}'",
                    category.id
                )));
            }
            for site in &category.websites {
                if site.title.trim().is_empty() {
                    return Err(Error::BadCatalog(format!(
                        "website without a title in category '{}'",
                        category.id
                    )));
                }
                if site.url.trim().is_empty() {
                    return Err(Error::BadCatalog(format!(
                        "website '{}' has a blank url",
                        site.title
                    )));
                }
            }
        }
        Ok(())
    }

    /// Icon locators that feed the color sampling pipeline.
    ///
    /// Only website icons get a sampled card background; category icons are
    /// displayed as-is.
    pub fn icon_locators(&self) -> Vec<String> {
        self.categories
            .iter()
            .flat_map(|category| &category.websites)
            .filter_map(|site| site.icon.clone())
            .collect()
    }
}
