//! Generator configuration, loaded from a kebab-case YAML file.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::Error;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Configuration {
    /// JSON file holding the navigation catalog.
    pub sites_path: PathBuf,

    /// JSON file holding the search engine registry.
    #[serde(default = "Configuration::default_search_engines_path")]
    pub search_engines_path: PathBuf,

    /// Where the rendered page is written.
    #[serde(default = "Configuration::default_output_path")]
    pub output_path: PathBuf,

    /// Document title and page heading.
    #[serde(default = "Configuration::default_page_title")]
    pub page_title: String,

    /// Optional footer line.
    #[serde(default)]
    pub footer_text: Option<String>,

    /// Cap on concurrently sampled icons.
    #[serde(default = "Configuration::default_max_concurrent_samples")]
    pub max_concurrent_samples: usize,
}

impl Configuration {
    fn default_search_engines_path() -> PathBuf {
        PathBuf::from("data/search-engines.json")
    }

    fn default_output_path() -> PathBuf {
        PathBuf::from("index.html")
    }

    fn default_page_title() -> String {
        "Start Page".to_string()
    }

    fn default_max_concurrent_samples() -> usize {
        8
    }

    pub fn validate(&self) -> Result<(), Error> {
        if self.max_concurrent_samples == 0 {
            return Err(Error::BadConfig(
                "max-concurrent-samples must be at least 1".into(),
            ));
        }
        Ok(())
    }
}

/// Read a [`Configuration`] from a YAML file.
pub fn from_yaml_file(path: &Path) -> Result<Configuration, Error> {
    let raw = std::fs::read_to_string(path)?;
    Ok(serde_yaml::from_str(&raw)?)
}
