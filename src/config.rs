//! Pager configuration
//!
//! Serializable form of the pager options, for callers that keep pagination
//! settings in YAML or JSON alongside the rest of their configuration.
//!
//! ```yaml
//! page_size: 50
//! next_page_key: "cursor-123"
//! ```

use crate::error::Result;
use crate::pager::PagerOption;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Pager settings loaded from YAML or JSON
///
/// Values are validated when they are turned into [`PagerOption`]s, with the
/// same rules and messages as options set in code.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PagerConfig {
    /// Items requested per page
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_size: Option<i64>,

    /// Key of the first page to load
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_page_key: Option<String>,
}

impl PagerConfig {
    /// Parse a config from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Parse a config from a JSON string
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a config file. `.json` files are parsed as JSON, anything else as YAML.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;

        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        if is_json {
            Self::from_json_str(&content)
        } else {
            Self::from_yaml_str(&content)
        }
    }

    /// Convert into pager options, page size first
    pub fn into_options<T>(self) -> Vec<PagerOption<T>> {
        let mut options = Vec::with_capacity(2);
        if let Some(page_size) = self.page_size {
            options.push(PagerOption::PageSize(page_size));
        }
        if let Some(key) = self.next_page_key {
            options.push(PagerOption::NextPageKey(key));
        }
        options
    }
}
