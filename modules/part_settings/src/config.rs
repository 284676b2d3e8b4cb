//! Configuration for part settings module

use crate::domain::codec::OptionStringCodec;
use anyhow::Context;
use serde::Deserialize;

/// Part settings configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Author written to settings books and required when reading them back
    #[serde(default = "default_document_author")]
    pub document_author: String,

    /// Only accept `true`/`false` as boolean values in payloads
    #[serde(default = "default_true")]
    pub strict_boolean_parsing: bool,

    /// Keep loaded parts in memory between calls
    #[serde(default = "default_true")]
    pub cache_parts: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            document_author: default_document_author(),
            strict_boolean_parsing: true,
            cache_parts: true,
        }
    }
}

impl Config {
    pub fn from_yaml_str(yaml: &str) -> anyhow::Result<Self> {
        serde_yaml::from_str(yaml).context("invalid part settings configuration")
    }

    /// Option codec matching the boolean parsing mode
    pub fn codec(&self) -> OptionStringCodec {
        if self.strict_boolean_parsing {
            OptionStringCodec::strict()
        } else {
            OptionStringCodec::lenient()
        }
    }
}

fn default_document_author() -> String {
    "Pipes".to_string()
}

fn default_true() -> bool {
    true
}
