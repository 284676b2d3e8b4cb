//! YAML-backed text lookup

use crate::domain::repository::TextLookup;
use anyhow::{Context, Result};
use serde_yaml::Value;
use std::collections::HashMap;

const ENGLISH: &str = include_str!("default_texts.yaml");

/// Texts loaded from a nested YAML document, addressed by dotted keys
///
/// ```yaml
/// error:
///   noPart: "There is no part here"
/// ```
///
/// is looked up as `error.noPart`.
#[derive(Debug, Clone, Default)]
pub struct YamlTextLookup {
    texts: HashMap<String, String>,
}

impl YamlTextLookup {
    /// A lookup without texts: every key resolves to itself
    pub fn empty() -> Self {
        Self::default()
    }

    /// Bundled English texts
    pub fn english() -> Result<Self> {
        Self::from_yaml_str(ENGLISH).context("bundled texts are invalid")
    }

    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let root: Value = serde_yaml::from_str(yaml).context("failed to parse texts")?;
        let mut texts = HashMap::new();
        flatten(String::new(), root, &mut texts);
        Ok(Self { texts })
    }

    pub fn len(&self) -> usize {
        self.texts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.texts.is_empty()
    }
}

fn flatten(prefix: String, value: Value, out: &mut HashMap<String, String>) {
    match value {
        Value::Mapping(map) => {
            for (key, child) in map {
                let Some(key) = scalar_text(key) else {
                    continue;
                };
                let path = if prefix.is_empty() {
                    key
                } else {
                    format!("{}.{}", prefix, key)
                };
                flatten(path, child, out);
            }
        }
        Value::Tagged(tagged) => {
            let tagged = *tagged;
            flatten(prefix, tagged.value, out)
        }
        other => {
            if let Some(text) = scalar_text(other) {
                out.insert(prefix, text);
            }
        }
    }
}

fn scalar_text(value: Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

impl TextLookup for YamlTextLookup {
    fn text(&self, key: &str, args: &[&str]) -> String {
        let Some(template) = self.texts.get(key) else {
            return key.to_string();
        };
        substitute(template, args)
    }
}

/// Replace `{N}` placeholders in one pass; argument text is never rescanned
/// and placeholders without an argument stay as written
fn substitute(template: &str, args: &[&str]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let digits = after.bytes().take_while(u8::is_ascii_digit).count();
        let arg = (digits > 0 && after[digits..].starts_with('}'))
            .then(|| after[..digits].parse::<usize>().ok())
            .flatten()
            .and_then(|i| args.get(i));
        match arg {
            Some(arg) => {
                out.push_str(arg);
                rest = &after[digits + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}
