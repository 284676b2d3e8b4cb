//! Contract models for part settings
//!
//! These models are transport-agnostic and used for inter-module communication.
//! NO serde derives - these are pure domain models.

use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Primitive type accepted by an option
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueType {
    Bool,
    Integer,
    Text,
}

impl ValueType {
    pub fn name(self) -> &'static str {
        match self {
            ValueType::Bool => "Boolean",
            ValueType::Integer => "Integer",
            ValueType::Text => "Text",
        }
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A single option value
///
/// `Display` renders the canonical text form written to the wire.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum OptionValue {
    Bool(bool),
    Integer(i64),
    /// Must not contain `,` or `=`
    Text(String),
}

impl OptionValue {
    pub fn value_type(&self) -> ValueType {
        match self {
            OptionValue::Bool(_) => ValueType::Bool,
            OptionValue::Integer(_) => ValueType::Integer,
            OptionValue::Text(_) => ValueType::Text,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            OptionValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_integer(&self) -> Option<i64> {
        match self {
            OptionValue::Integer(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            OptionValue::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for OptionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionValue::Bool(b) => write!(f, "{}", b),
            OptionValue::Integer(i) => write!(f, "{}", i),
            OptionValue::Text(s) => f.write_str(s),
        }
    }
}

impl From<bool> for OptionValue {
    fn from(value: bool) -> Self {
        OptionValue::Bool(value)
    }
}

impl From<i64> for OptionValue {
    fn from(value: i64) -> Self {
        OptionValue::Integer(value)
    }
}

/// Where an option prefers to be shown in the option picker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GuiPosition {
    /// Left group if it has room, otherwise right
    Anywhere,
    Left,
    Right,
    /// Not shown in the picker
    None,
}

/// Static description of one configurable option of a part type
///
/// Schemas live in process-wide statics, one set per part type. Within a set
/// the `key` is unique, so equality, ordering and hashing consider the key
/// only.
#[derive(Debug)]
pub struct OptionSchema {
    /// Stable machine-readable key (uppercase, underscores allowed)
    pub key: &'static str,
    pub value_type: ValueType,
    /// Value reported when the option was never set
    pub default: Option<OptionValue>,
    /// Legal values in picker order; empty means unrestricted
    pub allowed_values: &'static [OptionValue],
    pub gui_position: GuiPosition,
}

impl OptionSchema {
    /// Key as used in text lookups: lowercase with `_` replaced by `-`
    pub fn config_key(&self) -> String {
        to_config_key(self.key)
    }
}

impl PartialEq for OptionSchema {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for OptionSchema {}

impl PartialOrd for OptionSchema {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for OptionSchema {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key.cmp(other.key)
    }
}

impl Hash for OptionSchema {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key.hash(state);
    }
}

impl fmt::Display for OptionSchema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key)
    }
}

/// The schemas of one part type, in declaration order
pub type SchemaSet = &'static [&'static OptionSchema];

/// Option values keyed by schema, iterated in key order
pub type OptionMap = BTreeMap<&'static OptionSchema, OptionValue>;

/// Picker state of one option: its selectable values and the current one
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionState {
    pub schema: &'static OptionSchema,
    pub states: Vec<OptionValue>,
    /// Index into `states` of the current value (0 when unset)
    pub current: usize,
}

/// Options distributed over the two picker groups
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OptionLayout {
    pub left: Vec<&'static OptionSchema>,
    pub right: Vec<&'static OptionSchema>,
}

/// Lowercase an identifier and replace `_` with `-`
pub fn to_config_key(identifier: &str) -> String {
    identifier.to_ascii_lowercase().replace('_', "-")
}
