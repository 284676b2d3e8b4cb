//! Part types and their option schemas

use super::model::{to_config_key, GuiPosition, OptionSchema, OptionValue, SchemaSet, ValueType};
use std::fmt;

/// Tag that opens payloads written to settings books
pub const SETTINGS_BOOK_TAG: &str = "SETTINGS_BOOK";

static BOOL_STATES_ON_FIRST: [OptionValue; 2] = [OptionValue::Bool(true), OptionValue::Bool(false)];
static BOOL_STATES_OFF_FIRST: [OptionValue; 2] = [OptionValue::Bool(false), OptionValue::Bool(true)];

/// Options of pipe inputs
pub mod pipe_input {
    use super::*;

    /// Spread items over all outputs instead of filling the nearest first
    pub static SPREAD: OptionSchema = OptionSchema {
        key: "SPREAD",
        value_type: ValueType::Bool,
        default: Some(OptionValue::Bool(false)),
        allowed_values: &BOOL_STATES_OFF_FIRST,
        gui_position: GuiPosition::Left,
    };

    /// Ordering among inputs feeding the same network
    pub static PRIORITY: OptionSchema = OptionSchema {
        key: "PRIORITY",
        value_type: ValueType::Integer,
        default: Some(OptionValue::Integer(0)),
        allowed_values: &[],
        gui_position: GuiPosition::None,
    };

    pub static ALL: [&OptionSchema; 2] = [&SPREAD, &PRIORITY];
}

/// Options of pipe outputs
pub mod pipe_output {
    use super::*;

    pub static OVERFLOW_MODE: OptionSchema = OptionSchema {
        key: "OVERFLOW_MODE",
        value_type: ValueType::Bool,
        default: Some(OptionValue::Bool(false)),
        allowed_values: &BOOL_STATES_OFF_FIRST,
        gui_position: GuiPosition::Left,
    };

    pub static TARGET_CHECK: OptionSchema = OptionSchema {
        key: "TARGET_CHECK",
        value_type: ValueType::Bool,
        default: Some(OptionValue::Bool(true)),
        allowed_values: &BOOL_STATES_ON_FIRST,
        gui_position: GuiPosition::Left,
    };

    pub static SMART_INSERT: OptionSchema = OptionSchema {
        key: "SMART_INSERT",
        value_type: ValueType::Bool,
        default: Some(OptionValue::Bool(true)),
        allowed_values: &BOOL_STATES_ON_FIRST,
        gui_position: GuiPosition::Anywhere,
    };

    pub static WHITE_LIST: OptionSchema = OptionSchema {
        key: "WHITE_LIST",
        value_type: ValueType::Bool,
        default: Some(OptionValue::Bool(true)),
        allowed_values: &BOOL_STATES_ON_FIRST,
        gui_position: GuiPosition::Right,
    };

    pub static DROP: OptionSchema = OptionSchema {
        key: "DROP",
        value_type: ValueType::Bool,
        default: Some(OptionValue::Bool(false)),
        allowed_values: &BOOL_STATES_OFF_FIRST,
        gui_position: GuiPosition::Right,
    };

    pub static ALL: [&OptionSchema; 5] = [
        &OVERFLOW_MODE,
        &TARGET_CHECK,
        &SMART_INSERT,
        &WHITE_LIST,
        &DROP,
    ];
}

/// Kind of configurable part
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PartType {
    PipeInput,
    PipeOutput,
    ChunkLoader,
}

impl PartType {
    pub const ALL: [PartType; 3] = [PartType::PipeInput, PartType::PipeOutput, PartType::ChunkLoader];

    /// Type identifier written at the head of every payload
    pub fn tag(self) -> &'static str {
        match self {
            PartType::PipeInput => "PIPE_INPUT",
            PartType::PipeOutput => "PIPE_OUTPUT",
            PartType::ChunkLoader => "CHUNK_LOADER",
        }
    }

    pub fn from_tag(tag: &str) -> Option<PartType> {
        PartType::ALL.into_iter().find(|t| t.tag() == tag)
    }

    /// Name shown on labels
    pub fn display_name(self) -> &'static str {
        match self {
            PartType::PipeInput => "Pipe Input",
            PartType::PipeOutput => "Pipe Output",
            PartType::ChunkLoader => "Chunk Loader",
        }
    }

    pub fn config_key(self) -> String {
        to_config_key(self.tag())
    }

    /// Schemas of this type in declaration order
    pub fn options(self) -> SchemaSet {
        match self {
            PartType::PipeInput => &pipe_input::ALL,
            PartType::PipeOutput => &pipe_output::ALL,
            PartType::ChunkLoader => &[],
        }
    }

    /// Schema with `key`, compared case-insensitively
    pub fn option(self, key: &str) -> Option<&'static OptionSchema> {
        self.options()
            .iter()
            .copied()
            .find(|s| s.key.eq_ignore_ascii_case(key.trim()))
    }
}

impl fmt::Display for PartType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}
