//! Contract layer - public API for inter-module communication
//!
//! This layer contains transport-agnostic models and the native client trait.
//! NO serde derives on models - these are pure domain types.

pub mod address;
pub mod client;
pub mod document;
pub mod error;
pub mod model;
pub mod parts;

pub use address::{Direction, SpatialAddress, UnknownDirection};
pub use client::PartSettingsApi;
pub use document::{Document, DocumentAction, DocumentKind, DocumentOutcome};
pub use error::SettingsError;
pub use model::{
    GuiPosition, OptionLayout, OptionMap, OptionSchema, OptionState, OptionValue, SchemaSet,
    ValueType,
};
pub use parts::{pipe_input, pipe_output, PartType, SETTINGS_BOOK_TAG};
