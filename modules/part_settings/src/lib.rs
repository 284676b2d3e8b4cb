//! Part Settings Module
//!
//! Typed options of pipe parts, persisted invisibly in the label of the
//! block that holds each part and copied between parts with settings books.

// Public exports
pub mod contract;
pub use contract::{
    client::PartSettingsApi, error::SettingsError, Direction, Document, DocumentAction,
    DocumentKind, DocumentOutcome, GuiPosition, OptionLayout, OptionSchema, OptionState,
    OptionValue, PartType, SpatialAddress, ValueType,
};

pub mod module;
pub use module::PartSettingsModule;

pub mod config;
pub use config::Config;

pub mod domain;
pub use domain::{
    ConfigurablePart, EventPublisher, HolderRepository, NoOpEventPublisher, OptionStringCodec,
    PartEvent, TextLookup, TracingEventPublisher,
};

pub mod infra;
pub use infra::{InMemoryHolders, YamlTextLookup};

// Internal modules (hidden from public API)
#[doc(hidden)]
pub mod api;
