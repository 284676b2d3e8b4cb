//! Contract error types for part settings
//!
//! These errors are transport-agnostic and used for inter-module communication.

use super::model::{OptionValue, ValueType};

/// Part settings domain errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SettingsError {
    /// Hidden payload is present but cannot be split or decoded
    #[error("Malformed settings payload: {details}")]
    MalformedPayload {
        /// What was wrong with it
        details: String,
    },

    /// Key is not part of the schema set of the part type
    #[error("Unknown option '{key}' for {part_type}")]
    UnknownOption {
        /// Part type tag
        part_type: String,
        /// Offending key as found
        key: String,
    },

    /// Payload was written for a different part type
    #[error("Settings are for {found}, not {expected}")]
    TypeMismatch {
        /// Type of the part being loaded into
        expected: String,
        /// Type label found in the payload
        found: String,
    },

    /// A decoded option group could not be coerced or is outside the legal set
    #[error("Invalid option {group}: {reason}")]
    InvalidValue {
        /// The `KEY=VALUE` group as found
        group: String,
        /// Why it was rejected
        reason: String,
    },

    /// A value handed to `set` does not satisfy the schema
    #[error("The option {key}<{value_type}> does not accept the value {value} ({})", .value.value_type())]
    InvalidOption {
        /// Schema key
        key: String,
        /// Type the schema accepts
        value_type: ValueType,
        /// Rejected value
        value: OptionValue,
    },

    /// Export/import attempted on something that is not a settings document
    #[error("Item needs to be a book, got {kind}")]
    NotADocument {
        /// Kind of the item
        kind: String,
    },

    /// Document lacks the section holding the settings
    #[error("Document has no {section}")]
    MissingContent {
        /// Missing section
        section: String,
    },

    /// No configurable part exists at an address
    #[error("No configurable part at {address}")]
    NoPart {
        /// Address as text
        address: String,
    },

    /// Collaborator failure
    #[error("Internal error")]
    Internal,
}
