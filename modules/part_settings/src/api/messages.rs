//! Mapping of domain errors and outcomes to translated user messages

use crate::contract::model::to_config_key;
use crate::contract::{DocumentOutcome, SettingsError};
use crate::domain::repository::TextLookup;

/// Translated message shown to a player for a domain error
pub fn user_message(error: &SettingsError, text: &dyn TextLookup) -> String {
    match error {
        SettingsError::TypeMismatch { found, .. } => {
            let type_name = text.text(&format!("items.{}.name", to_config_key(found)), &[]);
            text.text("error.wrongBookType", &[type_name.as_str()])
        }

        SettingsError::MalformedPayload { .. }
        | SettingsError::InvalidValue { .. }
        | SettingsError::MissingContent { .. } => {
            text.text("error.invalidSettingsBook", &[error.to_string().as_str()])
        }

        SettingsError::UnknownOption { key, .. } => text.text("error.unknownOption", &[key.as_str()]),

        SettingsError::InvalidOption { .. } => text.text("error.invalidOption", &[error.to_string().as_str()]),

        SettingsError::NotADocument { .. } => text.text("error.notABook", &[]),

        SettingsError::NoPart { .. } => text.text("error.noPart", &[]),

        SettingsError::Internal => text.text("error.internal", &[]),
    }
}

/// Translated confirmation for a document used on a part
pub fn outcome_message(outcome: &DocumentOutcome, text: &dyn TextLookup) -> String {
    let key = match outcome {
        DocumentOutcome::Created(_) => "info.settings.bookCreated",
        DocumentOutcome::Applied(_) => "info.settings.bookApplied",
        DocumentOutcome::Updated(_) => "info.settings.bookUpdated",
    };
    text.text(key, &[])
}
