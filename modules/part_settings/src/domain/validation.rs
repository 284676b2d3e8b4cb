//! Schema validation for option values

use crate::contract::{OptionSchema, OptionValue, SettingsError};

/// Characters that would break the `KEY=VALUE` group syntax
const RESERVED_TEXT_CHARS: [char; 2] = [',', '='];

/// Validate a value against a schema
///
/// The value's type must match the schema's type, text values must not
/// contain the group delimiters, and when the schema restricts its values the
/// value must be one of them.
pub fn validate_value(schema: &OptionSchema, value: &OptionValue) -> Result<(), SettingsError> {
    let rejected = || SettingsError::InvalidOption {
        key: schema.key.to_string(),
        value_type: schema.value_type,
        value: value.clone(),
    };

    if value.value_type() != schema.value_type {
        return Err(rejected());
    }

    if let OptionValue::Text(text) = value {
        if text.contains(RESERVED_TEXT_CHARS) {
            return Err(rejected());
        }
    }

    if schema.allowed_values.is_empty() || schema.allowed_values.contains(value) {
        Ok(())
    } else {
        Err(rejected())
    }
}

/// Validate a type tag or option key
///
/// Accepts uppercase ASCII identifiers: letters, digits and `_`, starting
/// with a letter.
pub fn validate_identifier(identifier: &str) -> Result<(), SettingsError> {
    let mut chars = identifier.chars();
    let Some(first) = chars.next() else {
        return Err(SettingsError::MalformedPayload {
            details: "identifier cannot be empty".to_string(),
        });
    };

    if !first.is_ascii_uppercase() {
        return Err(SettingsError::MalformedPayload {
            details: format!("identifier '{}' must start with an uppercase letter", identifier),
        });
    }

    if !chars.all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '_') {
        return Err(SettingsError::MalformedPayload {
            details: format!(
                "identifier '{}' contains invalid characters. Only A-Z, 0-9 and '_' are allowed",
                identifier
            ),
        });
    }

    Ok(())
}
