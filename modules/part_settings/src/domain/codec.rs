//! Option string codec
//!
//! Wire format of a hidden payload:
//!
//! ```text
//! payload      := marker? type_id option_group*
//! marker       := "SETTINGS_BOOK" ","
//! option_group := "," KEY "=" VALUE
//! ```
//!
//! Groups are written in key order. Decoding is all-or-nothing: the first
//! group that fails aborts the whole decode and nothing is applied.

use super::validation::{validate_identifier, validate_value};
use crate::contract::{
    OptionMap, OptionSchema, OptionValue, SchemaSet, SettingsError, ValueType, SETTINGS_BOOK_TAG,
};

/// Serializes option maps to payload strings and back
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OptionStringCodec {
    strict_booleans: bool,
}

impl Default for OptionStringCodec {
    fn default() -> Self {
        Self::strict()
    }
}

impl OptionStringCodec {
    /// Only `true`/`false` (any case) decode as booleans
    pub fn strict() -> Self {
        Self {
            strict_booleans: true,
        }
    }

    /// Anything other than `true` (any case) decodes as `false`
    pub fn lenient() -> Self {
        Self {
            strict_booleans: false,
        }
    }

    pub fn is_strict(&self) -> bool {
        self.strict_booleans
    }

    /// `TYPE_ID` followed by one `,KEY=VALUE` group per entry
    pub fn serialize(&self, type_id: &str, options: &OptionMap) -> String {
        let mut out = String::from(type_id);
        for (schema, value) in options {
            out.push(',');
            out.push_str(schema.key);
            out.push('=');
            out.push_str(&value.to_string());
        }
        out
    }

    /// Payload for settings books: the book marker, then [`serialize`](Self::serialize)
    pub fn serialize_document(&self, type_id: &str, options: &OptionMap) -> String {
        format!("{},{}", SETTINGS_BOOK_TAG, self.serialize(type_id, options))
    }

    /// Parse a payload written for `type_id` against its schema set
    pub fn deserialize(
        &self,
        raw: &str,
        type_id: &str,
        schemas: SchemaSet,
    ) -> Result<OptionMap, SettingsError> {
        let mut options = OptionMap::new();
        if raw.is_empty() {
            return Ok(options);
        }

        let mut is_book = false;
        let mut type_seen = false;
        for group in raw.split(',') {
            if group.is_empty() {
                return Err(SettingsError::MalformedPayload {
                    details: format!("empty group in '{}'", raw),
                });
            }

            let Some((key, value)) = group.split_once('=') else {
                validate_identifier(group)?;
                let at_head = !is_book && !type_seen && options.is_empty();
                if at_head && group == SETTINGS_BOOK_TAG {
                    is_book = true;
                    continue;
                }
                if type_seen || !options.is_empty() {
                    return Err(SettingsError::MalformedPayload {
                        details: format!("unexpected type tag '{}'", group),
                    });
                }
                if group != type_id {
                    return Err(SettingsError::TypeMismatch {
                        expected: type_id.to_string(),
                        found: group.to_string(),
                    });
                }
                type_seen = true;
                continue;
            };

            if is_book && !type_seen {
                return Err(SettingsError::MalformedPayload {
                    details: "settings book payload does not name a part type".to_string(),
                });
            }

            let schema = lookup(schemas, key).ok_or_else(|| SettingsError::UnknownOption {
                part_type: type_id.to_string(),
                key: key.to_string(),
            })?;
            if options.contains_key(schema) {
                return Err(SettingsError::MalformedPayload {
                    details: format!("option {} appears more than once", schema.key),
                });
            }

            let invalid = |reason: String| SettingsError::InvalidValue {
                group: group.to_string(),
                reason,
            };
            let value = self.parse_value(schema, value).map_err(invalid)?;
            validate_value(schema, &value).map_err(|e| invalid(e.to_string()))?;
            options.insert(schema, value);
        }

        if is_book && !type_seen {
            return Err(SettingsError::MalformedPayload {
                details: "settings book payload does not name a part type".to_string(),
            });
        }

        Ok(options)
    }

    fn parse_value(&self, schema: &OptionSchema, raw: &str) -> Result<OptionValue, String> {
        match schema.value_type {
            ValueType::Bool => self.parse_bool(raw).map(OptionValue::Bool),
            ValueType::Integer => raw
                .trim()
                .parse::<i64>()
                .map(OptionValue::Integer)
                .map_err(|e| format!("'{}' is not an integer: {}", raw, e)),
            ValueType::Text => Ok(OptionValue::Text(raw.to_string())),
        }
    }

    fn parse_bool(&self, raw: &str) -> Result<bool, String> {
        let raw = raw.trim();
        if raw.eq_ignore_ascii_case("true") {
            Ok(true)
        } else if raw.eq_ignore_ascii_case("false") || !self.strict_booleans {
            Ok(false)
        } else {
            Err(format!("'{}' is not a boolean", raw))
        }
    }
}

/// Schema for a payload key, compared after uppercasing
fn lookup(schemas: SchemaSet, key: &str) -> Option<&'static OptionSchema> {
    let key = key.trim().to_ascii_uppercase();
    schemas.iter().copied().find(|s| s.key == key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contract::{pipe_input, pipe_output, GuiPosition, PartType};
    use proptest::prelude::*;

    static LABEL: OptionSchema = OptionSchema {
        key: "LABEL",
        value_type: ValueType::Text,
        default: None,
        allowed_values: &[],
        gui_position: GuiPosition::None,
    };

    static TEXT_SCHEMAS: [&OptionSchema; 1] = [&LABEL];

    fn output() -> SchemaSet {
        PartType::PipeOutput.options()
    }

    #[test]
    fn test_serialize_sorted_by_key() {
        let codec = OptionStringCodec::strict();
        let mut options = OptionMap::new();
        options.insert(&pipe_output::WHITE_LIST, OptionValue::Bool(false));
        options.insert(&pipe_output::DROP, OptionValue::Bool(true));
        options.insert(&pipe_output::OVERFLOW_MODE, OptionValue::Bool(true));
        assert_eq!(
            codec.serialize("PIPE_OUTPUT", &options),
            "PIPE_OUTPUT,DROP=true,OVERFLOW_MODE=true,WHITE_LIST=false"
        );
        assert_eq!(codec.serialize("PIPE_OUTPUT", &OptionMap::new()), "PIPE_OUTPUT");
    }

    #[test]
    fn test_serialize_document() {
        let codec = OptionStringCodec::strict();
        let mut options = OptionMap::new();
        options.insert(&pipe_output::DROP, OptionValue::Bool(true));
        assert_eq!(
            codec.serialize_document("PIPE_OUTPUT", &options),
            "SETTINGS_BOOK,PIPE_OUTPUT,DROP=true"
        );
    }

    #[test]
    fn test_deserialize_label_payload() {
        let codec = OptionStringCodec::strict();
        let options = codec
            .deserialize("PIPE_OUTPUT,drop=TRUE,smart_insert=false", "PIPE_OUTPUT", output())
            .unwrap();
        assert_eq!(options.len(), 2);
        assert_eq!(options.get(&pipe_output::DROP), Some(&OptionValue::Bool(true)));
        assert_eq!(options.get(&pipe_output::SMART_INSERT), Some(&OptionValue::Bool(false)));
    }

    #[test]
    fn test_deserialize_without_type_tag() {
        let codec = OptionStringCodec::strict();
        let options = codec.deserialize("DROP=true", "PIPE_OUTPUT", output()).unwrap();
        assert_eq!(options.get(&pipe_output::DROP), Some(&OptionValue::Bool(true)));
        assert!(codec.deserialize("", "PIPE_OUTPUT", output()).unwrap().is_empty());
    }

    #[test]
    fn test_deserialize_book_payload() {
        let codec = OptionStringCodec::strict();
        let options = codec
            .deserialize("SETTINGS_BOOK,PIPE_OUTPUT,DROP=true", "PIPE_OUTPUT", output())
            .unwrap();
        assert_eq!(options.get(&pipe_output::DROP), Some(&OptionValue::Bool(true)));
    }

    #[test]
    fn test_deserialize_book_for_other_type() {
        let codec = OptionStringCodec::strict();
        let result = codec.deserialize("SETTINGS_BOOK,PIPE_INPUT,SPREAD=true", "PIPE_OUTPUT", output());
        assert_eq!(
            result,
            Err(SettingsError::TypeMismatch {
                expected: "PIPE_OUTPUT".to_string(),
                found: "PIPE_INPUT".to_string(),
            })
        );
    }

    #[test]
    fn test_deserialize_book_without_type() {
        let codec = OptionStringCodec::strict();
        assert!(matches!(
            codec.deserialize("SETTINGS_BOOK", "PIPE_OUTPUT", output()),
            Err(SettingsError::MalformedPayload { .. })
        ));
        assert!(matches!(
            codec.deserialize("SETTINGS_BOOK,DROP=true", "PIPE_OUTPUT", output()),
            Err(SettingsError::MalformedPayload { .. })
        ));
    }

    #[test]
    fn test_deserialize_unknown_key() {
        let codec = OptionStringCodec::strict();
        let result = codec.deserialize("PIPE_OUTPUT,DROP=true,UNKNOWN_KEY=true", "PIPE_OUTPUT", output());
        assert_eq!(
            result,
            Err(SettingsError::UnknownOption {
                part_type: "PIPE_OUTPUT".to_string(),
                key: "UNKNOWN_KEY".to_string(),
            })
        );
    }

    #[test]
    fn test_deserialize_option_of_other_type() {
        let codec = OptionStringCodec::strict();
        assert!(matches!(
            codec.deserialize("PIPE_INPUT,DROP=true", "PIPE_INPUT", PartType::PipeInput.options()),
            Err(SettingsError::UnknownOption { .. })
        ));
    }

    #[test]
    fn test_deserialize_strict_boolean() {
        let codec = OptionStringCodec::strict();
        let result = codec.deserialize("PIPE_OUTPUT,DROP=maybe", "PIPE_OUTPUT", output());
        match result {
            Err(SettingsError::InvalidValue { group, .. }) => assert_eq!(group, "DROP=maybe"),
            other => panic!("Expected InvalidValue, got {:?}", other),
        }
    }

    #[test]
    fn test_deserialize_lenient_boolean() {
        let codec = OptionStringCodec::lenient();
        let options = codec.deserialize("PIPE_OUTPUT,DROP=maybe", "PIPE_OUTPUT", output()).unwrap();
        assert_eq!(options.get(&pipe_output::DROP), Some(&OptionValue::Bool(false)));
    }

    #[test]
    fn test_deserialize_integer() {
        let codec = OptionStringCodec::strict();
        let schemas = PartType::PipeInput.options();
        let options = codec.deserialize("PIPE_INPUT,PRIORITY=-4", "PIPE_INPUT", schemas).unwrap();
        assert_eq!(options.get(&pipe_input::PRIORITY), Some(&OptionValue::Integer(-4)));
        assert!(matches!(
            codec.deserialize("PIPE_INPUT,PRIORITY=high", "PIPE_INPUT", schemas),
            Err(SettingsError::InvalidValue { .. })
        ));
    }

    #[test]
    fn test_deserialize_text() {
        let codec = OptionStringCodec::strict();
        let options = codec.deserialize("SIGN,LABEL=north", "SIGN", &TEXT_SCHEMAS).unwrap();
        assert_eq!(options.get(&LABEL), Some(&OptionValue::Text("north".into())));
        assert!(matches!(
            codec.deserialize("SIGN,LABEL=a=b", "SIGN", &TEXT_SCHEMAS),
            Err(SettingsError::InvalidValue { .. })
        ));
    }

    #[test]
    fn test_deserialize_structural_errors() {
        let codec = OptionStringCodec::strict();
        for raw in [
            "PIPE_OUTPUT,,DROP=true",
            "PIPE_OUTPUT,DROP=true,",
            "PIPE_OUTPUT,DROP=true,PIPE_OUTPUT",
            "PIPE_OUTPUT,PIPE_OUTPUT",
            "PIPE_OUTPUT,DROP=true,DROP=false",
        ] {
            assert!(
                matches!(
                    codec.deserialize(raw, "PIPE_OUTPUT", output()),
                    Err(SettingsError::MalformedPayload { .. })
                ),
                "expected malformed payload for {:?}",
                raw
            );
        }
    }

    #[test]
    fn test_deserialize_label_of_other_type() {
        let codec = OptionStringCodec::strict();
        assert!(matches!(
            codec.deserialize("PIPE_INPUT,SPREAD=true", "PIPE_OUTPUT", output()),
            Err(SettingsError::TypeMismatch { .. })
        ));
    }

    #[test]
    fn test_deserialize_malformed_type_tag() {
        let codec = OptionStringCodec::strict();
        for raw in ["pipe_output,DROP=true", "PIPE-OUTPUT", "SETTINGS_BOOK,Pipe Output"] {
            assert!(
                matches!(
                    codec.deserialize(raw, "PIPE_OUTPUT", output()),
                    Err(SettingsError::MalformedPayload { .. })
                ),
                "expected malformed payload for {:?}",
                raw
            );
        }
    }

    fn arb_output_options() -> impl Strategy<Value = OptionMap> {
        prop::collection::vec(
            (prop::sample::select(pipe_output::ALL.to_vec()), any::<bool>()),
            0..8,
        )
        .prop_map(|entries| {
            entries
                .into_iter()
                .map(|(schema, b)| (schema, OptionValue::Bool(b)))
                .collect()
        })
    }

    proptest! {
        #[test]
        fn serialize_round_trip(options in arb_output_options()) {
            let codec = OptionStringCodec::strict();
            let raw = codec.serialize("PIPE_OUTPUT", &options);
            prop_assert_eq!(codec.deserialize(&raw, "PIPE_OUTPUT", output()).unwrap(), options.clone());

            let raw = codec.serialize_document("PIPE_OUTPUT", &options);
            prop_assert_eq!(codec.deserialize(&raw, "PIPE_OUTPUT", output()).unwrap(), options);
        }

        #[test]
        fn integer_round_trip(priority in any::<i64>()) {
            let codec = OptionStringCodec::strict();
            let mut options = OptionMap::new();
            options.insert(&pipe_input::PRIORITY, OptionValue::Integer(priority));
            let raw = codec.serialize("PIPE_INPUT", &options);
            prop_assert_eq!(
                codec.deserialize(&raw, "PIPE_INPUT", PartType::PipeInput.options()).unwrap(),
                options
            );
        }
    }
}
