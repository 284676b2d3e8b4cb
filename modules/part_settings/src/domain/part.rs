//! Configurable part aggregate
//!
//! A part owns its address, its type and the options set on it. It loads its
//! options from the hidden payload of its holder's label when it is created
//! and writes them back there after every persisted change. Settings can be
//! copied to and from settings books.

use super::codec::OptionStringCodec;
use super::document::document_payload;
use super::hidden::{self, BLUE, GREEN, ITALIC, RED, RESET, WHITE};
use super::repository::{HolderRepository, TextLookup};
use super::validation::validate_value;
use crate::contract::{
    Document, OptionMap, OptionSchema, OptionState, OptionValue, PartType, SchemaSet,
    SettingsError, SpatialAddress,
};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

/// A part anchored at a holder
///
/// Two parts are equal when they share an address, whatever options they
/// hold in memory. The address is the identity key for maps and sets.
#[derive(Clone)]
pub struct ConfigurablePart {
    part_type: PartType,
    address: SpatialAddress,
    options: OptionMap,
    holders: Arc<dyn HolderRepository>,
    codec: OptionStringCodec,
    /// Name shown on the label and in books
    display_name: String,
}

impl ConfigurablePart {
    /// Wrap the holder at `address`, loading options from its label
    ///
    /// Never fails: a label that cannot be read or decoded is logged and the
    /// part starts without options.
    pub fn load(
        part_type: PartType,
        address: SpatialAddress,
        holders: Arc<dyn HolderRepository>,
        codec: OptionStringCodec,
    ) -> Self {
        let mut part = Self {
            part_type,
            address,
            options: OptionMap::new(),
            holders,
            codec,
            display_name: part_type.display_name().to_string(),
        };

        match part.holders.read_label(&part.address) {
            Ok(Some(label)) => match part.decode_label(&label) {
                Ok(options) => part.options = options,
                Err(e) => tracing::warn!(
                    address = %part.address,
                    part_type = %part.part_type,
                    error = %e,
                    "Error while loading part settings from label"
                ),
            },
            Ok(None) => {}
            Err(e) => tracing::warn!(
                address = %part.address,
                error = %e,
                "Failed to read part label"
            ),
        }

        part
    }

    fn decode_label(&self, label: &str) -> Result<OptionMap, SettingsError> {
        match hidden::decode(label)? {
            Some(payload) if !payload.is_empty() => {
                self.codec
                    .deserialize(&payload, self.part_type.tag(), self.part_type.options())
            }
            _ => Ok(OptionMap::new()),
        }
    }

    /// Use `name` instead of the built-in type name on labels and books
    pub fn with_display_name(mut self, name: impl Into<String>) -> Self {
        self.display_name = name.into();
        self
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn part_type(&self) -> PartType {
        self.part_type
    }

    pub fn address(&self) -> &SpatialAddress {
        &self.address
    }

    /// Options explicitly set on this part
    pub fn options(&self) -> &OptionMap {
        &self.options
    }

    /// All schemas of this part's type, in picker order
    pub fn schemas(&self) -> SchemaSet {
        self.part_type.options()
    }

    /// This part's schema for `key`
    pub fn schema(&self, key: &str) -> Result<&'static OptionSchema, SettingsError> {
        self.part_type
            .option(key)
            .ok_or_else(|| SettingsError::UnknownOption {
                part_type: self.part_type.tag().to_string(),
                key: key.to_string(),
            })
    }

    /// Stored value, or the default of this part's schema for the same key
    /// when the option was never set
    pub fn get(&self, schema: &OptionSchema) -> Option<&OptionValue> {
        self.options.get(schema).or_else(|| {
            self.part_type
                .option(schema.key)
                .and_then(|own| own.default.as_ref())
        })
    }

    /// Set an option and persist the options to the label
    pub fn set(&mut self, schema: &OptionSchema, value: OptionValue) -> Result<(), SettingsError> {
        self.set_with(schema, value, true)
    }

    /// Set an option, persisting only when `persist` is true
    ///
    /// The schema must belong to this part's type and the value must satisfy
    /// it; otherwise nothing changes.
    pub fn set_with(
        &mut self,
        schema: &OptionSchema,
        value: OptionValue,
        persist: bool,
    ) -> Result<(), SettingsError> {
        let schema = self.schema(schema.key)?;
        validate_value(schema, &value)?;
        self.options.insert(schema, value);
        if persist {
            self.save();
        }
        Ok(())
    }

    /// Advance an option to the next of its allowed values and persist it
    ///
    /// An unset option counts as being at its first allowed value.
    pub fn cycle(&mut self, schema: &OptionSchema) -> Result<OptionValue, SettingsError> {
        let schema = self.schema(schema.key)?;
        let states = schema.allowed_values;
        if states.is_empty() {
            return Err(SettingsError::InvalidValue {
                group: schema.key.to_string(),
                reason: "option has no fixed set of values to cycle through".to_string(),
            });
        }
        let next = (self.state_index(schema) + 1) % states.len();
        let value = states[next].clone();
        self.set(schema, value.clone())?;
        Ok(value)
    }

    /// Picker states of every option shown in the picker
    pub fn option_states(&self) -> Vec<OptionState> {
        self.schemas()
            .iter()
            .copied()
            .filter(|s| s.gui_position != crate::contract::GuiPosition::None)
            .filter(|s| !s.allowed_values.is_empty())
            .map(|schema| OptionState {
                schema,
                states: schema.allowed_values.to_vec(),
                current: self.state_index(schema),
            })
            .collect()
    }

    fn state_index(&self, schema: &OptionSchema) -> usize {
        self.get(schema)
            .and_then(|current| schema.allowed_values.iter().position(|v| v == current))
            .unwrap_or(0)
    }

    /// Payload string of this part: type tag and options
    pub fn encoded(&self) -> String {
        self.codec.serialize(self.part_type.tag(), &self.options)
    }

    /// Write the options into the holder's label
    ///
    /// Skipped when the holder no longer declares this part's type. A failed
    /// write is logged and otherwise ignored.
    pub fn save(&self) {
        match self.holders.declared_type(&self.address) {
            Ok(Some(declared)) if declared == self.part_type => {}
            Ok(declared) => {
                tracing::debug!(
                    address = %self.address,
                    expected = %self.part_type,
                    found = ?declared,
                    "Holder changed type, not writing settings label"
                );
                return;
            }
            Err(e) => {
                tracing::warn!(address = %self.address, error = %e, "Failed to resolve part holder");
                return;
            }
        }

        let label = format!(
            "{}{}{}",
            RESET,
            WHITE,
            hidden::encode(&self.display_name, &self.encoded())
        );
        if let Err(e) = self.holders.write_label(&self.address, &label) {
            tracing::warn!(address = %self.address, error = %e, "Failed to write settings label");
        }
    }

    /// Write this part's settings into a book
    ///
    /// The display name and the lore carry the hidden payload; the lore and
    /// pages also list every option in readable form. Existing lore and pages
    /// are replaced.
    pub fn export_to_document(
        &self,
        mut document: Document,
        text: &dyn TextLookup,
        author: &str,
    ) -> Result<Document, SettingsError> {
        if !document.is_book() {
            return Err(SettingsError::NotADocument {
                kind: document.kind.to_string(),
            });
        }

        let type_key = self.part_type.config_key();
        let type_name = self.display_name.as_str();
        let book_name = text.text("items.settings-book.name", &[type_name]);
        document.display_name = Some(format!(
            "{}{}{}",
            RESET,
            WHITE,
            hidden::encode(&book_name, &self.encoded())
        ));

        let mut summaries = Vec::with_capacity(self.schemas().len());
        let mut description_pages = Vec::with_capacity(self.schemas().len());
        for schema in self.schemas() {
            let Some(value) = self.get(schema) else {
                continue;
            };
            let option_key = format!("options.{}.{}", type_key, schema.config_key());
            let mut summary = format!(
                "{}{}: ",
                RESET,
                text.text(&format!("{}.description", option_key), &[])
            );
            if let OptionValue::Bool(enabled) = value {
                summary.push_str(if *enabled { GREEN } else { RED });
            }
            summary.push_str(&value.to_string());

            description_pages.push(format!(
                "{}\n\n{}",
                summary,
                text.text(&format!("{}.{}", option_key, value), &[])
            ));
            summaries.push(summary);
        }

        document.lore = vec![
            text.text("items.settings-book.lore", &[type_name, summaries.join("\n").as_str()]),
            format!(
                "{}{}{}",
                BLUE,
                ITALIC,
                hidden::encode(
                    author,
                    &self.codec.serialize_document(self.part_type.tag(), &self.options)
                )
            ),
        ];
        document.author = Some(author.to_string());

        document.pages = Vec::with_capacity(description_pages.len() + 1);
        document.pages.push(summaries.join("\n\n"));
        document.pages.extend(description_pages);

        Ok(document)
    }

    /// Load settings from a book
    ///
    /// Either every option in the book is applied and persisted, or the part
    /// is left untouched and the error is returned. Returns the number of
    /// options applied.
    pub fn import_from_document(&mut self, document: &Document) -> Result<usize, SettingsError> {
        let payload = document_payload(document)?;
        let decoded = self
            .codec
            .deserialize(&payload, self.part_type.tag(), self.part_type.options())?;
        let applied = decoded.len();
        self.options.extend(decoded);
        self.save();
        Ok(applied)
    }
}

impl PartialEq for ConfigurablePart {
    fn eq(&self, other: &Self) -> bool {
        self.address == other.address
    }
}

impl Eq for ConfigurablePart {}

impl Hash for ConfigurablePart {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.address.hash(state);
    }
}

impl fmt::Debug for ConfigurablePart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConfigurablePart")
            .field("part_type", &self.part_type)
            .field("address", &self.address)
            .field("options", &self.options)
            .field("display_name", &self.display_name)
            .finish_non_exhaustive()
    }
}

impl fmt::Display for ConfigurablePart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encoded())
    }
}
