//! Domain service - business logic orchestration

use super::codec::OptionStringCodec;
use super::document::is_settings_book;
use super::events::{EventPublisher, PartEvent};
use super::part::ConfigurablePart;
use super::repository::{HolderRepository, TextLookup};
use crate::config::Config;
use crate::contract::{
    Document, DocumentAction, DocumentKind, DocumentOutcome, OptionLayout, OptionState,
    OptionValue, PartType, SettingsError, SpatialAddress,
};
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;
use uuid::Uuid;

/// Domain service for part settings
pub struct Service {
    holders: Arc<dyn HolderRepository>,
    text: Arc<dyn TextLookup>,
    event_publisher: Arc<dyn EventPublisher>,
    codec: OptionStringCodec,
    document_author: String,
    cache_parts: bool,
    /// Loaded parts by address
    parts: RwLock<HashMap<SpatialAddress, ConfigurablePart>>,
}

impl Service {
    /// Create a new service instance
    pub fn new(
        holders: Arc<dyn HolderRepository>,
        text: Arc<dyn TextLookup>,
        event_publisher: Arc<dyn EventPublisher>,
        config: &Config,
    ) -> Self {
        Self {
            holders,
            text,
            event_publisher,
            codec: config.codec(),
            document_author: config.document_author.clone(),
            cache_parts: config.cache_parts,
            parts: RwLock::new(HashMap::new()),
        }
    }

    pub fn document_author(&self) -> &str {
        &self.document_author
    }

    /// Number of parts currently held in the cache
    pub fn cached_parts(&self) -> usize {
        self.parts.read().len()
    }

    // ===== Part Resolution =====

    /// Snapshot of the part at `address`
    pub fn part_at(&self, address: &SpatialAddress) -> Result<ConfigurablePart, SettingsError> {
        self.with_part(address, |part| Ok(part.clone()))
    }

    pub fn part_type(&self, address: &SpatialAddress) -> Result<PartType, SettingsError> {
        self.with_part(address, |part| Ok(part.part_type()))
    }

    /// Run `f` against the part at `address`
    ///
    /// The holder's declared type is checked on every access. A cached part
    /// whose holder now declares another type is dropped and reloaded.
    fn with_part<R>(
        &self,
        address: &SpatialAddress,
        f: impl FnOnce(&mut ConfigurablePart) -> Result<R, SettingsError>,
    ) -> Result<R, SettingsError> {
        let declared = self
            .holders
            .declared_type(address)
            .map_err(|e| internal(address, e))?;

        let Some(part_type) = declared else {
            self.parts.write().remove(address);
            return Err(SettingsError::NoPart {
                address: address.to_string(),
            });
        };

        if !self.cache_parts {
            let mut part = self.load(part_type, address);
            return f(&mut part);
        }

        let mut parts = self.parts.write();
        let stale = parts
            .get(address)
            .is_some_and(|cached| cached.part_type() != part_type);
        if stale {
            tracing::debug!(address = %address, part_type = %part_type, "Evicting part with changed type");
            parts.remove(address);
        }
        let part = parts
            .entry(address.clone())
            .or_insert_with(|| self.load(part_type, address));
        f(part)
    }

    fn load(&self, part_type: PartType, address: &SpatialAddress) -> ConfigurablePart {
        let part = ConfigurablePart::load(part_type, address.clone(), self.holders.clone(), self.codec);
        // texts without an entry for the type keep the built-in name
        let name_key = format!("items.{}.name", part_type.config_key());
        let name = self.text.text(&name_key, &[]);
        if name == name_key {
            part
        } else {
            part.with_display_name(name)
        }
    }

    // ===== Option Operations =====

    pub fn get_option(
        &self,
        address: &SpatialAddress,
        key: &str,
    ) -> Result<Option<OptionValue>, SettingsError> {
        self.with_part(address, |part| {
            let schema = part.schema(key)?;
            Ok(part.get(schema).cloned())
        })
    }

    pub fn set_option(
        &self,
        address: &SpatialAddress,
        key: &str,
        value: OptionValue,
        actor: Option<Uuid>,
    ) -> Result<(), SettingsError> {
        let event = self.with_part(address, |part| {
            let schema = part.schema(key)?;
            let event = PartEvent::option_changed(part.part_type(), address, schema.key, &value, actor);
            part.set(schema, value)?;
            Ok(event)
        })?;
        self.publish(&event);
        Ok(())
    }

    pub fn cycle_option(
        &self,
        address: &SpatialAddress,
        key: &str,
        actor: Option<Uuid>,
    ) -> Result<OptionValue, SettingsError> {
        let (value, event) = self.with_part(address, |part| {
            let schema = part.schema(key)?;
            let value = part.cycle(schema)?;
            let event = PartEvent::option_changed(part.part_type(), address, schema.key, &value, actor);
            Ok((value, event))
        })?;
        self.publish(&event);
        Ok(value)
    }

    pub fn option_states(&self, address: &SpatialAddress) -> Result<Vec<OptionState>, SettingsError> {
        self.with_part(address, |part| Ok(part.option_states()))
    }

    pub fn option_layout(
        &self,
        address: &SpatialAddress,
        left_slots: usize,
        right_slots: usize,
    ) -> Result<OptionLayout, SettingsError> {
        self.with_part(address, |part| {
            Ok(OptionLayout::arrange(part.schemas(), left_slots, right_slots))
        })
    }

    // ===== Document Operations =====

    pub fn export_document(
        &self,
        address: &SpatialAddress,
        document: Document,
    ) -> Result<Document, SettingsError> {
        self.with_part(address, |part| {
            part.export_to_document(document, self.text.as_ref(), &self.document_author)
        })
    }

    pub fn import_document(
        &self,
        address: &SpatialAddress,
        document: &Document,
        actor: Option<Uuid>,
    ) -> Result<usize, SettingsError> {
        let (applied, part_type) = self.with_part(address, |part| {
            let applied = part.import_from_document(document)?;
            Ok((applied, part.part_type()))
        })?;
        tracing::info!(address = %address, part_type = %part_type, applied, "Imported settings from document");
        self.publish(&PartEvent::settings_imported(part_type, address, applied, actor));
        Ok(applied)
    }

    /// Use a document on the part at `address`
    ///
    /// A blank book becomes a settings book for the part. A settings book
    /// written by this service is applied to the part or rewritten from it,
    /// depending on `action`. Anything else is rejected.
    pub fn apply_document_action(
        &self,
        address: &SpatialAddress,
        document: Document,
        action: DocumentAction,
        actor: Option<Uuid>,
    ) -> Result<DocumentOutcome, SettingsError> {
        match document.kind {
            DocumentKind::BlankBook => {
                let book = Document {
                    kind: DocumentKind::Book,
                    ..document
                };
                self.export_document(address, book).map(DocumentOutcome::Created)
            }
            DocumentKind::Book if is_settings_book(&document, &self.document_author) => match action {
                DocumentAction::Apply => self
                    .import_document(address, &document, actor)
                    .map(DocumentOutcome::Applied),
                DocumentAction::Update => self
                    .export_document(address, document)
                    .map(DocumentOutcome::Updated),
            },
            kind => Err(SettingsError::NotADocument {
                kind: kind.to_string(),
            }),
        }
    }

    // ===== Lifecycle =====

    /// Forget the part at `address`
    ///
    /// Returns whether there was a part to forget.
    pub fn part_removed(
        &self,
        address: &SpatialAddress,
        actor: Option<Uuid>,
    ) -> Result<bool, SettingsError> {
        let cached = self.parts.write().remove(address);
        let part_type = match cached {
            Some(part) => Some(part.part_type()),
            None => self
                .holders
                .declared_type(address)
                .map_err(|e| internal(address, e))?,
        };

        match part_type {
            Some(part_type) => {
                self.publish(&PartEvent::part_removed(part_type, address, actor));
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn publish(&self, event: &PartEvent) {
        if let Err(e) = self.event_publisher.publish(event) {
            // Log error but don't fail the operation
            tracing::warn!(address = %event.address(), error = %e, "Failed to publish part event");
        }
    }
}

fn internal(address: &SpatialAddress, error: anyhow::Error) -> SettingsError {
    tracing::warn!(address = %address, error = %error, "Holder repository failure");
    SettingsError::Internal
}
