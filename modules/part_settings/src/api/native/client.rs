//! Native client implementation - wraps domain service for in-process calls

use crate::contract::{
    Document, DocumentAction, DocumentOutcome, OptionLayout, OptionState, OptionValue,
    PartSettingsApi, PartType, SettingsError, SpatialAddress,
};
use crate::domain::Service;
use std::sync::Arc;
use uuid::Uuid;

/// Native client implementation that directly calls the domain service
///
/// Used by option pickers and event listeners in the same process.
#[derive(Clone)]
pub struct NativeClient {
    service: Arc<Service>,
}

impl NativeClient {
    /// Create a new native client
    pub fn new(service: Arc<Service>) -> Self {
        Self { service }
    }
}

impl PartSettingsApi for NativeClient {
    fn part_type(&self, address: &SpatialAddress) -> Result<PartType, SettingsError> {
        self.service.part_type(address)
    }

    fn get_option(
        &self,
        address: &SpatialAddress,
        key: &str,
    ) -> Result<Option<OptionValue>, SettingsError> {
        self.service.get_option(address, key)
    }

    fn set_option(
        &self,
        address: &SpatialAddress,
        key: &str,
        value: OptionValue,
        actor: Option<Uuid>,
    ) -> Result<(), SettingsError> {
        self.service.set_option(address, key, value, actor)
    }

    fn cycle_option(
        &self,
        address: &SpatialAddress,
        key: &str,
        actor: Option<Uuid>,
    ) -> Result<OptionValue, SettingsError> {
        self.service.cycle_option(address, key, actor)
    }

    fn option_states(&self, address: &SpatialAddress) -> Result<Vec<OptionState>, SettingsError> {
        self.service.option_states(address)
    }

    fn option_layout(
        &self,
        address: &SpatialAddress,
        left_slots: usize,
        right_slots: usize,
    ) -> Result<OptionLayout, SettingsError> {
        self.service.option_layout(address, left_slots, right_slots)
    }

    fn export_document(
        &self,
        address: &SpatialAddress,
        document: Document,
    ) -> Result<Document, SettingsError> {
        self.service.export_document(address, document)
    }

    fn import_document(
        &self,
        address: &SpatialAddress,
        document: &Document,
        actor: Option<Uuid>,
    ) -> Result<usize, SettingsError> {
        self.service.import_document(address, document, actor)
    }

    fn apply_document_action(
        &self,
        address: &SpatialAddress,
        document: Document,
        action: DocumentAction,
        actor: Option<Uuid>,
    ) -> Result<DocumentOutcome, SettingsError> {
        self.service
            .apply_document_action(address, document, action, actor)
    }

    fn part_removed(
        &self,
        address: &SpatialAddress,
        actor: Option<Uuid>,
    ) -> Result<bool, SettingsError> {
        self.service.part_removed(address, actor)
    }
}
