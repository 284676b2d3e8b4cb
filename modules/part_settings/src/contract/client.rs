//! Native client trait for inter-module communication
//!
//! This trait defines the API that other modules (option pickers, event
//! listeners) use to read and change part settings.
//! NO transport - direct function calls.

use super::address::SpatialAddress;
use super::document::{Document, DocumentAction, DocumentOutcome};
use super::error::SettingsError;
use super::model::{OptionLayout, OptionState, OptionValue};
use super::parts::PartType;
use uuid::Uuid;

/// Part settings API for inter-module communication
pub trait PartSettingsApi: Send + Sync {
    // ===== Part Resolution =====

    /// Type of the part at an address
    fn part_type(&self, address: &SpatialAddress) -> Result<PartType, SettingsError>;

    // ===== Option Operations =====

    /// Get an option value, falling back to the schema default
    fn get_option(
        &self,
        address: &SpatialAddress,
        key: &str,
    ) -> Result<Option<OptionValue>, SettingsError>;

    /// Set an option and persist it to the part's label
    fn set_option(
        &self,
        address: &SpatialAddress,
        key: &str,
        value: OptionValue,
        actor: Option<Uuid>,
    ) -> Result<(), SettingsError>;

    /// Advance an option to its next selectable value
    fn cycle_option(
        &self,
        address: &SpatialAddress,
        key: &str,
        actor: Option<Uuid>,
    ) -> Result<OptionValue, SettingsError>;

    /// Picker states of all options shown in the picker
    fn option_states(&self, address: &SpatialAddress) -> Result<Vec<OptionState>, SettingsError>;

    /// Distribute the part's options over the picker groups
    fn option_layout(
        &self,
        address: &SpatialAddress,
        left_slots: usize,
        right_slots: usize,
    ) -> Result<OptionLayout, SettingsError>;

    // ===== Document Operations =====

    /// Write the part's settings into a book
    fn export_document(
        &self,
        address: &SpatialAddress,
        document: Document,
    ) -> Result<Document, SettingsError>;

    /// Load settings from a book into the part
    fn import_document(
        &self,
        address: &SpatialAddress,
        document: &Document,
        actor: Option<Uuid>,
    ) -> Result<usize, SettingsError>;

    /// Use a document on a part the way the copy slot of the picker does
    fn apply_document_action(
        &self,
        address: &SpatialAddress,
        document: Document,
        action: DocumentAction,
        actor: Option<Uuid>,
    ) -> Result<DocumentOutcome, SettingsError>;

    // ===== Lifecycle =====

    /// Forget the part at an address because its holder is being removed
    fn part_removed(&self, address: &SpatialAddress, actor: Option<Uuid>) -> Result<bool, SettingsError>;
}
