//! Collaborator traits for holder and text access
//!
//! These traits define the interface to the world the parts live in.
//! Implementations are in infra/

use crate::contract::{PartType, SpatialAddress};
use anyhow::Result;

/// Access to the holders (blocks with a label) that parts are anchored to
pub trait HolderRepository: Send + Sync {
    /// Declared part type of the holder at `address`
    ///
    /// Returns `None` when there is no holder there or it is not a part.
    fn declared_type(&self, address: &SpatialAddress) -> Result<Option<PartType>>;

    /// Current label of the holder, `None` if it has none
    fn read_label(&self, address: &SpatialAddress) -> Result<Option<String>>;

    /// Replace the holder's label
    fn write_label(&self, address: &SpatialAddress, label: &str) -> Result<()>;
}

/// Translated text lookup
pub trait TextLookup: Send + Sync {
    /// Text for `key` with `{0}`, `{1}`, ... replaced by `args`
    ///
    /// Unknown keys resolve to the key itself.
    fn text(&self, key: &str, args: &[&str]) -> String;
}
