//! In-memory holder repository

use crate::contract::{PartType, SpatialAddress};
use crate::domain::repository::HolderRepository;
use anyhow::{bail, Result};
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;

#[derive(Debug, Clone)]
struct HolderEntry {
    part_type: PartType,
    label: Option<String>,
}

/// Holders kept in a map, for tests and embedders without a world
#[derive(Debug, Clone, Default)]
pub struct InMemoryHolders {
    holders: Arc<RwLock<HashMap<SpatialAddress, HolderEntry>>>,
    /// Longest label (in chars) a holder accepts
    label_limit: Option<usize>,
}

impl InMemoryHolders {
    pub fn new() -> Self {
        Self::default()
    }

    /// Holders that refuse labels longer than `limit` chars
    pub fn with_label_limit(limit: usize) -> Self {
        Self {
            label_limit: Some(limit),
            ..Self::default()
        }
    }

    /// Place an unlabeled holder, replacing whatever was at `address`
    pub fn place(&self, address: SpatialAddress, part_type: PartType) {
        self.holders.write().insert(
            address,
            HolderEntry {
                part_type,
                label: None,
            },
        );
    }

    pub fn place_with_label(&self, address: SpatialAddress, part_type: PartType, label: impl Into<String>) {
        self.holders.write().insert(
            address,
            HolderEntry {
                part_type,
                label: Some(label.into()),
            },
        );
    }

    /// Change the declared type of a holder, keeping its label
    ///
    /// Returns false if there is no holder at `address`.
    pub fn retype(&self, address: &SpatialAddress, part_type: PartType) -> bool {
        match self.holders.write().get_mut(address) {
            Some(entry) => {
                entry.part_type = part_type;
                true
            }
            None => false,
        }
    }

    pub fn remove(&self, address: &SpatialAddress) -> bool {
        self.holders.write().remove(address).is_some()
    }

    pub fn label(&self, address: &SpatialAddress) -> Option<String> {
        self.holders.read().get(address).and_then(|e| e.label.clone())
    }

    /// Replace a label from outside, bypassing the length limit
    pub fn set_label(&self, address: &SpatialAddress, label: impl Into<String>) -> bool {
        match self.holders.write().get_mut(address) {
            Some(entry) => {
                entry.label = Some(label.into());
                true
            }
            None => false,
        }
    }

    pub fn count(&self) -> usize {
        self.holders.read().len()
    }
}

impl HolderRepository for InMemoryHolders {
    fn declared_type(&self, address: &SpatialAddress) -> Result<Option<PartType>> {
        Ok(self.holders.read().get(address).map(|e| e.part_type))
    }

    fn read_label(&self, address: &SpatialAddress) -> Result<Option<String>> {
        Ok(self.label(address))
    }

    fn write_label(&self, address: &SpatialAddress, label: &str) -> Result<()> {
        if let Some(limit) = self.label_limit {
            let len = label.chars().count();
            if len > limit {
                bail!("label of {} chars exceeds the limit of {}", len, limit);
            }
        }
        match self.holders.write().get_mut(address) {
            Some(entry) => {
                entry.label = Some(label.to_string());
                Ok(())
            }
            None => bail!("no holder at {}", address),
        }
    }
}
