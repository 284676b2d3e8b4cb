//! Domain events for part settings
//!
//! Events are emitted after a change has been applied to a part. Publishing
//! is best effort: a failing publisher never undoes or fails the change.

use crate::contract::{OptionValue, PartType, SpatialAddress};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Domain event types for part settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event_type", rename_all = "snake_case")]
pub enum PartEvent {
    /// One option was set or cycled
    OptionChanged(OptionChangedEvent),
    /// Settings were copied in from a settings book
    SettingsImported(SettingsImportedEvent),
    /// The part's holder is gone
    PartRemoved(PartRemovedEvent),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionChangedEvent {
    /// Part type tag
    pub part_type: String,
    /// Address in `space@x,y,z` form
    pub address: String,
    pub key: String,
    /// Canonical text of the new value
    pub value: String,
    pub timestamp: DateTime<Utc>,
    /// Who made the change (if known)
    pub actor: Option<Uuid>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettingsImportedEvent {
    pub part_type: String,
    pub address: String,
    /// Number of options applied from the book
    pub applied: usize,
    pub timestamp: DateTime<Utc>,
    pub actor: Option<Uuid>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartRemovedEvent {
    pub part_type: String,
    pub address: String,
    pub timestamp: DateTime<Utc>,
    pub actor: Option<Uuid>,
}

/// Event publisher trait for publishing domain events
pub trait EventPublisher: Send + Sync {
    fn publish(&self, event: &PartEvent) -> anyhow::Result<()>;
}

/// No-op event publisher for testing or when events are disabled
pub struct NoOpEventPublisher;

impl EventPublisher for NoOpEventPublisher {
    fn publish(&self, _event: &PartEvent) -> anyhow::Result<()> {
        Ok(())
    }
}

/// Writes every event as a JSON `info` log line
pub struct TracingEventPublisher;

impl EventPublisher for TracingEventPublisher {
    fn publish(&self, event: &PartEvent) -> anyhow::Result<()> {
        let payload = serde_json::to_string(event)?;
        tracing::info!(target: "part_settings::events", event = %payload, "Part event");
        Ok(())
    }
}

impl PartEvent {
    pub fn option_changed(
        part_type: PartType,
        address: &SpatialAddress,
        key: &str,
        value: &OptionValue,
        actor: Option<Uuid>,
    ) -> Self {
        PartEvent::OptionChanged(OptionChangedEvent {
            part_type: part_type.tag().to_string(),
            address: address.to_string(),
            key: key.to_string(),
            value: value.to_string(),
            timestamp: Utc::now(),
            actor,
        })
    }

    pub fn settings_imported(
        part_type: PartType,
        address: &SpatialAddress,
        applied: usize,
        actor: Option<Uuid>,
    ) -> Self {
        PartEvent::SettingsImported(SettingsImportedEvent {
            part_type: part_type.tag().to_string(),
            address: address.to_string(),
            applied,
            timestamp: Utc::now(),
            actor,
        })
    }

    pub fn part_removed(part_type: PartType, address: &SpatialAddress, actor: Option<Uuid>) -> Self {
        PartEvent::PartRemoved(PartRemovedEvent {
            part_type: part_type.tag().to_string(),
            address: address.to_string(),
            timestamp: Utc::now(),
            actor,
        })
    }

    /// Address of the part the event is about
    pub fn address(&self) -> &str {
        match self {
            PartEvent::OptionChanged(e) => &e.address,
            PartEvent::SettingsImported(e) => &e.address,
            PartEvent::PartRemoved(e) => &e.address,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn addr() -> SpatialAddress {
        SpatialAddress::new("world", 1, -2, 3)
    }

    #[test]
    fn test_option_changed_event_creation() {
        let actor = Uuid::new_v4();
        let event = PartEvent::option_changed(
            PartType::PipeOutput,
            &addr(),
            "DROP",
            &OptionValue::Bool(true),
            Some(actor),
        );

        match event {
            PartEvent::OptionChanged(e) => {
                assert_eq!(e.part_type, "PIPE_OUTPUT");
                assert_eq!(e.address, "world@1,-2,3");
                assert_eq!(e.key, "DROP");
                assert_eq!(e.value, "true");
                assert_eq!(e.actor, Some(actor));
            }
            _ => panic!("Expected OptionChanged event"),
        }
    }

    #[test]
    fn test_event_serialization_tag() {
        let event = PartEvent::settings_imported(PartType::PipeInput, &addr(), 2, None);
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["event_type"], "settings_imported");
        assert_eq!(json["applied"], 2);
        assert_eq!(json["address"], "world@1,-2,3");

        let back: PartEvent = serde_json::from_value(json).unwrap();
        assert_eq!(back, event);
    }

    #[test]
    fn test_publishers() {
        let event = PartEvent::part_removed(PartType::ChunkLoader, &addr(), None);
        assert_eq!(event.address(), "world@1,-2,3");
        assert!(NoOpEventPublisher.publish(&event).is_ok());
        assert!(TracingEventPublisher.publish(&event).is_ok());
    }
}
