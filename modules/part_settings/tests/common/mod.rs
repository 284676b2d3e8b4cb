//! Common test utilities and a shared pipe layout
#![allow(dead_code)]

use parking_lot::RwLock;
use part_settings::config::Config;
use part_settings::contract::{PartType, SpatialAddress};
use part_settings::domain::{EventPublisher, HolderRepository, PartEvent, Service};
use part_settings::infra::{InMemoryHolders, YamlTextLookup};
use std::sync::Arc;

pub fn print_test_header(test_name: &str, purpose: &[&str]) {
    println!("\n🧪 TEST: {}", test_name);
    if let Some(first) = purpose.first() {
        println!("📋 PURPOSE: {}", first);
    }
    for line in purpose.iter().skip(1) {
        println!("   {}", line);
    }
}

/// A small pipe network used across tests
///
/// An input feeding two outputs, plus a chunk loader next to them.
#[derive(Debug, Clone)]
pub struct TestPipeLayout {
    pub input: SpatialAddress,
    pub output_north: SpatialAddress,
    pub output_south: SpatialAddress,
    pub chunk_loader: SpatialAddress,
    pub empty: SpatialAddress,
}

impl TestPipeLayout {
    pub fn new() -> Self {
        let input = SpatialAddress::new("world", 100, 64, -20);
        Self {
            output_north: SpatialAddress::new("world", 100, 64, -30),
            output_south: SpatialAddress::new("world", 100, 64, -10),
            chunk_loader: SpatialAddress::new("world", 110, 64, -20),
            empty: SpatialAddress::new("world", 0, 0, 0),
            input,
        }
    }

    /// Place every holder of the layout
    pub fn place(&self, holders: &InMemoryHolders) {
        holders.place(self.input.clone(), PartType::PipeInput);
        holders.place(self.output_north.clone(), PartType::PipeOutput);
        holders.place(self.output_south.clone(), PartType::PipeOutput);
        holders.place(self.chunk_loader.clone(), PartType::ChunkLoader);
    }

    pub fn print_structure(&self) {
        println!("\n📊 Pipe Layout:");
        println!("   Input: {}", self.input);
        println!("   ├─ Output (north): {}", self.output_north);
        println!("   └─ Output (south): {}", self.output_south);
        println!("   Chunk loader: {}", self.chunk_loader);
    }
}

impl Default for TestPipeLayout {
    fn default() -> Self {
        Self::new()
    }
}

/// Publisher that keeps every event it is given
#[derive(Default)]
pub struct RecordingEventPublisher {
    events: RwLock<Vec<PartEvent>>,
}

impl RecordingEventPublisher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<PartEvent> {
        self.events.read().clone()
    }

    pub fn count(&self) -> usize {
        self.events.read().len()
    }
}

impl EventPublisher for RecordingEventPublisher {
    fn publish(&self, event: &PartEvent) -> anyhow::Result<()> {
        self.events.write().push(event.clone());
        Ok(())
    }
}

/// Publisher whose every publish fails
pub struct FailingEventPublisher;

impl EventPublisher for FailingEventPublisher {
    fn publish(&self, _event: &PartEvent) -> anyhow::Result<()> {
        anyhow::bail!("event bus unavailable")
    }
}

/// Holder repository whose world is unreachable
pub struct UnreachableHolders;

impl HolderRepository for UnreachableHolders {
    fn declared_type(&self, _address: &SpatialAddress) -> anyhow::Result<Option<PartType>> {
        anyhow::bail!("world not loaded")
    }

    fn read_label(&self, _address: &SpatialAddress) -> anyhow::Result<Option<String>> {
        anyhow::bail!("world not loaded")
    }

    fn write_label(&self, _address: &SpatialAddress, _label: &str) -> anyhow::Result<()> {
        anyhow::bail!("world not loaded")
    }
}

pub struct TestContext {
    pub service: Service,
    pub holders: Arc<InMemoryHolders>,
    pub events: Arc<RecordingEventPublisher>,
    pub layout: TestPipeLayout,
}

pub fn create_test_context() -> TestContext {
    create_test_context_with(Config::default())
}

pub fn create_test_context_with(config: Config) -> TestContext {
    let holders = Arc::new(InMemoryHolders::new());
    let events = Arc::new(RecordingEventPublisher::new());
    let layout = TestPipeLayout::new();
    layout.place(&holders);

    let text = YamlTextLookup::english().unwrap_or_else(|e| panic!("bundled texts: {}", e));
    let service = Service::new(holders.clone(), Arc::new(text), events.clone(), &config);
    TestContext {
        service,
        holders,
        events,
        layout,
    }
}
