//! Domain layer - business logic and services

pub mod codec;
pub mod document;
pub mod events;
pub mod hidden;
pub mod layout;
pub mod part;
pub mod repository;
pub mod service;
pub mod validation;

pub use codec::OptionStringCodec;
pub use events::{EventPublisher, NoOpEventPublisher, PartEvent, TracingEventPublisher};
pub use part::ConfigurablePart;
pub use repository::{HolderRepository, TextLookup};
pub use service::Service;
