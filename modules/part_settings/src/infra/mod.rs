//! Infrastructure layer - implementations of the domain collaborator traits

pub mod memory;
pub mod text;

pub use memory::InMemoryHolders;
pub use text::YamlTextLookup;
