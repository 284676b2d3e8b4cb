//! API layer - native client and user-facing messages

pub mod messages;
pub mod native;

pub use messages::{outcome_message, user_message};
pub use native::NativeClient;
