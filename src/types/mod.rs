//! Core types for prompt composition
//!
//! All types are designed to serialize/deserialize to JSON in a format
//! identical to the TypeScript implementation.

mod components;
mod memory;
mod primitives;

pub use components::{ActionDefinition, ActionExample};
pub use memory::{Actor, ActorDetails, Memory};
pub use primitives::{as_uuid, string_to_uuid, Content, Media, UUIDError, UUID};
