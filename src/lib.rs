//! Few-shot example composition for dialogue agents
//!
//! This crate assembles the example sections of an agent prompt: given a
//! catalogue of named actions, each carrying alternative example dialogues,
//! it selects a diverse, bounded subset of those dialogues, anonymizes them
//! with freshly generated participant names, and renders them as plain-text
//! transcripts. Peripheral helpers format actors, chat messages, and
//! room-grouped posts, and derive deterministic UUIDs compatible with the
//! TypeScript core.
//!
//! The selection/rendering engine is synchronous, performs no I/O, and is
//! total over its inputs: empty catalogues, a zero count, and counts
//! exceeding availability are all normal paths yielding shorter output.

pub mod catalog;
pub mod compose;
pub mod messages;
pub mod names;
pub mod posts;
pub mod types;

pub use catalog::{parse_actions, validate_action};
pub use compose::{
    compose_action_examples, compose_action_examples_with, format_action_names,
    format_actions, render_action_examples, select_action_examples,
};
pub use messages::{format_actors, format_messages, format_timestamp};
pub use names::{DictionaryNameGenerator, NameError, NameGenerator};
pub use posts::format_posts;
pub use types::{as_uuid, string_to_uuid};
