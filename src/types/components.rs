//! Action catalogue types
//!
//! Contains the action definitions and example dialogues the composition
//! engine draws from.

use serde::{Deserialize, Serialize};

use super::Content;

/// One turn of an example dialogue
///
/// `name` is the speaker and, like `content.text`, may contain placeholder
/// tokens (`{{user1}}`..`{{user5}}`) that are resolved at render time.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionExample {
    /// Speaker of this turn
    pub name: String,
    /// Content of the turn
    pub content: Content,
}

/// Action definition for serialization
///
/// Each action owns zero or more example dialogues, where a dialogue is an
/// ordered sequence of [`ActionExample`] turns. The catalogue is immutable
/// from the engine's perspective; selection works on per-call copies.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionDefinition {
    /// Action name
    pub name: String,
    /// Detailed description
    pub description: String,
    /// Similar action descriptions
    #[serde(skip_serializing_if = "Option::is_none")]
    pub similes: Option<Vec<String>>,
    /// Example dialogues demonstrating the action
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub examples: Vec<Vec<ActionExample>>,
}
