//! Message and actor types
//!
//! Minimal shapes consumed by the message and post formatters.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::{Content, UUID};

/// A stored message in a room
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Memory {
    /// Unique identifier
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<UUID>,
    /// Entity that sent the message; messages without a sender are
    /// skipped by the formatters
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity_id: Option<UUID>,
    /// Room the message belongs to
    pub room_id: UUID,
    /// Creation timestamp in Unix milliseconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<i64>,
    /// Message content
    pub content: Content,
}

/// Free-form descriptive details for an actor
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActorDetails {
    /// One-line tagline
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tagline: Option<String>,
    /// Longer summary paragraph
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    /// Additional dynamic properties
    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}

/// A participant in a conversation
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Actor {
    /// Unique identifier
    pub id: UUID,
    /// Display name
    pub name: String,
    /// Platform handle
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    /// Descriptive details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<ActorDetails>,
}
