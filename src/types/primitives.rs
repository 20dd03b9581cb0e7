//! Primitive types for prompt composition
//!
//! Contains UUID, Content, Media, and the deterministic UUID derivation.

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use sha1::{Digest, Sha1};
use std::collections::HashMap;
use std::fmt;
use thiserror::Error;

lazy_static! {
    static ref UUID_REGEX: Regex =
        Regex::new(r"^[0-9a-f]{8}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{12}$").unwrap();
}

/// Error type for UUID operations
#[derive(Error, Debug)]
pub enum UUIDError {
    /// Invalid UUID format
    #[error("Invalid UUID format: {0}")]
    InvalidFormat(String),
}

/// A universally unique identifier (UUID) type
///
/// This type wraps a String and validates that it conforms to the UUID format.
/// It serializes transparently as a string in JSON.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UUID(String);

impl UUID {
    /// Create a new UUID from a string, validating the format
    pub fn new(id: &str) -> Result<Self, UUIDError> {
        if !UUID_REGEX.is_match(&id.to_lowercase()) {
            return Err(UUIDError::InvalidFormat(id.to_string()));
        }
        Ok(UUID(id.to_lowercase()))
    }

    /// Create a new random UUID (v4)
    pub fn new_v4() -> Self {
        UUID(uuid::Uuid::new_v4().to_string())
    }

    /// Get the string representation
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert to owned String
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for UUID {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<&str> for UUID {
    type Error = UUIDError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        UUID::new(value)
    }
}

impl TryFrom<String> for UUID {
    type Error = UUIDError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        UUID::new(&value)
    }
}

impl From<uuid::Uuid> for UUID {
    fn from(value: uuid::Uuid) -> Self {
        UUID(value.to_string())
    }
}

/// Helper function to safely cast a string to strongly typed UUID
pub fn as_uuid(id: &str) -> Result<UUID, UUIDError> {
    UUID::new(id)
}

/// Derive a deterministic UUID from an arbitrary string.
///
/// Matches TypeScript's `stringToUuid` byte for byte: the input is
/// percent-encoded the way `encodeURIComponent` encodes it, hashed with
/// SHA-1, and the first 16 hash bytes are rendered as a UUID. Byte 6 is
/// masked with `0x0f` and byte 8 is forced to the `10xxxxxx` variant,
/// mirroring the TypeScript bit twiddling (including its nonstandard
/// version nibble).
pub fn string_to_uuid(input: &str) -> UUID {
    let escaped = encode_uri_component(input);
    let hash = Sha1::digest(escaped.as_bytes());

    let mut bytes = [0u8; 16];
    bytes.copy_from_slice(&hash[..16]);
    bytes[6] &= 0x0f;
    bytes[8] = (bytes[8] & 0x3f) | 0x80;

    UUID(uuid::Uuid::from_bytes(bytes).to_string())
}

/// Percent-encode a string exactly like JavaScript's `encodeURIComponent`.
///
/// Unreserved characters (`A-Z a-z 0-9 - _ . ! ~ * ' ( )`) pass through;
/// everything else is emitted as uppercase `%XX` escapes of its UTF-8 bytes.
fn encode_uri_component(input: &str) -> String {
    let mut encoded = String::with_capacity(input.len());
    for &byte in input.as_bytes() {
        match byte {
            b'A'..=b'Z'
            | b'a'..=b'z'
            | b'0'..=b'9'
            | b'-'
            | b'_'
            | b'.'
            | b'!'
            | b'~'
            | b'*'
            | b'\''
            | b'('
            | b')' => encoded.push(byte as char),
            _ => encoded.push_str(&format!("%{:02X}", byte)),
        }
    }
    encoded
}

/// Represents a media attachment
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Media {
    /// Unique identifier
    pub id: String,
    /// Media URL
    pub url: String,
    /// Media title
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Media source
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    /// Media description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Represents the content of a message or example dialogue turn
///
/// `text` and the speaker name on the surrounding turn may contain
/// placeholder tokens of the form `{{user1}}` through `{{user5}}`, which
/// the renderer resolves with freshly generated participant names.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Content {
    /// The main text content visible to users
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Action annotation appended to the rendered line
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
    /// UUID of parent message if this is a reply/thread
    #[serde(skip_serializing_if = "Option::is_none")]
    pub in_reply_to: Option<UUID>,
    /// Array of media attachments
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attachments: Option<Vec<Media>>,
    /// Additional dynamic properties
    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}
