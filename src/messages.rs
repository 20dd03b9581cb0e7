//! Message and actor formatting
//!
//! Single-pass shaping of stored messages and participants into prompt
//! sections, plus timestamp humanization.

use crate::types::{Actor, Memory};
use std::time::{SystemTime, UNIX_EPOCH};

const MINUTE_MS: i64 = 60 * 1000;
const HOUR_MS: i64 = 60 * MINUTE_MS;
const DAY_MS: i64 = 24 * HOUR_MS;

/// Fallback display name for messages whose sender is not in the actor list.
const UNKNOWN_USER: &str = "Unknown User";

/// Format actors into a string
///
/// Each actor renders as `"Name: tagline"` followed by the summary on its
/// own line; absent details are simply omitted.
pub fn format_actors(actors: &[Actor]) -> String {
    actors
        .iter()
        .map(|actor| {
            let mut entry = actor.name.clone();
            if let Some(details) = &actor.details {
                if let Some(tagline) = details.tagline.as_deref().filter(|t| !t.is_empty()) {
                    entry.push_str(": ");
                    entry.push_str(tagline);
                }
                if let Some(summary) = details.summary.as_deref().filter(|s| !s.is_empty()) {
                    entry.push('\n');
                    entry.push_str(summary);
                }
            }
            entry
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format messages into a chat transcript string
///
/// Messages render newest-last (the input is walked in reverse), one line
/// per message:
/// `"(<age>) [<short-id>] <name>: <text> (Attachments: ...) (<action>)"`.
/// Messages without a sender are skipped, unknown senders fall back to
/// "Unknown User", and an action annotation equal to the literal string
/// `"null"` is suppressed.
pub fn format_messages(messages: &[Memory], actors: &[Actor]) -> String {
    messages
        .iter()
        .rev()
        .filter_map(|message| {
            let entity_id = message.entity_id.as_ref()?;

            let name = actors
                .iter()
                .find(|actor| &actor.id == entity_id)
                .map(|actor| actor.name.as_str())
                .unwrap_or(UNKNOWN_USER);

            let text = message.content.text.as_deref().unwrap_or_default();

            let attachments = message.content.attachments.as_deref().unwrap_or(&[]);
            let attachment_string = if attachments.is_empty() {
                String::new()
            } else {
                let entries: Vec<String> = attachments
                    .iter()
                    .map(|media| {
                        format!(
                            "[{} - {} ({})]",
                            media.id,
                            media.title.as_deref().unwrap_or_default(),
                            media.url
                        )
                    })
                    .collect();
                format!(" (Attachments: {})", entries.join(", "))
            };

            let action_string = match message.content.action.as_deref() {
                Some(action) if !action.is_empty() && action != "null" => {
                    format!(" ({})", action)
                }
                _ => String::new(),
            };

            let timestamp = format_timestamp(message.created_at.unwrap_or_default());

            Some(format!(
                "({}) [{}] {}: {}{}{}",
                timestamp,
                short_id(entity_id.as_str()),
                name,
                text,
                attachment_string,
                action_string
            ))
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Humanize a Unix-millisecond timestamp relative to the current time.
pub fn format_timestamp(message_ms: i64) -> String {
    format_timestamp_at(message_ms, current_unix_timestamp_ms())
}

/// Humanize a Unix-millisecond timestamp relative to `now_ms`.
///
/// The difference is taken as an absolute value, so timestamps slightly in
/// the future (clock skew) degrade to "just now" rather than misbehaving.
pub fn format_timestamp_at(message_ms: i64, now_ms: i64) -> String {
    let diff = (now_ms - message_ms).abs();

    if diff < MINUTE_MS {
        return "just now".to_string();
    }

    let minutes = diff / MINUTE_MS;
    let hours = diff / HOUR_MS;
    let days = diff / DAY_MS;

    if minutes < 60 {
        return format!("{} minute{} ago", minutes, plural(minutes));
    }
    if hours < 24 {
        return format!("{} hour{} ago", hours, plural(hours));
    }
    format!("{} day{} ago", days, plural(days))
}

fn plural(n: i64) -> &'static str {
    if n != 1 {
        "s"
    } else {
        ""
    }
}

/// Last five characters of an identifier, used as a compact display tag.
pub(crate) fn short_id(id: &str) -> &str {
    &id[id.len().saturating_sub(5)..]
}

/// Returns the current Unix timestamp in milliseconds.
fn current_unix_timestamp_ms() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("System time should be after UNIX_EPOCH")
        .as_millis() as i64
}
