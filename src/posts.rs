//! Post transcript formatting
//!
//! Groups stored messages by room and renders them as social-style post
//! blocks, newest conversation first.

use std::collections::HashMap;

use crate::messages::{format_timestamp, short_id};
use crate::types::{Actor, Memory, UUID};

/// Format messages into room-grouped post transcripts
///
/// Messages are grouped by room, sorted oldest-first within each room, and
/// rooms are ordered by their newest message, descending. Each post renders
/// as a `Name/ID/Date/Text` block (plus an `In reply to` line when set),
/// with an optional `"Conversation: <short-room-id>"` header per room.
pub fn format_posts(
    messages: &[Memory],
    actors: &[Actor],
    conversation_header: bool,
) -> String {
    let mut grouped: HashMap<&UUID, Vec<&Memory>> = HashMap::new();
    for message in messages {
        grouped.entry(&message.room_id).or_default().push(message);
    }

    for room_messages in grouped.values_mut() {
        room_messages.sort_by_key(|message| message.created_at.unwrap_or_default());
    }

    let latest = |room_messages: &[&Memory]| {
        room_messages
            .last()
            .and_then(|message| message.created_at)
            .unwrap_or_default()
    };

    let mut rooms: Vec<(&UUID, Vec<&Memory>)> = grouped.into_iter().collect();
    rooms.sort_by(|(_, a), (_, b)| latest(b).cmp(&latest(a)));

    let formatted_rooms: Vec<String> = rooms
        .iter()
        .map(|(room_id, room_messages)| {
            let posts: Vec<String> = room_messages
                .iter()
                .filter_map(|message| format_post(message, actors))
                .collect();

            let header = if conversation_header {
                format!("Conversation: {}\n", short_id(room_id.as_str()))
            } else {
                String::new()
            };

            format!("{}{}", header, posts.join("\n\n"))
        })
        .collect();

    formatted_rooms.join("\n\n")
}

/// Render one message as a post block; senderless messages are skipped.
fn format_post(message: &Memory, actors: &[Actor]) -> Option<String> {
    let entity_id = message.entity_id.as_ref()?;

    let actor = actors.iter().find(|actor| &actor.id == entity_id);
    let name = actor.map(|a| a.name.as_str()).unwrap_or("Unknown User");
    let username = actor
        .and_then(|a| a.username.as_deref())
        .unwrap_or("unknown");

    let id = message
        .id
        .as_ref()
        .map(|id| id.to_string())
        .unwrap_or_default();
    let reply_line = message
        .content
        .in_reply_to
        .as_ref()
        .map(|parent| format!("\nIn reply to: {}", parent))
        .unwrap_or_default();
    let date = format_timestamp(message.created_at.unwrap_or_default());
    let text = message.content.text.as_deref().unwrap_or_default();

    Some(format!(
        "Name: {} (@{})\nID: {}{}\nDate: {}\nText:\n{}",
        name, username, id, reply_line, date, text
    ))
}
