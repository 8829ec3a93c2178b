// SPDX-FileCopyrightText: 2026 Dropchat Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Message fixtures.

use dropchat_core::{
    ChatDropMessage, ContactId, Direction, IdentityId, MessagePayload, MessageType, Status,
};

/// Current wall-clock time in epoch milliseconds.
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// An incoming, already read text message.
pub fn text_message(
    contact_id: ContactId,
    identity_id: IdentityId,
    text: &str,
    created_on: i64,
) -> ChatDropMessage {
    ChatDropMessage::new(
        contact_id,
        identity_id,
        Direction::Incoming,
        Status::Read,
        MessageType::BoxMessage,
        MessagePayload::text(text),
        created_on,
    )
}

/// `count` text messages of one conversation with strictly increasing
/// `created_on`, starting at `start`.
pub fn conversation(
    contact_id: ContactId,
    identity_id: IdentityId,
    count: usize,
    start: i64,
) -> Vec<ChatDropMessage> {
    (0..count)
        .map(|i| {
            text_message(
                contact_id,
                identity_id,
                &format!("message {i}"),
                start + i as i64,
            )
        })
        .collect()
}

/// A share notification from `contact_id`.
pub fn share_notification(
    contact_id: ContactId,
    identity_id: IdentityId,
    created_on: i64,
) -> ChatDropMessage {
    ChatDropMessage::new(
        contact_id,
        identity_id,
        Direction::Incoming,
        Status::New,
        MessageType::ShareNotification,
        MessagePayload::share(
            "shared a file",
            "https://drop.example/box/3f2a",
            "8a6c1e0f9b7d2c4e",
        ),
        created_on,
    )
}
