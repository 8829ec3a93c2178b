// SPDX-FileCopyrightText: 2026 Dropchat Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Row representation of a chat drop message.
//!
//! Rows are read inside the connection thread as plain column values and
//! converted to [`ChatDropMessage`] afterwards, so decoding failures surface
//! as typed [`DropChatError`]s rather than SQLite errors.

use dropchat_core::{
    ChatDropMessage, ContactId, Direction, DropChatError, IdentityId, MessageId, MessagePayload,
    MessageType, Status,
};

/// Column list shared by every message query, in [`MessageRow::from_row`] order.
pub const MESSAGE_COLUMNS: &str =
    "id, contact_id, identity_id, direction, status, message_type, payload, created_on";

/// One `chat_drop_messages` row as stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageRow {
    pub id: i64,
    pub contact_id: i64,
    pub identity_id: i64,
    pub direction: String,
    pub status: String,
    pub message_type: String,
    pub payload: String,
    pub created_on: i64,
}

impl MessageRow {
    /// Read a row selected with [`MESSAGE_COLUMNS`].
    pub fn from_row(row: &rusqlite::Row<'_>) -> Result<Self, rusqlite::Error> {
        Ok(Self {
            id: row.get(0)?,
            contact_id: row.get(1)?,
            identity_id: row.get(2)?,
            direction: row.get(3)?,
            status: row.get(4)?,
            message_type: row.get(5)?,
            payload: row.get(6)?,
            created_on: row.get(7)?,
        })
    }

    /// Encode a message for storage, rejecting payloads that do not fit the type.
    pub fn encode(message: &ChatDropMessage) -> Result<Self, DropChatError> {
        Ok(Self {
            id: message.id.0,
            contact_id: message.contact_id.0,
            identity_id: message.identity_id.0,
            direction: message.direction.to_string(),
            status: message.status.to_string(),
            message_type: message.message_type.to_string(),
            payload: message.payload.encode(message.message_type)?,
            created_on: message.created_on,
        })
    }
}

fn corrupt(column: &str, value: &str, source: strum::ParseError) -> DropChatError {
    DropChatError::Persistence {
        source: format!("invalid {column} `{value}` in chat_drop_messages: {source}").into(),
    }
}

impl TryFrom<MessageRow> for ChatDropMessage {
    type Error = DropChatError;

    fn try_from(row: MessageRow) -> Result<Self, Self::Error> {
        let direction: Direction = row
            .direction
            .parse()
            .map_err(|e| corrupt("direction", &row.direction, e))?;
        let status: Status = row
            .status
            .parse()
            .map_err(|e| corrupt("status", &row.status, e))?;
        let message_type: MessageType = row
            .message_type
            .parse()
            .map_err(|e| corrupt("message_type", &row.message_type, e))?;
        let payload = MessagePayload::decode(message_type, &row.payload)?;

        Ok(ChatDropMessage {
            id: MessageId(row.id),
            contact_id: ContactId(row.contact_id),
            identity_id: IdentityId(row.identity_id),
            direction,
            status,
            message_type,
            payload,
            created_on: row.created_on,
        })
    }
}

/// Decode a batch of rows, failing on the first undecodable one.
pub fn decode_rows(rows: Vec<MessageRow>) -> Result<Vec<ChatDropMessage>, DropChatError> {
    rows.into_iter().map(ChatDropMessage::try_from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message() -> ChatDropMessage {
        ChatDropMessage::new(
            ContactId(3),
            IdentityId(4),
            Direction::Outgoing,
            Status::New,
            MessageType::BoxMessage,
            MessagePayload::text("hi"),
            42,
        )
    }

    #[test]
    fn encode_uses_stored_names() {
        let row = MessageRow::encode(&message()).unwrap();
        assert_eq!(row.direction, "OUTGOING");
        assert_eq!(row.status, "NEW");
        assert_eq!(row.message_type, "BOX_MESSAGE");
        assert_eq!(row.payload, r#"{"text":"hi"}"#);
        assert_eq!(row.id, 0);
    }

    #[test]
    fn encoded_row_converts_back() {
        let mut original = message();
        original.id = MessageId(9);
        let row = MessageRow::encode(&original).unwrap();
        let decoded = ChatDropMessage::try_from(row).unwrap();
        assert_eq!(decoded, original);
    }

    #[test]
    fn unknown_status_is_reported_as_persistence_error() {
        let mut row = MessageRow::encode(&message()).unwrap();
        row.status = "ARCHIVED".to_string();
        let err = ChatDropMessage::try_from(row).unwrap_err();
        assert!(matches!(err, DropChatError::Persistence { .. }));
        assert!(err.to_string().contains("ARCHIVED"));
    }

    #[test]
    fn mismatched_payload_is_rejected_before_storage() {
        let mut bad = message();
        bad.message_type = MessageType::ShareNotification;
        let err = MessageRow::encode(&bad).unwrap_err();
        assert!(matches!(err, DropChatError::Payload(_)));
    }
}
