// SPDX-FileCopyrightText: 2026 Dropchat Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Message payload variants and their stored representation.
//!
//! The store keeps the payload as a text column next to the message type.
//! The type tag decides how the body is decoded: a `BOX_MESSAGE` body is a
//! [`TextMessage`], a `SHARE_NOTIFICATION` body is a [`ShareMessage`]. An
//! empty body is [`MessagePayload::NoMessage`].

use serde::{Deserialize, Serialize};

use crate::error::PayloadError;
use crate::types::MessageType;

/// Body of a plain chat message.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TextMessage {
    pub text: String,
}

/// Body of a share notification: an optional note plus the shared file reference.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ShareMessage {
    pub message: String,
    pub url: String,
    /// Hex-encoded symmetric key of the shared file.
    pub key: String,
}

/// Typed body of a chat drop message.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MessagePayload {
    NoMessage,
    Text(TextMessage),
    Share(ShareMessage),
}

impl MessagePayload {
    pub fn text(text: impl Into<String>) -> Self {
        MessagePayload::Text(TextMessage { text: text.into() })
    }

    pub fn share(
        message: impl Into<String>,
        url: impl Into<String>,
        key: impl Into<String>,
    ) -> Self {
        MessagePayload::Share(ShareMessage {
            message: message.into(),
            url: url.into(),
            key: key.into(),
        })
    }

    /// Variant name used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            MessagePayload::NoMessage => "no_message",
            MessagePayload::Text(_) => "text",
            MessagePayload::Share(_) => "share",
        }
    }

    /// Whether this payload may be stored under `message_type`.
    pub fn accepts(&self, message_type: MessageType) -> bool {
        matches!(
            (self, message_type),
            (MessagePayload::NoMessage, MessageType::BoxMessage)
                | (MessagePayload::Text(_), MessageType::BoxMessage)
                | (MessagePayload::Share(_), MessageType::ShareNotification)
        )
    }

    /// Short human-readable summary, used for conversation previews.
    pub fn preview(&self) -> &str {
        match self {
            MessagePayload::NoMessage => "",
            MessagePayload::Text(t) => &t.text,
            MessagePayload::Share(s) => &s.message,
        }
    }

    /// Encode the body for storage under `message_type`.
    pub fn encode(&self, message_type: MessageType) -> Result<String, PayloadError> {
        if !self.accepts(message_type) {
            return Err(PayloadError::TypeMismatch {
                message_type,
                payload: self.kind(),
            });
        }
        let encoded = match self {
            MessagePayload::NoMessage => Ok(String::new()),
            MessagePayload::Text(body) => serde_json::to_string(body),
            MessagePayload::Share(body) => serde_json::to_string(body),
        };
        encoded.map_err(|source| PayloadError::Malformed {
            message_type,
            source,
        })
    }

    /// Decode a stored body according to its message type.
    pub fn decode(message_type: MessageType, body: &str) -> Result<Self, PayloadError> {
        if body.is_empty() {
            return match message_type {
                MessageType::BoxMessage => Ok(MessagePayload::NoMessage),
                MessageType::ShareNotification => Err(PayloadError::Empty { message_type }),
            };
        }
        let decoded = match message_type {
            MessageType::BoxMessage => serde_json::from_str(body).map(MessagePayload::Text),
            MessageType::ShareNotification => {
                serde_json::from_str(body).map(MessagePayload::Share)
            }
        };
        decoded.map_err(|source| PayloadError::Malformed {
            message_type,
            source,
        })
    }
}
