// SPDX-FileCopyrightText: 2026 Dropchat Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for dropchat.

use thiserror::Error;

use crate::types::{MessageId, MessageType, Status};

/// The primary error type returned by repository operations.
#[derive(Debug, Error)]
pub enum DropChatError {
    /// No record with the given id is stored.
    #[error("chat drop message {id} not found")]
    EntityNotFound { id: MessageId },

    /// The store rejected a write or failed a query (constraint violation, I/O).
    #[error("persistence error: {source}")]
    Persistence {
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// An update would move a message's status backwards.
    #[error("chat drop message {id} cannot move from {from} to {to}")]
    InvalidTransition {
        id: MessageId,
        from: Status,
        to: Status,
    },

    /// An update tried to change a field that is fixed at creation.
    #[error("chat drop message {id}: `{field}` cannot be changed after creation")]
    ImmutableField { id: MessageId, field: &'static str },

    /// The payload does not fit its message type or could not be decoded.
    #[error(transparent)]
    Payload(#[from] PayloadError),

    /// Configuration errors surfaced at storage setup.
    #[error("configuration error: {0}")]
    Config(String),

    /// Internal or unexpected errors.
    #[error("internal error: {0}")]
    Internal(String),
}

impl DropChatError {
    /// Returns `true` if this is an [`DropChatError::EntityNotFound`].
    pub fn is_not_found(&self) -> bool {
        matches!(self, DropChatError::EntityNotFound { .. })
    }
}

/// Errors raised while encoding or decoding a message payload.
#[derive(Debug, Error)]
pub enum PayloadError {
    /// The payload variant is not valid for the declared message type.
    #[error("payload `{payload}` is not valid for message type {message_type}")]
    TypeMismatch {
        message_type: MessageType,
        payload: &'static str,
    },

    /// A message type that requires a body was stored without one.
    #[error("message type {message_type} requires a payload body")]
    Empty { message_type: MessageType },

    /// The stored body is not valid JSON for the message type.
    #[error("malformed {message_type} payload: {source}")]
    Malformed {
        message_type: MessageType,
        source: serde_json::Error,
    },
}
