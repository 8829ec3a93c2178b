// SPDX-FileCopyrightText: 2026 Dropchat Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Chat drop message record and its identifier and state types.

use std::fmt;

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::payload::MessagePayload;

/// Store-assigned identifier of a chat drop message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct MessageId(pub i64);

impl MessageId {
    /// Marks a message that has not been persisted yet.
    pub const UNASSIGNED: MessageId = MessageId(0);

    pub fn is_assigned(&self) -> bool {
        *self != Self::UNASSIGNED
    }
}

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Opaque identifier of a remote correspondent, owned by the contact subsystem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ContactId(pub i64);

impl fmt::Display for ContactId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Opaque identifier of a local identity, owned by the identity subsystem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct IdentityId(pub i64);

impl fmt::Display for IdentityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Whether a message was received from or sent to the contact.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Direction {
    Incoming,
    Outgoing,
}

/// Read state of a message.
///
/// The only transition is `New -> Read`; a read message never becomes new again.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Status {
    New,
    Read,
}

impl Status {
    /// Whether a record in this state may be rewritten with `next`.
    pub fn can_transition_to(self, next: Status) -> bool {
        !matches!((self, next), (Status::Read, Status::New))
    }

    pub fn is_unread(self) -> bool {
        self == Status::New
    }
}

/// Tag selecting which payload variant a message carries.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MessageType {
    /// A plain chat message.
    BoxMessage,
    /// Notification that the contact shared a file.
    ShareNotification,
}

/// One message in one conversation.
///
/// A conversation is the set of messages sharing `(contact_id, identity_id)`.
/// Equality is structural over every field, including `id`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChatDropMessage {
    pub id: MessageId,
    pub contact_id: ContactId,
    pub identity_id: IdentityId,
    pub direction: Direction,
    pub status: Status,
    pub message_type: MessageType,
    pub payload: MessagePayload,
    /// Caller-supplied creation time in epoch milliseconds; the ordering key
    /// of every listing query.
    pub created_on: i64,
}

impl ChatDropMessage {
    /// Create a message that has not been persisted yet.
    pub fn new(
        contact_id: ContactId,
        identity_id: IdentityId,
        direction: Direction,
        status: Status,
        message_type: MessageType,
        payload: MessagePayload,
        created_on: i64,
    ) -> Self {
        Self {
            id: MessageId::UNASSIGNED,
            contact_id,
            identity_id,
            direction,
            status,
            message_type,
            payload,
            created_on,
        }
    }

    /// Copy of this message with a different payload.
    pub fn with_payload(&self, payload: MessagePayload) -> Self {
        Self {
            payload,
            ..self.clone()
        }
    }

    /// Copy of this message with a different creation time.
    pub fn with_created_on(&self, created_on: i64) -> Self {
        Self {
            created_on,
            ..self.clone()
        }
    }

    /// Copy of this message addressed to another contact.
    pub fn with_contact(&self, contact_id: ContactId) -> Self {
        Self {
            contact_id,
            ..self.clone()
        }
    }

    /// Copy of this message in another read state.
    pub fn with_status(&self, status: Status) -> Self {
        Self {
            status,
            ..self.clone()
        }
    }

    /// Copy of this message with the id cleared, ready to be persisted as a new record.
    pub fn unpersisted(&self) -> Self {
        Self {
            id: MessageId::UNASSIGNED,
            ..self.clone()
        }
    }

    pub fn is_persisted(&self) -> bool {
        self.id.is_assigned()
    }

    /// `created_on` as a UTC timestamp, if it is in chrono's representable range.
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        Utc.timestamp_millis_opt(self.created_on).single()
    }
}
