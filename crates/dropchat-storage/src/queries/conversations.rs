// SPDX-FileCopyrightText: 2026 Dropchat Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Cross-contact aggregation for one identity.

use dropchat_core::{ChatDropMessage, DropChatError, IdentityId, Status};
use rusqlite::params;

use crate::database::{Database, map_tr_err};
use crate::models::{MESSAGE_COLUMNS, MessageRow, decode_rows};

/// The newest message of every conversation of `identity_id`.
///
/// Within a conversation the newest message is the one with the highest
/// `created_on`, then the highest id. Conversations are returned most
/// recently active first, ties by ascending contact id. Contacts without
/// messages simply do not appear.
pub async fn latest_per_contact(
    db: &Database,
    identity_id: IdentityId,
) -> Result<Vec<ChatDropMessage>, DropChatError> {
    let rows = db
        .connection()
        .call(move |conn| {
            let mut stmt = conn.prepare(&format!(
                "SELECT {MESSAGE_COLUMNS} FROM (
                     SELECT *, ROW_NUMBER() OVER (
                         PARTITION BY contact_id
                         ORDER BY created_on DESC, id DESC
                     ) AS rank_in_conversation
                     FROM chat_drop_messages
                     WHERE identity_id = ?1
                 )
                 WHERE rank_in_conversation = 1
                 ORDER BY created_on DESC, contact_id ASC"
            ))?;
            stmt.query_map(params![identity_id.0], MessageRow::from_row)?
                .collect::<Result<Vec<_>, _>>()
        })
        .await
        .map_err(map_tr_err)?;
    decode_rows(rows)
}

/// Every unread message of `identity_id`, across contacts, ascending id.
pub async fn new_for_identity(
    db: &Database,
    identity_id: IdentityId,
) -> Result<Vec<ChatDropMessage>, DropChatError> {
    let rows = db
        .connection()
        .call(move |conn| {
            let mut stmt = conn.prepare(&format!(
                "SELECT {MESSAGE_COLUMNS} FROM chat_drop_messages
                 WHERE identity_id = ?1 AND status = ?2
                 ORDER BY id ASC"
            ))?;
            stmt.query_map(
                params![identity_id.0, Status::New.to_string()],
                MessageRow::from_row,
            )?
            .collect::<Result<Vec<_>, _>>()
        })
        .await
        .map_err(map_tr_err)?;
    decode_rows(rows)
}
