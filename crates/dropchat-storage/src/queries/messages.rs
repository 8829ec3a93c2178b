// SPDX-FileCopyrightText: 2026 Dropchat Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Message CRUD and conversation listing.
//!
//! Conversation listings are ordered `created_on DESC, id DESC`.

use dropchat_core::{
    ChatDropMessage, ContactId, DropChatError, IdentityId, MessageId, PageWindow, PagingResult,
    Status,
};
use rusqlite::{OptionalExtension, params};

use crate::database::{Database, map_tr_err};
use crate::models::{MESSAGE_COLUMNS, MessageRow, decode_rows};
use crate::queries::sql_count;

/// Insert a message row and return the id it was stored under.
///
/// A row with id 0 gets a fresh id from SQLite; any other id is inserted
/// verbatim and collides with an existing row as a constraint violation.
pub async fn insert_message(db: &Database, row: MessageRow) -> Result<MessageId, DropChatError> {
    db.connection()
        .call(move |conn| {
            let id = if row.id == MessageId::UNASSIGNED.0 {
                None
            } else {
                Some(row.id)
            };
            conn.execute(
                "INSERT INTO chat_drop_messages
                     (id, contact_id, identity_id, direction, status, message_type, payload, created_on)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
                params![
                    id,
                    row.contact_id,
                    row.identity_id,
                    row.direction,
                    row.status,
                    row.message_type,
                    row.payload,
                    row.created_on,
                ],
            )?;
            Ok::<_, rusqlite::Error>(MessageId(conn.last_insert_rowid()))
        })
        .await
        .map_err(map_tr_err)
}

/// Result of a guarded full-row update.
enum UpdateOutcome {
    Updated,
    Missing,
    Regressed(Status),
    DirectionChanged,
}

/// Replace a stored row, refusing to move its status from READ to NEW or to
/// change its direction.
///
/// The guard and the write run in one transaction on the connection thread,
/// so a concurrent bulk read-transition cannot slip in between.
pub async fn update_message(db: &Database, row: MessageRow) -> Result<(), DropChatError> {
    let id = MessageId(row.id);
    let next: Status = row
        .status
        .parse()
        .map_err(|_| DropChatError::Internal(format!("unencodable status `{}`", row.status)))?;
    let outcome = db
        .connection()
        .call(move |conn| {
            let tx = conn.transaction()?;
            let current: Option<(String, String)> = tx
                .query_row(
                    "SELECT status, direction FROM chat_drop_messages WHERE id = ?1",
                    params![row.id],
                    |r| Ok((r.get(0)?, r.get(1)?)),
                )
                .optional()?;
            let outcome = match current {
                None => UpdateOutcome::Missing,
                Some((_, direction)) if direction != row.direction => {
                    UpdateOutcome::DirectionChanged
                }
                Some((status, _)) => match status.parse::<Status>() {
                    Ok(from) if !from.can_transition_to(next) => UpdateOutcome::Regressed(from),
                    _ => {
                        tx.execute(
                            "UPDATE chat_drop_messages
                             SET contact_id = ?2, identity_id = ?3, status = ?4,
                                 message_type = ?5, payload = ?6, created_on = ?7
                             WHERE id = ?1",
                            params![
                                row.id,
                                row.contact_id,
                                row.identity_id,
                                row.status,
                                row.message_type,
                                row.payload,
                                row.created_on,
                            ],
                        )?;
                        UpdateOutcome::Updated
                    }
                },
            };
            tx.commit()?;
            Ok::<_, rusqlite::Error>(outcome)
        })
        .await
        .map_err(map_tr_err)?;

    match outcome {
        UpdateOutcome::Updated => Ok(()),
        UpdateOutcome::Missing => Err(DropChatError::EntityNotFound { id }),
        UpdateOutcome::Regressed(from) => Err(DropChatError::InvalidTransition {
            id,
            from,
            to: next,
        }),
        UpdateOutcome::DirectionChanged => Err(DropChatError::ImmutableField {
            id,
            field: "direction",
        }),
    }
}

/// Delete a row by id.
pub async fn delete_message(db: &Database, id: MessageId) -> Result<(), DropChatError> {
    let deleted = db
        .connection()
        .call(move |conn| {
            conn.execute("DELETE FROM chat_drop_messages WHERE id = ?1", params![id.0])
        })
        .await
        .map_err(map_tr_err)?;
    if deleted == 0 {
        return Err(DropChatError::EntityNotFound { id });
    }
    Ok(())
}

/// Load a message by id.
pub async fn get_message(
    db: &Database,
    id: MessageId,
) -> Result<Option<ChatDropMessage>, DropChatError> {
    let row = db
        .connection()
        .call(move |conn| {
            conn.query_row(
                &format!("SELECT {MESSAGE_COLUMNS} FROM chat_drop_messages WHERE id = ?1"),
                params![id.0],
                MessageRow::from_row,
            )
            .optional()
        })
        .await
        .map_err(map_tr_err)?;
    row.map(ChatDropMessage::try_from).transpose()
}

/// Every stored message, ascending id.
pub async fn list_all(db: &Database) -> Result<Vec<ChatDropMessage>, DropChatError> {
    let rows = db
        .connection()
        .call(|conn| {
            let mut stmt = conn.prepare(&format!(
                "SELECT {MESSAGE_COLUMNS} FROM chat_drop_messages ORDER BY id ASC"
            ))?;
            stmt.query_map([], MessageRow::from_row)?
                .collect::<Result<Vec<_>, _>>()
        })
        .await
        .map_err(map_tr_err)?;
    decode_rows(rows)
}

/// Whether a row equal to `row` on every column is stored.
///
/// A row id of 0 matches any stored id.
pub async fn message_exists(db: &Database, row: MessageRow) -> Result<bool, DropChatError> {
    db.connection()
        .call(move |conn| {
            conn.query_row(
                "SELECT EXISTS (
                     SELECT 1 FROM chat_drop_messages
                     WHERE (?1 = 0 OR id = ?1)
                       AND contact_id = ?2 AND identity_id = ?3
                       AND direction = ?4 AND status = ?5
                       AND message_type = ?6 AND payload = ?7
                       AND created_on = ?8
                 )",
                params![
                    row.id,
                    row.contact_id,
                    row.identity_id,
                    row.direction,
                    row.status,
                    row.message_type,
                    row.payload,
                    row.created_on,
                ],
                |r| r.get(0),
            )
        })
        .await
        .map_err(map_tr_err)
}

/// The whole conversation, newest first.
pub async fn list_conversation(
    db: &Database,
    contact_id: ContactId,
    identity_id: IdentityId,
) -> Result<Vec<ChatDropMessage>, DropChatError> {
    let rows = db
        .connection()
        .call(move |conn| {
            let mut stmt = conn.prepare(&format!(
                "SELECT {MESSAGE_COLUMNS} FROM chat_drop_messages
                 WHERE contact_id = ?1 AND identity_id = ?2
                 ORDER BY created_on DESC, id DESC"
            ))?;
            stmt.query_map(params![contact_id.0, identity_id.0], MessageRow::from_row)?
                .collect::<Result<Vec<_>, _>>()
        })
        .await
        .map_err(map_tr_err)?;
    decode_rows(rows)
}

/// One window of the conversation plus the conversation's total size.
///
/// The count and the window are read inside one transaction so the total
/// always describes the same snapshot the window was cut from.
pub async fn page_conversation(
    db: &Database,
    contact_id: ContactId,
    identity_id: IdentityId,
    window: PageWindow,
) -> Result<PagingResult<ChatDropMessage>, DropChatError> {
    let (rows, total) = db
        .connection()
        .call(move |conn| {
            let tx = conn.transaction()?;
            let total: i64 = tx.query_row(
                "SELECT COUNT(*) FROM chat_drop_messages
                 WHERE contact_id = ?1 AND identity_id = ?2",
                params![contact_id.0, identity_id.0],
                |r| r.get(0),
            )?;
            let total = usize::try_from(total).unwrap_or_default();

            let rows = if window.len_within(total) == 0 {
                Vec::new()
            } else {
                let mut stmt = tx.prepare(&format!(
                    "SELECT {MESSAGE_COLUMNS} FROM chat_drop_messages
                     WHERE contact_id = ?1 AND identity_id = ?2
                     ORDER BY created_on DESC, id DESC
                     LIMIT ?3 OFFSET ?4"
                ))?;
                stmt.query_map(
                    params![
                        contact_id.0,
                        identity_id.0,
                        sql_count(window.page_size),
                        sql_count(window.offset),
                    ],
                    MessageRow::from_row,
                )?
                .collect::<Result<Vec<_>, _>>()?
            };
            tx.commit()?;
            Ok::<_, rusqlite::Error>((rows, total))
        })
        .await
        .map_err(map_tr_err)?;

    Ok(PagingResult::new(decode_rows(rows)?, total))
}
