// SPDX-FileCopyrightText: 2026 Dropchat Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Bulk read-state transition.

use dropchat_core::{ContactId, DropChatError, IdentityId, Status};
use rusqlite::params;

use crate::database::{Database, map_tr_err};

/// Move every NEW message of one conversation to READ.
///
/// A single UPDATE statement, so readers see either none or all of the
/// conversation transitioned. Returns the number of rows changed.
pub async fn mark_conversation_read(
    db: &Database,
    contact_id: ContactId,
    identity_id: IdentityId,
) -> Result<usize, DropChatError> {
    db.connection()
        .call(move |conn| {
            conn.execute(
                "UPDATE chat_drop_messages SET status = ?3
                 WHERE contact_id = ?1 AND identity_id = ?2 AND status = ?4",
                params![
                    contact_id.0,
                    identity_id.0,
                    Status::Read.to_string(),
                    Status::New.to_string(),
                ],
            )
        })
        .await
        .map_err(map_tr_err)
}

#[cfg(test)]
mod tests {
    use dropchat_core::{ChatDropMessage, Direction, MessagePayload, MessageType};

    use super::*;
    use crate::models::MessageRow;
    use crate::queries::conversations::new_for_identity;
    use crate::queries::messages::insert_message;

    #[tokio::test]
    async fn second_call_is_a_no_op() {
        let db = Database::open_in_memory().await.unwrap();
        let message = ChatDropMessage::new(
            ContactId(1),
            IdentityId(1),
            Direction::Incoming,
            Status::New,
            MessageType::BoxMessage,
            MessagePayload::text("hi"),
            1,
        );
        insert_message(&db, MessageRow::encode(&message).unwrap())
            .await
            .unwrap();

        assert_eq!(
            mark_conversation_read(&db, ContactId(1), IdentityId(1))
                .await
                .unwrap(),
            1
        );
        assert_eq!(
            mark_conversation_read(&db, ContactId(1), IdentityId(1))
                .await
                .unwrap(),
            0
        );
        assert!(new_for_identity(&db, IdentityId(1)).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn unknown_conversation_is_a_no_op() {
        let db = Database::open_in_memory().await.unwrap();
        let changed = mark_conversation_read(&db, ContactId(42), IdentityId(7))
            .await
            .unwrap();
        assert_eq!(changed, 0);
    }
}
