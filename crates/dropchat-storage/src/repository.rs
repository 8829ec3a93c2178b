// SPDX-FileCopyrightText: 2026 Dropchat Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! SQLite implementation of the chat drop message repository.

use async_trait::async_trait;
use tracing::{debug, warn};

use dropchat_config::StorageConfig;
use dropchat_core::{
    ChatDropMessage, ChatDropMessageRepository, ContactId, DropChatError, IdentityId, MessageId,
    PageWindow, PagingResult,
};

use crate::database::Database;
use crate::models::MessageRow;
use crate::queries;

/// SQLite-backed chat drop message repository.
///
/// Owns its [`Database`]; two repositories never share connection state.
/// Share one repository between tasks through an `Arc`.
pub struct SqliteChatDropMessageRepository {
    db: Database,
}

impl SqliteChatDropMessageRepository {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    /// Open the database described by `config` and wrap it.
    pub async fn open(config: &StorageConfig) -> Result<Self, DropChatError> {
        Ok(Self::new(Database::open_with_config(config).await?))
    }

    /// Repository over a private in-memory database.
    pub async fn in_memory() -> Result<Self, DropChatError> {
        Ok(Self::new(Database::open_in_memory().await?))
    }

    /// Verify the store answers queries.
    pub async fn health_check(&self) -> Result<(), DropChatError> {
        self.db.ping().await
    }

    /// Checkpoint and close the underlying database.
    pub async fn close(self) -> Result<(), DropChatError> {
        self.db.close().await
    }
}

#[async_trait]
impl ChatDropMessageRepository for SqliteChatDropMessageRepository {
    async fn persist(&self, message: &mut ChatDropMessage) -> Result<(), DropChatError> {
        let row = MessageRow::encode(message)?;
        let id = queries::messages::insert_message(&self.db, row).await?;
        message.id = id;
        debug!(
            id = %id,
            contact_id = %message.contact_id,
            identity_id = %message.identity_id,
            status = %message.status,
            "chat drop message persisted"
        );
        Ok(())
    }

    async fn update(&self, message: &ChatDropMessage) -> Result<(), DropChatError> {
        let row = MessageRow::encode(message)?;
        match queries::messages::update_message(&self.db, row).await {
            Ok(()) => {
                debug!(id = %message.id, status = %message.status, "chat drop message updated");
                Ok(())
            }
            Err(
                err @ (DropChatError::InvalidTransition { .. }
                | DropChatError::ImmutableField { .. }),
            ) => {
                warn!(id = %message.id, error = %err, "rejected update");
                Err(err)
            }
            Err(err) => Err(err),
        }
    }

    async fn delete(&self, id: MessageId) -> Result<(), DropChatError> {
        queries::messages::delete_message(&self.db, id).await?;
        debug!(id = %id, "chat drop message deleted");
        Ok(())
    }

    async fn find_by_id(&self, id: MessageId) -> Result<ChatDropMessage, DropChatError> {
        queries::messages::get_message(&self.db, id)
            .await?
            .ok_or(DropChatError::EntityNotFound { id })
    }

    async fn find_all(&self) -> Result<Vec<ChatDropMessage>, DropChatError> {
        queries::messages::list_all(&self.db).await
    }

    async fn exists(&self, message: &ChatDropMessage) -> Result<bool, DropChatError> {
        queries::messages::message_exists(&self.db, MessageRow::encode(message)?).await
    }

    async fn find_by_contact(
        &self,
        contact_id: ContactId,
        identity_id: IdentityId,
    ) -> Result<Vec<ChatDropMessage>, DropChatError> {
        queries::messages::list_conversation(&self.db, contact_id, identity_id).await
    }

    async fn find_by_contact_paged(
        &self,
        contact_id: ContactId,
        identity_id: IdentityId,
        window: PageWindow,
    ) -> Result<PagingResult<ChatDropMessage>, DropChatError> {
        let page =
            queries::messages::page_conversation(&self.db, contact_id, identity_id, window)
                .await?;
        debug!(
            contact_id = %contact_id,
            identity_id = %identity_id,
            offset = window.offset,
            page_size = window.page_size,
            returned = page.result.len(),
            available = page.available_range,
            "conversation page loaded"
        );
        Ok(page)
    }

    async fn find_new(
        &self,
        identity_id: IdentityId,
    ) -> Result<Vec<ChatDropMessage>, DropChatError> {
        queries::conversations::new_for_identity(&self.db, identity_id).await
    }

    async fn find_latest(
        &self,
        identity_id: IdentityId,
    ) -> Result<Vec<ChatDropMessage>, DropChatError> {
        queries::conversations::latest_per_contact(&self.db, identity_id).await
    }

    async fn mark_as_read(
        &self,
        contact_id: ContactId,
        identity_id: IdentityId,
    ) -> Result<usize, DropChatError> {
        let changed =
            queries::read_state::mark_conversation_read(&self.db, contact_id, identity_id)
                .await?;
        debug!(
            contact_id = %contact_id,
            identity_id = %identity_id,
            changed,
            "conversation marked as read"
        );
        Ok(changed)
    }
}
