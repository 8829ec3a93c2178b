// SPDX-FileCopyrightText: 2026 Dropchat Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Repository contract for chat drop messages.

use async_trait::async_trait;

use crate::error::DropChatError;
use crate::paging::{PageWindow, PagingResult};
use crate::types::{ChatDropMessage, ContactId, IdentityId, MessageId};

/// Persistence and query operations for chat drop messages.
///
/// Every method is a single atomic unit against the backing store: a write
/// that has returned is visible to every query issued after it. Queries
/// never fail on "no results"; they return an empty collection instead.
///
/// Listing order is `created_on` descending with ties broken by id
/// descending, so a conversation reads newest first and equal timestamps
/// keep reverse insertion order.
#[async_trait]
pub trait ChatDropMessageRepository: Send + Sync {
    /// Insert a new record.
    ///
    /// If `message.id` is [`MessageId::UNASSIGNED`] the store picks an id and
    /// writes it back into `message`; otherwise the caller's id is used and a
    /// collision with an existing record fails with
    /// [`DropChatError::Persistence`].
    async fn persist(&self, message: &mut ChatDropMessage) -> Result<(), DropChatError>;

    /// Replace the stored record with the same id.
    ///
    /// Fails with [`DropChatError::EntityNotFound`] if no such record exists
    /// and with [`DropChatError::InvalidTransition`] if the update would move
    /// a read message back to new.
    async fn update(&self, message: &ChatDropMessage) -> Result<(), DropChatError>;

    /// Remove a record. Fails with [`DropChatError::EntityNotFound`] if absent.
    async fn delete(&self, id: MessageId) -> Result<(), DropChatError>;

    /// Load one record. Fails with [`DropChatError::EntityNotFound`] if absent.
    async fn find_by_id(&self, id: MessageId) -> Result<ChatDropMessage, DropChatError>;

    /// Every stored record in ascending id order.
    async fn find_all(&self) -> Result<Vec<ChatDropMessage>, DropChatError>;

    /// Whether a record structurally equal to `message` is stored.
    ///
    /// An unassigned id matches any stored id, so a freshly received message
    /// can be checked before it is ingested.
    async fn exists(&self, message: &ChatDropMessage) -> Result<bool, DropChatError>;

    /// The whole conversation, newest first.
    async fn find_by_contact(
        &self,
        contact_id: ContactId,
        identity_id: IdentityId,
    ) -> Result<Vec<ChatDropMessage>, DropChatError>;

    /// One window of the conversation, newest first, with the conversation's
    /// total size in `available_range`.
    async fn find_by_contact_paged(
        &self,
        contact_id: ContactId,
        identity_id: IdentityId,
        window: PageWindow,
    ) -> Result<PagingResult<ChatDropMessage>, DropChatError>;

    /// Every unread message of the identity across all contacts, ascending id.
    async fn find_new(&self, identity_id: IdentityId)
        -> Result<Vec<ChatDropMessage>, DropChatError>;

    /// The newest message of each conversation of the identity, most recently
    /// active conversation first. Ties across contacts are ordered by
    /// ascending contact id.
    async fn find_latest(
        &self,
        identity_id: IdentityId,
    ) -> Result<Vec<ChatDropMessage>, DropChatError>;

    /// Move every new message of one conversation to read in a single
    /// statement. Returns how many messages changed state; zero is not an error.
    async fn mark_as_read(
        &self,
        contact_id: ContactId,
        identity_id: IdentityId,
    ) -> Result<usize, DropChatError>;
}
