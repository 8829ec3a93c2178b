// SPDX-FileCopyrightText: 2026 Dropchat Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Repository harness backed by a temporary database file.

use std::sync::Arc;

use dropchat_config::StorageConfig;
use dropchat_core::{ChatDropMessage, ChatDropMessageRepository, ContactId, DropChatError, IdentityId};
use dropchat_storage::SqliteChatDropMessageRepository;

/// A repository over a fresh on-disk database plus a small cast of ids.
///
/// The database lives in a temp directory that is removed when the store
/// is dropped.
pub struct TestStore {
    pub repo: Arc<SqliteChatDropMessageRepository>,
    pub identity: IdentityId,
    pub other_identity: IdentityId,
    pub contact_a: ContactId,
    pub contact_b: ContactId,
    _dir: tempfile::TempDir,
}

impl TestStore {
    pub async fn new() -> Result<Self, DropChatError> {
        let dir = tempfile::TempDir::new().map_err(|e| DropChatError::Persistence {
            source: Box::new(e),
        })?;
        let config = StorageConfig {
            database_path: dir.path().join("test.db").to_string_lossy().into_owned(),
            wal_mode: true,
            busy_timeout_ms: 5000,
        };
        let repo = SqliteChatDropMessageRepository::open(&config).await?;
        Ok(Self {
            repo: Arc::new(repo),
            identity: IdentityId(1),
            other_identity: IdentityId(2),
            contact_a: ContactId(10),
            contact_b: ContactId(20),
            _dir: dir,
        })
    }

    /// Persist every message in order, filling in the assigned ids.
    pub async fn persist_all(&self, messages: &mut [ChatDropMessage]) -> Result<(), DropChatError> {
        for message in messages.iter_mut() {
            self.repo.persist(message).await?;
        }
        Ok(())
    }
}
