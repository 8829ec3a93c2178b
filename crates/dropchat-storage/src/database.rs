// SPDX-FileCopyrightText: 2026 Dropchat Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Database connection management with PRAGMA setup, WAL mode, and lifecycle.
//!
//! All statements run on tokio-rusqlite's single background thread, so every
//! `call` is one serialized unit of work against the store. Do NOT create
//! additional Connection instances for writes.

use std::path::Path;
use std::time::Duration;

use dropchat_config::StorageConfig;
use dropchat_core::DropChatError;
use tokio_rusqlite::Connection;
use tracing::{debug, info};

use crate::migrations;

/// Convert a tokio-rusqlite error into [`DropChatError::Persistence`].
pub(crate) fn map_tr_err(e: tokio_rusqlite::Error<rusqlite::Error>) -> DropChatError {
    storage_err(e)
}

/// Wrap any store-side failure as [`DropChatError::Persistence`].
fn storage_err(e: impl std::error::Error + Send + Sync + 'static) -> DropChatError {
    DropChatError::Persistence {
        source: Box::new(e),
    }
}

/// Handle to the message database.
///
/// Owns the only connection; query modules borrow it and go through
/// [`Connection::call`].
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Open (or create) the database file at `path` with WAL enabled.
    pub async fn open(path: &str) -> Result<Self, DropChatError> {
        Self::open_with_config(&StorageConfig {
            database_path: path.to_string(),
            ..StorageConfig::default()
        })
        .await
    }

    /// Open the database described by `config`, creating parent directories,
    /// applying PRAGMAs, and running pending migrations.
    pub async fn open_with_config(config: &StorageConfig) -> Result<Self, DropChatError> {
        if config.database_path.trim().is_empty() {
            return Err(DropChatError::Config(
                "storage.database_path must not be empty".to_string(),
            ));
        }
        let path = Path::new(&config.database_path);
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(storage_err)?;
        }

        let conn = Connection::open(path).await.map_err(storage_err)?;
        let db = Self { conn };
        db.prepare(config.wal_mode, config.busy_timeout_ms).await?;
        info!(path = %config.database_path, wal = config.wal_mode, "message database opened");
        Ok(db)
    }

    /// Open a private in-memory database; used by tests and tooling.
    pub async fn open_in_memory() -> Result<Self, DropChatError> {
        let conn = Connection::open_in_memory().await.map_err(storage_err)?;
        let db = Self { conn };
        db.prepare(false, StorageConfig::default().busy_timeout_ms)
            .await?;
        Ok(db)
    }

    async fn prepare(&self, wal_mode: bool, busy_timeout_ms: u64) -> Result<(), DropChatError> {
        let journal_mode = self
            .conn
            .call(move |conn| -> Result<String, rusqlite::Error> {
                conn.busy_timeout(Duration::from_millis(busy_timeout_ms))?;
                conn.execute_batch("PRAGMA foreign_keys = ON; PRAGMA synchronous = NORMAL;")?;
                let pragma = if wal_mode {
                    "PRAGMA journal_mode = WAL"
                } else {
                    "PRAGMA journal_mode"
                };
                conn.query_row(pragma, [], |row| row.get(0))
            })
            .await
            .map_err(map_tr_err)?;
        debug!(journal_mode = %journal_mode, "pragmas applied");

        let applied = self
            .conn
            .call(|conn| migrations::run_migrations(conn))
            .await
            .map_err(storage_err)?;
        if applied > 0 {
            info!(applied, "migrations applied");
        }
        Ok(())
    }

    /// The underlying connection, for query modules.
    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    /// Round-trip a trivial statement to prove the connection is alive.
    pub async fn ping(&self) -> Result<(), DropChatError> {
        self.conn
            .call(|conn| -> Result<(), rusqlite::Error> {
                conn.execute_batch("SELECT 1;")?;
                Ok(())
            })
            .await
            .map_err(map_tr_err)
    }

    /// Checkpoint the WAL and close the connection.
    pub async fn close(self) -> Result<(), DropChatError> {
        self.conn
            .call(|conn| -> Result<(), rusqlite::Error> {
                conn.query_row("PRAGMA wal_checkpoint(TRUNCATE)", [], |_| Ok(()))?;
                Ok(())
            })
            .await
            .map_err(map_tr_err)?;
        debug!("WAL checkpoint complete");
        self.conn.close().await.map_err(storage_err)
    }
}
