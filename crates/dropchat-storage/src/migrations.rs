// SPDX-FileCopyrightText: 2026 Dropchat Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Embedded database migrations using refinery.
//!
//! SQL files under `migrations/` are compiled into the binary and applied
//! on every database open.

use dropchat_core::DropChatError;

mod embedded {
    use refinery::embed_migrations;
    embed_migrations!("migrations");
}

/// Run all pending migrations, returning how many were applied.
///
/// Refinery tracks applied migrations in its own `refinery_schema_history` table.
pub fn run_migrations(conn: &mut rusqlite::Connection) -> Result<usize, DropChatError> {
    let report = embedded::migrations::runner()
        .run(conn)
        .map_err(|e| DropChatError::Persistence {
            source: Box::new(e),
        })?;
    Ok(report.applied_migrations().len())
}
