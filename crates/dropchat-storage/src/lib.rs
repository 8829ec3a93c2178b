// SPDX-FileCopyrightText: 2026 Dropchat Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! SQLite persistence layer for dropchat.
//!
//! Provides WAL-mode SQLite storage with embedded migrations, a single-writer
//! concurrency model via `tokio-rusqlite`, and the SQLite implementation of
//! [`ChatDropMessageRepository`](dropchat_core::ChatDropMessageRepository).

pub mod database;
pub mod migrations;
pub mod models;
pub mod queries;
pub mod repository;

pub use database::Database;
pub use repository::SqliteChatDropMessageRepository;
