// SPDX-FileCopyrightText: 2026 Dropchat Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Query modules for chat drop messages.
//!
//! - [`messages`]: CRUD and conversation listing, including windowed pages.
//! - [`conversations`]: cross-contact aggregation for one identity.
//! - [`read_state`]: bulk `NEW -> READ` transition.

pub mod conversations;
pub mod messages;
pub mod read_state;

/// Convert a window bound to an SQLite integer, saturating on overflow.
pub(crate) fn sql_count(n: usize) -> i64 {
    i64::try_from(n).unwrap_or(i64::MAX)
}
