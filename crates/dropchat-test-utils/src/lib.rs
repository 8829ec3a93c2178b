// SPDX-FileCopyrightText: 2026 Dropchat Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test utilities for dropchat integration tests.
//!
//! - [`fixtures`] - message builders with sensible defaults
//! - [`TestStore`] - a repository over a throwaway SQLite file

pub mod fixtures;
pub mod harness;

pub use harness::TestStore;
