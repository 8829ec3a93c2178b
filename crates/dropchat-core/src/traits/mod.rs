// SPDX-FileCopyrightText: 2026 Dropchat Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Trait definitions implemented by storage backends.

pub mod repository;

pub use repository::ChatDropMessageRepository;
