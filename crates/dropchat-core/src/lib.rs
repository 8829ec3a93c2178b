// SPDX-FileCopyrightText: 2026 Dropchat Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for dropchat.
//!
//! Defines the chat drop message model, its payload variants, the paging
//! types shared by every listing query, and the repository trait that
//! storage backends implement.

pub mod error;
pub mod paging;
pub mod payload;
pub mod traits;
pub mod types;

pub use error::{DropChatError, PayloadError};
pub use paging::{PageWindow, PagingResult};
pub use payload::{MessagePayload, ShareMessage, TextMessage};
pub use traits::ChatDropMessageRepository;
pub use types::{ChatDropMessage, ContactId, Direction, IdentityId, MessageId, MessageType, Status};
