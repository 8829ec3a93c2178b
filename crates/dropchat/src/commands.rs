// SPDX-FileCopyrightText: 2026 Dropchat Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Subcommand execution.

use dropchat_config::{DropChatConfig, PagingConfig};
use dropchat_core::{
    ChatDropMessageRepository, ContactId, DropChatError, IdentityId, MessageId, PageWindow,
};
use serde_json::json;

use crate::Commands;
use crate::output;

/// Execute `command` and print its result to stdout.
pub(crate) async fn run<R>(
    repo: &R,
    config: &DropChatConfig,
    command: Commands,
    json: bool,
) -> Result<(), DropChatError>
where
    R: ChatDropMessageRepository + ?Sized,
{
    let rendered = execute(repo, &config.paging, command, json).await?;
    println!("{rendered}");
    Ok(())
}

/// Execute `command` and render its result.
pub(crate) async fn execute<R>(
    repo: &R,
    paging: &PagingConfig,
    command: Commands,
    json: bool,
) -> Result<String, DropChatError>
where
    R: ChatDropMessageRepository + ?Sized,
{
    match command {
        Commands::History {
            contact,
            identity,
            offset,
            page_size,
        } => {
            let window = PageWindow::new(offset, paging.resolve_page_size(page_size));
            let page = repo
                .find_by_contact_paged(ContactId(contact), IdentityId(identity), window)
                .await?;
            if json {
                output::to_json(&page)
            } else {
                Ok(output::format_page(&page, window))
            }
        }
        Commands::Latest { identity } => {
            let latest = repo.find_latest(IdentityId(identity)).await?;
            if json {
                output::to_json(&latest)
            } else {
                Ok(output::format_messages(&latest))
            }
        }
        Commands::Unread { identity } => {
            let unread = repo.find_new(IdentityId(identity)).await?;
            if json {
                output::to_json(&unread)
            } else {
                Ok(output::format_messages(&unread))
            }
        }
        Commands::MarkRead { contact, identity } => {
            let changed = repo
                .mark_as_read(ContactId(contact), IdentityId(identity))
                .await?;
            if json {
                output::to_json(&json!({ "marked_read": changed }))
            } else {
                Ok(format!("marked {changed} message(s) as read"))
            }
        }
        Commands::Show { id } => {
            let message = repo.find_by_id(MessageId(id)).await?;
            if json {
                output::to_json(&message)
            } else {
                Ok(output::format_message(&message))
            }
        }
        Commands::Delete { id } => {
            repo.delete(MessageId(id)).await?;
            tracing::info!(id, "message deleted");
            if json {
                output::to_json(&json!({ "deleted": id }))
            } else {
                Ok(format!("deleted message {id}"))
            }
        }
    }
}
