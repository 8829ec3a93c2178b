// SPDX-FileCopyrightText: 2026 Dropchat Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Text and JSON rendering of query results.

use dropchat_core::{ChatDropMessage, Direction, DropChatError, PageWindow, PagingResult};
use serde::Serialize;

/// One line per message: id, time, direction, status, conversation, type, preview.
pub fn format_message(message: &ChatDropMessage) -> String {
    let when = message
        .created_at()
        .map(|at| at.format("%Y-%m-%d %H:%M:%S").to_string())
        .unwrap_or_else(|| message.created_on.to_string());
    let arrow = match message.direction {
        Direction::Incoming => "<-",
        Direction::Outgoing => "->",
    };
    let marker = if message.status.is_unread() { "*" } else { " " };
    format!(
        "#{:<6} {when} {arrow} {marker} contact={} identity={} {} {}",
        message.id,
        message.contact_id,
        message.identity_id,
        message.message_type,
        message.payload.preview(),
    )
}

pub fn format_messages(messages: &[ChatDropMessage]) -> String {
    if messages.is_empty() {
        return "no messages".to_string();
    }
    messages
        .iter()
        .map(format_message)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Messages of one page followed by a position footer.
pub fn format_page(page: &PagingResult<ChatDropMessage>, window: PageWindow) -> String {
    let footer = if page.is_empty() {
        format!(
            "({} messages, nothing at offset {})",
            page.available_range, window.offset
        )
    } else {
        let more = if page.has_more(window) {
            format!(", next: --offset {}", window.next().offset)
        } else {
            String::new()
        };
        format!(
            "({}-{} of {}, page {}/{}{more})",
            window.offset + 1,
            window.offset + page.result.len(),
            page.available_range,
            window.offset / window.page_size + 1,
            page.page_count(window.page_size),
        )
    };
    if page.is_empty() {
        footer
    } else {
        format!("{}\n{footer}", format_messages(&page.result))
    }
}

pub fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String, DropChatError> {
    serde_json::to_string_pretty(value).map_err(|e| DropChatError::Internal(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use dropchat_core::{ContactId, IdentityId, MessageId, MessagePayload, MessageType, Status};

    fn sample() -> ChatDropMessage {
        let mut message = ChatDropMessage::new(
            ContactId(10),
            IdentityId(1),
            Direction::Outgoing,
            Status::New,
            MessageType::BoxMessage,
            MessagePayload::text("hello there"),
            0,
        );
        message.id = MessageId(42);
        message
    }

    #[test]
    fn message_line_carries_every_column() {
        let line = format_message(&sample());
        assert!(line.starts_with("#42"));
        assert!(line.contains("1970-01-01 00:00:00"));
        assert!(line.contains("-> *"));
        assert!(line.contains("contact=10 identity=1"));
        assert!(line.contains("BOX_MESSAGE"));
        assert!(line.ends_with("hello there"));
    }

    #[test]
    fn empty_listing_says_so() {
        assert_eq!(format_messages(&[]), "no messages");
    }

    #[test]
    fn page_footer_points_at_next_window() {
        let page = PagingResult::new(vec![sample(), sample()], 5);
        let rendered = format_page(&page, PageWindow::new(0, 2));
        assert!(rendered.ends_with("(1-2 of 5, page 1/3, next: --offset 2)"));
    }

    #[test]
    fn last_page_has_no_next_hint() {
        let page = PagingResult::new(vec![sample()], 5);
        let rendered = format_page(&page, PageWindow::new(4, 2));
        assert!(rendered.ends_with("(5-5 of 5, page 3/3)"));
    }

    #[test]
    fn page_past_end_reports_total() {
        let page = PagingResult::<ChatDropMessage>::empty(3);
        assert_eq!(
            format_page(&page, PageWindow::new(10, 5)),
            "(3 messages, nothing at offset 10)"
        );
    }

    #[test]
    fn json_uses_wire_names() {
        let json = to_json(&sample()).unwrap();
        assert!(json.contains("\"status\": \"NEW\""));
        assert!(json.contains("\"kind\": \"text\""));
    }
}
