//! One module per output format

mod html;
mod json;
mod markdown;
mod text;

pub use html::HtmlExporter;
pub use json::JsonExporter;
pub use markdown::MarkdownExporter;
pub use text::TextExporter;

use transcript_core::{ConversationMessage, MessageContent};

/// User and assistant messages that carry a body, in order
fn turns<'a>(
    messages: &'a [ConversationMessage],
) -> impl Iterator<Item = (&'a ConversationMessage, &'a MessageContent)> {
    messages
        .iter()
        .filter(|m| m.kind.is_turn())
        .filter_map(|m| m.content().map(|content| (m, content)))
}
