//! Telegram update handlers.
//!
//! Handlers only translate between Telegram messages and the notes service;
//! all note logic lives in `tnb-core`.

use std::sync::Arc;

use teloxide::{prelude::*, types::Message};

use crate::router::AppState;

mod commands;

pub async fn handle_message(msg: Message, state: Arc<AppState>) -> ResponseResult<()> {
    if let Some(text) = msg.text() {
        if text.starts_with('/') {
            return commands::handle_command(msg.chat.id.0, text, &state).await;
        }
    }

    // Anything that is not a command gets no reply.
    tracing::debug!(chat_id = msg.chat.id.0, "ignoring non-command message");
    Ok(())
}
