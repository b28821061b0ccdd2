use teloxide::prelude::*;

use tnb_core::{domain::ChatId, service::send_reply};

use crate::router::AppState;

pub async fn handle_command(chat_id: i64, text: &str, state: &AppState) -> ResponseResult<()> {
    let own_username = state.bot_username.as_deref();
    let Some(reply) = state.notes.handle_text(text, own_username).await else {
        return Ok(());
    };

    if let Err(e) = send_reply(
        state.messenger.as_ref(),
        ChatId(chat_id),
        &reply,
        state.cfg.telegram_safe_limit,
    )
    .await
    {
        tracing::error!(chat_id, error = %e, "failed to send reply");
    }

    Ok(())
}
