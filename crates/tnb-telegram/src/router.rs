use std::sync::Arc;

use teloxide::{dispatching::Dispatcher, dptree, prelude::*, types::BotCommand};

use tnb_core::{
    commands::Command, config::Config, messaging::port::MessagingPort, service::NotesService,
};

use crate::handlers;
use crate::TelegramMessenger;

#[derive(Clone)]
pub struct AppState {
    pub cfg: Arc<Config>,
    pub notes: Arc<NotesService>,
    pub messenger: Arc<dyn MessagingPort>,
    /// Our own username; commands suffixed with any other bot are ignored.
    pub bot_username: Option<String>,
}

pub async fn run_polling(cfg: Arc<Config>, notes: Arc<NotesService>) -> anyhow::Result<()> {
    let bot = Bot::new(cfg.telegram_bot_token.clone());

    let bot_username = match bot.get_me().await {
        Ok(me) => {
            tracing::info!(username = %me.username(), "notes bot started");
            Some(me.username().to_string())
        }
        Err(e) => {
            tracing::warn!(error = %e, "get_me failed; /cmd@bot commands will be ignored");
            None
        }
    };

    if cfg.register_commands {
        if let Err(e) = bot.set_my_commands(menu_commands()).await {
            tracing::warn!(error = %e, "failed to register bot commands");
        }
    }

    let messenger: Arc<dyn MessagingPort> = Arc::new(TelegramMessenger::new(
        bot.clone(),
        cfg.telegram_message_limit,
    ));

    let state = Arc::new(AppState {
        cfg,
        notes,
        messenger,
        bot_username,
    });

    let handler =
        dptree::entry().branch(Update::filter_message().endpoint(handlers::handle_message));

    Dispatcher::builder(bot, handler)
        .dependencies(dptree::deps![state])
        .build()
        .dispatch()
        .await;

    Ok(())
}

/// Command menu shown by Telegram clients.
fn menu_commands() -> Vec<BotCommand> {
    Command::ALL
        .iter()
        .map(|c| BotCommand::new(c.name(), c.description()))
        .collect()
}
