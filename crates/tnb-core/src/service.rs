//! Application service: owns the note store and runs commands against it.

use std::path::PathBuf;

use tokio::sync::Mutex;

use crate::{
    commands::{self, Command},
    config::Config,
    domain::ChatId,
    formatting::split_text_chunks,
    messaging::port::MessagingPort,
    persistence::{load_snapshot, save_snapshot},
    store::NoteStore,
    Result,
};

/// Single owner of the notes.
///
/// Every command holds the lock for its whole run, including the snapshot
/// write that follows a change, so concurrent chats see serialized updates.
pub struct NotesService {
    store: Mutex<NoteStore>,
    notes_file: Option<PathBuf>,
}

impl NotesService {
    pub fn new(store: NoteStore, notes_file: Option<PathBuf>) -> Self {
        Self {
            store: Mutex::new(store),
            notes_file,
        }
    }

    /// Restore from the configured snapshot file, or start empty.
    pub fn open(cfg: &Config) -> Result<Self> {
        let store = match &cfg.notes_file {
            Some(path) => {
                let store = load_snapshot(path)?;
                tracing::info!(
                    path = %path.display(),
                    categories = store.categories().count(),
                    "restored notes snapshot"
                );
                store
            }
            None => {
                tracing::info!("NOTES_FILE not set; notes are kept in memory only");
                NoteStore::new()
            }
        };
        Ok(Self::new(store, cfg.notes_file.clone()))
    }

    pub async fn execute(&self, command: Command, args: &[String]) -> String {
        let mut store = self.store.lock().await;
        let reply = commands::run(&mut store, command, args);

        if reply.changed {
            if let Some(path) = &self.notes_file {
                if let Err(e) = save_snapshot(path, &store) {
                    tracing::warn!(
                        path = %path.display(),
                        error = %e,
                        "failed to save notes snapshot"
                    );
                }
            }
        }

        reply.text
    }

    /// Parse raw message text and run it.
    ///
    /// `None` for plain text, unknown commands and commands suffixed with
    /// another bot's username.
    pub async fn handle_text(&self, text: &str, bot_username: Option<&str>) -> Option<String> {
        let invocation = commands::parse_command(text)?;
        if !invocation.is_addressed_to(bot_username) {
            tracing::debug!(
                name = %invocation.name,
                addressee = ?invocation.addressee,
                "ignoring command for another bot"
            );
            return None;
        }
        let Some(command) = invocation.command() else {
            tracing::debug!(name = %invocation.name, "ignoring unknown command");
            return None;
        };

        tracing::info!(command = command.name(), args = invocation.args.len(), "command");
        Some(self.execute(command, &invocation.args).await)
    }

    /// Copy of the current store.
    pub async fn snapshot(&self) -> NoteStore {
        self.store.lock().await.clone()
    }
}

/// Send `text` to `chat_id`, split to fit the messenger's message size.
pub async fn send_reply(
    messenger: &dyn MessagingPort,
    chat_id: ChatId,
    text: &str,
    safe_limit: usize,
) -> Result<()> {
    let limit = safe_limit.min(messenger.capabilities().max_message_len);
    for chunk in split_text_chunks(text, limit) {
        messenger.send_text(chat_id, &chunk).await?;
    }
    Ok(())
}
