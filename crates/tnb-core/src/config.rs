use std::{
    env, fs,
    path::{Path, PathBuf},
};

use crate::{errors::Error, Result};

/// Typed configuration, read from the environment (plus an optional `.env`).
#[derive(Clone, Debug)]
pub struct Config {
    pub telegram_bot_token: String,

    /// JSON snapshot of the notes; `None` keeps notes in memory only.
    pub notes_file: Option<PathBuf>,

    // Telegram limits
    pub telegram_message_limit: usize,
    pub telegram_safe_limit: usize,

    /// Publish the command menu via `setMyCommands` at startup.
    pub register_commands: bool,
}

impl Config {
    pub fn load() -> Result<Self> {
        load_dotenv_if_present(Path::new(".env"));
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup (the process env in `load`).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let telegram_bot_token = lookup("TELEGRAM_BOT_TOKEN")
            .and_then(non_empty)
            .or_else(|| lookup("BOT_TOKEN").and_then(non_empty))
            .ok_or_else(|| {
                Error::Config("TELEGRAM_BOT_TOKEN environment variable is required".to_string())
            })?;

        let notes_file = lookup("NOTES_FILE").and_then(non_empty).map(PathBuf::from);

        let telegram_message_limit = parse_usize(lookup("TELEGRAM_MESSAGE_LIMIT")).unwrap_or(4096);
        let telegram_safe_limit = parse_usize(lookup("TELEGRAM_SAFE_LIMIT"))
            .unwrap_or(4000)
            .min(telegram_message_limit)
            .max(200);

        let register_commands = parse_bool(lookup("REGISTER_COMMANDS")).unwrap_or(true);

        Ok(Self {
            telegram_bot_token,
            notes_file,
            telegram_message_limit,
            telegram_safe_limit,
            register_commands,
        })
    }
}

fn load_dotenv_if_present(path: &Path) {
    let Ok(contents) = fs::read_to_string(path) else {
        return;
    };

    for (key, val) in parse_dotenv(&contents) {
        if env::var_os(&key).is_some() {
            continue; // do not override existing env
        }
        env::set_var(key, val);
    }
}

fn parse_dotenv(contents: &str) -> Vec<(String, String)> {
    let mut out = Vec::new();
    for raw in contents.lines() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let Some((k, v)) = line.split_once('=') else {
            continue;
        };

        let key = k.trim().trim_start_matches("export ").trim();
        if key.is_empty() {
            continue;
        }

        let mut val = v.trim();
        // Strip optional surrounding quotes.
        if val.len() >= 2
            && ((val.starts_with('"') && val.ends_with('"'))
                || (val.starts_with('\'') && val.ends_with('\'')))
        {
            val = &val[1..val.len() - 1];
        }

        out.push((key.to_string(), val.to_string()));
    }
    out
}

fn parse_bool(v: Option<String>) -> Option<bool> {
    v.map(|s| {
        matches!(
            s.trim().to_lowercase().as_str(),
            "1" | "true" | "yes" | "on"
        )
    })
}

fn parse_usize(v: Option<String>) -> Option<usize> {
    v.and_then(|s| s.trim().parse::<usize>().ok())
}

fn non_empty(s: String) -> Option<String> {
    if s.trim().is_empty() {
        None
    } else {
        Some(s)
    }
}
