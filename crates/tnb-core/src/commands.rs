//! Bot command contract: command parsing plus the reply text of each command.
//!
//! Nothing here knows about Telegram; the adapter hands over the raw message
//! text and sends back whatever reply comes out.

use crate::store::{NoteStore, FALLBACK_CATEGORY};

pub const HELP_TEXT: &str = "Привет! Я бот для заметок. Вы можете добавлять, удалять и просматривать заметки.\n\n\
Команды:\n\
/add <категория> <текст заметки> - добавить заметку\n\
/delete <категория> <номер заметки> - удалить заметку\n\
/view <категория> - просмотреть заметки в категории\n\
/view_all - просмотреть все заметки";

const ADD_USAGE: &str = "Использование: /add <категория> <текст заметки>";
const DELETE_USAGE: &str = "Использование: /delete <категория> <номер заметки>";
const VIEW_USAGE: &str = "Использование: /view <категория>";
const NOT_A_NUMBER: &str = "Номер заметки должен быть числом.";
const NOTE_NOT_FOUND: &str = "Заметка не найдена. Проверьте категорию и номер заметки.";
const NO_NOTES: &str = "Заметок пока нет.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Start,
    Add,
    Delete,
    View,
    ViewAll,
}

impl Command {
    /// Every command, in menu order.
    pub const ALL: [Command; 5] = [
        Command::Start,
        Command::Add,
        Command::Delete,
        Command::View,
        Command::ViewAll,
    ];

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "start" | "help" => Some(Self::Start),
            "add" => Some(Self::Add),
            "delete" => Some(Self::Delete),
            "view" => Some(Self::View),
            "view_all" => Some(Self::ViewAll),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Add => "add",
            Self::Delete => "delete",
            Self::View => "view",
            Self::ViewAll => "view_all",
        }
    }

    /// Short description shown in the Telegram command menu.
    pub fn description(self) -> &'static str {
        match self {
            Self::Start => "Начало работы с ботом",
            Self::Add => "Добавь заметку",
            Self::Delete => "Удали заметку",
            Self::View => "Покажи заметки в данной категории",
            Self::ViewAll => "Покажи все, что есть!",
        }
    }

    /// Whether running this command can change the store.
    pub fn mutates(self) -> bool {
        matches!(self, Self::Add | Self::Delete)
    }
}

/// A command name and its whitespace-separated argument tokens.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Invocation {
    pub name: String,
    /// Bot username from a `/cmd@botname` suffix.
    pub addressee: Option<String>,
    pub args: Vec<String>,
}

impl Invocation {
    pub fn command(&self) -> Option<Command> {
        Command::from_name(&self.name)
    }

    /// Whether a bot called `bot_username` should act on this command.
    ///
    /// Commands without a suffix are for everyone. A suffixed command needs a
    /// known username that matches it, ignoring case and a leading `@`.
    pub fn is_addressed_to(&self, bot_username: Option<&str>) -> bool {
        let Some(addressee) = &self.addressee else {
            return true;
        };
        bot_username
            .map(|own| own.trim_start_matches('@').eq_ignore_ascii_case(addressee))
            .unwrap_or(false)
    }
}

/// Split `/cmd@botname arg1 arg2` into a lowercase name, the optional bot
/// suffix and argument tokens.
///
/// Returns `None` for text that is not a command.
pub fn parse_command(text: &str) -> Option<Invocation> {
    let text = text.trim_start();
    let rest = text.strip_prefix('/')?;

    let mut tokens = rest.split_whitespace();
    let head = tokens.next().unwrap_or("");
    let (name, addressee) = match head.split_once('@') {
        Some((name, bot)) => (name, Some(bot.to_string())),
        None => (head, None),
    };
    let name = name.to_lowercase();
    if name.is_empty() {
        return None;
    }

    Some(Invocation {
        name,
        addressee,
        args: tokens.map(str::to_string).collect(),
    })
}

/// Reply text plus whether the store was modified.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Reply {
    pub text: String,
    pub changed: bool,
}

impl Reply {
    fn unchanged(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            changed: false,
        }
    }

    fn changed(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            changed: true,
        }
    }
}

pub fn run(store: &mut NoteStore, command: Command, args: &[String]) -> Reply {
    match command {
        Command::Start => Reply::unchanged(HELP_TEXT),
        Command::Add => add_note(store, args),
        Command::Delete => delete_note(store, args),
        Command::View => Reply::unchanged(view_notes(store, args)),
        Command::ViewAll => Reply::unchanged(view_all_notes(store)),
    }
}

/// `/add <category> <text...>`; a lone token lands in the fallback category.
pub fn add_note(store: &mut NoteStore, args: &[String]) -> Reply {
    let (category, text) = match args {
        [] => return Reply::unchanged(ADD_USAGE),
        [only] => (FALLBACK_CATEGORY, only.clone()),
        [category, rest @ ..] => (category.as_str(), rest.join(" ")),
    };

    store.add(category, text);
    Reply::changed(format!("Заметка добавлена в категорию '{category}'."))
}

/// `/delete <category> <1-based index>`.
pub fn delete_note(store: &mut NoteStore, args: &[String]) -> Reply {
    let [category, index] = args else {
        return Reply::unchanged(DELETE_USAGE);
    };

    let Ok(number) = index.parse::<i64>() else {
        return Reply::unchanged(NOT_A_NUMBER);
    };

    let removed = number
        .checked_sub(1)
        .and_then(|i| usize::try_from(i).ok())
        .and_then(|i| store.delete(category, i));

    match removed {
        Some(note) => Reply::changed(format!(
            "Заметка удалена из категории '{category}': {note}"
        )),
        None => Reply::unchanged(NOTE_NOT_FOUND),
    }
}

/// `/view <category>`.
pub fn view_notes(store: &NoteStore, args: &[String]) -> String {
    let [category] = args else {
        return VIEW_USAGE.to_string();
    };

    match store.notes(category) {
        Some(notes) if !notes.is_empty() => {
            let mut message = format!("Заметки в категории '{category}':\n");
            push_enumerated(&mut message, notes);
            message
        }
        _ => format!("В категории '{category}' пока нет заметок."),
    }
}

/// `/view_all`: every category in creation order.
pub fn view_all_notes(store: &NoteStore) -> String {
    if store.is_empty() {
        return NO_NOTES.to_string();
    }

    let mut message = String::from("Все заметки:\n");
    for category in store.categories() {
        message.push_str(&format!("\nКатегория '{}':\n", category.name));
        push_enumerated(&mut message, &category.notes);
    }
    message
}

fn push_enumerated(out: &mut String, notes: &[String]) {
    for (i, note) in notes.iter().enumerate() {
        out.push_str(&format!("{}. {note}\n", i + 1));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn args(xs: &[&str]) -> Vec<String> {
        xs.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn parses_command_with_bot_suffix_and_args() {
        let inv = parse_command("/View@notes_bot  work   extra").unwrap();
        assert_eq!(inv.name, "view");
        assert_eq!(inv.addressee.as_deref(), Some("notes_bot"));
        assert_eq!(inv.args, ["work", "extra"]);
        assert_eq!(inv.command(), Some(Command::View));
    }

    #[test]
    fn suffixed_commands_only_match_the_named_bot() {
        let own = parse_command("/add@Notes_Bot work x").unwrap();
        assert!(own.is_addressed_to(Some("notes_bot")));
        assert!(own.is_addressed_to(Some("@NOTES_BOT")));

        let foreign = parse_command("/add@some_other_bot work x").unwrap();
        assert!(!foreign.is_addressed_to(Some("notes_bot")));
        assert!(!foreign.is_addressed_to(None));

        let bare = parse_command("/add work x").unwrap();
        assert_eq!(bare.addressee, None);
        assert!(bare.is_addressed_to(Some("notes_bot")));
        assert!(bare.is_addressed_to(None));
    }

    #[test]
    fn plain_text_and_bare_slash_are_not_commands() {
        assert!(parse_command("hello").is_none());
        assert!(parse_command("/").is_none());
        assert!(parse_command("/@bot").is_none());
        assert_eq!(parse_command("/unknown").unwrap().command(), None);
        assert_eq!(parse_command("/help").unwrap().command(), Some(Command::Start));
    }

    #[test]
    fn add_then_view_lists_note_first() {
        let mut store = NoteStore::new();
        add_note(&mut store, &args(&["ideas", "buy", "milk"]));
        let out = view_notes(&store, &args(&["ideas"]));
        assert!(out.lines().any(|l| l == "1. buy milk"));
    }

    #[test]
    fn single_token_add_appends_to_fallback_category() {
        let mut store = NoteStore::new();
        let r = add_note(&mut store, &args(&["first"]));
        assert!(r.changed);
        assert_eq!(r.text, "Заметка добавлена в категорию 'Без категории'.");
        add_note(&mut store, &args(&["second"]));

        assert_eq!(store.notes(FALLBACK_CATEGORY).unwrap(), ["first", "second"]);
        assert_eq!(
            view_all_notes(&store),
            "Все заметки:\n\nКатегория 'Без категории':\n1. first\n2. second\n"
        );
    }

    #[test]
    fn add_without_args_replies_usage_and_keeps_store() {
        let mut store = NoteStore::new();
        let r = add_note(&mut store, &[]);
        assert!(!r.changed);
        assert_eq!(r.text, ADD_USAGE);
        assert!(store.is_empty());
    }

    #[test]
    fn delete_out_of_range_keeps_list() {
        let mut store = NoteStore::new();
        for n in ["a", "b", "c"] {
            add_note(&mut store, &args(&["c", n]));
        }

        for bad in ["4", "0", "-1", "99999999999999999"] {
            let r = delete_note(&mut store, &args(&["c", bad]));
            assert_eq!(r, Reply::unchanged(NOTE_NOT_FOUND));
        }
        assert_eq!(store.notes("c").unwrap(), ["a", "b", "c"]);
    }

    #[test]
    fn delete_non_numeric_index_replies_number_message() {
        let mut store = NoteStore::new();
        add_note(&mut store, &args(&["c", "a"]));
        let before = store.clone();

        let r = delete_note(&mut store, &args(&["c", "abc"]));
        assert_eq!(r, Reply::unchanged(NOT_A_NUMBER));
        assert_eq!(store, before);
    }

    #[test]
    fn delete_requires_exactly_two_args() {
        let mut store = NoteStore::new();
        add_note(&mut store, &args(&["c", "a"]));

        assert_eq!(delete_note(&mut store, &args(&["c"])).text, DELETE_USAGE);
        assert_eq!(
            delete_note(&mut store, &args(&["c", "1", "x"])).text,
            DELETE_USAGE
        );
        assert_eq!(store.notes("c").unwrap(), ["a"]);
    }

    #[test]
    fn delete_shifts_display_indices() {
        let mut store = NoteStore::new();
        for n in ["a", "b", "c"] {
            add_note(&mut store, &args(&["c", n]));
        }

        let r = delete_note(&mut store, &args(&["c", "2"]));
        assert!(r.changed);
        assert_eq!(r.text, "Заметка удалена из категории 'c': b");
        assert_eq!(
            view_notes(&store, &args(&["c"])),
            "Заметки в категории 'c':\n1. a\n2. c\n"
        );
    }

    #[test]
    fn view_of_never_created_category_reports_no_notes() {
        let store = NoteStore::new();
        assert_eq!(
            view_notes(&store, &args(&["ghost"])),
            "В категории 'ghost' пока нет заметок."
        );
        assert!(store.is_empty());

        let mut store = NoteStore::new();
        add_note(&mut store, &args(&["work", "x"]));
        let r = run(&mut store, Command::View, &args(&["Work"]));
        assert_eq!(r.text, "В категории 'Work' пока нет заметок.");
        assert!(!r.changed);
        assert!(store.notes("Work").is_none());
    }

    #[test]
    fn view_requires_exactly_one_arg() {
        let store = NoteStore::new();
        assert_eq!(view_notes(&store, &[]), VIEW_USAGE);
        assert_eq!(view_notes(&store, &args(&["a", "b"])), VIEW_USAGE);
    }

    #[test]
    fn view_all_empty_then_lists_sections_in_creation_order() {
        let mut store = NoteStore::new();
        assert_eq!(view_all_notes(&store), NO_NOTES);

        add_note(&mut store, &args(&["work", "report"]));
        add_note(&mut store, &args(&["home", "dishes"]));
        add_note(&mut store, &args(&["work", "email"]));
        delete_note(&mut store, &args(&["home", "1"]));

        assert_eq!(
            view_all_notes(&store),
            "Все заметки:\n\nКатегория 'work':\n1. report\n2. email\n\nКатегория 'home':\n"
        );
    }

    #[test]
    fn add_view_delete_view_scenario() {
        let mut store = NoteStore::new();

        let r = run(&mut store, Command::Add, &args(&["work", "finish", "report"]));
        assert_eq!(r.text, "Заметка добавлена в категорию 'work'.");

        let r = run(&mut store, Command::View, &args(&["work"]));
        assert_eq!(r.text, "Заметки в категории 'work':\n1. finish report\n");

        let r = run(&mut store, Command::Delete, &args(&["work", "1"]));
        assert!(r.text.contains("finish report"));

        let r = run(&mut store, Command::View, &args(&["work"]));
        assert_eq!(r.text, "В категории 'work' пока нет заметок.");
    }

    #[test]
    fn start_lists_all_commands() {
        let mut store = NoteStore::new();
        let r = run(&mut store, Command::Start, &[]);
        for cmd in ["/add", "/delete", "/view", "/view_all"] {
            assert!(r.text.contains(cmd));
        }
        assert!(!r.changed);
    }
}
