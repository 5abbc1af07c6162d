//! # Commands
//!
//! Every operation is a variant of [`Command`], carrying only the arguments
//! it needs. Commands are plain values: two commands built from equal
//! arguments compare and hash equal, which keeps them usable as map keys and
//! easy to assert on in parser tests.
//!
//! [`Command::execute`] matches exhaustively and forwards to the `run`
//! function of the command's module. Each `run` either fully succeeds or
//! returns an error with both collections exactly as it found them; all
//! validation happens before the first mutation.
//!
//! Which commands a mode accepts is decided by [`CommandWord::available_in`],
//! a total function over the command words.

use crate::error::{Result, SourcepadError};
use crate::history::CommandHistory;
use crate::index::{DisplayIndex, DisplaySource};
use crate::model::Source;
use crate::state::{Model, ParserMode};
use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::fmt;

pub mod add;
pub mod custom_order;
pub mod delete;
pub mod edit;
pub mod empty_bin;
pub mod help;
pub mod history;
pub mod list;
pub mod mode;
pub mod pinning;
pub mod restore;
pub mod select;

pub use edit::SourceChanges;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Command {
    Add(Source),
    Delete(DisplayIndex),
    Edit {
        index: DisplayIndex,
        changes: SourceChanges,
    },
    Pin(DisplayIndex),
    Unpin(DisplayIndex),
    CustomOrder {
        from: DisplayIndex,
        to: DisplayIndex,
    },
    Select(DisplayIndex),
    Find(Vec<String>),
    List,
    Restore(DisplayIndex),
    EmptyBin,
    SwitchMode,
    History,
    Help,
    Exit,
}

impl Command {
    pub fn word(&self) -> CommandWord {
        match self {
            Command::Add(_) => CommandWord::Add,
            Command::Delete(_) => CommandWord::Delete,
            Command::Edit { .. } => CommandWord::Edit,
            Command::Pin(_) => CommandWord::Pin,
            Command::Unpin(_) => CommandWord::Unpin,
            Command::CustomOrder { .. } => CommandWord::CustomOrder,
            Command::Select(_) => CommandWord::Select,
            Command::Find(_) => CommandWord::Find,
            Command::List => CommandWord::List,
            Command::Restore(_) => CommandWord::Restore,
            Command::EmptyBin => CommandWord::EmptyBin,
            Command::SwitchMode => CommandWord::Switch,
            Command::History => CommandWord::History,
            Command::Help => CommandWord::Help,
            Command::Exit => CommandWord::Exit,
        }
    }

    pub fn execute(&self, model: &mut Model, history: &CommandHistory) -> Result<CmdResult> {
        let word = self.word();
        if !word.available_in(model.mode()) {
            return Err(SourcepadError::UnavailableInMode {
                command: word.to_string(),
                mode: model.mode(),
            });
        }

        match self {
            Command::Add(source) => add::run(model, source),
            Command::Delete(index) => delete::run(model, *index),
            Command::Edit { index, changes } => edit::run(model, *index, changes),
            Command::Pin(index) => pinning::pin(model, *index),
            Command::Unpin(index) => pinning::unpin(model, *index),
            Command::CustomOrder { from, to } => custom_order::run(model, *from, *to),
            Command::Select(index) => select::run(model, *index),
            Command::Find(keywords) => list::find(model, keywords),
            Command::List => list::run(model),
            Command::Restore(index) => restore::run(model, *index),
            Command::EmptyBin => empty_bin::run(model),
            Command::SwitchMode => mode::switch(model),
            Command::History => history::run(history),
            Command::Help => help::help(model.mode()),
            Command::Exit => help::exit(),
        }
    }
}

/// The first word of a command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandWord {
    Add,
    Delete,
    Edit,
    Pin,
    Unpin,
    CustomOrder,
    Select,
    Find,
    List,
    Restore,
    EmptyBin,
    Switch,
    History,
    Help,
    Exit,
}

static WORDS: Lazy<HashMap<&'static str, CommandWord>> = Lazy::new(|| {
    CommandWord::ALL
        .iter()
        .map(|word| (word.as_str(), *word))
        .collect()
});

impl CommandWord {
    pub const ALL: [CommandWord; 15] = [
        CommandWord::Add,
        CommandWord::Delete,
        CommandWord::Edit,
        CommandWord::Pin,
        CommandWord::Unpin,
        CommandWord::CustomOrder,
        CommandWord::Select,
        CommandWord::Find,
        CommandWord::List,
        CommandWord::Restore,
        CommandWord::EmptyBin,
        CommandWord::Switch,
        CommandWord::History,
        CommandWord::Help,
        CommandWord::Exit,
    ];

    /// Case-insensitive lookup.
    pub fn lookup(word: &str) -> Option<CommandWord> {
        WORDS.get(word.to_lowercase().as_str()).copied()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CommandWord::Add => "add",
            CommandWord::Delete => "delete",
            CommandWord::Edit => "edit",
            CommandWord::Pin => "pin",
            CommandWord::Unpin => "unpin",
            CommandWord::CustomOrder => "customorder",
            CommandWord::Select => "select",
            CommandWord::Find => "find",
            CommandWord::List => "list",
            CommandWord::Restore => "restore",
            CommandWord::EmptyBin => "emptybin",
            CommandWord::Switch => "switch",
            CommandWord::History => "history",
            CommandWord::Help => "help",
            CommandWord::Exit => "exit",
        }
    }

    pub fn available_in(&self, mode: ParserMode) -> bool {
        match self {
            CommandWord::Add
            | CommandWord::Delete
            | CommandWord::Edit
            | CommandWord::Pin
            | CommandWord::Unpin
            | CommandWord::CustomOrder
            | CommandWord::Select => mode == ParserMode::SourceManager,
            CommandWord::Restore | CommandWord::EmptyBin => mode == ParserMode::RecycleBin,
            CommandWord::Find
            | CommandWord::List
            | CommandWord::Switch
            | CommandWord::History
            | CommandWord::Help
            | CommandWord::Exit => true,
        }
    }

    /// Usage text shown on malformed input and by `help`.
    pub fn usage(&self) -> &'static str {
        match self {
            CommandWord::Add => concat!(
                "add: Adds a source to the source manager.\n",
                "Parameters: TITLE [a/AUTHOR] [y/TYPE] [d/DETAIL] [t/TAG]... [b/FIELD:BODY]...\n",
                "Example: add \"Algorithm Researchers\" y/article ",
                "d/\"A research about researchers on algorithms.\" t/research"
            ),
            CommandWord::Delete => concat!(
                "delete: Moves the source at the displayed index to the recycle bin.\n",
                "Parameters: INDEX (must be a positive integer)\n",
                "Example: delete 1"
            ),
            CommandWord::Edit => concat!(
                "edit: Edits the source at the displayed index. ",
                "Omitted fields keep their value; t/ and b/ replace the whole set.\n",
                "Parameters: INDEX [n/TITLE] [a/AUTHOR] [y/TYPE] [d/DETAIL] [t/TAG]... [b/FIELD:BODY]...\n",
                "Example: edit 1 a/Knuth t/algorithms"
            ),
            CommandWord::Pin => concat!(
                "pin: Pins the source at the displayed index to the top of the list.\n",
                "Parameters: INDEX (must be a positive integer)\n",
                "Example: pin 2"
            ),
            CommandWord::Unpin => concat!(
                "unpin: Unpins the source at the displayed index.\n",
                "Parameters: INDEX (must be a positive integer)\n",
                "Example: unpin 1"
            ),
            CommandWord::CustomOrder => concat!(
                "customorder: Moves the source at FROM to position TO.\n",
                "Parameters: FROM TO (both positive integers)\n",
                "Example: customorder 1 3"
            ),
            CommandWord::Select => concat!(
                "select: Selects the source at the displayed index for viewing.\n",
                "Parameters: INDEX (must be a positive integer)\n",
                "Example: select 1"
            ),
            CommandWord::Find => concat!(
                "find: Lists sources matching any of the keywords (case-insensitive).\n",
                "Parameters: KEYWORD [MORE_KEYWORDS]...\n",
                "Example: find algorithms graphs"
            ),
            CommandWord::List => "list: Lists every source in the current collection.",
            CommandWord::Restore => concat!(
                "restore: Moves the source at the displayed index back to the source manager.\n",
                "Parameters: INDEX (must be a positive integer)\n",
                "Example: restore 1"
            ),
            CommandWord::EmptyBin => "emptybin: Permanently deletes every source in the recycle bin.",
            CommandWord::Switch => "switch: Switches between the source manager and the recycle bin.",
            CommandWord::History => "history: Lists the commands entered so far, most recent first.",
            CommandWord::Help => "help: Shows the commands available in the current mode.",
            CommandWord::Exit => "exit: Exits the program.",
        }
    }
}

impl fmt::Display for CommandWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_sources: Vec<Source>,
    pub listed_sources: Vec<DisplaySource>,
    pub messages: Vec<CmdMessage>,
    /// Set by `exit`; the caller decides how to shut down.
    pub exit: bool,
}

impl CmdResult {
    pub fn with_message(mut self, message: CmdMessage) -> Self {
        self.messages.push(message);
        self
    }

    pub fn with_affected_sources(mut self, sources: Vec<Source>) -> Self {
        self.affected_sources = sources;
        self
    }

    pub fn with_listed_sources(mut self, sources: Vec<DisplaySource>) -> Self {
        self.listed_sources = sources;
        self
    }

    /// All message contents joined by newlines.
    pub fn feedback(&self) -> String {
        self.messages
            .iter()
            .map(|m| m.content.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn has_warnings(&self) -> bool {
        self.messages
            .iter()
            .any(|m| m.level == MessageLevel::Warning)
    }
}
