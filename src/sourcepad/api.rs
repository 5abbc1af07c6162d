//! # API Facade
//!
//! [`SourcepadApi`] is the composition root: it owns the [`Model`], the
//! [`CommandHistory`] and the storage backend, and is the single entry point
//! for every UI. The CLI hands it raw command lines; it never prints.
//!
//! ## Dispatch
//!
//! [`SourcepadApi::execute`] runs one command to completion:
//!
//! 1. Clears both collections' dirty flags.
//! 2. Parses the text with the grammar of the current [`ParserMode`].
//! 3. Executes the [`Command`] against the model and the history.
//! 4. Appends the raw text to the history, whether or not steps 2-3 failed.
//! 5. Saves each collection whose dirty flag is set, and only those.
//!
//! The dirty flags are raised by the collections themselves on every
//! mutation, so a command that touches both (`delete`, `restore`) saves both
//! without the dispatcher knowing anything about it.
//!
//! ## Persistence failures
//!
//! A failed save is returned as [`SourcepadError::Storage`] even when the
//! command itself succeeded. The two collections are saved independently;
//! if one save fails the other is still attempted.
//!
//! ## Generic Over SourceStorage
//!
//! - Production: `SourcepadApi<FileStore>`
//! - Testing: `SourcepadApi<InMemoryStore>`
//!
//! [`Command`]: crate::commands::Command
//! [`ParserMode`]: crate::state::ParserMode

use crate::commands::CmdResult;
use crate::error::{Result, SourcepadError};
use crate::history::CommandHistory;
use crate::parser;
use crate::source_list::SourceList;
use crate::state::{Model, ParserMode};
use crate::store::{Collection, SourceStorage};
use tracing::{debug, warn};

pub struct SourcepadApi<S: SourceStorage> {
    store: S,
    model: Model,
    history: CommandHistory,
    startup_warnings: Vec<String>,
}

impl<S: SourceStorage> SourcepadApi<S> {
    /// Loads both collections from `store`.
    ///
    /// Each collection loads on its own. One that fails to load starts empty
    /// and the failure is kept in [`Self::startup_warnings`].
    pub fn load(store: S) -> Self {
        let mut startup_warnings = Vec::new();
        let library = load_collection(&store, Collection::Library, &mut startup_warnings);
        let bin = load_collection(&store, Collection::Bin, &mut startup_warnings);

        Self {
            store,
            model: Model::new(library, bin),
            history: CommandHistory::new(),
            startup_warnings,
        }
    }

    pub fn execute(&mut self, input: &str) -> Result<CmdResult> {
        self.model.mark_clean();

        let mode = self.model.mode();
        let outcome = parser::parse(input, mode)
            .and_then(|command| command.execute(&mut self.model, &self.history));

        self.history.append(input);

        let saved = self.persist();
        debug!(
            %mode,
            input,
            ok = outcome.is_ok(),
            saved = saved.is_ok(),
            "dispatched command"
        );

        let result = outcome?;
        saved?;
        Ok(result)
    }

    fn persist(&mut self) -> Result<()> {
        let mut first_error: Option<SourcepadError> = None;

        for collection in [Collection::Library, Collection::Bin] {
            let list = self.model.list(collection);
            if !list.is_dirty() {
                continue;
            }
            if let Err(err) = self.store.save(collection, list) {
                warn!(%collection, error = %err, "failed to save");
                first_error.get_or_insert(err);
            }
        }

        match first_error {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    /// Switches mode without going through a command, for callers that
    /// start in the recycle bin.
    pub fn set_mode(&mut self, mode: ParserMode) {
        self.model.set_mode(mode);
    }

    pub fn model(&self) -> &Model {
        &self.model
    }

    pub fn history(&self) -> &CommandHistory {
        &self.history
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Load failures that reset a collection to empty.
    pub fn startup_warnings(&self) -> &[String] {
        &self.startup_warnings
    }
}

fn load_collection<S: SourceStorage>(
    store: &S,
    collection: Collection,
    warnings: &mut Vec<String>,
) -> SourceList {
    match store.load(collection) {
        Ok(Some(list)) => list,
        Ok(None) => SourceList::new(),
        Err(err) => {
            warn!(%collection, error = %err, "could not load, starting empty");
            warnings.push(format!(
                "Could not load the {}, starting with an empty one: {}",
                collection, err
            ));
            SourceList::new()
        }
    }
}
