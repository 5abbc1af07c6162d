//! # Sourcepad Architecture
//!
//! Sourcepad is a **personal reference manager** for bibliographic sources.
//! It is a library that happens to have a CLI client: everything from the
//! command grammar down to persistence lives here and never touches a
//! terminal.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI (main.rs, args.rs, cli/)                               │
//! │  - Reads lines, prints results, sets the exit code          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │  raw command text
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API (api.rs)                                               │
//! │  - Owns the model, the history and the store                │
//! │  - Parses, executes, records history, saves dirty lists     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Parser (parser/) and Commands (commands/*.rs)              │
//! │  - Mode-aware grammar producing a Command value             │
//! │  - One run function per command over the Model              │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage (store/)                                           │
//! │  - SourceStorage trait, one save/load per collection        │
//! │  - FileStore (JSON on disk), InMemoryStore (tests)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Two collections, two modes
//!
//! The active library and the recycle bin are both [`source_list::SourceList`]s.
//! Deleting moves a source into the bin, restoring moves it back, and only
//! `emptybin` destroys anything. The [`state::ParserMode`] decides which
//! commands are accepted and which collection indices refer to.
//!
//! ## Indices
//!
//! Users address sources by their 1-based position in the *displayed* view:
//! the collection after its keyword filter, pinned sources first, then by
//! rank. See [`index`].
//!
//! ## Testing Strategy
//!
//! - **Commands**: unit tests next to each command, on a [`state::Model`]
//! - **API**: dispatch and save decisions, against `InMemoryStore`
//! - **Store**: JSON format and files, with `tempfile`
//! - **CLI**: end-to-end in `tests/`, with `assert_cmd`

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod history;
pub mod index;
pub mod model;
pub mod parser;
pub mod source_list;
pub mod state;
pub mod store;
pub mod tags;

#[cfg(test)]
mod test_utils;
