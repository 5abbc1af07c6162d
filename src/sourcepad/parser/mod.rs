//! Turns a line of user input into a [`Command`].
//!
//! The first word picks the command; the grammar it is parsed with depends on
//! the current [`ParserMode`]. A word that only exists in the other mode is
//! rejected before its arguments are looked at.

pub mod arguments;
pub mod tokenizer;

use crate::commands::{Command, CommandWord, SourceChanges};
use crate::error::{Result, SourcepadError};
use crate::index::DisplayIndex;
use crate::model::{BiblioField, Source, SourceFields};
use crate::state::ParserMode;
use crate::tags::Tag;
use arguments::{ArgumentMap, Prefix};
use std::collections::BTreeSet;
use tokenizer::{tokenize, Token};

const HELP_HINT: &str = "Type 'help' to see the commands available in this mode.";

pub fn parse(input: &str, mode: ParserMode) -> Result<Command> {
    let tokens = tokenize(input)
        .map_err(|e| SourcepadError::parse(e.to_string(), HELP_HINT))?;

    let Some((first, rest)) = tokens.split_first() else {
        return Err(SourcepadError::parse("No command entered.", HELP_HINT));
    };

    let word = (!first.quoted)
        .then(|| CommandWord::lookup(&first.text))
        .flatten()
        .ok_or_else(|| {
            SourcepadError::parse(format!("Unknown command: '{}'", first.text), HELP_HINT)
        })?;

    if !word.available_in(mode) {
        return Err(SourcepadError::UnavailableInMode {
            command: word.to_string(),
            mode,
        });
    }

    match word {
        CommandWord::Add => parse_add(rest),
        CommandWord::Delete => single_index(word, rest).map(Command::Delete),
        CommandWord::Edit => parse_edit(rest),
        CommandWord::Pin => single_index(word, rest).map(Command::Pin),
        CommandWord::Unpin => single_index(word, rest).map(Command::Unpin),
        CommandWord::CustomOrder => parse_custom_order(rest),
        CommandWord::Select => single_index(word, rest).map(Command::Select),
        CommandWord::Find => parse_find(rest),
        CommandWord::Restore => single_index(word, rest).map(Command::Restore),
        CommandWord::List => Ok(Command::List),
        CommandWord::EmptyBin => Ok(Command::EmptyBin),
        CommandWord::Switch => Ok(Command::SwitchMode),
        CommandWord::History => Ok(Command::History),
        CommandWord::Help => Ok(Command::Help),
        CommandWord::Exit => Ok(Command::Exit),
    }
}

fn parse_add(tokens: &[Token]) -> Result<Command> {
    let args = ArgumentMap::build(tokens, &Prefix::SOURCE_FIELDS);
    let usage = CommandWord::Add.usage();

    let title = match (args.preamble().is_empty(), args.value(Prefix::Title)) {
        (false, None) => args.preamble_text(),
        (true, Some(title)) => title.to_string(),
        (true, None) => return Err(SourcepadError::parse("A title is required.", usage)),
        (false, Some(_)) => {
            return Err(SourcepadError::parse(
                "Give the title either before the other fields or with n/, not both.",
                usage,
            ))
        }
    };

    let fields = SourceFields {
        title,
        author: args.value(Prefix::Author).unwrap_or_default().to_string(),
        kind: args.value(Prefix::Type).unwrap_or_default().to_string(),
        detail: args.value(Prefix::Detail).unwrap_or_default().to_string(),
        tags: parse_tags(args.all_values(Prefix::Tag))?,
        biblio_fields: parse_biblio_fields(args.all_values(Prefix::Field))?,
    };

    Ok(Command::Add(Source::new(fields)?))
}

fn parse_edit(tokens: &[Token]) -> Result<Command> {
    let args = ArgumentMap::build(tokens, &Prefix::SOURCE_FIELDS);
    let word = CommandWord::Edit;
    let index = index_from(word, args.preamble())?;

    let changes = SourceChanges {
        title: args.value(Prefix::Title).map(str::to_string),
        author: args.value(Prefix::Author).map(str::to_string),
        kind: args.value(Prefix::Type).map(str::to_string),
        detail: args.value(Prefix::Detail).map(str::to_string),
        tags: if args.has(Prefix::Tag) {
            Some(parse_tags(args.all_values(Prefix::Tag))?)
        } else {
            None
        },
        biblio_fields: if args.has(Prefix::Field) {
            Some(parse_biblio_fields(args.all_values(Prefix::Field))?)
        } else {
            None
        },
    };

    Ok(Command::Edit { index, changes })
}

fn parse_custom_order(tokens: &[Token]) -> Result<Command> {
    let word = CommandWord::CustomOrder;
    match tokens {
        [from, to] => Ok(Command::CustomOrder {
            from: parse_index(word, &from.text)?,
            to: parse_index(word, &to.text)?,
        }),
        _ => Err(SourcepadError::parse(
            "Expected exactly two indices.",
            word.usage(),
        )),
    }
}

fn parse_find(tokens: &[Token]) -> Result<Command> {
    let keywords: Vec<String> = tokens
        .iter()
        .map(|t| t.text.trim().to_string())
        .filter(|k| !k.is_empty())
        .collect();
    if keywords.is_empty() {
        return Err(SourcepadError::parse(
            "At least one keyword is required.",
            CommandWord::Find.usage(),
        ));
    }
    Ok(Command::Find(keywords))
}

fn single_index(word: CommandWord, tokens: &[Token]) -> Result<DisplayIndex> {
    let words: Vec<String> = tokens.iter().map(|t| t.text.clone()).collect();
    index_from(word, &words)
}

fn index_from(word: CommandWord, preamble: &[String]) -> Result<DisplayIndex> {
    match preamble {
        [single] => parse_index(word, single),
        [] => Err(SourcepadError::parse("An index is required.", word.usage())),
        _ => Err(SourcepadError::parse(
            format!("Expected a single index, got '{}'", preamble.join(" ")),
            word.usage(),
        )),
    }
}

fn parse_index(word: CommandWord, text: &str) -> Result<DisplayIndex> {
    text.parse()
        .map_err(|message: String| SourcepadError::parse(message, word.usage()))
}

/// A single empty `t/` yields an empty set, which is how `edit` clears tags.
fn parse_tags(values: &[String]) -> Result<BTreeSet<Tag>> {
    if let [only] = values {
        if only.trim().is_empty() {
            return Ok(BTreeSet::new());
        }
    }
    values.iter().map(|v| v.parse::<Tag>()).collect()
}

fn parse_biblio_fields(values: &[String]) -> Result<Vec<BiblioField>> {
    if let [only] = values {
        if only.trim().is_empty() {
            return Ok(Vec::new());
        }
    }
    values.iter().map(|v| v.parse::<BiblioField>()).collect()
}
