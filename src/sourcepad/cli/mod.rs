//! Terminal front end: one-shot execution and the interactive prompt.
//!
//! This is the only place that reads stdin, writes stdout/stderr or decides
//! the exit code. Everything else goes through [`SourcepadApi`].

mod print;

use colored::Colorize;
use sourcepad::api::SourcepadApi;
use sourcepad::commands::CmdResult;
use sourcepad::config::SourcepadConfig;
use sourcepad::error::Result;
use sourcepad::state::ParserMode;
use sourcepad::store::fs::FileStore;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing::{debug, warn};

pub struct AppContext {
    api: SourcepadApi<FileStore>,
}

impl AppContext {
    pub fn open(data_dir: PathBuf, start_in_bin: bool) -> Result<Self> {
        let config = SourcepadConfig::load(&data_dir)?;
        debug!(data_dir = %data_dir.display(), ?config, "opening store");

        let mut api = SourcepadApi::load(FileStore::with_config(data_dir, &config));
        for warning in api.startup_warnings() {
            eprintln!("{}", warning.yellow());
        }
        if start_in_bin {
            api.set_mode(ParserMode::RecycleBin);
        }
        Ok(Self { api })
    }

    fn execute(&mut self, line: &str) -> Result<CmdResult> {
        let selected_before = self.api.model().selected().cloned();
        let result = self.api.execute(line)?;

        let collection = self.api.model().mode().collection();
        print::print_sources(&result.listed_sources, collection);
        if let Some(selected) = self.api.model().selected() {
            if selected_before.as_ref() != Some(selected) {
                print::print_full_source(selected);
            }
        }
        print::print_messages(&result.messages);
        Ok(result)
    }
}

/// Runs the command given on the command line and returns its error, if any.
pub fn run_once(ctx: &mut AppContext, args: &[String]) -> Result<()> {
    let line = join_args(args);
    ctx.execute(&line).map(|_| ())
}

/// Reads commands from stdin until `exit` or end of input.
pub fn run_interactive(ctx: &mut AppContext) -> Result<()> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print_prompt(ctx.api.model().mode());
        let line = match lines.next() {
            Some(Ok(line)) => line,
            Some(Err(e)) => {
                warn!(error = %e, "could not read input");
                break;
            }
            None => break,
        };
        if line.trim().is_empty() {
            continue;
        }

        match ctx.execute(&line) {
            Ok(result) if result.exit => break,
            Ok(_) => {}
            Err(e) => print::print_error(&e),
        }
    }
    Ok(())
}

fn print_prompt(mode: ParserMode) {
    let prompt = match mode {
        ParserMode::SourceManager => "sources> ".cyan(),
        ParserMode::RecycleBin => "bin> ".red(),
    };
    print!("{}", prompt);
    let _ = io::stdout().flush();
}

/// Rebuilds a command line from shell arguments. The shell has already
/// removed the quotes, so values with spaces are quoted again; a leading
/// `x/` prefix stays outside the quotes so it is still read as a prefix.
fn join_args(args: &[String]) -> String {
    args.iter()
        .map(|arg| {
            if !arg.is_empty() && !arg.contains(char::is_whitespace) {
                return arg.clone();
            }
            match split_prefix(arg) {
                Some((prefix, value)) => format!("{}\"{}\"", prefix, value),
                None => format!("\"{}\"", arg),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn split_prefix(arg: &str) -> Option<(&str, &str)> {
    let mut chars = arg.chars();
    match (chars.next(), chars.next()) {
        (Some(c), Some('/')) if c.is_ascii_alphabetic() => Some(arg.split_at(2)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn plain_words_are_kept() {
        assert_eq!(join_args(&args(&["delete", "1"])), "delete 1");
    }

    #[test]
    fn values_with_spaces_are_quoted_after_prefix() {
        assert_eq!(
            join_args(&args(&["add", "Algorithm Researchers", "d/A study.", "t/research"])),
            r#"add "Algorithm Researchers" d/"A study." t/research"#
        );
    }
}
