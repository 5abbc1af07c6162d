use chrono::{DateTime, Utc};
use colored::Colorize;
use sourcepad::commands::{CmdMessage, MessageLevel};
use sourcepad::error::SourcepadError;
use sourcepad::index::DisplaySource;
use sourcepad::model::Source;
use sourcepad::store::Collection;
use timeago::Formatter;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const LINE_WIDTH: usize = 100;
const TIME_WIDTH: usize = 16;
const PIN_MARKER: &str = "⚲";

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
        }
    }
}

pub(super) fn print_error(error: &SourcepadError) {
    eprintln!("{}", error.to_string().red());
}

pub(super) fn print_sources(sources: &[DisplaySource], collection: Collection) {
    for ds in sources {
        let source = &ds.source;
        let idx_str = format!("{:>3}. ", ds.index.one_based());
        let left_prefix = if source.is_pinned() {
            format!("{} ", PIN_MARKER)
        } else {
            "  ".to_string()
        };

        let right = match (collection, source.deleted_at()) {
            (Collection::Bin, Some(deleted_at)) => format_time_ago(deleted_at),
            _ => String::new(),
        };
        let right_width = if right.is_empty() { 0 } else { TIME_WIDTH };

        let fixed_width = left_prefix.width() + idx_str.width() + right_width;
        let available = LINE_WIDTH.saturating_sub(fixed_width);
        let summary = truncate_to_width(&summary_line(source), available);
        let padding = if right.is_empty() {
            0
        } else {
            available.saturating_sub(summary.width())
        };

        let idx_colored = if source.is_pinned() {
            idx_str.yellow()
        } else if collection == Collection::Bin {
            idx_str.red()
        } else {
            idx_str.normal()
        };

        println!(
            "{}{}{}{}{}",
            left_prefix,
            idx_colored,
            summary,
            " ".repeat(padding),
            format!("{:>width$}", right, width = right_width).dimmed()
        );
    }
}

pub(super) fn print_full_source(source: &Source) {
    println!("{}", source.title().bold());
    println!("--------------------------------");
    if !source.author().is_empty() {
        println!("{} {}", "Author:".dimmed(), source.author());
    }
    if !source.kind().is_empty() {
        println!("{} {}", "Type:".dimmed(), source.kind());
    }
    for field in source.biblio_fields() {
        println!("{}", field);
    }
    if !source.tags().is_empty() {
        let tags: Vec<String> = source.tags().iter().map(|t| t.to_string()).collect();
        println!("{} {}", "Tags:".dimmed(), tags.join(", ").cyan());
    }
    if !source.detail().is_empty() {
        println!();
        println!("{}", source.detail());
    }
}

fn summary_line(source: &Source) -> String {
    let mut line = source.to_string();
    for tag in source.tags() {
        line.push_str(&format!(" #{}", tag.name()));
    }
    line
}

fn format_time_ago(timestamp: DateTime<Utc>) -> String {
    let now = Utc::now();
    let duration = now.signed_duration_since(timestamp);
    let std_duration = duration.to_std().unwrap_or(std::time::Duration::ZERO);

    let formatter = Formatter::new();
    formatter.convert(std_duration)
}

fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    let mut width = 0;
    let mut result = String::new();
    for ch in text.chars() {
        let ch_width = ch.width().unwrap_or(0);
        if width + ch_width + 1 > max_width {
            result.push('…');
            break;
        }
        width += ch_width;
        result.push(ch);
    }
    result
}
