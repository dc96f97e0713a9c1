//! # Rendering Module
//!
//! Turns `CmdResult` data into terminal text. Every function here returns a
//! `String`; printing is left to the command handlers, which keeps rendering
//! testable without a terminal.
//!
//! ## List Layout
//!
//! One line per book:
//!
//! ```text
//!   3. Dune by Frank Herbert              Available       2 days ago
//! ```
//!
//! - index (right-aligned, canonical position)
//! - title and authors, truncated to fit
//! - status badge (fixed width)
//! - relative update time (fixed width, right-aligned)
//!
//! Layout math is done on display width (`unicode-width`), not byte or char
//! counts, so wide glyphs in titles do not break alignment.

use super::styles::Palette;
use chrono::{DateTime, Utc};
use shelfapp::commands::{CmdMessage, MessageLevel};
use shelfapp::index::DisplayBook;
use shelfapp::model::{BookStatus, Summary};
use timeago::Formatter;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Width used when stdout is not a terminal.
pub const LINE_WIDTH: usize = 100;
pub const INDEX_WIDTH: usize = 6;
pub const STATUS_WIDTH: usize = 11;
pub const TIME_WIDTH: usize = 14;

/// The width to lay out lists in.
pub fn line_width() -> usize {
    console::Term::stdout()
        .size_checked()
        .map(|(_, cols)| cols as usize)
        .filter(|cols| *cols >= 40)
        .unwrap_or(LINE_WIDTH)
}

pub fn render_messages(messages: &[CmdMessage], palette: &Palette) -> String {
    let mut out = String::new();
    for message in messages {
        let style = match message.level {
            MessageLevel::Info => &palette.info,
            MessageLevel::Success => &palette.success,
            MessageLevel::Warning => &palette.warning,
            MessageLevel::Error => &palette.error,
        };
        out.push_str(&style.apply_to(&message.content).to_string());
        out.push('\n');
    }
    out
}

fn status_style(status: BookStatus, palette: &Palette) -> &console::Style {
    match status {
        BookStatus::Available => &palette.available,
        BookStatus::Issued => &palette.issued,
    }
}

pub fn render_book_list(books: &[DisplayBook], palette: &Palette, width: usize) -> String {
    let mut out = String::new();
    let available = width.saturating_sub(INDEX_WIDTH + STATUS_WIDTH + TIME_WIDTH);

    for dp in books {
        let idx = format!("{:>4}. ", dp.index);
        let label = format!("{} by {}", dp.book.title, dp.book.authors);
        let label = truncate_to_width(&label, available);
        let padding = available.saturating_sub(label.width());
        let status = format!(" {:<width$}", dp.book.status.as_str(), width = STATUS_WIDTH - 1);

        out.push_str(&format!(
            "{}{}{}{}{}\n",
            palette.index.apply_to(idx),
            palette.regular.apply_to(label),
            " ".repeat(padding),
            status_style(dp.book.status, palette).apply_to(status),
            palette.muted.apply_to(format_time_ago(dp.book.updated_at)),
        ));
    }
    out
}

pub fn render_summary(summary: &Summary, palette: &Palette) -> String {
    let noun = if summary.total == 1 { "book" } else { "books" };
    format!(
        "{} {} · {} · {}\n",
        palette.title.apply_to(summary.total),
        palette.muted.apply_to(noun),
        palette
            .available
            .apply_to(format!("{} available", summary.available)),
        palette.issued.apply_to(format!("{} issued", summary.issued)),
    )
}

pub fn render_full_books(books: &[DisplayBook], palette: &Palette) -> String {
    let mut out = String::new();
    for (i, dp) in books.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        let book = &dp.book;
        out.push_str(&format!(
            "{} {}\n",
            palette.index.apply_to(format!("{}.", dp.index)),
            palette.title.apply_to(&book.title)
        ));
        let rows = [
            ("Accession", book.accession_number.clone()),
            ("Authors", book.authors.clone()),
            ("Publisher", book.publisher_name.clone()),
            ("Location", book.location_name.clone()),
        ];
        for (label, value) in rows {
            out.push_str(&field_line(label, &palette.regular.apply_to(value).to_string(), palette));
        }
        out.push_str(&field_line(
            "Status",
            &status_style(book.status, palette)
                .apply_to(book.status)
                .to_string(),
            palette,
        ));
        out.push_str(&field_line("Added", &format_timestamp(book.created_at), palette));
        out.push_str(&field_line("Updated", &format_timestamp(book.updated_at), palette));
        out.push_str(&field_line(
            "Id",
            &palette.faint.apply_to(&book.id).to_string(),
            palette,
        ));
    }
    out
}

fn field_line(label: &str, value: &str, palette: &Palette) -> String {
    format!(
        "    {} {}\n",
        palette.muted.apply_to(format!("{:<10}", label)),
        value
    )
}

pub fn render_config(entries: &[(&str, String)], data_dir: &str, palette: &Palette) -> String {
    let mut out = String::new();
    let key_width = entries
        .iter()
        .map(|(k, _)| k.width())
        .max()
        .unwrap_or(0)
        .max("data_dir".width());
    let mut push = |key: &str, value: &str| {
        out.push_str(&format!(
            "{} = {}\n",
            palette.muted.apply_to(format!("{:<key_width$}", key)),
            palette.regular.apply_to(value)
        ));
    };
    push("data_dir", data_dir);
    for (key, value) in entries {
        push(*key, value.as_str());
    }
    out
}

pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}

fn format_timestamp(timestamp: DateTime<Utc>) -> String {
    format!(
        "{} ({})",
        timestamp.format("%Y-%m-%d %H:%M UTC"),
        format_time_ago(timestamp).trim_start()
    )
}

fn format_time_ago(timestamp: DateTime<Utc>) -> String {
    let duration = Utc::now().signed_duration_since(timestamp);
    let formatter = Formatter::new();
    let time_str = formatter.convert(duration.to_std().unwrap_or_default());
    format!("{:>width$}", time_str, width = TIME_WIDTH)
}
