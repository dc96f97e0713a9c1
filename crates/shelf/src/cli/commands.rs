//! # CLI Layer
//!
//! This module is **one possible UI client** for shelf; it is not the application itself.
//!
//! The CLI layer is the **only** place in the codebase that:
//! - Knows about terminal I/O (stdout, stderr, stdin)
//! - Handles argument parsing
//! - Formats output for human consumption
//!
//! ## Responsibilities
//!
//! 1. **Argument Parsing**: Convert shell arguments into typed commands via clap
//! 2. **Context Setup**: Logging, data directory, configuration, `LibraryApi`
//! 3. **Dispatch**: Route commands to handlers
//! 4. **Output Formatting**: Through `render`, in the palette the user picked
//! 5. **Error Handling**: Errors bubble up as `anyhow` errors to `main`

use super::logging::init_logging;
use super::render::{
    line_width, render_book_list, render_config, render_full_books, render_messages,
    render_summary,
};
use super::setup::{
    theme_action, BookCommands, BookFields, Cli, Commands, CoreCommands, MiscCommands,
};
use super::styles::palette;
use anyhow::{Context, Result};
use clap::Parser;
use shelfapp::commands::theme::ThemeAction;
use shelfapp::commands::CmdResult;
use shelfapp::form::BookForm;
use shelfapp::index::DisplayBook;
use shelfapp::init::{initialize, ShelfContext};
use shelfapp::model::BookStatus;
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::debug;

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose)?;

    let mut ctx = initialize(cli.data.as_ref().map(PathBuf::from));
    debug!(command = ?cli.command, data_dir = %ctx.data_dir.display(), "Dispatching");
    let startup = ctx.api.startup_messages();
    if !startup.is_empty() {
        eprint!("{}", render_messages(&startup, palette(ctx.api.is_dark())));
    }

    match cli.command {
        None => handle_list(&mut ctx, None, None, false),
        Some(Commands::Core(cmd)) => match cmd {
            CoreCommands::Add { fields } => handle_add(&mut ctx, fields),
            CoreCommands::List {
                search,
                status,
                json,
            } => handle_list(&mut ctx, search, status.map(Into::into), json),
        },
        Some(Commands::Book(cmd)) => match cmd {
            BookCommands::View { selectors, json } => handle_view(&ctx, &selectors, json),
            BookCommands::Edit { selector, fields } => handle_edit(&mut ctx, &selector, fields),
            BookCommands::Delete { selectors, yes } => handle_delete(&mut ctx, &selectors, yes),
        },
        Some(Commands::Misc(cmd)) => match cmd {
            MiscCommands::Stats => handle_stats(&ctx),
            MiscCommands::Theme { mode } => handle_theme(&mut ctx, theme_action(mode)),
            MiscCommands::Config => handle_config(&ctx),
        },
    }
}

/// Copies the flags that were given onto the form.
fn apply_fields(form: &mut BookForm, fields: BookFields) {
    if let Some(v) = fields.accession {
        form.accession_number = v;
    }
    if let Some(v) = fields.title {
        form.title = v;
    }
    if let Some(v) = fields.publisher {
        form.publisher_name = v;
    }
    if let Some(v) = fields.authors {
        form.authors = v;
    }
    if let Some(v) = fields.location {
        form.location_name = v;
    }
    if let Some(v) = fields.status {
        form.status = v.into();
    }
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("Failed to encode JSON")?;
    println!("{}", json);
    Ok(())
}

fn print_modification(ctx: &ShelfContext, result: &CmdResult) {
    let pal = palette(ctx.api.is_dark());
    print!("{}", render_messages(&result.messages, pal));
}

fn handle_add(ctx: &mut ShelfContext, fields: BookFields) -> Result<()> {
    let mut form = ctx.api.open_add_form();
    apply_fields(&mut form, fields);
    let result = ctx.api.submit_form(&form)?;
    print_modification(ctx, &result);
    Ok(())
}

fn handle_edit(ctx: &mut ShelfContext, selector: &str, fields: BookFields) -> Result<()> {
    let mut form = ctx.api.open_edit_form(selector)?;
    apply_fields(&mut form, fields);
    let result = ctx.api.submit_form(&form)?;
    print_modification(ctx, &result);
    Ok(())
}

fn handle_list(
    ctx: &mut ShelfContext,
    search: Option<String>,
    status: Option<BookStatus>,
    json: bool,
) -> Result<()> {
    ctx.api.set_search_term(search.unwrap_or_default());
    ctx.api.set_status_filter(status);
    let result = ctx.api.list_books()?;

    if json {
        return print_json(&result.listed_books);
    }

    let pal = palette(ctx.api.is_dark());
    print!("{}", render_book_list(&result.listed_books, pal, line_width()));
    print!("{}", render_messages(&result.messages, pal));
    if let Some(summary) = result.summary.as_ref().filter(|s| s.total > 0) {
        println!();
        print!("{}", render_summary(summary, pal));
    }
    Ok(())
}

fn handle_view(ctx: &ShelfContext, selectors: &[String], json: bool) -> Result<()> {
    let result = ctx.api.view_books(selectors)?;
    if json {
        return print_json(&result.listed_books);
    }
    print!(
        "{}",
        render_full_books(&result.listed_books, palette(ctx.api.is_dark()))
    );
    Ok(())
}

fn confirm_delete(books: &[DisplayBook]) -> Result<bool> {
    println!("This will permanently remove the following books:");
    for dp in books {
        println!("  {}. {}", dp.index, dp.book.title);
    }
    print!("Delete {}? [y/N] ", books.len());
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    Ok(matches!(input.trim(), "y" | "Y" | "yes"))
}

fn handle_delete(ctx: &mut ShelfContext, selectors: &[String], yes: bool) -> Result<()> {
    // Resolve first so a bad selector fails before anything is asked
    let preview = ctx.api.view_books(selectors)?;
    if !yes && !confirm_delete(&preview.listed_books)? {
        println!("Operation cancelled.");
        return Ok(());
    }
    let result = ctx.api.delete_books(selectors)?;
    print_modification(ctx, &result);
    Ok(())
}

fn handle_stats(ctx: &ShelfContext) -> Result<()> {
    let result = ctx.api.stats()?;
    if let Some(summary) = &result.summary {
        print!("{}", render_summary(summary, palette(ctx.api.is_dark())));
    }
    Ok(())
}

fn handle_theme(ctx: &mut ShelfContext, action: ThemeAction) -> Result<()> {
    let result = ctx.api.theme(action)?;
    print_modification(ctx, &result);
    Ok(())
}

fn handle_config(ctx: &ShelfContext) -> Result<()> {
    let data_dir = ctx.data_dir.display().to_string();
    print!(
        "{}",
        render_config(
            &ctx.config.entries(),
            &data_dir,
            palette(ctx.api.is_dark())
        )
    );
    Ok(())
}
