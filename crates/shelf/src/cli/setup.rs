use clap::{Args, Parser, Subcommand, ValueEnum};
use shelfapp::commands::theme::ThemeAction;
use shelfapp::model::BookStatus;

#[derive(Parser, Debug)]
#[command(
    name = "shelf",
    bin_name = "shelf",
    version,
    disable_help_subcommand = true,
    after_help = "Books are addressed by their position in `shelf list` (e.g. 3) or by id."
)]
#[command(about = "A local library catalog for the terminal", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Data directory (defaults to $SHELF_DATA, then the OS data dir)
    #[arg(long, global = true, value_name = "DIR", help_heading = "Options")]
    pub data: Option<String>,

    /// Verbose output
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum StatusArg {
    Available,
    Issued,
}

impl From<StatusArg> for BookStatus {
    fn from(arg: StatusArg) -> Self {
        match arg {
            StatusArg::Available => BookStatus::Available,
            StatusArg::Issued => BookStatus::Issued,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum ThemeArg {
    Light,
    Dark,
    Toggle,
}

/// No mode means show the current theme.
pub fn theme_action(mode: Option<ThemeArg>) -> ThemeAction {
    match mode {
        None => ThemeAction::Show,
        Some(ThemeArg::Light) => ThemeAction::Light,
        Some(ThemeArg::Dark) => ThemeAction::Dark,
        Some(ThemeArg::Toggle) => ThemeAction::Toggle,
    }
}

/// Book fields as flags. On `add` all but `--status` are required, which the
/// form enforces; on `edit` each one is optional.
#[derive(Args, Debug, Default, Clone)]
pub struct BookFields {
    /// Accession number
    #[arg(long, short = 'a')]
    pub accession: Option<String>,

    /// Title
    #[arg(long, short = 't')]
    pub title: Option<String>,

    /// Publisher name
    #[arg(long, short = 'p')]
    pub publisher: Option<String>,

    /// Authors (free text, e.g. "Pratchett, Gaiman")
    #[arg(long)]
    pub authors: Option<String>,

    /// Shelf location
    #[arg(long, short = 'l')]
    pub location: Option<String>,

    /// Availability
    #[arg(long, short = 's', value_enum)]
    pub status: Option<StatusArg>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    #[command(flatten)]
    Core(CoreCommands),

    #[command(flatten)]
    Book(BookCommands),

    #[command(flatten)]
    Misc(MiscCommands),
}

#[derive(Subcommand, Debug)]
pub enum CoreCommands {
    /// Add a book to the catalog
    #[command(alias = "n", display_order = 1)]
    Add {
        #[command(flatten)]
        fields: BookFields,
    },

    /// List books
    #[command(alias = "ls", display_order = 2)]
    List {
        /// Search title, authors, publisher and accession number
        #[arg(short = 'q', long)]
        search: Option<String>,

        /// Show only books with this status
        #[arg(short, long, value_enum)]
        status: Option<StatusArg>,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
}

#[derive(Subcommand, Debug)]
pub enum BookCommands {
    /// Show one or more books in full
    #[command(alias = "v", display_order = 10)]
    View {
        /// Positions or ids (e.g. 1 3)
        #[arg(required = true, num_args = 1..)]
        selectors: Vec<String>,

        /// Print JSON
        #[arg(long)]
        json: bool,
    },

    /// Change a book's fields
    #[command(alias = "e", display_order = 11)]
    Edit {
        /// Position or id
        selector: String,

        #[command(flatten)]
        fields: BookFields,
    },

    /// Delete one or more books
    #[command(alias = "rm", display_order = 12)]
    Delete {
        /// Positions or ids (e.g. 1 3 5)
        #[arg(required = true, num_args = 1..)]
        selectors: Vec<String>,

        /// Skip confirmation
        #[arg(long, short = 'y')]
        yes: bool,
    },
}

#[derive(Subcommand, Debug)]
pub enum MiscCommands {
    /// Count books by status
    #[command(display_order = 20)]
    Stats,

    /// Show or change the color theme
    #[command(display_order = 21)]
    Theme {
        #[arg(value_enum)]
        mode: Option<ThemeArg>,
    },

    /// Show the resolved configuration
    #[command(display_order = 22)]
    Config,
}
