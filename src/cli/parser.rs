use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for transgo-admin
#[derive(Parser)]
#[command(
    name = "transgo-admin",
    version = env!("CARGO_PKG_VERSION"),
    about = "Transgo back-office CLI: list, bulk-edit and export driver shifts, export the general journal",
    long_about = None
)]
pub struct Cli {
    /// Override the backend base URL (e.g. https://api.transgo.id/api/v1)
    #[arg(global = true, long = "api-url")]
    pub api_url: Option<String>,

    /// Override the bearer token
    #[arg(global = true, long = "token")]
    pub token: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create the configuration file
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        /// Print the current configuration (token masked)
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        /// Edit the configuration file with your preferred editor
        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        /// Specify the editor to use (overrides $EDITOR/$VISUAL).
        #[arg(long = "editor", help = "Specify the editor to use (vim, nano, or custom path)")]
        editor: Option<String>,
    },

    /// Driver shift schedule
    Shifts {
        #[command(subcommand)]
        action: ShiftsCommand,
    },

    /// General journal (jurnal umum)
    Journal {
        #[command(subcommand)]
        action: JournalCommand,
    },
}

#[derive(Subcommand)]
pub enum ShiftsCommand {
    /// List driver shifts for a day
    List {
        /// Day (YYYY-MM-DD or "today")
        #[arg(long, default_value = "today")]
        date: String,

        /// Search text (driver name, notes, ...)
        #[arg(long, short = 'q', default_value = "")]
        q: String,

        #[arg(long, default_value_t = 1)]
        page: u32,

        /// Rows per page (default: page_limit from the config)
        #[arg(long)]
        limit: Option<u32>,
    },

    /// Edit several shifts at once; only rows that really change are saved
    ///
    /// Examples:
    ///   transgo-admin shifts edit --date 2025-10-01 --set 12:shift_type=shift_sore
    ///   transgo-admin shifts edit --date 2025-10-01 --set 12:location=3 --set 14:notes="late start"
    ///   transgo-admin shifts edit --date 2025-10-01 --set 12:start=08:30 --dry-run
    Edit {
        /// Day (YYYY-MM-DD or "today")
        #[arg(long, default_value = "today")]
        date: String,

        /// Change as ID:FIELD=VALUE (fields: shift_type, start, end, location, notes)
        #[arg(long = "set", value_name = "ID:FIELD=VALUE", required = true)]
        set: Vec<String>,

        #[arg(long, short = 'q', default_value = "")]
        q: String,

        #[arg(long, default_value_t = 1)]
        page: u32,

        #[arg(long)]
        limit: Option<u32>,

        /// Show what would be saved without sending anything
        #[arg(long = "dry-run")]
        dry_run: bool,
    },

    /// Search interactively: one query per line on stdin
    Browse {
        /// Day (YYYY-MM-DD or "today")
        #[arg(long, default_value = "today")]
        date: String,

        #[arg(long)]
        limit: Option<u32>,
    },

    /// Export every shift of a day (all pages)
    Export {
        /// Day (YYYY-MM-DD or "today")
        #[arg(long, default_value = "today")]
        date: String,

        #[arg(long, short = 'q', default_value = "")]
        q: String,

        /// Export format
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        /// Output file path (absolute, or relative to export_dir)
        #[arg(long, value_name = "FILE")]
        file: String,

        /// Overwrite output file without confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },
}

#[derive(Subcommand)]
pub enum JournalCommand {
    /// Export the general journal for a period
    Export {
        /// Period: YYYY, YYYY-MM, YYYY-MM-DD or START:END in the same format
        #[arg(long, value_name = "RANGE")]
        range: String,

        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        /// Output file path (absolute, or relative to export_dir)
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, short = 'f')]
        force: bool,
    },
}
