use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for dutylog
/// Lays out ELD duty-status logs from trip-planner responses
#[derive(Parser)]
#[command(
    name = "dutylog",
    version = env!("CARGO_PKG_VERSION"),
    about = "Render driver duty-status (ELD) logs from a trip plan as 24-hour timelines",
    long_about = None
)]
pub struct Cli {
    /// Override configuration file path
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write the default configuration file
    Init {
        #[arg(long, short = 'f', help = "Overwrite an existing configuration file")]
        force: bool,
    },

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the effective configuration")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(long = "editor", help = "Editor to use with --edit")]
        editor: Option<String>,
    },

    /// Print each day's log as a text chart
    Show {
        /// Trip plan JSON file ("-" for stdin)
        input: String,

        #[arg(long, value_name = "ID", help = "Only show this day")]
        day: Option<String>,

        #[arg(long = "no-color", help = "Disable ANSI colors")]
        no_color: bool,
    },

    /// Export laid-out logs to a file
    Export {
        /// Trip plan JSON file ("-" for stdin)
        input: String,

        #[arg(long, value_enum, help = "Output format (default from configuration)")]
        format: Option<ExportFormat>,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, value_name = "ID", help = "Only export this day")]
        day: Option<String>,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Show which duty row each status label lands in
    Classify {
        #[arg(required = true)]
        statuses: Vec<String>,
    },
}
