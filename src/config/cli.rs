use crate::utils::logger::LogFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "cedricia-client")]
#[command(about = "Page helpers for the CedricIA web application")]
pub struct Cli {
    #[arg(long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Format phone numbers the way the phone inputs do.
    FormatPhone {
        #[arg(required = true)]
        inputs: Vec<String>,
    },

    /// List the free appointment slots for a date.
    Slots {
        #[arg(long, help = "Date to query, e.g. 2024-01-15")]
        date: String,

        #[arg(long, help = "Origin of the web application (overrides the config file)")]
        base_url: Option<String>,

        #[arg(long, help = "TOML configuration file")]
        config: Option<PathBuf>,

        #[arg(long, help = "Fail on lookup errors instead of printing an empty list")]
        strict: bool,
    },

    /// Ask the delete confirmation question on the terminal.
    ConfirmDelete {
        #[arg(long)]
        message: Option<String>,
    },

    /// Render a sample page and let its flash messages expire.
    FlashDemo {
        #[arg(long, help = "TOML configuration file")]
        config: Option<PathBuf>,

        #[arg(long = "message", help = "Flash message text (repeatable)")]
        messages: Vec<String>,
    },
}
