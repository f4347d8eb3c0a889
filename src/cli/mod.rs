pub mod commands;
pub mod output;

use clap::{Parser, Subcommand};

use crate::core::services::merge_service::DEFAULT_OUTPUT;

/// Compare, cherry-pick, and merge RuneLite configuration profiles.
#[derive(Parser, Debug)]
#[command(name = "rlmerge", version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Display a profile's settings grouped by plugin
    Show {
        /// Profile to display
        file: String,

        /// Keep only settings whose key or value contains this text
        #[arg(long, value_name = "TEXT")]
        filter: Option<String>,

        /// Emit machine-readable JSON instead of formatted text
        #[arg(long)]
        json: bool,
    },

    /// Compare two profiles setting by setting
    Diff {
        /// First profile
        file1: String,
        /// Second profile
        file2: String,

        /// Keep only settings whose key or value contains this text
        #[arg(long, value_name = "TEXT")]
        filter: Option<String>,

        /// Emit machine-readable JSON instead of formatted text
        #[arg(long)]
        json: bool,
    },

    /// Merge selected settings from two profiles into one file
    Merge {
        /// First profile
        file1: String,
        /// Second profile; its selected values win on conflict
        file2: String,

        /// Select a single key from profile 1 (repeatable)
        #[arg(long, value_name = "KEY")]
        select1: Vec<String>,

        /// Select a single key from profile 2 (repeatable)
        #[arg(long, value_name = "KEY")]
        select2: Vec<String>,

        /// Select a whole plugin group from profile 1 (repeatable)
        #[arg(long, value_name = "PLUGIN")]
        plugin1: Vec<String>,

        /// Select a whole plugin group from profile 2 (repeatable)
        #[arg(long, value_name = "PLUGIN")]
        plugin2: Vec<String>,

        /// Select every setting from profile 1
        #[arg(long)]
        all1: bool,

        /// Select every setting from profile 2
        #[arg(long)]
        all2: bool,

        /// Output file
        #[arg(short, long, default_value = DEFAULT_OUTPUT)]
        output: String,
    },
}
