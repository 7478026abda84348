//! CLI type definitions: command enums and argument structs.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "gamemeta")]
#[command(about = "Inspect, normalize and merge EmulationStation gamelists", long_about = None)]
pub(crate) struct Cli {
    /// ROM directory that media paths are relative to (defaults to the
    /// configured root, else the gamelist's directory)
    #[arg(short, long, global = true)]
    pub root: Option<PathBuf>,

    /// Only show warnings and errors (suppress normal output)
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Enable verbose/debug logging (timestamps + debug-level messages)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Write log output to a file (ANSI codes stripped)
    #[arg(long, global = true)]
    pub logfile: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// List the metadata fields of a record kind
    Fields {
        /// Show folder fields instead of game fields
        #[arg(long)]
        folder: bool,

        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the metadata stored in a gamelist
    Show {
        /// Path to gamelist.xml
        gamelist: PathBuf,

        /// Only show the entry with this path (e.g. ./Tetris.gb)
        #[arg(short, long)]
        path: Option<String>,

        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Rewrite a gamelist without default values and with canonical encodings
    Normalize {
        /// Path to gamelist.xml
        gamelist: PathBuf,

        /// Report what would change without writing
        #[arg(short = 'n', long)]
        dry_run: bool,
    },

    /// Fill in missing metadata of one gamelist from another
    Merge {
        /// Gamelist to update
        dest: PathBuf,

        /// Gamelist to take values from
        source: PathBuf,

        /// Report what would change without writing
        #[arg(short = 'n', long)]
        dry_run: bool,
    },

    /// Set metadata fields of one entry
    Set {
        /// Path to gamelist.xml
        gamelist: PathBuf,

        /// Path of the entry to edit (e.g. ./Tetris.gb)
        #[arg(short, long)]
        path: String,

        /// Assignments of the form key=value
        #[arg(required = true)]
        values: Vec<String>,
    },

    /// Manage settings
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Show the settings file
    Show,

    /// Print the settings file path
    Path,

    /// Save the default ROM root directory
    SetRoot {
        /// Directory media paths are relative to
        dir: PathBuf,
    },

    /// Remove the saved ROM root directory
    ClearRoot,
}
