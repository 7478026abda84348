//! gamemeta CLI
//!
//! Command-line interface for inspecting and editing EmulationStation
//! gamelist metadata.

mod cli_types;
mod commands;
mod error;
mod logging;
mod settings;

use clap::Parser;

use cli_types::{Cli, Commands, ConfigAction};
use commands::resolve_base;
use error::CliError;
use settings::Settings;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = logging::init(cli.quiet, cli.verbose, cli.logfile.as_deref()) {
        eprintln!("{e}");
        std::process::exit(1);
    }

    if let Err(e) = run(cli) {
        log::error!("{e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let root = cli.root.as_deref();

    match cli.command {
        Commands::Fields { folder, json } => commands::fields::run_fields(folder, json),
        Commands::Show {
            gamelist,
            path,
            json,
        } => {
            let base = resolve_base(root, &Settings::load(), &gamelist);
            commands::show::run_show(&gamelist, &base, path.as_deref(), json)
        }
        Commands::Normalize { gamelist, dry_run } => {
            let base = resolve_base(root, &Settings::load(), &gamelist);
            commands::normalize::run_normalize(&gamelist, &base, dry_run)
        }
        Commands::Merge {
            dest,
            source,
            dry_run,
        } => {
            let settings = Settings::load();
            let dest_base = resolve_base(root, &settings, &dest);
            // An explicit or saved root applies to both lists; otherwise each
            // list is relative to its own directory.
            let source_base = if root.is_some() || settings.rom_root.is_some() {
                dest_base.clone()
            } else {
                resolve_base(None, &settings, &source)
            };
            commands::merge::run_merge(commands::merge::MergeArgs {
                dest: &dest,
                dest_base: &dest_base,
                source: &source,
                source_base: &source_base,
                keep_statistics: settings.keep_statistics,
                dry_run,
            })
        }
        Commands::Set {
            gamelist,
            path,
            values,
        } => {
            let base = resolve_base(root, &Settings::load(), &gamelist);
            commands::set::run_set(&gamelist, &base, &path, &values)
        }
        Commands::Config { action } => match action {
            ConfigAction::Show => {
                commands::config::run_config_show();
                Ok(())
            }
            ConfigAction::Path => {
                commands::config::run_config_path();
                Ok(())
            }
            ConfigAction::SetRoot { dir } => commands::config::run_config_set_root(&dir),
            ConfigAction::ClearRoot => commands::config::run_config_clear_root(),
        },
    }
}
