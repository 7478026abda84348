use std::path::Path;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use crate::error::CliError;
use crate::settings::{self, Settings};

/// Show the settings file and the values in effect.
pub(crate) fn run_config_show() {
    let path = settings::settings_path();
    let status = if path.exists() {
        "(exists)".if_supports_color(Stdout, |t| t.green()).to_string()
    } else {
        "(not found)".if_supports_color(Stdout, |t| t.dimmed()).to_string()
    };
    log::info!(
        "{}",
        "gamemeta Configuration".if_supports_color(Stdout, |t| t.bold()),
    );
    log::info!("");
    log::info!(
        "  Settings file: {} {}",
        path.display().if_supports_color(Stdout, |t| t.cyan()),
        status,
    );

    let current = Settings::load();
    let root = match &current.rom_root {
        Some(p) => p.display().to_string(),
        None => "(gamelist directory)".to_string(),
    };
    log::info!("  ROM root:        {}", root);
    log::info!("  Keep statistics: {}", current.keep_statistics);

    if let Some(contents) = settings::load_settings_string() {
        log::info!("");
        for line in contents.lines() {
            log::info!("  {}", line.if_supports_color(Stdout, |t| t.dimmed()));
        }
    }
}

pub(crate) fn run_config_path() {
    log::info!("{}", settings::settings_path().display());
}

/// Save `dir` as the default base directory for Path fields.
pub(crate) fn run_config_set_root(dir: &Path) -> Result<(), CliError> {
    if !dir.is_dir() {
        return Err(CliError::config(format!(
            "{} is not a directory",
            dir.display()
        )));
    }
    let absolute = std::path::absolute(dir)?;
    settings::save_rom_root(Some(&absolute))
        .map_err(|e| CliError::config(format!("Failed to save settings: {e}")))?;
    log::info!(
        "{} ROM root to {}",
        "Set".if_supports_color(Stdout, |t| t.green()),
        absolute.display(),
    );
    Ok(())
}

pub(crate) fn run_config_clear_root() -> Result<(), CliError> {
    settings::save_rom_root(None)
        .map_err(|e| CliError::config(format!("Failed to save settings: {e}")))?;
    log::info!("Cleared ROM root");
    Ok(())
}
