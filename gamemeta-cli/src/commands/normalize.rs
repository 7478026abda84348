use std::path::Path;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use gamemeta_core::DefaultRecords;
use gamemeta_xml::{GameList, normalize};

use crate::error::CliError;

pub(crate) fn run_normalize(gamelist: &Path, base: &Path, dry_run: bool) -> Result<(), CliError> {
    let mut list = GameList::load(gamelist)?;
    log::debug!("Normalizing {} against base {}", gamelist.display(), base.display());

    let changed = normalize(&mut list, base, DefaultRecords::shared())?;
    if changed == 0 {
        log::info!(
            "{} already normalized ({} entries)",
            gamelist.display().if_supports_color(Stdout, |t| t.bold()),
            list.len(),
        );
        return Ok(());
    }

    if dry_run {
        log::info!(
            "{} {} of {} entries would change",
            "[dry run]".if_supports_color(Stdout, |t| t.yellow()),
            changed,
            list.len(),
        );
        return Ok(());
    }

    list.save(gamelist)?;
    log::info!(
        "{} {} of {} entries in {}",
        "Normalized".if_supports_color(Stdout, |t| t.green()),
        changed,
        list.len(),
        gamelist.display(),
    );
    Ok(())
}
