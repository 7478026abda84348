use std::path::Path;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use gamemeta_core::{DefaultRecords, MergePolicy};
use gamemeta_xml::{GameList, merge_lists};

use crate::error::CliError;

pub(crate) struct MergeArgs<'a> {
    pub dest: &'a Path,
    pub dest_base: &'a Path,
    pub source: &'a Path,
    pub source_base: &'a Path,
    pub keep_statistics: bool,
    pub dry_run: bool,
}

/// Fill in the default fields of `dest` entries from matching `source`
/// entries and append source entries missing from `dest`.
pub(crate) fn run_merge(args: MergeArgs<'_>) -> Result<(), CliError> {
    let mut dest = GameList::load(args.dest)?;
    let source = GameList::load(args.source)?;

    let policy = if args.keep_statistics {
        MergePolicy::SkipStatistics
    } else {
        MergePolicy::AllFields
    };
    log::debug!("Merge policy: {:?}", policy);

    let report = merge_lists(
        &mut dest,
        args.dest_base,
        &source,
        args.source_base,
        DefaultRecords::shared(),
        policy,
    )?;

    let prefix = if args.dry_run {
        format!("{} ", "[dry run]".if_supports_color(Stdout, |t| t.yellow()))
    } else {
        String::new()
    };
    log::info!(
        "{}{} merged, {} added, {} unchanged",
        prefix,
        report.merged.if_supports_color(Stdout, |t| t.green()),
        report.added.if_supports_color(Stdout, |t| t.cyan()),
        report.unchanged,
    );

    if args.dry_run || report.merged + report.added == 0 {
        return Ok(());
    }
    dest.save(args.dest)?;
    log::info!("Wrote {}", args.dest.display());
    Ok(())
}
