//! Operations over a whole gamelist.

use std::path::Path;

use gamemeta_core::paths::{make_relative_path, resolve_path};
use gamemeta_core::{DefaultRecords, MergePolicy, MetadataNode, MetadataTree, Record};

use crate::gamelist::PATH_KEY;
use crate::{GameList, GamelistError};

/// Outcome of [`merge_lists`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MergeReport {
    /// Destination entries that gained values from the source
    pub merged: usize,
    /// Source entries with no destination match, appended
    pub added: usize,
    /// Matched entries the source had nothing new for
    pub unchanged: usize,
}

/// Replace the schema keys of `node` with the sparse serialization of
/// `record`. Keys outside the schema keep their position.
pub fn store_record(node: &mut MetadataNode, record: &Record, base: &Path, defaults: &DefaultRecords) {
    for descriptor in record.kind().fields() {
        node.remove(descriptor.key());
    }
    record.serialize_into(node, base, defaults);
}

/// Deserialize and re-serialize every entry, dropping default-valued keys and
/// canonicalising encodings. Returns how many entries changed.
pub fn normalize(
    list: &mut GameList,
    base: &Path,
    defaults: &DefaultRecords,
) -> Result<usize, GamelistError> {
    let mut changed = 0;
    for node in list.entries_mut() {
        let record = Record::from_tree(&*node, base, defaults)?;
        let before = node.clone();
        store_record(node, &record, base, defaults);
        if *node != before {
            log::debug!("Normalized '{}'", record.name());
            changed += 1;
        }
    }
    Ok(changed)
}

/// Merge `source` into `dest`, matching entries by `path`.
///
/// Matched entries are filled in (values already set in `dest` win).
/// Source entries with no match are appended with their paths rebased onto
/// `dest_base`.
pub fn merge_lists(
    dest: &mut GameList,
    dest_base: &Path,
    source: &GameList,
    source_base: &Path,
    defaults: &DefaultRecords,
    policy: MergePolicy,
) -> Result<MergeReport, GamelistError> {
    let mut report = MergeReport::default();

    for source_node in source.entries() {
        let source_record = Record::from_tree(source_node, source_base, defaults)?;
        let absolute = source_node
            .value(PATH_KEY)
            .map(|p| resolve_path(p, source_base));

        let position = absolute
            .as_deref()
            .and_then(|p| dest.position_by_path(p, dest_base));
        match position {
            Some(index) => {
                let node = &mut dest.entries_mut()[index];
                let mut record = Record::from_tree(&*node, dest_base, defaults)?;
                let before = record.clone();
                record.merge_with(&source_record, defaults, policy);
                if record.same_values(&before) {
                    report.unchanged += 1;
                } else {
                    log::debug!("Merged '{}'", record.name());
                    store_record(node, &record, dest_base, defaults);
                    report.merged += 1;
                }
            }
            None => {
                let mut node = source_node.clone();
                if let Some(path) = absolute {
                    node.insert(PATH_KEY, make_relative_path(&path, dest_base));
                }
                store_record(&mut node, &source_record, dest_base, defaults);
                log::debug!("Added '{}'", source_record.name());
                dest.push(node);
                report.added += 1;
            }
        }
    }

    Ok(report)
}

#[cfg(test)]
#[path = "tests/catalog_tests.rs"]
mod tests;
