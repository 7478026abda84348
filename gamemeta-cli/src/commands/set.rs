use std::path::Path;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use gamemeta_core::paths::resolve_path;
use gamemeta_core::{DefaultRecords, FieldType, MetadataError, Record};
use gamemeta_xml::GameList;
use gamemeta_xml::catalog::store_record;

use crate::error::CliError;

/// Split `key=value`. The value may itself contain `=`.
fn parse_assignment(s: &str) -> Result<(&str, &str), CliError> {
    match s.split_once('=') {
        Some((key, value)) if !key.is_empty() => Ok((key, value)),
        _ => Err(CliError::other(format!(
            "Expected key=value, got '{s}'"
        ))),
    }
}

/// Edit fields of the entry at `path`. Values must match the field grammar;
/// nothing is written if any assignment fails.
pub(crate) fn run_set(
    gamelist: &Path,
    base: &Path,
    path: &str,
    values: &[String],
) -> Result<(), CliError> {
    let mut list = GameList::load(gamelist)?;
    let defaults = DefaultRecords::shared();

    let index = list
        .position_by_path(path, base)
        .ok_or_else(|| CliError::not_found(format!("No entry with path '{path}'")))?;
    let node = &mut list.entries_mut()[index];
    let mut record = Record::from_tree(&*node, base, defaults)?;

    for assignment in values {
        let (key, value) = parse_assignment(assignment)?;
        let descriptor = record
            .kind()
            .descriptor(key)
            .ok_or_else(|| MetadataError::unknown_field(record.kind(), key))?;
        // Paths are given relative to the base like in the file itself
        let value = if descriptor.field_type() == FieldType::Path {
            resolve_path(value, base)
        } else {
            value.to_string()
        };
        record.set_value_from_string(key, &value)?;
        log::debug!("{} = {}", key, value);
    }

    if !record.is_dirty() {
        return Ok(());
    }
    store_record(node, &record, base, defaults);
    list.save(gamelist)?;
    log::info!(
        "{} {} field(s) of '{}'",
        "Updated".if_supports_color(Stdout, |t| t.green()),
        values.len(),
        record.name(),
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use gamemeta_core::MetadataTree;

    #[test]
    fn test_parse_assignment() {
        assert_eq!(parse_assignment("genre=RPG").unwrap(), ("genre", "RPG"));
        assert_eq!(parse_assignment("desc=a=b").unwrap(), ("desc", "a=b"));
        assert_eq!(parse_assignment("region=").unwrap(), ("region", ""));
        assert!(parse_assignment("genre").is_err());
        assert!(parse_assignment("=RPG").is_err());
    }

    #[test]
    fn test_run_set_writes_entry() {
        let dir = tempfile::tempdir().unwrap();
        let gamelist = dir.path().join("gamelist.xml");
        std::fs::write(
            &gamelist,
            "<gameList>\n  <game>\n    <path>./tetris.gb</path>\n    <name>Tetris</name>\n  </game>\n</gameList>\n",
        )
        .unwrap();

        run_set(
            &gamelist,
            dir.path(),
            "./tetris.gb",
            &[
                "genre=Puzzle".to_string(),
                "players=1-2".to_string(),
                "image=./images/tetris.png".to_string(),
            ],
        )
        .unwrap();

        let xml = std::fs::read_to_string(&gamelist).unwrap();
        assert!(xml.contains("<genre>Puzzle</genre>"));
        assert!(xml.contains("<players>2-1</players>"));
        assert!(xml.contains("<image>./images/tetris.png</image>"));
        assert!(xml.contains("<path>./tetris.gb</path>"));
    }

    #[test]
    fn test_run_set_finds_entry_by_any_path_spelling() {
        let dir = tempfile::tempdir().unwrap();
        let gamelist = dir.path().join("gamelist.xml");
        std::fs::write(
            &gamelist,
            "<gameList>\n  <game>\n    <path>./tetris.gb</path>\n    <name>Tetris</name>\n  </game>\n</gameList>\n",
        )
        .unwrap();

        let absolute = dir.path().join("tetris.gb");
        run_set(
            &gamelist,
            dir.path(),
            &absolute.to_string_lossy(),
            &["genre=Puzzle".to_string()],
        )
        .unwrap();
        run_set(&gamelist, dir.path(), "tetris.gb", &["region=eu".to_string()]).unwrap();

        let list = GameList::load(&gamelist).unwrap();
        assert_eq!(list.len(), 1);
        let tetris = &list.entries()[0];
        assert_eq!(tetris.value("genre"), Some("Puzzle"));
        assert_eq!(tetris.value("region"), Some("eu"));
        assert_eq!(tetris.value("path"), Some("./tetris.gb"));
    }

    #[test]
    fn test_run_set_rejects_bad_value() {
        let dir = tempfile::tempdir().unwrap();
        let gamelist = dir.path().join("gamelist.xml");
        let original = "<gameList>\n  <game>\n    <path>./tetris.gb</path>\n    <name>Tetris</name>\n  </game>\n</gameList>\n";
        std::fs::write(&gamelist, original).unwrap();

        let err = run_set(
            &gamelist,
            dir.path(),
            "./tetris.gb",
            &["genre=Puzzle".to_string(), "playcount=many".to_string()],
        )
        .unwrap_err();
        assert!(matches!(err, CliError::Metadata(MetadataError::InvalidValue { .. })));
        assert_eq!(std::fs::read_to_string(&gamelist).unwrap(), original);
    }

    #[test]
    fn test_run_set_missing_entry() {
        let dir = tempfile::tempdir().unwrap();
        let gamelist = dir.path().join("gamelist.xml");
        std::fs::write(&gamelist, "<gameList/>").unwrap();
        let err = run_set(&gamelist, dir.path(), "./nope.gb", &["genre=x".to_string()])
            .unwrap_err();
        assert!(matches!(err, CliError::NotFound(_)));
    }
}
