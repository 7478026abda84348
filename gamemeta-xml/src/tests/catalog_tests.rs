use super::*;

fn base() -> &'static Path {
    Path::new("/roms/snes")
}

fn game(path: &str, name: &str) -> MetadataNode {
    MetadataNode::new("game").with("path", path).with("name", name)
}

#[test]
fn test_store_record_keeps_foreign_keys_in_place() {
    let defaults = DefaultRecords::new();
    let mut node = game("./tetris.gb", "Tetris")
        .with("genre", "unknown")
        .with("scrap", "");
    let mut record = Record::from_tree(&node, base(), &defaults).unwrap();
    record.set_genre("Puzzle");

    store_record(&mut node, &record, base(), &defaults);
    let entries: Vec<_> = node.iter().collect();
    assert_eq!(
        entries,
        vec![
            ("path", "./tetris.gb"),
            ("scrap", ""),
            ("name", "Tetris"),
            ("genre", "Puzzle"),
        ]
    );
}

#[test]
fn test_normalize_drops_defaults_and_canonicalises() {
    let defaults = DefaultRecords::new();
    let mut list = GameList::new();
    list.push(
        game("./smw.sfc", "Super Mario World")
            .with("players", "1-2")
            .with("rating", "0.9")
            .with("developer", "unknown")
            .with("hash", "b19ed489"),
    );
    list.push(game("./tetris.gb", "Tetris"));

    let changed = normalize(&mut list, base(), &defaults).unwrap();
    assert_eq!(changed, 1);

    let smw = list.find_by_path("./smw.sfc", base()).unwrap();
    assert_eq!(smw.value("players"), Some("2-1"));
    assert_eq!(smw.value("rating"), Some("0.9000"));
    assert_eq!(smw.value("hash"), Some("B19ED489"));
    assert_eq!(smw.value("developer"), None);

    // A second pass is a no-op
    assert_eq!(normalize(&mut list, base(), &defaults).unwrap(), 0);
}

#[test]
fn test_normalize_rejects_unknown_entry_kind() {
    let defaults = DefaultRecords::new();
    let mut list = GameList::new();
    list.push(MetadataNode::new("system").with("name", "SNES"));
    let err = normalize(&mut list, base(), &defaults).unwrap_err();
    assert!(matches!(err, GamelistError::Metadata(_)));
}

#[test]
fn test_merge_lists_fills_in_and_appends() {
    let defaults = DefaultRecords::new();
    let mut dest = GameList::new();
    dest.push(game("./smw.sfc", "My SMW").with("favorite", "true"));
    dest.push(game("./tetris.gb", "Tetris").with("genre", "Puzzle"));

    let mut source = GameList::new();
    source.push(
        game("./smw.sfc", "Super Mario World")
            .with("genre", "Platform")
            .with("favorite", "false"),
    );
    source.push(game("./tetris.gb", "Tetris").with("genre", "Blocks"));
    source.push(game("./zelda.sfc", "Zelda").with("image", "./images/zelda.png"));

    let report = merge_lists(
        &mut dest,
        base(),
        &source,
        base(),
        &defaults,
        MergePolicy::AllFields,
    )
    .unwrap();
    assert_eq!(
        report,
        MergeReport {
            merged: 1,
            added: 1,
            unchanged: 1
        }
    );

    let smw = dest.find_by_path("./smw.sfc", base()).unwrap();
    assert_eq!(smw.value("name"), Some("My SMW"));
    assert_eq!(smw.value("favorite"), Some("true"));
    assert_eq!(smw.value("genre"), Some("Platform"));

    let tetris = dest.find_by_path("./tetris.gb", base()).unwrap();
    assert_eq!(tetris.value("genre"), Some("Puzzle"));

    assert_eq!(dest.len(), 3);
    let zelda = &dest.entries()[2];
    assert_eq!(zelda.value("path"), Some("./zelda.sfc"));
    assert_eq!(zelda.value("image"), Some("./images/zelda.png"));
}

#[test]
fn test_merge_lists_rebases_paths() {
    let defaults = DefaultRecords::new();
    let mut dest = GameList::new();
    dest.push(game("./snes/smw.sfc", "Super Mario World"));

    let mut source = GameList::new();
    source.push(game("./smw.sfc", "Super Mario World").with("genre", "Platform"));
    source.push(
        game("./f-zero.sfc", "F-Zero").with("thumbnail", "./thumbs/f-zero.png"),
    );

    let report = merge_lists(
        &mut dest,
        Path::new("/roms"),
        &source,
        base(),
        &defaults,
        MergePolicy::AllFields,
    )
    .unwrap();
    assert_eq!(report.merged, 1);
    assert_eq!(report.added, 1);

    let added = dest.find_by_path("./snes/f-zero.sfc", Path::new("/roms")).unwrap();
    assert_eq!(added.value("thumbnail"), Some("./snes/thumbs/f-zero.png"));
}

#[test]
fn test_merge_lists_matches_differently_spelled_paths() {
    let defaults = DefaultRecords::new();
    let mut source = GameList::new();
    source.push(game("./tetris.gb", "Tetris").with("genre", "Puzzle"));

    for dest_path in ["tetris.gb", "/roms/snes/tetris.gb"] {
        let mut dest = GameList::new();
        dest.push(game(dest_path, "Tetris"));

        let report = merge_lists(
            &mut dest,
            base(),
            &source,
            base(),
            &defaults,
            MergePolicy::AllFields,
        )
        .unwrap();
        assert_eq!(
            report,
            MergeReport {
                merged: 1,
                added: 0,
                unchanged: 0
            },
            "{dest_path}"
        );
        assert_eq!(dest.len(), 1);
        let tetris = &dest.entries()[0];
        assert_eq!(tetris.value("path"), Some(dest_path));
        assert_eq!(tetris.value("genre"), Some("Puzzle"));
    }
}

#[test]
fn test_merge_lists_skip_statistics() {
    let defaults = DefaultRecords::new();
    let mut dest = GameList::new();
    dest.push(game("./smw.sfc", "Super Mario World"));

    let mut source = GameList::new();
    source.push(game("./smw.sfc", "Super Mario World").with("playcount", "12"));

    let report = merge_lists(
        &mut dest,
        base(),
        &source,
        base(),
        &defaults,
        MergePolicy::SkipStatistics,
    )
    .unwrap();
    assert_eq!(report.unchanged, 1);
    assert_eq!(dest.entries()[0].value("playcount"), None);
}
