use super::*;
use crate::date::{MAX_EPOCH, MIN_EPOCH};
use crate::schema::RecordKind;

#[test]
fn test_new_record_is_zeroed_and_clean() {
    let record = Record::new(RecordKind::Game, "Tetris");
    assert_eq!(record.name(), "Tetris");
    assert_eq!(record.genre(), "");
    assert_eq!(record.player_range(), 0);
    assert_eq!(record.rating(), 0.0);
    assert!(!record.is_dirty());
}

#[test]
fn test_schema_defaults_match_default_strings() {
    for kind in [RecordKind::Game, RecordKind::Folder] {
        let baseline = Record::with_schema_defaults(kind);
        for descriptor in kind.fields() {
            let mut decoded = Record::new(kind, "");
            decoded
                .set_value_from_string(descriptor.key(), descriptor.default_value())
                .unwrap_or_else(|e| panic!("default of '{}' does not decode: {e}", descriptor.key()));
            let field = descriptor.field();
            assert_eq!(
                field.slot(&decoded),
                field.slot(&baseline),
                "default mismatch for '{}'",
                descriptor.key()
            );
        }
    }
}

#[test]
fn test_slot_types_agree_with_schema() {
    let record = Record::with_schema_defaults(RecordKind::Game);
    for field in Field::ALL {
        assert_eq!(field.slot(&record).field_type(), field.field_type(), "{field:?}");
    }
}

#[test]
fn test_setters_mark_dirty() {
    let mut record = Record::new(RecordKind::Game, "Tetris");
    record.set_genre("Puzzle");
    assert!(record.is_dirty());
    record.clear_dirty();
    assert!(!record.is_dirty());
    record.increment_play_count();
    assert!(record.is_dirty());
    assert_eq!(record.play_count(), 1);
}

#[test]
fn test_set_players_orders_bounds() {
    let mut record = Record::new(RecordKind::Game, "Bomberman");
    record.set_players(4, 1);
    assert_eq!(record.player_min(), 1);
    assert_eq!(record.player_max(), 4);
    assert_eq!(record.value_as_string("players").unwrap(), "4-1");
}

#[test]
fn test_date_setters_reject_unwritable_epochs() {
    let mut record = Record::with_schema_defaults(RecordKind::Game);
    for epoch in [MAX_EPOCH + 1, MIN_EPOCH - 1, i64::MAX, i64::MIN] {
        assert!(matches!(
            record.set_release_date(epoch),
            Err(MetadataError::InvalidValue { .. })
        ));
        assert!(record.set_last_played(epoch).is_err());
    }
    assert_eq!(record.release_date_epoch(), 0);
    assert_eq!(record.last_played_epoch(), 0);
    assert!(!record.is_dirty());

    record.set_release_date(MAX_EPOCH).unwrap();
    record.set_last_played(MIN_EPOCH).unwrap();
    assert_eq!(record.value_as_string("releasedate").unwrap(), "99991231T235959");
    assert_eq!(record.value_as_string("lastplayed").unwrap(), "00010101T000000");
}

#[test]
fn test_set_value_from_string_rejects_five_digit_year() {
    let mut record = Record::with_schema_defaults(RecordKind::Game);
    assert!(record.set_value_from_string("releasedate", "+100000101T000000").is_err());
    assert!(record.set_value_from_string("releasedate", "10000-01-01T00:00:00Z").is_err());
    assert_eq!(record.release_date_epoch(), 0);
}

#[test]
fn test_value_as_string() {
    let mut record = Record::with_schema_defaults(RecordKind::Game);
    record.set_rom_crc32(0xB19E_D489);
    record.set_rating(0.75);
    record.set_release_date(835_488_000).unwrap();
    record.set_image("/roms/snes/images/smw.png");
    assert_eq!(record.value_as_string("hash").unwrap(), "B19ED489");
    assert_eq!(record.value_as_string("rating").unwrap(), "0.7500");
    assert_eq!(record.value_as_string("releasedate").unwrap(), "19960623T000000");
    assert_eq!(record.value_as_string("image").unwrap(), "/roms/snes/images/smw.png");
    assert_eq!(record.value_as_string("favorite").unwrap(), "false");
}

#[test]
fn test_set_value_from_string_is_strict() {
    let mut record = Record::with_schema_defaults(RecordKind::Game);
    assert!(matches!(
        record.set_value_from_string("playcount", "lots"),
        Err(MetadataError::InvalidValue { .. })
    ));
    assert!(matches!(
        record.set_value_from_string("favorite", "yes"),
        Err(MetadataError::InvalidValue { .. })
    ));
    assert_eq!(record.play_count(), 0);
    assert!(!record.is_dirty());

    record.set_value_from_string("playcount", "12").unwrap();
    record.set_value_from_string("players", "1-4").unwrap();
    assert_eq!(record.play_count(), 12);
    assert_eq!(record.player_max(), 4);
    assert!(record.is_dirty());
}

#[test]
fn test_folder_rejects_game_only_keys() {
    let mut record = Record::with_schema_defaults(RecordKind::Folder);
    assert!(matches!(
        record.set_value_from_string("genre", "RPG"),
        Err(MetadataError::UnknownField { kind: RecordKind::Folder, .. })
    ));
    assert!(record.value_as_string("playcount").is_err());
    assert!(record.value_as_string("desc").is_ok());
}

#[test]
fn test_is_default() {
    let defaults = DefaultRecords::new();
    let mut record = Record::with_schema_defaults(RecordKind::Game);
    assert!(record.is_default(Field::Genre, &defaults));
    record.set_genre("Platform");
    assert!(!record.is_default(Field::Genre, &defaults));
    assert!(!record.is_default_key("genre", &defaults).unwrap());
    assert!(record.is_default_key("developer", &defaults).unwrap());
    assert!(record.is_default_key("nope", &defaults).is_err());
}

#[test]
fn test_same_values_ignores_dirty_flag() {
    let a = Record::with_schema_defaults(RecordKind::Game);
    let mut b = Record::with_schema_defaults(RecordKind::Game);
    b.set_hidden(false);
    assert!(b.is_dirty());
    assert!(a.same_values(&b));
    b.set_hidden(true);
    assert!(!a.same_values(&b));
}
