//! In-memory metadata record and its typed field accessors.

use chrono::{DateTime, Utc};

use crate::date;
use crate::defaults::DefaultRecords;
use crate::engine;
use crate::error::MetadataError;
use crate::schema::{Field, FieldType, RecordKind};

/// Metadata for one game or folder.
///
/// Every setter marks the record dirty so the owner knows it has to be
/// written back.
#[derive(Debug, Clone)]
pub struct Record {
    pub(crate) kind: RecordKind,
    pub(crate) dirty: bool,

    pub(crate) name: String,
    pub(crate) emulator: String,
    pub(crate) core: String,
    pub(crate) ratio: String,
    pub(crate) description: String,
    pub(crate) image: String,
    pub(crate) thumbnail: String,
    pub(crate) developer: String,
    pub(crate) publisher: String,
    pub(crate) genre: String,
    pub(crate) region: String,
    pub(crate) rom_type: String,
    /// 0.0 to 1.0
    pub(crate) rating: f32,
    /// High 16 bits: max players, low 16 bits: min players
    pub(crate) players: u32,
    /// Epoch seconds
    pub(crate) release_date: i64,
    pub(crate) play_count: i32,
    /// Epoch seconds
    pub(crate) last_played: i64,
    pub(crate) rom_crc32: u32,
    pub(crate) favorite: bool,
    pub(crate) hidden: bool,
}

impl Record {
    /// A record with the given name and every other field zeroed.
    pub fn new(kind: RecordKind, name: impl Into<String>) -> Self {
        Self {
            kind,
            dirty: false,
            name: name.into(),
            emulator: String::new(),
            core: String::new(),
            ratio: String::new(),
            description: String::new(),
            image: String::new(),
            thumbnail: String::new(),
            developer: String::new(),
            publisher: String::new(),
            genre: String::new(),
            region: String::new(),
            rom_type: String::new(),
            rating: 0.0,
            players: 0,
            release_date: 0,
            play_count: 0,
            last_played: 0,
            rom_crc32: 0,
            favorite: false,
            hidden: false,
        }
    }

    /// A record holding the schema default of every field.
    ///
    /// Built directly rather than by decoding the default strings; a test
    /// checks that the two agree.
    pub fn with_schema_defaults(kind: RecordKind) -> Self {
        Self {
            emulator: "default".to_string(),
            core: "default".to_string(),
            ratio: "auto".to_string(),
            developer: "unknown".to_string(),
            publisher: "unknown".to_string(),
            genre: "unknown".to_string(),
            rom_type: "Original".to_string(),
            players: (1 << 16) | 1,
            ..Self::new(kind, "")
        }
    }

    pub fn kind(&self) -> RecordKind {
        self.kind
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Call once the record has been written back.
    pub fn clear_dirty(&mut self) {
        self.dirty = false;
    }

    // -- Accessors --

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn emulator(&self) -> &str {
        &self.emulator
    }

    pub fn core(&self) -> &str {
        &self.core
    }

    pub fn ratio(&self) -> &str {
        &self.ratio
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Absolute image path, empty when unset.
    pub fn image(&self) -> &str {
        &self.image
    }

    /// Absolute thumbnail path, empty when unset.
    pub fn thumbnail(&self) -> &str {
        &self.thumbnail
    }

    pub fn developer(&self) -> &str {
        &self.developer
    }

    pub fn publisher(&self) -> &str {
        &self.publisher
    }

    pub fn genre(&self) -> &str {
        &self.genre
    }

    pub fn region(&self) -> &str {
        &self.region
    }

    pub fn rom_type(&self) -> &str {
        &self.rom_type
    }

    pub fn rating(&self) -> f32 {
        self.rating
    }

    /// Packed player range, sortable by maximum player count.
    pub fn player_range(&self) -> u32 {
        self.players
    }

    pub fn player_min(&self) -> u32 {
        self.players & 0xFFFF
    }

    pub fn player_max(&self) -> u32 {
        self.players >> 16
    }

    pub fn release_date_epoch(&self) -> i64 {
        self.release_date
    }

    pub fn release_date(&self) -> Option<DateTime<Utc>> {
        date::to_datetime(self.release_date)
    }

    pub fn play_count(&self) -> i32 {
        self.play_count
    }

    pub fn last_played_epoch(&self) -> i64 {
        self.last_played
    }

    pub fn last_played(&self) -> Option<DateTime<Utc>> {
        date::to_datetime(self.last_played)
    }

    pub fn rom_crc32(&self) -> u32 {
        self.rom_crc32
    }

    pub fn favorite(&self) -> bool {
        self.favorite
    }

    pub fn hidden(&self) -> bool {
        self.hidden
    }

    // -- Setters --

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
        self.dirty = true;
    }

    pub fn set_emulator(&mut self, emulator: impl Into<String>) {
        self.emulator = emulator.into();
        self.dirty = true;
    }

    pub fn set_core(&mut self, core: impl Into<String>) {
        self.core = core.into();
        self.dirty = true;
    }

    pub fn set_ratio(&mut self, ratio: impl Into<String>) {
        self.ratio = ratio.into();
        self.dirty = true;
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
        self.dirty = true;
    }

    /// Expects an absolute path.
    pub fn set_image(&mut self, path: impl Into<String>) {
        self.image = path.into();
        self.dirty = true;
    }

    /// Expects an absolute path.
    pub fn set_thumbnail(&mut self, path: impl Into<String>) {
        self.thumbnail = path.into();
        self.dirty = true;
    }

    pub fn set_developer(&mut self, developer: impl Into<String>) {
        self.developer = developer.into();
        self.dirty = true;
    }

    pub fn set_publisher(&mut self, publisher: impl Into<String>) {
        self.publisher = publisher.into();
        self.dirty = true;
    }

    pub fn set_genre(&mut self, genre: impl Into<String>) {
        self.genre = genre.into();
        self.dirty = true;
    }

    pub fn set_region(&mut self, region: impl Into<String>) {
        self.region = region.into();
        self.dirty = true;
    }

    pub fn set_rom_type(&mut self, rom_type: impl Into<String>) {
        self.rom_type = rom_type.into();
        self.dirty = true;
    }

    pub fn set_rating(&mut self, rating: f32) {
        self.rating = rating;
        self.dirty = true;
    }

    /// Bounds are swapped when given in descending order.
    pub fn set_players(&mut self, min: u16, max: u16) {
        let (min, max) = (min.min(max), min.max(max));
        self.players = (u32::from(max) << 16) | u32::from(min);
        self.dirty = true;
    }

    /// Fails for epochs outside years 1 to 9999, which a gamelist cannot
    /// hold. The record is left untouched in that case.
    pub fn set_release_date(&mut self, epoch: i64) -> Result<(), MetadataError> {
        check_epoch("releasedate", epoch)?;
        self.release_date = epoch;
        self.dirty = true;
        Ok(())
    }

    pub fn set_play_count(&mut self, count: i32) {
        self.play_count = count;
        self.dirty = true;
    }

    pub fn increment_play_count(&mut self) {
        self.play_count = self.play_count.saturating_add(1);
        self.dirty = true;
    }

    pub fn set_last_played(&mut self, epoch: i64) -> Result<(), MetadataError> {
        check_epoch("lastplayed", epoch)?;
        self.last_played = epoch;
        self.dirty = true;
        Ok(())
    }

    pub fn set_rom_crc32(&mut self, crc: u32) {
        self.rom_crc32 = crc;
        self.dirty = true;
    }

    pub fn set_favorite(&mut self, favorite: bool) {
        self.favorite = favorite;
        self.dirty = true;
    }

    pub fn set_hidden(&mut self, hidden: bool) {
        self.hidden = hidden;
        self.dirty = true;
    }

    // -- Schema-driven access --

    /// Whether `field` holds the same value as the baseline for this kind.
    pub fn is_default(&self, field: Field, defaults: &DefaultRecords) -> bool {
        field.slot(self) == field.slot(defaults.get(self.kind))
    }

    /// [`is_default`](Self::is_default) by external key.
    pub fn is_default_key(&self, key: &str, defaults: &DefaultRecords) -> Result<bool, MetadataError> {
        let descriptor = self
            .kind
            .descriptor(key)
            .ok_or_else(|| MetadataError::unknown_field(self.kind, key))?;
        Ok(self.is_default(descriptor.field(), defaults))
    }

    /// External string form of a field. Paths are returned absolute.
    pub fn value_as_string(&self, key: &str) -> Result<String, MetadataError> {
        let descriptor = self
            .kind
            .descriptor(key)
            .ok_or_else(|| MetadataError::unknown_field(self.kind, key))?;
        Ok(engine::encode(descriptor.field().slot(self), None))
    }

    /// Set a field from its external string form, as an editor would.
    ///
    /// Unlike deserialization there is no fallback: a value that does not
    /// match the field's grammar is an error and leaves the record untouched.
    pub fn set_value_from_string(&mut self, key: &str, value: &str) -> Result<(), MetadataError> {
        let descriptor = self
            .kind
            .descriptor(key)
            .ok_or_else(|| MetadataError::unknown_field(self.kind, key))?;
        engine::decode_strict(descriptor.field().slot_mut(self), value)
            .ok_or_else(|| MetadataError::invalid_value(key, value))?;
        self.dirty = true;
        Ok(())
    }

    /// Compare every stored field (both schemas), ignoring kind and dirty flag.
    pub fn same_values(&self, other: &Record) -> bool {
        Field::ALL
            .iter()
            .all(|field| field.slot(self) == field.slot(other))
    }
}

/// Read view of one field, tagged with its logical type.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Slot<'a> {
    String(&'a str),
    Text(&'a str),
    Path(&'a str),
    List(&'a str),
    Int(i32),
    Bool(bool),
    Float(f32),
    Rating(f32),
    Date(i64),
    Range(u32),
    Crc32(u32),
}

impl Slot<'_> {
    pub fn field_type(&self) -> FieldType {
        match self {
            Self::String(_) => FieldType::String,
            Self::Text(_) => FieldType::Text,
            Self::Path(_) => FieldType::Path,
            Self::List(_) => FieldType::List,
            Self::Int(_) => FieldType::Int,
            Self::Bool(_) => FieldType::Bool,
            Self::Float(_) => FieldType::Float,
            Self::Rating(_) => FieldType::Rating,
            Self::Date(_) => FieldType::Date,
            Self::Range(_) => FieldType::Range,
            Self::Crc32(_) => FieldType::Crc32,
        }
    }
}

/// Write view of one field, tagged with its logical type.
///
/// Crate-private: writes through it bypass the setters' range checks.
#[derive(Debug)]
pub(crate) enum SlotMut<'a> {
    String(&'a mut String),
    Text(&'a mut String),
    Path(&'a mut String),
    List(&'a mut String),
    Int(&'a mut i32),
    Bool(&'a mut bool),
    Float(&'a mut f32),
    Rating(&'a mut f32),
    Date(&'a mut i64),
    Range(&'a mut u32),
    Crc32(&'a mut u32),
}

impl Field {
    pub fn slot(self, record: &Record) -> Slot<'_> {
        match self {
            Self::Name => Slot::String(&record.name),
            Self::Rating => Slot::Rating(record.rating),
            Self::Favorite => Slot::Bool(record.favorite),
            Self::Hidden => Slot::Bool(record.hidden),
            Self::Emulator => Slot::List(&record.emulator),
            Self::Core => Slot::List(&record.core),
            Self::Ratio => Slot::List(&record.ratio),
            Self::Description => Slot::Text(&record.description),
            Self::Image => Slot::Path(&record.image),
            Self::Thumbnail => Slot::Path(&record.thumbnail),
            Self::ReleaseDate => Slot::Date(record.release_date),
            Self::Developer => Slot::String(&record.developer),
            Self::Publisher => Slot::String(&record.publisher),
            Self::Genre => Slot::String(&record.genre),
            Self::Players => Slot::Range(record.players),
            Self::Region => Slot::String(&record.region),
            Self::RomType => Slot::String(&record.rom_type),
            Self::PlayCount => Slot::Int(record.play_count),
            Self::LastPlayed => Slot::Date(record.last_played),
            Self::RomCrc32 => Slot::Crc32(record.rom_crc32),
        }
    }

    pub(crate) fn slot_mut(self, record: &mut Record) -> SlotMut<'_> {
        match self {
            Self::Name => SlotMut::String(&mut record.name),
            Self::Rating => SlotMut::Rating(&mut record.rating),
            Self::Favorite => SlotMut::Bool(&mut record.favorite),
            Self::Hidden => SlotMut::Bool(&mut record.hidden),
            Self::Emulator => SlotMut::List(&mut record.emulator),
            Self::Core => SlotMut::List(&mut record.core),
            Self::Ratio => SlotMut::List(&mut record.ratio),
            Self::Description => SlotMut::Text(&mut record.description),
            Self::Image => SlotMut::Path(&mut record.image),
            Self::Thumbnail => SlotMut::Path(&mut record.thumbnail),
            Self::ReleaseDate => SlotMut::Date(&mut record.release_date),
            Self::Developer => SlotMut::String(&mut record.developer),
            Self::Publisher => SlotMut::String(&mut record.publisher),
            Self::Genre => SlotMut::String(&mut record.genre),
            Self::Players => SlotMut::Range(&mut record.players),
            Self::Region => SlotMut::String(&mut record.region),
            Self::RomType => SlotMut::String(&mut record.rom_type),
            Self::PlayCount => SlotMut::Int(&mut record.play_count),
            Self::LastPlayed => SlotMut::Date(&mut record.last_played),
            Self::RomCrc32 => SlotMut::Crc32(&mut record.rom_crc32),
        }
    }

    /// Copy this field's value from `src` into `dst`.
    pub fn copy(self, dst: &mut Record, src: &Record) {
        match self {
            Self::Name => dst.name.clone_from(&src.name),
            Self::Rating => dst.rating = src.rating,
            Self::Favorite => dst.favorite = src.favorite,
            Self::Hidden => dst.hidden = src.hidden,
            Self::Emulator => dst.emulator.clone_from(&src.emulator),
            Self::Core => dst.core.clone_from(&src.core),
            Self::Ratio => dst.ratio.clone_from(&src.ratio),
            Self::Description => dst.description.clone_from(&src.description),
            Self::Image => dst.image.clone_from(&src.image),
            Self::Thumbnail => dst.thumbnail.clone_from(&src.thumbnail),
            Self::ReleaseDate => dst.release_date = src.release_date,
            Self::Developer => dst.developer.clone_from(&src.developer),
            Self::Publisher => dst.publisher.clone_from(&src.publisher),
            Self::Genre => dst.genre.clone_from(&src.genre),
            Self::Players => dst.players = src.players,
            Self::Region => dst.region.clone_from(&src.region),
            Self::RomType => dst.rom_type.clone_from(&src.rom_type),
            Self::PlayCount => dst.play_count = src.play_count,
            Self::LastPlayed => dst.last_played = src.last_played,
            Self::RomCrc32 => dst.rom_crc32 = src.rom_crc32,
        }
    }
}

fn check_epoch(key: &str, epoch: i64) -> Result<(), MetadataError> {
    if date::is_valid_epoch(epoch) {
        Ok(())
    } else {
        Err(MetadataError::invalid_value(key, epoch.to_string()))
    }
}

#[cfg(test)]
#[path = "tests/record_tests.rs"]
mod tests;
