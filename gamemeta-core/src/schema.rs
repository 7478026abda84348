//! Field schema tables for game and folder records.
//!
//! Each record kind has an ordered table of [`FieldDescriptor`]s naming the
//! external key, the default (in external string form) and the [`Field`]
//! slot it reads and writes. The folder table is a projection of the game
//! table over the same [`Record`](crate::Record) storage.

use serde::{Deserialize, Serialize};

/// Which kind of catalog entity a record describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordKind {
    Game,
    Folder,
}

impl RecordKind {
    /// Node tag identifying this kind in the tree form.
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Game => "game",
            Self::Folder => "folder",
        }
    }

    /// Exact, case-sensitive match against the node tags.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "game" => Some(Self::Game),
            "folder" => Some(Self::Folder),
            _ => None,
        }
    }

    /// The schema table for this kind, in serialization order.
    pub fn fields(&self) -> &'static [FieldDescriptor] {
        match self {
            Self::Game => &GAME_FIELDS,
            Self::Folder => &FOLDER_FIELDS,
        }
    }

    /// Look up a descriptor by external key.
    pub fn descriptor(&self, key: &str) -> Option<&'static FieldDescriptor> {
        self.fields().iter().find(|d| d.key == key)
    }
}

impl std::fmt::Display for RecordKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}

/// Logical type of a field, selecting its external encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    /// Single-line string
    String,
    /// Multiline string
    Text,
    /// File path, stored absolute, written relative to the base path
    Path,
    /// 32-bit signed integer
    Int,
    /// `true` / `false`
    Bool,
    /// Floating point value
    Float,
    /// Float in 0.0..=1.0, written with 4 decimals
    Rating,
    /// Epoch seconds, written as ISO-8601
    Date,
    /// Packed `min-max`: max in the high 16 bits, min in the low 16 bits
    Range,
    /// 32-bit hash, written as 8 uppercase hex digits
    Crc32,
    /// String drawn from a constrained set (emulator, core, ratio)
    List,
}

impl FieldType {
    pub fn name(&self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Text => "text",
            Self::Path => "path",
            Self::Int => "int",
            Self::Bool => "bool",
            Self::Float => "float",
            Self::Rating => "rating",
            Self::Date => "date",
            Self::Range => "range",
            Self::Crc32 => "crc32",
            Self::List => "list",
        }
    }
}

/// Storage slots of a [`Record`](crate::Record), the superset of both schemas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Rating,
    Favorite,
    Hidden,
    Emulator,
    Core,
    Ratio,
    Description,
    Image,
    Thumbnail,
    ReleaseDate,
    Developer,
    Publisher,
    Genre,
    Players,
    Region,
    RomType,
    PlayCount,
    LastPlayed,
    RomCrc32,
}

impl Field {
    pub const ALL: [Field; 20] = [
        Field::Name,
        Field::Rating,
        Field::Favorite,
        Field::Hidden,
        Field::Emulator,
        Field::Core,
        Field::Ratio,
        Field::Description,
        Field::Image,
        Field::Thumbnail,
        Field::ReleaseDate,
        Field::Developer,
        Field::Publisher,
        Field::Genre,
        Field::Players,
        Field::Region,
        Field::RomType,
        Field::PlayCount,
        Field::LastPlayed,
        Field::RomCrc32,
    ];

    /// Logical type of the slot; agrees with the [`Slot`](crate::Slot)
    /// variant that [`Field::slot`] returns.
    pub const fn field_type(self) -> FieldType {
        match self {
            Self::Name
            | Self::Developer
            | Self::Publisher
            | Self::Genre
            | Self::Region
            | Self::RomType => FieldType::String,
            Self::Description => FieldType::Text,
            Self::Image | Self::Thumbnail => FieldType::Path,
            Self::Emulator | Self::Core | Self::Ratio => FieldType::List,
            Self::Rating => FieldType::Rating,
            Self::Favorite | Self::Hidden => FieldType::Bool,
            Self::ReleaseDate | Self::LastPlayed => FieldType::Date,
            Self::Players => FieldType::Range,
            Self::PlayCount => FieldType::Int,
            Self::RomCrc32 => FieldType::Crc32,
        }
    }
}

/// One schema entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDescriptor {
    key: &'static str,
    default_value: &'static str,
    display_name: &'static str,
    display_prompt: &'static str,
    field: Field,
    is_statistic: bool,
    is_main: bool,
}

impl FieldDescriptor {
    const fn new(
        key: &'static str,
        default_value: &'static str,
        display_name: &'static str,
        display_prompt: &'static str,
        field: Field,
        is_statistic: bool,
        is_main: bool,
    ) -> Self {
        Self {
            key,
            default_value,
            display_name,
            display_prompt,
            field,
            is_statistic,
            is_main,
        }
    }

    /// External key, stable across versions.
    pub fn key(&self) -> &'static str {
        self.key
    }

    /// Default in external string form.
    pub fn default_value(&self) -> &'static str {
        self.default_value
    }

    /// Label shown in metadata editors.
    pub fn display_name(&self) -> &'static str {
        self.display_name
    }

    /// Prompt shown when an editor asks for a new value.
    pub fn display_prompt(&self) -> &'static str {
        self.display_prompt
    }

    pub fn field(&self) -> Field {
        self.field
    }

    pub fn field_type(&self) -> FieldType {
        self.field.field_type()
    }

    /// Gathered by the frontend itself; scrapers should leave it alone.
    pub fn is_statistic(&self) -> bool {
        self.is_statistic
    }

    /// Shown on the main editor page rather than the secondary one.
    pub fn is_main(&self) -> bool {
        self.is_main
    }
}

const NAME: FieldDescriptor = FieldDescriptor::new("name", "", "Name", "enter game name", Field::Name, false, true);
const HIDDEN: FieldDescriptor = FieldDescriptor::new("hidden", "false", "Hidden", "set hidden", Field::Hidden, false, true);
const DESCRIPTION: FieldDescriptor = FieldDescriptor::new("desc", "", "Description", "enter description", Field::Description, false, false);
const IMAGE: FieldDescriptor = FieldDescriptor::new("image", "", "Image", "enter path to image", Field::Image, false, false);
const THUMBNAIL: FieldDescriptor = FieldDescriptor::new("thumbnail", "", "Thumbnail", "enter path to thumbnail", Field::Thumbnail, false, false);

static GAME_FIELDS: [FieldDescriptor; 20] = [
    NAME,
    FieldDescriptor::new("rating", "0.0", "Rating", "enter rating", Field::Rating, false, true),
    FieldDescriptor::new("favorite", "false", "Favorite", "enter favorite", Field::Favorite, false, true),
    HIDDEN,
    FieldDescriptor::new("emulator", "default", "Emulator", "enter emulator", Field::Emulator, false, true),
    FieldDescriptor::new("core", "default", "Core", "enter core", Field::Core, false, true),
    FieldDescriptor::new("ratio", "auto", "Ratio", "enter ratio", Field::Ratio, false, true),
    DESCRIPTION,
    IMAGE,
    THUMBNAIL,
    FieldDescriptor::new("releasedate", "", "Release date", "enter release date", Field::ReleaseDate, false, false),
    FieldDescriptor::new("developer", "unknown", "Developer", "enter game developer", Field::Developer, false, false),
    FieldDescriptor::new("publisher", "unknown", "Publisher", "enter game publisher", Field::Publisher, false, false),
    FieldDescriptor::new("genre", "unknown", "Genre", "enter game genre", Field::Genre, false, false),
    FieldDescriptor::new("players", "1", "Players", "enter number of players", Field::Players, false, false),
    FieldDescriptor::new("region", "", "Region", "enter region", Field::Region, false, false),
    FieldDescriptor::new("romtype", "Original", "Romtype", "enter romtype", Field::RomType, false, false),
    FieldDescriptor::new("playcount", "0", "Play count", "enter number of times played", Field::PlayCount, true, false),
    FieldDescriptor::new("lastplayed", "", "Last played", "enter last played date", Field::LastPlayed, true, false),
    FieldDescriptor::new("hash", "0", "Rom Crc32", "enter rom crc32", Field::RomCrc32, true, false),
];

static FOLDER_FIELDS: [FieldDescriptor; 5] = [NAME, HIDDEN, DESCRIPTION, IMAGE, THUMBNAIL];
