//! Schema-driven game and folder metadata.
//!
//! A [`Record`] holds the metadata of one game or folder. Its fields are
//! described by a static schema table per [`RecordKind`]; generic code walks
//! that table to convert records to and from sparse [`MetadataNode`] trees
//! (fields at their default are omitted) and to merge two records without
//! overwriting values that were already set.
//!
//! ```
//! use std::path::Path;
//! use gamemeta_core::{DefaultRecords, MetadataNode, Record};
//!
//! let defaults = DefaultRecords::new();
//! let node = MetadataNode::new("game")
//!     .with("name", "Tetris")
//!     .with("players", "1-2");
//! let record = Record::from_tree(&node, Path::new("/roms/gb"), &defaults).unwrap();
//! assert_eq!(record.player_max(), 2);
//!
//! let out = record.serialize(Path::new("/roms/gb"), &defaults);
//! assert_eq!(out.len(), 2);
//! ```

pub mod codec;
pub mod date;
pub mod defaults;
pub mod engine;
pub mod error;
pub mod paths;
pub mod record;
pub mod schema;
pub mod tree;

pub use defaults::DefaultRecords;
pub use engine::MergePolicy;
pub use error::MetadataError;
pub use record::{Record, Slot};
pub use schema::{Field, FieldDescriptor, FieldType, RecordKind};
pub use tree::{MetadataNode, MetadataTree};
