//! EmulationStation `gamelist.xml` documents on top of `gamemeta-core`.

pub mod catalog;
pub mod error;
pub mod gamelist;

pub use catalog::{MergeReport, merge_lists, normalize};
pub use error::GamelistError;
pub use gamelist::GameList;
