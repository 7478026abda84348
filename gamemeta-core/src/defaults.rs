//! Per-kind baseline records used to detect default-valued fields.

use std::sync::OnceLock;

use crate::record::Record;
use crate::schema::RecordKind;

/// One fully defaulted record per [`RecordKind`].
///
/// Read-only once built. Pass a reference to whatever serializes or merges,
/// or use [`DefaultRecords::shared`] for a process-wide instance.
#[derive(Debug, Clone)]
pub struct DefaultRecords {
    game: Record,
    folder: Record,
}

impl DefaultRecords {
    pub fn new() -> Self {
        Self {
            game: Record::with_schema_defaults(RecordKind::Game),
            folder: Record::with_schema_defaults(RecordKind::Folder),
        }
    }

    /// Lazily built process-wide instance.
    pub fn shared() -> &'static DefaultRecords {
        static SHARED: OnceLock<DefaultRecords> = OnceLock::new();
        SHARED.get_or_init(DefaultRecords::new)
    }

    pub fn get(&self, kind: RecordKind) -> &Record {
        match kind {
            RecordKind::Game => &self.game,
            RecordKind::Folder => &self.folder,
        }
    }
}

impl Default for DefaultRecords {
    fn default() -> Self {
        Self::new()
    }
}
