//! Schema-driven conversion between [`Record`]s and tree nodes.
//!
//! One loop over the kind's schema table drives each operation; the
//! per-type work is an exhaustive match over [`Slot`] / [`SlotMut`].

use std::path::Path;

use crate::codec::{
    float_to_string, hex_to_int, int_to_hex, int_to_range, range_to_int, string_to_float,
    string_to_int,
};
use crate::date::{format_date, parse_date};
use crate::defaults::DefaultRecords;
use crate::error::MetadataError;
use crate::paths::{make_relative_path, resolve_path};
use crate::record::{Record, Slot, SlotMut};
use crate::schema::{FieldDescriptor, RecordKind};
use crate::tree::{MetadataNode, MetadataTree};

/// Decimal places written for Rating fields.
pub const RATING_PRECISION: usize = 4;
/// Decimal places written for Float fields.
pub const FLOAT_PRECISION: usize = 6;

/// Which fields a merge may fill in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MergePolicy {
    /// Every field of the schema
    #[default]
    AllFields,
    /// Leave statistic fields (play count, last played, hash) alone
    SkipStatistics,
}

impl Record {
    /// Build a record from a tree node. See [`Record::deserialize`].
    pub fn from_tree<T: MetadataTree>(
        node: &T,
        base: &Path,
        defaults: &DefaultRecords,
    ) -> Result<Self, MetadataError> {
        let kind = RecordKind::from_tag(node.tag())
            .ok_or_else(|| MetadataError::unrecognized_node(node.tag()))?;
        let mut record = Record::new(kind, "");
        record.deserialize(node, base, defaults)?;
        Ok(record)
    }

    /// Load every schema field of this record from `node`.
    ///
    /// The node tag selects the record kind; an unknown tag fails without
    /// touching the record. Absent keys take the schema default. A value that
    /// does not decode is logged and replaced by the default (Int, Float,
    /// Rating), zero (Range, Crc32) or left as it was (Date). If the
    /// resulting name is empty the record keeps its previous name and is
    /// marked dirty.
    pub fn deserialize<T: MetadataTree>(
        &mut self,
        node: &T,
        base: &Path,
        defaults: &DefaultRecords,
    ) -> Result<(), MetadataError> {
        let kind = RecordKind::from_tag(node.tag())
            .ok_or_else(|| MetadataError::unrecognized_node(node.tag()))?;
        self.kind = kind;
        let baseline = defaults.get(kind);

        let previous_name = std::mem::take(&mut self.name);

        for descriptor in kind.fields() {
            let field = descriptor.field();
            let value = node.get(descriptor.key(), descriptor.default_value());
            if value == descriptor.default_value() {
                field.copy(self, baseline);
                continue;
            }
            decode(descriptor, field.slot_mut(self), value, base);
        }

        if self.name.is_empty() {
            log::debug!("No name in <{}> node, keeping '{}'", kind, previous_name);
            self.name = previous_name;
            self.dirty = true;
        }
        Ok(())
    }

    /// Write every non-default schema field to a new node tagged with the
    /// record kind. Paths are written relative to `base`.
    pub fn serialize(&self, base: &Path, defaults: &DefaultRecords) -> MetadataNode {
        let mut node = MetadataNode::new(self.kind.tag());
        self.serialize_into(&mut node, base, defaults);
        node
    }

    /// Like [`serialize`](Self::serialize), into an existing tree. Keys of
    /// default-valued fields are not removed.
    pub fn serialize_into<T: MetadataTree>(&self, tree: &mut T, base: &Path, defaults: &DefaultRecords) {
        let baseline = defaults.get(self.kind);
        for descriptor in self.kind.fields() {
            let field = descriptor.field();
            let slot = field.slot(self);
            if slot == field.slot(baseline) {
                continue;
            }
            tree.insert(descriptor.key(), encode(slot, Some(base)));
        }
    }

    /// Fill in every field of this record still at its default with the
    /// value from `source`. Fields already set are never overwritten.
    pub fn merge(&mut self, source: &Record, defaults: &DefaultRecords) {
        self.merge_with(source, defaults, MergePolicy::AllFields);
    }

    pub fn merge_with(&mut self, source: &Record, defaults: &DefaultRecords, policy: MergePolicy) {
        let baseline = defaults.get(self.kind);
        for descriptor in self.kind.fields() {
            if policy == MergePolicy::SkipStatistics && descriptor.is_statistic() {
                continue;
            }
            let field = descriptor.field();
            if field.slot(self) != field.slot(baseline) {
                continue;
            }
            field.copy(self, source);
            self.dirty = true;
        }
    }
}

/// External string form of a slot. With no `base`, paths stay absolute.
pub(crate) fn encode(slot: Slot<'_>, base: Option<&Path>) -> String {
    match slot {
        Slot::String(s) | Slot::Text(s) | Slot::List(s) => s.to_string(),
        Slot::Path(p) => match base {
            Some(base) => make_relative_path(p, base),
            None => p.to_string(),
        },
        Slot::Int(i) => i.to_string(),
        Slot::Bool(b) => b.to_string(),
        Slot::Float(f) => float_to_string(f, FLOAT_PRECISION),
        Slot::Rating(f) => float_to_string(f, RATING_PRECISION),
        // Setters and decoders only store formattable epochs
        Slot::Date(epoch) => format_date(epoch).unwrap_or_else(|| {
            log::warn!("Date {} is outside years 1-9999; writing it empty", epoch);
            String::new()
        }),
        Slot::Range(r) => int_to_range(r),
        Slot::Crc32(crc) => int_to_hex(crc),
    }
}

/// Lenient decode used when loading: bad values degrade, with a warning.
fn decode(descriptor: &FieldDescriptor, slot: SlotMut<'_>, value: &str, base: &Path) {
    let key = descriptor.key();
    match slot {
        SlotMut::String(s) | SlotMut::Text(s) | SlotMut::List(s) => *s = value.to_string(),
        SlotMut::Path(p) => *p = resolve_path(value, base),
        SlotMut::Int(i) => {
            *i = string_to_int(value).unwrap_or_else(|| {
                log::warn!("Invalid int value '{}' for '{}'", value, key);
                string_to_int(descriptor.default_value()).unwrap_or(0)
            })
        }
        SlotMut::Bool(b) => *b = value == "true",
        SlotMut::Float(f) | SlotMut::Rating(f) => {
            *f = string_to_float(value).unwrap_or_else(|| {
                log::warn!("Invalid float value '{}' for '{}'", value, key);
                string_to_float(descriptor.default_value()).unwrap_or(0.0)
            })
        }
        SlotMut::Date(epoch) => match parse_date(value) {
            Some(parsed) => *epoch = parsed,
            None => log::warn!("Invalid date value '{}' for '{}'", value, key),
        },
        SlotMut::Range(r) => {
            *r = range_to_int(value).unwrap_or_else(|| {
                log::warn!("Invalid range '{}' for '{}'", value, key);
                0
            })
        }
        SlotMut::Crc32(crc) => {
            *crc = hex_to_int(value).unwrap_or_else(|| {
                log::warn!("Invalid CRC32 '{}' for '{}'", value, key);
                0
            })
        }
    }
}

/// Strict decode used by editors. `None` leaves the slot untouched.
pub(crate) fn decode_strict(slot: SlotMut<'_>, value: &str) -> Option<()> {
    match slot {
        SlotMut::String(s) | SlotMut::Text(s) | SlotMut::List(s) | SlotMut::Path(s) => {
            *s = value.to_string()
        }
        SlotMut::Int(i) => *i = string_to_int(value)?,
        SlotMut::Bool(b) => {
            *b = match value {
                "true" => true,
                "false" => false,
                _ => return None,
            }
        }
        SlotMut::Float(f) | SlotMut::Rating(f) => *f = string_to_float(value)?,
        SlotMut::Date(epoch) => *epoch = if value.is_empty() { 0 } else { parse_date(value)? },
        SlotMut::Range(r) => *r = range_to_int(value)?,
        SlotMut::Crc32(crc) => *crc = hex_to_int(value)?,
    }
    Some(())
}
