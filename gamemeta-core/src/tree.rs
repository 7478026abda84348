//! The key/value tree form records are serialized to.
//!
//! The engine only needs a node tag and flat string lookups, so any document
//! layer can implement [`MetadataTree`]. [`MetadataNode`] is the in-memory
//! implementation used by the rest of the workspace.

/// A tagged node of string values, as read from or written to a document.
pub trait MetadataTree {
    /// Node kind identifier (`game`, `folder`, ...).
    fn tag(&self) -> &str;

    /// Stored value for `key`, if present.
    fn value(&self, key: &str) -> Option<&str>;

    /// Insert `value` under `key`, replacing any previous value.
    fn insert(&mut self, key: &str, value: String);

    /// Stored value for `key`, or `default` when absent.
    fn get<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        self.value(key).unwrap_or(default)
    }

    /// Insert any displayable value (numbers use their decimal form).
    fn add(&mut self, key: &str, value: impl ToString) {
        self.insert(key, value.to_string());
    }
}

/// An ordered list of key/value pairs under a tag.
///
/// Keys are unique; replacing a key keeps its original position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MetadataNode {
    tag: String,
    entries: Vec<(String, String)>,
}

impl MetadataNode {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            entries: Vec::new(),
        }
    }

    /// Builder-style insert.
    pub fn with(mut self, key: &str, value: impl ToString) -> Self {
        self.add(key, value);
        self
    }

    /// Remove `key`, returning its value.
    pub fn remove(&mut self, key: &str) -> Option<String> {
        let pos = self.entries.iter().position(|(k, _)| k == key)?;
        Some(self.entries.remove(pos).1)
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl MetadataTree for MetadataNode {
    fn tag(&self) -> &str {
        &self.tag
    }

    fn value(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    fn insert(&mut self, key: &str, value: String) {
        match self.entries.iter_mut().find(|(k, _)| k == key) {
            Some((_, existing)) => *existing = value,
            None => self.entries.push((key.to_string(), value)),
        }
    }
}
