use std::fs;
use std::io::BufRead;
use std::path::Path;

use gamemeta_core::paths::resolve_path;
use gamemeta_core::{MetadataNode, MetadataTree, RecordKind};
use quick_xml::events::Event;
use quick_xml::reader::Reader;

use crate::GamelistError;

/// Root element of an EmulationStation gamelist.
pub const ROOT_TAG: &str = "gameList";

/// Key holding the entry's ROM or folder path. Not part of either schema.
pub const PATH_KEY: &str = "path";

/// An EmulationStation `gamelist.xml`: an ordered list of `<game>` and
/// `<folder>` entries whose leaf children are key/value pairs.
///
/// Entries are kept as raw nodes so keys outside the schema (`path`, scraper
/// ids, ...) survive a load/save cycle in their original order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GameList {
    entries: Vec<MetadataNode>,
}

impl GameList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a gamelist document.
    ///
    /// Unknown top-level elements and nested elements inside a value are
    /// skipped with a warning.
    pub fn parse<R: BufRead>(reader: R) -> Result<Self, GamelistError> {
        let mut xml = Reader::from_reader(reader);
        xml.config_mut().trim_text(true);

        let mut buf = Vec::new();
        let mut skip_buf = Vec::new();
        let mut list = GameList::new();

        let mut seen_root = false;
        let mut entry: Option<MetadataNode> = None;
        let mut key: Option<String> = None;
        let mut text = String::new();

        loop {
            match xml.read_event_into(&mut buf)? {
                Event::Start(ref e) => {
                    let tag = String::from_utf8_lossy(e.name().as_ref()).to_string();
                    if !seen_root {
                        check_root(&tag)?;
                        seen_root = true;
                    } else if let Some(ref parent) = key {
                        log::warn!("Skipping nested <{}> inside <{}>", tag, parent);
                        xml.read_to_end_into(e.name(), &mut skip_buf)?;
                        skip_buf.clear();
                    } else if entry.is_some() {
                        key = Some(tag);
                        text.clear();
                    } else if RecordKind::from_tag(&tag).is_some() {
                        entry = Some(MetadataNode::new(tag));
                    } else {
                        log::warn!("Skipping unknown <{}> element in gamelist", tag);
                        xml.read_to_end_into(e.name(), &mut skip_buf)?;
                        skip_buf.clear();
                    }
                }
                Event::Empty(ref e) => {
                    let tag = String::from_utf8_lossy(e.name().as_ref()).to_string();
                    if !seen_root {
                        check_root(&tag)?;
                        seen_root = true;
                    } else if let Some(ref parent) = key {
                        log::warn!("Skipping nested <{}/> inside <{}>", tag, parent);
                    } else if let Some(ref mut node) = entry {
                        node.insert(&tag, String::new());
                    } else if RecordKind::from_tag(&tag).is_some() {
                        list.entries.push(MetadataNode::new(tag));
                    } else {
                        log::warn!("Skipping unknown <{}/> element in gamelist", tag);
                    }
                }
                Event::Text(ref e) => {
                    if key.is_some() {
                        text.push_str(&e.unescape()?);
                    }
                }
                Event::CData(ref e) => {
                    if key.is_some() {
                        text.push_str(&String::from_utf8_lossy(e));
                    }
                }
                Event::End(_) => {
                    if let Some(k) = key.take() {
                        if let Some(ref mut node) = entry {
                            node.insert(&k, std::mem::take(&mut text));
                        }
                    } else if let Some(node) = entry.take() {
                        log::debug!("Read <{}> entry with {} keys", node.tag(), node.len());
                        list.entries.push(node);
                    }
                }
                Event::Eof => break,
                _ => {}
            }
            buf.clear();
        }

        if !seen_root {
            return Err(GamelistError::invalid_gamelist(format!(
                "No <{ROOT_TAG}> element found"
            )));
        }

        Ok(list)
    }

    /// Parse a gamelist from a file path.
    pub fn load(path: &Path) -> Result<Self, GamelistError> {
        let file = fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        Self::parse(reader)
    }

    /// Render the document. Values are XML-escaped.
    pub fn to_xml_string(&self) -> String {
        let mut xml = String::new();
        xml.push_str("<?xml version=\"1.0\"?>\n");
        xml.push_str("<gameList>\n");

        for entry in &self.entries {
            xml.push_str("  <");
            xml.push_str(entry.tag());
            xml.push_str(">\n");
            for (key, value) in entry.iter() {
                write_tag(&mut xml, key, value);
            }
            xml.push_str("  </");
            xml.push_str(entry.tag());
            xml.push_str(">\n");
        }

        xml.push_str("</gameList>\n");
        xml
    }

    /// Write the document to `path`, replacing it atomically.
    pub fn save(&self, path: &Path) -> Result<(), GamelistError> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let tmp = path.with_extension("xml.tmp");
        fs::write(&tmp, self.to_xml_string())?;
        fs::rename(&tmp, path)?;
        log::debug!("Wrote {} entries to {}", self.entries.len(), path.display());
        Ok(())
    }

    pub fn entries(&self) -> &[MetadataNode] {
        &self.entries
    }

    pub fn entries_mut(&mut self) -> &mut [MetadataNode] {
        &mut self.entries
    }

    pub fn push(&mut self, entry: MetadataNode) {
        self.entries.push(entry);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Index of the first entry whose `path` names the same file as `path`.
    ///
    /// Both sides are resolved against `base`, so `./tetris.gb`,
    /// `tetris.gb` and `<base>/tetris.gb` all match each other.
    pub fn position_by_path(&self, path: &str, base: &Path) -> Option<usize> {
        let target = resolve_path(path, base);
        if target.is_empty() {
            return None;
        }
        self.entries.iter().position(|entry| {
            entry
                .value(PATH_KEY)
                .is_some_and(|p| resolve_path(p, base) == target)
        })
    }

    pub fn find_by_path(&self, path: &str, base: &Path) -> Option<&MetadataNode> {
        self.position_by_path(path, base).map(|i| &self.entries[i])
    }
}

fn check_root(tag: &str) -> Result<(), GamelistError> {
    if tag == ROOT_TAG {
        Ok(())
    } else {
        Err(GamelistError::invalid_gamelist(format!(
            "Expected <{ROOT_TAG}> root, found <{tag}>"
        )))
    }
}

fn write_tag(xml: &mut String, tag: &str, value: &str) {
    xml.push_str("    <");
    xml.push_str(tag);
    xml.push('>');
    xml.push_str(&escape_xml(value));
    xml.push_str("</");
    xml.push_str(tag);
    xml.push_str(">\n");
}

fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

#[cfg(test)]
#[path = "tests/gamelist_tests.rs"]
mod tests;
