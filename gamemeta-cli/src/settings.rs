//! Application settings (ROM root, merge behaviour).
//!
//! The settings file is `~/.config/gamemeta/settings.toml`. It is read and
//! updated as a `toml::Value` so keys written by other tools survive.

use std::io;
use std::path::{Path, PathBuf};

/// Canonical path to the settings file: `~/.config/gamemeta/settings.toml`.
pub(crate) fn settings_path() -> PathBuf {
    let config = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    config.join("gamemeta").join("settings.toml")
}

/// Values read from the settings file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Settings {
    /// `library.rom_root`
    pub rom_root: Option<PathBuf>,
    /// `merge.keep_statistics`
    pub keep_statistics: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            rom_root: None,
            keep_statistics: true,
        }
    }
}

impl Settings {
    pub(crate) fn load() -> Self {
        Self::load_from(&settings_path())
    }

    /// Missing or malformed files give the defaults.
    pub(crate) fn load_from(path: &Path) -> Self {
        let mut settings = Self::default();
        let Some(doc) = read_doc(path) else {
            return settings;
        };

        if let Some(root) = doc
            .get("library")
            .and_then(|t| t.get("rom_root"))
            .and_then(|v| v.as_str())
        {
            if !root.is_empty() {
                settings.rom_root = Some(PathBuf::from(root));
            }
        }
        if let Some(keep) = doc
            .get("merge")
            .and_then(|t| t.get("keep_statistics"))
            .and_then(|v| v.as_bool())
        {
            settings.keep_statistics = keep;
        }
        settings
    }
}

fn read_doc(path: &Path) -> Option<toml::Value> {
    let contents = std::fs::read_to_string(path).ok()?;
    match contents.parse() {
        Ok(doc) => Some(doc),
        Err(e) => {
            log::warn!("Ignoring malformed settings file {}: {}", path.display(), e);
            None
        }
    }
}

/// Save (or clear) the ROM root in the settings file.
pub(crate) fn save_rom_root(root: Option<&Path>) -> io::Result<()> {
    save_rom_root_to(&settings_path(), root)
}

/// Surgical update of `library.rom_root`; other keys are preserved.
pub(crate) fn save_rom_root_to(settings: &Path, root: Option<&Path>) -> io::Result<()> {
    let mut doc: toml::Value = if let Ok(contents) = std::fs::read_to_string(settings) {
        contents
            .parse()
            .unwrap_or_else(|_| toml::Value::Table(Default::default()))
    } else {
        toml::Value::Table(Default::default())
    };

    // Ensure [library] table exists
    let table = doc
        .as_table_mut()
        .ok_or_else(|| io::Error::other("settings.toml root is not a table"))?;
    let library = table
        .entry("library")
        .or_insert_with(|| toml::Value::Table(Default::default()));
    let lib_table = library
        .as_table_mut()
        .ok_or_else(|| io::Error::other("[library] is not a table"))?;

    match root {
        Some(p) => {
            lib_table.insert(
                "rom_root".to_string(),
                toml::Value::String(p.to_string_lossy().into_owned()),
            );
        }
        None => {
            lib_table.remove("rom_root");
        }
    }

    // Write atomically
    if let Some(parent) = settings.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let serialized = toml::to_string_pretty(&doc).map_err(io::Error::other)?;
    let tmp = settings.with_extension("toml.tmp");
    std::fs::write(&tmp, &serialized)?;
    std::fs::rename(&tmp, settings)?;

    Ok(())
}

/// Load the full settings file as a pretty-printed TOML string for display.
pub(crate) fn load_settings_string() -> Option<String> {
    let doc = read_doc(&settings_path())?;
    toml::to_string_pretty(&doc).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings::load_from(&dir.path().join("settings.toml"));
        assert_eq!(settings, Settings::default());
        assert!(settings.keep_statistics);
    }

    #[test]
    fn test_load_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.toml");
        std::fs::write(
            &path,
            "[library]\nrom_root = \"/roms\"\n\n[merge]\nkeep_statistics = false\n",
        )
        .unwrap();
        let settings = Settings::load_from(&path);
        assert_eq!(settings.rom_root, Some(PathBuf::from("/roms")));
        assert!(!settings.keep_statistics);
    }

    #[test]
    fn test_save_rom_root_preserves_other_keys() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gamemeta").join("settings.toml");
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, "[merge]\nkeep_statistics = false\n").unwrap();

        save_rom_root_to(&path, Some(Path::new("/roms/snes"))).unwrap();
        let settings = Settings::load_from(&path);
        assert_eq!(settings.rom_root, Some(PathBuf::from("/roms/snes")));
        assert!(!settings.keep_statistics);

        save_rom_root_to(&path, None).unwrap();
        let settings = Settings::load_from(&path);
        assert_eq!(settings.rom_root, None);
        assert!(!settings.keep_statistics);
        assert!(!path.with_extension("toml.tmp").exists());
    }
}
