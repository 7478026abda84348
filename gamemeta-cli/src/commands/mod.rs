pub(crate) mod config;
pub(crate) mod fields;
pub(crate) mod merge;
pub(crate) mod normalize;
pub(crate) mod set;
pub(crate) mod show;

use std::path::{Path, PathBuf};

use crate::settings::Settings;

/// Directory that the Path fields of `gamelist` are relative to.
///
/// Priority: `--root`, then the saved `library.rom_root`, then the
/// gamelist's own directory.
pub(crate) fn resolve_base(root: Option<&Path>, settings: &Settings, gamelist: &Path) -> PathBuf {
    let base = root
        .map(Path::to_path_buf)
        .or_else(|| settings.rom_root.clone())
        .unwrap_or_else(|| match gamelist.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        });
    std::path::absolute(&base).unwrap_or(base)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_base_priority() {
        let settings = Settings {
            rom_root: Some(PathBuf::from("/saved")),
            keep_statistics: true,
        };
        let gamelist = Path::new("/roms/snes/gamelist.xml");

        assert_eq!(
            resolve_base(Some(Path::new("/cli")), &settings, gamelist),
            PathBuf::from("/cli")
        );
        assert_eq!(
            resolve_base(None, &settings, gamelist),
            PathBuf::from("/saved")
        );
        assert_eq!(
            resolve_base(None, &Settings::default(), gamelist),
            PathBuf::from("/roms/snes")
        );
    }

    #[test]
    fn test_resolve_base_bare_file_name() {
        let base = resolve_base(None, &Settings::default(), Path::new("gamelist.xml"));
        assert!(base.is_absolute());
    }
}
