//! Path resolution for Path fields.
//!
//! Gamelists store media paths relative to the ROM directory (`./images/x.png`)
//! or to the user's home (`~/media/x.png`). In memory they are kept absolute.
//! All returned strings use forward slashes.

use std::path::{Component, Path, PathBuf};

/// Resolve a stored path against `base`, expanding a leading `~`.
///
/// The result is normalized lexically (`.` and `..` folded); the filesystem
/// is not consulted.
pub fn resolve_path(value: &str, base: &Path) -> String {
    if value.is_empty() {
        return String::new();
    }

    let joined = if value == "~" {
        home_dir()
    } else if let Some(rest) = value.strip_prefix("~/") {
        home_dir().join(rest)
    } else {
        // Absolute values replace `base` in join().
        base.join(value)
    };
    to_generic(&normalize(&joined))
}

/// Express `path` relative to `base` (`./...`), else to home (`~/...`),
/// else leave it as is.
pub fn make_relative_path(path: &str, base: &Path) -> String {
    if path.is_empty() {
        return String::new();
    }

    let target = normalize(Path::new(path));
    if let Ok(rel) = target.strip_prefix(normalize(base)) {
        return format!("./{}", to_generic(rel));
    }
    let home = normalize(&home_dir());
    // A home of `/` would swallow every absolute path.
    if home.parent().is_some() {
        if let Ok(rel) = target.strip_prefix(&home) {
            return format!("~/{}", to_generic(rel));
        }
    }
    to_generic(&target)
}

/// Fold `.` and `..` components without touching the filesystem.
fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if matches!(out.components().next_back(), Some(Component::Normal(_))) {
                    out.pop();
                } else if !out.has_root() {
                    out.push("..");
                }
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}

fn home_dir() -> PathBuf {
    dirs::home_dir().unwrap_or_else(|| PathBuf::from("/"))
}

fn to_generic(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}
