//! Settings infrastructure for au3lsp.
//!
//! Settings are read from an `au3lsp.toml` file found near the workspace root.
//! Every field is optional; missing fields keep their defaults.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::signatures;

/// File name looked up during discovery.
pub const SETTINGS_FILE: &str = "au3lsp.toml";

/// Root settings structure loaded from au3lsp.toml.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub completion: CompletionSettings,
    pub hover: HoverSettings,
}

/// What the completion list offers.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct CompletionSettings {
    /// Offer `@` macros.
    pub macros: bool,
    /// Offer keywords and `#` directives.
    pub keywords: bool,
    /// Offer functions from UDF libraries such as Array.au3.
    pub udfs: bool,
    /// Table names to leave out entirely, e.g. `["winapi_sys"]`.
    pub disabled_tables: Vec<String>,
}

impl Default for CompletionSettings {
    fn default() -> Self {
        Self {
            macros: true,
            keywords: true,
            udfs: true,
            disabled_tables: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct HoverSettings {
    /// Append "Requires: #include" notes to UDF hovers.
    pub include_notes: bool,
}

impl Default for HoverSettings {
    fn default() -> Self {
        Self {
            include_notes: true,
        }
    }
}

impl Settings {
    /// Disabled table names that match no shipped table.
    pub fn unknown_tables(&self) -> Vec<&str> {
        self.completion
            .disabled_tables
            .iter()
            .map(String::as_str)
            .filter(|name| signatures::table(name).is_none())
            .collect()
    }
}

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Parse settings from TOML text.
pub fn parse_settings(content: &str) -> Result<Settings, toml::de::Error> {
    toml::from_str(content)
}

/// Load settings from a file.
pub fn load_settings(path: &Path) -> Result<Settings, SettingsError> {
    let content = std::fs::read_to_string(path).map_err(|source| SettingsError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let settings = parse_settings(&content).map_err(|source| SettingsError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    for name in settings.unknown_tables() {
        tracing::warn!(table = name, path = %path.display(), "unknown table in disabled_tables");
    }
    Ok(settings)
}

/// Find and load settings for a workspace.
///
/// Walks up from `start_dir` first, then checks its immediate child
/// directories. Returns the settings and the directory they were found in;
/// unreadable or invalid files fall back to defaults.
pub fn discover_settings(start_dir: &Path) -> (Settings, PathBuf) {
    let found = start_dir
        .ancestors()
        .map(|dir| (dir.join(SETTINGS_FILE), dir.to_path_buf()))
        .find(|(candidate, _)| candidate.is_file())
        .or_else(|| find_in_children(start_dir));

    let Some((path, dir)) = found else {
        tracing::debug!(root = %start_dir.display(), "no settings file found, using defaults");
        return (Settings::default(), start_dir.to_path_buf());
    };

    match load_settings(&path) {
        Ok(settings) => {
            tracing::info!(path = %path.display(), "loaded settings");
            (settings, dir)
        }
        Err(e) => {
            tracing::warn!("{e}; using default settings");
            (Settings::default(), dir)
        }
    }
}

fn find_in_children(dir: &Path) -> Option<(PathBuf, PathBuf)> {
    let mut children: Vec<PathBuf> = std::fs::read_dir(dir)
        .ok()?
        .flatten()
        .filter(|entry| entry.file_type().is_ok_and(|ft| ft.is_dir()))
        .map(|entry| entry.path())
        .collect();
    // read_dir order is platform dependent.
    children.sort();

    children
        .into_iter()
        .map(|child| (child.join(SETTINGS_FILE), child))
        .find(|(candidate, _)| candidate.is_file())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_empty_settings() {
        let settings = parse_settings("").unwrap();
        assert_eq!(settings, Settings::default());
        assert!(settings.completion.macros);
        assert!(settings.completion.udfs);
        assert!(settings.hover.include_notes);
    }

    #[test]
    fn parse_partial_settings() {
        let settings = parse_settings(
            r#"
[completion]
udfs = false
disabled_tables = ["winapi_sys"]

[hover]
include_notes = false
"#,
        )
        .unwrap();
        assert!(!settings.completion.udfs);
        assert!(settings.completion.macros);
        assert_eq!(settings.completion.disabled_tables, vec!["winapi_sys"]);
        assert!(!settings.hover.include_notes);
        assert!(settings.unknown_tables().is_empty());
    }

    #[test]
    fn parse_rejects_unknown_fields() {
        assert!(parse_settings("[completion]\nmacro = true\n").is_err());
    }

    #[test]
    fn unknown_tables_are_reported() {
        let settings = parse_settings("[completion]\ndisabled_tables = [\"array\", \"gdiplus\"]\n")
            .unwrap();
        assert_eq!(settings.unknown_tables(), vec!["gdiplus"]);
    }

    #[test]
    fn load_missing_file_is_read_error() {
        let err = load_settings(Path::new("/definitely/not/here/au3lsp.toml")).unwrap_err();
        assert!(matches!(err, SettingsError::Read { .. }));
        assert!(err.to_string().starts_with("failed to read"));
    }

    /// Create a unique temp directory for test isolation.
    fn make_test_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir()
            .join("au3lsp-test")
            .join(name)
            .join(format!("{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    fn cleanup_test_dir(dir: &Path) {
        let _ = std::fs::remove_dir_all(dir);
    }

    #[test]
    fn discover_settings_in_current_dir() {
        let dir = make_test_dir("discover-current");
        std::fs::write(dir.join(SETTINGS_FILE), "[completion]\nkeywords = false\n").unwrap();

        let (settings, settings_dir) = discover_settings(&dir);
        assert_eq!(settings_dir, dir);
        assert!(!settings.completion.keywords);

        cleanup_test_dir(&dir);
    }

    #[test]
    fn discover_settings_in_parent_dir() {
        let parent = make_test_dir("discover-parent");
        let child = parent.join("scripts");
        std::fs::create_dir_all(&child).unwrap();
        std::fs::write(parent.join(SETTINGS_FILE), "[completion]\nmacros = false\n").unwrap();

        let (settings, settings_dir) = discover_settings(&child);
        assert_eq!(settings_dir, parent);
        assert!(!settings.completion.macros);

        cleanup_test_dir(&parent);
    }

    #[test]
    fn discover_settings_in_child_dir() {
        let parent = make_test_dir("discover-child");
        let child = parent.join("config");
        std::fs::create_dir_all(&child).unwrap();
        std::fs::write(child.join(SETTINGS_FILE), "[hover]\ninclude_notes = false\n").unwrap();

        let (settings, settings_dir) = discover_settings(&parent);
        assert_eq!(settings_dir, child);
        assert!(!settings.hover.include_notes);

        cleanup_test_dir(&parent);
    }

    #[test]
    fn discover_settings_invalid_file_uses_defaults() {
        let dir = make_test_dir("discover-invalid");
        std::fs::write(dir.join(SETTINGS_FILE), "[completion\n").unwrap();

        let (settings, settings_dir) = discover_settings(&dir);
        assert_eq!(settings_dir, dir);
        assert_eq!(settings, Settings::default());

        cleanup_test_dir(&dir);
    }

    #[test]
    fn discover_settings_parent_preferred_over_child() {
        let parent = make_test_dir("discover-priority");
        let child = parent.join("nested");
        std::fs::create_dir_all(&child).unwrap();
        std::fs::write(parent.join(SETTINGS_FILE), "[completion]\nudfs = false\n").unwrap();
        std::fs::write(child.join(SETTINGS_FILE), "[completion]\nudfs = true\n").unwrap();

        let (settings, settings_dir) = discover_settings(&parent);
        assert_eq!(settings_dir, parent);
        assert!(!settings.completion.udfs);

        cleanup_test_dir(&parent);
    }
}
