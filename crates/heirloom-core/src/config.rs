//! Viewer settings loaded from a JSON profile file.

use std::path::{Path, PathBuf};

use log::debug;
use serde::{Deserialize, Serialize};

use crate::{
    error::{FormatError, Result},
    models::{DateKind, RegionPrefs},
};

const CONFIG_FILE: &str = "config.json";

/// Stored profile fields that decide how dates render.
///
/// Every field is optional. Missing fields resolve through
/// [`RegionPrefs::from_profile`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Profile {
    /// Named region preset, e.g. `"UK"`
    pub region: Option<String>,
    /// BCP-47 locale overriding the region's
    pub locale: Option<String>,
    /// IANA timezone overriding the region's
    pub timezone: Option<String>,
    /// Kind used when a caller does not ask for one
    pub kind: Option<DateKind>,
}

/// Resolved settings for one viewer.
#[derive(Debug, Clone, Default)]
pub struct Settings {
    source: Option<PathBuf>,
    profile: Profile,
}

impl Settings {
    /// File the settings were read from, if any.
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    /// The stored profile.
    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    /// Region preferences derived from the profile.
    pub fn region(&self) -> RegionPrefs {
        RegionPrefs::from_profile(
            self.profile.region.as_deref(),
            self.profile.locale.as_deref(),
            self.profile.timezone.as_deref(),
        )
    }

    /// Kind used when none is requested.
    pub fn default_kind(&self) -> DateKind {
        self.profile.kind.unwrap_or_default()
    }
}

/// Builder for loading [`Settings`].
#[derive(Debug, Clone, Default)]
pub struct SettingsBuilder {
    config_path: Option<PathBuf>,
}

impl SettingsBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self { config_path: None }
    }

    /// Sets a custom config file path.
    ///
    /// If not specified, looks for `$XDG_CONFIG_HOME/heirloom/config.json`
    /// or `~/.config/heirloom/config.json`, and uses defaults when neither
    /// exists.
    pub fn with_config_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.config_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Loads the settings.
    ///
    /// # Errors
    ///
    /// Returns `FormatError::FileSystem` if an explicit path cannot be read
    /// Returns `FormatError::Serialization` if the file is not a valid profile
    pub fn build(self) -> Result<Settings> {
        let Some(path) = self.config_path.or_else(Self::default_config_path) else {
            debug!("No config file found, using default settings");
            return Ok(Settings::default());
        };

        let contents = std::fs::read_to_string(&path).map_err(|e| FormatError::FileSystem {
            path: path.clone(),
            source: e,
        })?;
        let profile: Profile = serde_json::from_str(&contents)?;
        debug!("Loaded settings from {}", path.display());

        Ok(Settings {
            source: Some(path),
            profile,
        })
    }

    /// Returns the existing config file following the XDG Base Directory
    /// specification, if there is one.
    fn default_config_path() -> Option<PathBuf> {
        xdg::BaseDirectories::with_prefix("heirloom").find_config_file(CONFIG_FILE)
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;
    use crate::models::RegionPreset;

    fn write_config(contents: &str) -> (TempDir, PathBuf) {
        let temp_dir = TempDir::new().expect("Failed to create temporary directory");
        let path = temp_dir.path().join(CONFIG_FILE);
        fs::write(&path, contents).expect("Failed to write config");
        (temp_dir, path)
    }

    #[test]
    fn test_load_region_profile() {
        let (_temp_dir, path) = write_config(r#"{ "region": "US", "kind": "dateOnly" }"#);
        let settings = SettingsBuilder::new()
            .with_config_path(Some(&path))
            .build()
            .unwrap();

        assert_eq!(settings.source(), Some(path.as_path()));
        assert_eq!(settings.region(), RegionPreset::Us.prefs());
        assert_eq!(settings.default_kind(), DateKind::DateOnly);
    }

    #[test]
    fn test_load_explicit_fields() {
        let (_temp_dir, path) =
            write_config(r#"{ "locale": "fr-FR", "timezone": "Europe/Paris" }"#);
        let settings = SettingsBuilder::new()
            .with_config_path(Some(&path))
            .build()
            .unwrap();

        assert_eq!(settings.region(), RegionPrefs::new("fr-FR", "Europe/Paris"));
        assert_eq!(settings.default_kind(), DateKind::Datetime);
    }

    #[test]
    fn test_empty_object_uses_defaults() {
        let (_temp_dir, path) = write_config("{}");
        let settings = SettingsBuilder::new()
            .with_config_path(Some(&path))
            .build()
            .unwrap();
        assert_eq!(settings.region(), RegionPrefs::default());
    }

    #[test]
    fn test_missing_explicit_file_is_error() {
        let temp_dir = TempDir::new().unwrap();
        let err = SettingsBuilder::new()
            .with_config_path(Some(temp_dir.path().join("absent.json")))
            .build()
            .unwrap_err();
        assert!(matches!(err, FormatError::FileSystem { .. }));
    }

    #[test]
    fn test_bad_json_is_error() {
        let (_temp_dir, path) = write_config(r#"{ "region": "#);
        let err = SettingsBuilder::new()
            .with_config_path(Some(&path))
            .build()
            .unwrap_err();
        assert!(matches!(err, FormatError::Serialization { .. }));
    }

    #[test]
    fn test_unknown_field_is_error() {
        let (_temp_dir, path) = write_config(r#"{ "colour": "blue" }"#);
        assert!(SettingsBuilder::new()
            .with_config_path(Some(&path))
            .build()
            .is_err());
    }
}
