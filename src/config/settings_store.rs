//! Settings file
//!
//! TOML document with a `[system_settings]` table and an optional
//! `[[materials]]` array of presets.

use std::path::{Path, PathBuf};

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use super::system_settings::SystemSettings;
use crate::constants::SETTINGS_FILE;
use crate::error::SettingsError;
use crate::materials::{MaterialConfig, lab_presets};

/// On-disk layout. Both sections are optional when reading.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SettingsFile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub system_settings: Option<SystemSettings>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub materials: Vec<MaterialConfig>,
}

impl SettingsFile {
    pub fn new(settings: SystemSettings, materials: Vec<MaterialConfig>) -> Self {
        Self {
            system_settings: Some(settings),
            materials,
        }
    }

    /// Contents written for a fresh install.
    pub fn defaults() -> Self {
        Self::new(SystemSettings::default(), lab_presets())
    }

    pub fn settings_or_default(&self) -> SystemSettings {
        self.system_settings.unwrap_or_default()
    }

    pub fn materials_or_default(&self) -> Vec<MaterialConfig> {
        if self.materials.is_empty() {
            lab_presets()
        } else {
            self.materials.clone()
        }
    }
}

/// Location of the settings file.
#[derive(Resource, Clone, Debug, PartialEq)]
pub struct SettingsStore {
    path: PathBuf,
}

impl Default for SettingsStore {
    fn default() -> Self {
        Self::new(SETTINGS_FILE)
    }
}

impl SettingsStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the settings file. A missing file is `Ok(None)`.
    pub fn load(&self) -> Result<Option<SettingsFile>, SettingsError> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(SettingsError::Io {
                    path: self.path.clone(),
                    source,
                });
            }
        };

        toml::from_str(&content)
            .map(Some)
            .map_err(|source| SettingsError::Parse {
                path: self.path.clone(),
                source,
            })
    }

    /// Load the file, falling back to defaults when it is absent or unreadable.
    pub fn load_or_default(&self) -> SettingsFile {
        match self.load() {
            Ok(Some(file)) => {
                info!(
                    "Loaded settings from {} ({} materials)",
                    self.path.display(),
                    file.materials.len()
                );
                file
            }
            Ok(None) => {
                info!(
                    "Settings file {} not found, using defaults",
                    self.path.display()
                );
                SettingsFile::defaults()
            }
            Err(e) => {
                warn!("{e}; using defaults");
                SettingsFile::defaults()
            }
        }
    }

    /// Overwrite the file with `settings` and the given presets.
    pub fn save(
        &self,
        settings: &SystemSettings,
        materials: &[MaterialConfig],
    ) -> Result<(), SettingsError> {
        let file = SettingsFile::new(*settings, materials.to_vec());
        self.write(&file)?;
        info!("Saved settings to {}", self.path.display());
        Ok(())
    }

    /// Write the default settings file.
    pub fn write_defaults(&self) -> Result<(), SettingsError> {
        self.write(&SettingsFile::defaults())?;
        info!("Created default settings file {}", self.path.display());
        Ok(())
    }

    fn write(&self, file: &SettingsFile) -> Result<(), SettingsError> {
        let content = toml::to_string_pretty(file)?;
        std::fs::write(&self.path, content).map_err(|source| SettingsError::Io {
            path: self.path.clone(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn missing_file_loads_as_none() {
        let dir = tempdir().unwrap();
        let store = SettingsStore::new(dir.path().join("absent.toml"));
        assert!(store.load().unwrap().is_none());
        assert_eq!(store.load_or_default(), SettingsFile::defaults());
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempdir().unwrap();
        let store = SettingsStore::new(dir.path().join("settings.toml"));
        let settings = SystemSettings {
            max_pressure: 220_000_000.0,
            pressure_increment_per_second: 7_500_000.0,
            contact_area: 0.037,
        };
        let materials = vec![
            MaterialConfig::new("Basalt", 180.0, true, 0.02),
            MaterialConfig::new("Copper", 70.5, false, 0.01),
        ];

        store.save(&settings, &materials).unwrap();
        let loaded = store.load().unwrap().unwrap();

        assert_eq!(loaded.system_settings, Some(settings));
        assert_eq!(loaded.materials, materials);
    }

    #[test]
    fn file_uses_documented_keys() {
        let dir = tempdir().unwrap();
        let store = SettingsStore::new(dir.path().join("settings.toml"));
        store.write_defaults().unwrap();
        let text = std::fs::read_to_string(store.path()).unwrap();
        for key in [
            "[system_settings]",
            "max_pressure",
            "pressure_increment",
            "contact_area",
            "[[materials]]",
            "strength_mpa",
            "fragile",
        ] {
            assert!(text.contains(key), "missing {key} in:\n{text}");
        }
    }

    #[test]
    fn sections_fall_back_independently() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings.toml");
        std::fs::write(
            &path,
            "[system_settings]\nmax_pressure = 90000000.0\npressure_increment = 3000000.0\ncontact_area = 0.02\n",
        )
        .unwrap();

        let file = SettingsStore::new(&path).load().unwrap().unwrap();
        assert_eq!(file.settings_or_default().max_pressure, 90_000_000.0);
        assert_eq!(file.materials_or_default(), lab_presets());
    }

    #[test]
    fn malformed_file_is_a_parse_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings.toml");
        std::fs::write(&path, "[system_settings\nmax_pressure = ").unwrap();

        let store = SettingsStore::new(&path);
        assert!(matches!(store.load(), Err(SettingsError::Parse { .. })));
        assert_eq!(store.load_or_default(), SettingsFile::defaults());
    }

    #[test]
    fn save_into_missing_directory_is_an_io_error() {
        let dir = tempdir().unwrap();
        let store = SettingsStore::new(dir.path().join("no_such_dir").join("settings.toml"));
        let result = store.save(&SystemSettings::default(), &lab_presets());
        assert!(matches!(result, Err(SettingsError::Io { .. })));
        assert!(!store.path().exists());
    }

    #[test]
    fn unreadable_path_falls_back_to_defaults() {
        let dir = tempdir().unwrap();
        let store = SettingsStore::new(dir.path());
        assert!(matches!(store.load(), Err(SettingsError::Io { .. })));
        assert_eq!(store.load_or_default(), SettingsFile::defaults());
    }
}
