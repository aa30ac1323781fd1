//! Error types produced by user input and the settings file.

use std::path::PathBuf;

use thiserror::Error;

/// Error returned when a custom material cannot be created from dialog input.
///
/// The messages are shown to the user verbatim.
#[derive(Debug, Error, PartialEq)]
pub enum PressError {
    /// Returned when the material name is blank after trimming.
    #[error("material name must not be empty")]
    EmptyName,
    /// Returned when the strength field is not a number.
    #[error("'{0}' is not a number; enter a positive strength in MPa")]
    InvalidStrength(String),
    /// Returned when the strength is zero, negative or not finite.
    #[error("strength must be a positive number of MPa (received {0})")]
    NonPositiveStrength(f64),
}

/// Error returned when reading or writing the settings file fails.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read or write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("failed to serialize settings: {0}")]
    Serialize(#[from] toml::ser::Error),
}
