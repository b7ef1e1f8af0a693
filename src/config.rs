//! Loading option structs from JSON files
//!
//! Every option struct in the crate (`FreeMovementOptions`, `TextureSampling`,
//! `ShaderProgramDesc`) deserializes with missing fields taking their default,
//! so a config file only needs the values it changes.

use crate::filesystem::FileSystem;
use log::info;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::io::{self, Write};
use std::path::Path;
use tracing::instrument;

#[derive(Debug)]
pub enum ConfigError {
    Io(io::Error),
    Json(serde_json::Error),
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ConfigError::Io(error) => Some(error),
            ConfigError::Json(error) => Some(error),
        }
    }
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(error) => write!(f, "IO error: {error}"),
            ConfigError::Json(error) => write!(f, "JSON error: {error}"),
        }
    }
}

impl From<io::Error> for ConfigError {
    fn from(error: io::Error) -> Self {
        ConfigError::Io(error)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(error: serde_json::Error) -> Self {
        ConfigError::Json(error)
    }
}

#[instrument(skip(path, fs), fields(path = %path.display()))]
pub fn load_json<T: DeserializeOwned>(
    path: &Path,
    fs: &dyn FileSystem,
) -> Result<T, ConfigError> {
    let data = fs.read_file(path)?;
    let value = serde_json::from_slice(&data)?;
    info!("Loaded config {}", path.display());
    Ok(value)
}

/// Writes `value` as pretty printed JSON, fields in declaration order.
pub fn save_json<T: Serialize>(
    value: &T,
    path: &Path,
    fs: &dyn FileSystem,
) -> Result<(), ConfigError> {
    let mut writer = fs.create_file(path)?;
    serde_json::to_writer_pretty(&mut writer, value)?;
    writer.flush()?;
    Ok(())
}
