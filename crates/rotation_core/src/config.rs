//! Rotation configuration loading.
//!
//! # Responsibility
//! - Provide the embedded association table as the default configuration.
//! - Load alternative tables from JSON documents or files.
//!
//! # Invariants
//! - Every loaded table has passed `RotationTable::new` validation.
//! - Loading happens once at process start; the result is never mutated.

use crate::model::rotation::RotationTable;
use log::{error, info};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};
use std::time::Instant;

pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors raised while loading a rotation table.
#[derive(Debug)]
pub enum ConfigError {
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Malformed JSON or a document that violates table invariants.
    Parse(serde_json::Error),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => write!(
                f,
                "failed to read rotation table `{}`: {source}",
                path.display()
            ),
            Self::Parse(err) => write!(f, "invalid rotation table: {err}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Parse(err) => Some(err),
        }
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(value: serde_json::Error) -> Self {
        Self::Parse(value)
    }
}

/// Where the active rotation table comes from.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TableSource {
    /// Association table compiled into the binary.
    #[default]
    Embedded,
    /// JSON document on disk.
    File(PathBuf),
}

impl TableSource {
    /// Resolves this source into a validated table.
    pub fn load(&self) -> ConfigResult<RotationTable> {
        match self {
            Self::Embedded => {
                info!("event=config_load module=config status=ok source=embedded");
                Ok(RotationTable::association_default())
            }
            Self::File(path) => load_table(path),
        }
    }
}

/// Parses a JSON table document.
///
/// Expected shape:
/// `{"units":[...],"current_chair_unit":n,"current_treasurer_unit":n}`.
pub fn load_table_from_str(json: &str) -> ConfigResult<RotationTable> {
    Ok(serde_json::from_str(json)?)
}

/// Reads and parses a JSON table document from `path`.
///
/// # Side effects
/// - Reads one file.
/// - Emits `config_load` logging events with duration and status.
pub fn load_table(path: impl AsRef<Path>) -> ConfigResult<RotationTable> {
    let path = path.as_ref();
    let started_at = Instant::now();
    info!("event=config_load module=config status=start source=file");

    let raw = match std::fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(err) => {
            error!(
                "event=config_load module=config status=error source=file duration_ms={} error_code=config_read_failed error={}",
                started_at.elapsed().as_millis(),
                err
            );
            return Err(ConfigError::Io {
                path: path.to_path_buf(),
                source: err,
            });
        }
    };

    match load_table_from_str(&raw) {
        Ok(table) => {
            info!(
                "event=config_load module=config status=ok source=file duration_ms={} units={}",
                started_at.elapsed().as_millis(),
                table.len()
            );
            Ok(table)
        }
        Err(err) => {
            error!(
                "event=config_load module=config status=error source=file duration_ms={} error_code=config_parse_failed error={}",
                started_at.elapsed().as_millis(),
                err
            );
            Err(err)
        }
    }
}
