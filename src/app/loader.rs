//! Snapshot discovery and decoding
//!
//! Snapshots are JSON files selected by a mask such as `json/2024/*.json`.
//! The part of the file name matched by `*` is the snapshot id, which is
//! what the exclusion list refers to.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use super::config::ConfigError;
use crate::core::Snapshot;

// =============================================================================
// ERRORS
// =============================================================================

#[derive(Debug)]
pub enum LoadError {
    /// Snapshot directory could not be listed
    ListError(PathBuf, std::io::Error),
    /// Snapshot file could not be read
    ReadError(PathBuf, std::io::Error),
    /// Snapshot file is not a valid leaderboard document
    ParseError(PathBuf, serde_json::Error),
    Config(ConfigError),
}

impl std::fmt::Display for LoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoadError::ListError(path, e) => {
                write!(f, "Failed to list snapshot directory {}: {}", path.display(), e)
            }
            LoadError::ReadError(path, e) => {
                write!(f, "Failed to read snapshot {}: {}", path.display(), e)
            }
            LoadError::ParseError(path, e) => {
                write!(f, "Failed to parse snapshot {}: {}", path.display(), e)
            }
            LoadError::Config(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for LoadError {}

impl From<ConfigError> for LoadError {
    fn from(e: ConfigError) -> Self {
        LoadError::Config(e)
    }
}

// =============================================================================
// SNAPSHOT MASK
// =============================================================================

/// A `dir/prefix*suffix` file mask
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnapshotMask {
    dir: PathBuf,
    prefix: String,
    suffix: String,
}

impl SnapshotMask {
    /// Parse a mask; the file name must contain exactly one `*`.
    pub fn parse(mask: &str) -> Result<Self, ConfigError> {
        let invalid = || ConfigError::InvalidMask(mask.to_string());

        let (dir, file) = match mask.rsplit_once('/') {
            Some((dir, file)) => (dir, file),
            None => (".", mask),
        };
        if dir.contains('*') {
            return Err(invalid());
        }
        let (prefix, suffix) = file.split_once('*').ok_or_else(invalid)?;
        if suffix.contains('*') {
            return Err(invalid());
        }

        Ok(Self {
            dir: PathBuf::from(if dir.is_empty() { "/" } else { dir }),
            prefix: prefix.to_string(),
            suffix: suffix.to_string(),
        })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Snapshot id of a matching file name
    pub fn snapshot_id<'a>(&self, file_name: &'a str) -> Option<&'a str> {
        file_name
            .strip_prefix(self.prefix.as_str())?
            .strip_suffix(self.suffix.as_str())
    }

    /// File path of a snapshot id
    pub fn path_for(&self, id: &str) -> PathBuf {
        self.dir.join(format!("{}{}{}", self.prefix, id, self.suffix))
    }

    /// Ids of every matching file, sorted
    pub fn discover(&self) -> Result<Vec<String>, LoadError> {
        let entries =
            fs::read_dir(&self.dir).map_err(|e| LoadError::ListError(self.dir.clone(), e))?;

        let mut ids = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| LoadError::ListError(self.dir.clone(), e))?;
            if !entry.path().is_file() {
                continue;
            }
            let file_name = entry.file_name();
            let Some(file_name) = file_name.to_str() else {
                continue;
            };
            if let Some(id) = self.snapshot_id(file_name) {
                ids.push(id.to_string());
            }
        }
        ids.sort();
        Ok(ids)
    }
}

// =============================================================================
// LOADING
// =============================================================================

/// Drop excluded ids; every excluded id must be among `ids`.
pub fn apply_exclusions(ids: Vec<String>, exclude: &[String]) -> Result<Vec<String>, ConfigError> {
    let unknown: Vec<String> = exclude
        .iter()
        .filter(|id| !ids.contains(id))
        .cloned()
        .collect();
    if !unknown.is_empty() {
        return Err(ConfigError::UnknownExclusion(unknown));
    }
    Ok(ids.into_iter().filter(|id| !exclude.contains(id)).collect())
}

/// Read and decode one snapshot file
pub fn load_snapshot(path: &Path) -> Result<Snapshot, LoadError> {
    let contents =
        fs::read_to_string(path).map_err(|e| LoadError::ReadError(path.to_path_buf(), e))?;
    let snapshot: Snapshot = serde_json::from_str(&contents)
        .map_err(|e| LoadError::ParseError(path.to_path_buf(), e))?;
    debug!(
        path = %path.display(),
        members = snapshot.members.len(),
        "[loader] Decoded snapshot"
    );
    Ok(snapshot)
}

/// Discover, filter and decode every snapshot selected by `mask`.
///
/// Any unreadable or malformed file aborts the whole load.
pub fn load_snapshots(mask: &str, exclude: &[String]) -> Result<Vec<Snapshot>, LoadError> {
    let mask = SnapshotMask::parse(mask)?;
    let ids = apply_exclusions(mask.discover()?, exclude)?;
    info!(
        dir = %mask.dir().display(),
        count = ids.len(),
        excluded = exclude.len(),
        "[loader] Loading snapshots"
    );

    ids.iter()
        .map(|id| load_snapshot(&mask.path_for(id)))
        .collect()
}
