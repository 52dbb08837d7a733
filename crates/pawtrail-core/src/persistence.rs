//! Versioned snapshot of the progress state.
//!
//! The engine itself does no I/O; callers decide where snapshots live and
//! when to write them. This module owns the format: one versioned JSON
//! document per user. Progression is best-effort, never fatal — a missing,
//! corrupt, or too-new snapshot restores as the first-launch default with
//! a warning rather than failing the caller.

use std::io::{Read, Write};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::store::ProgressState;

/// Snapshot format version. Increment when the layout changes.
pub const SAVE_VERSION: u32 = 1;

/// Serialized wrapper around the progress state.
#[derive(Debug, Serialize, Deserialize)]
pub struct SaveData {
    /// Snapshot format version.
    pub version: u32,
    pub progress: ProgressState,
}

#[derive(Debug, Error)]
pub enum PersistError {
    #[error("failed to read snapshot: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed snapshot: {0}")]
    Format(#[from] serde_json::Error),
    #[error("snapshot version {0} is newer than supported version {SAVE_VERSION}")]
    UnsupportedVersion(u32),
}

/// Serialize a progress state into the current snapshot format.
pub fn to_json(state: &ProgressState) -> Result<String, PersistError> {
    let save = SaveData {
        version: SAVE_VERSION,
        progress: state.clone(),
    };
    Ok(serde_json::to_string_pretty(&save)?)
}

/// Parse a snapshot, migrating older versions where needed.
pub fn from_json(json: &str) -> Result<ProgressState, PersistError> {
    let save: SaveData = serde_json::from_str(json)?;
    migrate(save)
}

/// Write a snapshot to a writer.
pub fn save_to_writer<W: Write>(state: &ProgressState, writer: &mut W) -> Result<(), PersistError> {
    let json = to_json(state)?;
    writer.write_all(json.as_bytes())?;
    Ok(())
}

/// Read a snapshot from a reader.
pub fn load_from_reader<R: Read>(reader: &mut R) -> Result<ProgressState, PersistError> {
    let mut json = String::new();
    reader.read_to_string(&mut json)?;
    from_json(&json)
}

/// Restore a progress state from an optional snapshot, falling back to the
/// first-launch default when the snapshot is missing or unusable.
pub fn restore_or_default(snapshot: Option<&str>) -> ProgressState {
    let Some(json) = snapshot else {
        tracing::debug!("no progress snapshot found, starting fresh");
        return ProgressState::default();
    };
    match from_json(json) {
        Ok(state) => state,
        Err(err) => {
            tracing::warn!(error = %err, "progress snapshot unusable, starting fresh");
            ProgressState::default()
        }
    }
}

fn migrate(save: SaveData) -> Result<ProgressState, PersistError> {
    if save.version > SAVE_VERSION {
        return Err(PersistError::UnsupportedVersion(save.version));
    }
    // Version 0 snapshots (pre-versioning) share the version 1 field
    // layout; the serde defaults on the auxiliary counters cover fields
    // they may be missing.
    Ok(save.progress)
}
