//! Save/load of in-progress orders as raw-field snapshots.
//!
//! The snapshot is the same flat `FieldMap` the serializer consumes, so
//! loading is a pure restore with no re-interpretation of values. One slot:
//! saving overwrites the previous snapshot.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use railplan_core::prelude::*;
use railplan_core::FieldMap;

const STORE_FILENAME: &str = "saved_project.json";
const RAILPLAN_DIR: &str = "railplan";

/// A saved order snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedProject {
    /// When the snapshot was taken, RFC 3339 local time.
    pub saved_at: String,
    pub fields: FieldMap,
}

impl SavedProject {
    pub fn now(fields: FieldMap) -> Self {
        Self {
            saved_at: chrono::Local::now().to_rfc3339(),
            fields,
        }
    }
}

/// Default snapshot path under the user data directory.
pub fn store_path() -> PathBuf {
    let base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    base.join(RAILPLAN_DIR).join(STORE_FILENAME)
}

/// Write a snapshot to `path`, creating parent directories as needed.
pub fn save_to(path: &Path, snapshot: &SavedProject) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(snapshot)?;
    std::fs::write(path, json)?;
    info!(path = %path.display(), "project snapshot saved");
    Ok(())
}

/// Read a snapshot from `path`.
pub fn load_from(path: &Path) -> Result<SavedProject> {
    let content = std::fs::read_to_string(path)?;
    let snapshot = serde_json::from_str(&content)?;
    Ok(snapshot)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_fields() -> FieldMap {
        let mut fields = FieldMap::new();
        fields.insert("titre_plan".into(), "Balcon Est".into());
        fields.insert("nombre_morceaux".into(), "2".into());
        fields.insert("morceau_0_nombre_sections".into(), "1".into());
        fields
    }

    #[test]
    fn snapshot_round_trips_through_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("saved_project.json");

        save_to(&path, &SavedProject::now(sample_fields())).unwrap();
        let loaded = load_from(&path).unwrap();
        assert_eq!(loaded.fields, sample_fields());
        assert!(!loaded.saved_at.is_empty());
    }

    #[test]
    fn saving_overwrites_the_previous_snapshot() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("saved_project.json");

        save_to(&path, &SavedProject::now(sample_fields())).unwrap();
        let mut newer = sample_fields();
        newer.insert("titre_plan".into(), "Balcon Ouest".into());
        save_to(&path, &SavedProject::now(newer)).unwrap();

        let loaded = load_from(&path).unwrap();
        assert_eq!(loaded.fields.get("titre_plan").unwrap(), "Balcon Ouest");
    }

    #[test]
    fn loading_a_missing_snapshot_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_from(&dir.path().join("absent.json"));
        assert!(matches!(result, Err(Error::Io(_))));
    }
}
