//! The component store: a JSON file mapping component names to records.
//!
//! The store is externally owned state with a read-modify-write cycle:
//! the whole file is loaded, and written back whole after one key changes.
//! The core extraction pipeline never touches it.

use std::collections::BTreeMap;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// `scaleY` value implied when a record omits the field.
pub const DEFAULT_SCALE_Y: f64 = -0.2;

/// One named component.
///
/// `source` and `path` are required; everything else is optional and
/// omitted from the file when absent. Fields this tool does not know about
/// are carried through a rewrite untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentRecord {
    /// Provenance tag, e.g. `"持_left"`.
    pub source: String,
    /// Cleaned path data.
    pub path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cut_x: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bounds: Option<[f64; 4]>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(rename = "scaleY", default, skip_serializing_if = "Option::is_none")]
    pub scale_y: Option<f64>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl ComponentRecord {
    pub fn new(source: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            path: path.into(),
            cut_x: None,
            bounds: None,
            note: None,
            scale_y: None,
            extra: serde_json::Map::new(),
        }
    }
}

/// Errors from loading or saving the store file.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("cannot read component store {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot write component store {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("component store {} is not valid JSON", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// In-memory view of one store file.
#[derive(Debug, Clone)]
pub struct Store {
    path: PathBuf,
    components: BTreeMap<String, ComponentRecord>,
}

impl Store {
    /// Load a store file; a missing file is an empty store.
    pub fn load(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        match std::fs::read_to_string(&path) {
            Ok(text) => {
                let components = serde_json::from_str(&text).map_err(|source| StoreError::Json {
                    path: path.clone(),
                    source,
                })?;
                Ok(Self { path, components })
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Self {
                path,
                components: BTreeMap::new(),
            }),
            Err(source) => Err(StoreError::Read { path, source }),
        }
    }

    pub fn file_path(&self) -> &Path {
        &self.path
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&ComponentRecord> {
        self.components.get(name)
    }

    pub fn upsert(&mut self, name: impl Into<String>, record: ComponentRecord) {
        self.components.insert(name.into(), record);
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &ComponentRecord)> {
        self.components.iter()
    }

    /// Write the whole store back to the file it was loaded from.
    pub fn save(&self) -> Result<(), StoreError> {
        self.save_as(&self.path)
    }

    /// Write the whole store to another file.
    pub fn save_as(&self, path: &Path) -> Result<(), StoreError> {
        let text =
            serde_json::to_string_pretty(&self.components).map_err(|source| StoreError::Json {
                path: path.to_path_buf(),
                source,
            })?;
        std::fs::write(path, text + "\n").map_err(|source| StoreError::Write {
            path: path.to_path_buf(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_is_an_empty_store() {
        let dir = tempfile::tempdir().unwrap();
        let store = Store::load(dir.path().join("radicals.json")).unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn round_trip_preserves_records() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("radicals.json");

        let mut store = Store::load(&file).unwrap();
        let mut record = ComponentRecord::new("持_left", "M 0 0 L 10 0 Z");
        record.cut_x = Some(412.5);
        record.bounds = Some([0.0, -12.0, 400.0, 760.0]);
        store.upsert("手", record.clone());
        store.save().unwrap();

        let reloaded = Store::load(&file).unwrap();
        assert_eq!(reloaded.len(), 1);
        assert_eq!(reloaded.get("手"), Some(&record));
    }

    #[test]
    fn absent_optionals_stay_out_of_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("radicals.json");

        let mut store = Store::load(&file).unwrap();
        store.upsert("白", ComponentRecord::new("白_manual", "M 0 0"));
        store.save().unwrap();

        let text = std::fs::read_to_string(&file).unwrap();
        assert!(text.contains("\"source\""));
        assert!(!text.contains("cut_x"));
        assert!(!text.contains("scaleY"));
        assert!(!text.contains("note"));
    }

    #[test]
    fn unknown_fields_survive_a_rewrite() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("radicals.json");
        std::fs::write(
            &file,
            r#"{"水": {"source": "水_manual", "path": "M 0 0", "review": true}}"#,
        )
        .unwrap();

        let mut store = Store::load(&file).unwrap();
        store.upsert("火", ComponentRecord::new("火_manual", "M 1 1"));
        store.save().unwrap();

        let text = std::fs::read_to_string(&file).unwrap();
        assert!(text.contains("\"review\""));
        assert!(text.contains("\"火\""));
    }

    #[test]
    fn invalid_json_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("radicals.json");
        std::fs::write(&file, "not json").unwrap();
        assert!(matches!(
            Store::load(&file),
            Err(StoreError::Json { .. })
        ));
    }
}
