//! Read-only JSON catalog of character templates and relic definitions.
//!
//! Records live in a fixed directory layout under the configured root:
//! `characters/<name>.json` for summonable templates and `relics/<name>.json`
//! for relic definitions. The game treats them as immutable value objects;
//! the character records are additionally synced into the template table at
//! startup.

use std::fs;
use std::path::PathBuf;

use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::error::catalog::CatalogError;
use crate::rules::element::Element;

/// A summonable character definition.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TemplateRecord {
    pub name: String,
    pub element: Element,
    pub potential: i32,
    #[serde(default)]
    pub image: Option<String>,
}

/// An equippable relic definition.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RelicRecord {
    pub name: String,
    pub quality: String,
    #[serde(default)]
    pub attack_boost: i32,
    #[serde(default)]
    pub hit_points_boost: i32,
    #[serde(default)]
    pub crit_boost: i32,
    #[serde(default)]
    pub image: Option<String>,
}

/// Loads catalog records from the on-disk directory layout.
pub struct CatalogStore {
    root: PathBuf,
}

impl CatalogStore {
    /// Creates a new instance of [`CatalogStore`] rooted at the given
    /// directory.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Loads the character template record with the given name.
    pub fn character(&self, name: &str) -> Result<TemplateRecord, CatalogError> {
        self.load(self.root.join("characters").join(format!("{name}.json")), name)
    }

    /// Loads the relic record with the given name.
    pub fn relic(&self, name: &str) -> Result<RelicRecord, CatalogError> {
        self.load(self.root.join("relics").join(format!("{name}.json")), name)
    }

    /// Loads every character template record, ordered by file name.
    pub fn characters(&self) -> Result<Vec<TemplateRecord>, CatalogError> {
        self.load_dir(self.root.join("characters"))
    }

    /// Loads every relic record, ordered by file name.
    pub fn relics(&self) -> Result<Vec<RelicRecord>, CatalogError> {
        self.load_dir(self.root.join("relics"))
    }

    fn load<T: DeserializeOwned>(&self, path: PathBuf, name: &str) -> Result<T, CatalogError> {
        let contents = fs::read_to_string(&path).map_err(|source| {
            if source.kind() == std::io::ErrorKind::NotFound {
                CatalogError::RecordNotFound(name.to_string())
            } else {
                CatalogError::Io {
                    path: path.clone(),
                    source,
                }
            }
        })?;

        serde_json::from_str(&contents).map_err(|source| CatalogError::Parse { path, source })
    }

    fn load_dir<T: DeserializeOwned>(&self, dir: PathBuf) -> Result<Vec<T>, CatalogError> {
        let entries = fs::read_dir(&dir).map_err(|source| CatalogError::Io {
            path: dir.clone(),
            source,
        })?;

        let mut paths = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|source| CatalogError::Io {
                path: dir.clone(),
                source,
            })?;
            let path = entry.path();
            if path.extension().is_some_and(|extension| extension == "json") {
                paths.push(path);
            }
        }
        paths.sort();

        let mut records = Vec::with_capacity(paths.len());
        for path in paths {
            let contents = fs::read_to_string(&path).map_err(|source| CatalogError::Io {
                path: path.clone(),
                source,
            })?;
            records
                .push(serde_json::from_str(&contents).map_err(|source| CatalogError::Parse {
                    path,
                    source,
                })?);
        }

        Ok(records)
    }
}
