//! Temporary on-disk catalog layouts for store tests.
//!
//! Builds a throwaway directory with the `characters/` and `relics/` layout the
//! catalog store expects, so tests can exercise real file reads without touching
//! a checked-in asset directory.

use std::path::{Path, PathBuf};

use serde_json::json;
use tempfile::TempDir;

use crate::error::TestError;

pub struct CatalogFixture {
    dir: TempDir,
}

impl CatalogFixture {
    pub fn new() -> Result<Self, TestError> {
        let dir = tempfile::tempdir()?;
        std::fs::create_dir(dir.path().join("characters"))?;
        std::fs::create_dir(dir.path().join("relics"))?;

        Ok(CatalogFixture { dir })
    }

    /// Root directory to hand to the catalog store under test.
    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    /// Write a character template record under `characters/<name>.json`.
    pub fn write_character(
        &self,
        name: &str,
        element: &str,
        potential: i32,
    ) -> Result<PathBuf, TestError> {
        let record = json!({
            "name": name,
            "element": element,
            "potential": potential,
        });

        let path = self
            .dir
            .path()
            .join("characters")
            .join(format!("{name}.json"));
        std::fs::write(&path, serde_json::to_vec_pretty(&record)?)?;

        Ok(path)
    }

    /// Write a relic record under `relics/<name>.json`.
    pub fn write_relic(
        &self,
        name: &str,
        quality: &str,
        attack_boost: i32,
        hit_points_boost: i32,
        crit_boost: i32,
    ) -> Result<PathBuf, TestError> {
        let record = json!({
            "name": name,
            "quality": quality,
            "attack_boost": attack_boost,
            "hit_points_boost": hit_points_boost,
            "crit_boost": crit_boost,
        });

        let path = self.dir.path().join("relics").join(format!("{name}.json"));
        std::fs::write(&path, serde_json::to_vec_pretty(&record)?)?;

        Ok(path)
    }

    /// Write arbitrary bytes at a path relative to the catalog root, for
    /// malformed-record tests.
    pub fn write_raw(&self, relative: &str, contents: &str) -> Result<PathBuf, TestError> {
        let path = self.dir.path().join(relative);
        std::fs::write(&path, contents)?;

        Ok(path)
    }
}
