//! Image naming convention.
//!
//! Every map needs two images next to each other in the asset directory:
//! `<Name>.png` and `<Name>-black.png`. The picker's ready glyph is
//! `Dice.png`. Missing files are not errors; callers render a placeholder.

use std::path::{Path, PathBuf};

use crate::item::Visual;

const DICE_FILE: &str = "Dice.png";
const EXCLUDED_SUFFIX: &str = "-black";
const EXTENSION: &str = "png";

/// Something the UI wants to draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetKey<'a> {
    Map { name: &'a str, visual: Visual },
    Dice,
}

/// Resolves asset keys to files in one directory.
#[derive(Debug, Clone)]
pub struct AssetCatalog {
    dir: PathBuf,
}

impl AssetCatalog {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Where the asset should live, whether or not it exists.
    pub fn path(&self, key: AssetKey<'_>) -> PathBuf {
        match key {
            AssetKey::Dice => self.dir.join(DICE_FILE),
            AssetKey::Map { name, visual: Visual::Normal } => {
                self.dir.join(format!("{}.{}", name, EXTENSION))
            }
            AssetKey::Map { name, visual: Visual::Excluded } => {
                self.dir.join(format!("{}{}.{}", name, EXCLUDED_SUFFIX, EXTENSION))
            }
        }
    }

    /// The asset's path if the file exists.
    pub fn resolve(&self, key: AssetKey<'_>) -> Option<PathBuf> {
        let path = self.path(key);
        if path.is_file() {
            Some(path)
        } else {
            tracing::warn!("Missing asset: {}", path.display());
            None
        }
    }
}
