//! Parsed level collections

use std::path::Path;

use serde::{Deserialize, Serialize};
use slither_core::{LevelLayout, LevelSource};

use crate::catalogue::builtin;
use crate::error::LevelError;
use crate::parse::{parse_level, LevelDef};

/// JSON level pack: `{ "levels": [ { "name", "width", "height", "rows" } ] }`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelPack {
    pub levels: Vec<LevelDef>,
}

impl LevelPack {
    pub fn from_json_str(json: &str) -> Result<Self, LevelError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, LevelError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| LevelError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let pack = Self::from_json_str(&text)?;
        log::info!("read {} levels from {}", pack.levels.len(), path.display());
        Ok(pack)
    }
}

/// Ordered, immutable set of parsed levels
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LevelRegistry {
    layouts: Vec<LevelLayout>,
}

impl LevelRegistry {
    /// Parse every definition; the first bad one fails the whole set
    pub fn from_defs(defs: &[LevelDef]) -> Result<Self, LevelError> {
        let layouts = defs.iter().map(parse_level).collect::<Result<Vec<_>, _>>()?;
        log::debug!("registered {} levels", layouts.len());
        Ok(Self { layouts })
    }

    pub fn builtin() -> Result<Self, LevelError> {
        Self::from_defs(&builtin())
    }

    pub fn from_pack(pack: &LevelPack) -> Result<Self, LevelError> {
        Self::from_defs(&pack.levels)
    }

    pub fn len(&self) -> usize {
        self.layouts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layouts.is_empty()
    }
}

impl LevelSource for LevelRegistry {
    fn level_count(&self) -> usize {
        self.layouts.len()
    }

    fn layout(&self, index: usize) -> Option<&LevelLayout> {
        self.layouts.get(index)
    }
}
