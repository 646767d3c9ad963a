//! TOML shape of the atlas description.
use std::collections::BTreeMap;

use serde::Deserialize;

use crate::types::BlockTexture;

#[derive(Debug, Clone, Deserialize)]
pub struct AtlasConfig {
    #[serde(default)]
    pub atlas: AtlasSection,
    #[serde(default)]
    pub tiles: BTreeMap<BlockTexture, TileConfig>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AtlasSection {
    #[serde(default = "default_grid")]
    pub grid: u32,
    /// Image file, relative to the assets directory.
    #[serde(default = "default_texture")]
    pub texture: String,
}

impl Default for AtlasSection {
    fn default() -> Self {
        Self {
            grid: default_grid(),
            texture: default_texture(),
        }
    }
}

fn default_grid() -> u32 {
    4
}

fn default_texture() -> String {
    "texture.png".to_string()
}

/// Tile coordinates are `[column, row]` counted from the bottom-left tile.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct TileConfig {
    pub top: [u32; 2],
    pub bottom: [u32; 2],
    pub side: [u32; 2],
}
