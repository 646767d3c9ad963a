//! Texture atlas: tile layout per block texture and the UV quads derived from it.
use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::config::{AtlasConfig, TileConfig};
use crate::types::BlockTexture;

/// 6 faces × 4 corners × (u, v), ordered top, bottom, then the four sides.
pub type FaceUvs = [f32; 48];

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Tile {
    pub col: u32,
    pub row: u32,
}

impl Tile {
    pub const fn new(col: u32, row: u32) -> Self {
        Self { col, row }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct TileLayout {
    pub top: Tile,
    pub bottom: Tile,
    pub side: Tile,
}

impl TileLayout {
    pub const fn uniform(tile: Tile) -> Self {
        Self {
            top: tile,
            bottom: tile,
            side: tile,
        }
    }

    fn tiles(&self) -> [Tile; 3] {
        [self.top, self.bottom, self.side]
    }
}

impl From<TileConfig> for TileLayout {
    fn from(c: TileConfig) -> Self {
        Self {
            top: Tile::new(c.top[0], c.top[1]),
            bottom: Tile::new(c.bottom[0], c.bottom[1]),
            side: Tile::new(c.side[0], c.side[1]),
        }
    }
}

/// Corners of one tile on an `n`×`n` grid, counter-clockwise from bottom-left.
pub fn tex_coord(tile: Tile, n: u32) -> [f32; 8] {
    let m = 1.0 / n as f32;
    let dx = tile.col as f32 * m;
    let dy = tile.row as f32 * m;
    [dx, dy, dx + m, dy, dx + m, dy + m, dx, dy + m]
}

pub fn tex_coords(layout: TileLayout, n: u32) -> FaceUvs {
    let mut out = [0.0; 48];
    let top = tex_coord(layout.top, n);
    let bottom = tex_coord(layout.bottom, n);
    let side = tex_coord(layout.side, n);
    out[0..8].copy_from_slice(&top);
    out[8..16].copy_from_slice(&bottom);
    for face in 0..4 {
        let start = 16 + face * 8;
        out[start..start + 8].copy_from_slice(&side);
    }
    out
}

#[derive(Debug, Error)]
pub enum AtlasError {
    #[error("reading atlas config: {0}")]
    Io(#[from] std::io::Error),
    #[error("parsing atlas config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("atlas grid must be at least 1")]
    EmptyGrid,
    #[error("tile ({col}, {row}) for '{texture}' lies outside the {grid}x{grid} grid")]
    TileOutOfRange {
        texture: BlockTexture,
        col: u32,
        row: u32,
        grid: u32,
    },
}

/// Resolved atlas: grid size, image name and a UV table for every texture.
#[derive(Clone, Debug)]
pub struct BlockAtlas {
    grid: u32,
    texture_file: String,
    layouts: [TileLayout; 4],
    uvs: [FaceUvs; 4],
}

impl BlockAtlas {
    /// Built-in layout for the bundled 4×4 texture sheet.
    pub fn builtin_layout(texture: BlockTexture) -> TileLayout {
        match texture {
            BlockTexture::Grass => TileLayout {
                top: Tile::new(1, 0),
                bottom: Tile::new(0, 1),
                side: Tile::new(0, 0),
            },
            BlockTexture::Sand => TileLayout::uniform(Tile::new(1, 1)),
            BlockTexture::Brick => TileLayout::uniform(Tile::new(2, 0)),
            BlockTexture::Stone => TileLayout::uniform(Tile::new(2, 1)),
        }
    }

    pub fn from_config(cfg: AtlasConfig) -> Result<Self, AtlasError> {
        let grid = cfg.atlas.grid;
        if grid == 0 {
            return Err(AtlasError::EmptyGrid);
        }
        let mut layouts = BlockTexture::ALL.map(Self::builtin_layout);
        for (texture, tile_cfg) in cfg.tiles {
            layouts[texture.index()] = tile_cfg.into();
        }
        for texture in BlockTexture::ALL {
            for tile in layouts[texture.index()].tiles() {
                if tile.col >= grid || tile.row >= grid {
                    return Err(AtlasError::TileOutOfRange {
                        texture,
                        col: tile.col,
                        row: tile.row,
                        grid,
                    });
                }
            }
        }
        let uvs = layouts.map(|l| tex_coords(l, grid));
        Ok(Self {
            grid,
            texture_file: cfg.atlas.texture,
            layouts,
            uvs,
        })
    }

    pub fn from_toml_str(toml_str: &str) -> Result<Self, AtlasError> {
        let cfg: AtlasConfig = toml::from_str(toml_str)?;
        Self::from_config(cfg)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, AtlasError> {
        let s = fs::read_to_string(path)?;
        Self::from_toml_str(&s)
    }

    #[inline]
    pub fn uvs(&self, texture: BlockTexture) -> &FaceUvs {
        &self.uvs[texture.index()]
    }

    #[inline]
    pub fn layout(&self, texture: BlockTexture) -> TileLayout {
        self.layouts[texture.index()]
    }

    pub fn grid(&self) -> u32 {
        self.grid
    }

    pub fn texture_file(&self) -> &str {
        &self.texture_file
    }
}

impl Default for BlockAtlas {
    fn default() -> Self {
        let layouts = BlockTexture::ALL.map(Self::builtin_layout);
        Self {
            grid: 4,
            texture_file: "texture.png".to_string(),
            layouts,
            uvs: layouts.map(|l| tex_coords(l, 4)),
        }
    }
}
