//! Flat starting terrain: a grass floor over stone, ringed by stone walls.
use std::fs;
use std::path::Path;

use blockfire_blocks::BlockTexture;
use serde::Deserialize;

use crate::coords::{BlockPos, STREAM_PAD};
use crate::error::Result;
use crate::geometry::GeometrySink;
use crate::world::World;

#[derive(Clone, Debug, Deserialize)]
pub struct WorldGenConfig {
    /// Floor spans `-half_size..=half_size` on X and Z; walls sit on the edge.
    #[serde(default = "default_half_size")]
    pub half_size: i32,
    /// Grass lies at `base_y - 2`, stone at `base_y - 3`.
    #[serde(default)]
    pub base_y: i32,
    /// Walls rise from the floor up to `base_y + wall_top`.
    #[serde(default = "default_wall_top")]
    pub wall_top: i32,
    #[serde(default = "default_sector_pad")]
    pub sector_pad: i32,
}

fn default_half_size() -> i32 {
    80
}
fn default_wall_top() -> i32 {
    2
}
fn default_sector_pad() -> i32 {
    STREAM_PAD
}

impl Default for WorldGenConfig {
    fn default() -> Self {
        Self {
            half_size: default_half_size(),
            base_y: 0,
            wall_top: default_wall_top(),
            sector_pad: default_sector_pad(),
        }
    }
}

impl WorldGenConfig {
    pub fn from_toml_str(s: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    pub fn from_path(path: &Path) -> std::result::Result<Self, Box<dyn std::error::Error>> {
        let s = fs::read_to_string(path)?;
        Ok(Self::from_toml_str(&s)?)
    }
}

/// Populates `world` with queued (non-immediate) adds. Returns the number of blocks placed.
pub fn generate<S: GeometrySink>(world: &mut World<S>, cfg: &WorldGenConfig) -> Result<usize> {
    let n = cfg.half_size.max(0);
    let y = cfg.base_y;
    let mut placed = 0;
    for x in -n..=n {
        for z in -n..=n {
            let border = x.abs() == n || z.abs() == n;
            let surface = if border { BlockTexture::Stone } else { BlockTexture::Grass };
            placed += world.add_block(BlockPos::new(x, y - 2, z), surface, false)? as usize;
            let base = BlockPos::new(x, y - 3, z);
            placed += world.add_block(base, BlockTexture::Stone, false)? as usize;
            if border {
                for dy in -1..=cfg.wall_top {
                    let wall = BlockPos::new(x, y + dy, z);
                    placed += world.add_block(wall, BlockTexture::Stone, false)? as usize;
                }
            }
        }
    }
    log::info!(
        "generated world: {} blocks, half size {}, {} mesh ops queued",
        placed,
        n,
        world.queue_len()
    );
    Ok(placed)
}
