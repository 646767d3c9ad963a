//! Game configuration loaded from TOML. Every field falls back to the built-in tuning.
use std::fs;
use std::path::Path;

use blockfire_blocks::BlockTexture;
use blockfire_combat::SpawnerConfig;
use blockfire_world::WorldGenConfig;
use serde::Deserialize;

use crate::error::ConfigError;

#[derive(Clone, Debug, Default, Deserialize)]
pub struct GameConfig {
    #[serde(default)]
    pub window: WindowConfig,
    #[serde(default)]
    pub world: WorldGenConfig,
    #[serde(default)]
    pub player: PlayerConfig,
    #[serde(default)]
    pub spawner: SpawnerConfig,
    #[serde(default)]
    pub inventory: InventoryConfig,
}

#[derive(Clone, Debug, Deserialize)]
pub struct WindowConfig {
    #[serde(default = "default_width")]
    pub width: i32,
    #[serde(default = "default_height")]
    pub height: i32,
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default = "default_fov")]
    pub fov: f32,
}

fn default_width() -> i32 {
    800
}
fn default_height() -> i32 {
    600
}
fn default_title() -> String {
    "Blockfire".to_string()
}
fn default_fov() -> f32 {
    65.0
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            title: default_title(),
            fov: default_fov(),
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct PlayerConfig {
    #[serde(default = "default_spawn")]
    pub spawn: [f32; 3],
    #[serde(default = "default_walking_speed")]
    pub walking_speed: f32,
    #[serde(default = "default_gravity")]
    pub gravity: f32,
    #[serde(default = "default_jump_height")]
    pub max_jump_height: f32,
    #[serde(default = "default_terminal_velocity")]
    pub terminal_velocity: f32,
    /// Body height in whole cells.
    #[serde(default = "default_player_height")]
    pub height: u32,
}

fn default_spawn() -> [f32; 3] {
    [0.0, 1.5, 5.0]
}
fn default_walking_speed() -> f32 {
    5.0
}
fn default_gravity() -> f32 {
    20.0
}
fn default_jump_height() -> f32 {
    1.0
}
fn default_terminal_velocity() -> f32 {
    50.0
}
fn default_player_height() -> u32 {
    2
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            spawn: default_spawn(),
            walking_speed: default_walking_speed(),
            gravity: default_gravity(),
            max_jump_height: default_jump_height(),
            terminal_velocity: default_terminal_velocity(),
            height: default_player_height(),
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct InventoryConfig {
    #[serde(default = "default_blocks")]
    pub blocks: Vec<BlockTexture>,
}

fn default_blocks() -> Vec<BlockTexture> {
    vec![BlockTexture::Brick, BlockTexture::Grass, BlockTexture::Sand]
}

impl Default for InventoryConfig {
    fn default() -> Self {
        Self {
            blocks: default_blocks(),
        }
    }
}

impl GameConfig {
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let cfg: GameConfig = toml::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let s = fs::read_to_string(path)?;
        Self::from_toml_str(&s)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.inventory.blocks.is_empty() {
            return Err(ConfigError::EmptyInventory);
        }
        for (field, value) in [
            ("player.walking_speed", self.player.walking_speed),
            ("player.gravity", self.player.gravity),
            ("player.max_jump_height", self.player.max_jump_height),
            ("player.terminal_velocity", self.player.terminal_velocity),
            ("player.height", self.player.height as f32),
        ] {
            if value.is_nan() || value <= 0.0 {
                return Err(ConfigError::NonPositive { field, value });
            }
        }
        self.spawner.validate()?;
        Ok(())
    }
}
