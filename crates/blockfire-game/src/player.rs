//! The player as explicit state: pose, movement intent, vertical speed, health and inventory.
use blockfire_blocks::BlockTexture;
use blockfire_geom::Vec3;
use blockfire_world::SectorCoord;

use crate::config::PlayerConfig;

pub const PLAYER_HEALTH: i32 = 100;
pub const MOUSE_SENSITIVITY: f32 = 0.15;

/// Movement tuning derived from `PlayerConfig`.
#[derive(Clone, Copy, Debug)]
pub struct PhysicsParams {
    pub walking_speed: f32,
    pub gravity: f32,
    pub jump_speed: f32,
    pub terminal_velocity: f32,
    pub height: u32,
}

impl PhysicsParams {
    pub fn from_config(cfg: &PlayerConfig) -> Self {
        Self {
            walking_speed: cfg.walking_speed,
            gravity: cfg.gravity,
            jump_speed: (2.0 * cfg.gravity * cfg.max_jump_height).sqrt(),
            terminal_velocity: cfg.terminal_velocity,
            height: cfg.height,
        }
    }
}

impl Default for PhysicsParams {
    fn default() -> Self {
        Self::from_config(&PlayerConfig::default())
    }
}

#[derive(Clone, Debug)]
pub struct PlayerState {
    /// Eye position; the body extends `height` cells down from here.
    pub position: Vec3,
    /// Degrees. Yaw 0 looks down -Z; positive pitch looks up.
    pub yaw: f32,
    pub pitch: f32,
    /// `[forward, side]`, each in -1..=1. Negative forward is "W".
    pub strafe: [i32; 2],
    /// Vertical speed; exactly 0 while standing on ground.
    pub dy: f32,
    pub health: i32,
    pub inventory: Vec<BlockTexture>,
    pub selected: BlockTexture,
    pub pointer_locked: bool,
    /// Sector the streaming window is centred on; `None` before the first tick.
    pub sector: Option<SectorCoord>,
}

impl PlayerState {
    pub fn new(spawn: Vec3, inventory: Vec<BlockTexture>) -> Self {
        let selected = inventory.first().copied().unwrap_or(BlockTexture::Brick);
        Self {
            position: spawn,
            yaw: 0.0,
            pitch: 0.0,
            strafe: [0, 0],
            dy: 0.0,
            health: PLAYER_HEALTH,
            inventory,
            selected,
            pointer_locked: true,
            sector: None,
        }
    }

    pub fn sight_vector(&self) -> Vec3 {
        let m = self.pitch.to_radians().cos();
        let dy = self.pitch.to_radians().sin();
        let yaw = (self.yaw - 90.0).to_radians();
        Vec3::new(yaw.cos() * m, dy, yaw.sin() * m)
    }

    /// Unit horizontal walking direction, or zero when no movement key is held.
    pub fn motion_vector(&self) -> Vec3 {
        if self.strafe == [0, 0] {
            return Vec3::ZERO;
        }
        let strafe = (self.strafe[0] as f32).atan2(self.strafe[1] as f32).to_degrees();
        let angle = (self.yaw + strafe).to_radians();
        Vec3::new(angle.cos(), 0.0, angle.sin())
    }

    pub fn look(&mut self, dx: f32, dy: f32) {
        self.yaw += dx * MOUSE_SENSITIVITY;
        self.pitch = (self.pitch + dy * MOUSE_SENSITIVITY).clamp(-90.0, 90.0);
    }

    /// Number row: `1` picks the first slot, wrapping by inventory size, so `0` is the last.
    pub fn select_digit(&mut self, digit: u8) {
        if self.inventory.is_empty() {
            return;
        }
        let slot = (digit as i32 - 1).rem_euclid(self.inventory.len() as i32) as usize;
        self.selected = self.inventory[slot];
    }

    #[inline]
    pub fn on_ground(&self) -> bool {
        self.dy == 0.0
    }
}
