//! Bullets, enemies, the enemy spawner and hit resolution.
#![forbid(unsafe_code)]

pub mod bullet;
pub mod enemy;
pub mod hits;
pub mod spawner;

pub use bullet::{
    BULLET_LIFETIME, BULLET_SIZE, Bullet, BulletOwner, ENEMY_BULLET_SPEED, PLAYER_BULLET_SPEED,
};
pub use enemy::{ENEMY_HEALTH, Enemy, EnemyId};
pub use hits::{ENEMY_BULLET_DAMAGE, HitReport, PLAYER_BULLET_DAMAGE, player_aabb, resolve_hits};
pub use spawner::{EnemySpawner, SpawnerConfig};

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CombatError {
    #[error("bullet direction has zero length")]
    DegenerateDirection,
    #[error("invalid {what} range [{min}, {max}]")]
    InvalidRange {
        what: &'static str,
        min: f32,
        max: f32,
    },
}
