//! Timed enemy spawning inside a rectangle on the ground.
use blockfire_geom::Vec3;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::Deserialize;

use crate::CombatError;
use crate::enemy::{Enemy, EnemyId};

#[derive(Clone, Debug, Deserialize)]
pub struct SpawnerConfig {
    /// `[x, z]` centre of the spawn rectangle.
    #[serde(default = "default_center")]
    pub center: [f32; 2],
    #[serde(default = "default_extent")]
    pub width: f32,
    #[serde(default = "default_extent")]
    pub depth: f32,
    /// Maximum number of live enemies.
    #[serde(default = "default_count")]
    pub count: usize,
    #[serde(default = "default_respawn")]
    pub respawn_time: [f32; 2],
    #[serde(default = "default_speed")]
    pub speed: [f32; 2],
    #[serde(default = "default_shoot_interval")]
    pub shoot_interval: [f32; 2],
    #[serde(default = "default_spawn_y")]
    pub spawn_y: f32,
}

fn default_center() -> [f32; 2] {
    [0.0, -10.0]
}
fn default_extent() -> f32 {
    30.0
}
fn default_count() -> usize {
    5
}
fn default_respawn() -> [f32; 2] {
    [2.0, 6.0]
}
fn default_speed() -> [f32; 2] {
    [1.5, 5.0]
}
fn default_shoot_interval() -> [f32; 2] {
    [1.0, 3.0]
}
fn default_spawn_y() -> f32 {
    -1.0
}

impl Default for SpawnerConfig {
    fn default() -> Self {
        Self {
            center: default_center(),
            width: default_extent(),
            depth: default_extent(),
            count: default_count(),
            respawn_time: default_respawn(),
            speed: default_speed(),
            shoot_interval: default_shoot_interval(),
            spawn_y: default_spawn_y(),
        }
    }
}

impl SpawnerConfig {
    pub fn validate(&self) -> Result<(), CombatError> {
        check_range("respawn time", self.respawn_time)?;
        check_range("speed", self.speed)?;
        check_range("shoot interval", self.shoot_interval)?;
        check_range("width", [0.0, self.width])?;
        check_range("depth", [0.0, self.depth])?;
        Ok(())
    }
}

fn check_range(what: &'static str, [min, max]: [f32; 2]) -> Result<(), CombatError> {
    if min.is_finite() && max.is_finite() && min <= max && min >= 0.0 {
        Ok(())
    } else {
        Err(CombatError::InvalidRange { what, min, max })
    }
}

pub struct EnemySpawner {
    cfg: SpawnerConfig,
    time_until_next_spawn: f32,
    next_id: u64,
    rng: ChaCha8Rng,
}

impl EnemySpawner {
    pub fn new(cfg: SpawnerConfig, seed: u64) -> Result<Self, CombatError> {
        cfg.validate()?;
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let first = uniform(&mut rng, cfg.respawn_time);
        Ok(Self {
            cfg,
            time_until_next_spawn: first,
            next_id: 0,
            rng,
        })
    }

    pub fn config(&self) -> &SpawnerConfig {
        &self.cfg
    }

    /// Counts down and, once due and below the cap, appends one enemy.
    /// Returns the id of the spawned enemy, if any.
    pub fn update(&mut self, dt: f32, enemies: &mut Vec<Enemy>) -> Option<EnemyId> {
        self.time_until_next_spawn -= dt;
        if self.time_until_next_spawn > 0.0 || enemies.len() >= self.cfg.count {
            return None;
        }
        let [cx, cz] = self.cfg.center;
        let hw = self.cfg.width / 2.0;
        let hd = self.cfg.depth / 2.0;
        let x = uniform(&mut self.rng, [cx - hw, cx + hw]);
        let z = uniform(&mut self.rng, [cz - hd, cz + hd]);
        let speed = uniform(&mut self.rng, self.cfg.speed);
        let interval = uniform(&mut self.rng, self.cfg.shoot_interval);

        let id = EnemyId(self.next_id);
        self.next_id += 1;
        let position = Vec3::new(x, self.cfg.spawn_y, z);
        enemies.push(Enemy::new(id, position, speed, interval));
        log::info!(
            target: "combat",
            "spawned {} at ({:.1}, {:.1}, {:.1}) speed {:.2} interval {:.2}",
            id,
            x,
            position.y,
            z,
            speed,
            interval
        );
        self.time_until_next_spawn = uniform(&mut self.rng, self.cfg.respawn_time);
        Some(id)
    }
}

fn uniform(rng: &mut ChaCha8Rng, [min, max]: [f32; 2]) -> f32 {
    if min < max { rng.gen_range(min..max) } else { min }
}
