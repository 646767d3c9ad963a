use std::fmt;

use blockfire_geom::{Aabb, Vec3};

use crate::bullet::{Bullet, BulletOwner, ENEMY_BULLET_SPEED};

pub const ENEMY_HEALTH: i32 = 100;
pub const ENEMY_HEIGHT: f32 = 2.0;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EnemyId(pub u64);

impl fmt::Display for EnemyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "enemy#{}", self.0)
    }
}

/// Two stacked cubes that walk toward the player on X/Z and shoot at a fixed interval.
#[derive(Clone, Debug)]
pub struct Enemy {
    pub id: EnemyId,
    /// Centre of the lower cube's footprint at its base.
    pub position: Vec3,
    pub health: i32,
    pub speed: f32,
    pub shoot_interval: f32,
    pub time_since_shot: f32,
}

impl Enemy {
    pub fn new(id: EnemyId, position: Vec3, speed: f32, shoot_interval: f32) -> Self {
        Self {
            id,
            position,
            health: ENEMY_HEALTH,
            speed,
            shoot_interval,
            time_since_shot: 0.0,
        }
    }

    pub fn update(&mut self, dt: f32, player_position: Vec3, bullets: &mut Vec<Bullet>) {
        let to_player = (player_position - self.position).horizontal();
        let dist = to_player.length();
        if dist > 0.0 {
            self.position += to_player * (self.speed * dt / dist);
        }

        self.time_since_shot += dt;
        if self.time_since_shot >= self.shoot_interval {
            self.time_since_shot = 0.0;
            let muzzle = self.position + Vec3::UP;
            match Bullet::new(
                muzzle,
                player_position - muzzle,
                ENEMY_BULLET_SPEED,
                BulletOwner::Enemy(self.id),
            ) {
                Ok(b) => bullets.push(b),
                Err(e) => log::debug!(target: "combat", "{} held fire: {}", self.id, e),
            }
        }
    }

    pub fn aabb(&self) -> Aabb {
        Aabb::from_feet(self.position, 0.5, ENEMY_HEIGHT)
    }

    #[inline]
    pub fn is_dead(&self) -> bool {
        self.health <= 0
    }
}
