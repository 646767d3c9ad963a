use blockfire_geom::Vec3;

use crate::CombatError;
use crate::enemy::EnemyId;

pub const BULLET_SIZE: f32 = 0.1;
pub const BULLET_LIFETIME: f32 = 3.0;
pub const PLAYER_BULLET_SPEED: f32 = 30.0;
pub const ENEMY_BULLET_SPEED: f32 = 20.0;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum BulletOwner {
    Player,
    Enemy(EnemyId),
}

#[derive(Clone, Debug)]
pub struct Bullet {
    pub position: Vec3,
    /// Unit length.
    pub direction: Vec3,
    pub speed: f32,
    pub owner: BulletOwner,
    pub size: f32,
    pub age: f32,
    pub lifetime: f32,
}

impl Bullet {
    pub fn new(
        position: Vec3,
        direction: Vec3,
        speed: f32,
        owner: BulletOwner,
    ) -> Result<Self, CombatError> {
        let len = direction.length();
        if len <= 0.0 || !len.is_finite() {
            return Err(CombatError::DegenerateDirection);
        }
        Ok(Self {
            position,
            direction: direction / len,
            speed,
            owner,
            size: BULLET_SIZE,
            age: 0.0,
            lifetime: BULLET_LIFETIME,
        })
    }

    pub fn update(&mut self, dt: f32) {
        self.position += self.direction * (self.speed * dt);
        self.age += dt;
    }

    #[inline]
    pub fn expired(&self) -> bool {
        self.age > self.lifetime
    }
}
