//! Bullet-versus-body hit resolution with deferred removal.
use blockfire_geom::{Aabb, Vec3};

use crate::bullet::{Bullet, BulletOwner};
use crate::enemy::{Enemy, EnemyId};

pub const PLAYER_BULLET_DAMAGE: i32 = 20;
pub const ENEMY_BULLET_DAMAGE: i32 = 10;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HitReport {
    pub player_damage: i32,
    pub enemies_hit: Vec<EnemyId>,
    pub enemies_killed: Vec<EnemyId>,
    pub bullets_consumed: usize,
}

pub fn player_aabb(position: Vec3, height: f32) -> Aabb {
    Aabb::from_feet(position, 0.5, height)
}

/// Applies each bullet to at most one body. Player bullets damage the first
/// enemy whose box contains them; enemy bullets damage the player. Consumed
/// bullets and dead enemies are removed after the scan.
pub fn resolve_hits(
    bullets: &mut Vec<Bullet>,
    enemies: &mut Vec<Enemy>,
    player_position: Vec3,
    player_height: f32,
) -> HitReport {
    let mut report = HitReport::default();
    let player_box = player_aabb(player_position, player_height);
    let mut consumed = vec![false; bullets.len()];

    for (i, bullet) in bullets.iter().enumerate() {
        match bullet.owner {
            BulletOwner::Player => {
                if let Some(enemy) = enemies
                    .iter_mut()
                    .find(|e| e.aabb().contains_point(bullet.position))
                {
                    enemy.health -= PLAYER_BULLET_DAMAGE;
                    consumed[i] = true;
                    report.enemies_hit.push(enemy.id);
                    log::info!(target: "combat", "{} hit, health now {}", enemy.id, enemy.health);
                }
            }
            BulletOwner::Enemy(_) => {
                if player_box.contains_point(bullet.position) {
                    report.player_damage += ENEMY_BULLET_DAMAGE;
                    consumed[i] = true;
                    log::info!(target: "combat", "player hit by {:?}", bullet.owner);
                }
            }
        }
    }

    report.bullets_consumed = consumed.iter().filter(|c| **c).count();
    let mut flags = consumed.into_iter();
    bullets.retain(|_| !flags.next().unwrap_or(false));

    enemies.retain(|e| {
        if e.is_dead() {
            report.enemies_killed.push(e.id);
            log::info!(target: "combat", "{} defeated", e.id);
            false
        } else {
            true
        }
    });
    report
}
