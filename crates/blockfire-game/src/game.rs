//! Fixed-timestep driver tying the world, the player and the combat entities together.
use blockfire_blocks::BlockAtlas;
use blockfire_combat::{Bullet, BulletOwner, Enemy, EnemySpawner, PLAYER_BULLET_SPEED, resolve_hits};
use blockfire_geom::Vec3;
use blockfire_world::{
    COLLISION_PAD, GeometryBatch, MAX_HIT_DISTANCE, RayHit, SectorCoord, TICK_BUDGET, World,
    collide, generate,
};

use crate::config::GameConfig;
use crate::error::GameError;
use crate::event::EventQueue;
use crate::input::{InputEvent, Key, MouseButton};
use crate::player::{PhysicsParams, PlayerState};

pub const TICKS_PER_SEC: u32 = 60;
/// Physics sub-steps per tick.
pub const SUBSTEPS: u32 = 8;
const MAX_TICK_DT: f32 = 0.2;

pub struct Game {
    pub world: World,
    pub player: PlayerState,
    pub physics: PhysicsParams,
    pub bullets: Vec<Bullet>,
    pub enemies: Vec<Enemy>,
    spawner: EnemySpawner,
    events: EventQueue,
    ticks: u64,
}

impl Game {
    pub fn new(cfg: &GameConfig, seed: u64) -> Result<Self, GameError> {
        Self::with_atlas(cfg, seed, BlockAtlas::default())
    }

    /// Generates the world (all geometry queued) and places the player at the spawn point.
    pub fn with_atlas(
        cfg: &GameConfig,
        seed: u64,
        atlas: BlockAtlas,
    ) -> Result<Self, GameError> {
        cfg.validate()?;
        let mut world =
            World::new(GeometryBatch::new(), atlas).with_stream_pad(cfg.world.sector_pad);
        generate(&mut world, &cfg.world)?;
        let [sx, sy, sz] = cfg.player.spawn;
        let player = PlayerState::new(Vec3::new(sx, sy, sz), cfg.inventory.blocks.clone());
        let spawner = EnemySpawner::new(cfg.spawner.clone(), seed)?;
        log::info!(
            "game ready: {} blocks, spawn ({:.1}, {:.1}, {:.1}), seed {}",
            world.len(),
            sx,
            sy,
            sz,
            seed
        );
        Ok(Self {
            world,
            player,
            physics: PhysicsParams::from_config(&cfg.player),
            bullets: Vec::new(),
            enemies: Vec::new(),
            spawner,
            events: EventQueue::new(),
            ticks: 0,
        })
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Queues an event for the next `tick`.
    pub fn push_event(&mut self, ev: InputEvent) {
        let id = self.events.emit_now(ev);
        log::trace!(target: "events", "queued #{} {:?}", id, ev);
    }

    pub fn pending_events(&self) -> usize {
        self.events.len()
    }

    pub fn handle_event(&mut self, ev: InputEvent) -> Result<(), GameError> {
        match ev {
            InputEvent::KeyDown(key) => self.key_down(key),
            InputEvent::KeyUp(key) => self.key_up(key),
            InputEvent::MouseMotion { dx, dy } => {
                if self.player.pointer_locked {
                    self.player.look(dx, dy);
                }
            }
            InputEvent::MouseDown(button) => return self.mouse_down(button),
        }
        Ok(())
    }

    fn key_down(&mut self, key: Key) {
        let p = &mut self.player;
        match key {
            Key::W => p.strafe[0] -= 1,
            Key::S => p.strafe[0] += 1,
            Key::A => p.strafe[1] -= 1,
            Key::D => p.strafe[1] += 1,
            Key::Space => {
                if p.on_ground() {
                    p.dy = self.physics.jump_speed;
                }
            }
            Key::Escape => {
                p.pointer_locked = false;
                log::info!(target: "events", "pointer released");
            }
            Key::Digit(d) => {
                p.select_digit(d);
                log::info!(target: "events", "selected {}", p.selected);
            }
        }
    }

    fn key_up(&mut self, key: Key) {
        let p = &mut self.player;
        match key {
            Key::W => p.strafe[0] += 1,
            Key::S => p.strafe[0] -= 1,
            Key::A => p.strafe[1] += 1,
            Key::D => p.strafe[1] -= 1,
            _ => {}
        }
    }

    fn mouse_down(&mut self, button: MouseButton) -> Result<(), GameError> {
        if !self.player.pointer_locked {
            self.player.pointer_locked = true;
            log::info!(target: "events", "pointer locked");
            return Ok(());
        }
        match button {
            MouseButton::Left => self.fire()?,
            MouseButton::Right => {
                if !self.place_block()? {
                    log::debug!(target: "events", "nothing to place against");
                }
            }
            MouseButton::Middle => {
                if !self.remove_block()? {
                    log::debug!(target: "events", "nothing breakable targeted");
                }
            }
        }
        Ok(())
    }

    fn fire(&mut self) -> Result<(), GameError> {
        let sight = self.player.sight_vector();
        let muzzle = self.player.position + sight * 0.5;
        let bullet = Bullet::new(muzzle, sight, PLAYER_BULLET_SPEED, BulletOwner::Player)?;
        self.bullets.push(bullet);
        Ok(())
    }

    /// Puts the selected block into the empty cell in front of the targeted one.
    pub fn place_block(&mut self) -> Result<bool, GameError> {
        let Some(RayHit { previous: Some(cell), .. }) = self.focused_block()? else {
            return Ok(false);
        };
        let placed = self.world.add_block(cell, self.player.selected, true)?;
        if placed {
            log::info!(target: "events", "placed {} at {}", self.player.selected, cell);
        }
        Ok(placed)
    }

    /// Digs out the targeted block unless it is unbreakable.
    pub fn remove_block(&mut self) -> Result<bool, GameError> {
        let Some(hit) = self.focused_block()? else {
            return Ok(false);
        };
        match self.world.texture_at(hit.block) {
            Some(t) if t.breakable() => {
                self.world.remove_block(hit.block, true)?;
                log::info!(target: "events", "removed {} at {}", t, hit.block);
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    pub fn focused_block(&self) -> Result<Option<RayHit>, GameError> {
        Ok(self
            .world
            .hit_test(self.player.position, self.player.sight_vector(), MAX_HIT_DISTANCE)?)
    }

    /// Advances the simulation by `dt` seconds.
    pub fn tick(&mut self, dt: f32) -> Result<(), GameError> {
        while let Some(env) = self.events.pop_ready() {
            log::trace!(target: "events", "#{} @{} {:?}", env.id, env.tick, env.kind);
            self.handle_event(env.kind)?;
        }
        self.events.advance_tick();

        self.world.process_queue(TICK_BUDGET)?;
        let sector = SectorCoord::of_world(self.player.position);
        if self.player.sector != Some(sector) {
            let before = self.player.sector;
            self.world.change_sectors(before, Some(sector))?;
            if before.is_none() {
                let n = self.world.process_entire_queue()?;
                log::info!("initial view ready: {} mesh ops", n);
            }
            self.player.sector = Some(sector);
        }

        let dt = dt.min(MAX_TICK_DT);
        let step = dt / SUBSTEPS as f32;
        for _ in 0..SUBSTEPS {
            self.step_player(step)?;
        }

        for b in &mut self.bullets {
            b.update(dt);
        }
        self.bullets.retain(|b| !b.expired());
        let report = resolve_hits(
            &mut self.bullets,
            &mut self.enemies,
            self.player.position,
            self.physics.height as f32,
        );
        self.player.health -= report.player_damage;

        for e in &mut self.enemies {
            e.update(dt, self.player.position, &mut self.bullets);
        }
        self.spawner.update(dt, &mut self.enemies);
        self.ticks += 1;
        Ok(())
    }

    fn step_player(&mut self, dt: f32) -> Result<(), GameError> {
        let phys = self.physics;
        let walk = self.player.motion_vector() * (dt * phys.walking_speed);
        self.player.dy = (self.player.dy - dt * phys.gravity).max(-phys.terminal_velocity);
        let proposed = self.player.position + walk + Vec3::UP * (self.player.dy * dt);
        let out = collide(&self.world, proposed, phys.height, COLLISION_PAD)?;
        if out.vertical_contact {
            self.player.dy = 0.0;
        }
        self.player.position = out.position;
        Ok(())
    }

    pub fn status_line(&self) -> String {
        let p = self.player.position;
        format!(
            "Pos: ({:.2}, {:.2}, {:.2}) | Health: {} | Enemies: {}",
            p.x,
            p.y,
            p.z,
            self.player.health,
            self.enemies.len()
        )
    }
}
