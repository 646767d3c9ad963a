//! Immediate-mode drawing of everything that is not block geometry.
use blockfire_combat::{Bullet, Enemy};
use blockfire_game::PlayerState;
use blockfire_world::BlockPos;
use raylib::prelude::*;

use crate::conv::vec3_to_rl;

pub const SKY_COLOR: Color = Color::new(128, 176, 255, 255);
const ENEMY_COLOR: Color = Color::new(153, 76, 0, 255);
const HUD_FONT_SIZE: i32 = 18;
const RETICLE_ARM: i32 = 10;

/// Camera at the player's eye looking along the sight vector.
pub fn player_camera(player: &PlayerState, fov: f32) -> Camera3D {
    let eye = player.position;
    Camera3D::perspective(
        vec3_to_rl(eye),
        vec3_to_rl(eye + player.sight_vector()),
        Vector3::new(0.0, 1.0, 0.0),
        fov,
    )
}

/// Two stacked unit cubes per enemy.
pub fn draw_enemies<D: RaylibDraw3D>(d: &mut D, enemies: &[Enemy]) {
    for e in enemies {
        let p = vec3_to_rl(e.position);
        d.draw_cube(p, 1.0, 1.0, 1.0, ENEMY_COLOR);
        d.draw_cube(Vector3::new(p.x, p.y + 1.0, p.z), 1.0, 1.0, 1.0, ENEMY_COLOR);
    }
}

pub fn draw_bullets<D: RaylibDraw3D>(d: &mut D, bullets: &[Bullet]) {
    for b in bullets {
        let s = b.size * 2.0;
        d.draw_cube(vec3_to_rl(b.position), s, s, s, Color::RED);
    }
}

pub fn draw_focus<D: RaylibDraw3D>(d: &mut D, block: BlockPos) {
    d.draw_cube_wires(vec3_to_rl(block.to_vec3()), 1.02, 1.02, 1.02, Color::BLACK);
}

/// Status text in the top-left corner and a crosshair in the middle of the screen.
pub fn draw_hud<D: RaylibDraw>(d: &mut D, status: &str, width: i32, height: i32) {
    d.draw_text(status, 10, 10, HUD_FONT_SIZE, Color::BLACK);
    let (cx, cy) = (width / 2, height / 2);
    d.draw_line(cx - RETICLE_ARM, cy, cx + RETICLE_ARM, cy, Color::BLACK);
    d.draw_line(cx, cy - RETICLE_ARM, cx, cy + RETICLE_ARM, Color::BLACK);
}
