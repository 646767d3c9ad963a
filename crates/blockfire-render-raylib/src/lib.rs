//! Raylib rendering: sector mesh upload, fog, entities, focus outline and HUD.
// Mesh upload goes through raylib's raw FFI mesh, which needs unsafe.

pub mod draw;
pub mod fog;
pub mod mesh;
mod upload;

pub use draw::{SKY_COLOR, draw_bullets, draw_enemies, draw_focus, draw_hud, player_camera};
pub use fog::{FOG_END, FOG_START, FogShader, fog_color, fog_factor};
pub use mesh::{MAX_PART_VERTICES, MeshPart, pack_sector};
pub use upload::BatchRender;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("loading atlas texture {path}: {detail}")]
    Texture { path: String, detail: String },
}

pub mod conv {
    use blockfire_geom::Vec3;

    pub fn vec3_to_rl(v: Vec3) -> raylib::prelude::Vector3 {
        raylib::prelude::Vector3::new(v.x, v.y, v.z)
    }
}
