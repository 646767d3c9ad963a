//! Linear distance fog in the sky colour, so the edge of the streamed window fades out.
use std::path::Path;

use raylib::prelude::*;

/// Distance at which fog starts to tint geometry.
pub const FOG_START: f32 = 20.0;
/// Distance at which geometry is fully fogged; nothing past it is distinguishable from the sky.
pub const FOG_END: f32 = 60.0;

/// Share of the surface colour left at `distance`: 1 up to `start`, 0 from `end` on.
pub fn fog_factor(distance: f32, start: f32, end: f32) -> f32 {
    if end <= start {
        return if distance < end { 1.0 } else { 0.0 };
    }
    ((end - distance) / (end - start)).clamp(0.0, 1.0)
}

pub fn fog_color(c: Color) -> [f32; 3] {
    [c.r as f32 / 255.0, c.g as f32 / 255.0, c.b as f32 / 255.0]
}

pub struct FogShader {
    pub shader: raylib::shaders::WeakShader,
    pub loc_fog_color: i32,
    pub loc_fog_start: i32,
    pub loc_fog_end: i32,
    pub loc_camera_pos: i32,
}

impl FogShader {
    /// Loads `shaders/fog.vs` and `shaders/fog.fs` from the assets directory.
    /// Returns `None` when either file is missing.
    pub fn load_with_base(
        rl: &mut RaylibHandle,
        thread: &RaylibThread,
        base: &Path,
    ) -> Option<Self> {
        let vs = base.join("shaders/fog.vs");
        let fs = base.join("shaders/fog.fs");
        if !vs.exists() || !fs.exists() {
            log::warn!("fog shader not found under {}; drawing without fog", base.display());
            return None;
        }
        let shader_strong = rl.load_shader(
            thread,
            Some(vs.to_string_lossy().as_ref()),
            Some(fs.to_string_lossy().as_ref()),
        );
        let shader = unsafe { shader_strong.make_weak() };
        let loc_fog_color = shader.get_shader_location("fogColor");
        let loc_fog_start = shader.get_shader_location("fogStart");
        let loc_fog_end = shader.get_shader_location("fogEnd");
        let loc_camera_pos = shader.get_shader_location("cameraPos");
        log::info!("fog shader loaded from {}", base.display());
        Some(Self {
            shader,
            loc_fog_color,
            loc_fog_start,
            loc_fog_end,
            loc_camera_pos,
        })
    }

    pub fn update_frame_uniforms(
        &mut self,
        camera_pos: Vector3,
        fog_color: [f32; 3],
        fog_start: f32,
        fog_end: f32,
    ) {
        if self.loc_fog_color >= 0 {
            self.shader.set_shader_value(self.loc_fog_color, fog_color);
        }
        if self.loc_fog_start >= 0 {
            self.shader.set_shader_value(self.loc_fog_start, fog_start);
        }
        if self.loc_fog_end >= 0 {
            self.shader.set_shader_value(self.loc_fog_end, fog_end);
        }
        if self.loc_camera_pos >= 0 {
            let cam = [camera_pos.x, camera_pos.y, camera_pos.z];
            self.shader.set_shader_value(self.loc_camera_pos, cam);
        }
    }

    /// Points the model's first material at this shader.
    pub fn apply_to(&self, model: &mut Model) {
        if let Some(mat) = model.materials_mut().get_mut(0) {
            let dest = mat.shader_mut();
            let dest_ptr: *mut raylib::ffi::Shader = dest.as_mut();
            let src_ptr: *const raylib::ffi::Shader = self.shader.as_ref();
            unsafe { std::ptr::copy_nonoverlapping(src_ptr, dest_ptr, 1) };
        }
    }
}
