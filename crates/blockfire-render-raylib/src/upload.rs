//! GPU side of the block batch: one set of models per sector, rebuilt when its revision moves.
use std::path::Path;

use blockfire_world::{GeometryBatch, SectorCoord};
use hashbrown::HashMap;
use raylib::prelude::*;

use crate::RenderError;
use crate::draw::SKY_COLOR;
use crate::fog::{FOG_END, FOG_START, FogShader, fog_color};
use crate::mesh::{MeshPart, pack_sector};

struct SectorModels {
    revision: u64,
    models: Vec<Model>,
}

pub struct BatchRender {
    atlas: Texture2D,
    fog: Option<FogShader>,
    sectors: HashMap<SectorCoord, SectorModels>,
    synced_revision: Option<u64>,
}

impl BatchRender {
    /// Loads the atlas image with point filtering. A missing or unreadable atlas is fatal.
    pub fn load(
        rl: &mut RaylibHandle,
        thread: &RaylibThread,
        atlas_path: &Path,
    ) -> Result<Self, RenderError> {
        let path = atlas_path.to_string_lossy().to_string();
        let atlas = rl
            .load_texture(thread, &path)
            .map_err(|e| RenderError::Texture {
                path: path.clone(),
                detail: e.to_string(),
            })?;
        atlas.set_texture_filter(thread, TextureFilter::TEXTURE_FILTER_POINT);
        log::info!("atlas loaded: {} ({}x{})", path, atlas.width, atlas.height);
        Ok(Self {
            atlas,
            fog: None,
            sectors: HashMap::new(),
            synced_revision: None,
        })
    }

    /// Draws sector models through `fog`. Models uploaded earlier keep the default shader,
    /// so this belongs before the first `sync`.
    pub fn with_fog(mut self, fog: Option<FogShader>) -> Self {
        self.fog = fog;
        self
    }

    pub fn has_fog(&self) -> bool {
        self.fog.is_some()
    }

    /// Feeds this frame's camera position to the fog shader.
    pub fn update_fog(&mut self, camera_pos: Vector3) {
        if let Some(fog) = self.fog.as_mut() {
            fog.update_frame_uniforms(camera_pos, fog_color(SKY_COLOR), FOG_START, FOG_END);
        }
    }

    /// Re-uploads every sector whose geometry changed since the last call and
    /// drops sectors that no longer hold geometry. Returns the number rebuilt.
    pub fn sync(
        &mut self,
        rl: &mut RaylibHandle,
        thread: &RaylibThread,
        batch: &GeometryBatch,
    ) -> usize {
        if self.synced_revision == Some(batch.revision()) {
            return 0;
        }
        self.sectors.retain(|s, _| batch.sector(*s).is_some());
        let mut rebuilt = 0;
        for (sector, geom) in batch.sectors() {
            if self
                .sectors
                .get(&sector)
                .is_some_and(|m| m.revision == geom.revision)
            {
                continue;
            }
            let models: Vec<Model> = pack_sector(geom.iter())
                .into_iter()
                .filter_map(|part| upload_part(rl, thread, part, &self.atlas, self.fog.as_ref()))
                .collect();
            self.sectors.insert(
                sector,
                SectorModels {
                    revision: geom.revision,
                    models,
                },
            );
            rebuilt += 1;
        }
        self.synced_revision = Some(batch.revision());
        if rebuilt > 0 {
            log::trace!("uploaded {} sectors, {} resident", rebuilt, self.sectors.len());
        }
        rebuilt
    }

    pub fn draw<D: RaylibDraw3D>(&self, d: &mut D) {
        for s in self.sectors.values() {
            for m in &s.models {
                d.draw_model(m, Vector3::zero(), 1.0, Color::WHITE);
            }
        }
    }

    pub fn sector_count(&self) -> usize {
        self.sectors.len()
    }
}

fn upload_part(
    rl: &mut RaylibHandle,
    thread: &RaylibThread,
    part: MeshPart,
    atlas: &Texture2D,
    fog: Option<&FogShader>,
) -> Option<Model> {
    let v_count = part.vertex_count();
    if v_count == 0 {
        return None;
    }
    let quads = part.quad_count();
    let mut raw: raylib::ffi::Mesh = unsafe { std::mem::zeroed() };
    raw.vertexCount = v_count as i32;
    raw.triangleCount = (quads * 2) as i32;
    unsafe {
        let vbytes = (v_count * 3 * std::mem::size_of::<f32>()) as u32;
        let tbytes = (v_count * 2 * std::mem::size_of::<f32>()) as u32;
        let cbytes = (v_count * 4 * std::mem::size_of::<u8>()) as u32;
        let ibytes = (quads * 6 * std::mem::size_of::<u16>()) as u32;
        raw.vertices = raylib::ffi::MemAlloc(vbytes) as *mut f32;
        raw.normals = raylib::ffi::MemAlloc(vbytes) as *mut f32;
        raw.texcoords = raylib::ffi::MemAlloc(tbytes) as *mut f32;
        raw.colors = raylib::ffi::MemAlloc(cbytes) as *mut u8;
        raw.indices = raylib::ffi::MemAlloc(ibytes) as *mut u16;
        std::ptr::copy_nonoverlapping(part.pos.as_ptr(), raw.vertices, v_count * 3);
        std::ptr::copy_nonoverlapping(part.norm.as_ptr(), raw.normals, v_count * 3);
        std::ptr::copy_nonoverlapping(part.uv.as_ptr(), raw.texcoords, v_count * 2);
        std::ptr::copy_nonoverlapping(part.col.as_ptr(), raw.colors, v_count * 4);
        for i in 0..quads {
            let base = (i * 4) as u16;
            let tri = [base, base + 1, base + 2, base, base + 2, base + 3];
            std::ptr::copy_nonoverlapping(tri.as_ptr(), raw.indices.add(i * 6), 6);
        }
    }
    let mut mesh = unsafe { raylib::core::models::Mesh::from_raw(raw) };
    unsafe {
        mesh.upload(false);
    }
    let mut model = match rl.load_model_from_mesh(thread, unsafe { mesh.make_weak() }) {
        Ok(m) => m,
        Err(e) => {
            log::warn!("model upload failed ({} vertices): {}", v_count, e);
            return None;
        }
    };
    if let Some(mat) = model.materials_mut().get_mut(0) {
        mat.set_material_texture(MaterialMapIndex::MATERIAL_MAP_ALBEDO, atlas);
    }
    if let Some(fog) = fog {
        fog.apply_to(&mut model);
    }
    Some(model)
}
