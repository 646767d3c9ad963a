//! CPU-side packing of block geometry into raylib-sized mesh parts.
use blockfire_world::{BlockGeometry, QUAD_NORMALS};

/// Raylib meshes index with u16; stay under that per part.
pub const MAX_PART_VERTICES: usize = 65000;
const BLOCK_VERTICES: usize = 24;

#[derive(Default, Debug, Clone)]
pub struct MeshPart {
    pub pos: Vec<f32>,
    pub norm: Vec<f32>,
    pub uv: Vec<f32>,
    pub col: Vec<u8>,
}

impl MeshPart {
    pub fn vertex_count(&self) -> usize {
        self.pos.len() / 3
    }

    pub fn quad_count(&self) -> usize {
        self.vertex_count() / 4
    }

    fn push_block(&mut self, g: &BlockGeometry) {
        self.pos.extend_from_slice(&g.positions);
        for n in QUAD_NORMALS {
            for _ in 0..4 {
                self.norm.extend_from_slice(&n);
            }
        }
        // Atlas rows count up from the bottom of the image; raylib samples top-down.
        for uv in g.uvs.chunks_exact(2) {
            self.uv.push(uv[0]);
            self.uv.push(1.0 - uv[1]);
        }
        self.col.extend(std::iter::repeat_n(255u8, BLOCK_VERTICES * 4));
    }
}

/// Splits a sector's blocks into parts of at most `MAX_PART_VERTICES` vertices.
pub fn pack_sector<'a>(blocks: impl IntoIterator<Item = &'a BlockGeometry>) -> Vec<MeshPart> {
    let per_part = MAX_PART_VERTICES / BLOCK_VERTICES;
    let mut parts = Vec::new();
    let mut cur = MeshPart::default();
    let mut in_cur = 0;
    for g in blocks {
        if in_cur == per_part {
            parts.push(std::mem::take(&mut cur));
            in_cur = 0;
        }
        cur.push_block(g);
        in_cur += 1;
    }
    if in_cur > 0 {
        parts.push(cur);
    }
    parts
}
