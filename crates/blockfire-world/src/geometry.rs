//! Per-block render geometry and the sink that owns it.
use blockfire_blocks::{BlockTexture, FaceUvs};
use blockfire_geom::Vec3;
use hashbrown::HashMap;

use crate::coords::{BlockPos, SectorCoord};

pub const VERTICES_PER_BLOCK: usize = 24;
pub const QUADS_PER_BLOCK: usize = 6;

#[rustfmt::skip]
/// Quad corners of a cube with half-extent `n`: top, bottom, left, right, front, back.
pub fn cube_vertices(c: Vec3, n: f32) -> [f32; VERTICES_PER_BLOCK * 3] {
    let (x, y, z) = (c.x, c.y, c.z);
    [
        x - n, y + n, z - n, x - n, y + n, z + n, x + n, y + n, z + n, x + n, y + n, z - n,
        x - n, y - n, z - n, x + n, y - n, z - n, x + n, y - n, z + n, x - n, y - n, z + n,
        x - n, y - n, z - n, x - n, y - n, z + n, x - n, y + n, z + n, x - n, y + n, z - n,
        x + n, y - n, z + n, x + n, y - n, z - n, x + n, y + n, z - n, x + n, y + n, z + n,
        x - n, y - n, z + n, x + n, y - n, z + n, x + n, y + n, z + n, x - n, y + n, z + n,
        x + n, y - n, z - n, x - n, y - n, z - n, x - n, y + n, z - n, x + n, y + n, z - n,
    ]
}

/// Outward normal of each quad in `cube_vertices` order.
pub const QUAD_NORMALS: [[f32; 3]; QUADS_PER_BLOCK] = [
    [0.0, 1.0, 0.0],
    [0.0, -1.0, 0.0],
    [-1.0, 0.0, 0.0],
    [1.0, 0.0, 0.0],
    [0.0, 0.0, 1.0],
    [0.0, 0.0, -1.0],
];

#[derive(Clone, Debug, PartialEq)]
pub struct BlockGeometry {
    pub pos: BlockPos,
    pub texture: BlockTexture,
    pub positions: [f32; VERTICES_PER_BLOCK * 3],
    pub uvs: FaceUvs,
}

impl BlockGeometry {
    pub fn new(pos: BlockPos, texture: BlockTexture, uvs: &FaceUvs) -> Self {
        Self {
            pos,
            texture,
            positions: cube_vertices(pos.to_vec3(), 0.5),
            uvs: *uvs,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GeometryHandle(pub u64);

/// Receiver of executed show/hide operations.
pub trait GeometrySink {
    fn add_geometry(&mut self, geometry: BlockGeometry) -> GeometryHandle;
    /// Returns false if the handle was unknown.
    fn remove_geometry(&mut self, handle: GeometryHandle) -> bool;
}

/// Geometry of one sector. `revision` is the batch revision of its last change.
#[derive(Default, Debug)]
pub struct SectorGeometry {
    pub revision: u64,
    entries: HashMap<GeometryHandle, BlockGeometry>,
}

impl SectorGeometry {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &BlockGeometry> {
        self.entries.values()
    }
}

/// In-memory geometry store, bucketed by sector so a renderer can re-upload
/// only the sectors whose revision moved.
#[derive(Default, Debug)]
pub struct GeometryBatch {
    sectors: HashMap<SectorCoord, SectorGeometry>,
    index: HashMap<GeometryHandle, SectorCoord>,
    next_handle: u64,
    revision: u64,
}

impl GeometryBatch {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    pub fn vertex_count(&self) -> usize {
        self.len() * VERTICES_PER_BLOCK
    }

    pub fn quad_count(&self) -> usize {
        self.len() * QUADS_PER_BLOCK
    }

    pub fn get(&self, handle: GeometryHandle) -> Option<&BlockGeometry> {
        let sector = self.index.get(&handle)?;
        self.sectors.get(sector)?.entries.get(&handle)
    }

    pub fn iter(&self) -> impl Iterator<Item = &BlockGeometry> {
        self.sectors.values().flat_map(|s| s.entries.values())
    }

    pub fn sector(&self, sector: SectorCoord) -> Option<&SectorGeometry> {
        self.sectors.get(&sector)
    }

    pub fn sectors(&self) -> impl Iterator<Item = (SectorCoord, &SectorGeometry)> {
        self.sectors.iter().map(|(k, v)| (*k, v))
    }
}

impl GeometrySink for GeometryBatch {
    fn add_geometry(&mut self, geometry: BlockGeometry) -> GeometryHandle {
        let handle = GeometryHandle(self.next_handle);
        self.next_handle += 1;
        self.revision = self.revision.wrapping_add(1);
        let sector = geometry.pos.sector();
        let bucket = self.sectors.entry(sector).or_default();
        bucket.entries.insert(handle, geometry);
        bucket.revision = self.revision;
        self.index.insert(handle, sector);
        handle
    }

    fn remove_geometry(&mut self, handle: GeometryHandle) -> bool {
        let Some(sector) = self.index.remove(&handle) else {
            return false;
        };
        self.revision = self.revision.wrapping_add(1);
        if let Some(bucket) = self.sectors.get_mut(&sector) {
            bucket.entries.remove(&handle);
            bucket.revision = self.revision;
            if bucket.entries.is_empty() {
                self.sectors.remove(&sector);
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn geom(x: i32) -> BlockGeometry {
        BlockGeometry::new(BlockPos::new(x, 0, 0), BlockTexture::Sand, &[0.0; 48])
    }

    #[test]
    fn sector_revisions_follow_their_own_changes() {
        let mut b = GeometryBatch::new();
        let a = b.add_geometry(geom(0));
        let _far = b.add_geometry(geom(40));
        let near = SectorCoord::new(0, 0);
        let far = SectorCoord::new(2, 0);
        assert_eq!(b.sector(near).map(|s| s.revision), Some(1));
        assert_eq!(b.sector(far).map(|s| s.revision), Some(2));

        assert!(b.remove_geometry(a));
        assert!(!b.remove_geometry(a));
        assert!(b.sector(near).is_none());
        assert_eq!(b.sector(far).map(|s| s.revision), Some(2));
        assert_eq!(b.revision(), 3);
        assert_eq!(b.len(), 1);
    }
}
