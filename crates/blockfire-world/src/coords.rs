//! Integer voxel and sector coordinates.
use std::fmt;

use blockfire_geom::Vec3;

use crate::error::{Result, WorldError};

/// Horizontal edge length of a sector; sectors are unbounded in Y.
pub const SECTOR_SIZE: i32 = 16;
/// Sector radius of the streaming window around the player.
pub const STREAM_PAD: i32 = 4;
/// Queries further than this from the origin on any axis are rejected.
pub const WORLD_LIMIT: f32 = (1 << 20) as f32;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct BlockPos {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

/// Unit face neighbours: +Y, -Y, -X, +X, +Z, -Z.
pub const FACES: [BlockPos; 6] = [
    BlockPos::new(0, 1, 0),
    BlockPos::new(0, -1, 0),
    BlockPos::new(-1, 0, 0),
    BlockPos::new(1, 0, 0),
    BlockPos::new(0, 0, 1),
    BlockPos::new(0, 0, -1),
];

impl BlockPos {
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// Canonical cell of a world point: each axis rounded to nearest, ties to even.
    #[inline]
    pub fn from_world(p: Vec3) -> Self {
        Self {
            x: p.x.round_ties_even() as i32,
            y: p.y.round_ties_even() as i32,
            z: p.z.round_ties_even() as i32,
        }
    }

    #[inline]
    pub fn to_vec3(self) -> Vec3 {
        Vec3::new(self.x as f32, self.y as f32, self.z as f32)
    }

    #[inline]
    pub fn offset(self, d: BlockPos) -> Self {
        Self::new(
            self.x.wrapping_add(d.x),
            self.y.wrapping_add(d.y),
            self.z.wrapping_add(d.z),
        )
    }

    #[inline]
    pub fn axis(self, i: usize) -> i32 {
        match i {
            0 => self.x,
            1 => self.y,
            _ => self.z,
        }
    }

    #[inline]
    pub fn axis_mut(&mut self, i: usize) -> &mut i32 {
        match i {
            0 => &mut self.x,
            1 => &mut self.y,
            _ => &mut self.z,
        }
    }

    pub fn neighbors(self) -> [BlockPos; 6] {
        FACES.map(|f| self.offset(f))
    }

    #[inline]
    pub fn sector(self) -> SectorCoord {
        SectorCoord::new(self.x.div_euclid(SECTOR_SIZE), self.z.div_euclid(SECTOR_SIZE))
    }
}

impl fmt::Display for BlockPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

impl From<(i32, i32, i32)> for BlockPos {
    fn from((x, y, z): (i32, i32, i32)) -> Self {
        Self::new(x, y, z)
    }
}

/// Sector key. The Y component of a sector is always 0, so it is not stored.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct SectorCoord {
    pub x: i32,
    pub z: i32,
}

impl SectorCoord {
    pub const fn new(x: i32, z: i32) -> Self {
        Self { x, z }
    }

    pub fn of_world(p: Vec3) -> Self {
        BlockPos::from_world(p).sector()
    }

    /// Sectors within the disc `dx² + dz² <= (pad + 1)²` around `self`, row-major.
    pub fn window(self, pad: i32) -> Vec<SectorCoord> {
        let r2 = (pad + 1) * (pad + 1);
        let mut out = Vec::new();
        for dx in -pad..=pad {
            for dz in -pad..=pad {
                if dx * dx + dz * dz > r2 {
                    continue;
                }
                out.push(SectorCoord::new(self.x + dx, self.z + dz));
            }
        }
        out
    }
}

impl fmt::Display for SectorCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.x, self.z)
    }
}

pub(crate) fn check_point(op: &'static str, what: &str, p: Vec3) -> Result<()> {
    if !p.is_finite() {
        return Err(WorldError::DomainError {
            op,
            detail: format!("{what} is not finite: {p:?}"),
        });
    }
    if p.x.abs() > WORLD_LIMIT || p.y.abs() > WORLD_LIMIT || p.z.abs() > WORLD_LIMIT {
        return Err(WorldError::DomainError {
            op,
            detail: format!("{what} lies outside the world: {p:?}"),
        });
    }
    Ok(())
}

pub(crate) fn check_cell(op: &'static str, pos: BlockPos) -> Result<()> {
    let limit = WORLD_LIMIT as u32;
    if [pos.x, pos.y, pos.z].iter().any(|v| v.unsigned_abs() > limit) {
        return Err(WorldError::DomainError {
            op,
            detail: format!("block {pos} lies outside the world"),
        });
    }
    Ok(())
}

pub(crate) fn check_finite(op: &'static str, what: &str, v: Vec3) -> Result<()> {
    if v.is_finite() {
        Ok(())
    } else {
        Err(WorldError::DomainError {
            op,
            detail: format!("{what} is not finite: {v:?}"),
        })
    }
}
