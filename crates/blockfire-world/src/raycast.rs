//! Fixed-step ray march against the block set.
use blockfire_geom::Vec3;

use crate::coords::{BlockPos, check_finite, check_point};
use crate::error::Result;
use crate::geometry::GeometrySink;
use crate::world::World;

/// Reach used for block targeting, in direction-vector lengths.
pub const MAX_HIT_DISTANCE: u32 = 8;
const SUBSTEPS: u32 = 8;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RayHit {
    pub block: BlockPos,
    /// Cell visited just before `block`; `None` when the ray starts inside a block.
    pub previous: Option<BlockPos>,
}

impl<S: GeometrySink> World<S> {
    /// Marches `max_distance * 8` steps of `direction / 8` from `origin` and
    /// returns the first occupied cell entered.
    pub fn hit_test(
        &self,
        origin: Vec3,
        direction: Vec3,
        max_distance: u32,
    ) -> Result<Option<RayHit>> {
        check_point("hit_test", "origin", origin)?;
        check_finite("hit_test", "direction", direction)?;
        let step = direction / SUBSTEPS as f32;
        let mut p = origin;
        let mut previous: Option<BlockPos> = None;
        for _ in 0..max_distance.saturating_mul(SUBSTEPS) {
            let key = BlockPos::from_world(p);
            if previous != Some(key) && self.contains(key) {
                return Ok(Some(RayHit { block: key, previous }));
            }
            previous = Some(key);
            p += step;
        }
        Ok(None)
    }
}
