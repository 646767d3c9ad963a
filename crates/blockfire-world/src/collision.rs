//! Per-axis push-out of a column-shaped body against solid cells.
use blockfire_geom::Vec3;

use crate::coords::{BlockPos, FACES, check_point};
use crate::error::Result;
use crate::geometry::GeometrySink;
use crate::world::World;

/// How far the body may overlap a neighbouring cell before it is pushed back.
pub const COLLISION_PAD: f32 = 0.25;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CollisionOutcome {
    pub position: Vec3,
    /// Set when a floor or ceiling stopped the body; the caller zeroes vertical speed.
    pub vertical_contact: bool,
}

/// Resolves `position` against the world. The body occupies the canonical
/// cell of `position` and the `height - 1` cells below it.
pub fn collide<S: GeometrySink>(
    world: &World<S>,
    position: Vec3,
    height: u32,
    pad: f32,
) -> Result<CollisionOutcome> {
    check_point("collide", "position", position)?;
    let mut p = position;
    let np = BlockPos::from_world(position);
    let mut vertical_contact = false;
    for face in FACES {
        for i in 0..3 {
            let dir = face.axis(i);
            if dir == 0 {
                continue;
            }
            let d = (p.axis(i) - np.axis(i) as f32) * dir as f32;
            if d < pad {
                continue;
            }
            for dy in 0..height as i32 {
                let mut cell = np;
                cell.y -= dy;
                *cell.axis_mut(i) += dir;
                if !world.contains(cell) {
                    continue;
                }
                *p.axis_mut(i) -= (d - pad) * dir as f32;
                if face.y != 0 {
                    vertical_contact = true;
                }
                break;
            }
        }
    }
    Ok(CollisionOutcome {
        position: p,
        vertical_contact,
    })
}
