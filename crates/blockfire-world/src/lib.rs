//! Sparse voxel world: block storage, sector streaming, mesh queue, ray casts and collision.
#![forbid(unsafe_code)]

pub mod collision;
pub mod coords;
pub mod error;
pub mod geometry;
pub mod queue;
pub mod raycast;
pub mod world;
pub mod worldgen;

pub use collision::{COLLISION_PAD, CollisionOutcome, collide};
pub use coords::{BlockPos, FACES, SECTOR_SIZE, STREAM_PAD, SectorCoord, WORLD_LIMIT};
pub use error::{Result, WorldError};
pub use geometry::{
    BlockGeometry, GeometryBatch, GeometryHandle, GeometrySink, QUAD_NORMALS, SectorGeometry,
    cube_vertices,
};
pub use queue::{MeshOp, MeshQueue};
pub use raycast::{MAX_HIT_DISTANCE, RayHit};
pub use world::{TICK_BUDGET, World};
pub use worldgen::{WorldGenConfig, generate};
