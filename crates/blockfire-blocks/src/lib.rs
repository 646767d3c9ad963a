//! Block texture descriptors and the texture atlas layout.
#![forbid(unsafe_code)]

pub mod atlas;
pub mod config;
pub mod types;

pub use atlas::{AtlasError, BlockAtlas, FaceUvs, Tile, TileLayout, tex_coord, tex_coords};
pub use types::{BlockTexture, UnknownTexture};
