use std::fmt;
use std::str::FromStr;

use serde::Deserialize;
use thiserror::Error;

/// Opaque texture descriptor stored per block. The atlas maps it to UV quads.
/// Config files name textures case-insensitively.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(try_from = "String")]
pub enum BlockTexture {
    Grass,
    Sand,
    Brick,
    Stone,
}

impl BlockTexture {
    pub const ALL: [BlockTexture; 4] = [
        BlockTexture::Grass,
        BlockTexture::Sand,
        BlockTexture::Brick,
        BlockTexture::Stone,
    ];

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            BlockTexture::Grass => "grass",
            BlockTexture::Sand => "sand",
            BlockTexture::Brick => "brick",
            BlockTexture::Stone => "stone",
        }
    }

    /// Stone makes up the floor and the border walls; players cannot dig it out.
    #[inline]
    pub fn breakable(self) -> bool {
        !matches!(self, BlockTexture::Stone)
    }
}

impl fmt::Display for BlockTexture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("unknown block texture '{0}'")]
pub struct UnknownTexture(pub String);

impl FromStr for BlockTexture {
    type Err = UnknownTexture;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BlockTexture::ALL
            .into_iter()
            .find(|t| t.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownTexture(s.to_string()))
    }
}

impl TryFrom<String> for BlockTexture {
    type Error = UnknownTexture;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}
