use crate::{hex::Orientation, util::SQRT_3};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Configuration that defines a hex grid and the chunk overlay on top of it.
/// Every hex and chunk operation is computed from these values.
///
/// A config is validated once, when it's used to build a
/// [ChunkGrid](crate::ChunkGrid). Operations don't re-check it.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct GridConfig {
    /// Circumradius of each base hex (center to vertex), in world units.
    /// Must be positive.
    #[validate(range(min = 0.001))]
    pub hex_size: f64,

    /// Number of hex rings around the center of each chunk. 1 means each
    /// chunk covers 7 hexes, 2 means 19, etc. Must be at least 1.
    #[validate(range(min = 1))]
    pub chunk_radius: u32,

    /// Orientation of the base hex grid
    pub base_orientation: Orientation,

    /// Orientation of the chunk grid. This is allowed to differ from
    /// `base_orientation`; the two grids are laid out independently.
    pub overlay_orientation: Orientation,

    /// Size of the world, as the radius (in chunks) of a hex-disc around the
    /// origin chunk. Chunks outside the disc are out of range.
    pub world_chunk_radius: u32,
}

impl GridConfig {
    /// Hex size of the chunk grid, i.e. the size that chunks are laid out
    /// with as if they were big hexes. Derived as
    /// `hex_size * chunk_radius * sqrt(3)`.
    pub fn chunk_size(&self) -> f64 {
        self.hex_size * self.chunk_radius as f64 * SQRT_3
    }
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            hex_size: 1.0,
            chunk_radius: 5,
            base_orientation: Orientation::PointyTop,
            overlay_orientation: Orientation::FlatTop,
            world_chunk_radius: 10,
        }
    }
}
