use crate::{
    hex::{
        disc, disc_offsets, outline_edges, ring, Edge, HexLayout, HexPoint,
        HexPointMap, HexVector, Ray,
    },
    util::unit::Point2,
    GridConfig,
};
use anyhow::{bail, Context};
use log::{debug, trace};
use validator::Validate;

/// Get the offset of every hex in a chunk of the given radius, relative to
/// the chunk's center hex. This is a filled hex-disc, so there are always
/// `3r(r+1) + 1` offsets.
pub fn chunk_offsets(chunk_radius: u32) -> Vec<HexVector> {
    disc_offsets(chunk_radius)
}

/// A chunk grid groups hexes into larger hex-shaped chunks, for spatial
/// indexing. Chunks are addressed with the same axial coordinates as hexes
/// ([HexPoint]), they're just laid out at a bigger scale (see
/// [GridConfig::chunk_size]) and possibly a different orientation.
///
/// So there are two independent coordinate systems here:
/// - The **base** grid, which places individual hexes
/// - The **overlay** grid, which places chunks
///
/// Building a grid validates its config, so every operation after that can
/// assume sane values. Grids are immutable and cheap to copy, so if you need
/// a different config, just build a new one.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ChunkGrid {
    config: GridConfig,
    hex_layout: HexLayout,
    chunk_layout: HexLayout,
}

impl ChunkGrid {
    /// Most chunk rings that [Self::chunks_within_radius] will enumerate.
    /// That's a little over 3 million chunks.
    pub const MAX_QUERY_RADIUS: u32 = 1024;

    /// Initialize a new chunk grid with the given config. Returns an error if
    /// the config is invalid.
    pub fn new(config: GridConfig) -> anyhow::Result<Self> {
        config.validate().context("invalid grid config")?;
        // Range validation lets NaN through
        if !config.hex_size.is_finite() {
            bail!("hex size must be finite, but was {}", config.hex_size);
        }

        let chunk_size = config.chunk_size();
        debug!(
            "Built chunk grid with chunk size {} from config {:?}",
            chunk_size, config
        );
        Ok(Self {
            config,
            hex_layout: HexLayout::new(config.base_orientation, config.hex_size),
            chunk_layout: HexLayout::new(config.overlay_orientation, chunk_size),
        })
    }

    /// Get a reference to the config that defines this grid
    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    /// Layout of the base hex grid
    pub fn hex_layout(&self) -> &HexLayout {
        &self.hex_layout
    }

    /// Layout of the chunk grid
    pub fn chunk_layout(&self) -> &HexLayout {
        &self.chunk_layout
    }

    /// See [GridConfig::chunk_size]
    pub fn chunk_size(&self) -> f64 {
        self.chunk_layout.size()
    }

    /// Get the world position of a chunk's center
    pub fn chunk_to_world(&self, chunk: HexPoint) -> Point2 {
        self.chunk_layout.hex_to_world(chunk)
    }

    /// Get the chunk that contains a world position
    pub fn world_to_chunk(&self, point: Point2) -> HexPoint {
        self.chunk_layout.world_to_hex(point)
    }

    /// Get the chunk that a base hex belongs to, according to where the hex's
    /// center lands in the chunk grid
    pub fn chunk_of_hex(&self, hex: HexPoint) -> HexPoint {
        self.world_to_chunk(self.hex_layout.hex_to_world(hex))
    }

    /// Bucket a set of base hexes by the chunk that each one belongs to.
    /// Within each bucket, hexes keep their input order.
    pub fn partition(
        &self,
        hexes: impl IntoIterator<Item = HexPoint>,
    ) -> HexPointMap<Vec<HexPoint>> {
        let mut chunks: HexPointMap<Vec<HexPoint>> = HexPointMap::default();
        for hex in hexes {
            chunks.entry(self.chunk_of_hex(hex)).or_default().push(hex);
        }
        chunks
    }

    /// Get the offset of every hex in a chunk, relative to the chunk's
    /// center. See [chunk_offsets].
    pub fn chunk_offsets(&self) -> Vec<HexVector> {
        chunk_offsets(self.config.chunk_radius)
    }

    /// Is this offset (relative to a chunk's center) on the outermost ring of
    /// the chunk? These are the hexes along chunk seams.
    pub fn is_border_offset(&self, offset: HexVector) -> bool {
        (HexPoint::ORIGIN + offset).is_border(self.config.chunk_radius)
    }

    /// Get the world position of every hex in a chunk. Each offset is placed
    /// with the **base** layout, then moved to the chunk's center, which is
    /// placed with the **overlay** layout. The two grids are composed, not
    /// merged, so with mixed orientations the hexes of a chunk don't
    /// necessarily line up with base hex centers.
    pub fn chunk_hexes_in_world_space(&self, chunk: HexPoint) -> Vec<Point2> {
        let chunk_center = self.chunk_to_world(chunk);
        self.chunk_offsets()
            .into_iter()
            .map(|offset| chunk_center + self.hex_layout.offset_to_world(offset))
            .collect()
    }

    /// Get the outline of a chunk in world space: every outward-facing side
    /// of its border hexes, positioned the same way as
    /// [Self::chunk_hexes_in_world_space].
    pub fn chunk_outline(&self, chunk: HexPoint) -> Vec<Edge> {
        let chunk_center = self.chunk_to_world(chunk);
        let local_hexes = self
            .chunk_offsets()
            .into_iter()
            .map(|offset| HexPoint::ORIGIN + offset);
        outline_edges(local_hexes, &self.hex_layout)
            .into_iter()
            .map(|edge| edge.translate(chunk_center))
            .collect()
    }

    /// Distance between two chunks, in chunk hops. Same metric as hexes.
    pub fn chunk_distance(&self, a: HexPoint, b: HexPoint) -> u32 {
        a.distance_to(b)
    }

    /// Get the ring of chunks at exactly `radius` chunk hops from `center`.
    /// Same order as [ring].
    pub fn chunk_ring(&self, center: HexPoint, radius: u32) -> Vec<HexPoint> {
        ring(center, radius)
    }

    /// Get the chunks near a world position. The world radius is converted to
    /// a chunk count (`ceil(radius / chunk_size)`), and every chunk within that
    /// many hops of the chunk containing `center` is returned.
    ///
    /// This is a coarse query: chunks aren't re-checked against the actual
    /// circle, so callers that need an exact cutoff should filter the result.
    /// A radius that is zero, negative, or NaN gives just the center chunk.
    /// Returns an error if the radius covers more than
    /// [Self::MAX_QUERY_RADIUS] rings of chunks (including infinity).
    pub fn chunks_within_radius(
        &self,
        center: Point2,
        world_radius: f64,
    ) -> anyhow::Result<Vec<HexPoint>> {
        let chunk_radius = if world_radius > 0.0 {
            let rings = (world_radius / self.chunk_size()).ceil();
            if rings > Self::MAX_QUERY_RADIUS as f64 {
                bail!(
                    "radius {} spans {} chunk rings, but the limit is {}",
                    world_radius,
                    rings,
                    Self::MAX_QUERY_RADIUS
                );
            }
            rings as u32
        } else {
            0
        };
        let center_chunk = self.world_to_chunk(center);
        trace!(
            "Chunks within {} of {} => {} rings around chunk {}",
            world_radius,
            center,
            chunk_radius,
            center_chunk
        );
        Ok(disc(center_chunk, chunk_radius))
    }

    /// Is this chunk inside the bounds of the world? See
    /// [GridConfig::world_chunk_radius].
    pub fn is_chunk_in_range(&self, chunk: HexPoint) -> bool {
        chunk.magnitude() <= self.config.world_chunk_radius
    }

    /// Get every chunk inside the bounds of the world
    pub fn chunks_in_range(&self) -> Vec<HexPoint> {
        disc(HexPoint::ORIGIN, self.config.world_chunk_radius)
    }

    /// Get the chunk that a ray points at on the ground plane, if any
    pub fn chunk_under_ray(&self, ray: &Ray) -> Option<HexPoint> {
        self.chunk_layout.hex_under_ray(ray)
    }
}
