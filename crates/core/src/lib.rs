//! A library for hexagon grid math, plus partitioning of hex grids into
//! bigger hex-shaped chunks for spatial indexing. Everything here is pure
//! computation over coordinates and a small config; there is no stored grid
//! and no global state, so it's all safe to call from any thread.
//!
//! ```
//! use hexgrid::{ChunkGrid, GridConfig, HexPoint, Point2};
//!
//! let grid = ChunkGrid::new(GridConfig::default()).unwrap();
//! let hex = grid.hex_layout().world_to_hex(Point2::new(12.0, -4.5));
//! let chunk = grid.chunk_of_hex(hex);
//! println!("{} is in chunk {}", hex, chunk);
//! assert!(grid.is_chunk_in_range(chunk));
//! ```
//!
//! See [GridConfig] for details on how the grid can be configured, and the
//! [hex] module for a description of the coordinate systems.

mod chunk;
mod config;
pub mod hex;
pub mod render;
mod util;

pub use crate::{
    chunk::{chunk_offsets, ChunkGrid},
    config::GridConfig,
    hex::{HexLayout, HexPoint, HexVector, Orientation, Ray},
    util::{hex_count, unit::Point2},
};
