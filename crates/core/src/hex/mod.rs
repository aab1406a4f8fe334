//! This module holds basic types and operations for hexagon grids.
//!
//! ## Coordinate Systems
//!
//! There are three coordinate systems in play here:
//!
//! ### Axial Coordinates
//!
//! Axial coordinates (AKA hex coordinates) address whole hexes with two
//! integers, `q` and `r`. The system we use is the one [defined by Amit
//! Patel](https://www.redblobgames.com/grids/hexagons/#coordinates-axial).
//! Every pair of integers is a valid hex, and the grid is infinite. Nothing is
//! stored per hex; all of the math here is pure functions over coordinates.
//!
//! ### Cube Coordinates
//!
//! Cube coordinates add a third component, so each hex is `(x, y, z)` with
//! **`x + y + z = 0`** always. They're the same hexes as axial coordinates
//! (`x = q`, `z = r`, `y = -q - r`), but the symmetry makes some math much
//! simpler: distance, rounding fractional positions, and the canonical
//! [HexDirection]s used to walk rings.
//!
//! ### World Coordinates
//!
//! World coordinates are continuous positions on the ground plane of the host
//! world, stored as a [Point2](crate::Point2). Converting between axial and
//! world space needs a [HexLayout], which is an [Orientation] plus a hex size.
//!
//! Converting from world to axial gives a fractional point, which then gets
//! rounded in cube space. That guarantees every world position lands in
//! exactly one hex, and that neighboring hexes agree on where their shared
//! side is.
//!
//! ### Coordinate Range
//!
//! Coordinates are `i32`. Distances are computed in wider integers and
//! saturate at `u32::MAX`, so they're safe for any pair of points. Moving
//! points around (adding vectors, walking rings) is plain `i32` arithmetic,
//! so results have to stay inside `i32` on every axis, including the implied
//! `s = -q - r`. Rings and discs are capped at [MAX_RADIUS].
//!
//! ## Chunks
//!
//! Chunks (see [ChunkGrid](crate::ChunkGrid)) are just hexes at a coarser
//! scale, so every type in this module works for chunk coordinates too.

mod data_structure;
mod layout;
mod unit;

pub use self::{data_structure::*, layout::*, unit::*};
