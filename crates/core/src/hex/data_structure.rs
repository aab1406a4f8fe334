use crate::{
    hex::{Edge, HexDirection, HexLayout, HexPoint, HexVector},
    util::hex_count,
};
use fnv::FnvBuildHasher;
use indexmap::IndexSet;
use log::debug;
use std::{
    cmp,
    collections::{HashMap, HashSet, VecDeque},
};

/// A set of hex points
pub type HexPointSet = HashSet<HexPoint, FnvBuildHasher>;
/// A map of hex points to some `T`
pub type HexPointMap<T> = HashMap<HexPoint, T, FnvBuildHasher>;
/// An ORDERED set of hex points. This has some extra memory overhead, so we
/// should only use it when we actually need the ordering.
pub type HexPointIndexSet = IndexSet<HexPoint, FnvBuildHasher>;

/// Largest radius that [ring] and [disc] accept. Radii are walked in `i32`
/// space, so anything bigger can't be represented as an offset.
pub const MAX_RADIUS: u32 = i32::MAX as u32;

/// Get every hex at exactly `radius` steps from `center`. The result has
/// `6 * radius` hexes, or just the center for radius 0.
///
/// The order is fixed: start `radius` steps out in direction 4
/// ([HexDirection::NegXPosZ]), then walk the 6 sides of the ring, turning
/// through directions 0 to 5. Perimeter tracing relies on this order, so don't
/// change it.
///
/// ## Panics
/// If `radius` is over [MAX_RADIUS]
pub fn ring(center: HexPoint, radius: u32) -> Vec<HexPoint> {
    assert!(radius <= MAX_RADIUS, "ring radius {} is too big", radius);
    if radius == 0 {
        return vec![center];
    }

    let mut hexes = Vec::with_capacity(6 * radius as usize);
    let mut hex = center
        + HexDirection::from_index(4).to_vector() * radius as i32;
    for direction in HexDirection::ALL.iter() {
        for _ in 0..radius {
            hexes.push(hex);
            hex = hex.neighbor(*direction);
        }
    }
    hexes
}

/// Get every hex within `radius` steps of `center`, including the center.
/// This is a filled disc, not a ring. The result has `3r(r+1) + 1` hexes.
///
/// ## Panics
/// If `radius` is over [MAX_RADIUS]
pub fn disc(center: HexPoint, radius: u32) -> Vec<HexPoint> {
    disc_offsets(radius)
        .into_iter()
        .map(|offset| center + offset)
        .collect()
}

/// Offsets of every hex in a filled disc of the given radius, relative to the
/// center of the disc. Ordered by q, then by r.
///
/// ## Panics
/// If `radius` is over [MAX_RADIUS]
pub fn disc_offsets(radius: u32) -> Vec<HexVector> {
    assert!(radius <= MAX_RADIUS, "disc radius {} is too big", radius);
    let expected_len = hex_count(radius);
    let mut offsets = Vec::with_capacity(expected_len);
    let radius = radius as i32;
    for q in -radius..=radius {
        // If we just do [-r,r] for r as well, then we end up with a diamond
        // pattern instead of a hexagon
        // https://www.redblobgames.com/grids/hexagons/#range
        let r_min = cmp::max(-radius, -q - radius);
        let r_max = cmp::min(radius, -q + radius);
        for r in r_min..=r_max {
            offsets.push(HexVector::new(q, r));
        }
    }
    debug_assert_eq!(offsets.len(), expected_len, "expected 3r²+3r+1 hexes");
    offsets
}

/// Trace the outline of an arbitrary set of hexes. For every hex in the set,
/// each side that faces a hex _outside_ the set becomes an edge. The region
/// doesn't need to be contiguous or convex; holes get outlined too. Duplicate
/// input hexes are ignored.
///
/// Edges are ordered by the first appearance of their hex in the input, then
/// by side.
pub fn outline_edges(
    hexes: impl IntoIterator<Item = HexPoint>,
    layout: &HexLayout,
) -> Vec<Edge> {
    let region: HexPointIndexSet = hexes.into_iter().collect();
    let mut edges = Vec::new();
    for hex in region.iter().copied() {
        let vertices = layout.vertices(hex);
        for (i, neighbor) in hex.neighbors(layout.orientation()).enumerate() {
            if !region.contains(&neighbor) {
                edges.push(Edge::new(vertices[i], vertices[(i + 1) % 6]));
            }
        }
    }
    edges
}

/// Get all hexes in the set that have at least one neighbor outside the set,
/// in input order. These are the hexes that [outline_edges] draws edges for.
pub fn boundary_hexes(
    hexes: impl IntoIterator<Item = HexPoint>,
) -> Vec<HexPoint> {
    let region: HexPointIndexSet = hexes.into_iter().collect();
    region
        .iter()
        .copied()
        .filter(|hex| hex.adjacents().any(|adj| !region.contains(&adj)))
        .collect()
}

/// Collect the contiguous region of hexes around `start` that satisfy a
/// predicate. This is a breadth-first traversal with an explicit queue, so it
/// won't blow the stack on big regions. The region never grows past `limit`
/// hexes; the grid is infinite, so an always-true predicate would otherwise
/// never stop.
///
/// The returned set is in visiting order, starting with `start`. If `start`
/// itself doesn't satisfy the predicate, the region is empty.
pub fn flood_fill(
    start: HexPoint,
    is_member: impl Fn(HexPoint) -> bool,
    limit: usize,
) -> HexPointIndexSet {
    let mut region = HexPointIndexSet::default();
    if limit == 0 || !is_member(start) {
        return region;
    }

    let mut queue: VecDeque<HexPoint> = VecDeque::new();
    region.insert(start);
    queue.push_back(start);

    while let Some(pos) = queue.pop_front() {
        for adj in pos.adjacents() {
            if region.len() >= limit {
                debug!(
                    "Flood fill from {} stopped at limit of {} hexes",
                    start, limit
                );
                return region;
            }
            if !region.contains(&adj) && is_member(adj) {
                region.insert(adj);
                queue.push_back(adj);
            }
        }
    }

    region
}
