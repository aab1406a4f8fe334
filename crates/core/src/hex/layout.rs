//! Conversions between hex space and world space.

use crate::{
    hex::{FractionalCube, HexPoint, HexVector, Orientation},
    util::{unit::Point2, SQRT_3},
};
use nalgebra::{Matrix2, Point3, Vector2, Vector3};
use serde::{Deserialize, Serialize};

/// A single hex grid embedded in world space: an orientation plus the size of
/// each hex. The same layout type is used for base hexes and for chunks, since
/// a chunk grid is just a hex grid at a coarser scale.
///
/// The size must be positive. Layouts are usually built from a validated
/// [GridConfig](crate::GridConfig), which guarantees that.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HexLayout {
    orientation: Orientation,
    /// Circumradius of each hex, i.e. distance from the center to a vertex.
    /// This is also the length of one side.
    size: f64,
}

impl HexLayout {
    pub const fn new(orientation: Orientation, size: f64) -> Self {
        Self { orientation, size }
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn size(&self) -> f64 {
        self.size
    }

    /// Axial-to-world basis for a unit-sized hex. Columns are the world
    /// offsets of one step in q and one step in r.
    fn forward_matrix(&self) -> Matrix2<f64> {
        match self.orientation {
            Orientation::PointyTop => {
                Matrix2::new(SQRT_3, SQRT_3 / 2.0, 0.0, 1.5)
            }
            Orientation::FlatTop => {
                Matrix2::new(1.5, 0.0, SQRT_3 / 2.0, SQRT_3)
            }
        }
    }

    /// Exact inverse of [Self::forward_matrix]
    fn inverse_matrix(&self) -> Matrix2<f64> {
        match self.orientation {
            Orientation::PointyTop => {
                Matrix2::new(SQRT_3 / 3.0, -1.0 / 3.0, 0.0, 2.0 / 3.0)
            }
            Orientation::FlatTop => {
                Matrix2::new(2.0 / 3.0, 0.0, -1.0 / 3.0, SQRT_3 / 3.0)
            }
        }
    }

    /// Get the world position of a hex's center
    pub fn hex_to_world(&self, hex: HexPoint) -> Point2 {
        self.offset_to_world(hex - HexPoint::ORIGIN)
    }

    /// Get the world-space translation that corresponds to a hex offset
    pub fn offset_to_world(&self, offset: HexVector) -> Point2 {
        let axial = Vector2::new(offset.q() as f64, offset.r() as f64);
        (self.forward_matrix() * axial * self.size).into()
    }

    /// Convert a world position to fractional cube coordinates, without
    /// snapping to any particular hex
    pub fn world_to_fractional(&self, point: Point2) -> FractionalCube {
        let world = Vector2::new(point.x, point.y);
        let axial = self.inverse_matrix() * world / self.size;
        FractionalCube::from_axial(axial.x, axial.y)
    }

    /// Get the hex that contains the given world position. Every world
    /// position maps to exactly one hex.
    pub fn world_to_hex(&self, point: Point2) -> HexPoint {
        self.world_to_fractional(point).round().into()
    }

    /// Get the 6 vertices of the hex centered at the given world position.
    /// Vertex `i` sits at `first_vertex_angle + 60i` degrees around the
    /// center, so the side from vertex `i` to vertex `i + 1` faces neighbor
    /// `i` of [Orientation::neighbor_offsets].
    pub fn vertices_at(&self, center: Point2) -> [Point2; 6] {
        let mut vertices = [center; 6];
        let first_angle = self.orientation.first_vertex_angle();
        for (i, vertex) in vertices.iter_mut().enumerate() {
            let angle = (first_angle + 60.0 * i as f64).to_radians();
            *vertex = center
                + Point2::new(self.size * angle.cos(), self.size * angle.sin());
        }
        vertices
    }

    /// Get the 6 vertices of a hex. See [Self::vertices_at].
    pub fn vertices(&self, hex: HexPoint) -> [Point2; 6] {
        self.vertices_at(self.hex_to_world(hex))
    }

    /// Get the hex that a ray points at on the ground plane, if any
    pub fn hex_under_ray(&self, ray: &Ray) -> Option<HexPoint> {
        ray.ground_intersection()
            .map(|point| self.world_to_hex(point))
    }
}

/// One side of a hex, in world space
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    pub start: Point2,
    pub end: Point2,
}

impl Edge {
    pub fn new(start: Point2, end: Point2) -> Self {
        Self { start, end }
    }

    pub fn midpoint(&self) -> Point2 {
        (self.start + self.end) / 2.0
    }

    /// Shift both ends of this edge by the same amount
    pub fn translate(self, offset: Point2) -> Self {
        Self::new(self.start + offset, self.end + offset)
    }
}

/// A ray in full 3D world space, where `y` is the vertical axis. Used to
/// sample the ground plane (`y = 0`), e.g. from a camera.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Ray {
    pub origin: Point3<f64>,
    pub direction: Vector3<f64>,
}

impl Ray {
    pub fn new(origin: Point3<f64>, direction: Vector3<f64>) -> Self {
        Self { origin, direction }
    }

    /// Find where this ray crosses the ground plane. Returns `None` if the ray
    /// runs parallel to the plane (no vertical component), or if the plane is
    /// behind the ray's origin.
    pub fn ground_intersection(&self) -> Option<Point2> {
        if self.direction.y.abs() < f64::EPSILON {
            return None;
        }
        let t = -self.origin.y / self.direction.y;
        if t < 0.0 {
            return None;
        }
        let hit = self.origin + self.direction * t;
        Some(Point2::new(hit.x, hit.z))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;
    use strum::IntoEnumIterator;

    fn assert_point_eq(actual: Point2, expected: Point2) {
        assert_approx_eq!(actual.x, expected.x, 1e-9);
        assert_approx_eq!(actual.y, expected.y, 1e-9);
    }

    #[test]
    fn test_hex_to_world() {
        let layout = HexLayout::new(Orientation::PointyTop, 5.0);
        assert_point_eq(layout.hex_to_world(HexPoint::ORIGIN), Point2::ORIGIN);
        assert_point_eq(
            layout.hex_to_world(HexPoint::new(1, 0)),
            Point2::new(5.0 * SQRT_3, 0.0),
        );
        assert_point_eq(
            layout.hex_to_world(HexPoint::new(0, 2)),
            Point2::new(5.0 * SQRT_3, 15.0),
        );

        let layout = HexLayout::new(Orientation::FlatTop, 2.0);
        assert_point_eq(
            layout.hex_to_world(HexPoint::new(1, 0)),
            Point2::new(3.0, SQRT_3),
        );
        assert_point_eq(
            layout.hex_to_world(HexPoint::new(0, 1)),
            Point2::new(0.0, 2.0 * SQRT_3),
        );
    }

    #[test]
    fn test_world_to_hex_round_trip() {
        for orientation in Orientation::iter() {
            for &size in &[0.5, 1.0, 5.0, 123.4] {
                let layout = HexLayout::new(orientation, size);
                for q in -20..=20 {
                    for r in -20..=20 {
                        let hex = HexPoint::new(q, r);
                        assert_eq!(
                            layout.world_to_hex(layout.hex_to_world(hex)),
                            hex,
                            "round trip failed for {} in {:?}",
                            hex,
                            layout
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn test_world_to_hex_inside_hex() {
        // Points a little inside each vertex still belong to that hex
        for orientation in Orientation::iter() {
            let layout = HexLayout::new(orientation, 3.0);
            let hex = HexPoint::new(2, -3);
            let center = layout.hex_to_world(hex);
            for vertex in &layout.vertices(hex) {
                let inside = center + (*vertex - center) * 0.95;
                assert_eq!(layout.world_to_hex(inside), hex);
            }
        }
    }

    #[test]
    fn test_vertices() {
        let layout = HexLayout::new(Orientation::FlatTop, 2.0);
        let vertices = layout.vertices(HexPoint::ORIGIN);
        assert_point_eq(vertices[0], Point2::new(2.0, 0.0));
        assert_point_eq(vertices[3], Point2::new(-2.0, 0.0));

        let layout = HexLayout::new(Orientation::PointyTop, 2.0);
        let vertices = layout.vertices(HexPoint::ORIGIN);
        assert_point_eq(vertices[0], Point2::new(0.0, 2.0));
        for vertex in &vertices {
            assert_approx_eq!(vertex.distance_to(Point2::ORIGIN), 2.0);
        }
    }

    #[test]
    fn test_sides_face_neighbors() {
        // The midpoint of side i is exactly halfway to neighbor i
        for orientation in Orientation::iter() {
            let layout = HexLayout::new(orientation, 1.5);
            let hex = HexPoint::new(-1, 4);
            let center = layout.hex_to_world(hex);
            let vertices = layout.vertices(hex);
            for (i, neighbor) in hex.neighbors(orientation).enumerate() {
                let side = Edge::new(vertices[i], vertices[(i + 1) % 6]);
                let halfway = (center + layout.hex_to_world(neighbor)) / 2.0;
                assert_point_eq(side.midpoint(), halfway);
            }
        }
    }

    #[test]
    fn test_ground_intersection() {
        let ray = Ray::new(
            Point3::new(1.0, 10.0, 2.0),
            Vector3::new(1.0, -2.0, 0.0),
        );
        assert_point_eq(
            ray.ground_intersection().unwrap(),
            Point2::new(6.0, 2.0),
        );

        // Parallel to the ground
        let ray =
            Ray::new(Point3::new(0.0, 10.0, 0.0), Vector3::new(1.0, 0.0, 1.0));
        assert_eq!(ray.ground_intersection(), None);

        // Pointing up, away from the ground
        let ray =
            Ray::new(Point3::new(0.0, 10.0, 0.0), Vector3::new(0.0, 1.0, 0.0));
        assert_eq!(ray.ground_intersection(), None);
    }

    #[test]
    fn test_hex_under_ray() {
        let layout = HexLayout::new(Orientation::PointyTop, 1.0);
        let target = layout.hex_to_world(HexPoint::new(3, -1));
        let ray = Ray::new(
            Point3::new(target.x, 5.0, target.y),
            Vector3::new(0.0, -1.0, 0.0),
        );
        assert_eq!(layout.hex_under_ray(&ray), Some(HexPoint::new(3, -1)));
    }
}
