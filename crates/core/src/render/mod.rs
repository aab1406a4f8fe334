//! Utilities for turning grids into visual output. The grid math itself never
//! depends on anything in here.

#[cfg(feature = "svg")]
pub mod svg;

use crate::util::unit::Point2;

/// Get the smallest axis-aligned box that holds all the given points, as
/// `(min, max)` corners. `None` if there are no points.
pub fn bounding_box(
    points: impl IntoIterator<Item = Point2>,
) -> Option<(Point2, Point2)> {
    points.into_iter().fold(None, |bounds, point| match bounds {
        None => Some((point, point)),
        Some((min, max)) => Some((
            Point2::new(min.x.min(point.x), min.y.min(point.y)),
            Point2::new(max.x.max(point.x), max.y.max(point.y)),
        )),
    })
}
