use crate::{hex::HexPoint, render::bounding_box, ChunkGrid};
use svg::{
    node::{
        element::{Group, Line, Polygon},
        Comment,
    },
    Document,
};

const HEX_FILL: &str = "#e9edc9";
const BORDER_HEX_FILL: &str = "#ccd5ae";
const HEX_STROKE: &str = "#a3a380";
const CHUNK_STROKE: &str = "#283618";

/// Render chunks of a grid as a 2D top-down SVG. Every hex of each chunk is
/// drawn as a polygon (seam hexes get a darker fill), then each chunk's
/// outline is drawn on top.
///
/// ## Params
/// - `grid` - The grid that places hexes and chunks
/// - `chunks` - The chunks to draw
pub fn grid_to_svg(grid: &ChunkGrid, chunks: &[HexPoint]) -> Document {
    let hex_layout = grid.hex_layout();
    let offsets = grid.chunk_offsets();
    let line_width = hex_layout.size() * 0.05;

    let mut groups = Vec::with_capacity(chunks.len());
    let mut all_vertices = Vec::new();
    for &chunk in chunks {
        let mut group = Group::new().add(Comment::new(format!("chunk {}", chunk)));

        let positions = grid.chunk_hexes_in_world_space(chunk);
        for (offset, position) in offsets.iter().zip(positions) {
            let vertices = hex_layout.vertices_at(position);
            let fill = if grid.is_border_offset(*offset) {
                BORDER_HEX_FILL
            } else {
                HEX_FILL
            };
            group = group.add(
                Polygon::new()
                    .set(
                        "points",
                        vertices.iter().map(|v| (v.x, v.y)).collect::<Vec<_>>(),
                    )
                    .set("fill", fill)
                    .set("stroke", HEX_STROKE)
                    .set("stroke-width", line_width),
            );
            all_vertices.extend_from_slice(&vertices);
        }

        for edge in grid.chunk_outline(chunk) {
            group = group.add(
                Line::new()
                    .set("x1", edge.start.x)
                    .set("y1", edge.start.y)
                    .set("x2", edge.end.x)
                    .set("y2", edge.end.y)
                    .set("stroke", CHUNK_STROKE)
                    .set("stroke-width", line_width * 4.0),
            );
        }
        groups.push(group);
    }

    // Fit the view box around everything we drew, plus a bit of padding
    let padding = hex_layout.size();
    let view_box = match bounding_box(all_vertices) {
        Some((min, max)) => (
            min.x - padding,
            min.y - padding,
            max.x - min.x + padding * 2.0,
            max.y - min.y + padding * 2.0,
        ),
        None => (0.0, 0.0, 1.0, 1.0),
    };

    let mut document = Document::new()
        .set("viewBox", view_box)
        .add(Comment::new(format!("\n{:#?}\n", grid.config())));
    for group in groups {
        document = document.add(group);
    }
    document
}
