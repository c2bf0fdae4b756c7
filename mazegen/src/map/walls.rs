use super::{grid::Grid, helpers::axis_offsets, metrics::LayoutMetrics};
use crate::config::MazeConfig;
use common::{
    constants::{FLOOR_DIFFUSE, FLOOR_SHININESS, FLOOR_SPECULAR},
    protocol::{EmptyCell, Material, ModelKind, Position, Rgb, SegmentKind, SegmentRequest, Size, WallSegment},
};

/// Wall runs and walkable cells of one grid, both in row-major scan order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MergedGeometry {
    pub walls: Vec<WallSegment>,
    pub empty_cells: Vec<EmptyCell>,
}

// Diffuse color of a wall run, a gradient over the footprint keyed by the run's origin
#[must_use]
pub fn wall_color(x: f32, y: f32, metrics: &LayoutMetrics) -> Rgb {
    Rgb::new(x / metrics.total_w, y / metrics.total_h, (y / 10.0).cos().abs())
}

// Merge contiguous wall cells of each row into single segments and collect path cell centers
#[must_use]
pub fn merge_segments(grid: &Grid, config: &MazeConfig, metrics: &LayoutMetrics) -> MergedGeometry {
    let row_offsets = axis_offsets(config, grid.rows());
    let col_offsets = axis_offsets(config, grid.cols());
    let mut merged = MergedGeometry::default();

    for row in 0..grid.rows() {
        let cells = grid.row(row);
        let y = row_offsets[row];
        let h = config.cell_extent(row);

        let mut col = 0;
        while col < cells.len() {
            let x = col_offsets[col];

            if !cells[col] {
                merged.empty_cells.push(EmptyCell {
                    row,
                    col,
                    cx: x + config.path_width / 2.0,
                    cy: y + config.path_width / 2.0,
                });
                col += 1;
                continue;
            }

            let col_start = col;
            while col < cells.len() && cells[col] {
                col += 1;
            }

            // Accumulate cell by cell so the width matches a left-to-right sum of extents
            let w = (col_start..col).map(|c| config.cell_extent(c)).fold(0.0, |acc, e| acc + e);

            merged.walls.push(WallSegment {
                row,
                col_start,
                col_end: col,
                x,
                y,
                w,
                h,
                depth: config.depth,
                color: wall_color(x, y, metrics),
            });
        }
    }

    merged
}

// Single floor slab under the whole footprint
#[must_use]
pub fn floor_request(config: &MazeConfig, metrics: &LayoutMetrics) -> SegmentRequest {
    let size = Size {
        w: metrics.total_w,
        h: metrics.total_h,
        depth: config.path_width,
    };

    SegmentRequest {
        kind: SegmentKind::Floor,
        model: ModelKind::Cube,
        position: Position {
            x: metrics.center.x,
            y: metrics.center.y,
            z: -config.path_width / 2.0,
        },
        scale: size,
        bounding_box: size,
        material: Material {
            diffuse: FLOOR_DIFFUSE,
            specular: Some(FLOOR_SPECULAR),
            shininess: Some(FLOOR_SHININESS),
        },
    }
}

// Box centered on the wall run, resting on the floor plane
#[must_use]
pub fn wall_request(wall: &WallSegment) -> SegmentRequest {
    let size = Size {
        w: wall.w,
        h: wall.h,
        depth: wall.depth,
    };

    SegmentRequest {
        kind: SegmentKind::Wall,
        model: ModelKind::Cube,
        position: Position {
            x: wall.x + wall.w / 2.0,
            y: wall.y + wall.h / 2.0,
            z: wall.depth / 2.0,
        },
        scale: size,
        bounding_box: size,
        material: Material::diffuse(wall.color),
    }
}
