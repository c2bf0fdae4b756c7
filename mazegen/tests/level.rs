use rand::{SeedableRng, rngs::StdRng};

use common::protocol::{Position, SegmentKind};
use mazegen::{
    GridShape, MazeConfig, MazeError, generate_level,
    map::{
        LayoutMetrics, axis_offsets,
        grid::{carve_maze, generate, inject_loops},
        merge_segments, wall_color,
    },
};

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-4
}

#[test]
fn test_shape_formula() {
    for width in 1..40 {
        for height in [1, 2, 3, 10, 25] {
            let config = MazeConfig::new(width, height);
            let level = generate_level(&config, &mut StdRng::seed_from_u64(0)).unwrap();
            let (rows, cols) = level.layout.shape;

            assert_eq!(rows, ((height / 2) * 2 + 1).max(3) as usize);
            assert_eq!(cols, ((width / 2) * 2 + 1).max(3) as usize);
            assert!(rows % 2 == 1 && cols % 2 == 1);
        }
    }
}

#[test]
fn test_smallest_maze() {
    let level = generate_level(&MazeConfig::new(1, 1), &mut StdRng::seed_from_u64(17)).unwrap();

    assert_eq!(level.layout.shape, (3, 3));
    assert_eq!(level.layout.empty_areas.len(), 1);
    assert_eq!((level.layout.empty_areas[0].row, level.layout.empty_areas[0].col), (1, 1));
    assert_eq!(level.walls().count(), 4);
}

#[test]
fn test_spanning_tree_then_loops() {
    let shape = GridShape::from_dimensions(40, 30);
    let mut rng = StdRng::seed_from_u64(2024);
    let mut grid = carve_maze(shape, &mut rng);

    let rooms = (shape.rows / 2) * (shape.cols / 2);
    assert_eq!(grid.count_passages(), rooms - 1);
    assert!(grid.is_connected());

    let passages = grid.count_passages();
    let opened = inject_loops(&mut grid, &mut rng);

    assert!(opened > 0);
    assert!(opened <= shape.rows * shape.cols / 20);
    assert_eq!(grid.count_passages(), passages + opened);
    assert!(grid.rooms_connected());
    assert!(
        grid.unreachable_paths()
            .iter()
            .all(|&(row, col)| row % 2 == 0 && col % 2 == 0)
    );
}

#[test]
fn test_segments_tile_the_grid() {
    let config = MazeConfig::new(23, 15).with_cell_sizes(0.5, 2.0);
    let shape = config.validate().unwrap();
    let metrics = LayoutMetrics::new(&config);
    let grid = generate(shape, config.max_cells, &mut StdRng::seed_from_u64(5)).unwrap();

    let merged = merge_segments(&grid, &config, &metrics);
    let col_offsets = axis_offsets(&config, shape.cols);
    let row_offsets = axis_offsets(&config, shape.rows);

    for row in 0..shape.rows {
        // Gather every covered x-span of this row, sorted by origin
        let mut spans: Vec<(f32, f32)> = merged
            .walls
            .iter()
            .filter(|w| w.row == row)
            .map(|w| {
                assert!(approx(w.x, col_offsets[w.col_start]));
                assert!(approx(w.w, col_offsets[w.col_end] - col_offsets[w.col_start]));
                assert!(approx(w.y, row_offsets[row]));
                (w.x, w.x + w.w)
            })
            .chain(
                merged
                    .empty_cells
                    .iter()
                    .filter(|c| c.row == row)
                    .map(|c| (col_offsets[c.col], col_offsets[c.col + 1])),
            )
            .collect();
        spans.sort_by(|a, b| a.0.total_cmp(&b.0));

        let mut cursor = 0.0;
        for (start, end) in spans {
            assert!(approx(start, cursor), "gap or overlap in row {row} at {start}");
            cursor = end;
        }
        assert!(approx(cursor, col_offsets[shape.cols]));
    }
}

#[test]
fn test_metrics_formula() {
    let config = MazeConfig::new(10, 10);
    let level = generate_level(&config, &mut StdRng::seed_from_u64(9)).unwrap();
    let metrics = LayoutMetrics::new(&config);

    assert!(approx(metrics.total_w, 20.0) && approx(metrics.total_h, 20.0));
    assert_eq!(level.layout.center, Position { x: 10.5, y: 10.5, z: 0.0 });

    let floor = level.floor().unwrap();
    assert_eq!(floor.kind, SegmentKind::Floor);
    assert!(approx(floor.scale.w, 20.0) && approx(floor.scale.h, 20.0));
}

#[test]
fn test_wall_colors_follow_origin() {
    let config = MazeConfig::new(16, 12);
    let metrics = LayoutMetrics::new(&config);
    let level = generate_level(&config, &mut StdRng::seed_from_u64(33)).unwrap();

    for wall in level.walls() {
        let x = wall.position.x - wall.scale.w / 2.0;
        let y = wall.position.y - wall.scale.h / 2.0;
        let expected = wall_color(x, y, &metrics);

        assert!(approx(wall.material.diffuse.r, expected.r));
        assert!(approx(wall.material.diffuse.g, expected.g));
        assert!(approx(wall.material.diffuse.b, expected.b));
        assert!(approx(wall.position.z, config.depth / 2.0));
    }
}

#[test]
fn test_same_seed_same_level() {
    let config = MazeConfig::new(31, 27);
    let a = generate_level(&config, &mut StdRng::seed_from_u64(123)).unwrap();
    let b = generate_level(&config, &mut StdRng::seed_from_u64(123)).unwrap();
    let c = generate_level(&config, &mut StdRng::seed_from_u64(124)).unwrap();

    assert_eq!(a, b);
    assert_ne!(a, c);
}

#[test]
fn test_errors_surface_before_generation() {
    let mut rng = StdRng::seed_from_u64(0);

    assert!(matches!(
        generate_level(&MazeConfig::new(-1, 5), &mut rng),
        Err(MazeError::Configuration(_))
    ));
    assert!(matches!(
        generate_level(&MazeConfig::new(5, 5).with_cell_sizes(1.0, -3.0), &mut rng),
        Err(MazeError::Configuration(_))
    ));
    assert!(matches!(
        generate_level(&MazeConfig::new(5000, 5000), &mut rng),
        Err(MazeError::Generation(_))
    ));
}

#[cfg(any(feature = "json", feature = "bincode"))]
#[test]
fn test_level_survives_encoding() {
    let level = generate_level(&MazeConfig::new(6, 6), &mut StdRng::seed_from_u64(4)).unwrap();
    let data = common::io::encode_level(&level).unwrap();
    assert_eq!(common::io::decode_level(&data).unwrap(), level);
}
