pub mod grid;
mod helpers;
mod metrics;
mod walls;

use rand::Rng;
use tracing::{debug, info};

use crate::{config::MazeConfig, error::MazeError};
use common::protocol::{Level, MazeLayout};

pub use grid::Grid;
pub use helpers::{axis_offsets, find_unoccupied_area, pick_spawn_points};
pub use metrics::LayoutMetrics;
pub use walls::{MergedGeometry, floor_request, merge_segments, wall_color, wall_request};

/// Generate a complete maze level: layout data plus one segment request per box to build.
///
/// Nothing is spawned here; the returned requests are materialized by the caller.
pub fn generate_level<R: Rng + ?Sized>(config: &MazeConfig, rng: &mut R) -> Result<Level, MazeError> {
    let shape = config.validate()?;
    let metrics = LayoutMetrics::new(config);

    let grid = grid::generate(shape, config.max_cells, rng)?;
    debug!(
        "generated {}x{} grid with {} path cells",
        grid.rows(),
        grid.cols(),
        grid.count_paths()
    );

    let MergedGeometry { walls, empty_cells } = merge_segments(&grid, config, &metrics);

    let mut segments = Vec::with_capacity(walls.len() + 1);
    segments.push(floor_request(config, &metrics));
    segments.extend(walls.iter().map(wall_request));

    info!(
        "maze {}x{}: {} wall segments, {} empty areas",
        shape.rows,
        shape.cols,
        walls.len(),
        empty_cells.len()
    );

    Ok(Level {
        layout: MazeLayout {
            shape: shape.as_tuple(),
            center: metrics.center,
            empty_areas: empty_cells,
        },
        segments,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ConfigurationError, GenerationError};
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn test_floor_comes_first() {
        let level = generate_level(&MazeConfig::new(9, 9), &mut StdRng::seed_from_u64(1)).unwrap();

        assert_eq!(level.segments.first(), level.floor());
        assert_eq!(level.walls().count(), level.segments.len() - 1);
    }

    #[test]
    fn test_config_error_before_generation() {
        let err = generate_level(&MazeConfig::new(0, 9), &mut StdRng::seed_from_u64(1)).unwrap_err();
        assert!(matches!(
            err,
            MazeError::Configuration(ConfigurationError::NonPositiveDimension { name: "width", .. })
        ));
    }

    #[test]
    fn test_generation_error_on_oversized_maze() {
        let config = MazeConfig::new(100, 100).with_max_cells(1_000);
        let err = generate_level(&config, &mut StdRng::seed_from_u64(1)).unwrap_err();
        assert!(matches!(err, MazeError::Generation(GenerationError::TooManyCells { .. })));
    }
}
