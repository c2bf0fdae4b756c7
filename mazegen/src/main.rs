use anyhow::{Result, bail};
use bevy_ecs::world::World;
use clap::Parser;
use rand::{SeedableRng, rngs::StdRng};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use mazegen::{
    config::{Difficulty, MazeConfig, init_tracing},
    constants::DEFAULT_MAX_CELLS,
    map::{Grid, LayoutMetrics, grid, pick_spawn_points},
    spawning::spawn_level,
};
use common::{
    constants::{DEFAULT_DEPTH, DEFAULT_PATH_WIDTH, DEFAULT_WALL_WIDTH},
    protocol::Level,
};

// ============================================================================
// CLI Argument Parsing
// ============================================================================

#[derive(Parser, Debug)]
#[command(author, version, about = "Maze level generator", long_about = None)]
struct Args {
    // Maze width in cells
    #[arg(long, required_unless_present = "level", allow_negative_numbers = true)]
    width: Option<i32>,

    // Maze height in cells
    #[arg(long, required_unless_present = "level", allow_negative_numbers = true)]
    height: Option<i32>,

    // Difficulty preset (1 = beginner, 2 = intermediate, 3 = pro)
    #[arg(short, long, conflicts_with_all = ["width", "height"])]
    level: Option<u8>,

    // Wall and floor extrusion depth
    #[arg(long, default_value_t = DEFAULT_DEPTH)]
    depth: f32,

    // Extent of wall cells
    #[arg(long, default_value_t = DEFAULT_WALL_WIDTH)]
    wall_width: f32,

    // Extent of path cells
    #[arg(long, default_value_t = DEFAULT_PATH_WIDTH)]
    path_width: f32,

    // Random seed, drawn from the OS when omitted
    #[arg(short, long)]
    seed: Option<u64>,

    // Refuse grids with more cells than this
    #[arg(long, default_value_t = DEFAULT_MAX_CELLS)]
    max_cells: usize,

    // Write the encoded level to this file
    #[arg(short, long)]
    output: Option<PathBuf>,

    // Print the grid as ASCII art
    #[arg(long, default_value_t = false)]
    print: bool,

    // Materialize the level into an ECS world
    #[arg(long, default_value_t = false)]
    spawn: bool,

    // Number of spawn points to pick from the empty areas when materializing
    #[arg(long, default_value_t = 1)]
    spawn_points: usize,
}

impl Args {
    fn maze_config(&self) -> Result<MazeConfig> {
        let base = match (self.level, self.width, self.height) {
            (Some(level), _, _) => match Difficulty::from_level(level) {
                Some(difficulty) => difficulty.config(),
                None => bail!("The --level argument should be either 1, 2 or 3"),
            },
            (None, Some(width), Some(height)) => MazeConfig::new(width, height),
            _ => bail!("Either --level or both --width and --height are required"),
        };

        Ok(base
            .with_depth(self.depth)
            .with_cell_sizes(self.wall_width, self.path_width)
            .with_max_cells(self.max_cells))
    }
}

// ============================================================================
// Output
// ============================================================================

#[cfg(any(feature = "json", feature = "bincode"))]
fn write_output(path: &Path, level: &Level) -> Result<()> {
    let bytes = common::io::write_level(path, level)?;
    info!("wrote {} bytes to {}", bytes, path.display());
    Ok(())
}

#[cfg(not(any(feature = "json", feature = "bincode")))]
fn write_output(path: &Path, _level: &Level) -> Result<()> {
    bail!("cannot write {}: built without the json or bincode feature", path.display())
}

// ============================================================================
// Main
// ============================================================================

fn main() -> Result<()> {
    init_tracing();

    let args = Args::parse();
    let config = args.maze_config()?;

    let seed = args.seed.unwrap_or_else(rand::random::<u64>);
    info!("generating {}x{} maze with seed {}", config.width, config.height, seed);

    if args.print {
        // Replay the same seed so the printed grid is the one behind the level
        let shape = config.validate()?;
        let grid: Grid = grid::generate(shape, config.max_cells, &mut StdRng::seed_from_u64(seed))?;
        print!("{grid}");
    }

    let mut rng = StdRng::seed_from_u64(seed);
    let level = mazegen::generate_level(&config, &mut rng)?;
    let metrics = LayoutMetrics::new(&config);
    info!(
        "footprint {:.2}x{:.2}, center ({:.2}, {:.2})",
        metrics.total_w, metrics.total_h, level.layout.center.x, level.layout.center.y
    );

    if level.layout.empty_areas.is_empty() {
        warn!("maze has no empty areas to spawn into");
    }

    if let Some(path) = &args.output {
        write_output(path, &level)?;
    }

    if args.spawn {
        let mut world = World::new();
        let entities = spawn_level(&mut world, &level);
        info!("materialized {} entities", entities.len());

        for index in pick_spawn_points(&mut rng, &level.layout, args.spawn_points) {
            let area = &level.layout.empty_areas[index];
            info!(
                "spawn point at cell ({}, {}), center ({:.2}, {:.2})",
                area.row, area.col, area.cx, area.cy
            );
        }
    }

    Ok(())
}
