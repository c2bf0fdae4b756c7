// ============================================================================
// Maze Generation Constants
// ============================================================================

// Smallest grid edge: one carved cell surrounded by walls
pub const MIN_GRID_EDGE: usize = 3;

// Upper bound on rows * cols before generation refuses to run
pub const DEFAULT_MAX_CELLS: usize = 1 << 24;

// One extra opening is attempted per this many grid cells
pub const LOOP_DENSITY_DIVISOR: usize = 20;

// Backtracker step vectors (dx, dy); the wall between lies at half the step
pub const CARVE_STEPS: [(isize, isize); 4] = [(2, 0), (-2, 0), (0, 2), (0, -2)];

// ============================================================================
// Difficulty Presets
// ============================================================================

pub const BEGINNER_SIZE: i32 = 11;
pub const INTERMEDIATE_SIZE: i32 = 21;
pub const PRO_SIZE: i32 = 31;

// ============================================================================
// Spawn Placement
// ============================================================================

pub const SPAWN_MAX_ATTEMPTS: usize = 100;
