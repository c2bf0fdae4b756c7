use tracing_subscriber::EnvFilter;

use crate::{
    constants::{BEGINNER_SIZE, DEFAULT_MAX_CELLS, INTERMEDIATE_SIZE, MIN_GRID_EDGE, PRO_SIZE},
    error::ConfigurationError,
};
use common::constants::{DEFAULT_DEPTH, DEFAULT_PATH_WIDTH, DEFAULT_WALL_WIDTH};

const LOG_FILTER: &str = "info";

// ============================================================================
// Logging
// ============================================================================

pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(LOG_FILTER));
    tracing_subscriber::fmt().with_env_filter(filter).with_target(false).init();
}

// ============================================================================
// Maze Configuration
// ============================================================================

/// Grid dimensions in cells. Both edges are odd and at least [`MIN_GRID_EDGE`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridShape {
    pub rows: usize,
    pub cols: usize,
}

impl GridShape {
    /// Derives the odd-sized grid for a maze of `width` x `height` cells.
    #[must_use]
    pub fn from_dimensions(width: i32, height: i32) -> Self {
        Self {
            rows: odd_edge(height),
            cols: odd_edge(width),
        }
    }

    #[must_use]
    pub const fn as_tuple(self) -> (usize, usize) {
        (self.rows, self.cols)
    }
}

fn odd_edge(n: i32) -> usize {
    let n = n.max(0) as usize;
    ((n / 2) * 2 + 1).max(MIN_GRID_EDGE)
}

/// Inputs to one maze generation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MazeConfig {
    pub width: i32,
    pub height: i32,
    pub depth: f32,
    pub wall_width: f32,
    pub path_width: f32,
    pub max_cells: usize,
}

impl MazeConfig {
    #[must_use]
    pub const fn new(width: i32, height: i32) -> Self {
        Self {
            width,
            height,
            depth: DEFAULT_DEPTH,
            wall_width: DEFAULT_WALL_WIDTH,
            path_width: DEFAULT_PATH_WIDTH,
            max_cells: DEFAULT_MAX_CELLS,
        }
    }

    #[must_use]
    pub const fn with_depth(mut self, depth: f32) -> Self {
        self.depth = depth;
        self
    }

    #[must_use]
    pub const fn with_cell_sizes(mut self, wall_width: f32, path_width: f32) -> Self {
        self.wall_width = wall_width;
        self.path_width = path_width;
        self
    }

    #[must_use]
    pub const fn with_max_cells(mut self, max_cells: usize) -> Self {
        self.max_cells = max_cells;
        self
    }

    /// Checks the configuration and returns the grid shape it produces.
    pub fn validate(&self) -> Result<GridShape, ConfigurationError> {
        for (name, value) in [("width", self.width), ("height", self.height)] {
            if value <= 0 {
                return Err(ConfigurationError::NonPositiveDimension { name, value });
            }
        }

        for (name, value) in [
            ("depth", self.depth),
            ("wall_width", self.wall_width),
            ("path_width", self.path_width),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigurationError::InvalidSize { name, value });
            }
        }

        Ok(GridShape::from_dimensions(self.width, self.height))
    }

    /// Extent of the cell at `index` along either axis.
    #[must_use]
    pub const fn cell_extent(&self, index: usize) -> f32 {
        if index % 2 == 0 { self.wall_width } else { self.path_width }
    }
}

// ============================================================================
// Difficulty Presets
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Pro,
}

impl Difficulty {
    #[must_use]
    pub const fn from_level(level: u8) -> Option<Self> {
        match level {
            1 => Some(Self::Beginner),
            2 => Some(Self::Intermediate),
            3 => Some(Self::Pro),
            _ => None,
        }
    }

    #[must_use]
    pub const fn maze_size(self) -> i32 {
        match self {
            Self::Beginner => BEGINNER_SIZE,
            Self::Intermediate => INTERMEDIATE_SIZE,
            Self::Pro => PRO_SIZE,
        }
    }

    #[must_use]
    pub const fn config(self) -> MazeConfig {
        let size = self.maze_size();
        MazeConfig::new(size, size)
    }
}
