use rand::{Rng, seq::SliceRandom};
use std::{
    collections::{HashSet, VecDeque},
    fmt,
};
use tracing::debug;

use crate::{
    config::GridShape,
    constants::{CARVE_STEPS, LOOP_DENSITY_DIVISOR},
    error::GenerationError,
};

// ============================================================================
// Grid Storage
// ============================================================================

/// Row-major wall/path grid. `true` is a wall cell, `false` a path cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<bool>,
}

impl Grid {
    /// Creates a grid with every cell set to wall.
    #[must_use]
    pub fn filled(shape: GridShape) -> Self {
        Self {
            rows: shape.rows,
            cols: shape.cols,
            cells: vec![true; shape.rows * shape.cols],
        }
    }

    #[must_use]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    #[must_use]
    pub const fn cols(&self) -> usize {
        self.cols
    }

    #[must_use]
    pub const fn shape(&self) -> GridShape {
        GridShape {
            rows: self.rows,
            cols: self.cols,
        }
    }

    #[must_use]
    pub fn is_wall(&self, row: usize, col: usize) -> bool {
        self.cells[row * self.cols + col]
    }

    #[must_use]
    pub fn row(&self, row: usize) -> &[bool] {
        &self.cells[row * self.cols..(row + 1) * self.cols]
    }

    fn clear(&mut self, row: usize, col: usize) {
        self.cells[row * self.cols + col] = false;
    }

    #[must_use]
    pub fn count_paths(&self) -> usize {
        self.cells.iter().filter(|&&wall| !wall).count()
    }

    // Path cells at odd/odd indices are the maze's rooms; every other path cell is a passage.
    #[must_use]
    pub fn count_passages(&self) -> usize {
        let mut passages = 0;
        for row in 0..self.rows {
            for col in 0..self.cols {
                if !self.is_wall(row, col) && !(row % 2 == 1 && col % 2 == 1) {
                    passages += 1;
                }
            }
        }
        passages
    }

    // Path cells reachable from `start` through 4-neighbour moves
    fn reachable_from(&self, start: (usize, usize)) -> HashSet<(usize, usize)> {
        let mut visited = HashSet::new();
        if self.is_wall(start.0, start.1) {
            return visited;
        }

        let mut queue = VecDeque::new();
        visited.insert(start);
        queue.push_back(start);

        while let Some((row, col)) = queue.pop_front() {
            let neighbors = [
                (row.wrapping_sub(1), col),
                (row + 1, col),
                (row, col.wrapping_sub(1)),
                (row, col + 1),
            ];
            for (r, c) in neighbors {
                if r < self.rows && c < self.cols && !self.is_wall(r, c) && visited.insert((r, c)) {
                    queue.push_back((r, c));
                }
            }
        }

        visited
    }

    /// Checks whether every path cell is reachable from every other one (4-neighbour moves).
    ///
    /// Holds for a freshly carved maze. Loop injection may open a wall intersection whose
    /// four neighbours are all walls, which leaves that single cell unreachable.
    #[must_use]
    pub fn is_connected(&self) -> bool {
        let Some(start) = self.cells.iter().position(|&wall| !wall) else {
            return true;
        };
        self.reachable_from((start / self.cols, start % self.cols)).len() == self.count_paths()
    }

    /// Checks whether every room (odd/odd cell) is reachable from room (1, 1).
    ///
    /// Opening walls only adds edges, so this holds before and after loop injection.
    #[must_use]
    pub fn rooms_connected(&self) -> bool {
        let visited = self.reachable_from((1, 1));
        (1..self.rows)
            .step_by(2)
            .all(|row| (1..self.cols).step_by(2).all(|col| visited.contains(&(row, col))))
    }

    /// Path cells that cannot be reached from room (1, 1), in row-major order.
    #[must_use]
    pub fn unreachable_paths(&self) -> Vec<(usize, usize)> {
        let visited = self.reachable_from((1, 1));
        (0..self.rows)
            .flat_map(|row| (0..self.cols).map(move |col| (row, col)))
            .filter(|&(row, col)| !self.is_wall(row, col) && !visited.contains(&(row, col)))
            .collect()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.rows {
            for &wall in self.row(row) {
                f.write_str(if wall { "#" } else { " " })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

// ============================================================================
// Grid Generation
// ============================================================================

// One pending cell of the backtracker: its shuffled step order (indices into
// `CARVE_STEPS`) and how many steps were tried.
struct Frame {
    row: usize,
    col: usize,
    order: [u8; 4],
    next: u8,
}

impl Frame {
    fn enter<R: Rng + ?Sized>(grid: &mut Grid, row: usize, col: usize, rng: &mut R) -> Self {
        grid.clear(row, col);
        let mut order = [0, 1, 2, 3];
        order.shuffle(rng);
        Self { row, col, order, next: 0 }
    }
}

/// Carves a perfect maze with a depth-first backtracker starting at cell (1, 1).
///
/// The frame stack replays the recursive formulation exactly: a cell shuffles its four
/// steps when first entered, and after a child returns the remaining steps are retried
/// against the grid as it stands then.
pub fn carve_maze<R: Rng + ?Sized>(shape: GridShape, rng: &mut R) -> Grid {
    let mut grid = Grid::filled(shape);
    let mut stack = vec![Frame::enter(&mut grid, 1, 1, rng)];

    while let Some(frame) = stack.last_mut() {
        if usize::from(frame.next) == frame.order.len() {
            stack.pop();
            continue;
        }

        let (dx, dy) = CARVE_STEPS[usize::from(frame.order[usize::from(frame.next)])];
        frame.next += 1;
        let (row, col) = (frame.row, frame.col);

        let (Some(next_row), Some(next_col)) = (row.checked_add_signed(dy), col.checked_add_signed(dx)) else {
            continue;
        };
        let inside = next_row > 0 && next_row < grid.rows - 1 && next_col > 0 && next_col < grid.cols - 1;
        if !inside || !grid.is_wall(next_row, next_col) {
            continue;
        }

        // Knock down the wall between the two cells
        grid.clear((row + next_row) / 2, (col + next_col) / 2);
        let child = Frame::enter(&mut grid, next_row, next_col, rng);
        stack.push(child);
    }

    grid
}

/// Clears `rows * cols / 20` randomly chosen interior cells, returning how many were still walls.
///
/// Targets are not restricted to wall cells between rooms: wall intersections at even/even
/// indices can be opened too, leaving a path fragment that is not centered on a room.
pub fn inject_loops<R: Rng + ?Sized>(grid: &mut Grid, rng: &mut R) -> usize {
    let attempts = grid.rows * grid.cols / LOOP_DENSITY_DIVISOR;
    let mut opened = 0;

    for _ in 0..attempts {
        let row = rng.random_range(1..=grid.rows - 2);
        let col = rng.random_range(1..=grid.cols - 2);
        if grid.is_wall(row, col) {
            grid.clear(row, col);
            opened += 1;
        }
    }

    debug!("loop injection opened {} of {} attempted walls", opened, attempts);
    opened
}

/// Builds the complete grid: a carved perfect maze with extra loops.
pub fn generate<R: Rng + ?Sized>(shape: GridShape, max_cells: usize, rng: &mut R) -> Result<Grid, GenerationError> {
    let GridShape { rows, cols } = shape;
    let cells = rows
        .checked_mul(cols)
        .ok_or(GenerationError::ShapeOverflow { rows, cols })?;
    if cells > max_cells {
        return Err(GenerationError::TooManyCells {
            rows,
            cols,
            limit: max_cells,
        });
    }

    let mut grid = carve_maze(shape, rng);
    inject_loops(&mut grid, rng);
    Ok(grid)
}
