use rand::Rng;
use std::collections::HashSet;

use crate::{config::MazeConfig, constants::SPAWN_MAX_ATTEMPTS};
use common::protocol::MazeLayout;

// Cumulative cell origins along one axis. Entry `i` is where cell `i` starts,
// the final entry is the axis' full extent.
#[must_use]
pub fn axis_offsets(config: &MazeConfig, cells: usize) -> Vec<f32> {
    let mut offsets = Vec::with_capacity(cells + 1);
    let mut origin = 0.0;
    offsets.push(origin);
    for index in 0..cells {
        origin += config.cell_extent(index);
        offsets.push(origin);
    }
    offsets
}

// Find a random empty area (index into `layout.empty_areas`) that is not yet occupied
#[allow(clippy::implicit_hasher)]
pub fn find_unoccupied_area<R: Rng + ?Sized>(
    rng: &mut R,
    layout: &MazeLayout,
    occupied: &HashSet<usize>,
) -> Option<usize> {
    let count = layout.empty_areas.len();
    if count == 0 {
        return None;
    }

    for _ in 0..SPAWN_MAX_ATTEMPTS {
        let index = rng.random_range(0..count);
        if !occupied.contains(&index) {
            return Some(index);
        }
    }

    // Crowded maze: fall back to the first free area in scan order
    (0..count).find(|index| !occupied.contains(index))
}

// Pick up to `count` distinct empty areas for players, cameras or pickups
pub fn pick_spawn_points<R: Rng + ?Sized>(rng: &mut R, layout: &MazeLayout, count: usize) -> Vec<usize> {
    let mut occupied = HashSet::new();
    let mut picked = Vec::with_capacity(count.min(layout.empty_areas.len()));

    while picked.len() < count {
        let Some(index) = find_unoccupied_area(rng, layout, &occupied) else {
            break;
        };
        occupied.insert(index);
        picked.push(index);
    }

    picked
}
