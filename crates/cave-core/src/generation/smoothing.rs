//! Cellular-automaton smoothing
//!
//! Each pass visits interior tiles x outer, y inner and updates them in place,
//! so later tiles see the already-updated state of earlier ones. Results depend
//! on this order.

use crate::cave::{Grid, TileType};
use crate::consts::NEIGHBOUR_FLOOR_PIVOT;

/// Run `iterations` smoothing passes over the interior.
pub fn smooth(grid: &mut Grid, iterations: u32) {
    for _ in 0..iterations {
        smooth_pass(grid);
    }
}

/// One in-place pass. Returns the number of tiles that changed type.
pub fn smooth_pass(grid: &mut Grid) -> usize {
    let mut changed = 0;
    for c in grid.interior() {
        let neighbours = grid.floor_neighbours(c);
        let next = if neighbours > NEIGHBOUR_FLOOR_PIVOT {
            TileType::Floor
        } else if neighbours < NEIGHBOUR_FLOOR_PIVOT {
            TileType::Wall
        } else {
            continue;
        };
        if grid.tile_type(c) != Some(next) {
            grid.set_type(c, next);
            changed += 1;
        }
    }
    changed
}
