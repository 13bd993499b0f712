//! Connected-region extraction
//!
//! Partitions the tiles of one type into maximal 4-connected regions using a
//! breadth-first flood fill.

use std::collections::VecDeque;

use crate::cave::{Coordinates, Grid, TileType};

/// A maximal 4-connected set of same-type tiles, in discovery order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Region {
    pub tile_type: TileType,
    pub tiles: Vec<Coordinates>,
}

impl Region {
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Check if any tile of the region sits on the grid border
    pub fn touches_border(&self, grid: &Grid) -> bool {
        self.tiles.iter().any(|&c| grid.is_border(c))
    }
}

/// All regions of `tile_type`, discovered in row-major (x outer) scan order.
pub fn extract_regions(grid: &Grid, tile_type: TileType) -> Vec<Region> {
    let mut visited = vec![vec![false; grid.height()]; grid.width()];
    let mut regions = Vec::new();

    for c in grid.coordinates() {
        if visited[c.x as usize][c.y as usize] || grid.tile_type(c) != Some(tile_type) {
            continue;
        }
        regions.push(flood_fill(grid, c, &mut visited));
    }

    regions
}

/// Breadth-first fill from `start` across tiles of the same type
fn flood_fill(grid: &Grid, start: Coordinates, visited: &mut [Vec<bool>]) -> Region {
    let tile_type = grid.tile_type(start).unwrap_or_default();
    let mut tiles = Vec::new();
    let mut queue = VecDeque::new();

    visited[start.x as usize][start.y as usize] = true;
    queue.push_back(start);

    while let Some(c) = queue.pop_front() {
        tiles.push(c);
        for n in c.orthogonal() {
            if !grid.in_bounds(n) || visited[n.x as usize][n.y as usize] {
                continue;
            }
            if grid.tile_type(n) == Some(tile_type) {
                visited[n.x as usize][n.y as usize] = true;
                queue.push_back(n);
            }
        }
    }

    Region { tile_type, tiles }
}
