//! Rooms: floor regions that survived size filtering

use crate::cave::{Coordinates, Grid};

use super::region::Region;

/// A surviving floor region taking part in the connectivity phase.
///
/// Rooms refer to each other by index into the room list of the same run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Room {
    pub tiles: Vec<Coordinates>,
    /// Tiles orthogonally adjacent to a wall, in region order
    pub edge_tiles: Vec<Coordinates>,
    /// Indices of directly connected rooms
    pub connected: Vec<usize>,
    pub is_main: bool,
    pub is_accessible_from_main: bool,
}

impl Room {
    /// Build a room from a floor region of `grid`
    pub fn new(region: Region, grid: &Grid) -> Self {
        let opposite = region.tile_type.opposite();
        let edge_tiles = region
            .tiles
            .iter()
            .copied()
            .filter(|&c| grid.touches(c, opposite))
            .collect();

        Self {
            tiles: region.tiles,
            edge_tiles,
            connected: Vec::new(),
            is_main: false,
            is_accessible_from_main: false,
        }
    }

    /// Number of tiles
    pub fn size(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_connected(&self, other: usize) -> bool {
        self.connected.contains(&other)
    }
}

/// Link two rooms symmetrically
pub(crate) fn link(rooms: &mut [Room], a: usize, b: usize) {
    if !rooms[a].is_connected(b) {
        rooms[a].connected.push(b);
    }
    if !rooms[b].is_connected(a) {
        rooms[b].connected.push(a);
    }
}

/// Mark `start` and everything reachable from it as accessible from the main room
pub(crate) fn mark_accessible(rooms: &mut [Room], start: usize) {
    let mut stack = vec![start];
    while let Some(index) = stack.pop() {
        if rooms[index].is_accessible_from_main {
            continue;
        }
        rooms[index].is_accessible_from_main = true;
        stack.extend(
            rooms[index]
                .connected
                .iter()
                .copied()
                .filter(|&n| !rooms[n].is_accessible_from_main),
        );
    }
}

/// Indices of rooms reachable from `start` through the connection graph
pub fn reachable_from(rooms: &[Room], start: usize) -> Vec<usize> {
    let mut seen = vec![false; rooms.len()];
    let mut order = Vec::new();
    let mut stack = vec![start];
    while let Some(index) = stack.pop() {
        if index >= rooms.len() || seen[index] {
            continue;
        }
        seen[index] = true;
        order.push(index);
        stack.extend(rooms[index].connected.iter().copied());
    }
    order
}
