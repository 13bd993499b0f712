//! Size filtering
//!
//! Regions smaller than a threshold flip to the opposite type: wall rubble
//! becomes floor, unreachable floor pockets become wall. Wall regions attached
//! to the border are anchored and never flip.

use log::debug;

use crate::cave::{Grid, TileType};

use super::region::{extract_regions, Region};
use super::room::Room;

/// Counts reported by one filter pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FilterOutcome {
    pub regions: usize,
    pub removed: usize,
}

/// Flip every region of `tile_type` below `threshold`; return the survivors.
pub fn filter_regions(
    grid: &mut Grid,
    tile_type: TileType,
    threshold: usize,
) -> (Vec<Region>, FilterOutcome) {
    let regions = extract_regions(grid, tile_type);
    let mut outcome = FilterOutcome {
        regions: regions.len(),
        removed: 0,
    };
    let mut survivors = Vec::with_capacity(regions.len());

    for region in regions {
        let anchored = tile_type == TileType::Wall && region.touches_border(grid);
        if region.len() >= threshold || anchored {
            survivors.push(region);
            continue;
        }
        for &c in &region.tiles {
            grid.set_type(c, tile_type.opposite());
        }
        outcome.removed += 1;
    }

    debug!(
        "{} filter: {} regions, {} below threshold {}",
        tile_type, outcome.regions, outcome.removed, threshold
    );
    (survivors, outcome)
}

/// Turn small wall regions into floor.
pub fn filter_walls(grid: &mut Grid, wall_threshold: usize) -> FilterOutcome {
    filter_regions(grid, TileType::Wall, wall_threshold).1
}

/// Turn small floor regions into wall and build rooms from the rest,
/// largest first (ties keep discovery order).
pub fn filter_rooms(grid: &mut Grid, room_threshold: usize) -> (Vec<Room>, FilterOutcome) {
    let (survivors, outcome) = filter_regions(grid, TileType::Floor, room_threshold);
    let grid = &*grid;
    let mut rooms: Vec<Room> = survivors
        .into_iter()
        .map(|region| Room::new(region, grid))
        .collect();
    rooms.sort_by(|a, b| b.size().cmp(&a.size()));
    (rooms, outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cave::Coordinates;

    fn set_floor(grid: &mut Grid, tiles: &[(i32, i32)]) {
        for &c in tiles {
            grid.set_type(Coordinates::from(c), TileType::Floor);
        }
    }

    #[test]
    fn test_small_floor_becomes_wall() {
        let mut grid = Grid::new(10, 10, 1.0);
        set_floor(&mut grid, &[(1, 1), (5, 5), (5, 6), (6, 5), (6, 6)]);
        let (rooms, outcome) = filter_rooms(&mut grid, 2);
        assert_eq!(outcome, FilterOutcome { regions: 2, removed: 1 });
        assert_eq!(rooms.len(), 1);
        assert!(!grid.is_floor(Coordinates::new(1, 1)));
        assert_eq!(grid.count(TileType::Floor), 4);
    }

    #[test]
    fn test_threshold_is_inclusive() {
        let mut grid = Grid::new(8, 8, 1.0);
        set_floor(&mut grid, &[(2, 2), (2, 3)]);
        let (rooms, _) = filter_rooms(&mut grid, 2);
        assert_eq!(rooms.len(), 1);
    }

    #[test]
    fn test_rooms_sorted_largest_first_stable() {
        let mut grid = Grid::new(12, 12, 1.0);
        set_floor(&mut grid, &[(1, 1), (1, 2)]);
        set_floor(&mut grid, &[(4, 4), (4, 5), (4, 6)]);
        set_floor(&mut grid, &[(8, 1), (8, 2)]);
        let (rooms, _) = filter_rooms(&mut grid, 0);
        let sizes: Vec<_> = rooms.iter().map(Room::size).collect();
        assert_eq!(sizes, vec![3, 2, 2]);
        assert_eq!(rooms[1].tiles[0], Coordinates::new(1, 1));
        assert_eq!(rooms[2].tiles[0], Coordinates::new(8, 1));
    }

    #[test]
    fn test_wall_rubble_becomes_floor() {
        let mut grid = Grid::new(7, 7, 1.0);
        for c in grid.interior() {
            grid.set_type(c, TileType::Floor);
        }
        grid.set_type(Coordinates::new(3, 3), TileType::Wall);
        let outcome = filter_walls(&mut grid, 2);
        assert_eq!(outcome, FilterOutcome { regions: 2, removed: 1 });
        assert!(grid.is_floor(Coordinates::new(3, 3)));
    }

    #[test]
    fn test_border_wall_region_is_anchored() {
        let mut grid = Grid::new(5, 5, 1.0);
        for c in grid.interior() {
            grid.set_type(c, TileType::Floor);
        }
        let outcome = filter_walls(&mut grid, 1000);
        assert_eq!(outcome.removed, 0);
        for c in grid.coordinates().filter(|&c| grid.is_border(c)) {
            assert_eq!(grid.tile_type(c), Some(TileType::Wall));
        }
    }

    #[test]
    fn test_zero_threshold_keeps_everything() {
        let mut grid = Grid::new(6, 6, 1.0);
        set_floor(&mut grid, &[(1, 1), (3, 3)]);
        let before = grid.clone();
        assert_eq!(filter_walls(&mut grid, 0).removed, 0);
        let (rooms, outcome) = filter_rooms(&mut grid, 0);
        assert_eq!(outcome.removed, 0);
        assert_eq!(rooms.len(), 2);
        assert_eq!(grid, before);
    }
}
