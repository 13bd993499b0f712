//! Tile classification
//!
//! A corner grid of `(width + 1) x (height + 1)` nodes sits on the tile grid:
//! node (i, j) is active when tile (i, j) exists and is floor. Each tile reads
//! the four nodes around it into a `Corners` set; only tiles with all four
//! corners active are walkable.

use serde::{Deserialize, Serialize};

use crate::cave::{Coordinates, Corners, Grid, WorldPoint};
use crate::config::VertexJitter;
use crate::rng::MapRng;

/// One node of the corner grid
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CornerNode {
    pub active: bool,
    pub position: WorldPoint,
}

/// Corner nodes, stored column-major like the tile grid
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CornerGrid {
    width: usize,
    height: usize,
    nodes: Vec<Vec<CornerNode>>,
}

impl CornerGrid {
    /// Build the corner grid for `grid`.
    ///
    /// With jitter enabled, each node is offset per axis by a uniform draw in
    /// `[-tile_size * j, tile_size * j]`, x before y, nodes in x-major order.
    /// Axes with zero jitter draw nothing.
    pub fn build(grid: &Grid, jitter: VertexJitter, rng: &mut MapRng) -> Self {
        let width = grid.width() + 1;
        let height = grid.height() + 1;
        let tile_size = grid.tile_size();
        let (reach_x, reach_y) = (tile_size * jitter.x, tile_size * jitter.y);

        let nodes = (0..width)
            .map(|i| {
                (0..height)
                    .map(|j| {
                        let c = Coordinates::new(i as i32, j as i32);
                        let mut position =
                            WorldPoint::tile_center(c, grid.width(), grid.height(), tile_size);
                        if jitter.x > 0.0 {
                            position.x += rng.offset(reach_x);
                        }
                        if jitter.y > 0.0 {
                            position.y += rng.offset(reach_y);
                        }
                        CornerNode {
                            active: grid.is_floor(c),
                            position,
                        }
                    })
                    .collect()
            })
            .collect();

        Self {
            width,
            height,
            nodes,
        }
    }

    /// Number of node columns (tile width + 1)
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of node rows (tile height + 1)
    pub fn height(&self) -> usize {
        self.height
    }

    pub fn node(&self, i: usize, j: usize) -> Option<&CornerNode> {
        self.nodes.get(i).and_then(|column| column.get(j))
    }

    fn is_active(&self, i: usize, j: usize) -> bool {
        self.node(i, j).is_some_and(|n| n.active)
    }

    /// Corner set of tile (x, y)
    pub fn corners_of(&self, c: Coordinates) -> Corners {
        let (x, y) = (c.x as usize, c.y as usize);
        let mut corners = Corners::empty();
        corners.set(Corners::TOP_LEFT, self.is_active(x, y + 1));
        corners.set(Corners::TOP_RIGHT, self.is_active(x + 1, y + 1));
        corners.set(Corners::BOTTOM_RIGHT, self.is_active(x + 1, y));
        corners.set(Corners::BOTTOM_LEFT, self.is_active(x, y));
        corners
    }

    /// All nodes, x outer then y inner
    pub fn nodes(&self) -> impl Iterator<Item = &CornerNode> {
        self.nodes.iter().flat_map(|column| column.iter())
    }
}

/// Set every tile's configuration and return the walkable tiles in x-major order.
pub fn classify_tiles(grid: &mut Grid, corners: &CornerGrid) -> Vec<Coordinates> {
    let mut walkable = Vec::new();
    for tile in grid.tiles_mut() {
        let configuration = corners.corners_of(tile.coords);
        tile.configuration = Some(configuration);
        if tile.is_walkable() {
            walkable.push(tile.coords);
        }
    }
    walkable
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cave::TileType;
    use crate::rng::JITTER_STREAM;

    fn open_grid(width: usize, height: usize) -> Grid {
        let mut grid = Grid::new(width, height, 1.0);
        for c in grid.interior() {
            grid.set_type(c, TileType::Floor);
        }
        grid
    }

    #[test]
    fn test_corner_grid_dimensions() {
        let grid = Grid::new(6, 4, 1.0);
        let corners = CornerGrid::build(&grid, VertexJitter::default(), &mut MapRng::new(1));
        assert_eq!(corners.width(), 7);
        assert_eq!(corners.height(), 5);
        assert_eq!(corners.nodes().count(), 35);
        assert!(corners.nodes().all(|n| !n.active));
    }

    #[test]
    fn test_configuration_bits() {
        // Single floor tile at (2,2): it is the bottom-left node of tile (2,2),
        // bottom-right of (1,2), top-right of (1,1), top-left of (2,1)
        let mut grid = Grid::new(5, 5, 1.0);
        grid.set_type(Coordinates::new(2, 2), TileType::Floor);
        let corners = CornerGrid::build(&grid, VertexJitter::default(), &mut MapRng::new(1));

        assert_eq!(corners.corners_of(Coordinates::new(2, 2)), Corners::BOTTOM_LEFT);
        assert_eq!(corners.corners_of(Coordinates::new(1, 2)), Corners::BOTTOM_RIGHT);
        assert_eq!(corners.corners_of(Coordinates::new(1, 1)), Corners::TOP_RIGHT);
        assert_eq!(corners.corners_of(Coordinates::new(2, 1)), Corners::TOP_LEFT);
        assert_eq!(corners.corners_of(Coordinates::new(3, 3)), Corners::empty());
    }

    #[test]
    fn test_walkable_needs_all_four_corners() {
        let mut grid = open_grid(6, 6);
        let corners = CornerGrid::build(&grid, VertexJitter::default(), &mut MapRng::new(1));
        let walkable = classify_tiles(&mut grid, &corners);

        // Floor spans 1..=4; a tile needs floor at x..=x+1 and y..=y+1
        let expected: Vec<_> = (1..4)
            .flat_map(|x| (1..4).map(move |y| Coordinates::new(x, y)))
            .collect();
        assert_eq!(walkable, expected);
        assert!(grid.tiles().all(|t| t.configuration.is_some()));
        assert!(!grid.tile(Coordinates::new(4, 4)).unwrap().is_walkable());
    }

    #[test]
    fn test_walkable_is_floor() {
        let mut grid = open_grid(8, 8);
        let corners = CornerGrid::build(&grid, VertexJitter::default(), &mut MapRng::new(1));
        for c in classify_tiles(&mut grid, &corners) {
            assert!(grid.is_floor(c));
            assert_eq!(grid.tile(c).unwrap().configuration, Some(Corners::all()));
        }
    }

    #[test]
    fn test_no_jitter_uses_tile_centres() {
        let grid = Grid::new(4, 4, 2.0);
        let corners = CornerGrid::build(&grid, VertexJitter::default(), &mut MapRng::new(1));
        let node = corners.node(0, 0).unwrap();
        assert_eq!(node.position, WorldPoint::new(-3.0, -3.0));
        let node = corners.node(4, 4).unwrap();
        assert_eq!(node.position, WorldPoint::new(5.0, 5.0));
    }

    #[test]
    fn test_jitter_stays_in_range() {
        let grid = Grid::new(10, 10, 2.0);
        let jitter = VertexJitter { x: 0.2, y: 0.1 };
        let mut rng = MapRng::with_stream(7, JITTER_STREAM);
        let corners = CornerGrid::build(&grid, jitter, &mut rng);
        let plain = CornerGrid::build(&grid, VertexJitter::default(), &mut MapRng::new(7));

        let mut moved = false;
        for (a, b) in corners.nodes().zip(plain.nodes()) {
            let (dx, dy) = (a.position.x - b.position.x, a.position.y - b.position.y);
            assert!(dx.abs() <= 0.4 + 1e-4);
            assert!(dy.abs() <= 0.2 + 1e-4);
            moved |= dx != 0.0 || dy != 0.0;
        }
        assert!(moved);
    }

    #[test]
    fn test_jitter_does_not_change_classification() {
        let mut plain_grid = open_grid(7, 7);
        let mut jittered_grid = plain_grid.clone();
        let plain = CornerGrid::build(&plain_grid, VertexJitter::default(), &mut MapRng::new(3));
        let jittered = CornerGrid::build(
            &jittered_grid,
            VertexJitter { x: 0.2, y: 0.2 },
            &mut MapRng::with_stream(3, JITTER_STREAM),
        );
        assert_eq!(
            classify_tiles(&mut plain_grid, &plain),
            classify_tiles(&mut jittered_grid, &jittered)
        );
    }
}
