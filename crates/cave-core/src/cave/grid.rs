//! The tile grid
//!
//! Tiles are stored column-major (`tiles[x][y]`). The outermost ring of tiles
//! is permanently wall: `set_type` refuses to touch it.

use serde::{Deserialize, Serialize};

use super::{Coordinates, Tile, TileType, WorldPoint};

/// Fixed-size tile array owned by a single generation run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Grid {
    width: usize,
    height: usize,
    tile_size: f32,
    tiles: Vec<Vec<Tile>>,
}

impl Grid {
    /// Create a grid filled with wall
    pub fn new(width: usize, height: usize, tile_size: f32) -> Self {
        let tiles = (0..width)
            .map(|x| {
                (0..height)
                    .map(|y| {
                        let coords = Coordinates::new(x as i32, y as i32);
                        let world = WorldPoint::tile_center(coords, width, height, tile_size);
                        Tile::new(coords, world, TileType::Wall)
                    })
                    .collect()
            })
            .collect();

        Self {
            width,
            height,
            tile_size,
            tiles,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn tile_size(&self) -> f32 {
        self.tile_size
    }

    /// Check if a position lies on the grid
    pub fn in_bounds(&self, c: Coordinates) -> bool {
        c.x >= 0 && c.y >= 0 && (c.x as usize) < self.width && (c.y as usize) < self.height
    }

    /// Check if a position lies on the outermost ring
    pub fn is_border(&self, c: Coordinates) -> bool {
        self.in_bounds(c)
            && (c.x == 0
                || c.y == 0
                || c.x as usize == self.width - 1
                || c.y as usize == self.height - 1)
    }

    /// Check if a position lies strictly inside the border
    pub fn is_interior(&self, c: Coordinates) -> bool {
        self.in_bounds(c) && !self.is_border(c)
    }

    pub fn tile(&self, c: Coordinates) -> Option<&Tile> {
        if !self.in_bounds(c) {
            return None;
        }
        Some(&self.tiles[c.x as usize][c.y as usize])
    }

    pub(crate) fn tile_mut(&mut self, c: Coordinates) -> Option<&mut Tile> {
        if !self.in_bounds(c) {
            return None;
        }
        Some(&mut self.tiles[c.x as usize][c.y as usize])
    }

    pub fn tile_type(&self, c: Coordinates) -> Option<TileType> {
        self.tile(c).map(|t| t.tile_type)
    }

    pub fn is_floor(&self, c: Coordinates) -> bool {
        self.tile_type(c) == Some(TileType::Floor)
    }

    /// Set the type of an interior tile.
    ///
    /// Returns false (and leaves the grid untouched) for border or
    /// out-of-bounds positions.
    pub fn set_type(&mut self, c: Coordinates, tile_type: TileType) -> bool {
        if !self.is_interior(c) {
            return false;
        }
        self.tiles[c.x as usize][c.y as usize].tile_type = tile_type;
        true
    }

    /// All positions, x outer then y inner
    pub fn coordinates(&self) -> impl Iterator<Item = Coordinates> + use<> {
        let (width, height) = (self.width as i32, self.height as i32);
        (0..width).flat_map(move |x| (0..height).map(move |y| Coordinates::new(x, y)))
    }

    /// Interior positions, x outer then y inner
    pub fn interior(&self) -> impl Iterator<Item = Coordinates> + use<> {
        let (width, height) = (self.width as i32, self.height as i32);
        (1..width - 1).flat_map(move |x| (1..height - 1).map(move |y| Coordinates::new(x, y)))
    }

    /// All tiles, x outer then y inner
    pub fn tiles(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.iter().flat_map(|column| column.iter())
    }

    pub(crate) fn tiles_mut(&mut self) -> impl Iterator<Item = &mut Tile> {
        self.tiles.iter_mut().flat_map(|column| column.iter_mut())
    }

    /// Count tiles of a type
    pub fn count(&self, tile_type: TileType) -> usize {
        self.tiles().filter(|t| t.tile_type == tile_type).count()
    }

    /// Floor tiles among the (in-bounds) 8 surrounding cells
    pub fn floor_neighbours(&self, c: Coordinates) -> usize {
        let mut count = 0;
        for dx in -1..=1 {
            for dy in -1..=1 {
                if dx == 0 && dy == 0 {
                    continue;
                }
                if self.is_floor(c.offset(dx, dy)) {
                    count += 1;
                }
            }
        }
        count
    }

    /// Check if any in-bounds orthogonal neighbour has the given type
    pub fn touches(&self, c: Coordinates, tile_type: TileType) -> bool {
        c.orthogonal()
            .iter()
            .any(|&n| self.tile_type(n) == Some(tile_type))
    }

    /// Render the grid as text, one line per row, row 0 first
    pub fn to_ascii(&self, symbol: impl Fn(&Tile) -> char) -> String {
        let mut out = String::with_capacity((self.width + 1) * self.height);
        for y in 0..self.height {
            for x in 0..self.width {
                out.push(symbol(&self.tiles[x][y]));
            }
            out.push('\n');
        }
        out
    }
}

impl core::fmt::Display for Grid {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.to_ascii(|t| t.tile_type.symbol()))
    }
}
