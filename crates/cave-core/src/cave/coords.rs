//! Grid and world coordinates

use serde::{Deserialize, Serialize};

/// Integer grid position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub struct Coordinates {
    pub x: i32,
    pub y: i32,
}

impl Coordinates {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Offset by (dx, dy)
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    /// Squared Euclidean distance
    pub fn distance_squared(self, other: Coordinates) -> i64 {
        let dx = i64::from(self.x - other.x);
        let dy = i64::from(self.y - other.y);
        dx * dx + dy * dy
    }

    /// The four orthogonal neighbours, in flood-fill visiting order
    pub const fn orthogonal(self) -> [Coordinates; 4] {
        [
            self.offset(-1, 0),
            self.offset(0, -1),
            self.offset(0, 1),
            self.offset(1, 0),
        ]
    }
}

impl From<(i32, i32)> for Coordinates {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl core::fmt::Display for Coordinates {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Position in world space
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct WorldPoint {
    pub x: f32,
    pub y: f32,
}

impl WorldPoint {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Center of tile `coords` on a `width` x `height` grid centered on the origin
    pub fn tile_center(coords: Coordinates, width: usize, height: usize, tile_size: f32) -> Self {
        let axis = |index: i32, extent: usize| {
            -(extent as f32 * tile_size) / 2.0 + index as f32 * tile_size + tile_size / 2.0
        };
        Self::new(axis(coords.x, width), axis(coords.y, height))
    }
}
