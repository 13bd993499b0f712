//! Cave map structures
//!
//! Contains coordinates, tiles and the grid that owns them.

mod coords;
mod grid;
mod tile;

pub use coords::{Coordinates, WorldPoint};
pub use grid::Grid;
pub use tile::{Corners, Tile, TileType};
