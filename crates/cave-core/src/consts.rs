//! Generator constants and defaults

use core::ops::RangeInclusive;

/// Default map width in tiles
pub const DEFAULT_WIDTH: usize = 64;
/// Default map height in tiles
pub const DEFAULT_HEIGHT: usize = 64;
/// Default world size of one tile
pub const DEFAULT_TILE_SIZE: f32 = 1.0;
/// Default chance (percent) that an interior tile starts as floor
pub const DEFAULT_FILL_PERCENTAGE: u32 = 50;
/// Default minimum size of a wall region that survives filtering
pub const DEFAULT_WALL_THRESHOLD: usize = 50;
/// Default minimum size of a floor region that becomes a room
pub const DEFAULT_ROOM_THRESHOLD: usize = 50;
/// Default corridor brush radius
pub const DEFAULT_CORRIDOR_RADIUS: u32 = 2;
/// Default number of smoothing passes
pub const DEFAULT_SMOOTHING_ITERATIONS: u32 = 5;
/// Default seed string
pub const DEFAULT_SEED: &str = "Seed";

/// Accepted fill percentages
pub const FILL_PERCENTAGE_RANGE: RangeInclusive<u32> = 45..=55;
/// Accepted vertex jitter, as a fraction of the tile size
pub const VERTEX_JITTER_RANGE: RangeInclusive<f32> = 0.0..=0.2;

/// Smallest width/height that still leaves an interior
pub const MIN_DIMENSION: usize = 3;

/// Floor neighbours above which a cell becomes floor (below: wall)
pub const NEIGHBOUR_FLOOR_PIVOT: usize = 4;

/// Corner configuration of a tile fully enclosed by floor
pub const WALKABLE_CONFIGURATION: u8 = 15;
