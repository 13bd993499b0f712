//! Seeded random fill
//!
//! Every interior tile becomes floor with probability `fill_percentage / 100`.
//! Draws happen x outer, y inner, one draw per interior tile, so the same
//! seed always produces the same noise.

use crate::cave::{Grid, TileType};
use crate::rng::MapRng;

/// Fill the interior with noise. Returns the number of floor tiles.
pub fn seeded_fill(grid: &mut Grid, fill_percentage: u32, rng: &mut MapRng) -> usize {
    let mut floors = 0;
    for c in grid.interior() {
        let tile_type = if rng.percent(fill_percentage) {
            floors += 1;
            TileType::Floor
        } else {
            TileType::Wall
        };
        grid.set_type(c, tile_type);
    }
    floors
}
