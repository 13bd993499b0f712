//! Generation stages
//!
//! Contains the fill, smoothing, region, filter, connectivity, corridor and
//! classification passes. Each stage takes the grid explicitly.

mod classify;
mod connector;
mod corridor;
mod fill;
mod filter;
mod region;
mod room;
mod smoothing;

pub use classify::{classify_tiles, CornerGrid, CornerNode};
pub use connector::{connect_nearest, connect_rooms, connect_to_main, Connections, Passage};
pub use corridor::{carve_corridor, disk, line, stamp_disk};
pub use fill::seeded_fill;
pub use filter::{filter_regions, filter_rooms, filter_walls, FilterOutcome};
pub use region::{extract_regions, Region};
pub use room::{reachable_from, Room};
pub use smoothing::{smooth, smooth_pass};
