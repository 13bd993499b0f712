//! cave-core: seeded cellular-automaton cave generation
//!
//! Produces a 2D tile grid of walls and floors from a seed string, guarantees
//! that every surviving room is reachable from the main room, and classifies
//! which tiles are walkable. The crate does no I/O apart from optional
//! configuration loading.

pub mod cave;
pub mod config;
pub mod error;
pub mod generation;
pub mod generator;
pub mod rng;

mod consts;

pub use cave::{Coordinates, Corners, Grid, Tile, TileType, WorldPoint};
pub use config::{MapConfig, VertexJitter};
pub use consts::*;
pub use error::{ConfigError, GenerationError};
pub use generator::{generate, GenerationResult, GenerationStats, MapGenerator};
pub use rng::MapRng;
