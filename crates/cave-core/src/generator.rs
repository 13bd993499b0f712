//! Generation pipeline
//!
//! Runs the stages in order on a freshly allocated grid:
//! fill, smoothing, wall filter, room filter, connectivity, classification.
//!
//! `generate` is a pure function of the configuration (and, in random-seed
//! mode, of the seed it picks). `MapGenerator` keeps the latest result around
//! and serves random walkable tiles from it.

use hashbrown::HashSet;
use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::cave::{Coordinates, Grid, Tile, TileType};
use crate::config::MapConfig;
use crate::error::GenerationError;
use crate::generation::{
    classify_tiles, connect_rooms, filter_rooms, filter_walls, seeded_fill, smooth, CornerGrid,
    Passage, Room,
};
use crate::rng::{hash_seed, MapRng, JITTER_STREAM, PICK_STREAM};

/// Counts reported by a generation run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationStats {
    pub wall_regions: usize,
    pub wall_regions_removed: usize,
    pub floor_regions: usize,
    pub floor_regions_removed: usize,
    pub rooms: usize,
    pub passages: usize,
    pub repair_passes: usize,
    pub floor_tiles: usize,
    pub walkable_tiles: usize,
}

/// Grid after carving, before classification
#[derive(Debug, Clone)]
pub struct CaveLayout {
    pub grid: Grid,
    pub rooms: Vec<Room>,
    pub passages: Vec<Passage>,
    pub stats: GenerationStats,
}

/// Run every carving stage for `seed`. The configuration is assumed valid.
pub fn carve_layout(config: &MapConfig, seed: &str) -> Result<CaveLayout, GenerationError> {
    let mut stats = GenerationStats::default();
    let mut grid = Grid::new(config.width, config.height, config.tile_size);
    let mut rng = MapRng::from_seed_str(seed);

    let floors = seeded_fill(&mut grid, config.fill_percentage, &mut rng);
    debug!("fill: {floors} floor tiles at {}%", config.fill_percentage);

    smooth(&mut grid, config.smoothing_iterations);
    debug!(
        "smoothing: {} passes, {} floor tiles",
        config.smoothing_iterations,
        grid.count(TileType::Floor)
    );

    let walls = filter_walls(&mut grid, config.wall_threshold);
    stats.wall_regions = walls.regions;
    stats.wall_regions_removed = walls.removed;

    let (mut rooms, floors) = filter_rooms(&mut grid, config.room_threshold);
    stats.floor_regions = floors.regions;
    stats.floor_regions_removed = floors.removed;
    if rooms.is_empty() {
        return Err(GenerationError::NoSurvivingRooms {
            threshold: config.room_threshold,
        });
    }
    stats.rooms = rooms.len();

    let connections = connect_rooms(&mut grid, &mut rooms, config.corridor_radius)?;
    stats.passages = connections.passages.len();
    stats.repair_passes = connections.repairs;
    stats.floor_tiles = grid.count(TileType::Floor);

    Ok(CaveLayout {
        grid,
        rooms,
        passages: connections.passages,
        stats,
    })
}

/// Generate a map from `config`.
pub fn generate(config: &MapConfig) -> Result<GenerationResult, GenerationError> {
    config.validate()?;
    let seed = config.resolve_seed();
    info!(
        "generating {}x{} cave with seed {:?}",
        config.width, config.height, seed
    );

    let CaveLayout {
        mut grid,
        rooms,
        passages,
        mut stats,
    } = carve_layout(config, &seed)?;

    let mut jitter_rng = MapRng::with_stream(hash_seed(&seed), JITTER_STREAM);
    let corners = CornerGrid::build(&grid, config.vertex_jitter, &mut jitter_rng);
    let walkable = classify_tiles(&mut grid, &corners);
    stats.walkable_tiles = walkable.len();
    debug!("classification: {} walkable tiles", walkable.len());

    info!(
        "generated {} rooms, {} passages, {} walkable tiles",
        stats.rooms, stats.passages, stats.walkable_tiles
    );

    Ok(GenerationResult {
        seed,
        walkable_set: walkable.iter().copied().collect(),
        walkable,
        grid,
        corners,
        rooms,
        passages,
        stats,
    })
}

/// A finished, classified map
#[derive(Debug, Clone)]
pub struct GenerationResult {
    seed: String,
    grid: Grid,
    corners: CornerGrid,
    rooms: Vec<Room>,
    passages: Vec<Passage>,
    walkable: Vec<Coordinates>,
    walkable_set: HashSet<Coordinates>,
    stats: GenerationStats,
}

impl GenerationResult {
    /// Seed string the map was generated from
    pub fn seed(&self) -> &str {
        &self.seed
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn tile_size(&self) -> f32 {
        self.grid.tile_size()
    }

    pub fn corners(&self) -> &CornerGrid {
        &self.corners
    }

    /// Rooms, largest first; room 0 is the main room
    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    pub fn passages(&self) -> &[Passage] {
        &self.passages
    }

    pub fn stats(&self) -> &GenerationStats {
        &self.stats
    }

    /// Walkable tiles in x-major order
    pub fn walkable_tiles(&self) -> impl Iterator<Item = &Tile> {
        self.walkable.iter().filter_map(|&c| self.grid.tile(c))
    }

    /// Coordinates of walkable tiles in x-major order
    pub fn walkable_coordinates(&self) -> &[Coordinates] {
        &self.walkable
    }

    pub fn is_walkable(&self, c: Coordinates) -> bool {
        self.walkable_set.contains(&c)
    }

    /// Uniform pick from the walkable tiles
    pub fn random_walkable_tile(&self, rng: &mut MapRng) -> Result<&Tile, GenerationError> {
        rng.choose(&self.walkable)
            .and_then(|&c| self.grid.tile(c))
            .ok_or(GenerationError::EmptyRegistry)
    }
}

/// Holds a configuration and the latest map generated from it
#[derive(Debug, Clone)]
pub struct MapGenerator {
    config: MapConfig,
    current: Option<GenerationResult>,
    picker: MapRng,
}

impl MapGenerator {
    pub fn new(config: MapConfig) -> Self {
        Self {
            config,
            current: None,
            picker: MapRng::with_stream(0, PICK_STREAM),
        }
    }

    pub fn config(&self) -> &MapConfig {
        &self.config
    }

    /// Replace the configuration. The current map is kept until the next
    /// `generate` or `invalidate`.
    pub fn set_config(&mut self, config: MapConfig) {
        self.config = config;
    }

    /// Generate a new map, replacing the previous one.
    ///
    /// On error the previous map is dropped as well.
    pub fn generate(&mut self) -> Result<&GenerationResult, GenerationError> {
        self.current = None;
        let result = generate(&self.config)?;
        self.picker = MapRng::with_stream(hash_seed(result.seed()), PICK_STREAM);
        Ok(self.current.insert(result))
    }

    /// The latest map, if any
    pub fn current(&self) -> Option<&GenerationResult> {
        self.current.as_ref()
    }

    /// Uniform pick from the current map's walkable tiles
    pub fn random_walkable_tile(&mut self) -> Result<&Tile, GenerationError> {
        let Some(result) = self.current.as_ref() else {
            return Err(GenerationError::EmptyRegistry);
        };
        result.random_walkable_tile(&mut self.picker)
    }

    /// Drop the current map
    pub fn invalidate(&mut self) {
        self.current = None;
    }
}
