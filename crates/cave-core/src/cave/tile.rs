//! Tile types and corner configuration

use bitflags::bitflags;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

use super::{Coordinates, WorldPoint};
use crate::consts::WALKABLE_CONFIGURATION;

/// Terrain of a single tile
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumIter,
)]
#[repr(u8)]
pub enum TileType {
    Floor = 0,
    #[default]
    Wall = 1,
}

impl TileType {
    /// The other tile type
    pub const fn opposite(&self) -> TileType {
        match self {
            TileType::Floor => TileType::Wall,
            TileType::Wall => TileType::Floor,
        }
    }

    pub const fn is_floor(&self) -> bool {
        matches!(self, TileType::Floor)
    }

    /// Get the display character for this tile type
    pub const fn symbol(&self) -> char {
        match self {
            TileType::Floor => '.',
            TileType::Wall => '#',
        }
    }
}

bitflags! {
    /// Which of the four corner nodes around a tile are floor-active
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Corners: u8 {
        const BOTTOM_LEFT = 0x01;
        const BOTTOM_RIGHT = 0x02;
        const TOP_RIGHT = 0x04;
        const TOP_LEFT = 0x08;
    }
}

impl Corners {
    /// Configuration number in 0..=15
    pub const fn configuration(&self) -> u8 {
        self.bits()
    }

    /// All four corners active
    pub const fn is_enclosed(&self) -> bool {
        self.bits() == WALKABLE_CONFIGURATION
    }
}

// Manual serde impl for Corners
impl Serialize for Corners {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.bits().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Corners {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let bits = u8::deserialize(deserializer)?;
        Ok(Corners::from_bits_truncate(bits))
    }
}

/// One grid cell
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tile {
    pub coords: Coordinates,
    pub world: WorldPoint,
    pub tile_type: TileType,
    /// Set by the tile classifier
    pub configuration: Option<Corners>,
}

impl Tile {
    pub fn new(coords: Coordinates, world: WorldPoint, tile_type: TileType) -> Self {
        Self {
            coords,
            world,
            tile_type,
            configuration: None,
        }
    }

    pub fn is_floor(&self) -> bool {
        self.tile_type.is_floor()
    }

    /// Floor fully enclosed by floor on all four corners
    pub fn is_walkable(&self) -> bool {
        self.is_floor() && self.configuration.is_some_and(|c| c.is_enclosed())
    }
}
