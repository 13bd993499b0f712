//! Generator configuration
//!
//! `MapConfig` carries every knob of a generation run. It loads from JSON
//! (every field optional) and validates before any grid is allocated.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::{ConfigError, GenerationError};
use crate::rng::random_seed_string;

/// Per-axis corner-node jitter, as a fraction of the tile size
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VertexJitter {
    pub x: f32,
    pub y: f32,
}

impl VertexJitter {
    pub fn is_enabled(&self) -> bool {
        self.x > 0.0 || self.y > 0.0
    }
}

/// Configuration of one generation run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapConfig {
    pub seed: String,
    pub use_random_seed: bool,
    pub width: usize,
    pub height: usize,
    pub tile_size: f32,
    pub fill_percentage: u32,
    pub wall_threshold: usize,
    pub room_threshold: usize,
    pub corridor_radius: u32,
    pub smoothing_iterations: u32,
    pub vertex_jitter: VertexJitter,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED.to_string(),
            use_random_seed: true,
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            tile_size: DEFAULT_TILE_SIZE,
            fill_percentage: DEFAULT_FILL_PERCENTAGE,
            wall_threshold: DEFAULT_WALL_THRESHOLD,
            room_threshold: DEFAULT_ROOM_THRESHOLD,
            corridor_radius: DEFAULT_CORRIDOR_RADIUS,
            smoothing_iterations: DEFAULT_SMOOTHING_ITERATIONS,
            vertex_jitter: VertexJitter::default(),
        }
    }
}

impl MapConfig {
    /// Default configuration pinned to a fixed seed
    pub fn seeded(seed: impl Into<String>) -> Self {
        Self {
            seed: seed.into(),
            use_random_seed: false,
            ..Self::default()
        }
    }

    /// Load configuration from a JSON file
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse_json(&contents)
    }

    /// Parse and validate configuration from a JSON string
    pub fn parse_json(contents: &str) -> Result<Self, ConfigError> {
        let config: MapConfig = serde_json::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Check every field against its accepted range
    pub fn validate(&self) -> Result<(), GenerationError> {
        if self.width < MIN_DIMENSION {
            return Err(GenerationError::invalid(
                "width",
                format!("must be at least {MIN_DIMENSION}, got {}", self.width),
            ));
        }
        if self.height < MIN_DIMENSION {
            return Err(GenerationError::invalid(
                "height",
                format!("must be at least {MIN_DIMENSION}, got {}", self.height),
            ));
        }
        if !self.tile_size.is_finite() || self.tile_size <= 0.0 {
            return Err(GenerationError::invalid(
                "tile_size",
                format!("must be a positive number, got {}", self.tile_size),
            ));
        }
        if !FILL_PERCENTAGE_RANGE.contains(&self.fill_percentage) {
            return Err(GenerationError::invalid(
                "fill_percentage",
                format!(
                    "must be within {}..={}, got {}",
                    FILL_PERCENTAGE_RANGE.start(),
                    FILL_PERCENTAGE_RANGE.end(),
                    self.fill_percentage
                ),
            ));
        }
        for (field, value) in [
            ("vertex_jitter.x", self.vertex_jitter.x),
            ("vertex_jitter.y", self.vertex_jitter.y),
        ] {
            if !VERTEX_JITTER_RANGE.contains(&value) {
                return Err(GenerationError::invalid(
                    field,
                    format!(
                        "must be within {}..={}, got {value}",
                        VERTEX_JITTER_RANGE.start(),
                        VERTEX_JITTER_RANGE.end()
                    ),
                ));
            }
        }
        Ok(())
    }

    /// The seed string this run should use
    pub fn resolve_seed(&self) -> String {
        if self.use_random_seed {
            random_seed_string()
        } else {
            self.seed.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(MapConfig::default().validate().is_ok());
    }

    #[test]
    fn test_rejects_small_dimensions() {
        let config = MapConfig {
            width: 2,
            ..MapConfig::seeded("x")
        };
        assert!(matches!(
            config.validate(),
            Err(GenerationError::InvalidConfiguration { field: "width", .. })
        ));

        let config = MapConfig {
            height: 0,
            ..MapConfig::seeded("x")
        };
        assert!(matches!(
            config.validate(),
            Err(GenerationError::InvalidConfiguration { field: "height", .. })
        ));
    }

    #[test]
    fn test_rejects_fill_out_of_range() {
        for fill in [0, 44, 56, 100] {
            let config = MapConfig {
                fill_percentage: fill,
                ..MapConfig::seeded("x")
            };
            assert!(config.validate().is_err(), "fill {fill} should be rejected");
        }
    }

    #[test]
    fn test_rejects_bad_tile_size() {
        for size in [0.0, -1.0, f32::NAN, f32::INFINITY] {
            let config = MapConfig {
                tile_size: size,
                ..MapConfig::seeded("x")
            };
            assert!(config.validate().is_err());
        }
    }

    #[test]
    fn test_rejects_excess_jitter() {
        let config = MapConfig {
            vertex_jitter: VertexJitter { x: 0.3, y: 0.0 },
            ..MapConfig::seeded("x")
        };
        assert!(matches!(
            config.validate(),
            Err(GenerationError::InvalidConfiguration {
                field: "vertex_jitter.x",
                ..
            })
        ));
    }

    #[test]
    fn test_parse_partial_json() {
        let json = r#"{ "seed": "abc", "use_random_seed": false, "width": 20 }"#;
        let config = MapConfig::parse_json(json).unwrap();
        assert_eq!(config.seed, "abc");
        assert_eq!(config.width, 20);
        assert_eq!(config.height, DEFAULT_HEIGHT);
        assert_eq!(config.corridor_radius, DEFAULT_CORRIDOR_RADIUS);
    }

    #[test]
    fn test_parse_rejects_negative_threshold() {
        let err = MapConfig::parse_json(r#"{ "room_threshold": -1 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_parse_rejects_invalid_values() {
        let err = MapConfig::parse_json(r#"{ "fill_percentage": 90 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_resolve_seed() {
        let fixed = MapConfig::seeded("fixed");
        assert_eq!(fixed.resolve_seed(), "fixed");

        let random = MapConfig::default();
        let seed = random.resolve_seed();
        assert!(seed.parse::<i32>().is_ok());
    }
}
