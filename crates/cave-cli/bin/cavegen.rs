//! cavegen: generate a cave map from the command line
//!
//! Prints the map as ASCII (`#` wall, `.` walkable, `,` floor that is not
//! walkable) or as JSON.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use log::{error, info};
use serde::Serialize;
use thiserror::Error;

use cave_core::{
    ConfigError, Coordinates, GenerationError, GenerationResult, GenerationStats, MapConfig,
    MapGenerator, Tile,
};

/// Seeded cave generator
#[derive(Parser, Debug)]
#[command(name = "cavegen")]
#[command(author, version, about = "Generate a connected cave map", long_about = None)]
struct Args {
    /// JSON configuration file; flags override its values
    #[arg(short = 'c', long = "config")]
    config: Option<PathBuf>,

    /// Seed string (disables random seeding)
    #[arg(short = 's', long = "seed")]
    seed: Option<String>,

    /// Pick a fresh random seed
    #[arg(long = "random-seed", conflicts_with = "seed")]
    random_seed: bool,

    /// Map width in tiles
    #[arg(short = 'W', long = "width")]
    width: Option<usize>,

    /// Map height in tiles
    #[arg(short = 'H', long = "height")]
    height: Option<usize>,

    /// World size of one tile
    #[arg(long = "tile-size")]
    tile_size: Option<f32>,

    /// Initial floor chance in percent (45-55)
    #[arg(short = 'f', long = "fill")]
    fill_percentage: Option<u32>,

    /// Smallest wall region that is kept
    #[arg(long = "wall-threshold")]
    wall_threshold: Option<usize>,

    /// Smallest floor region that becomes a room
    #[arg(long = "room-threshold")]
    room_threshold: Option<usize>,

    /// Corridor brush radius
    #[arg(short = 'r', long = "corridor-radius")]
    corridor_radius: Option<u32>,

    /// Number of smoothing passes
    #[arg(long = "smoothing")]
    smoothing_iterations: Option<u32>,

    /// Horizontal corner jitter as a fraction of the tile size (0-0.2)
    #[arg(long = "jitter-x")]
    jitter_x: Option<f32>,

    /// Vertical corner jitter as a fraction of the tile size (0-0.2)
    #[arg(long = "jitter-y")]
    jitter_y: Option<f32>,

    /// Output format
    #[arg(long = "format", value_enum, default_value_t = Format::Ascii)]
    format: Format,

    /// Print this many random walkable tiles
    #[arg(short = 'p', long = "pick", default_value_t = 0)]
    pick: usize,

    /// Verbose logging
    #[arg(short = 'v', long = "verbose")]
    verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Ascii,
    Json,
}

#[derive(Debug, Error)]
enum CliError {
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    #[error("Generation error: {0}")]
    Generation(#[from] GenerationError),

    #[error("Output error: {0}")]
    Output(#[from] serde_json::Error),
}

/// JSON view of a generated map
#[derive(Serialize)]
struct Report<'a> {
    seed: &'a str,
    width: usize,
    height: usize,
    tile_size: f32,
    stats: &'a GenerationStats,
    /// Rows from y = 0 upwards, same legend as the ASCII output
    rows: Vec<String>,
    walkable: &'a [Coordinates],
    picks: &'a [Coordinates],
}

impl Args {
    /// Start from the config file (or defaults) and apply flag overrides
    fn to_config(&self) -> Result<MapConfig, ConfigError> {
        let mut config = match &self.config {
            Some(path) => MapConfig::load_from_file(path)?,
            None => MapConfig::default(),
        };

        if let Some(seed) = &self.seed {
            config.seed = seed.clone();
            config.use_random_seed = false;
        }
        if self.random_seed {
            config.use_random_seed = true;
        }
        if let Some(width) = self.width {
            config.width = width;
        }
        if let Some(height) = self.height {
            config.height = height;
        }
        if let Some(tile_size) = self.tile_size {
            config.tile_size = tile_size;
        }
        if let Some(fill) = self.fill_percentage {
            config.fill_percentage = fill;
        }
        if let Some(threshold) = self.wall_threshold {
            config.wall_threshold = threshold;
        }
        if let Some(threshold) = self.room_threshold {
            config.room_threshold = threshold;
        }
        if let Some(radius) = self.corridor_radius {
            config.corridor_radius = radius;
        }
        if let Some(iterations) = self.smoothing_iterations {
            config.smoothing_iterations = iterations;
        }
        if let Some(x) = self.jitter_x {
            config.vertex_jitter.x = x;
        }
        if let Some(y) = self.jitter_y {
            config.vertex_jitter.y = y;
        }

        config.validate()?;
        Ok(config)
    }
}

fn symbol(tile: &Tile) -> char {
    if tile.is_walkable() {
        '.'
    } else if tile.is_floor() {
        ','
    } else {
        '#'
    }
}

fn render(
    result: &GenerationResult,
    picks: &[Coordinates],
    format: Format,
) -> Result<String, CliError> {
    let ascii = result.grid().to_ascii(symbol);
    match format {
        Format::Ascii => {
            let mut out = ascii;
            for pick in picks {
                out.push_str(&format!("pick {pick}\n"));
            }
            Ok(out)
        }
        Format::Json => {
            let report = Report {
                seed: result.seed(),
                width: result.grid().width(),
                height: result.grid().height(),
                tile_size: result.tile_size(),
                stats: result.stats(),
                rows: ascii.lines().map(str::to_owned).collect(),
                walkable: result.walkable_coordinates(),
                picks,
            };
            Ok(serde_json::to_string_pretty(&report)?)
        }
    }
}

fn run(args: &Args) -> Result<String, CliError> {
    let config = args.to_config()?;
    let mut generator = MapGenerator::new(config);
    generator.generate()?;

    let picks = (0..args.pick)
        .map(|_| generator.random_walkable_tile().map(|tile| tile.coords))
        .collect::<Result<Vec<_>, _>>()?;

    let result = generator
        .current()
        .ok_or(GenerationError::EmptyRegistry)?;
    info!("seed {:?}: {:?}", result.seed(), result.stats());
    render(result, &picks, args.format)
}

fn main() -> ExitCode {
    let args = Args::parse();

    let level = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    match run(&args) {
        Ok(output) => {
            println!("{}", output.trim_end());
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}
