//! Dungeon generator
//!
//! Generates one dungeon and prints it as an ASCII map, a room summary or
//! JSON.

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use tracing::{Level, info};
use tracing_subscriber::EnvFilter;

use dg_core::{DungeonConfig, DungeonGenerator, DungeonRng};

#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum OutputFormat {
    /// Text map of the dungeon
    #[default]
    Ascii,
    /// One line per room
    Summary,
    /// Full dungeon as pretty JSON
    Json,
}

/// Procedural dungeon generator
#[derive(Parser, Debug)]
#[command(name = "dungeon-gen")]
#[command(author, version, about = "Generate a room-and-corridor dungeon", long_about = None)]
struct Args {
    /// JSON config file; flags below override its values
    #[arg(short = 'c', long = "config")]
    config: Option<PathBuf>,

    /// Seed (defaults to the current time)
    #[arg(short = 's', long = "seed")]
    seed: Option<u64>,

    /// Target number of rooms
    #[arg(short = 'r', long = "rooms")]
    rooms: Option<u32>,

    /// Map width in tiles
    #[arg(long = "width")]
    width: Option<i32>,

    /// Map height in tiles
    #[arg(long = "height")]
    height: Option<i32>,

    #[arg(short = 'f', long = "format", value_enum, default_value_t = OutputFormat::Ascii)]
    format: OutputFormat,

    /// Verbose output (repeat for more)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Args {
    fn log_level(&self) -> Level {
        match self.verbose {
            0 => Level::WARN,
            1 => Level::INFO,
            2 => Level::DEBUG,
            _ => Level::TRACE,
        }
    }

    /// Config file (or defaults) with command-line overrides applied
    fn build_config(&self) -> anyhow::Result<DungeonConfig> {
        let mut config = match &self.config {
            Some(path) => DungeonConfig::load_from_file(path)
                .with_context(|| format!("loading config from {}", path.display()))?,
            None => DungeonConfig::default(),
        };

        if let Some(seed) = self.seed {
            config.seed = Some(seed);
        }
        if let Some(rooms) = self.rooms {
            config.room_count = rooms;
        }
        if let Some(width) = self.width {
            config.map_width = width;
        }
        if let Some(height) = self.height {
            config.map_height = height;
        }

        config.validate().context("invalid configuration")?;
        Ok(config)
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let filter = EnvFilter::from_default_env().add_directive(args.log_level().into());
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();

    let config = args.build_config()?;
    let seed = config.resolve_seed();
    info!(seed, rooms = config.room_count, "generating dungeon");

    let dungeon = DungeonGenerator::new(config, DungeonRng::new(seed))
        .generate()
        .with_context(|| format!("generating dungeon with seed {}", seed))?;

    match args.format {
        OutputFormat::Ascii => {
            println!("seed {}", dungeon.seed());
            print!("{}", dungeon.to_ascii());
        }
        OutputFormat::Summary => print!("{}", dungeon.summary()),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&dungeon)?),
    }

    Ok(())
}
