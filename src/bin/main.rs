//! Breakguard CLI
//!
//! Inspect block permeability and run sealed-region checks on block lists.

use breakguard::{
    breathable_faces, is_occluding_block, BlockMap, BlockPosition, BlockShape, GuardConfig, InputBlock, SealChecker,
    SearchScratch,
};
use clap::{Parser, Subcommand};
use glam::DVec3;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "breakguard")]
#[command(author, version, about = "Check whether blocks are reachable through walls", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the breathable faces of a single block
    Faces {
        /// Block name (e.g., "minecraft:oak_stairs" or "oak_stairs")
        #[arg(short, long)]
        block: String,

        /// Block properties as key=value pairs (e.g., "facing=north")
        #[arg(short, long, value_parser = parse_property)]
        property: Vec<(String, String)>,
    },

    /// Run the sealed-region check on a JSON block list
    Check {
        /// Input JSON file containing block data
        #[arg(short, long)]
        world: PathBuf,

        /// Position of the broken block, as x,y,z
        #[arg(short, long, value_parser = parse_block_position, allow_hyphen_values = true)]
        target: BlockPosition,

        /// Player eye location, as x,y,z
        #[arg(short, long, value_parser = parse_point, allow_hyphen_values = true)]
        eye: DVec3,

        /// Configuration file (defaults are used when omitted)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Print the default configuration
    DefaultConfig,
}

fn parse_property(s: &str) -> Result<(String, String), String> {
    let parts: Vec<&str> = s.splitn(2, '=').collect();
    if parts.len() != 2 {
        return Err(format!("Invalid property format: '{}'. Use key=value", s));
    }
    Ok((parts[0].to_string(), parts[1].to_string()))
}

fn parse_triple<T: std::str::FromStr>(s: &str) -> Result<[T; 3], String> {
    let parts: Vec<&str> = s.split(',').map(str::trim).collect();
    if parts.len() != 3 {
        return Err(format!("Invalid coordinates: '{}'. Use x,y,z", s));
    }
    let parse = |p: &str| {
        p.parse::<T>()
            .map_err(|_| format!("Invalid coordinate '{}' in '{}'", p, s))
    };
    Ok([parse(parts[0])?, parse(parts[1])?, parse(parts[2])?])
}

fn parse_block_position(s: &str) -> Result<BlockPosition, String> {
    let [x, y, z] = parse_triple::<i32>(s)?;
    Ok(BlockPosition::new(x, y, z))
}

fn parse_point(s: &str) -> Result<DVec3, String> {
    let [x, y, z] = parse_triple::<f64>(s)?;
    Ok(DVec3::new(x, y, z))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Faces { block, property } => show_faces(&block, property),
        Commands::Check {
            world,
            target,
            eye,
            config,
        } => check_world(&world, target, eye, config.as_ref())?,
        Commands::DefaultConfig => {
            println!("{}", GuardConfig::default().to_json_pretty()?);
        }
    }

    Ok(())
}

fn show_faces(block_name: &str, properties: Vec<(String, String)>) {
    let mut block = InputBlock::new(block_name);
    for (key, value) in properties {
        block.properties.insert(key, value);
    }

    let shape = BlockShape::from_block(&block);
    println!("Block: {} {:?}", block.name, block.properties);
    println!("  Occluding: {}", is_occluding_block(&block));
    println!("  Shape: {:?}", shape);
    println!("  Breathable faces: {}", breathable_faces(&block));
}

fn check_world(
    world_path: &PathBuf,
    target: BlockPosition,
    eye: DVec3,
    config_path: Option<&PathBuf>,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = match config_path {
        Some(path) => GuardConfig::load(path)?,
        None => GuardConfig::default(),
    };
    let settings = config.into_settings();
    let checker: SealChecker = settings.checker;

    println!("Loading block data from {:?}...", world_path);
    let world = BlockMap::load(world_path)?;
    println!("  Loaded {} blocks", world.len());

    let mut scratch = SearchScratch::new();
    let report = checker.inspect(&mut scratch, &world, eye, target);

    println!("Sealed-region check at {}:", target);
    println!("  - Search depth: {}", checker.search_depth);
    println!("  - Visited blocks: {}", report.visited);
    println!("  - Sealed: {}", report.sealed);
    println!("  - Eye block {} inside: {}", BlockPosition::containing(eye), report.eye_inside);
    println!("  - Interaction blocked: {}", report.blocked());

    Ok(())
}
