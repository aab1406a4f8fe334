use anyhow::{anyhow, bail, Context};
use config::{Config, File};
use hexgrid::{
    hex, render::svg::grid_to_svg, timed, ChunkGrid, GridConfig, HexPoint,
    HexVector, Point2,
};
use log::{info, LevelFilter};
use serde::Serialize;
use simple_logger::SimpleLogger;
use std::{
    fs::OpenOptions,
    io::{self, Write},
    path::{Path, PathBuf},
    process,
};
use structopt::StructOpt;

/// CLI for querying a hex grid that is partitioned into hex-shaped chunks.
#[derive(Debug, StructOpt)]
#[structopt(name = "hexgrid")]
struct Opt {
    /// Path to a config file that defines the grid (hex size, chunk radius,
    /// orientations, world size). Supported formats: JSON, TOML. If omitted,
    /// the default grid is used.
    #[structopt(short, long)]
    config: Option<PathBuf>,

    /// The logging level to use. See
    /// https://docs.rs/log/0.4.11/log/enum.LevelFilter.html for options
    #[structopt(long, default_value = "info")]
    log_level: LevelFilter,

    #[structopt(subcommand)]
    command: Command,
}

#[derive(Debug, StructOpt)]
enum Command {
    /// Find the hex and chunk that contain a world position
    Locate {
        #[structopt(long, allow_hyphen_values = true)]
        x: f64,
        #[structopt(long, allow_hyphen_values = true)]
        y: f64,
    },

    /// List the hexes at exactly some distance from a center hex
    Ring {
        #[structopt(long, allow_hyphen_values = true)]
        q: i32,
        #[structopt(long, allow_hyphen_values = true)]
        r: i32,
        #[structopt(long)]
        radius: u32,
    },

    /// Describe a single chunk, by its chunk coordinates
    Chunk {
        #[structopt(long, allow_hyphen_values = true)]
        q: i32,
        #[structopt(long, allow_hyphen_values = true)]
        r: i32,
        /// Print world positions of the chunk's hexes, instead of their
        /// offsets from the chunk center
        #[structopt(long)]
        world: bool,
    },

    /// List the chunks around a world position, out to a world-space radius
    Nearby {
        #[structopt(long, allow_hyphen_values = true)]
        x: f64,
        #[structopt(long, allow_hyphen_values = true)]
        y: f64,
        #[structopt(long)]
        radius: f64,
    },

    /// Render chunks around the origin as an SVG
    Render {
        /// File to write the SVG to
        #[structopt(short, long)]
        output: PathBuf,
        /// Number of chunk rings around the origin to draw. Chunks outside
        /// the world are skipped. Defaults to the whole world.
        #[structopt(long)]
        radius: Option<u32>,
    },
}

#[derive(Debug, Serialize)]
struct LocateOutput {
    position: Point2,
    hex: HexPoint,
    chunk: HexPoint,
    chunk_center: Point2,
    in_range: bool,
}

#[derive(Debug, Serialize)]
struct ChunkOutput {
    chunk: HexPoint,
    center: Point2,
    in_range: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    offsets: Option<Vec<HexVector>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    positions: Option<Vec<Point2>>,
}

fn load_config(config_path: &Path) -> anyhow::Result<GridConfig> {
    let mut settings = Config::new();
    let config_path = config_path.to_str().ok_or_else(|| {
        anyhow!("invalid character in path {:?}", config_path)
    })?;
    settings
        .merge(File::with_name(config_path))
        .context("error reading config file")?;
    settings.try_into().context("error reading config")
}

/// Print a value to stdout as pretty JSON
fn print_json(value: &impl Serialize) -> anyhow::Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    serde_json::to_writer_pretty(&mut handle, value)
        .context("error serializing output")?;
    writeln!(handle)?;
    Ok(())
}

/// Make sure a radius can be enumerated as a ring or disc of hexes
fn check_radius(radius: u32) -> anyhow::Result<u32> {
    if radius > hex::MAX_RADIUS {
        bail!("radius {} is over the limit of {}", radius, hex::MAX_RADIUS);
    }
    Ok(radius)
}

fn render(
    grid: &ChunkGrid,
    output_path: &Path,
    radius: Option<u32>,
) -> anyhow::Result<()> {
    let chunks: Vec<HexPoint> = match radius {
        Some(radius) => hex::disc(HexPoint::ORIGIN, check_radius(radius)?)
            .into_iter()
            .filter(|chunk| grid.is_chunk_in_range(*chunk))
            .collect(),
        None => grid.chunks_in_range(),
    };

    timed!(
        format!(
            "Rendering {} chunks and writing to {:?}",
            chunks.len(),
            output_path
        ),
        log::Level::Info,
        {
            let document = grid_to_svg(grid, &chunks);
            let mut file = OpenOptions::new()
                .write(true)
                .create(true)
                .truncate(true)
                .open(output_path)
                .with_context(|| {
                    format!("error opening output file {:?}", output_path)
                })?;
            file.write_all(document.to_string().as_bytes())
                .with_context(|| {
                    format!("error writing to file {:?}", output_path)
                })?;
        }
    );

    Ok(())
}

/// Run the CLI with some options
fn run(opt: Opt) -> anyhow::Result<()> {
    SimpleLogger::new().with_level(opt.log_level).init()?;

    let config = match &opt.config {
        Some(config_path) => {
            let config = load_config(config_path)?;
            info!("Loaded grid config from {:?}", config_path);
            config
        }
        None => GridConfig::default(),
    };
    let grid = ChunkGrid::new(config)?;

    match opt.command {
        Command::Locate { x, y } => {
            let position = Point2::new(x, y);
            let chunk = grid.world_to_chunk(position);
            print_json(&LocateOutput {
                position,
                hex: grid.hex_layout().world_to_hex(position),
                chunk,
                chunk_center: grid.chunk_to_world(chunk),
                in_range: grid.is_chunk_in_range(chunk),
            })
        }
        Command::Ring { q, r, radius } => {
            print_json(&hex::ring(HexPoint::new(q, r), check_radius(radius)?))
        }
        Command::Chunk { q, r, world } => {
            let chunk = HexPoint::new(q, r);
            let (offsets, positions) = if world {
                (None, Some(grid.chunk_hexes_in_world_space(chunk)))
            } else {
                (Some(grid.chunk_offsets()), None)
            };
            print_json(&ChunkOutput {
                chunk,
                center: grid.chunk_to_world(chunk),
                in_range: grid.is_chunk_in_range(chunk),
                offsets,
                positions,
            })
        }
        Command::Nearby { x, y, radius } => {
            print_json(&grid.chunks_within_radius(Point2::new(x, y), radius)?)
        }
        Command::Render { output, radius } => render(&grid, &output, radius),
    }
}

fn main() {
    let exit_code = match run(Opt::from_args()) {
        Ok(_) => 0,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            1
        }
    };
    process::exit(exit_code);
}
