//! Borehole Cone CLI
//!
//! Builds a borehole cone mesh from command-line parameters (or a JSON
//! parameter file) and writes it as a Wavefront OBJ file.
//!
//! ```text
//! borehole-cone --length 100 --sides 4 --rings 2 --dip 60 --out-dir out --name cone
//! borehole-cone --params cone.json --out-dir out
//! ```
//!
//! Exit code 0 on success, 1 on any error.

use anyhow::{Context, Result};
use borehole_mesh::{export, generate_with, ConeDescriptor, ConeParams, NormalizationNotice, Point};
use clap::Parser;
use config::constants::{GlobalConfig, DEFAULT_RINGS, DEFAULT_SIDES, OBJ_DECIMAL_PLACES};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

/// Borehole cone mesh generator
#[derive(Debug, Parser)]
#[command(name = "borehole-cone")]
#[command(version)]
#[command(about = "Approximate a borehole cone as a triangle mesh and write it as OBJ")]
struct Cli {
    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// JSON file with x, y, z, length, sides, rings and dip
    #[arg(long, conflicts_with_all = ["x", "y", "z", "length", "sides", "rings", "dip"])]
    params: Option<PathBuf>,

    /// Anchor x coordinate
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    x: f64,

    /// Anchor y coordinate
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    y: f64,

    /// Anchor z coordinate
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    z: f64,

    /// Borehole length (hemisphere radius)
    #[arg(long, required_unless_present = "params", allow_negative_numbers = true)]
    length: Option<f64>,

    /// Sides of the polygonal cross-section (clamped to at least 3)
    #[arg(long, default_value_t = i64::from(DEFAULT_SIDES), allow_negative_numbers = true)]
    sides: i64,

    /// Latitude rings of the hemisphere (clamped to at least 1)
    #[arg(long, default_value_t = i64::from(DEFAULT_RINGS), allow_negative_numbers = true)]
    rings: i64,

    /// Dip from horizontal in degrees, strictly between 0 and 90
    #[arg(long, required_unless_present = "params", allow_negative_numbers = true)]
    dip: Option<f64>,

    /// Existing directory to write into
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,

    /// Output file name; `.obj` is appended when it has no extension
    #[arg(long, default_value = "cone")]
    name: String,

    /// Decimal places for vertex coordinates
    #[arg(long, default_value_t = OBJ_DECIMAL_PLACES)]
    decimals: u32,
}

impl Cli {
    fn cone(&self) -> Result<(ConeDescriptor, Vec<NormalizationNotice>)> {
        if let Some(path) = &self.params {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading parameter file {}", path.display()))?;
            let params: ConeParams = serde_json::from_str(&text)
                .with_context(|| format!("parsing parameter file {}", path.display()))?;
            return Ok(params.build()?);
        }

        // clap enforces both when no parameter file is given
        let length = self.length.context("--length is required")?;
        let dip = self.dip.context("--dip is required")?;
        let point = Point::new(self.x, self.y, self.z)?;
        Ok(ConeDescriptor::new(point, length, self.sides, self.rings, dip)?)
    }
}

fn run(cli: &Cli) -> Result<PathBuf> {
    let config = GlobalConfig::default()
        .with_decimal_places(cli.decimals)
        .context("invalid --decimals")?;

    let (cone, notices) = cli.cone()?;
    info!(
        sides = cone.sides(),
        rings = cone.rings(),
        clamped = notices.len(),
        "cone parameters accepted"
    );

    let mesh = generate_with(&cone, &config)?;
    let path = export::write_obj(&mesh, &cli.out_dir, &cli.name, &config)?;
    Ok(path)
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match run(&cli) {
        Ok(path) => {
            println!("{}", path.display());
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
