//! Tesseroid Discretization Tool
//!
//! Discretizes one tesseroid around one observation point and reports how
//! many small tesseroids were produced.
//!
//! Usage:
//!   cargo run --bin tess_discretize -- --tesseroid=-10,10,-10,10,1,10 --point=0,0,12
//!       [--ratio 2.5] [--field gz] [--radial] [--config settings.json] [--list]

use std::process;

use clap::{ArgAction, Parser, ValueEnum};
use tesseroids::constants::Field;
use tesseroids::{DiscretizationConfig, ObservationPoint, Tesseroid};

/// Type alias for the error type used throughout this module
type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

/// Field whose default accuracy is used when no ratio is given
#[derive(ValueEnum, Clone, Copy, Debug)]
enum FieldArg {
    Potential,
    GZ,
}

impl From<FieldArg> for Field {
    fn from(field: FieldArg) -> Self {
        match field {
            FieldArg::Potential => Field::Potential,
            FieldArg::GZ => Field::GZ,
        }
    }
}

/// Tesseroid Discretization Tool
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Adaptively discretizes a tesseroid around an observation point",
    long_about = None
)]
struct Args {
    /// Tesseroid bounds as west,east,south,north,bottom,top
    #[arg(
        long,
        value_delimiter = ',',
        allow_hyphen_values = true,
        required = true
    )]
    tesseroid: Vec<f64>,

    /// Observation point as longitude,latitude,radius
    #[arg(
        long,
        value_delimiter = ',',
        allow_hyphen_values = true,
        required = true
    )]
    point: Vec<f64>,

    /// Distance-size ratio (overrides the config file and --field)
    #[arg(short, long)]
    ratio: Option<f64>,

    /// Use the default distance-size ratio for this field
    #[arg(short, long, value_enum)]
    field: Option<FieldArg>,

    /// Split along the radial direction too
    #[arg(long, action = ArgAction::SetTrue)]
    radial: bool,

    /// JSON file with discretization settings
    #[arg(short, long)]
    config: Option<String>,

    /// Print every small tesseroid as JSON
    #[arg(short, long, action = ArgAction::SetTrue)]
    list: bool,
}

fn parse_tesseroid(bounds: &[f64]) -> Result<Tesseroid> {
    match *bounds {
        [west, east, south, north, bottom, top] => {
            Ok(Tesseroid::try_new(west, east, south, north, bottom, top)?)
        }
        _ => Err(format!("expected 6 tesseroid bounds, got {}", bounds.len()).into()),
    }
}

fn parse_point(coordinates: &[f64]) -> Result<ObservationPoint> {
    match *coordinates {
        [longitude, latitude, radius] => Ok(ObservationPoint::new(longitude, latitude, radius)),
        _ => Err(format!("expected 3 point coordinates, got {}", coordinates.len()).into()),
    }
}

fn load_config(args: &Args) -> Result<DiscretizationConfig> {
    let mut config = match &args.config {
        Some(path) => DiscretizationConfig::from_json_file(path)?,
        None => DiscretizationConfig::default(),
    };
    if let Some(field) = args.field {
        config.distance_size_ratio = Field::from(field).default_distance_size_ratio();
    }
    if let Some(ratio) = args.ratio {
        config.distance_size_ratio = ratio;
    }
    if args.radial {
        config.radial_discretization = true;
    }
    config.validate()?;
    Ok(config)
}

fn main() -> Result<()> {
    let args = Args::parse();

    let tesseroid = parse_tesseroid(&args.tesseroid)?;
    let point = parse_point(&args.point)?;
    let config = load_config(&args)?;

    let mut scratch = config.scratch();
    match scratch.discretize(&point, &tesseroid, config.distance_size_ratio) {
        Ok(pieces) => {
            println!("Mode: {:?}", config.mode());
            println!("Distance-size ratio: {}", config.distance_size_ratio);
            println!("Small tesseroids: {}", pieces.len());
            if args.list {
                println!("{}", serde_json::to_string_pretty(pieces)?);
            }
            Ok(())
        }
        Err(err) => {
            let code = err.error_code();
            eprintln!("Discretization failed (error code {}): {}", code, err);
            process::exit(1);
        }
    }
}
