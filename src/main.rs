use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use stampgen::{
    compose_stamp, model::parse_color, parameters_from_json, render_svg_document, scene_to_json,
    write_png, write_svg, StampParameters, StampScene,
};

#[derive(Parser)]
#[command(name = "stampgen")]
#[command(about = "Render a circular company stamp to SVG or PNG", long_about = None)]
#[command(version)]
struct Cli {
    /// JSON file with stamp parameters; flags override its values
    #[arg(long, value_hint = clap::ValueHint::FilePath)]
    params: Option<PathBuf>,

    /// Company name, curved along the rim
    #[arg(long)]
    name: Option<String>,

    /// Company number (upper center line)
    #[arg(long)]
    number: Option<String>,

    /// Registration code (lower center line)
    #[arg(long)]
    registration: Option<String>,

    /// Stamp diameter in pixels (200-500)
    #[arg(long)]
    size: Option<f64>,

    /// Ink colour: black, red, blue, green or #rrggbb
    #[arg(long)]
    color: Option<String>,

    /// Rotation of the whole stamp in degrees (-45 to 45)
    #[arg(long, allow_hyphen_values = true)]
    rotation: Option<f64>,

    /// Where the company name starts along the rim, in degrees (0-359)
    #[arg(long)]
    legend_rotation: Option<f64>,

    /// Write the stamp as an SVG document
    #[arg(long, value_hint = clap::ValueHint::FilePath)]
    svg: Option<PathBuf>,

    /// Write the stamp as a PNG image
    #[arg(long, value_hint = clap::ValueHint::FilePath)]
    png: Option<PathBuf>,

    /// Print the composed scene as JSON
    #[arg(long)]
    scene_json: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn parameters(&self) -> Result<StampParameters> {
        let mut params = match &self.params {
            Some(path) => {
                let json = std::fs::read_to_string(path)
                    .with_context(|| format!("Failed to read '{}'", path.display()))?;
                parameters_from_json(&json)
                    .with_context(|| format!("Failed to parse '{}'", path.display()))?
            }
            None => StampParameters::default(),
        };

        if let Some(name) = &self.name {
            params.company_name = name.clone();
        }
        if let Some(number) = &self.number {
            params.company_number = number.clone();
        }
        if let Some(registration) = &self.registration {
            params.registration_code = registration.clone();
        }
        if let Some(size) = self.size {
            params.size = size;
        }
        if let Some(color) = &self.color {
            params.stroke_color = parse_color(color)?;
        }
        if let Some(rotation) = self.rotation {
            params.overall_rotation_degrees = rotation;
        }
        if let Some(legend_rotation) = self.legend_rotation {
            params.legend_rotation_degrees = legend_rotation;
        }

        params.validate()?;
        Ok(params)
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    run(&cli)
}

fn run(cli: &Cli) -> Result<()> {
    let params = cli.parameters()?;
    debug!(?params, "composing stamp");
    let scene = compose_stamp(&params);
    write_outputs(cli, &scene)
}

/// Produce every requested output for a composed scene.
///
/// SVG is written before PNG, so a raster failure never costs the vector file.
fn write_outputs(cli: &Cli, scene: &StampScene) -> Result<()> {
    if cli.scene_json {
        println!("{}", scene_to_json(scene).context("Failed to serialize scene")?);
    }

    if let Some(path) = &cli.svg {
        write_svg(path, scene)?;
    }

    if let Some(path) = &cli.png {
        // SVG output above is already on disk; only the PNG is lost
        if let Err(err) = write_png(path, scene) {
            if err.is_raster() && cli.svg.is_none() {
                bail!("{err}. Use --svg for the vector export instead.");
            }
            return Err(err.into());
        }
    }

    if !cli.scene_json && cli.svg.is_none() && cli.png.is_none() {
        print!("{}", render_svg_document(scene));
    }

    Ok(())
}
