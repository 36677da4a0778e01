use std::fs;
use std::path::PathBuf;

use clap::Parser;
use miette::{IntoDiagnostic, WrapErr};

use vaastu::{CHART_FILENAME, ChartParams, RenderOptions, render_png, render_svg};

/// Render a tilted Vaastu zone chart for a rectangular plot.
#[derive(Parser, Debug)]
#[command(name = "vaastu", version, about)]
struct Args {
    /// Plot width in meters (minimum 1)
    #[arg(long, default_value_t = 40.0)]
    width: f64,

    /// Plot height in meters (minimum 1)
    #[arg(long, default_value_t = 30.0)]
    height: f64,

    /// Tilt angle from north in degrees (-180 to 180)
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    tilt: f64,

    /// Output file; a .svg extension selects SVG output, anything else PNG
    #[arg(short, long, default_value = CHART_FILENAME)]
    output: PathBuf,

    /// Output pixels per meter of plot
    #[arg(long, default_value_t = vaastu::render::defaults::PX_PER_METER)]
    scale: f64,

    /// Draw the rotated plot outline
    #[arg(long)]
    boundary: bool,
}

fn main() -> miette::Result<()> {
    #[cfg(feature = "tracing")]
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let params = ChartParams::new(args.width, args.height, args.tilt)?;
    let options = RenderOptions {
        px_per_meter: args.scale,
        show_boundary: args.boundary,
    };

    let is_svg = args
        .output
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("svg"));

    if is_svg {
        let document = render_svg(&params, &options)?;
        fs::write(&args.output, document)
            .into_diagnostic()
            .wrap_err_with(|| format!("writing {}", args.output.display()))?;
    } else {
        let bytes = render_png(&params, &options)?;
        fs::write(&args.output, bytes)
            .into_diagnostic()
            .wrap_err_with(|| format!("writing {}", args.output.display()))?;
    }

    println!("wrote {}", args.output.display());
    Ok(())
}
