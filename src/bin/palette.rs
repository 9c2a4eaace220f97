use anyhow::{Context, Result};
use clap::Parser;
use palette_extract::{ImageSource, Palette, PaletteConfig, publish, rgb_to_hex, run};
use std::path::PathBuf;
use tracing::Level;

/// Extract a sorted color palette from an image and write CSS, HTML and PNG previews.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Input image path
    input: Option<PathBuf>,

    /// Number of colors to extract
    #[arg(short = 'k', long)]
    n_colors: Option<usize>,

    /// Output directory for the generated files
    #[arg(short = 'd', long)]
    out_dir: Option<PathBuf>,

    /// Comma-separated list of hex colors to use as palette (skip k-means)
    #[arg(short = 'c', long)]
    palette: Option<String>,

    /// JSON configuration file; flags override its values
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print the result as JSON instead of one line per color
    #[arg(long)]
    json: bool,

    /// Log debug output
    #[arg(short, long, conflicts_with = "quiet")]
    verbose: bool,

    /// Only log warnings and errors
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let level = if args.verbose {
        Level::DEBUG
    } else if args.quiet {
        Level::WARN
    } else {
        Level::INFO
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    let mut config = match &args.config {
        Some(path) => PaletteConfig::from_json_file(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => PaletteConfig::default(),
    };
    if let Some(n) = args.n_colors {
        config.extraction.n_colors = n;
    }
    if let Some(dir) = args.out_dir {
        config.output_dir = dir;
    }

    let extraction = match (&args.palette, &args.input) {
        (Some(list), _) => {
            let codes: Vec<&str> = list.split(',').collect();
            let palette = Palette::from_hex_codes(&codes).context("parsing --palette")?;
            publish(palette, &config.output_dir).context("writing palette files")?
        }
        (None, Some(input)) => run(ImageSource::Path(input), &config)
            .with_context(|| format!("extracting palette from {}", input.display()))?,
        (None, None) => anyhow::bail!("an input image or --palette is required"),
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&extraction.summary())?);
    } else {
        for swatch in extraction.palette.swatches() {
            println!(
                "Color {}: {} - {}",
                swatch.index + 1,
                rgb_to_hex(swatch.color, 255),
                swatch.psychology
            );
        }
        let files = &extraction.files;
        for path in [&files.css, &files.html, &files.color_card, &files.ui_preview] {
            println!("Saved → {}", path.display());
        }
    }

    Ok(())
}
