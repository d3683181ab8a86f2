use anyhow::{Context, Result};
use clap::Parser;
use couleur::{PaletteExtractor, DEFAULT_COLOR_COUNT, DEFAULT_QUALITY};
use std::path::PathBuf;

/// Print the color palette of one or more images.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// One or more input image paths
    #[arg(required = true)]
    inputs: Vec<PathBuf>,

    /// Number of colors to aim for
    #[arg(short, long, default_value_t = DEFAULT_COLOR_COUNT)]
    colors: usize,

    /// Sample every Nth pixel; 1 samples them all
    #[arg(short, long, default_value_t = DEFAULT_QUALITY)]
    quality: usize,

    /// Only print the dominant color
    #[arg(long)]
    dominant: bool,

    /// Log progress to stderr; repeat for more detail. `RUST_LOG` overrides this
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn log_level(verbose: u8) -> log::LevelFilter {
    match verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    env_logger::Builder::new()
        .filter_level(log_level(args.verbose))
        .parse_default_env()
        .init();

    let extractor = PaletteExtractor::new().color_count(args.colors).quality(args.quality);

    for input in &args.inputs {
        if args.inputs.len() > 1 {
            println!("{}:", input.display());
        }

        if args.dominant {
            let (r, g, b) = extractor
                .get_color(input)
                .with_context(|| format!("failed to extract the dominant color of {}", input.display()))?;

            println!("#{r:02x}{g:02x}{b:02x}");
        } else {
            let palette = extractor
                .get_palette(input)
                .with_context(|| format!("failed to extract the palette of {}", input.display()))?;

            for swatch in &palette {
                println!("{} {}", swatch.hex(), swatch.population());
            }
        }
    }

    Ok(())
}
