use clap::{Parser, ValueEnum};
use std::fs;
use std::path::PathBuf;
use image_to_palette_wasm::{
    ClusterExtractor, ColorCount, Coordinator, FrequencyExtractor, PaletteExtractor,
    extract_palette_bytes_with,
};
use anyhow::Context;
use anyhow::Result;
use serde_json::json;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Method {
    /// k-means, falling back to exact-color counting on failure
    Auto,
    /// k-means only
    Cluster,
    /// Exact-color counting only
    Frequency,
}

/// Extract dominant color palettes from images.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// One or more input image paths
    #[arg(required = true)]
    inputs: Vec<PathBuf>,

    /// Number of colors to extract
    #[arg(short = 'k', long = "colors", default_value_t = ColorCount::default())]
    n_colors: ColorCount,

    /// Extraction method
    #[arg(short, long, value_enum, default_value_t = Method::Auto)]
    method: Method,

    /// Also print each color as a hex string
    #[arg(long)]
    hex: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let extractor: Box<dyn PaletteExtractor> = match args.method {
        Method::Auto => Box::new(Coordinator::default()),
        Method::Cluster => Box::new(ClusterExtractor::default()),
        Method::Frequency => Box::new(FrequencyExtractor::default()),
    };
    log::info!("extracting {} colors with the {} method", args.n_colors, extractor.name());

    for input in &args.inputs {
        let bytes = fs::read(input)
            .with_context(|| format!("unable to read {}", input.display()))?;
        let palette = extract_palette_bytes_with(&bytes, args.n_colors, extractor.as_ref())
            .with_context(|| format!("palette extraction failed for {}", input.display()))?;

        let mut out = json!({
            "file": input.display().to_string(),
            "colors": palette.to_triples(),
        });
        if args.hex {
            out["hex"] = json!(palette.to_hex_strings());
        }
        println!("{out}");
    }

    Ok(())
}
