//! Map renderer — generates a terrain map and writes a biome-colored PNG,
//! one pixel per cell.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use carta_core::{classify_map, Biome, MapGenerator, MapParams, RiverGrid};

#[derive(Parser, Debug)]
#[command(name = "visualize", about = "Render a procedurally generated terrain map to PNG")]
struct Args {
    #[arg(long, default_value_t = 0)]
    seed: u64,

    #[arg(long, default_value_t = 200)]
    width: usize,

    #[arg(long, default_value_t = 200)]
    height: usize,

    /// Percentage of detected peaks that spawn rivers (0-100).
    #[arg(long)]
    river_rate: Option<u32>,

    /// Render with an empty river grid.
    #[arg(long)]
    no_rivers: bool,

    /// JSON file holding a full `MapParams` value; overrides the flags
    /// above. Useful for tweaking thresholds, e.g. lowering the coast to
    /// get more land.
    #[arg(long)]
    params: Option<PathBuf>,

    #[arg(short, long, default_value = "terrain_map.png")]
    output: PathBuf,
}

/// Fixed biome palette.
fn biome_color(biome: Biome) -> [u8; 3] {
    match biome {
        Biome::Sea       => [0, 0, 255],
        Biome::Shallows  => [0, 255, 255],
        Biome::River     => [128, 255, 255],
        Biome::Plain     => [128, 255, 0],
        Biome::Hill      => [255, 165, 0],
        Biome::Mountain  => [165, 42, 42],
        Biome::Alpine    => [255, 255, 255],
        Biome::Desert    => [255, 255, 0],
        Biome::Wasteland => [128, 128, 128],
        Biome::Forest    => [50, 205, 50],
        Biome::Jungle    => [0, 100, 0],
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    let params: MapParams = match &args.params {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("cannot read {}", path.display()))?;
            serde_json::from_str(&text)
                .with_context(|| format!("invalid map parameters in {}", path.display()))?
        }
        None => {
            let mut p = MapParams {
                width: args.width,
                height: args.height,
                seed: args.seed,
                ..MapParams::default()
            };
            if let Some(rate) = args.river_rate {
                p.river_rate = rate;
            }
            p
        }
    };

    println!("Generating {}x{} map, seed {}…", params.width, params.height, params.seed);
    let mut result = MapGenerator::new().generate(&params)?;

    if args.no_rivers {
        result.rivers = RiverGrid::empty(params.width, params.height);
        result.biomes = classify_map(&result.terrain, &result.rivers, &params.thresholds)?;
    }

    let height_map = result.terrain.height_map()?;
    println!(
        "height: max = {:.4}, min = {:.4}",
        height_map.max_value(),
        height_map.min_value()
    );
    println!("river/lake cells: {}", result.rivers.water_cells());

    let mut img = image::RgbImage::new(params.width as u32, params.height as u32);
    for row in 0..params.height {
        for col in 0..params.width {
            let [r, g, b] = biome_color(result.biomes[row * params.width + col]);
            img.put_pixel(col as u32, row as u32, image::Rgb([r, g, b]));
        }
    }
    img.save(&args.output)
        .with_context(|| format!("failed to save {}", args.output.display()))?;
    println!("Wrote {}", args.output.display());

    Ok(())
}
