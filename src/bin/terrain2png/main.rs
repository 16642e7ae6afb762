// terrain2png - Bake the ocean floor to PNG files
//
// Pipeline:
//   1. Load tunables (defaults, or JSON with any subset of fields)
//   2. Synthesize height field + shaded texture from the seed
//   3. Write heightmap.png (grayscale) and texture.png (RGBA)
//
// Usage: cargo run --bin terrain2png -- <out-dir> [--width N] [--depth N] [--seed F] [--config file.json]

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use image::GrayImage;
use seafloor_engine::world::{DEFAULT_SEED, TerrainSynthesizer};
use seafloor_engine::TerrainConfig;

struct Args {
    out_dir: PathBuf,
    width: usize,
    depth: usize,
    seed: f64,
    config: Option<PathBuf>,
}

fn parse_args() -> Result<Args> {
    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        bail!("Usage: {} <out-dir> [--width N] [--depth N] [--seed F] [--config file.json]", args[0]);
    }

    let mut parsed = Args {
        out_dir: PathBuf::from(&args[1]),
        width: 512,
        depth: 512,
        seed: DEFAULT_SEED,
        config: None,
    };

    let mut i = 2;
    while i < args.len() {
        let value = args.get(i + 1).with_context(|| format!("missing value for {}", args[i]));
        match args[i].as_str() {
            "--width" => parsed.width = value?.parse().context("--width")?,
            "--depth" => parsed.depth = value?.parse().context("--depth")?,
            "--seed" => parsed.seed = value?.parse().context("--seed")?,
            "--config" => parsed.config = Some(PathBuf::from(value?)),
            other => bail!("unknown argument {other}"),
        }
        i += 2;
    }
    Ok(parsed)
}

fn load_config(path: Option<&Path>) -> Result<TerrainConfig> {
    let Some(path) = path else {
        return Ok(TerrainConfig::default());
    };
    let text = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parsing {}", path.display()))
}

fn main() -> Result<()> {
    let args = parse_args()?;
    let config = load_config(args.config.as_deref())?;

    println!("Synthesizing {}x{} terrain (seed {})...", args.width, args.depth, args.seed);
    let synth = TerrainSynthesizer::new(config)?;
    let terrain = synth.run(args.width, args.depth, args.seed)?;
    println!("  Peak height: {}", terrain.heights.max());

    fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("creating {}", args.out_dir.display()))?;

    let heightmap = GrayImage::from_raw(
        args.width as u32,
        args.depth as u32,
        terrain.heights.as_slice().to_vec(),
    )
    .context("height field does not fit a grayscale image")?;
    let height_path = args.out_dir.join("heightmap.png");
    heightmap.save(&height_path).with_context(|| format!("writing {}", height_path.display()))?;
    println!("  Wrote {}", height_path.display());

    let texture_path = args.out_dir.join("texture.png");
    println!("  Texture: {}x{}", terrain.texture.width(), terrain.texture.height());
    terrain
        .texture
        .image()
        .save(&texture_path)
        .with_context(|| format!("writing {}", texture_path.display()))?;
    println!("  Wrote {}", texture_path.display());

    println!("Done!");
    Ok(())
}
