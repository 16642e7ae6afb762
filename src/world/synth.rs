// synth.rs - Full terrain setup pass
//
// One generator instance drives both the height field and the texture
// dither, so a seed reproduces the whole scene floor.

use super::{HeightField, SeededRandom, ShadedTexture, shade_texture, synthesize_heights};
use crate::config::TerrainConfig;
use crate::error::Result;

/// Elevation multiplier the demo applies when building the plane mesh
pub const VERTICAL_SCALE: f32 = 5.0;

#[derive(Clone, Debug, PartialEq)]
pub struct Terrain {
    pub heights: HeightField,
    pub texture: ShadedTexture,
    pub seed: f64,
}

#[derive(Clone, Debug, Default)]
pub struct TerrainSynthesizer {
    config: TerrainConfig,
}

impl TerrainSynthesizer {
    pub fn new(config: TerrainConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &TerrainConfig {
        &self.config
    }

    pub fn height_field(&self, width: usize, depth: usize, seed: f64) -> Result<HeightField> {
        synthesize_heights(width, depth, &mut SeededRandom::new(seed), &self.config)
    }

    pub fn run(&self, width: usize, depth: usize, seed: f64) -> Result<Terrain> {
        let mut rng = SeededRandom::new(seed);
        let heights = synthesize_heights(width, depth, &mut rng, &self.config)?;
        let texture = shade_texture(&heights, &self.config, &mut rng)?;

        log::info!(
            "terrain {}x{} seed={} texture {}x{}",
            width, depth, seed, texture.width(), texture.height()
        );
        Ok(Terrain { heights, texture, seed })
    }
}
