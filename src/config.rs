// config.rs - Terrain synthesis tunables
//
// Defaults reproduce the ocean floor demo scene. Every field can be
// overridden from JSON (missing fields fall back to the default).

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::error::{Result, TerrainError};

/// Largest finite-difference reach accepted from a config
pub const MAX_NORMAL_OFFSET: usize = 64;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TerrainConfig {
    /// Number of noise passes
    pub octaves: u32,
    /// Sample spacing multiplier applied after each octave
    pub frequency_step: f64,
    /// Noise scale per octave, multiplied by the current spacing
    pub amplitude: f64,
    /// Noise slice offset is drawn from `0..z_range`
    pub z_range: f64,

    pub light_direction: Vec3,
    /// Constant y component of the finite-difference normal
    pub slope: f32,
    /// Neighbor distance (in cells) for the finite differences
    pub normal_offset: usize,
    /// Height-to-brightness factor. Tuned by eye, no unit.
    pub ambient_scale: f32,

    pub upscale: u32,
    /// Dither adds `0..dither` to each pixel; 0 or 1 disables the pass
    pub dither: u32,
}

impl Default for TerrainConfig {
    fn default() -> Self {
        Self {
            octaves: 4,
            frequency_step: 5.0,
            amplitude: 1.75,
            z_range: 100.0,
            light_direction: Vec3::ONE,
            slope: 2.0,
            normal_offset: 2,
            ambient_scale: 0.007,
            upscale: 4,
            dither: 5,
        }
    }
}

impl TerrainConfig {
    pub fn validate(&self) -> Result<()> {
        if self.upscale == 0 {
            return Err(TerrainError::InvalidUpscale(self.upscale));
        }
        if !self.frequency_step.is_finite() || self.frequency_step <= 0.0 {
            return Err(TerrainError::InvalidConfig("frequency_step must be positive"));
        }
        if !self.amplitude.is_finite() || !self.z_range.is_finite() {
            return Err(TerrainError::InvalidConfig("amplitude and z_range must be finite"));
        }
        if self.normal_offset > MAX_NORMAL_OFFSET {
            return Err(TerrainError::InvalidConfig("normal_offset too large"));
        }
        if !self.light_direction.is_finite() {
            return Err(TerrainError::InvalidConfig("light_direction must be finite"));
        }
        Ok(())
    }
}
