// terrain.rs - Height field synthesis and queries
//
// Grid coordinates: x runs along a row (width), z selects the row (depth).
// Samples are stored row-major so the flat slice can go straight to JS.

use ndarray::Array2;
use noise::{NoiseFn, Perlin};

use super::SeededRandom;
use crate::config::TerrainConfig;
use crate::error::{Result, TerrainError};

#[derive(Clone, Debug, PartialEq)]
pub struct HeightField {
    data: Array2<u8>,
}

impl HeightField {
    /// Wrap existing row-major samples
    pub fn from_samples(width: usize, depth: usize, samples: Vec<u8>) -> Result<Self> {
        check_dimensions(width, depth)?;
        let data = Array2::from_shape_vec((depth, width), samples)
            .map_err(|_| TerrainError::InvalidDimension { width, depth })?;
        Ok(Self { data })
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.data.ncols()
    }

    #[inline]
    pub fn depth(&self) -> usize {
        self.data.nrows()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Sample at (x, z), None outside the grid
    #[inline]
    pub fn get(&self, x: usize, z: usize) -> Option<u8> {
        self.data.get((z, x)).copied()
    }

    /// Sample at (x, z) with both coordinates clamped to the grid edge
    #[inline]
    pub fn get_clamped(&self, x: isize, z: isize) -> u8 {
        let x = x.clamp(0, self.width() as isize - 1) as usize;
        let z = z.clamp(0, self.depth() as isize - 1) as usize;
        self.data[[z, x]]
    }

    /// Row-major samples
    pub fn as_slice(&self) -> &[u8] {
        self.data.as_slice().unwrap_or(&[])
    }

    pub fn max(&self) -> u8 {
        self.data.iter().copied().max().unwrap_or(0)
    }

    /// Per-vertex elevations for a width x depth plane, row-major
    pub fn vertex_heights(&self, vertical_scale: f32) -> Vec<f32> {
        self.data.iter().map(|&h| h as f32 * vertical_scale).collect()
    }
}

fn check_dimensions(width: usize, depth: usize) -> Result<()> {
    if width == 0 || depth == 0 || width.checked_mul(depth).is_none() {
        return Err(TerrainError::InvalidDimension { width, depth });
    }
    Ok(())
}

/// Height field with default tunables
pub fn generate_height_field(width: usize, depth: usize, seed: f64) -> Result<HeightField> {
    generate_height_field_with(width, depth, seed, &TerrainConfig::default())
}

pub fn generate_height_field_with(
    width: usize,
    depth: usize,
    seed: f64,
    config: &TerrainConfig,
) -> Result<HeightField> {
    let mut rng = SeededRandom::new(seed);
    synthesize_heights(width, depth, &mut rng, config)
}

/// Accumulate `config.octaves` passes of Perlin noise into a fresh grid.
///
/// Draws exactly one value from `rng` (the noise slice offset), leaving it
/// positioned for whatever the caller does next.
pub fn synthesize_heights(
    width: usize,
    depth: usize,
    rng: &mut SeededRandom,
    config: &TerrainConfig,
) -> Result<HeightField> {
    check_dimensions(width, depth)?;
    config.validate()?;

    let perlin = Perlin::new(Perlin::DEFAULT_SEED);
    let z = rng.next_f64() * config.z_range;
    let mut data = Array2::<u8>::zeros((depth, width));

    let mut quality = 1.0f64;
    for _ in 0..config.octaves {
        for ((row, col), h) in data.indexed_iter_mut() {
            let n = perlin.get([col as f64 / quality, row as f64 / quality, z]);
            // Byte storage: truncate each step, saturate instead of wrapping
            *h = (*h as f64 + (n * quality * config.amplitude).abs()) as u8;
        }
        quality *= config.frequency_step;
    }

    log::debug!("height field {}x{} z={:.3} peak={}", width, depth, z, data.iter().max().unwrap_or(&0));
    Ok(HeightField { data })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::DEFAULT_SEED;

    #[test]
    fn four_by_four_is_reproducible() {
        let a = generate_height_field(4, 4, 0.0).unwrap();
        let b = generate_height_field(4, 4, 0.0).unwrap();
        assert_eq!(a.len(), 16);
        assert_eq!(a.as_slice(), b.as_slice());
    }

    #[test]
    fn different_seeds_differ() {
        let a = generate_height_field(64, 64, 0.0).unwrap();
        let b = generate_height_field(64, 64, 17.0).unwrap();
        assert_ne!(a.as_slice(), b.as_slice());
    }

    #[test]
    fn zero_dimension_fails() {
        assert_eq!(
            generate_height_field(0, 8, 1.0),
            Err(TerrainError::InvalidDimension { width: 0, depth: 8 })
        );
        assert!(generate_height_field(8, 0, 1.0).is_err());
    }

    #[test]
    fn non_square_grid_shape() {
        let field = generate_height_field(7, 3, 2.0).unwrap();
        assert_eq!(field.width(), 7);
        assert_eq!(field.depth(), 3);
        assert_eq!(field.as_slice().len(), 21);
        assert!(field.get(6, 2).is_some());
        assert!(field.get(7, 0).is_none());
    }

    #[test]
    fn terrain_has_relief() {
        let field = generate_height_field(128, 128, DEFAULT_SEED).unwrap();
        assert!(field.max() > 0);
    }

    #[test]
    fn zero_octaves_is_flat() {
        let config = TerrainConfig { octaves: 0, ..Default::default() };
        let field = generate_height_field_with(8, 8, 1.0, &config).unwrap();
        assert!(field.as_slice().iter().all(|&h| h == 0));
    }

    #[test]
    fn consumes_one_draw() {
        let mut rng = SeededRandom::new(10.0);
        synthesize_heights(4, 4, &mut rng, &TerrainConfig::default()).unwrap();
        assert_eq!(rng.seed(), 11.0);
    }

    #[test]
    fn clamped_reads_stick_to_edges() {
        let field = HeightField::from_samples(3, 2, vec![1, 2, 3, 4, 5, 6]).unwrap();
        assert_eq!(field.get_clamped(-5, 0), 1);
        assert_eq!(field.get_clamped(9, 0), 3);
        assert_eq!(field.get_clamped(1, -1), 2);
        assert_eq!(field.get_clamped(1, 4), 5);
        assert_eq!(field.get_clamped(2, 1), 6);
    }

    #[test]
    fn from_samples_rejects_wrong_length() {
        assert!(HeightField::from_samples(3, 3, vec![0; 8]).is_err());
    }

    #[test]
    fn vertex_heights_scale() {
        let field = HeightField::from_samples(2, 1, vec![2, 10]).unwrap();
        assert_eq!(field.vertex_heights(5.0), vec![10.0, 50.0]);
    }
}
