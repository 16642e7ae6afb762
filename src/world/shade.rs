// shade.rs - Shaded surface texture from a height field
//
// Three passes:
//   1. One pixel per cell: Lambert term from a finite-difference normal,
//      tinted by elevation
//   2. Integer pixel replication
//   3. Small additive dither
//
// Neighbor reads near the border are clamped to the edge cell.

use glam::Vec3;
use image::{Rgba, RgbaImage};

use super::{HeightField, SeededRandom};
use crate::config::TerrainConfig;
use crate::error::{Result, TerrainError};

/// RGBA8 texture, alpha always opaque
#[derive(Clone, Debug, PartialEq)]
pub struct ShadedTexture {
    image: RgbaImage,
    upscale: u32,
}

impl ShadedTexture {
    #[inline]
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn upscale(&self) -> u32 {
        self.upscale
    }

    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        self.image.get_pixel_checked(x, y).map(|p| p.0)
    }

    /// Row-major RGBA bytes
    pub fn as_raw(&self) -> &[u8] {
        self.image.as_raw()
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    pub fn into_image(self) -> RgbaImage {
        self.image
    }
}

/// Texture with default tunables, dithered from the demo seed
pub fn generate_shade_texture(
    field: &HeightField,
    light_direction: Vec3,
    upscale: u32,
) -> Result<ShadedTexture> {
    let config = TerrainConfig { light_direction, upscale, ..Default::default() };
    shade_texture(field, &config, &mut SeededRandom::default())
}

pub fn shade_texture(
    field: &HeightField,
    config: &TerrainConfig,
    rng: &mut SeededRandom,
) -> Result<ShadedTexture> {
    config.validate()?;
    let upscale = config.upscale;
    let (w, d) = (field.width() as u32, field.depth() as u32);
    let (tw, th) = w
        .checked_mul(upscale)
        .zip(d.checked_mul(upscale))
        .ok_or(TerrainError::InvalidUpscale(upscale))?;

    let base = base_image(field, config);

    let mut image = RgbaImage::from_fn(tw, th, |x, y| *base.get_pixel(x / upscale, y / upscale));

    if config.dither > 1 {
        for p in image.pixels_mut() {
            let v = rng.next_below(config.dither).min(u8::MAX as u32) as u8;
            p[0] = p[0].saturating_add(v);
            p[1] = p[1].saturating_add(v);
            p[2] = p[2].saturating_add(v);
        }
    }

    log::debug!("shade texture {}x{} (x{})", tw, th, upscale);
    Ok(ShadedTexture { image, upscale })
}

fn base_image(field: &HeightField, config: &TerrainConfig) -> RgbaImage {
    let sun = config.light_direction.normalize_or_zero();
    let o = config.normal_offset as isize;

    RgbaImage::from_fn(field.width() as u32, field.depth() as u32, |x, z| {
        let (x, z) = (x as isize, z as isize);
        let h = |dx: isize, dz: isize| field.get_clamped(x + dx, z + dz) as f32;

        let normal = Vec3::new(h(-o, 0) - h(o, 0), config.slope, h(0, -o) - h(0, o))
            .normalize_or_zero();
        let shade = normal.dot(sun);
        let tint = 0.5 + h(0, 0) * config.ambient_scale;

        Rgba([
            channel((96.0 + shade * 128.0) * tint),
            channel((32.0 + shade * 96.0) * tint),
            channel(shade * 96.0 * tint),
            u8::MAX,
        ])
    })
}

#[inline]
fn channel(v: f32) -> u8 {
    v.clamp(0.0, 255.0).round_ties_even() as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::generate_height_field;

    fn flat(width: usize, depth: usize, h: u8) -> HeightField {
        HeightField::from_samples(width, depth, vec![h; width * depth]).unwrap()
    }

    fn undithered(upscale: u32) -> TerrainConfig {
        TerrainConfig { upscale, dither: 0, ..Default::default() }
    }

    #[test]
    fn texture_is_upscaled() {
        let field = generate_height_field(6, 5, 0.0).unwrap();
        let tex = generate_shade_texture(&field, Vec3::ONE, 4).unwrap();
        assert_eq!((tex.width(), tex.height()), (24, 20));
        assert_eq!(tex.as_raw().len(), 24 * 20 * 4);
    }

    #[test]
    fn zero_upscale_fails() {
        let field = flat(2, 2, 0);
        assert_eq!(
            generate_shade_texture(&field, Vec3::ONE, 0),
            Err(TerrainError::InvalidUpscale(0))
        );
    }

    #[test]
    fn flat_ground_color() {
        // normal = (0,1,0), sun = (1,1,1)/sqrt(3), height 0 => tint 0.5
        let tex = shade_texture(&flat(3, 3, 0), &undithered(1), &mut SeededRandom::default()).unwrap();
        let shade = 1.0 / 3.0f32.sqrt();
        let expected = [
            channel((96.0 + shade * 128.0) * 0.5),
            channel((32.0 + shade * 96.0) * 0.5),
            channel(shade * 96.0 * 0.5),
            255,
        ];
        for y in 0..3 {
            for x in 0..3 {
                assert_eq!(tex.pixel(x, y), Some(expected));
            }
        }
    }

    fn ramp_x(n: usize) -> HeightField {
        let samples = (0..n * n).map(|i| (i % n) as u8 * 10).collect();
        HeightField::from_samples(n, n, samples).unwrap()
    }

    fn ramp_z(n: usize) -> HeightField {
        let samples = (0..n * n).map(|i| (i / n) as u8 * 10).collect();
        HeightField::from_samples(n, n, samples).unwrap()
    }

    fn shaded(field: &HeightField, light: Vec3) -> ShadedTexture {
        let config = TerrainConfig { light_direction: light, ..undithered(1) };
        shade_texture(field, &config, &mut SeededRandom::default()).unwrap()
    }

    #[test]
    fn ramp_interior_follows_lambert_formula() {
        // h = 10x: normal ~ (-40, 2, 0), tint 0.5 + 20 * 0.007
        let tex = shaded(&ramp_x(5), Vec3::ONE);
        assert_eq!(tex.pixel(2, 2), Some([17, 0, 0, 255]));
    }

    #[test]
    fn ramp_border_clamps_neighbors() {
        let tex = shaded(&ramp_x(5), Vec3::ONE);
        // Left edge: h(-2) reads h(0) = 0, h(2) = 20
        assert_eq!(tex.pixel(0, 2), Some([15, 0, 0, 255]));
        // Right edge: h(2) = 20, h(6) reads h(4) = 40
        assert_eq!(tex.pixel(4, 2), Some([23, 0, 0, 255]));
    }

    #[test]
    fn slope_axes_are_not_swapped() {
        // Light with no z component sees only the x slope
        let light = Vec3::new(1.0, 1.0, 0.0);
        assert_eq!(shaded(&ramp_x(5), light).pixel(2, 2), Some([6, 0, 0, 255]));
        assert_eq!(shaded(&ramp_z(5), light).pixel(2, 2), Some([64, 23, 2, 255]));
    }

    #[test]
    fn upscale_replicates_cells() {
        let field = HeightField::from_samples(2, 1, vec![0, 200]).unwrap();
        let tex = shade_texture(&field, &undithered(3), &mut SeededRandom::default()).unwrap();
        for y in 0..3 {
            for x in 0..3 {
                assert_eq!(tex.pixel(x, y), tex.pixel(0, 0));
                assert_eq!(tex.pixel(x + 3, y), tex.pixel(3, 0));
            }
        }
        assert_ne!(tex.pixel(0, 0), tex.pixel(3, 0));
    }

    #[test]
    fn single_cell_uses_clamped_neighbors() {
        let tex = shade_texture(&flat(1, 1, 255), &undithered(1), &mut SeededRandom::default()).unwrap();
        // Bright high cell saturates red
        assert_eq!(tex.pixel(0, 0).map(|p| p[0]), Some(255));
    }

    #[test]
    fn dither_stays_in_range() {
        let field = flat(4, 4, 0);
        let plain = shade_texture(&field, &undithered(2), &mut SeededRandom::default()).unwrap();
        let config = TerrainConfig { upscale: 2, ..Default::default() };
        let dithered = shade_texture(&field, &config, &mut SeededRandom::default()).unwrap();

        for (a, b) in plain.as_raw().chunks(4).zip(dithered.as_raw().chunks(4)) {
            let v = b[0] - a[0];
            assert!(v < 5);
            assert_eq!(b[1].saturating_sub(a[1]), v.min(255 - a[1]));
            assert_eq!(b[3], 255);
        }
    }

    #[test]
    fn dither_saturates() {
        let field = flat(2, 2, 255);
        let config = TerrainConfig { upscale: 1, dither: 200, ..Default::default() };
        let tex = shade_texture(&field, &config, &mut SeededRandom::default()).unwrap();
        assert!(tex.as_raw().chunks(4).all(|p| p[0] == 255));
    }

    #[test]
    fn same_rng_state_same_texture() {
        let field = generate_height_field(8, 8, 3.0).unwrap();
        let a = generate_shade_texture(&field, Vec3::new(1.0, 2.0, 0.5), 2).unwrap();
        let b = generate_shade_texture(&field, Vec3::new(1.0, 2.0, 0.5), 2).unwrap();
        assert_eq!(a, b);
    }
}
