// camera.rs - Perspective camera and pick rays
//
// Right-handed, OpenGL clip space (NDC z in [-1, 1]) to match the WebGL
// renderer consuming the pick results.

use glam::{Mat4, Vec2, Vec3};

use super::Ray;

#[derive(Clone, Debug, PartialEq)]
pub struct Camera {
    pub position: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub fov_y_degrees: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            position: Vec3::new(-1000.0, 1000.0, -1400.0),
            target: Vec3::new(100.0, 1010.0, 2300.0),
            up: Vec3::Y,
            fov_y_degrees: 60.0,
            aspect: 1.0,
            near: 1.0,
            far: 50000.0,
        }
    }
}

impl Camera {
    pub fn looking_at(position: Vec3, target: Vec3) -> Self {
        Self { position, target, ..Default::default() }
    }

    /// Ignores degenerate aspect ratios (zero-sized canvas)
    pub fn set_aspect(&mut self, aspect: f32) {
        if aspect.is_finite() && aspect > 0.0 {
            self.aspect = aspect;
        } else {
            log::warn!("ignoring camera aspect {aspect}");
        }
    }

    pub fn view(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.target, self.up)
    }

    pub fn projection(&self) -> Mat4 {
        Mat4::perspective_rh_gl(self.fov_y_degrees.to_radians(), self.aspect, self.near, self.far)
    }

    /// Ray from the eye through a point in normalized device coordinates.
    /// None when the point lies outside the viewport.
    pub fn ray_through(&self, ndc: Vec2) -> Option<Ray> {
        if !(-1.0..=1.0).contains(&ndc.x) || !(-1.0..=1.0).contains(&ndc.y) {
            return None;
        }
        let inv = (self.projection() * self.view()).inverse();
        let point = inv.project_point3(ndc.extend(0.5));
        let direction = (point - self.position).try_normalize()?;
        Some(Ray { origin: self.position, direction })
    }
}
