//! Orbit controller and shading mode for the skybox mesh viewer.

use glam::Mat4;

/// How the viewed mesh samples the environment cubemap.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ShadingMode {
    /// Mirror the environment.
    #[default]
    Reflective,
    /// Bend view rays through the mesh.
    Refractive,
}

impl ShadingMode {
    /// Flip between reflective and refractive.
    pub fn toggle(&mut self) {
        *self = match self {
            ShadingMode::Reflective => ShadingMode::Refractive,
            ShadingMode::Refractive => ShadingMode::Reflective,
        };
    }
}

/// Two-angle orbit around the viewed mesh, driven by the arrow/WASD keys.
#[derive(Clone, Debug)]
pub struct OrbitController {
    /// Rotation about the x axis, degrees.
    pub x_deg: f32,
    /// Rotation about the y axis, degrees.
    pub y_deg: f32,
    /// Degrees added per input tick.
    pub rate_deg: f32,
}

impl OrbitController {
    /// The viewer's starting orientation.
    pub fn new() -> Self {
        Self {
            x_deg: 15.0,
            y_deg: 30.0,
            rate_deg: 0.2,
        }
    }

    /// Tilt up (negative) or down (positive) by one tick.
    pub fn tilt(&mut self, sign: f32) {
        self.x_deg += sign * self.rate_deg;
    }

    /// Spin left (negative) or right (positive) by one tick.
    pub fn spin(&mut self, sign: f32) {
        self.y_deg += sign * self.rate_deg;
    }

    /// Model rotation for the current angles, x tilt applied before y spin.
    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_rotation_x(self.x_deg.to_radians())
            * Mat4::from_rotation_y(self.y_deg.to_radians())
    }
}

impl Default for OrbitController {
    fn default() -> Self {
        Self::new()
    }
}
