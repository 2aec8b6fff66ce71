//! Explicit per-frame scene state.
//!
//! The sketches' rendering state (matrices, light and material parameters,
//! fog and draw-mode toggles) lives in one struct the caller owns and passes
//! `&mut` into update and draw functions.

use glam::{Mat3, Mat4, Vec3};
use serde::{Deserialize, Serialize};

use crate::camera::Camera;

/// How the terrain is rasterized.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DrawMode {
    /// Filled triangles only.
    #[default]
    Solid,
    /// Filled triangles with black edge overlay.
    SolidWithEdges,
    /// Edges only, white on the clear color.
    Wireframe,
}

/// Point light for Phong shading.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LightParams {
    /// Light position in view coordinates.
    pub position: Vec3,
    /// Ambient intensity.
    pub ambient: Vec3,
    /// Diffuse intensity.
    pub diffuse: Vec3,
    /// Specular intensity.
    pub specular: Vec3,
}

impl Default for LightParams {
    fn default() -> Self {
        Self {
            position: Vec3::new(0.0, 1.0, 3.0),
            ambient: Vec3::ZERO,
            diffuse: Vec3::ONE,
            specular: Vec3::ZERO,
        }
    }
}

/// Phong material coefficients.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MaterialParams {
    /// Ambient reflectance.
    pub ambient: Vec3,
    /// Diffuse reflectance.
    pub diffuse: Vec3,
    /// Specular reflectance.
    pub specular: Vec3,
    /// Shininess exponent.
    pub shininess: f32,
}

impl MaterialParams {
    /// The terrain's sandy diffuse material.
    pub fn terrain() -> Self {
        Self {
            ambient: Vec3::ONE,
            diffuse: Vec3::new(205.0, 163.0, 63.0) / 255.0,
            specular: Vec3::ZERO,
            shininess: 23.0,
        }
    }

    /// Flat black, for edge overlays on top of filled triangles.
    pub fn edge_black() -> Self {
        Self {
            diffuse: Vec3::ZERO,
            ..Self::terrain()
        }
    }

    /// Flat white, for pure wireframe rendering.
    pub fn edge_white() -> Self {
        Self {
            diffuse: Vec3::ONE,
            ..Self::terrain()
        }
    }
}

/// All mutable rendering state for one sketch frame.
#[derive(Clone, Debug)]
pub struct SceneState {
    /// Combined model-view matrix.
    pub model_view: Mat4,
    /// Projection matrix.
    pub projection: Mat4,
    /// Normal matrix derived from `model_view`.
    pub normal: Mat3,
    /// The scene light.
    pub light: LightParams,
    /// Material for the next draw.
    pub material: MaterialParams,
    /// Height range of the terrain, for elevation-based shading.
    pub height_range: (f32, f32),
    /// Distance fog toggle.
    pub fog_enabled: bool,
    /// Current rasterization mode.
    pub draw_mode: DrawMode,
}

impl SceneState {
    /// Scene state for a camera and a model transform, with default light
    /// and terrain material.
    pub fn new(camera: &Camera, model: Mat4) -> Self {
        let model_view = camera.view_matrix() * model;
        Self {
            model_view,
            projection: camera.projection_matrix(),
            normal: Camera::normal_matrix(model_view),
            light: LightParams::default(),
            material: MaterialParams::terrain(),
            height_range: (0.0, 0.0),
            fog_enabled: false,
            draw_mode: DrawMode::Solid,
        }
    }

    /// Refresh the matrices from the camera and model transform, leaving the
    /// light, material, and toggles alone.
    pub fn update_matrices(&mut self, camera: &Camera, model: Mat4) {
        self.model_view = camera.view_matrix() * model;
        self.projection = camera.projection_matrix();
        self.normal = Camera::normal_matrix(self.model_view);
    }

    /// Flip the fog toggle, returning the new value.
    pub fn toggle_fog(&mut self) -> bool {
        self.fog_enabled = !self.fog_enabled;
        self.fog_enabled
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matrices_follow_the_camera() {
        let mut camera = Camera::flight_default(1.0);
        let mut state = SceneState::new(&camera, Mat4::IDENTITY);
        let before = state.model_view;
        camera.position.x += 1.0;
        state.update_matrices(&camera, Mat4::IDENTITY);
        assert_ne!(state.model_view, before);
        assert_eq!(state.projection, camera.projection_matrix());
    }

    #[test]
    fn normal_matrix_tracks_model_view() {
        let camera = Camera::flight_default(1.0);
        let model = Mat4::from_rotation_x((-75f32).to_radians());
        let state = SceneState::new(&camera, model);
        let expected = Camera::normal_matrix(state.model_view);
        assert_eq!(state.normal, expected);
    }

    #[test]
    fn fog_toggle_round_trips() {
        let camera = Camera::flight_default(1.0);
        let mut state = SceneState::new(&camera, Mat4::IDENTITY);
        assert!(state.toggle_fog());
        assert!(!state.toggle_fog());
    }

    #[test]
    fn terrain_material_matches_the_palette() {
        let m = MaterialParams::terrain();
        assert!((m.diffuse.x - 205.0 / 255.0).abs() < 1e-6);
        assert_eq!(m.shininess, 23.0);
    }
}
