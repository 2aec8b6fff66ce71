//! Look-at camera with perspective projection.

use glam::{Mat3, Mat4, Vec3};

/// A free camera described by position, view direction, and up vector.
///
/// The flight controller rotates `view_dir` and `up` together, so the two
/// stay orthogonal; the view matrix is a plain look-at along `view_dir`.
#[derive(Debug, Clone)]
pub struct Camera {
    /// Position in world coordinates.
    pub position: Vec3,
    /// Direction of the view (not required to be unit length).
    pub view_dir: Vec3,
    /// Up vector for view matrix creation.
    pub up: Vec3,
    /// Vertical field of view in radians.
    pub fov_y: f32,
    /// Width / height.
    pub aspect_ratio: f32,
    /// Near clip plane distance.
    pub near: f32,
    /// Far clip plane distance.
    pub far: f32,
}

impl Camera {
    /// The flight simulator's starting view: slightly above the terrain,
    /// looking gently downward.
    pub fn flight_default(aspect_ratio: f32) -> Self {
        Self {
            position: Vec3::new(0.0, 0.2, -0.3),
            view_dir: Vec3::new(0.0, -0.123, -1.0),
            up: Vec3::new(0.0, 1.0, 0.0),
            fov_y: 45_f32.to_radians(),
            aspect_ratio,
            near: 0.1,
            far: 200.0,
        }
    }

    /// Compute the view matrix, looking from `position` along `view_dir`.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.position + self.view_dir, self.up)
    }

    /// Compute the perspective projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov_y, self.aspect_ratio, self.near, self.far)
    }

    /// Normal matrix for a model-view matrix: inverse transpose of its
    /// upper-left 3×3, correct for lighting under non-uniform transforms.
    pub fn normal_matrix(model_view: Mat4) -> Mat3 {
        Mat3::from_mat4(model_view).inverse().transpose()
    }
}
