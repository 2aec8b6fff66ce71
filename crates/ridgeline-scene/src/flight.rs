//! Quaternion flight controller for the terrain simulator.
//!
//! Pitch rotates about the camera's right axis (`view_dir × up`), roll about
//! the view direction; both rotations are applied to `up` and `view_dir`
//! together so the frame never shears. Speed is negative (the plane flies
//! along `view_dir`) and throttle-down stops at [`MIN_SPEED`] so the plane
//! cannot fly backwards.

use glam::Quat;

use crate::camera::Camera;

/// Roll rate per tick, in degrees.
pub const ROLL_RATE_DEG: f32 = 0.15;
/// Pitch rate per tick, in degrees. Gentler than roll.
pub const PITCH_RATE_DEG: f32 = 0.05;
/// Speed change per throttle tick.
pub const SPEED_INCREMENT: f32 = 0.0001;
/// Slowest allowed forward speed. Speeds are negative; throttling down stops here.
pub const MIN_SPEED: f32 = -0.0003;

/// Starting speed of the simulator.
const INITIAL_SPEED: f32 = -0.0005;

/// Flight state: the current speed plus the rotation operations that steer a
/// [`Camera`].
#[derive(Debug, Clone)]
pub struct FlightController {
    speed: f32,
}

impl FlightController {
    /// Start at the simulator's initial cruise speed.
    pub fn new() -> Self {
        Self {
            speed: INITIAL_SPEED,
        }
    }

    /// Current signed speed (negative = forward).
    pub fn speed(&self) -> f32 {
        self.speed
    }

    /// Pitch the camera by `radians` about its right axis.
    pub fn pitch(&self, camera: &mut Camera, radians: f32) {
        let right = camera.view_dir.cross(camera.up).normalize();
        let rotation = Quat::from_axis_angle(right, radians);
        camera.up = rotation * camera.up;
        camera.view_dir = rotation * camera.view_dir;
    }

    /// Roll the camera by `radians` about its view direction.
    pub fn roll(&self, camera: &mut Camera, radians: f32) {
        let rotation = Quat::from_axis_angle(camera.view_dir.normalize(), radians);
        camera.up = rotation * camera.up;
        camera.view_dir = rotation * camera.view_dir;
    }

    /// Throttle up by one increment.
    pub fn accelerate(&mut self) {
        self.speed -= SPEED_INCREMENT;
    }

    /// Throttle down by one increment, clamped so the plane keeps moving
    /// forward.
    pub fn decelerate(&mut self) {
        if self.speed < MIN_SPEED {
            self.speed += SPEED_INCREMENT;
        }
    }

    /// Advance the camera along its view direction by the current speed.
    pub fn advance(&self, camera: &mut Camera) {
        camera.position += camera.view_dir * self.speed;
    }
}

impl Default for FlightController {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    fn camera() -> Camera {
        Camera::flight_default(1.0)
    }

    #[test]
    fn pitch_preserves_the_camera_frame() {
        let flight = FlightController::new();
        let mut cam = camera();
        let (dir_len, up_len) = (cam.view_dir.length(), cam.up.length());
        // The starting frame is deliberately not orthogonal (the view tilts
        // down); pitching must preserve the angle between dir and up, not
        // square it up.
        let cos_before = cam.view_dir.normalize().dot(cam.up.normalize());
        for _ in 0..500 {
            flight.pitch(&mut cam, PITCH_RATE_DEG.to_radians());
        }
        assert!((cam.view_dir.length() - dir_len).abs() < 1e-3);
        assert!((cam.up.length() - up_len).abs() < 1e-3);
        let cos_after = cam.view_dir.normalize().dot(cam.up.normalize());
        assert!((cos_after - cos_before).abs() < 1e-2);
    }

    #[test]
    fn roll_leaves_the_view_direction_alone() {
        let flight = FlightController::new();
        let mut cam = camera();
        let dir_before = cam.view_dir;
        flight.roll(&mut cam, 0.5);
        assert!((cam.view_dir - dir_before).length() < 1e-5);
        assert!((cam.up - Vec3::Y).length() > 1e-3);
    }

    #[test]
    fn full_roll_returns_to_start() {
        let flight = FlightController::new();
        let mut cam = camera();
        let up_before = cam.up;
        flight.roll(&mut cam, std::f32::consts::TAU);
        assert!((cam.up - up_before).length() < 1e-4);
    }

    #[test]
    fn throttle_down_never_reverses() {
        let mut flight = FlightController::new();
        for _ in 0..100 {
            flight.decelerate();
        }
        assert!(flight.speed() <= MIN_SPEED);
    }

    #[test]
    fn throttle_up_increases_forward_speed() {
        let mut flight = FlightController::new();
        let before = flight.speed();
        flight.accelerate();
        assert!(flight.speed() < before);
    }

    #[test]
    fn advance_moves_along_the_view_direction() {
        let flight = FlightController::new();
        let mut cam = camera();
        let start = cam.position;
        flight.advance(&mut cam);
        let moved = cam.position - start;
        // Speed is negative, so motion opposes view_dir in sign but stays on
        // its line.
        assert!(moved.cross(cam.view_dir).length() < 1e-6);
        assert!(moved.dot(cam.view_dir) < 0.0);
    }
}
