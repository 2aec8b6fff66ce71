//! Scene state and camera controllers for the coursework sketches.
//!
//! All per-frame rendering state lives in an explicit [`SceneState`] owned
//! by the caller and passed by reference into update and draw functions;
//! nothing in this crate is a global.

mod camera;
mod flight;
mod orbit;
mod state;

pub use camera::Camera;
pub use flight::{FlightController, MIN_SPEED, PITCH_RATE_DEG, ROLL_RATE_DEG, SPEED_INCREMENT};
pub use orbit::{OrbitController, ShadingMode};
pub use state::{DrawMode, LightParams, MaterialParams, SceneState};
