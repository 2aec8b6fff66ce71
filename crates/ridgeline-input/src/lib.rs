//! Keyboard input for the sketches: frame-coherent key state plus the
//! flight simulator's key-to-command resolution.

mod flight_bindings;
mod keyboard;

pub use flight_bindings::{FlightCommand, resolve_flight_command, resolve_orbit_command};
pub use keyboard::{KeyboardState, RawKeyEvent};
