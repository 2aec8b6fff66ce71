//! Key bindings for the flight simulator and the skybox viewer.
//!
//! The simulator polls held keys once per tick and acts on at most one
//! command, resolved in a fixed priority order (pitch before roll before
//! throttle). The skybox viewer reuses the same WASD keys for its orbit.

use winit::keyboard::{KeyCode, PhysicalKey};

use crate::keyboard::KeyboardState;

/// One steering command per simulation tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FlightCommand {
    /// Nose down (`S`).
    PitchDown,
    /// Nose up (`W`).
    PitchUp,
    /// Bank right (`D`).
    RollRight,
    /// Bank left (`A`).
    RollLeft,
    /// Throttle up (`Z`).
    Accelerate,
    /// Throttle down (`X`).
    Decelerate,
}

fn held(keyboard: &KeyboardState, key: KeyCode) -> bool {
    keyboard.is_held(PhysicalKey::Code(key))
}

/// Resolve the held keys into at most one [`FlightCommand`].
///
/// Priority order: `S`, `W`, `D`, `A`, `Z`, `X`. Holding several keys at
/// once acts on the highest-priority one only.
pub fn resolve_flight_command(keyboard: &KeyboardState) -> Option<FlightCommand> {
    if held(keyboard, KeyCode::KeyS) {
        Some(FlightCommand::PitchDown)
    } else if held(keyboard, KeyCode::KeyW) {
        Some(FlightCommand::PitchUp)
    } else if held(keyboard, KeyCode::KeyD) {
        Some(FlightCommand::RollRight)
    } else if held(keyboard, KeyCode::KeyA) {
        Some(FlightCommand::RollLeft)
    } else if held(keyboard, KeyCode::KeyZ) {
        Some(FlightCommand::Accelerate)
    } else if held(keyboard, KeyCode::KeyX) {
        Some(FlightCommand::Decelerate)
    } else {
        None
    }
}

/// Resolve the held keys into an orbit `(tilt, spin)` tick for the skybox
/// viewer: `S`/`W` tilt down/up, `D`/`A` spin right/left. Same priority
/// scheme as the flight commands.
pub fn resolve_orbit_command(keyboard: &KeyboardState) -> (f32, f32) {
    if held(keyboard, KeyCode::KeyS) {
        (1.0, 0.0)
    } else if held(keyboard, KeyCode::KeyW) {
        (-1.0, 0.0)
    } else if held(keyboard, KeyCode::KeyD) {
        (0.0, 1.0)
    } else if held(keyboard, KeyCode::KeyA) {
        (0.0, -1.0)
    } else {
        (0.0, 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keyboard::RawKeyEvent;
    use winit::event::ElementState;

    fn keyboard_with(keys: &[KeyCode]) -> KeyboardState {
        let mut kb = KeyboardState::new();
        for &key in keys {
            kb.process_raw(RawKeyEvent {
                key: PhysicalKey::Code(key),
                state: ElementState::Pressed,
                repeat: false,
            });
        }
        kb
    }

    #[test]
    fn single_keys_map_to_their_commands() {
        let cases = [
            (KeyCode::KeyS, FlightCommand::PitchDown),
            (KeyCode::KeyW, FlightCommand::PitchUp),
            (KeyCode::KeyD, FlightCommand::RollRight),
            (KeyCode::KeyA, FlightCommand::RollLeft),
            (KeyCode::KeyZ, FlightCommand::Accelerate),
            (KeyCode::KeyX, FlightCommand::Decelerate),
        ];
        for (key, command) in cases {
            assert_eq!(
                resolve_flight_command(&keyboard_with(&[key])),
                Some(command)
            );
        }
    }

    #[test]
    fn no_keys_means_no_command() {
        assert_eq!(resolve_flight_command(&KeyboardState::new()), None);
    }

    #[test]
    fn pitch_wins_over_roll_and_throttle() {
        let kb = keyboard_with(&[KeyCode::KeyS, KeyCode::KeyD, KeyCode::KeyZ]);
        assert_eq!(resolve_flight_command(&kb), Some(FlightCommand::PitchDown));
    }

    #[test]
    fn orbit_resolution_picks_one_axis() {
        let kb = keyboard_with(&[KeyCode::KeyW, KeyCode::KeyD]);
        assert_eq!(resolve_orbit_command(&kb), (-1.0, 0.0));
        assert_eq!(resolve_orbit_command(&KeyboardState::new()), (0.0, 0.0));
    }
}
