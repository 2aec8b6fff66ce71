//! Frame-coherent keyboard state.
//!
//! Accumulates winit key events during a frame and answers, for any physical
//! key: is it held, did it go down this frame, did it come up this frame.
//! Physical key codes are used so the flight controls sit under the same
//! fingers on every keyboard layout.

use std::collections::HashSet;

use winit::event::{ElementState, KeyEvent};
use winit::keyboard::PhysicalKey;

/// Platform-independent key event, convenient for tests and scripted demos.
#[derive(Debug, Clone, Copy)]
pub struct RawKeyEvent {
    /// The physical key involved.
    pub key: PhysicalKey,
    /// Pressed or released.
    pub state: ElementState,
    /// OS key-repeat event; ignored by the tracker.
    pub repeat: bool,
}

/// Per-frame keyboard state.
///
/// Feed every key event to [`process_event`](Self::process_event) (or
/// [`process_raw`](Self::process_raw)), poll with the query methods, and
/// call [`end_frame`](Self::end_frame) once per frame to drop the
/// just-pressed/just-released transients.
#[derive(Debug, Clone, Default)]
pub struct KeyboardState {
    held: HashSet<PhysicalKey>,
    pressed_this_frame: HashSet<PhysicalKey>,
    released_this_frame: HashSet<PhysicalKey>,
}

impl KeyboardState {
    /// No keys held, no transients.
    pub fn new() -> Self {
        Self::default()
    }

    /// Update from a winit [`KeyEvent`].
    pub fn process_event(&mut self, event: &KeyEvent) {
        self.process_raw(RawKeyEvent {
            key: event.physical_key,
            state: event.state,
            repeat: event.repeat,
        });
    }

    /// Update from a [`RawKeyEvent`]. Repeat events are dropped so holding a
    /// key reads as one press followed by a steady hold.
    pub fn process_raw(&mut self, event: RawKeyEvent) {
        if event.repeat {
            return;
        }
        match event.state {
            ElementState::Pressed => {
                if self.held.insert(event.key) {
                    self.pressed_this_frame.insert(event.key);
                }
            }
            ElementState::Released => {
                self.held.remove(&event.key);
                self.released_this_frame.insert(event.key);
            }
        }
    }

    /// `true` while the key is held down.
    pub fn is_held(&self, key: PhysicalKey) -> bool {
        self.held.contains(&key)
    }

    /// `true` only on the frame the key went down.
    pub fn just_pressed(&self, key: PhysicalKey) -> bool {
        self.pressed_this_frame.contains(&key)
    }

    /// `true` only on the frame the key came up.
    pub fn just_released(&self, key: PhysicalKey) -> bool {
        self.released_this_frame.contains(&key)
    }

    /// Drop the per-frame transients. Call once at the end of each frame;
    /// held state carries over.
    pub fn end_frame(&mut self) {
        self.pressed_this_frame.clear();
        self.released_this_frame.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use winit::keyboard::KeyCode;

    fn press(key: KeyCode) -> RawKeyEvent {
        RawKeyEvent {
            key: PhysicalKey::Code(key),
            state: ElementState::Pressed,
            repeat: false,
        }
    }

    fn release(key: KeyCode) -> RawKeyEvent {
        RawKeyEvent {
            key: PhysicalKey::Code(key),
            state: ElementState::Released,
            repeat: false,
        }
    }

    #[test]
    fn press_hold_release_cycle() {
        let mut kb = KeyboardState::new();
        kb.process_raw(press(KeyCode::KeyW));
        assert!(kb.is_held(PhysicalKey::Code(KeyCode::KeyW)));
        assert!(kb.just_pressed(PhysicalKey::Code(KeyCode::KeyW)));

        kb.end_frame();
        assert!(kb.is_held(PhysicalKey::Code(KeyCode::KeyW)));
        assert!(!kb.just_pressed(PhysicalKey::Code(KeyCode::KeyW)));

        kb.process_raw(release(KeyCode::KeyW));
        assert!(!kb.is_held(PhysicalKey::Code(KeyCode::KeyW)));
        assert!(kb.just_released(PhysicalKey::Code(KeyCode::KeyW)));
    }

    #[test]
    fn repeats_are_ignored() {
        let mut kb = KeyboardState::new();
        kb.process_raw(press(KeyCode::KeyA));
        kb.end_frame();
        kb.process_raw(RawKeyEvent {
            repeat: true,
            ..press(KeyCode::KeyA)
        });
        assert!(kb.is_held(PhysicalKey::Code(KeyCode::KeyA)));
        assert!(!kb.just_pressed(PhysicalKey::Code(KeyCode::KeyA)));
    }

    #[test]
    fn duplicate_press_is_not_a_new_press() {
        let mut kb = KeyboardState::new();
        kb.process_raw(press(KeyCode::KeyZ));
        kb.end_frame();
        kb.process_raw(press(KeyCode::KeyZ));
        assert!(!kb.just_pressed(PhysicalKey::Code(KeyCode::KeyZ)));
    }
}
