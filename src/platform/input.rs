//! Keyboard state
//!
//! Key events arrive between ticks; the tick reads a snapshot.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::sim::TickInput;

/// Logical movement direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// Key identifiers bound to each direction (values of `KeyboardEvent.key`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Keymap {
    pub up: Vec<String>,
    pub down: Vec<String>,
    pub left: Vec<String>,
    pub right: Vec<String>,
}

impl Default for Keymap {
    fn default() -> Self {
        Self {
            up: vec!["w".to_string()],
            down: vec!["s".to_string()],
            left: vec!["a".to_string()],
            right: vec!["d".to_string()],
        }
    }
}

impl Keymap {
    /// Direction bound to `key`, if any
    pub fn direction(&self, key: &str) -> Option<Direction> {
        let bound = |keys: &[String]| keys.iter().any(|k| k == key);
        if bound(&self.up) {
            Some(Direction::Up)
        } else if bound(&self.down) {
            Some(Direction::Down)
        } else if bound(&self.left) {
            Some(Direction::Left)
        } else if bound(&self.right) {
            Some(Direction::Right)
        } else {
            None
        }
    }
}

/// Held/released state of every bound key
#[derive(Debug, Clone, Default)]
pub struct InputState {
    keymap: Keymap,
    held: HashMap<String, bool>,
}

impl InputState {
    pub fn new(keymap: Keymap) -> Self {
        Self {
            keymap,
            held: HashMap::new(),
        }
    }

    /// Record a key press or release
    ///
    /// Returns false (and records nothing) for keys with no binding.
    pub fn handle_key(&mut self, key: &str, pressed: bool) -> bool {
        if self.keymap.direction(key).is_none() {
            return false;
        }
        self.held.insert(key.to_string(), pressed);
        true
    }

    /// Release everything (focus loss)
    pub fn release_all(&mut self) {
        self.held.clear();
    }

    /// Whether any key bound to `direction` is held
    pub fn is_held(&self, direction: Direction) -> bool {
        self.held
            .iter()
            .any(|(key, &down)| down && self.keymap.direction(key) == Some(direction))
    }

    /// Snapshot for the next tick
    pub fn tick_input(&self) -> TickInput {
        TickInput {
            up: self.is_held(Direction::Up),
            down: self.is_held(Direction::Down),
            left: self.is_held(Direction::Left),
            right: self.is_held(Direction::Right),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_bindings_are_wasd() {
        let keymap = Keymap::default();
        assert_eq!(keymap.direction("w"), Some(Direction::Up));
        assert_eq!(keymap.direction("a"), Some(Direction::Left));
        assert_eq!(keymap.direction("s"), Some(Direction::Down));
        assert_eq!(keymap.direction("d"), Some(Direction::Right));
        assert_eq!(keymap.direction("W"), None);
    }

    #[test]
    fn test_press_and_release() {
        let mut input = InputState::default();
        assert!(input.handle_key("w", true));
        assert!(input.handle_key("d", true));
        assert_eq!(
            input.tick_input(),
            TickInput {
                up: true,
                right: true,
                ..Default::default()
            }
        );
        input.handle_key("w", false);
        assert_eq!(
            input.tick_input(),
            TickInput {
                right: true,
                ..Default::default()
            }
        );
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        let mut input = InputState::default();
        assert!(!input.handle_key("Escape", true));
        assert!(!input.handle_key("q", true));
        assert_eq!(input.tick_input(), TickInput::default());
    }

    #[test]
    fn test_shared_direction_needs_all_keys_released() {
        let keymap = Keymap {
            up: vec!["w".into(), "ArrowUp".into()],
            ..Default::default()
        };
        let mut input = InputState::new(keymap);
        input.handle_key("w", true);
        input.handle_key("ArrowUp", true);
        input.handle_key("w", false);
        assert!(input.is_held(Direction::Up));
        input.handle_key("ArrowUp", false);
        assert!(!input.is_held(Direction::Up));
    }

    #[test]
    fn test_release_all() {
        let mut input = InputState::default();
        input.handle_key("s", true);
        input.release_all();
        assert_eq!(input.tick_input(), TickInput::default());
    }
}
