//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - Keyboard input state
//! - HUD output (score text, game-over signal)

pub mod hud;
pub mod input;

pub use hud::{Hud, LogHud};
pub use input::{Direction, InputState, Keymap};
