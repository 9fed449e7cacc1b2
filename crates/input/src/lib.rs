//! Terminal input module (simulation-facing).
//!
//! Maps `crossterm` key events onto abstract [`crate::types::GameAction`]
//! intents and buffers them in a bounded queue that the game loop drains at
//! tick start. The simulation never sees key codes; which physical keys mean
//! "move left"/"move right" is decided by the [`KeyBindings`] handed in at
//! construction.

pub mod map;
pub mod queue;

pub use lane_rush_types as types;

pub use map::{map_key, should_quit, ControlScheme, KeyBindings};
pub use queue::IntentQueue;
