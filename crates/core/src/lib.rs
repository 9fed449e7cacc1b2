//! Core simulation module - pure, deterministic, and testable
//!
//! This module contains all the game rules, state management, and simulation
//! logic. It has **zero dependencies** on UI, terminal I/O, or the system
//! clock, making it:
//!
//! - **Deterministic**: same vehicle kind and seed produce identical sessions
//! - **Testable**: every tick is a pure function of the prior state
//! - **Portable**: runs headless or behind any renderer
//!
//! # Module structure
//!
//! - [`road`]: lane geometry of the four-lane field
//! - [`vehicle`]: lane-change state machine with tilt and bounce animation
//! - [`obstacle`]: a single descending entity with spawn-frozen speed
//! - [`spawner`]: seeded random lane selection at a fixed cadence
//! - [`collision`]: axis-aligned bounding-box overlap predicate
//! - [`game_state`]: per-tick orchestration, scoring, leveling, termination
//! - [`snapshot`]: allocation-free world view handed to the renderer
//! - [`rng`]: seeded linear congruential generator

pub mod collision;
pub mod game_state;
pub mod obstacle;
pub mod rng;
pub mod road;
pub mod snapshot;
pub mod spawner;
pub mod vehicle;

pub use lane_rush_types as types;

pub use collision::collides;
pub use game_state::GameState;
pub use obstacle::Obstacle;
pub use rng::SimpleRng;
pub use snapshot::{ObstacleView, VehicleView, WorldSnapshot, MAX_SNAPSHOT_OBSTACLES};
pub use spawner::ObstacleSpawner;
pub use vehicle::Vehicle;
