//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making
//! them usable in any context (simulation core, input mapping, rendering).
//!
//! # Play field
//!
//! The field is a fixed 600x600 pixel area. A 100 px grass verge on each side
//! leaves a 400 px road divided into 4 equal lanes of 100 px, indexed 0-3.
//! The player starts in lane 1.
//!
//! # Game timing constants
//!
//! Cadences are expressed in fixed 16 ms ticks (~60 Hz):
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Fixed timestep interval |
//! | `SCORE_INTERVAL_TICKS` | 60 | One score point per interval |
//! | `SPAWN_INTERVAL_TICKS` | 80 | One obstacle spawn per interval |
//! | `LEVEL_UP_SCORE_STEP` | 10 | Level up every N score points |
//! | `LEVEL_BANNER_MS` | 2000 | Level-up notification lifetime |
//!
//! # Difficulty
//!
//! Obstacles spawn with the session's current base speed, starting at 2.0
//! px/tick and rising by 1.0 on every level-up. Each obstacle keeps the speed
//! it was spawned with for its whole lifetime.
//!
//! # Examples
//!
//! ```
//! use lane_rush_types::{Rect, VehicleKind};
//!
//! let kind = VehicleKind::from_str("Truck").unwrap();
//! assert_eq!(kind, VehicleKind::Truck);
//! assert_eq!(kind.spec().width, 80.0);
//!
//! // Edge contact is not a collision.
//! let a = Rect::new(0.0, 0.0, 50.0, 100.0);
//! let b = Rect::new(50.0, 0.0, 50.0, 100.0);
//! assert!(!a.intersects(&b));
//! ```

/// Play field width in pixels.
pub const FIELD_WIDTH: f64 = 600.0;
/// Play field height in pixels; obstacles past this edge are discarded.
pub const FIELD_HEIGHT: f64 = 600.0;
/// Grass verge width on each side of the road.
pub const ROAD_MARGIN: f64 = 100.0;
/// Number of lanes on the road.
pub const LANE_COUNT: u8 = 4;
/// Highest valid lane index.
pub const MAX_LANE: u8 = LANE_COUNT - 1;
/// Width of a single lane.
pub const LANE_WIDTH: f64 = (FIELD_WIDTH - 2.0 * ROAD_MARGIN) / LANE_COUNT as f64;
/// Lane the player vehicle starts in.
pub const INITIAL_LANE: u8 = 1;

/// Fixed timestep interval in milliseconds (~60 FPS).
pub const TICK_MS: u32 = 16;
/// Ticks between score increments.
pub const SCORE_INTERVAL_TICKS: u64 = 60;
/// Ticks between obstacle spawns.
pub const SPAWN_INTERVAL_TICKS: u64 = 80;
/// Score points per level-up.
pub const LEVEL_UP_SCORE_STEP: u32 = 10;
/// Lifetime of the transient level-up notification.
pub const LEVEL_BANNER_MS: u32 = 2000;

/// Obstacle speed for a fresh session, in px per tick.
pub const BASE_OBSTACLE_SPEED: f64 = 2.0;
/// Base speed increase per level-up.
pub const SPEED_PER_LEVEL: f64 = 1.0;
/// Obstacle width in pixels.
pub const OBSTACLE_WIDTH: f64 = 50.0;
/// Obstacle height in pixels.
pub const OBSTACLE_HEIGHT: f64 = 100.0;
/// Vertical spawn position, above the visible field.
pub const OBSTACLE_SPAWN_Y: f64 = -100.0;
/// Number of cosmetic obstacle styles the renderer distinguishes.
pub const OBSTACLE_STYLES: u32 = 4;

/// Rotation tilt while sliding between lanes, in degrees.
pub const TILT_DEGREES: f64 = 20.0;
/// Rotation interpolation rate in degrees per tick.
pub const ROTATION_RATE: f64 = 2.0;
/// Vertical bounce amplitude in pixels.
pub const BOUNCE_AMPLITUDE: f64 = 5.0;
/// Bounce angular frequency in radians per simulated millisecond.
pub const BOUNCE_FREQUENCY: f64 = 0.005;

/// Cosmetic road scroll advance per rendered frame (renderer-owned).
pub const ROAD_SCROLL_STEP: f64 = 5.0;

/// Player vehicle variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VehicleKind {
    Bike,
    Car,
    Truck,
}

/// Per-variant constant table: dimensions, agility, and vertical baseline.
///
/// The slide speed models the mass/agility tradeoff: the bike changes lanes
/// quickly, the truck slowly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VehicleSpec {
    pub width: f64,
    pub height: f64,
    /// Horizontal px per tick while sliding between lanes.
    pub slide_speed: f64,
    /// Fixed vertical baseline of the vehicle's top edge.
    pub start_y: f64,
}

impl VehicleKind {
    /// Parse a variant selector (case-insensitive).
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "bike" => Some(VehicleKind::Bike),
            "car" => Some(VehicleKind::Car),
            "truck" => Some(VehicleKind::Truck),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            VehicleKind::Bike => "bike",
            VehicleKind::Car => "car",
            VehicleKind::Truck => "truck",
        }
    }

    /// The variant's constant table.
    pub const fn spec(&self) -> VehicleSpec {
        match self {
            VehicleKind::Bike => VehicleSpec {
                width: 30.0,
                height: 60.0,
                slide_speed: 8.0,
                start_y: 500.0,
            },
            VehicleKind::Car => VehicleSpec {
                width: 50.0,
                height: 100.0,
                slide_speed: 5.0,
                start_y: 480.0,
            },
            VehicleKind::Truck => VehicleSpec {
                width: 80.0,
                height: 150.0,
                slide_speed: 3.0,
                start_y: 450.0,
            },
        }
    }
}

/// Abstract intents delivered to the simulation.
///
/// Every intent delivered in an invalid state is silently absorbed, never an
/// error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    MoveLeft,
    MoveRight,
    Pause,
    Start,
    Restart,
}

/// Axis-aligned bounding box in field coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl Rect {
    pub const fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self { x, y, w, h }
    }

    pub fn right(&self) -> f64 {
        self.x + self.w
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.h
    }

    /// AABB overlap test with strict inequalities on both axes.
    ///
    /// Rectangles that merely touch along an edge do not intersect.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }
}
